//! Ingestion types

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// A single price observation read from the input file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MarketDataRecord {
    /// Local wall-clock time of the reading (no timezone)
    timestamp: NaiveDateTime,
    /// Market price (exact decimal)
    price: Decimal,
}

impl MarketDataRecord {
    /// Create a new record
    pub fn new(timestamp: NaiveDateTime, price: Decimal) -> Self {
        Self { timestamp, price }
    }

    /// Time of the reading
    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    /// Price of the reading
    pub fn price(&self) -> Decimal {
        self.price
    }
}

/// CSV ingestion errors
#[derive(Debug, Error)]
pub enum IngestError {
    /// Path does not resolve to a readable file
    #[error("CSV file not found: {}", .path.display())]
    FileNotFound { path: PathBuf },
    /// Header row is missing one or both required labels
    #[error("Invalid CSV header: {0}")]
    InvalidHeader(String),
    /// Any other failure while scanning rows
    #[error("Unexpected error reading CSV file: {0}")]
    MalformedContent(String),
}
