//! Market data service
//!
//! Bundles ingestion and analytics behind one trait so front ends can be
//! wired against a stub in tests.

use crate::analytics::{self, AnalyticsError, FixedCountWindow, MarketSummary};
use crate::config::Config;
use crate::ingest::{CsvIngestor, IngestError, MarketDataRecord};
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use std::path::Path;
use thiserror::Error;

/// Any failure of the ingest-then-analyse pipeline
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Ingest(#[from] IngestError),
    #[error(transparent)]
    Analytics(#[from] AnalyticsError),
}

/// Trait for market data service implementations
pub trait MarketDataService: Send + Sync {
    /// Read all records from a price file, in file order
    fn read_data_from_csv(&self, path: &Path) -> Result<Vec<MarketDataRecord>, IngestError>;

    /// Lowest price
    fn minimum_price(&self, data: &[MarketDataRecord]) -> Result<Decimal, AnalyticsError>;

    /// Highest price
    fn maximum_price(&self, data: &[MarketDataRecord]) -> Result<Decimal, AnalyticsError>;

    /// Mean price
    fn average_price(&self, data: &[MarketDataRecord]) -> Result<Decimal, AnalyticsError>;

    /// Most expensive hour as `(price, start)`
    fn most_expensive_hour_window(
        &self,
        data: &[MarketDataRecord],
    ) -> Result<(Decimal, NaiveDateTime), AnalyticsError>;

    /// Read a file and compute every aggregate
    fn summarize(&self, path: &Path) -> Result<MarketSummary, PipelineError>;
}

/// CSV-backed service
#[derive(Debug, Clone)]
pub struct CsvMarketDataService {
    ingestor: CsvIngestor,
    window: FixedCountWindow,
}

impl CsvMarketDataService {
    /// Create a service from configuration
    pub fn new(config: &Config) -> Self {
        Self {
            ingestor: CsvIngestor::new(&config.ingest),
            window: FixedCountWindow::new(config.analytics.window_len),
        }
    }
}

impl Default for CsvMarketDataService {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl MarketDataService for CsvMarketDataService {
    fn read_data_from_csv(&self, path: &Path) -> Result<Vec<MarketDataRecord>, IngestError> {
        self.ingestor.read(path)
    }

    fn minimum_price(&self, data: &[MarketDataRecord]) -> Result<Decimal, AnalyticsError> {
        analytics::minimum_price(data)
    }

    fn maximum_price(&self, data: &[MarketDataRecord]) -> Result<Decimal, AnalyticsError> {
        analytics::maximum_price(data)
    }

    fn average_price(&self, data: &[MarketDataRecord]) -> Result<Decimal, AnalyticsError> {
        analytics::average_price(data)
    }

    fn most_expensive_hour_window(
        &self,
        data: &[MarketDataRecord],
    ) -> Result<(Decimal, NaiveDateTime), AnalyticsError> {
        analytics::most_expensive_hour_window_with(data, &self.window)
    }

    fn summarize(&self, path: &Path) -> Result<MarketSummary, PipelineError> {
        let records = self.read_data_from_csv(path)?;
        let summary = MarketSummary::from_records(&records, &self.window)?;
        tracing::info!(
            records = summary.records,
            min = %summary.minimum_price,
            max = %summary.maximum_price,
            "Computed market summary"
        );
        Ok(summary)
    }
}
