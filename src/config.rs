//! Configuration types for price-importer

use crate::ingest::{DATE_COLUMN, DEFAULT_DATE_FORMATS, PRICE_COLUMN};
use crate::telemetry::LogFormat;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub ingest: IngestConfig,
    #[serde(default)]
    pub analytics: AnalyticsConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// CSV ingestion configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct IngestConfig {
    /// Header label of the timestamp column
    #[serde(default = "default_date_column")]
    pub date_column: String,

    /// Header label of the price column
    #[serde(default = "default_price_column")]
    pub price_column: String,

    /// Field delimiter (single ASCII character)
    #[serde(default = "default_delimiter")]
    pub delimiter: String,

    /// Accepted timestamp patterns, first match wins
    #[serde(default = "default_date_formats")]
    pub date_formats: Vec<String>,
}

fn default_date_column() -> String {
    DATE_COLUMN.to_string()
}
fn default_price_column() -> String {
    PRICE_COLUMN.to_string()
}
fn default_delimiter() -> String {
    ",".to_string()
}
fn default_date_formats() -> Vec<String> {
    DEFAULT_DATE_FORMATS.iter().map(|f| f.to_string()).collect()
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            date_column: default_date_column(),
            price_column: default_price_column(),
            delimiter: default_delimiter(),
            date_formats: default_date_formats(),
        }
    }
}

impl IngestConfig {
    /// Delimiter as a byte; falls back to a comma when not a single ASCII char
    pub fn delimiter_byte(&self) -> u8 {
        match self.delimiter.as_bytes() {
            [b] if b.is_ascii() => *b,
            _ => b',',
        }
    }
}

/// Analytics configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AnalyticsConfig {
    /// Consecutive readings that make up one "hour" (2 for half-hourly data)
    #[serde(default = "default_window_len")]
    pub window_len: usize,
}

fn default_window_len() -> usize {
    2
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            window_len: default_window_len(),
        }
    }
}

/// Telemetry configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TelemetryConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub log_format: LogFormat,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: LogFormat::default(),
        }
    }
}

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("ingest.date_formats must list at least one pattern")]
    NoDateFormats,
    #[error("ingest.delimiter must be a single ASCII character, got {0:?}")]
    InvalidDelimiter(String),
    #[error("ingest.date_column and ingest.price_column must be set")]
    EmptyColumnLabel,
    #[error("analytics.window_len must be at least 1")]
    ZeroWindowLen,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check values serde cannot express
    pub fn validate(&self) -> Result<(), ConfigError> {
        let ingest = &self.ingest;
        if ingest.date_formats.is_empty() {
            return Err(ConfigError::NoDateFormats);
        }
        if !matches!(ingest.delimiter.as_bytes(), [b] if b.is_ascii()) {
            return Err(ConfigError::InvalidDelimiter(ingest.delimiter.clone()));
        }
        if ingest.date_column.trim().is_empty() || ingest.price_column.trim().is_empty() {
            return Err(ConfigError::EmptyColumnLabel);
        }
        if self.analytics.window_len == 0 {
            return Err(ConfigError::ZeroWindowLen);
        }
        Ok(())
    }
}
