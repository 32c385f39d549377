//! CSV reader for market price files

use super::formats::DateFormats;
use super::types::{IngestError, MarketDataRecord};
use crate::config::IngestConfig;
use csv::StringRecord;
use rust_decimal::Decimal;
use std::fs::File;
use std::io::ErrorKind;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, info, warn};

/// Default label of the timestamp column
pub const DATE_COLUMN: &str = "Date";
/// Default label of the price column
pub const PRICE_COLUMN: &str = "Market Price EX1";

/// Read a market price file using the default column labels and date formats
pub fn read_data_from_csv(path: impl AsRef<Path>) -> Result<Vec<MarketDataRecord>, IngestError> {
    CsvIngestor::default().read(path)
}

/// Column positions resolved from the header row
#[derive(Debug, Clone, Copy)]
struct Columns {
    date: usize,
    price: usize,
}

/// Reads delimited price files into ordered records
///
/// Reading is fail-fast: the first bad row aborts the whole read.
#[derive(Debug, Clone)]
pub struct CsvIngestor {
    date_column: String,
    price_column: String,
    delimiter: u8,
    formats: DateFormats,
}

impl CsvIngestor {
    /// Create an ingestor from configuration
    pub fn new(config: &IngestConfig) -> Self {
        Self {
            date_column: config.date_column.clone(),
            price_column: config.price_column.clone(),
            delimiter: config.delimiter_byte(),
            formats: DateFormats::new(config.date_formats.clone()),
        }
    }

    /// Timestamp patterns used by this ingestor
    pub fn formats(&self) -> &DateFormats {
        &self.formats
    }

    /// Read every data row of the file at `path`, in file order
    pub fn read(&self, path: impl AsRef<Path>) -> Result<Vec<MarketDataRecord>, IngestError> {
        let path = path.as_ref();
        self.read_file(path).inspect_err(|e| {
            warn!(path = %path.display(), error = %e, "Failed to read market data");
        })
    }

    fn read_file(&self, path: &Path) -> Result<Vec<MarketDataRecord>, IngestError> {
        if !path.is_file() {
            return Err(IngestError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        debug!(path = %path.display(), "Opening CSV file");
        let file = File::open(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound | ErrorKind::PermissionDenied => IngestError::FileNotFound {
                path: path.to_path_buf(),
            },
            _ => IngestError::MalformedContent(format!("failed to open file: {e}")),
        })?;

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .trim(csv::Trim::All)
            .from_reader(file);

        let headers = reader
            .headers()
            .map_err(|e| IngestError::MalformedContent(format!("failed to read header row: {e}")))?
            .clone();
        let columns = self.locate_columns(&headers)?;

        let mut records = Vec::new();
        for (idx, result) in reader.records().enumerate() {
            let row = result.map_err(|e| IngestError::MalformedContent(e.to_string()))?;
            // Header is line 1
            let line = row.position().map_or(idx as u64 + 2, |p| p.line());
            records.push(self.parse_row(&row, columns, line)?);
        }

        info!(path = %path.display(), rows = records.len(), "Loaded market data");
        Ok(records)
    }

    fn locate_columns(&self, headers: &StringRecord) -> Result<Columns, IngestError> {
        let position = |label: &str| {
            headers
                .iter()
                .position(|h| normalize_header(h) == label)
        };

        match (
            position(self.date_column.as_str()),
            position(self.price_column.as_str()),
        ) {
            (Some(date), Some(price)) => Ok(Columns { date, price }),
            (date, price) => {
                let missing: Vec<String> = [(date, &self.date_column), (price, &self.price_column)]
                    .into_iter()
                    .filter(|(pos, _)| pos.is_none())
                    .map(|(_, label)| format!("`{label}`"))
                    .collect();
                let found: Vec<&str> = headers.iter().map(normalize_header).collect();
                Err(IngestError::InvalidHeader(format!(
                    "missing required column(s) {}; found [{}]",
                    missing.join(", "),
                    found.join(", ")
                )))
            }
        }
    }

    fn parse_row(
        &self,
        row: &StringRecord,
        columns: Columns,
        line: u64,
    ) -> Result<MarketDataRecord, IngestError> {
        let date_text = field(row, columns.date, &self.date_column, line)?;
        let timestamp = self.formats.parse(date_text).ok_or_else(|| {
            IngestError::MalformedContent(format!(
                "line {line}: unrecognised date `{date_text}` in column `{}`",
                self.date_column
            ))
        })?;

        let price_text = field(row, columns.price, &self.price_column, line)?;
        let price = parse_price(price_text).map_err(|e| {
            IngestError::MalformedContent(format!(
                "line {line}: invalid price `{price_text}` in column `{}`: {e}",
                self.price_column
            ))
        })?;

        Ok(MarketDataRecord::new(timestamp, price))
    }
}

impl Default for CsvIngestor {
    fn default() -> Self {
        Self::new(&IngestConfig::default())
    }
}

fn field<'a>(
    row: &'a StringRecord,
    idx: usize,
    label: &str,
    line: u64,
) -> Result<&'a str, IngestError> {
    row.get(idx).ok_or_else(|| {
        IngestError::MalformedContent(format!("line {line}: missing value for column `{label}`"))
    })
}

/// Plain decimal literal: optional sign, digits and a `.` separator only
fn parse_price(text: &str) -> Result<Decimal, String> {
    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    if unsigned.is_empty() || !unsigned.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return Err("not a plain decimal number".to_string());
    }
    Decimal::from_str(text).map_err(|e| e.to_string())
}

fn normalize_header(name: &str) -> &str {
    name.trim_start_matches('\u{feff}').trim()
}
