//! CSV ingestion module
//!
//! Turns a delimited price file into an ordered sequence of validated
//! records. Every failure maps to exactly one `IngestError` kind.

mod formats;
mod reader;
mod types;

pub use formats::{DateFormats, DEFAULT_DATE_FORMATS};
pub use reader::{read_data_from_csv, CsvIngestor, DATE_COLUMN, PRICE_COLUMN};
pub use types::{IngestError, MarketDataRecord};
