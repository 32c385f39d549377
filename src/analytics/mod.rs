//! Analytics module
//!
//! Pure aggregations over an ingested record sequence

mod aggregate;
mod summary;
mod window;

pub use aggregate::{average_price, maximum_price, minimum_price};
pub use summary::{HourWindow, MarketSummary};
pub use window::{
    most_expensive_hour_window, most_expensive_hour_window_with, most_expensive_window,
    FixedCountWindow, PriceWindow, WindowPolicy, NO_WINDOW,
};

use thiserror::Error;

/// Analytics errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AnalyticsError {
    /// Aggregate requested over zero records
    #[error("No market data to aggregate")]
    EmptyDataset,
    /// Decimal sum exceeded the representable range
    #[error("Price sum overflowed")]
    Overflow,
}
