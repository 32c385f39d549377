//! Price aggregates over a record sequence

use super::AnalyticsError;
use crate::ingest::MarketDataRecord;
use rust_decimal::Decimal;

/// Lowest price in the sequence
pub fn minimum_price(records: &[MarketDataRecord]) -> Result<Decimal, AnalyticsError> {
    records
        .iter()
        .map(MarketDataRecord::price)
        .min()
        .ok_or(AnalyticsError::EmptyDataset)
}

/// Highest price in the sequence
pub fn maximum_price(records: &[MarketDataRecord]) -> Result<Decimal, AnalyticsError> {
    records
        .iter()
        .map(MarketDataRecord::price)
        .max()
        .ok_or(AnalyticsError::EmptyDataset)
}

/// Arithmetic mean of all prices, in exact decimal arithmetic
pub fn average_price(records: &[MarketDataRecord]) -> Result<Decimal, AnalyticsError> {
    if records.is_empty() {
        return Err(AnalyticsError::EmptyDataset);
    }

    let total = sum_prices(records)?;
    total
        .checked_div(Decimal::from(records.len()))
        .map(|avg| avg.normalize())
        .ok_or(AnalyticsError::Overflow)
}

/// Checked sum of prices
pub(crate) fn sum_prices(records: &[MarketDataRecord]) -> Result<Decimal, AnalyticsError> {
    records.iter().try_fold(Decimal::ZERO, |acc, r| {
        acc.checked_add(r.price()).ok_or(AnalyticsError::Overflow)
    })
}
