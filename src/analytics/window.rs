//! Most expensive hour window
//!
//! An "hour" is approximated by a fixed number of consecutive readings
//! (two half-hourly readings by default). Elapsed time between readings is
//! never inspected.

use super::aggregate::sum_prices;
use super::AnalyticsError;
use crate::ingest::MarketDataRecord;
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

/// Result reported when no window could be formed
pub const NO_WINDOW: (Decimal, NaiveDateTime) = (Decimal::ZERO, NaiveDateTime::MIN);

/// Decides how many consecutive readings form one window
pub trait WindowPolicy: Send + Sync {
    /// Number of readings per window
    fn window_len(&self) -> usize;
}

/// Window made of a fixed count of consecutive readings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedCountWindow {
    len: usize,
}

impl FixedCountWindow {
    /// Two half-hourly readings
    pub const HALF_HOURLY: Self = Self { len: 2 };

    pub fn new(len: usize) -> Self {
        Self { len }
    }
}

impl Default for FixedCountWindow {
    fn default() -> Self {
        Self::HALF_HOURLY
    }
}

impl WindowPolicy for FixedCountWindow {
    fn window_len(&self) -> usize {
        self.len
    }
}

/// A run of consecutive readings and their summed price
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PriceWindow {
    /// Timestamp of the first reading in the window
    pub start: NaiveDateTime,
    /// Sum of the prices in the window
    pub total: Decimal,
    /// Number of readings in the window
    pub len: usize,
}

/// Find the window with the greatest summed price
///
/// Ties keep the earliest window. Returns `None` when the sequence is
/// shorter than one window.
pub fn most_expensive_window(
    records: &[MarketDataRecord],
    policy: &dyn WindowPolicy,
) -> Result<Option<PriceWindow>, AnalyticsError> {
    let len = policy.window_len();
    if len == 0 || records.len() < len {
        return Ok(None);
    }

    let mut best: Option<PriceWindow> = None;
    for window in records.windows(len) {
        let total = sum_prices(window)?;
        if best.map_or(true, |b| total > b.total) {
            best = Some(PriceWindow {
                start: window[0].timestamp(),
                total,
                len,
            });
        }
    }

    if let Some(w) = &best {
        debug!(start = %w.start, total = %w.total, len, "Most expensive window");
    }
    Ok(best)
}

/// Most expensive hour as `(price, start)` using two-reading windows
///
/// Returns [`NO_WINDOW`] when fewer than two readings are available or no
/// window sums above zero.
pub fn most_expensive_hour_window(
    records: &[MarketDataRecord],
) -> Result<(Decimal, NaiveDateTime), AnalyticsError> {
    most_expensive_hour_window_with(records, &FixedCountWindow::HALF_HOURLY)
}

/// Same as [`most_expensive_hour_window`] with a caller-supplied window policy
pub fn most_expensive_hour_window_with(
    records: &[MarketDataRecord],
    policy: &dyn WindowPolicy,
) -> Result<(Decimal, NaiveDateTime), AnalyticsError> {
    let window = most_expensive_window(records, policy)?;
    // Running maximum historically starts at zero
    Ok(window
        .filter(|w| w.total > Decimal::ZERO)
        .map_or(NO_WINDOW, |w| (w.total, w.start)))
}
