//! Market summary and reporting

use super::window::{most_expensive_hour_window_with, WindowPolicy, NO_WINDOW};
use super::{average_price, maximum_price, minimum_price, AnalyticsError};
use crate::ingest::MarketDataRecord;
use chrono::NaiveDateTime;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

/// Most expensive hour of the series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HourWindow {
    /// Summed price of the window
    pub price: Decimal,
    /// Timestamp of the first reading in the window
    pub start: NaiveDateTime,
}

/// Summary statistics for one price file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarketSummary {
    /// Number of records aggregated
    pub records: usize,
    /// Lowest price
    pub minimum_price: Decimal,
    /// Highest price
    pub maximum_price: Decimal,
    /// Mean price
    pub average_price: Decimal,
    /// Most expensive hour, if one could be formed
    pub most_expensive_hour: Option<HourWindow>,
}

impl MarketSummary {
    /// Compute every aggregate over `records`
    pub fn from_records(
        records: &[MarketDataRecord],
        policy: &dyn WindowPolicy,
    ) -> Result<Self, AnalyticsError> {
        let (price, start) = most_expensive_hour_window_with(records, policy)?;
        let most_expensive_hour =
            ((price, start) != NO_WINDOW).then_some(HourWindow { price, start });

        Ok(Self {
            records: records.len(),
            minimum_price: minimum_price(records)?,
            maximum_price: maximum_price(records)?,
            average_price: average_price(records)?,
            most_expensive_hour,
        })
    }

    /// Format as table for CLI output
    pub fn format_table(&self) -> String {
        let hour = match &self.most_expensive_hour {
            Some(w) => format!(
                "{} starting {}",
                w.price,
                w.start.format("%Y-%m-%d %H:%M")
            ),
            None => "n/a".to_string(),
        };

        format!(
            r#"
══════════════════════════════════════════════════════
               MARKET PRICE SUMMARY
══════════════════════════════════════════════════════

PRICES
───────────────────────────────────────────────────────
Minimum:          {}
Maximum:          {}
Average:          {}

PEAK
───────────────────────────────────────────────────────
Expensive Hour:   {}
Records:          {}
══════════════════════════════════════════════════════
"#,
            self.minimum_price,
            self.maximum_price,
            self.average_price
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
            hour,
            self.records,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::FixedCountWindow;
    use chrono::{Duration, NaiveDate};
    use rust_decimal_macros::dec;

    fn sample() -> Vec<MarketDataRecord> {
        let start = NaiveDate::from_ymd_opt(2017, 10, 1)
            .unwrap()
            .and_hms_opt(18, 0, 0)
            .unwrap();
        [dec!(350), dec!(356.0699997), dec!(100), dec!(50)]
            .iter()
            .enumerate()
            .map(|(i, p)| MarketDataRecord::new(start + Duration::minutes(30 * i as i64), *p))
            .collect()
    }

    #[test]
    fn test_from_records() {
        let data = sample();
        let summary = MarketSummary::from_records(&data, &FixedCountWindow::default()).unwrap();

        assert_eq!(summary.records, 4);
        assert_eq!(summary.minimum_price, dec!(50));
        assert_eq!(summary.maximum_price, dec!(356.0699997));
        assert_eq!(summary.average_price, dec!(214.017499925));

        let hour = summary.most_expensive_hour.unwrap();
        assert_eq!(hour.price, dec!(706.0699997));
        assert_eq!(hour.start, data[0].timestamp());
    }

    #[test]
    fn test_single_record_has_no_hour() {
        let data = sample();
        let summary = MarketSummary::from_records(&data[..1], &FixedCountWindow::default()).unwrap();

        assert_eq!(summary.records, 1);
        assert!(summary.most_expensive_hour.is_none());
        assert!(summary.format_table().contains("Expensive Hour:   n/a"));
    }

    #[test]
    fn test_empty_is_rejected() {
        let result = MarketSummary::from_records(&[], &FixedCountWindow::default());
        assert_eq!(result, Err(AnalyticsError::EmptyDataset));
    }

    #[test]
    fn test_format_table() {
        let summary = MarketSummary::from_records(&sample(), &FixedCountWindow::default()).unwrap();
        let table = summary.format_table();

        assert!(table.contains("MARKET PRICE SUMMARY"));
        assert!(table.contains("Minimum:          50"));
        assert!(table.contains("Maximum:          356.0699997"));
        assert!(table.contains("Average:          214.02"));
        assert!(table.contains("706.0699997 starting 2017-10-01 18:00"));
    }

    #[test]
    fn test_format_table_rounds_average_half_up() {
        let data = vec![MarketDataRecord::new(NaiveDateTime::MIN, dec!(10.005))];
        let summary = MarketSummary::from_records(&data, &FixedCountWindow::default()).unwrap();

        assert!(summary.format_table().contains("Average:          10.01\n"));
    }

    #[test]
    fn test_serializes_prices_as_strings() {
        let summary = MarketSummary::from_records(&sample(), &FixedCountWindow::default()).unwrap();
        let json = serde_json::to_value(&summary).unwrap();

        assert_eq!(json["records"], 4);
        assert_eq!(json["maximum_price"], "356.0699997");
        assert_eq!(json["most_expensive_hour"]["price"], "706.0699997");
        assert_eq!(json["most_expensive_hour"]["start"], "2017-10-01T18:00:00");
    }
}
