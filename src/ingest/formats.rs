//! Timestamp pattern policy
//!
//! Patterns are tried in order and the first one that parses wins. Order is
//! significant: month/day patterns come before day/month patterns, so an
//! ambiguous `10/1/2017` reads as 1 October.

use chrono::format::{Fixed, Item, Numeric, StrftimeItems};
use chrono::{Datelike, NaiveDate, NaiveDateTime};

/// Default accepted timestamp patterns, in priority order
pub const DEFAULT_DATE_FORMATS: &[&str] = &[
    "%m/%d/%Y %I:%M %p",
    "%m/%d/%Y %H:%M",
    "%m/%d/%Y",
    "%d/%m/%Y",
    "%d/%m/%Y %I:%M %p",
    "%d/%m/%Y %H:%M",
    "%Y-%m-%d",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
];

/// Ordered first-match-wins list of timestamp patterns
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateFormats {
    patterns: Vec<String>,
}

impl DateFormats {
    /// Create a policy from an ordered list of chrono format strings
    pub fn new(patterns: Vec<String>) -> Self {
        Self { patterns }
    }

    /// Patterns in priority order
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    /// Parse a timestamp against each pattern in turn
    ///
    /// A pattern without time fields yields midnight of that date. Years must
    /// be written with exactly four digits.
    pub fn parse(&self, text: &str) -> Option<NaiveDateTime> {
        let text = text.trim();
        self.patterns
            .iter()
            .find_map(|pattern| parse_with(text, pattern))
    }
}

impl Default for DateFormats {
    fn default() -> Self {
        Self::new(DEFAULT_DATE_FORMATS.iter().map(|p| p.to_string()).collect())
    }
}

fn parse_with(text: &str, pattern: &str) -> Option<NaiveDateTime> {
    let parsed = match NaiveDateTime::parse_from_str(text, pattern) {
        Ok(dt) => dt,
        Err(_) if !has_time_fields(pattern) => NaiveDate::parse_from_str(text, pattern)
            .ok()?
            .and_hms_opt(0, 0, 0)?,
        Err(_) => return None,
    };
    has_four_digit_year(text, parsed.year()).then_some(parsed)
}

fn has_time_fields(pattern: &str) -> bool {
    StrftimeItems::new(pattern).any(|item| {
        matches!(
            item,
            Item::Numeric(
                Numeric::Hour
                    | Numeric::Hour12
                    | Numeric::Minute
                    | Numeric::Second
                    | Numeric::Nanosecond,
                _
            ) | Item::Fixed(Fixed::LowerAmPm | Fixed::UpperAmPm)
        )
    })
}

// chrono's %Y takes any digit count; `10/1/17` must not become year 17
fn has_four_digit_year(text: &str, year: i32) -> bool {
    if !(1000..=9999).contains(&year) {
        return false;
    }
    let year = year.to_string();
    text.split(|c: char| !c.is_ascii_digit())
        .any(|run| run == year)
}
