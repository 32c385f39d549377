//! End-to-end pipeline tests

use chrono::{NaiveDate, NaiveDateTime};
use price_importer::analytics::{
    average_price, maximum_price, minimum_price, most_expensive_hour_window, AnalyticsError,
    NO_WINDOW,
};
use price_importer::config::Config;
use price_importer::ingest::read_data_from_csv;
use price_importer::service::{CsvMarketDataService, MarketDataService, PipelineError};
use rust_decimal_macros::dec;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn at(h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2017, 10, 1)
        .unwrap()
        .and_hms_opt(h, min, 0)
        .unwrap()
}

#[test]
fn test_sample_aggregates() {
    let records = read_data_from_csv(fixture("sample.csv")).unwrap();

    let min = minimum_price(&records).unwrap();
    let max = maximum_price(&records).unwrap();
    let avg = average_price(&records).unwrap();

    assert_eq!(min, dec!(43.5));
    assert_eq!(max, dec!(356.0699997));
    assert_eq!(avg, dec!(1256.48000146) / dec!(12));
    assert!(min <= avg && avg <= max);

    let (price, start) = most_expensive_hour_window(&records).unwrap();
    assert_eq!(price, dec!(706.0699997));
    assert_eq!(start, at(18, 0));
}

#[test]
fn test_repeat_calls_are_stable() {
    let records = read_data_from_csv(fixture("sample.csv")).unwrap();
    let snapshot = records.clone();

    assert_eq!(average_price(&records), average_price(&records));
    assert_eq!(
        most_expensive_hour_window(&records),
        most_expensive_hour_window(&records)
    );
    assert_eq!(records, snapshot);
}

#[test]
fn test_single_row_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("one.csv");
    std::fs::write(&path, "Date,Market Price EX1\n10/1/2017 18:00,42\n").unwrap();

    let records = read_data_from_csv(&path).unwrap();

    assert_eq!(minimum_price(&records).unwrap(), dec!(42));
    assert_eq!(most_expensive_hour_window(&records).unwrap(), NO_WINDOW);
}

#[test]
fn test_service_summary() {
    let service = CsvMarketDataService::new(&Config::default());
    let summary = service.summarize(&fixture("sample.csv")).unwrap();

    assert_eq!(summary.records, 12);
    assert_eq!(summary.minimum_price, dec!(43.5));
    let hour = summary.most_expensive_hour.unwrap();
    assert_eq!(hour.price, dec!(706.0699997));
    assert_eq!(hour.start, at(18, 0));
}

#[test]
fn test_service_empty_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.csv");
    std::fs::write(&path, "Date,Market Price EX1\n").unwrap();

    let service = CsvMarketDataService::default();
    let records = service.read_data_from_csv(&path).unwrap();
    assert!(records.is_empty());
    assert_eq!(service.average_price(&records), Err(AnalyticsError::EmptyDataset));
    assert!(matches!(
        service.summarize(&path),
        Err(PipelineError::Analytics(AnalyticsError::EmptyDataset))
    ));
}
