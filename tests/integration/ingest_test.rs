//! Integration tests for CSV ingestion

use chrono::{NaiveDate, NaiveDateTime};
use price_importer::config::IngestConfig;
use price_importer::ingest::{read_data_from_csv, CsvIngestor, IngestError};
use rust_decimal_macros::dec;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn at(d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2017, 10, d)
        .unwrap()
        .and_hms_opt(h, min, 0)
        .unwrap()
}

#[test]
fn test_read_sample_fixture() {
    let records = read_data_from_csv(fixture("sample.csv")).unwrap();

    assert_eq!(records.len(), 12);
    assert_eq!(records[0].timestamp(), at(1, 0, 0));
    assert_eq!(records[0].price(), dec!(50.29000092));
    assert_eq!(records[1].timestamp(), at(1, 0, 30));
    assert_eq!(records[1].price(), dec!(50));
    assert_eq!(records[7].timestamp(), at(1, 18, 30));
    assert_eq!(records[7].price(), dec!(356.0699997));
    assert_eq!(records[11].timestamp(), at(1, 20, 30));
}

#[test]
fn test_mixed_date_styles() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("mixed.csv");
    std::fs::write(
        &path,
        "Date,Market Price EX1\n\
         10/1/2017 6:00 PM,1\n\
         30/10/2017 18:30,2\n\
         2017-10-02,3\n\
         2017-10-02 01:30:00,4\n",
    )
    .unwrap();

    let records = read_data_from_csv(&path).unwrap();
    let stamps: Vec<_> = records.iter().map(|r| r.timestamp()).collect();

    assert_eq!(
        stamps,
        vec![at(1, 18, 0), at(30, 18, 30), at(2, 0, 0), at(2, 1, 30)]
    );
}

#[test]
fn test_error_kinds_are_distinct() {
    let dir = TempDir::new().unwrap();

    let missing = dir.path().join("nope.csv");
    assert!(matches!(
        read_data_from_csv(&missing),
        Err(IngestError::FileNotFound { path }) if path == missing
    ));

    let header = dir.path().join("header.csv");
    std::fs::write(&header, "Date,Price\n10/1/2017,50\n").unwrap();
    assert!(matches!(
        read_data_from_csv(&header),
        Err(IngestError::InvalidHeader(_))
    ));

    let content = dir.path().join("content.csv");
    std::fs::write(&content, "Date,Market Price EX1\n10/1/2017,50,5\n").unwrap();
    assert!(matches!(
        read_data_from_csv(&content),
        Err(IngestError::MalformedContent(_))
    ));
}

#[test]
fn test_day_first_policy() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("eu.csv");
    std::fs::write(&path, "Date,Market Price EX1\n1/10/2017 18:00,12.5\n").unwrap();

    let config = IngestConfig {
        date_formats: vec!["%d/%m/%Y %H:%M".to_string()],
        ..IngestConfig::default()
    };
    let records = CsvIngestor::new(&config).read(&path).unwrap();

    assert_eq!(records[0].timestamp(), at(1, 18, 0));
    assert!(CsvIngestor::new(&config)
        .read(fixture("sample.csv"))
        .is_err());
}
