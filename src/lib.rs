//! price-importer: energy market price ingestion and analytics
//!
//! This library provides:
//! - Tolerant CSV ingestion of timestamped decimal price quotes
//! - Exact-decimal aggregates (minimum, maximum, average)
//! - Most expensive hour detection over consecutive readings
//! - A service trait tying ingestion and analytics together
//! - Configuration, logging and a command-line front end

pub mod analytics;
pub mod cli;
pub mod config;
pub mod ingest;
pub mod service;
pub mod telemetry;
