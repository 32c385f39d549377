//! Integration tests

mod ingest_test;
mod pipeline_test;
