//! CLI interface for price-importer
//!
//! Provides subcommands for:
//! - `summary`: Min, max, average and most expensive hour of a price file
//! - `records`: Parsed records in file order
//! - `config`: Show effective configuration

mod records;
mod summary;

pub use records::RecordsArgs;
pub use summary::SummaryArgs;

use crate::ingest::IngestError;
use crate::service::PipelineError;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "price-importer")]
#[command(about = "Import energy market prices from CSV and summarise them")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Summarise a price file
    Summary(SummaryArgs),
    /// Print parsed records
    Records(RecordsArgs),
    /// Show effective configuration
    Config,
}

/// Output format for command results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Short user-facing message for a pipeline failure
pub fn describe_error(err: &PipelineError) -> String {
    match err {
        PipelineError::Ingest(e @ IngestError::FileNotFound { .. }) => {
            format!("File not found: {e}")
        }
        PipelineError::Ingest(e) => format!("Data error: {e}"),
        PipelineError::Analytics(e) => format!("Analytics error: {e}"),
    }
}
