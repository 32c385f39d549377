//! Summary command implementation

use super::{describe_error, OutputFormat};
use crate::service::MarketDataService;
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct SummaryArgs {
    /// CSV file with `Date` and price columns
    pub file: PathBuf,

    /// Output format: table or json
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

impl SummaryArgs {
    pub fn execute(&self, service: &dyn MarketDataService) -> anyhow::Result<()> {
        tracing::info!("Summarising {:?}...", self.file);
        let summary = service
            .summarize(&self.file)
            .map_err(|e| anyhow::anyhow!(describe_error(&e)))?;

        match self.format {
            OutputFormat::Table => print!("{}", summary.format_table()),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
        }
        Ok(())
    }
}
