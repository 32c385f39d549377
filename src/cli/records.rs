//! Records command implementation

use super::{describe_error, OutputFormat};
use crate::service::{MarketDataService, PipelineError};
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct RecordsArgs {
    /// CSV file with `Date` and price columns
    pub file: PathBuf,

    /// Print at most this many records
    #[arg(long)]
    pub limit: Option<usize>,

    /// Output format: table or json
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

impl RecordsArgs {
    pub fn execute(&self, service: &dyn MarketDataService) -> anyhow::Result<()> {
        let records = service
            .read_data_from_csv(&self.file)
            .map_err(|e| anyhow::anyhow!(describe_error(&PipelineError::from(e))))?;
        let shown = &records[..self.limit.map_or(records.len(), |n| n.min(records.len()))];

        match self.format {
            OutputFormat::Table => {
                println!("{:<18} {:>16}", "DATE", "PRICE");
                for record in shown {
                    println!(
                        "{:<18} {:>16}",
                        record.timestamp().format("%Y-%m-%d %H:%M").to_string(),
                        record.price().to_string()
                    );
                }
                println!("{} of {} records", shown.len(), records.len());
            }
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(shown)?),
        }
        Ok(())
    }
}
