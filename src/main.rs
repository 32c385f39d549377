use clap::Parser;
use price_importer::cli::{Cli, Commands};
use price_importer::config::Config;
use price_importer::service::CsvMarketDataService;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(&cli.config).unwrap_or_else(|e| {
        eprintln!("Warning: Could not load config from {}: {}", cli.config, e);
        eprintln!("Using default configuration");
        toml::from_str(include_str!("../config.toml.example")).unwrap_or_default()
    });

    // Initialize telemetry
    price_importer::telemetry::init_telemetry(&config.telemetry)?;

    let service = CsvMarketDataService::new(&config);

    match cli.command {
        Commands::Summary(args) => args.execute(&service)?,
        Commands::Records(args) => args.execute(&service)?,
        Commands::Config => {
            println!("Current configuration:");
            print!("{}", toml::to_string_pretty(&config)?);
        }
    }

    Ok(())
}
