mod export;
mod run;

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "shelfscan")]
#[command(about = "Scrape all products for a given store into a CSV file")]
pub(crate) struct Cli {
    /// Store number (e.g. 156 for Astor Place)
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    store_id: u32,

    /// Path to output CSV (default: wegmans_store_<storeId>_<timestamp>.csv)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = shelfscan_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run::run(cli, &config).await {
        if let Some(usage) = err.downcast_ref::<clap::Error>() {
            usage.exit();
        }
        return Err(err);
    }
    Ok(())
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
