//! End-to-end scrape of one store: validate, enumerate, retrieve, export.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::Context;
use clap::error::ErrorKind;
use clap::CommandFactory;
use shelfscan_core::AppConfig;
use shelfscan_scraper::{retrieve_subcategory, SearchClient, StorefrontClient};

use crate::export::CatalogWriter;
use crate::Cli;

/// Totals reported at the end of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ScrapeSummary {
    pub products: u64,
    pub subcategories: usize,
    /// Matches the backend reported but no partition query returned.
    pub shortfall: u64,
}

/// Default output file name for `store_number` at `timestamp` (unix seconds).
pub(crate) fn default_output_path(store_number: u32, timestamp: i64) -> PathBuf {
    PathBuf::from(format!("wegmans_store_{store_number}_{timestamp}.csv"))
}

/// Runs a full scrape for the parsed command line.
///
/// An unknown store is reported as a `clap::Error` before any output file is
/// created; `main` turns that into the usual argument-error exit.
///
/// # Errors
///
/// Returns an error on an unknown store, any transport or parse failure, or
/// if the output file cannot be created or written.
pub(crate) async fn run(cli: Cli, config: &AppConfig) -> anyhow::Result<()> {
    let storefront = StorefrontClient::from_config(config)?;

    let Some(store) = storefront
        .verify_store(cli.store_id)
        .await
        .context("failed to fetch store directory")?
    else {
        tracing::error!(store = cli.store_id, "store number does not exist");
        return Err(invalid_store_error(cli.store_id).into());
    };
    tracing::info!(store = store.store_number, name = %store.name, "store verified");
    println!("The queried store is {}.", store.name);

    let search = SearchClient::from_config(config)?;
    let subcategories = storefront
        .list_subcategories(store.store_number)
        .await
        .context("failed to enumerate subcategories")?;

    let output = cli.output.unwrap_or_else(|| {
        default_output_path(store.store_number, chrono::Utc::now().timestamp())
    });
    let file = create_output(&output)?;
    let mut writer = CatalogWriter::new(BufWriter::new(file))
        .with_context(|| format!("failed to write header to {}", output.display()))?;

    let started = Instant::now();
    let summary = scrape_store(
        &search,
        config,
        store.store_number,
        &subcategories,
        &mut writer,
    )
    .await?;
    let elapsed = started.elapsed().as_secs_f64();

    tracing::info!(
        products = summary.products,
        subcategories = summary.subcategories,
        shortfall = summary.shortfall,
        output = %output.display(),
        "scrape complete"
    );
    if summary.shortfall > 0 {
        tracing::warn!(
            shortfall = summary.shortfall,
            "some products could not be reached through brand partitions"
        );
    }
    println!("{} products scraped in {elapsed:.2}s.", summary.products);
    Ok(())
}

/// Retrieves every subcategory in order and streams its rows to `writer`.
///
/// Subcategories are processed one at a time with a fixed pause between
/// them. The first failure aborts the run; rows already written stay written.
///
/// # Errors
///
/// Returns the first retrieval or write error.
pub(crate) async fn scrape_store<W: Write>(
    search: &SearchClient,
    config: &AppConfig,
    store_number: u32,
    subcategories: &[String],
    writer: &mut CatalogWriter<W>,
) -> anyhow::Result<ScrapeSummary> {
    let delay = Duration::from_millis(config.inter_category_delay_ms);
    let mut shortfall = 0u64;

    for (idx, subcategory) in subcategories.iter().enumerate() {
        if idx > 0 && !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        let retrieval =
            retrieve_subcategory(search, subcategory, store_number, config.hits_per_page)
                .await
                .with_context(|| format!("failed to retrieve subcategory {subcategory}"))?;
        shortfall += retrieval.shortfall();

        let written = writer
            .write_hits(&retrieval.hits)
            .with_context(|| format!("failed to write rows for subcategory {subcategory}"))?;
        tracing::info!(
            subcategory = %subcategory,
            rows = written,
            nb_hits = retrieval.expected_total,
            strategy = ?retrieval.strategy,
            "subcategory exported"
        );
    }

    Ok(ScrapeSummary {
        products: writer.rows_written(),
        subcategories: subcategories.len(),
        shortfall,
    })
}

fn invalid_store_error(store_id: u32) -> clap::Error {
    Cli::command().error(
        ErrorKind::InvalidValue,
        format!("Invalid Store ID: {store_id}."),
    )
}

fn create_output(path: &Path) -> anyhow::Result<File> {
    File::create(path).with_context(|| format!("failed to create {}", path.display()))
}

#[cfg(test)]
#[path = "run_test.rs"]
mod tests;
