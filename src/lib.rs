//! hashcluster - Hash Cluster Assembly
//!
//! Collects precomputed per-item hash tokens into clusters and writes each
//! cluster into either the "unique" (one member) or "active" (duplicate)
//! destination directory.

pub mod cli;
pub mod clusters;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod scanner;

use anyhow::{Context, Result};

use crate::cli::{Cli, ReportFormat};
use crate::clusters::cluster_entries;
use crate::config::Config;
use crate::error::ExitCode;
use crate::output::{ClusterWriter, JsonReport, TextReport};

/// Run the application with parsed CLI arguments.
///
/// Scans the input directory, clusters items by hash, writes the cluster
/// files (unless `--dry-run`) and prints the run report to stdout.
///
/// # Errors
///
/// Returns an error if configuration cannot be loaded, the input directory
/// cannot be read, a hash is unusable as a file name, or an output file
/// cannot be written.
pub fn run_app(cli: Cli) -> Result<ExitCode> {
    logging::init_logging(cli.verbose, cli.quiet);

    let config = Config::load(cli.config.as_deref())?.with_overrides(&cli);
    let layout = config.layout();
    log::debug!("Resolved layout: {:?}", layout);

    let entries = scanner::read_entries(&layout.input_dir)?;
    log::info!(
        "Read {} hash entries from {}",
        entries.len(),
        layout.input_dir.display()
    );

    let (clusters, stats) = cluster_entries(entries);
    clusters::validate_keys(&clusters)?;
    log::info!(
        "Assembled {} clusters ({} unique, {} active)",
        stats.distinct_hashes,
        stats.unique_clusters,
        stats.active_clusters
    );

    if cli.dry_run {
        log::info!("Dry run: no cluster files written");
    } else {
        let writer = ClusterWriter::new(layout.clone()).with_create_dirs(cli.create_dirs);
        let report = writer
            .write_all(&clusters)
            .context("Failed to write cluster files")?;
        log::info!(
            "Wrote {} unique and {} active cluster files ({} bytes)",
            report.unique_written,
            report.active_written,
            report.bytes_written
        );
    }

    match cli.output {
        ReportFormat::Text => {
            let mut report = TextReport::new(&layout, &stats, cli.dry_run);
            if cli.list {
                report = report.with_clusters(&clusters);
            }
            print!("{report}");
        }
        ReportFormat::Json => {
            let mut report = JsonReport::new(&layout, &stats, cli.dry_run);
            if cli.list {
                report = report.with_clusters(&clusters);
            }
            report.write_to(&mut std::io::stdout().lock(), true)?;
        }
    }

    Ok(ExitCode::Success)
}
