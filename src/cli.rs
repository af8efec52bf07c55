//! Command-line interface definitions for hashcluster.
//!
//! Running with no arguments reads `DATA/trun`, and writes singleton clusters
//! to `DATA/hash_unique` and duplicate clusters to `DATA/active`. Every flag
//! below only overrides that default layout or the reporting.
//!
//! # Example
//!
//! ```bash
//! # Default layout under ./DATA
//! hashcluster
//!
//! # Different data root, JSON report listing every cluster
//! hashcluster --data-root /srv/hashes --output json --list
//!
//! # See what would be written without touching the output directories
//! hashcluster -v --dry-run
//! ```

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Assemble precomputed per-item hashes into unique and active clusters.
///
/// Each file in the input directory is named after an item and holds that
/// item's hash. Items sharing a hash form a cluster; a cluster file named
/// after the hash is written to the unique or the active directory.
#[derive(Debug, Parser)]
#[command(name = "hashcluster")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity level (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors (the run report is still printed)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Print errors as JSON objects on stderr
    #[arg(long)]
    pub json_errors: bool,

    /// Configuration file (TOML). Defaults to ./hashcluster.toml when present
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Root directory holding the input and output directories
    #[arg(long, value_name = "DIR")]
    pub data_root: Option<PathBuf>,

    /// Input directory of per-item hash files (relative to the data root)
    #[arg(long = "input", value_name = "DIR")]
    pub input_dir: Option<PathBuf>,

    /// Destination for clusters with exactly one member (relative to the data root)
    #[arg(long = "unique", value_name = "DIR")]
    pub unique_dir: Option<PathBuf>,

    /// Destination for clusters with two or more members (relative to the data root)
    #[arg(long = "active", value_name = "DIR")]
    pub active_dir: Option<PathBuf>,

    /// Report format printed to stdout after the run
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: ReportFormat,

    /// Include every cluster and its members in the report
    #[arg(long)]
    pub list: bool,

    /// Scan and cluster, but do not write any cluster file
    #[arg(long)]
    pub dry_run: bool,

    /// Create missing output directories instead of failing
    #[arg(long)]
    pub create_dirs: bool,
}

/// Format of the run report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable summary
    Text,
    /// JSON document for scripting
    Json,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Text => write!(f, "text"),
            ReportFormat::Json => write!(f, "json"),
        }
    }
}
