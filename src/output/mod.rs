//! Cluster file output and run reports.
//!
//! - [`writer`]: writes one file per cluster into the unique or active directory
//! - [`json`]: machine-readable run report
//! - [`text`]: human-readable run report
//!
//! # Example
//!
//! ```no_run
//! use hashcluster::clusters::cluster_entries;
//! use hashcluster::config::Config;
//! use hashcluster::output::ClusterWriter;
//! use hashcluster::scanner::read_entries;
//!
//! let layout = Config::default().layout();
//! let (clusters, _stats) = cluster_entries(read_entries(&layout.input_dir).unwrap());
//! ClusterWriter::new(layout).write_all(&clusters).unwrap();
//! ```

pub mod json;
pub mod text;
pub mod writer;

// Re-export main types
pub use json::JsonReport;
pub use text::TextReport;
pub use writer::{ClusterWriter, WriteError, WriteReport};
