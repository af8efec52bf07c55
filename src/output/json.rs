//! JSON run report.
//!
//! # Output Schema
//!
//! ```json
//! {
//!   "layout": {
//!     "input_dir": "DATA/trun",
//!     "unique_dir": "DATA/hash_unique",
//!     "active_dir": "DATA/active"
//!   },
//!   "dry_run": false,
//!   "summary": {
//!     "total_items": 3,
//!     "distinct_hashes": 2,
//!     "unique_clusters": 1,
//!     "active_clusters": 1,
//!     "active_items": 2,
//!     "largest_cluster": 2,
//!     "redundant_items": 1
//!   },
//!   "clusters": [
//!     { "hash": "h1", "kind": "active", "members": ["a", "b"] }
//!   ]
//! }
//! ```
//!
//! `clusters` is only present when the report was built with
//! [`JsonReport::with_clusters`].

use std::io::Write;

use serde::Serialize;

use crate::clusters::{Cluster, ClusterKind, ClusterStats};
use crate::config::Layout;

/// A single cluster in JSON format.
#[derive(Debug, Clone, Serialize)]
pub struct JsonCluster {
    /// Hash token (also the output file name)
    pub hash: String,
    /// `unique` or `active`
    pub kind: ClusterKind,
    /// Member identifiers
    pub members: Vec<String>,
}

impl From<&Cluster> for JsonCluster {
    fn from(cluster: &Cluster) -> Self {
        Self {
            hash: cluster.hash.clone(),
            kind: cluster.kind(),
            members: cluster.members.clone(),
        }
    }
}

/// Summary statistics in JSON format.
#[derive(Debug, Clone, Serialize)]
pub struct JsonSummary {
    #[serde(flatten)]
    stats: ClusterStats,
    /// Items beyond the first in every active cluster
    pub redundant_items: usize,
}

/// Complete JSON report.
#[derive(Debug, Clone, Serialize)]
pub struct JsonReport {
    /// Directories used by the run
    pub layout: Layout,
    /// Whether cluster files were left unwritten
    pub dry_run: bool,
    /// Assembly statistics
    pub summary: JsonSummary,
    /// Every cluster, when requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clusters: Option<Vec<JsonCluster>>,
}

impl JsonReport {
    /// Create a report without the cluster listing.
    #[must_use]
    pub fn new(layout: &Layout, stats: &ClusterStats, dry_run: bool) -> Self {
        Self {
            layout: layout.clone(),
            dry_run,
            summary: JsonSummary {
                stats: stats.clone(),
                redundant_items: stats.redundant_items(),
            },
            clusters: None,
        }
    }

    /// Include every cluster in the report.
    #[must_use]
    pub fn with_clusters(mut self, clusters: &[Cluster]) -> Self {
        self.clusters = Some(clusters.iter().map(JsonCluster::from).collect());
        self
    }

    /// Serialize to compact JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails (unlikely for valid data).
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serialize to pretty-printed JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails (unlikely for valid data).
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Write JSON to a writer, followed by a newline.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    pub fn write_to<W: Write>(&self, writer: &mut W, pretty: bool) -> Result<(), JsonOutputError> {
        let json = if pretty {
            self.to_json_pretty()?
        } else {
            self.to_json()?
        };
        writer.write_all(json.as_bytes())?;
        writer.write_all(b"\n")?;
        Ok(())
    }
}

/// Errors that can occur during JSON output.
#[derive(thiserror::Error, Debug)]
pub enum JsonOutputError {
    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O error during writing
    #[error("I/O error during JSON generation: {0}")]
    Io(#[from] std::io::Error),
}
