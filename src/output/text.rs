//! Human-readable run report.

use std::fmt;

use crate::clusters::{Cluster, ClusterStats};
use crate::config::Layout;

/// Plain-text summary of a run, rendered through [`fmt::Display`].
#[derive(Debug, Clone)]
pub struct TextReport<'a> {
    layout: &'a Layout,
    stats: &'a ClusterStats,
    dry_run: bool,
    clusters: Option<&'a [Cluster]>,
}

impl<'a> TextReport<'a> {
    /// Create a report for one run.
    #[must_use]
    pub fn new(layout: &'a Layout, stats: &'a ClusterStats, dry_run: bool) -> Self {
        Self {
            layout,
            stats,
            dry_run,
            clusters: None,
        }
    }

    /// Append one line per cluster after the summary.
    #[must_use]
    pub fn with_clusters(mut self, clusters: &'a [Cluster]) -> Self {
        self.clusters = Some(clusters);
        self
    }
}

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stats = self.stats;

        writeln!(f, "Items read:       {}", stats.total_items)?;
        writeln!(f, "Distinct hashes:  {}", stats.distinct_hashes)?;
        writeln!(
            f,
            "Unique clusters:  {} -> {}",
            stats.unique_clusters,
            self.layout.unique_dir.display()
        )?;
        writeln!(
            f,
            "Active clusters:  {} -> {} ({} items, largest {})",
            stats.active_clusters,
            self.layout.active_dir.display(),
            stats.active_items,
            stats.largest_cluster
        )?;
        if self.dry_run {
            writeln!(f, "Dry run: nothing written")?;
        }

        for cluster in self.clusters.unwrap_or_default() {
            writeln!(
                f,
                "{:<6} {} {}",
                cluster.kind(),
                cluster.hash,
                cluster.members.join(",")
            )?;
        }

        Ok(())
    }
}
