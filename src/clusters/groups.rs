//! Hash clusters and cluster assembly.
//!
//! # Overview
//!
//! Items are grouped by their exact hash token. A cluster with a single member
//! is *unique*; a cluster with two or more members is *active* (it contains
//! duplicates).
//!
//! # Example
//!
//! ```
//! use hashcluster::clusters::{cluster_entries, ClusterKind};
//! use hashcluster::scanner::HashEntry;
//!
//! let entries = vec![
//!     HashEntry::new("a", "h1"),
//!     HashEntry::new("b", "h1"),
//!     HashEntry::new("c", "h2"),
//! ];
//!
//! let (clusters, stats) = cluster_entries(entries);
//!
//! assert_eq!(clusters.len(), 2);
//! assert_eq!(clusters[0].kind(), ClusterKind::Active);
//! assert_eq!(clusters[0].contents(), "a\nb\n");
//! assert_eq!(stats.unique_clusters, 1);
//! ```

use serde::Serialize;
use std::collections::HashMap;

use crate::scanner::HashEntry;

/// Destination class of a cluster, decided by its cardinality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ClusterKind {
    /// Exactly one member
    Unique,
    /// Two or more members
    Active,
}

impl ClusterKind {
    /// Classify a cluster of `len` members.
    #[must_use]
    pub fn for_len(len: usize) -> Self {
        if len == 1 {
            Self::Unique
        } else {
            Self::Active
        }
    }
}

impl std::fmt::Display for ClusterKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClusterKind::Unique => f.pad("unique"),
            ClusterKind::Active => f.pad("active"),
        }
    }
}

/// Identifiers of all items sharing one hash token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cluster {
    /// Shared hash token, also the output file name
    pub hash: String,
    /// Item identifiers in input order
    pub members: Vec<String>,
}

impl Cluster {
    /// Create an empty cluster for `hash`.
    #[must_use]
    pub fn new(hash: impl Into<String>) -> Self {
        Self {
            hash: hash.into(),
            members: Vec::new(),
        }
    }

    /// Create a cluster with initial members.
    #[must_use]
    pub fn with_members(hash: impl Into<String>, members: Vec<String>) -> Self {
        Self {
            hash: hash.into(),
            members,
        }
    }

    /// Append a member identifier.
    pub fn add(&mut self, id: impl Into<String>) {
        self.members.push(id.into());
    }

    /// Number of members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Check if this cluster has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Unique or active, by member count.
    #[must_use]
    pub fn kind(&self) -> ClusterKind {
        ClusterKind::for_len(self.members.len())
    }

    /// Check if this cluster contains duplicates (2+ members).
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.kind() == ClusterKind::Active
    }

    /// Output file content: members joined by newline, plus a trailing newline.
    #[must_use]
    pub fn contents(&self) -> String {
        let mut out = self.members.join("\n");
        out.push('\n');
        out
    }
}

/// Statistics from cluster assembly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ClusterStats {
    /// Number of items read
    pub total_items: usize,
    /// Number of distinct hash tokens (= number of clusters)
    pub distinct_hashes: usize,
    /// Clusters with exactly one member
    pub unique_clusters: usize,
    /// Clusters with two or more members
    pub active_clusters: usize,
    /// Items belonging to active clusters
    pub active_items: usize,
    /// Member count of the largest cluster
    pub largest_cluster: usize,
}

impl ClusterStats {
    /// Items that share their hash with at least one other item, minus one per cluster.
    #[must_use]
    pub fn redundant_items(&self) -> usize {
        self.active_items.saturating_sub(self.active_clusters)
    }
}

/// Group items by hash token.
///
/// Clusters are returned in the order their hash first appears in `entries`,
/// and members keep the order of `entries`.
///
/// # Performance
///
/// - Time complexity: O(n) where n is the number of entries
/// - No I/O is performed
#[must_use]
pub fn cluster_entries(
    entries: impl IntoIterator<Item = HashEntry>,
) -> (Vec<Cluster>, ClusterStats) {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut clusters: Vec<Cluster> = Vec::new();
    let mut stats = ClusterStats::default();

    for entry in entries {
        stats.total_items += 1;

        match index.get(&entry.hash) {
            Some(&slot) => clusters[slot].add(entry.id),
            None => {
                index.insert(entry.hash.clone(), clusters.len());
                clusters.push(Cluster::with_members(entry.hash, vec![entry.id]));
            }
        }
    }

    stats.distinct_hashes = clusters.len();
    for cluster in &clusters {
        stats.largest_cluster = stats.largest_cluster.max(cluster.len());
        match cluster.kind() {
            ClusterKind::Unique => stats.unique_clusters += 1,
            ClusterKind::Active => {
                stats.active_clusters += 1;
                stats.active_items += cluster.len();
                log::debug!("Active cluster {}: {} members", cluster.hash, cluster.len());
            }
        }
    }

    log::debug!(
        "Clustered {} items into {} clusters ({} redundant)",
        stats.total_items,
        stats.distinct_hashes,
        stats.redundant_items()
    );

    (clusters, stats)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(pairs: &[(&str, &str)]) -> Vec<HashEntry> {
        pairs.iter().map(|(id, hash)| HashEntry::new(*id, *hash)).collect()
    }

    #[test]
    fn test_cluster_kind_for_len() {
        assert_eq!(ClusterKind::for_len(1), ClusterKind::Unique);
        assert_eq!(ClusterKind::for_len(2), ClusterKind::Active);
        assert_eq!(ClusterKind::for_len(50), ClusterKind::Active);
    }

    #[test]
    fn test_cluster_contents_has_trailing_newline() {
        let cluster = Cluster::with_members("h", vec!["x".to_string()]);
        assert_eq!(cluster.contents(), "x\n");

        let cluster = Cluster::with_members("h", vec!["x".to_string(), "y".to_string()]);
        assert_eq!(cluster.contents(), "x\ny\n");
    }

    #[test]
    fn test_cluster_add() {
        let mut cluster = Cluster::new("h");
        assert!(cluster.is_empty());
        cluster.add("a");
        assert_eq!(cluster.kind(), ClusterKind::Unique);
        cluster.add("b");
        assert!(cluster.is_active());
        assert_eq!(cluster.len(), 2);
    }

    #[test]
    fn test_cluster_entries_example() {
        let (clusters, stats) =
            cluster_entries(entries(&[("a", "h1"), ("b", "h1"), ("c", "h2")]));

        assert_eq!(
            clusters,
            vec![
                Cluster::with_members("h1", vec!["a".to_string(), "b".to_string()]),
                Cluster::with_members("h2", vec!["c".to_string()]),
            ]
        );
        assert_eq!(
            stats,
            ClusterStats {
                total_items: 3,
                distinct_hashes: 2,
                unique_clusters: 1,
                active_clusters: 1,
                active_items: 2,
                largest_cluster: 2,
            }
        );
        assert_eq!(stats.redundant_items(), 1);
    }

    #[test]
    fn test_cluster_entries_first_seen_order() {
        let (clusters, _) =
            cluster_entries(entries(&[("a", "z"), ("b", "y"), ("c", "z"), ("d", "x")]));
        let hashes: Vec<&str> = clusters.iter().map(|c| c.hash.as_str()).collect();

        assert_eq!(hashes, vec!["z", "y", "x"]);
        assert_eq!(clusters[0].members, vec!["a", "c"]);
    }

    #[test]
    fn test_cluster_entries_empty() {
        let (clusters, stats) = cluster_entries(Vec::new());
        assert!(clusters.is_empty());
        assert_eq!(stats, ClusterStats::default());
    }

    #[test]
    fn test_hash_match_is_exact() {
        let (clusters, _) = cluster_entries(entries(&[("a", "ABC"), ("b", "abc")]));
        assert_eq!(clusters.len(), 2);
        assert!(clusters.iter().all(|c| !c.is_active()));
    }

    #[test]
    fn test_cluster_kind_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&ClusterKind::Active).unwrap(),
            "\"active\""
        );
        assert_eq!(ClusterKind::Unique.to_string(), "unique");
    }
}
