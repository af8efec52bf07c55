//! Cluster assembly module.
//!
//! This module provides functionality for:
//! - Grouping item identifiers by hash token
//! - Classifying clusters as unique or active
//! - Checking that every hash token is usable as an output file name

pub mod groups;

pub use groups::{cluster_entries, Cluster, ClusterKind, ClusterStats};

/// Errors that make a set of clusters unwritable.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ClusterError {
    /// The hash token cannot be used as a file name inside the output directory.
    #[error("Hash of item '{id}' is not a valid cluster file name: {hash:?}")]
    InvalidHashKey {
        /// First item carrying the hash
        id: String,
        /// The offending hash token
        hash: String,
    },
}

/// Check whether a hash token names a plain file directly inside a directory.
///
/// Empty tokens, `.`, `..`, and tokens containing a path separator or NUL are
/// rejected.
#[must_use]
pub fn is_valid_hash_key(hash: &str) -> bool {
    !hash.is_empty()
        && hash != "."
        && hash != ".."
        && !hash.contains(['/', '\\', '\0'])
}

/// Validate every cluster's hash token before anything is written.
///
/// # Errors
///
/// Returns [`ClusterError::InvalidHashKey`] for the first offending cluster.
pub fn validate_keys(clusters: &[Cluster]) -> Result<(), ClusterError> {
    match clusters.iter().find(|c| !is_valid_hash_key(&c.hash)) {
        Some(cluster) => Err(ClusterError::InvalidHashKey {
            id: cluster.members.first().cloned().unwrap_or_default(),
            hash: cluster.hash.clone(),
        }),
        None => Ok(()),
    }
}
