//! Scanner module for reading precomputed per-item hashes.
//!
//! The input directory holds one file per item. The file name is the item
//! identifier and the file content is the item's hash token.
//!
//! # Example
//!
//! ```no_run
//! use hashcluster::scanner::read_entries;
//! use std::path::Path;
//!
//! for entry in read_entries(Path::new("DATA/trun")).unwrap() {
//!     println!("{} -> {}", entry.id, entry.hash);
//! }
//! ```

pub mod reader;

use std::path::PathBuf;

pub use reader::{read_entries, read_hash};

/// One item read from the input directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashEntry {
    /// Item identifier (the input file name)
    pub id: String,
    /// Trimmed hash token (the input file content)
    pub hash: String,
}

impl HashEntry {
    /// Create a new HashEntry.
    #[must_use]
    pub fn new(id: impl Into<String>, hash: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            hash: hash.into(),
        }
    }
}

/// Errors that can occur while reading the input directory.
#[derive(thiserror::Error, Debug)]
pub enum ScanError {
    /// Permission was denied when accessing a file or directory.
    #[error("Permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// The specified path was not found.
    #[error("Path not found: {0}")]
    NotFound(PathBuf),

    /// The specified path is not a directory.
    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),

    /// An entry of the input directory is itself a directory.
    #[error("Is a directory: {0}")]
    IsADirectory(PathBuf),

    /// A file name or a file's content is not valid UTF-8.
    #[error("Not valid UTF-8: {0}")]
    InvalidUtf8(PathBuf),

    /// An I/O error occurred while accessing a file.
    #[error("I/O error for {path}: {source}")]
    Io {
        /// Path where the error occurred
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },
}
