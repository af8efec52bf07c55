//! Cluster file writer.
//!
//! Each cluster becomes one file named after its hash token, inside the
//! unique or the active directory. Existing files of the same name are
//! truncated and rewritten; nothing else in the directories is touched.

use std::path::{Path, PathBuf};

use crate::clusters::{Cluster, ClusterKind};
use crate::config::Layout;

/// Counts from a completed write pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WriteReport {
    /// Files written to the unique directory
    pub unique_written: usize,
    /// Files written to the active directory
    pub active_written: usize,
    /// Total bytes written
    pub bytes_written: u64,
}

/// Errors that can occur while writing cluster files.
#[derive(thiserror::Error, Debug)]
pub enum WriteError {
    /// An output directory does not exist and creation was not requested.
    #[error("Output directory does not exist: {0}")]
    MissingDirectory(PathBuf),

    /// An I/O error occurred while creating a directory or writing a file.
    #[error("I/O error for {path}: {source}")]
    Io {
        /// Path where the error occurred
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Writes clusters into the unique and active directories of a [`Layout`].
#[derive(Debug, Clone)]
pub struct ClusterWriter {
    layout: Layout,
    create_dirs: bool,
}

impl ClusterWriter {
    /// Create a writer for `layout`. Missing output directories are an error.
    #[must_use]
    pub fn new(layout: Layout) -> Self {
        Self {
            layout,
            create_dirs: false,
        }
    }

    /// Create missing output directories instead of failing.
    #[must_use]
    pub fn with_create_dirs(mut self, create_dirs: bool) -> Self {
        self.create_dirs = create_dirs;
        self
    }

    /// Directory receiving clusters of `kind`.
    #[must_use]
    pub fn directory(&self, kind: ClusterKind) -> &Path {
        match kind {
            ClusterKind::Unique => &self.layout.unique_dir,
            ClusterKind::Active => &self.layout.active_dir,
        }
    }

    /// Full path of the file `cluster` is written to.
    #[must_use]
    pub fn destination(&self, cluster: &Cluster) -> PathBuf {
        self.directory(cluster.kind()).join(&cluster.hash)
    }

    /// Write every cluster.
    ///
    /// Only directories that will receive at least one file are checked, and
    /// they are all checked before the first file is written.
    ///
    /// # Errors
    ///
    /// Returns [`WriteError::MissingDirectory`] if a needed directory is absent
    /// and creation is disabled, or [`WriteError::Io`] on the first failed
    /// directory creation or file write.
    pub fn write_all(&self, clusters: &[Cluster]) -> Result<WriteReport, WriteError> {
        for kind in [ClusterKind::Unique, ClusterKind::Active] {
            if clusters.iter().any(|c| c.kind() == kind) {
                self.ensure_directory(self.directory(kind))?;
            }
        }

        let mut report = WriteReport::default();
        for cluster in clusters {
            let path = self.destination(cluster);
            let contents = cluster.contents();

            std::fs::write(&path, &contents).map_err(|source| WriteError::Io {
                path: path.clone(),
                source,
            })?;
            log::trace!("Wrote {} ({} members)", path.display(), cluster.len());

            report.bytes_written += contents.len() as u64;
            match cluster.kind() {
                ClusterKind::Unique => report.unique_written += 1,
                ClusterKind::Active => report.active_written += 1,
            }
        }

        Ok(report)
    }

    fn ensure_directory(&self, dir: &Path) -> Result<(), WriteError> {
        if dir.is_dir() {
            return Ok(());
        }
        if !self.create_dirs {
            return Err(WriteError::MissingDirectory(dir.to_path_buf()));
        }

        log::info!("Creating output directory {}", dir.display());
        std::fs::create_dir_all(dir).map_err(|source| WriteError::Io {
            path: dir.to_path_buf(),
            source,
        })
    }
}
