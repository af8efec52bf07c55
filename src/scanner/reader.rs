//! Input directory reader.
//!
//! Lists the input directory one level deep, in file-name order, and reads
//! each item's trimmed hash token. Any failure aborts the scan: a partial
//! set of entries would produce wrong clusters.

use std::io::ErrorKind;
use std::path::Path;

use walkdir::WalkDir;

use super::{HashEntry, ScanError};

/// Read every item of the input directory.
///
/// Entries come back sorted by file name so cluster member order is
/// deterministic. Symbolic links are followed.
///
/// # Errors
///
/// Returns [`ScanError::NotFound`] or [`ScanError::NotADirectory`] if `dir`
/// is unusable, [`ScanError::IsADirectory`] for a subdirectory entry,
/// [`ScanError::InvalidUtf8`] for a non-UTF-8 name or content, and a
/// permission or I/O error for anything that cannot be read.
pub fn read_entries(dir: &Path) -> Result<Vec<HashEntry>, ScanError> {
    let metadata = std::fs::metadata(dir).map_err(|e| io_error(dir, e))?;
    if !metadata.is_dir() {
        return Err(ScanError::NotADirectory(dir.to_path_buf()));
    }

    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name();

    let mut entries = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|e| walk_error(dir, e))?;
        let path = entry.path();

        if entry.file_type().is_dir() {
            return Err(ScanError::IsADirectory(path.to_path_buf()));
        }

        let id = entry
            .file_name()
            .to_str()
            .ok_or_else(|| ScanError::InvalidUtf8(path.to_path_buf()))?
            .to_string();
        let hash = read_hash(path)?;
        log::trace!("{} -> {}", id, hash);

        entries.push(HashEntry { id, hash });
    }

    Ok(entries)
}

/// Read one item file and return its content with surrounding whitespace removed.
///
/// Whitespace is the Unicode `White_Space` set plus the ASCII information
/// separators `\x1c`..=`\x1f`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid UTF-8.
pub fn read_hash(path: &Path) -> Result<String, ScanError> {
    let bytes = std::fs::read(path).map_err(|e| io_error(path, e))?;
    let text = String::from_utf8(bytes).map_err(|_| ScanError::InvalidUtf8(path.to_path_buf()))?;
    Ok(text.trim_matches(is_hash_padding).to_string())
}

fn is_hash_padding(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

fn io_error(path: &Path, error: std::io::Error) -> ScanError {
    match error.kind() {
        ErrorKind::PermissionDenied => ScanError::PermissionDenied(path.to_path_buf()),
        ErrorKind::NotFound => ScanError::NotFound(path.to_path_buf()),
        _ => ScanError::Io {
            path: path.to_path_buf(),
            source: error,
        },
    }
}

fn walk_error(root: &Path, error: walkdir::Error) -> ScanError {
    let path = error
        .path()
        .map_or_else(|| root.to_path_buf(), Path::to_path_buf);
    log::warn!("Failed to list {}: {}", path.display(), error);

    match error.into_io_error() {
        Some(io) => io_error(&path, io),
        None => ScanError::Io {
            path,
            source: std::io::Error::other("filesystem loop detected"),
        },
    }
}
