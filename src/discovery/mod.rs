//! Enumerating the Go files of a directory.

mod filter;

use std::path::{Path, PathBuf};

use tracing::trace;
use walkdir::WalkDir;

use crate::error::IoError;

pub use filter::{SourceFilter, DEFAULT_EXCLUDE_SUFFIX, GO_EXTENSION};

/// Direct member files of `dir` accepted by `filter`, sorted by name.
/// Subdirectories are neither returned nor entered.
pub fn list_source_files(dir: &Path, filter: &SourceFilter) -> Result<Vec<PathBuf>, IoError> {
    let mut files = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| IoError::directory_scan_error(dir, e))?;
        if !entry.file_type().is_file() {
            continue;
        }
        if filter.accepts(entry.path()) {
            files.push(entry.into_path());
        } else {
            trace!(path = %entry.path().display(), "skipping file");
        }
    }

    Ok(files)
}
