use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IoError {
    #[error("{path}: no such file or directory")]
    FileNotFound { path: PathBuf },

    #[error("{path}: cannot stat: {source}")]
    StatError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{path}: failed to read: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{path}: failed to write: {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{path}: failed to scan directory: {source}")]
    DirectoryScanError {
        path: PathBuf,
        source: walkdir::Error,
    },

    #[error("{path}: path is neither file nor directory")]
    InvalidPath { path: PathBuf },
}

impl IoError {
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Classifies a failed `metadata` call: a missing path gets its own variant.
    pub fn stat_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            return Self::file_not_found(path);
        }
        Self::StatError {
            path: path.into(),
            source,
        }
    }

    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadError {
            path: path.into(),
            source,
        }
    }

    pub fn write_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::WriteError {
            path: path.into(),
            source,
        }
    }

    pub fn directory_scan_error(path: impl Into<PathBuf>, source: walkdir::Error) -> Self {
        Self::DirectoryScanError {
            path: path.into(),
            source,
        }
    }

    pub fn invalid_path(path: impl Into<PathBuf>) -> Self {
        Self::InvalidPath { path: path.into() }
    }
}
