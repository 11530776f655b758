//! Buffered output of transformed source units.
//!
//! [`PathWriter`] keeps one buffer per origin path until the run decides where
//! the text goes: back into the files, or concatenated into one stream.

use std::collections::BTreeMap;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{Error, IoError, Result};

const STDOUT_LABEL: &str = "<stdout>";

#[derive(Debug, Default)]
pub struct PathWriter {
    buffers: BTreeMap<PathBuf, Vec<u8>>,
}

impl PathWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the buffer for `path`, registering an empty one on first use.
    pub fn buffer_for(&mut self, path: &Path) -> &mut Vec<u8> {
        self.buffers.entry(path.to_path_buf()).or_default()
    }

    /// Stores the printed text of one unit. Each path is expected once per run.
    pub fn store(&mut self, path: &Path, text: &str) {
        let buffer = self.buffer_for(path);
        if !buffer.is_empty() {
            warn!(path = %path.display(), "path written more than once in one run");
        }
        buffer.extend_from_slice(text.as_bytes());
    }

    pub fn len(&self) -> usize {
        self.buffers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffers.is_empty()
    }

    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.buffers.keys().map(PathBuf::as_path)
    }

    /// Overwrites every buffered path with its text. Files are truncated but
    /// never created. All paths are attempted; on failure every error is returned.
    pub fn write_to_files(self) -> std::result::Result<usize, Vec<Error>> {
        let mut written = 0;
        let mut errors = Vec::new();

        for (path, buffer) in self.buffers {
            match overwrite(&path, &buffer) {
                Ok(()) => {
                    debug!(path = %path.display(), bytes = buffer.len(), "wrote file");
                    written += 1;
                }
                Err(e) => errors.push(e.into()),
            }
        }

        if errors.is_empty() {
            Ok(written)
        } else {
            Err(errors)
        }
    }

    /// Concatenates every buffer into `out`.
    pub fn write_to<W: Write>(self, out: &mut W) -> Result<usize> {
        let count = self.buffers.len();
        for buffer in self.buffers.values() {
            out.write_all(buffer)
                .map_err(|e| IoError::write_error(STDOUT_LABEL, e))?;
        }
        out.flush()
            .map_err(|e| IoError::write_error(STDOUT_LABEL, e))?;
        Ok(count)
    }
}

fn overwrite(path: &Path, contents: &[u8]) -> std::result::Result<(), IoError> {
    let mut file = OpenOptions::new()
        .write(true)
        .truncate(true)
        .open(path)
        .map_err(|e| IoError::write_error(path, e))?;
    file.write_all(contents)
        .map_err(|e| IoError::write_error(path, e))?;
    file.flush().map_err(|e| IoError::write_error(path, e))
}
