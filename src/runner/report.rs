use std::path::{Path, PathBuf};

use crate::error::Error;

/// Exit status of a run in which some path failed.
pub const EXIT_FAILURE: u8 = 2;

/// Result of processing one positional path.
#[derive(Debug)]
pub struct PathOutcome {
    pub path: PathBuf,
    /// Number of source units emitted, or everything that went wrong.
    pub result: Result<usize, Vec<Error>>,
}

impl PathOutcome {
    pub fn success(path: impl Into<PathBuf>, units: usize) -> Self {
        Self {
            path: path.into(),
            result: Ok(units),
        }
    }

    pub fn failure(path: impl Into<PathBuf>, errors: Vec<Error>) -> Self {
        Self {
            path: path.into(),
            result: Err(errors),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

#[derive(Debug, Default)]
pub struct RunReport {
    pub outcomes: Vec<PathOutcome>,
}

impl RunReport {
    pub fn push(&mut self, outcome: PathOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn has_errors(&self) -> bool {
        self.outcomes.iter().any(|o| !o.is_ok())
    }

    pub fn errors(&self) -> impl Iterator<Item = &Error> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().err())
            .flatten()
    }

    pub fn units_written(&self) -> usize {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().ok())
            .sum()
    }

    pub fn exit_code(&self) -> u8 {
        if self.has_errors() {
            EXIT_FAILURE
        } else {
            0
        }
    }
}
