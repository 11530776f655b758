//! Running the skipper over the paths given on the command line.

mod report;

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::SkipperConfig;
use crate::discovery::{list_source_files, SourceFilter};
use crate::error::{Error, IoError, Result};
use crate::output::PathWriter;
use crate::skipper::{toggle_unit, SignatureTemplate, ToggleAction};
use crate::source::SourceUnit;

pub use report::{PathOutcome, RunReport, EXIT_FAILURE};

/// Where transformed text ends up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Overwrite each originating file.
    InPlace,
    /// Concatenate everything into one stream.
    Stream,
}

impl OutputMode {
    pub fn from_write_flag(write: bool) -> Self {
        if write {
            Self::InPlace
        } else {
            Self::Stream
        }
    }
}

#[derive(Debug, Clone)]
pub struct Runner {
    template: SignatureTemplate,
    filter: SourceFilter,
    action: ToggleAction,
    mode: OutputMode,
}

impl Runner {
    pub fn new(config: &SkipperConfig, action: ToggleAction, mode: OutputMode) -> Self {
        Self {
            template: config.signature_template(),
            filter: config.source_filter(),
            action,
            mode,
        }
    }

    pub fn template(&self) -> &SignatureTemplate {
        &self.template
    }

    /// Processes every path in order. A failing path is recorded and the
    /// remaining ones are still attempted.
    pub fn run<W: Write>(&self, paths: &[PathBuf], out: &mut W) -> RunReport {
        let mut report = RunReport::default();

        for path in paths {
            let outcome = match self.collect(path) {
                Ok(writer) => match self.flush(writer, out) {
                    Ok(units) => PathOutcome::success(path, units),
                    Err(errors) => PathOutcome::failure(path, errors),
                },
                Err(e) => PathOutcome::failure(path, vec![e]),
            };

            if let Err(errors) = &outcome.result {
                for error in errors {
                    debug!(path = %path.display(), error = %error, "path failed");
                }
            }
            report.push(outcome);
        }

        info!(
            paths = paths.len(),
            units = report.units_written(),
            failed = report.errors().count(),
            "run finished"
        );
        report
    }

    /// Transforms `path` (a file, or every eligible file directly inside a
    /// directory) into a fresh [`PathWriter`]. Nothing is buffered for a path
    /// when any of its files fails.
    pub fn collect(&self, path: &Path) -> Result<PathWriter> {
        let metadata = fs::metadata(path).map_err(|e| IoError::stat_error(path, e))?;
        let mut writer = PathWriter::new();

        if metadata.is_dir() {
            let files = list_source_files(path, &self.filter)?;
            debug!(dir = %path.display(), files = files.len(), "scanning directory");
            let units = files
                .iter()
                .map(|file| SourceUnit::read(file))
                .collect::<Result<Vec<_>>>()?;
            for unit in units {
                self.transform(unit, &mut writer)?;
            }
        } else if metadata.is_file() {
            self.transform(SourceUnit::read(path)?, &mut writer)?;
        } else {
            return Err(IoError::invalid_path(path).into());
        }

        Ok(writer)
    }

    fn transform(&self, mut unit: SourceUnit, writer: &mut PathWriter) -> Result<()> {
        toggle_unit(&mut unit, &self.template, self.action)?;
        let path = unit.path().to_path_buf();
        writer.store(&path, &unit.into_text());
        Ok(())
    }

    fn flush<W: Write>(
        &self,
        writer: PathWriter,
        out: &mut W,
    ) -> std::result::Result<usize, Vec<Error>> {
        match self.mode {
            OutputMode::InPlace => writer.write_to_files(),
            OutputMode::Stream => writer.write_to(out).map_err(|e| vec![e]),
        }
    }
}
