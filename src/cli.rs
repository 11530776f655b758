use clap::Parser;
use std::path::PathBuf;

use crate::config::SkipperConfig;
use crate::error::ConfigError;
use crate::runner::OutputMode;
use crate::skipper::ToggleAction;

#[derive(Parser, Debug)]
#[command(name = "gotestskipper")]
#[command(
    about = "Add or remove a t.Skip() call at the start of every Go test function",
    long_about = None
)]
pub struct Args {
    /// Go files or package directories to process
    #[arg(required = true, value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Write results back to the source files instead of stdout
    #[arg(short, long)]
    pub write: bool,

    /// Remove the skip marker instead of adding it
    #[arg(short, long)]
    pub unskip: bool,

    /// Local name under which the "testing" package is imported
    #[arg(long, value_name = "NAME")]
    pub test_import: Option<String>,

    /// Name prefix of test functions
    #[arg(long, value_name = "PREFIX")]
    pub prefix: Option<String>,

    /// Skip files whose base name ends with this when scanning directories
    #[arg(long, value_name = "SUFFIX")]
    pub exclude_suffix: Option<String>,

    /// Config file (JSON or YAML)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all logging except errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Loads the config file if one was given, then applies flag overrides.
    pub fn resolve_config(&self) -> Result<SkipperConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => SkipperConfig::load(path)?,
            None => SkipperConfig::default(),
        };

        if let Some(prefix) = &self.prefix {
            config.prefix = prefix.clone();
        }
        if let Some(test_import) = &self.test_import {
            config.test_import = test_import.clone();
        }
        if let Some(suffix) = &self.exclude_suffix {
            config.exclude_suffix = suffix.clone();
        }

        config.validate()?;
        Ok(config)
    }

    pub fn action(&self) -> ToggleAction {
        ToggleAction::from_unskip(self.unskip)
    }

    pub fn output_mode(&self) -> OutputMode {
        OutputMode::from_write_flag(self.write)
    }
}
