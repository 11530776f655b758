//! Go test skipper
//!
//! Adds or removes a `t.Skip()` call as the first statement of every Go test
//! function (`func TestXxx(t *testing.T)`) in the given files and package
//! directories. Sources are parsed with Tree-sitter and changed through byte
//! edits, so everything outside the toggled statement is left untouched.
pub mod cli;
pub mod config;
pub mod discovery;
pub mod error;
pub mod logging;
pub mod output;
pub mod runner;
pub mod skipper;
pub mod source;

pub use config::SkipperConfig;
pub use error::{Error, Result};
pub use runner::{OutputMode, Runner, RunReport};
pub use skipper::{SignatureTemplate, ToggleAction};
