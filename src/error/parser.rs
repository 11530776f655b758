use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParserError {
    #[error("failed to set parser language: {language}")]
    LanguageSetupFailed { language: String },

    #[error("{path}: parser produced no syntax tree")]
    ParseFailed { path: PathBuf },

    #[error("{path}:{line}:{column}: {message}")]
    SyntaxError {
        path: PathBuf,
        line: usize,
        column: usize,
        message: String,
    },
}

impl ParserError {
    pub fn language_setup_failed(language: impl Into<String>) -> Self {
        Self::LanguageSetupFailed {
            language: language.into(),
        }
    }

    pub fn parse_failed(path: impl Into<PathBuf>) -> Self {
        Self::ParseFailed { path: path.into() }
    }

    pub fn syntax_error(
        path: impl Into<PathBuf>,
        line: usize,
        column: usize,
        message: impl Into<String>,
    ) -> Self {
        Self::SyntaxError {
            path: path.into(),
            line,
            column,
            message: message.into(),
        }
    }
}
