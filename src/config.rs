use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::discovery::{SourceFilter, DEFAULT_EXCLUDE_SUFFIX, GO_EXTENSION};
use crate::error::ConfigError;
use crate::skipper::{SignatureTemplate, DEFAULT_TEST_IMPORT, DEFAULT_TEST_PREFIX};

/// Settings for one run. Every field may be omitted from a config file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SkipperConfig {
    /// Name prefix of test functions.
    pub prefix: String,
    /// Local name of the `testing` import.
    pub test_import: String,
    /// Base-name suffix excluded when scanning directories.
    pub exclude_suffix: String,
    /// Extension of source files picked up when scanning directories.
    pub extension: String,
}

impl Default for SkipperConfig {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_TEST_PREFIX.to_string(),
            test_import: DEFAULT_TEST_IMPORT.to_string(),
            exclude_suffix: DEFAULT_EXCLUDE_SUFFIX.to_string(),
            extension: GO_EXTENSION.to_string(),
        }
    }
}

impl SkipperConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading config");

        let content = fs::read_to_string(path)
            .map_err(|e| ConfigError::read_error(path, e.to_string()))?;

        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        let config: Self = match extension {
            "json" => serde_json::from_str(&content)
                .map_err(|e| ConfigError::parse_error(path, e.to_string()))?,
            "yaml" | "yml" => serde_yaml::from_str(&content)
                .map_err(|e| ConfigError::parse_error(path, e.to_string()))?,
            _ => return Err(ConfigError::unsupported_format(extension)),
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.prefix.is_empty() {
            return Err(ConfigError::invalid("prefix must not be empty"));
        }
        if !is_identifier(&self.test_import) {
            return Err(ConfigError::invalid(format!(
                "test import '{}' is not a Go identifier",
                self.test_import
            )));
        }
        if self.extension.is_empty() || self.extension.starts_with('.') {
            return Err(ConfigError::invalid(format!(
                "extension '{}' must be non-empty and given without a leading dot",
                self.extension
            )));
        }
        Ok(())
    }

    pub fn signature_template(&self) -> SignatureTemplate {
        SignatureTemplate::new(self.prefix.clone(), &self.test_import)
    }

    pub fn source_filter(&self) -> SourceFilter {
        SourceFilter::new(self.extension.clone(), self.exclude_suffix.clone())
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' => {
            chars.all(|c| c.is_alphanumeric() || c == '_')
        }
        _ => false,
    }
}
