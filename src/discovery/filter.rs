use std::path::Path;

pub const GO_EXTENSION: &str = "go";

/// Historical exclusion marker. It is compared against the whole base name,
/// so `foo_test.go` is *not* excluded by it.
pub const DEFAULT_EXCLUDE_SUFFIX: &str = "_test";

/// Decides which direct members of a directory are processed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFilter {
    extension: String,
    exclude_suffix: String,
}

impl Default for SourceFilter {
    fn default() -> Self {
        Self::new(GO_EXTENSION, DEFAULT_EXCLUDE_SUFFIX)
    }
}

impl SourceFilter {
    pub fn new(extension: impl Into<String>, exclude_suffix: impl Into<String>) -> Self {
        Self {
            extension: extension.into(),
            exclude_suffix: exclude_suffix.into(),
        }
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    pub fn exclude_suffix(&self) -> &str {
        &self.exclude_suffix
    }

    /// An empty suffix excludes nothing.
    pub fn is_excluded(&self, file_name: &str) -> bool {
        !self.exclude_suffix.is_empty() && file_name.ends_with(&self.exclude_suffix)
    }

    pub fn accepts(&self, path: &Path) -> bool {
        let Some(file_name) = path.file_name().map(|n| n.to_string_lossy()) else {
            return false;
        };
        if self.is_excluded(&file_name) {
            return false;
        }
        path.extension()
            .is_some_and(|ext| ext.to_string_lossy() == self.extension)
    }
}
