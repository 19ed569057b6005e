use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::error::{Result, StyleGateError};

/// Generated module descriptors never go through the style gate.
pub const DEFAULT_EXCLUSION_MARKER: &str = "module-info.java";

pub trait FileFilter {
    fn should_include(&self, path: &Path) -> bool;
}

/// Matches a case-sensitive `.{extension}` suffix against the full path text.
///
/// A path containing the exclusion marker anywhere, or matching one of the
/// optional exclude globs, is rejected even when the suffix matches.
#[derive(Debug, Clone)]
pub struct ExtensionFilter {
    suffix: String,
    exclusion_marker: Option<String>,
    exclude_patterns: GlobSet,
}

impl ExtensionFilter {
    /// Filter on `extension` with the default exclusion marker.
    #[must_use]
    pub fn new(extension: &str) -> Self {
        Self {
            suffix: format!(".{extension}"),
            exclusion_marker: Some(DEFAULT_EXCLUSION_MARKER.to_string()),
            exclude_patterns: GlobSet::empty(),
        }
    }

    /// Replace the exclusion marker. `None` or an empty marker disables it.
    #[must_use]
    pub fn with_exclusion_marker(mut self, marker: Option<String>) -> Self {
        self.exclusion_marker = marker.filter(|m| !m.is_empty());
        self
    }

    /// Add glob exclude patterns on top of the marker.
    ///
    /// # Errors
    /// Returns an error if any exclude pattern is invalid.
    pub fn with_exclude_patterns(mut self, patterns: &[String]) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            let glob = Glob::new(pattern).map_err(|e| StyleGateError::InvalidPattern {
                pattern: pattern.clone(),
                source: e,
            })?;
            builder.add(glob);
        }
        self.exclude_patterns = builder
            .build()
            .map_err(|e| StyleGateError::InvalidPattern {
                pattern: "combined patterns".to_string(),
                source: e,
            })?;
        Ok(self)
    }

    #[must_use]
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    fn is_excluded(&self, path: &Path, text: &str) -> bool {
        self.exclusion_marker
            .as_deref()
            .is_some_and(|marker| text.contains(marker))
            || self.exclude_patterns.is_match(path)
    }
}

impl FileFilter for ExtensionFilter {
    fn should_include(&self, path: &Path) -> bool {
        let text = path.to_string_lossy();
        text.ends_with(&self.suffix) && !self.is_excluded(path, &text)
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
