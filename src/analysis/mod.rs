//! Seams to the external analysis tools.
//!
//! The style checker and the copy-paste detector are opaque: they receive the
//! collected files (plus a rule set, for style) and report what they found.
//! Nothing here evaluates rules or tiles tokens.

mod command;

pub use command::{CommandDuplicateDetector, CommandStyleChecker};

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{Result, StyleGateError};

/// A style rule configuration loaded from disk.
///
/// `contents` holds the raw bytes; rule files declare their own encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet {
    pub name: String,
    pub path: PathBuf,
    pub contents: Vec<u8>,
}

impl RuleSet {
    /// Read the rule-set file at `path`.
    ///
    /// # Errors
    /// Returns `FileRead` if the file is missing or unreadable.
    pub fn load(name: &str, path: &Path) -> Result<Self> {
        let contents = fs::read(path).map_err(|source| StyleGateError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self {
            name: name.to_string(),
            path: path.to_path_buf(),
            contents,
        })
    }
}

/// What the style checker reported for one rule set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StyleReport {
    pub violations: usize,
    pub output: String,
}

impl StyleReport {
    #[must_use]
    pub const fn is_clean(&self) -> bool {
        self.violations == 0
    }
}

/// One duplicated region reported by the copy-paste detector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DuplicateMatch {
    pub summary: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DuplicateReport {
    pub matches: Vec<DuplicateMatch>,
    pub output: String,
}

impl DuplicateReport {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.matches.is_empty()
    }
}

/// Runs a style rule set over source files.
pub trait StyleChecker: Sync {
    /// # Errors
    /// Returns an error if the checker cannot be run at all.
    fn process(&self, rules: &RuleSet, files: &[PathBuf]) -> Result<StyleReport>;
}

/// Looks for copy-pasted code across source files.
pub trait DuplicateDetector: Sync {
    /// # Errors
    /// Returns an error if the detector cannot be run at all.
    fn detect(&self, files: &[PathBuf]) -> Result<DuplicateReport>;
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
