use std::path::PathBuf;

use indexmap::IndexMap;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Result, StyleGateError};
use crate::scanner::DEFAULT_EXCLUSION_MARKER;

/// Checkstyle-style report lines: `[ERROR] path:line:col: message [Check]`.
pub const DEFAULT_VIOLATION_PATTERN: &str = r"^\[(ERROR|WARN)\]";

/// CPD text report header, one per duplicate.
pub const DEFAULT_MATCH_PATTERN: &str = r"^Found a \d+ line \(\d+ tokens\) duplication";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub scan: ScanConfig,

    #[serde(default)]
    pub style: StyleConfig,

    #[serde(default)]
    pub duplicates: DuplicatesConfig,
}

/// Source discovery settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScanConfig {
    /// Traversal root, relative to the directory holding the config file
    /// (the working directory when no project config is used).
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// File extension without the leading dot.
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Paths containing this substring are never collected. Empty disables it.
    #[serde(default = "default_exclude_marker")]
    pub exclude_marker: String,

    /// Extra glob patterns to exclude.
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            extension: default_extension(),
            exclude_marker: default_exclude_marker(),
            exclude: Vec::new(),
        }
    }
}

/// Style checker invocation and the rule sets it runs with.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StyleConfig {
    /// Program and arguments. `{rules}` is replaced with the rule-set path and
    /// the collected files are appended.
    #[serde(default = "default_style_command")]
    pub command: Vec<String>,

    /// Each output line matching this regex counts as one violation.
    #[serde(default = "default_violation_pattern")]
    pub violation_pattern: String,

    /// One suite per rule set, run in file order.
    #[serde(default = "default_suites")]
    pub suites: IndexMap<String, StyleSuiteConfig>,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            command: default_style_command(),
            violation_pattern: default_violation_pattern(),
            suites: default_suites(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StyleSuiteConfig {
    /// Rule-set file, relative to the config file's directory.
    pub rules: PathBuf,

    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl StyleSuiteConfig {
    fn new(rules: &str) -> Self {
        Self {
            rules: PathBuf::from(rules),
            enabled: true,
        }
    }
}

/// Copy-paste detector invocation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DuplicatesConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default = "default_extension")]
    pub language: String,

    /// Minimum number of tokens a duplicate must span.
    #[serde(default = "default_minimum_tile_size")]
    pub minimum_tile_size: usize,

    /// Program and arguments. `{language}` and `{minimum_tile_size}` are
    /// substituted and the collected files are appended.
    #[serde(default = "default_duplicates_command")]
    pub command: Vec<String>,

    /// Each output line matching this regex counts as one match.
    #[serde(default = "default_match_pattern")]
    pub match_pattern: String,
}

impl Default for DuplicatesConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            language: default_extension(),
            minimum_tile_size: default_minimum_tile_size(),
            command: default_duplicates_command(),
            match_pattern: default_match_pattern(),
        }
    }
}

impl Config {
    /// Check values serde cannot reject on its own.
    ///
    /// # Errors
    /// Returns a `Config` error for empty or malformed settings, or an
    /// `InvalidRegex` error for report patterns that do not compile.
    pub fn validate(&self) -> Result<()> {
        let ext = &self.scan.extension;
        if ext.is_empty() {
            return Err(StyleGateError::Config(
                "scan.extension must not be empty".to_string(),
            ));
        }
        if ext.starts_with('.') {
            return Err(StyleGateError::Config(format!(
                "scan.extension '{ext}' must not start with '.'"
            )));
        }

        if self.style.suites.values().any(|s| s.enabled) {
            check_command("style.command", &self.style.command)?;
            compile_pattern(&self.style.violation_pattern)?;
        }

        if self.duplicates.enabled {
            check_command("duplicates.command", &self.duplicates.command)?;
            compile_pattern(&self.duplicates.match_pattern)?;
            if self.duplicates.minimum_tile_size == 0 {
                return Err(StyleGateError::Config(
                    "duplicates.minimum_tile_size must be greater than 0".to_string(),
                ));
            }
        }

        Ok(())
    }
}

fn check_command(key: &str, command: &[String]) -> Result<()> {
    match command.first() {
        Some(program) if !program.trim().is_empty() => Ok(()),
        _ => Err(StyleGateError::Config(format!(
            "{key} must name a program"
        ))),
    }
}

pub(crate) fn compile_pattern(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|source| StyleGateError::InvalidRegex {
        pattern: pattern.to_string(),
        source,
    })
}

const fn default_true() -> bool {
    true
}

fn default_root() -> PathBuf {
    PathBuf::from("src")
}

fn default_extension() -> String {
    "java".to_string()
}

fn default_exclude_marker() -> String {
    DEFAULT_EXCLUSION_MARKER.to_string()
}

fn default_style_command() -> Vec<String> {
    ["checkstyle", "-c", "{rules}"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_violation_pattern() -> String {
    DEFAULT_VIOLATION_PATTERN.to_string()
}

fn default_suites() -> IndexMap<String, StyleSuiteConfig> {
    const RULES_DIR: &str = "src/test/java/ir/ac/kntu/style";
    ["blocks", "naming", "imports"]
        .into_iter()
        .map(|name| {
            (
                name.to_string(),
                StyleSuiteConfig::new(&format!("{RULES_DIR}/{name}.xml")),
            )
        })
        .collect()
}

const fn default_minimum_tile_size() -> usize {
    60
}

fn default_duplicates_command() -> Vec<String> {
    [
        "pmd",
        "cpd",
        "--language",
        "{language}",
        "--minimum-tokens",
        "{minimum_tile_size}",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn default_match_pattern() -> String {
    DEFAULT_MATCH_PATTERN.to_string()
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
