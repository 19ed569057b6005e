mod result;

pub use result::{GateReport, SuiteKind, SuiteOutcome, SuiteResult};

use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::analysis::{DuplicateDetector, RuleSet, StyleChecker};
use crate::config::Config;

/// Name of the copy-paste detection suite in reports.
pub const DUPLICATES_SUITE: &str = "cpd";

enum PlannedSuite {
    Style { name: String, rules: PathBuf },
    Duplicates,
}

/// Runs every enabled suite over one collected file list.
///
/// A suite passes only when its collaborator reports nothing. Suites are
/// independent and run in parallel; results keep the configured order.
#[derive(Default)]
pub struct Gate<'a> {
    style: Option<&'a dyn StyleChecker>,
    duplicates: Option<&'a dyn DuplicateDetector>,
}

impl<'a> Gate<'a> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            style: None,
            duplicates: None,
        }
    }

    #[must_use]
    pub const fn with_style_checker(mut self, checker: &'a dyn StyleChecker) -> Self {
        self.style = Some(checker);
        self
    }

    #[must_use]
    pub const fn with_duplicate_detector(mut self, detector: &'a dyn DuplicateDetector) -> Self {
        self.duplicates = Some(detector);
        self
    }

    /// Run the suites enabled in `config` over `files`.
    ///
    /// Rule-set paths resolve against `base_dir`.
    #[must_use]
    pub fn run(
        &self,
        config: &Config,
        base_dir: &Path,
        root: &Path,
        files: Vec<PathBuf>,
    ) -> GateReport {
        let plan = plan_suites(config, base_dir);

        let results = plan
            .par_iter()
            .map(|suite| match suite {
                PlannedSuite::Style { name, rules } => self.run_style(name, rules, &files),
                PlannedSuite::Duplicates => self.run_duplicates(&files),
            })
            .collect();

        GateReport {
            root: root.to_path_buf(),
            files,
            results,
        }
    }

    fn run_style(&self, name: &str, rules_path: &Path, files: &[PathBuf]) -> SuiteResult {
        let Some(checker) = self.style else {
            return SuiteResult::errored(name, SuiteKind::Style, "no style checker configured");
        };

        let rules = match RuleSet::load(name, rules_path) {
            Ok(rules) => rules,
            Err(e) => {
                tracing::warn!(suite = name, error = %e, "rule configuration could not be loaded");
                return SuiteResult::errored(
                    name,
                    SuiteKind::Style,
                    format!("rule configuration unavailable: {e}"),
                );
            }
        };

        tracing::info!(suite = name, rules = %rules_path.display(), "running style checks");
        match checker.process(&rules, files) {
            Ok(report) => {
                tracing::info!(suite = name, "Found {} check style errors.", report.violations);
                if report.is_clean() {
                    SuiteResult::passed(name, SuiteKind::Style)
                } else {
                    let diagnostics = format!(
                        "{} check style errors found. {}",
                        report.violations, report.output
                    );
                    SuiteResult::failed(name, SuiteKind::Style, report.violations, diagnostics)
                }
            }
            Err(e) => {
                tracing::error!(suite = name, error = %e, "style checker failed");
                SuiteResult::errored(name, SuiteKind::Style, e.to_string())
            }
        }
    }

    fn run_duplicates(&self, files: &[PathBuf]) -> SuiteResult {
        let Some(detector) = self.duplicates else {
            return SuiteResult::errored(
                DUPLICATES_SUITE,
                SuiteKind::Duplicates,
                "no duplicate detector configured",
            );
        };

        tracing::info!(suite = DUPLICATES_SUITE, "running copy-paste detection");
        match detector.detect(files) {
            Ok(report) if report.is_clean() => {
                SuiteResult::passed(DUPLICATES_SUITE, SuiteKind::Duplicates)
            }
            Ok(report) => {
                tracing::info!(
                    suite = DUPLICATES_SUITE,
                    "Found {} duplicated regions.",
                    report.matches.len()
                );
                let diagnostics = if report.output.trim().is_empty() {
                    report
                        .matches
                        .iter()
                        .map(|m| m.summary.as_str())
                        .collect::<Vec<_>>()
                        .join("\n")
                } else {
                    report.output
                };
                SuiteResult::failed(
                    DUPLICATES_SUITE,
                    SuiteKind::Duplicates,
                    report.matches.len(),
                    diagnostics,
                )
            }
            Err(e) => {
                tracing::error!(suite = DUPLICATES_SUITE, error = %e, "duplicate detector failed");
                SuiteResult::errored(DUPLICATES_SUITE, SuiteKind::Duplicates, e.to_string())
            }
        }
    }
}

fn plan_suites(config: &Config, base_dir: &Path) -> Vec<PlannedSuite> {
    let mut plan: Vec<PlannedSuite> = config
        .style
        .suites
        .iter()
        .filter(|(_, suite)| suite.enabled)
        .map(|(name, suite)| PlannedSuite::Style {
            name: name.clone(),
            rules: base_dir.join(&suite.rules),
        })
        .collect();

    if config.duplicates.enabled {
        plan.push(PlannedSuite::Duplicates);
    }

    plan
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
