use std::path::PathBuf;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SuiteKind {
    Style,
    Duplicates,
}

impl SuiteKind {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Style => "style",
            Self::Duplicates => "duplicates",
        }
    }
}

/// Outcome of one suite.
///
/// `Failed` carries the collaborator's findings; `Errored` means the suite
/// could not be evaluated at all (missing rule set, tool not runnable).
/// Both fail the gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuiteOutcome {
    Passed,
    Failed { count: usize, diagnostics: String },
    Errored { message: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuiteResult {
    pub name: String,
    pub kind: SuiteKind,
    pub outcome: SuiteOutcome,
}

impl SuiteResult {
    #[must_use]
    pub fn passed(name: impl Into<String>, kind: SuiteKind) -> Self {
        Self {
            name: name.into(),
            kind,
            outcome: SuiteOutcome::Passed,
        }
    }

    #[must_use]
    pub fn failed(
        name: impl Into<String>,
        kind: SuiteKind,
        count: usize,
        diagnostics: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            outcome: SuiteOutcome::Failed {
                count,
                diagnostics: diagnostics.into(),
            },
        }
    }

    #[must_use]
    pub fn errored(name: impl Into<String>, kind: SuiteKind, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            outcome: SuiteOutcome::Errored {
                message: message.into(),
            },
        }
    }

    #[must_use]
    pub const fn is_passed(&self) -> bool {
        matches!(self.outcome, SuiteOutcome::Passed)
    }

    /// Number of violations or matches; zero unless `Failed`.
    #[must_use]
    pub const fn count(&self) -> usize {
        match self.outcome {
            SuiteOutcome::Failed { count, .. } => count,
            SuiteOutcome::Passed | SuiteOutcome::Errored { .. } => 0,
        }
    }

    #[must_use]
    pub fn diagnostics(&self) -> Option<&str> {
        match &self.outcome {
            SuiteOutcome::Passed => None,
            SuiteOutcome::Failed { diagnostics, .. } => Some(diagnostics),
            SuiteOutcome::Errored { message } => Some(message),
        }
    }
}

/// Everything one gate run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateReport {
    pub root: PathBuf,
    pub files: Vec<PathBuf>,
    pub results: Vec<SuiteResult>,
}

impl GateReport {
    #[must_use]
    pub fn is_passed(&self) -> bool {
        self.results.iter().all(SuiteResult::is_passed)
    }

    #[must_use]
    pub fn passed_count(&self) -> usize {
        self.results.iter().filter(|r| r.is_passed()).count()
    }

    #[must_use]
    pub fn failed_count(&self) -> usize {
        self.results.len() - self.passed_count()
    }
}

#[cfg(test)]
#[path = "result_tests.rs"]
mod tests;
