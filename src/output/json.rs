use serde::Serialize;

use crate::error::Result;
use crate::gate::{GateReport, SuiteKind, SuiteOutcome, SuiteResult};

use super::OutputFormatter;

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput {
    summary: Summary,
    suites: Vec<SuiteEntry>,
    files: Vec<String>,
}

#[derive(Serialize)]
struct Summary {
    root: String,
    total_files: usize,
    total_suites: usize,
    passed: usize,
    failed: usize,
}

#[derive(Serialize)]
struct SuiteEntry {
    name: String,
    kind: SuiteKind,
    status: &'static str,
    count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    diagnostics: Option<String>,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &GateReport) -> Result<String> {
        let output = JsonOutput {
            summary: Summary {
                root: report.root.display().to_string(),
                total_files: report.files.len(),
                total_suites: report.results.len(),
                passed: report.passed_count(),
                failed: report.failed_count(),
            },
            suites: report.results.iter().map(convert_result).collect(),
            files: report
                .files
                .iter()
                .map(|f| f.display().to_string())
                .collect(),
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

fn convert_result(result: &SuiteResult) -> SuiteEntry {
    SuiteEntry {
        name: result.name.clone(),
        kind: result.kind,
        status: match result.outcome {
            SuiteOutcome::Passed => "passed",
            SuiteOutcome::Failed { .. } => "failed",
            SuiteOutcome::Errored { .. } => "error",
        },
        count: result.count(),
        diagnostics: result.diagnostics().map(ToString::to_string),
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
