use std::fmt::Write;

use crate::error::Result;
use crate::gate::{GateReport, SuiteKind, SuiteOutcome, SuiteResult};

use super::OutputFormatter;

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    Always,
    Never,
}

mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const RESET: &str = "\x1b[0m";
}

pub struct TextFormatter {
    use_colors: bool,
    verbose: u8,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self::with_verbose(mode, 0)
    }

    /// At verbosity 1 and above the collected file list is printed too.
    #[must_use]
    pub fn with_verbose(mode: ColorMode, verbose: u8) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
            verbose,
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    const fn status(result: &SuiteResult) -> (&'static str, &'static str, &'static str) {
        match result.outcome {
            SuiteOutcome::Passed => ("✓", "PASSED", ansi::GREEN),
            SuiteOutcome::Failed { .. } => ("✗", "FAILED", ansi::RED),
            SuiteOutcome::Errored { .. } => ("!", "ERROR", ansi::YELLOW),
        }
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        format!("{color}{text}{}", ansi::RESET)
    }

    fn format_result(&self, result: &SuiteResult, output: &mut String) {
        let (icon, label, color) = Self::status(result);
        let status = self.colorize(label, color);

        let _ = write!(output, "{icon} {status}: {} ({})", result.name, result.kind.label());
        if let SuiteOutcome::Failed { count, .. } = result.outcome {
            let noun = match result.kind {
                SuiteKind::Style => "violation",
                SuiteKind::Duplicates => "duplicate",
            };
            let plural = if count == 1 { "" } else { "s" };
            let _ = write!(output, " - {count} {noun}{plural}");
        }
        output.push('\n');

        if let Some(diagnostics) = result.diagnostics() {
            for line in diagnostics.lines().filter(|l| !l.trim().is_empty()) {
                let _ = writeln!(output, "   {line}");
            }
        }
    }

    fn format_summary(&self, report: &GateReport) -> String {
        let passed = self.colorize(&report.passed_count().to_string(), ansi::GREEN);
        let failed = self.colorize(&report.failed_count().to_string(), ansi::RED);
        format!(
            "Summary: {} suites, {passed} passed, {failed} failed ({} files)",
            report.results.len(),
            report.files.len()
        )
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, report: &GateReport) -> Result<String> {
        let mut output = String::new();

        if self.verbose >= 1 {
            let _ = writeln!(output, "Files under {}:", report.root.display());
            for file in &report.files {
                let _ = writeln!(output, "   {}", file.display());
            }
            output.push('\n');
        }

        for result in &report.results {
            self.format_result(result, &mut output);
        }
        if !report.results.is_empty() {
            output.push('\n');
        }

        let _ = writeln!(output, "{}", self.format_summary(report));
        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
