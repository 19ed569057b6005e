use crate::analysis::{CommandDuplicateDetector, CommandStyleChecker};
use crate::cli::{CheckArgs, Cli, ColorChoice};
use crate::config::Config;
use crate::gate::Gate;
use crate::output::{ColorMode, JsonFormatter, OutputFormat, OutputFormatter, TextFormatter};
use crate::{EXIT_CONFIG_ERROR, EXIT_GATE_FAILED, EXIT_SUCCESS, Result, StyleGateError};

use super::{prepare_scan, write_output};

#[must_use]
pub fn run_check(args: &CheckArgs, cli: &Cli) -> i32 {
    match run_check_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// Collect sources, run every enabled suite, and report.
///
/// # Errors
/// Returns an error for configuration problems or when the report cannot be written.
/// Suite failures are not errors; they produce `EXIT_GATE_FAILED`.
pub fn run_check_impl(args: &CheckArgs, cli: &Cli) -> Result<i32> {
    let ctx = prepare_scan(&args.scan, cli.no_config, |config| {
        select_suites(config, &args.suites)?;
        if args.skip_duplicates {
            config.duplicates.enabled = false;
        }
        Ok(())
    })?;

    let style_checker = if ctx.config.style.suites.values().any(|s| s.enabled) {
        Some(CommandStyleChecker::from_config(&ctx.config.style)?)
    } else {
        None
    };
    let duplicate_detector = if ctx.config.duplicates.enabled {
        Some(CommandDuplicateDetector::from_config(&ctx.config.duplicates)?)
    } else {
        None
    };

    let mut gate = Gate::new();
    if let Some(checker) = &style_checker {
        gate = gate.with_style_checker(checker);
    }
    if let Some(detector) = &duplicate_detector {
        gate = gate.with_duplicate_detector(detector);
    }

    let report = gate.run(&ctx.config, &ctx.base_dir, &ctx.root, ctx.files);

    let output = match args.format {
        OutputFormat::Text => {
            TextFormatter::with_verbose(color_choice_to_mode(cli.color), cli.verbose)
                .format(&report)?
        }
        OutputFormat::Json => JsonFormatter.format(&report)?,
    };
    write_output(args.output.as_deref(), &output, cli.quiet)?;

    if report.is_passed() {
        Ok(EXIT_SUCCESS)
    } else {
        tracing::warn!(failed = report.failed_count(), "gate failed");
        Ok(EXIT_GATE_FAILED)
    }
}

/// Keep only the named style suites enabled. An empty selection keeps all.
///
/// # Errors
/// Returns a `Config` error naming any suite the configuration does not define.
pub(crate) fn select_suites(config: &mut Config, selected: &[String]) -> Result<()> {
    if selected.is_empty() {
        return Ok(());
    }

    if let Some(unknown) = selected
        .iter()
        .find(|name| !config.style.suites.contains_key(name.as_str()))
    {
        return Err(StyleGateError::Config(format!(
            "Unknown style suite '{unknown}'"
        )));
    }

    for (name, suite) in &mut config.style.suites {
        suite.enabled = suite.enabled && selected.contains(name);
    }
    Ok(())
}

const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
