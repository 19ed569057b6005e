use std::path::PathBuf;
use std::process::Command;

use regex::Regex;

use crate::config::{DuplicatesConfig, StyleConfig, compile_pattern};
use crate::error::{Result, StyleGateError};

use super::{DuplicateDetector, DuplicateMatch, DuplicateReport, RuleSet, StyleChecker, StyleReport};

/// Style checker backed by an external program such as the Checkstyle CLI.
#[derive(Debug, Clone)]
pub struct CommandStyleChecker {
    command: Vec<String>,
    violation_pattern: Regex,
}

impl CommandStyleChecker {
    /// # Errors
    /// Returns an error if `command` is empty or the pattern does not compile.
    pub fn new(command: Vec<String>, violation_pattern: &str) -> Result<Self> {
        ensure_program(&command)?;
        Ok(Self {
            command,
            violation_pattern: compile_pattern(violation_pattern)?,
        })
    }

    /// # Errors
    /// See [`CommandStyleChecker::new`].
    pub fn from_config(config: &StyleConfig) -> Result<Self> {
        Self::new(config.command.clone(), &config.violation_pattern)
    }
}

impl StyleChecker for CommandStyleChecker {
    fn process(&self, rules: &RuleSet, files: &[PathBuf]) -> Result<StyleReport> {
        if files.is_empty() {
            return Ok(StyleReport::default());
        }

        let rules_path = rules.path.to_string_lossy();
        let args = substitute(&self.command, &[("{rules}", &rules_path)]);
        let run = run_collaborator(&args, files)?;

        let mut violations = run
            .lines()
            .filter(|line| self.violation_pattern.is_match(line))
            .count();
        if violations == 0 && !run.success {
            tracing::warn!(
                program = %args[0],
                suite = %rules.name,
                "style checker failed without reporting violations"
            );
            violations = 1;
        }

        Ok(StyleReport {
            violations,
            output: run.combined_output(),
        })
    }
}

/// Copy-paste detector backed by an external program such as PMD's CPD.
#[derive(Debug, Clone)]
pub struct CommandDuplicateDetector {
    command: Vec<String>,
    match_pattern: Regex,
}

impl CommandDuplicateDetector {
    /// `{language}` and `{minimum_tile_size}` in `command` are substituted up front.
    ///
    /// # Errors
    /// Returns an error if `command` is empty or the pattern does not compile.
    pub fn new(
        command: &[String],
        language: &str,
        minimum_tile_size: usize,
        match_pattern: &str,
    ) -> Result<Self> {
        ensure_program(command)?;
        let tile = minimum_tile_size.to_string();
        Ok(Self {
            command: substitute(
                command,
                &[("{language}", language), ("{minimum_tile_size}", &tile)],
            ),
            match_pattern: compile_pattern(match_pattern)?,
        })
    }

    /// # Errors
    /// See [`CommandDuplicateDetector::new`].
    pub fn from_config(config: &DuplicatesConfig) -> Result<Self> {
        Self::new(
            &config.command,
            &config.language,
            config.minimum_tile_size,
            &config.match_pattern,
        )
    }
}

impl DuplicateDetector for CommandDuplicateDetector {
    fn detect(&self, files: &[PathBuf]) -> Result<DuplicateReport> {
        if files.is_empty() {
            return Ok(DuplicateReport::default());
        }

        let run = run_collaborator(&self.command, files)?;

        let mut matches: Vec<DuplicateMatch> = run
            .lines()
            .filter(|line| self.match_pattern.is_match(line))
            .map(|line| DuplicateMatch {
                summary: line.trim_end().to_string(),
            })
            .collect();

        if matches.is_empty() && !run.success {
            tracing::warn!(
                program = %self.command[0],
                "duplicate detector failed without reporting matches"
            );
            matches.push(DuplicateMatch {
                summary: format!(
                    "`{}` exited with status {} without a parseable report",
                    self.command[0], run.status
                ),
            });
        }

        Ok(DuplicateReport {
            matches,
            output: run.combined_output(),
        })
    }
}

struct CollaboratorRun {
    success: bool,
    status: i32,
    stdout: String,
    stderr: String,
}

impl CollaboratorRun {
    /// Report lines from each stream; a stdout tail without a newline never
    /// absorbs the first stderr line.
    fn lines(&self) -> impl Iterator<Item = &str> {
        self.stdout.lines().chain(self.stderr.lines())
    }

    /// Stdout followed by stderr, separated by a newline when stdout lacks one.
    fn combined_output(&self) -> String {
        let mut text = self.stdout.clone();
        if !text.is_empty() && !text.ends_with('\n') && !self.stderr.is_empty() {
            text.push('\n');
        }
        text.push_str(&self.stderr);
        text
    }
}

fn ensure_program(command: &[String]) -> Result<()> {
    match command.first() {
        Some(program) if !program.trim().is_empty() => Ok(()),
        _ => Err(StyleGateError::Config(
            "collaborator command must name a program".to_string(),
        )),
    }
}

fn substitute(command: &[String], replacements: &[(&str, &str)]) -> Vec<String> {
    command
        .iter()
        .map(|arg| {
            replacements
                .iter()
                .fold(arg.clone(), |acc, (from, to)| acc.replace(from, to))
        })
        .collect()
}

/// Run `args` with `files` appended, capturing stdout and stderr.
fn run_collaborator(args: &[String], files: &[PathBuf]) -> Result<CollaboratorRun> {
    let (program, rest) = args.split_first().ok_or_else(|| {
        StyleGateError::Config("collaborator command must name a program".to_string())
    })?;

    tracing::debug!(program = %program, files = files.len(), "running collaborator");

    let output = Command::new(program)
        .args(rest)
        .args(files)
        .output()
        .map_err(|e| StyleGateError::Collaborator {
            program: program.clone(),
            message: e.to_string(),
        })?;

    let Some(status) = output.status.code() else {
        return Err(StyleGateError::Collaborator {
            program: program.clone(),
            message: "terminated by signal".to_string(),
        });
    };

    Ok(CollaboratorRun {
        success: output.status.success(),
        status,
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    })
}

#[cfg(test)]
#[path = "command_tests.rs"]
mod tests;
