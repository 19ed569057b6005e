use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::output::OutputFormat;

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser, Debug)]
#[command(name = "style-gate")]
#[command(author, version, about = "Fail the build when style or copy-paste checkers report anything")]
#[command(long_about = "Collects the project's sources and runs every configured style rule set \
    and the copy-paste detector over them.\n\n\
    Exit codes:\n  \
    0 - All suites passed\n  \
    1 - At least one suite reported violations or could not run\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Increase log verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    /// Skip loading configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run all style and copy-paste suites over the collected sources
    Check(CheckArgs),

    /// Print the files the gate would check
    List(ListArgs),

    /// Generate a default configuration file
    Init(InitArgs),
}

/// Source discovery options shared by `check` and `list`.
#[derive(Args, Debug, Default)]
pub struct ScanArgs {
    /// Traversal root (overrides config `scan.root`)
    pub root: Option<PathBuf>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// File extension to collect, without the dot (overrides config)
    #[arg(long)]
    pub ext: Option<String>,

    /// Skip paths containing this text (overrides config; empty disables)
    #[arg(long)]
    pub exclude_marker: Option<String>,

    /// Exclude patterns (glob syntax, can be specified multiple times)
    #[arg(long, short = 'x')]
    pub exclude: Vec<String>,
}

#[derive(Parser, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub scan: ScanArgs,

    /// Run only the named style suites (can be specified multiple times)
    #[arg(long = "suite", short = 's')]
    pub suites: Vec<String>,

    /// Do not run the copy-paste detector
    #[arg(long)]
    pub skip_duplicates: bool,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub scan: ScanArgs,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for configuration file
    #[arg(short, long, default_value = ".style-gate.toml")]
    pub output: PathBuf,

    /// Overwrite existing configuration
    #[arg(long)]
    pub force: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
