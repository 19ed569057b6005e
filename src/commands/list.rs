use std::fmt::Write;

use crate::cli::{Cli, ListArgs};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result};

use super::{prepare_scan, write_output};

#[must_use]
pub fn run_list(args: &ListArgs, cli: &Cli) -> i32 {
    match run_list_impl(args, cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// Print the collected files, one per line.
///
/// The listing is the command's only output, so `--quiet` does not hide it.
///
/// # Errors
/// Returns an error if the configuration cannot be loaded or is invalid.
pub fn run_list_impl(args: &ListArgs, cli: &Cli) -> Result<()> {
    let ctx = prepare_scan(&args.scan, cli.no_config, |_| Ok(()))?;

    let mut output = String::new();
    for file in &ctx.files {
        let _ = writeln!(output, "{}", file.display());
    }
    write_output(None, &output, false)
}
