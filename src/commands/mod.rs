mod check;
mod init;
mod list;

pub use check::{run_check, run_check_impl};
pub use init::{run_init, run_init_impl};
pub use list::{run_list, run_list_impl};

use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::ScanArgs;
use crate::config::{Config, ConfigLoader, FileConfigLoader, LoadResult};
use crate::error::Result;
use crate::scanner::{DirectoryScanner, ExtensionFilter, FileScanner};

/// Configuration with CLI overrides applied, plus the files it selects.
#[derive(Debug)]
pub struct ScanContext {
    pub config: Config,
    pub base_dir: PathBuf,
    pub root: PathBuf,
    pub files: Vec<PathBuf>,
}

fn load_config(config_path: Option<&Path>, no_config: bool) -> Result<LoadResult> {
    if no_config {
        return Ok(LoadResult {
            config: Config::default(),
            base_dir: std::env::current_dir()?,
        });
    }

    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

fn apply_scan_overrides(config: &mut Config, args: &ScanArgs) {
    if let Some(ext) = &args.ext {
        config.scan.extension.clone_from(ext);
    }
    if let Some(marker) = &args.exclude_marker {
        config.scan.exclude_marker.clone_from(marker);
    }
    config.scan.exclude.extend(args.exclude.iter().cloned());
}

/// Load configuration, apply `args`, and collect the matching sources.
///
/// `tweak` runs after the scan overrides and before validation.
///
/// # Errors
/// Returns an error if the configuration cannot be loaded or is invalid.
pub fn prepare_scan(
    args: &ScanArgs,
    no_config: bool,
    tweak: impl FnOnce(&mut Config) -> Result<()>,
) -> Result<ScanContext> {
    let LoadResult {
        mut config,
        base_dir,
    } = load_config(args.config.as_deref(), no_config)?;

    apply_scan_overrides(&mut config, args);
    tweak(&mut config)?;
    config.validate()?;

    let root = args
        .root
        .clone()
        .unwrap_or_else(|| base_dir.join(&config.scan.root));
    let files = collect_sources(&config, &root)?;

    Ok(ScanContext {
        config,
        base_dir,
        root,
        files,
    })
}

fn collect_sources(config: &Config, root: &Path) -> Result<Vec<PathBuf>> {
    let shown = dunce::canonicalize(root).unwrap_or_else(|_| root.to_path_buf());
    tracing::info!("Selecting root as {}", shown.display());

    let filter = ExtensionFilter::new(&config.scan.extension)
        .with_exclusion_marker(Some(config.scan.exclude_marker.clone()))
        .with_exclude_patterns(&config.scan.exclude)?;
    let suffix = filter.suffix().to_string();
    let files = DirectoryScanner::new(filter).scan(root);

    tracing::info!("Found {} {suffix} source files.", files.len());
    Ok(files)
}

fn write_output(output_path: Option<&Path>, content: &str, quiet: bool) -> Result<()> {
    if let Some(path) = output_path {
        fs::write(path, content)?;
    } else if !quiet {
        print!("{content}");
    }
    Ok(())
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
