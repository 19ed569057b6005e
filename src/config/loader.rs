use std::path::{Path, PathBuf};

use crate::error::{Result, StyleGateError};

use super::Config;

/// A loaded configuration and the directory its relative paths resolve against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadResult {
    pub config: Config,
    pub base_dir: PathBuf,
}

/// Trait for loading configuration from various sources.
pub trait ConfigLoader {
    /// Load configuration from the default location.
    ///
    /// # Errors
    /// Returns an error if the config file cannot be read, parsed, or validated.
    fn load(&self) -> Result<LoadResult>;

    /// Load configuration from a specific path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, parsed, or validated.
    fn load_from_path(&self, path: &Path) -> Result<LoadResult>;
}

pub(crate) const LOCAL_CONFIG_NAME: &str = ".style-gate.toml";
const USER_CONFIG_NAME: &str = "config.toml";

/// Trait for filesystem operations (for testability).
pub trait FileSystem {
    /// Read file contents as a string.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read.
    fn read_to_string(&self, path: &Path) -> std::io::Result<String>;

    fn exists(&self, path: &Path) -> bool;

    /// # Errors
    /// Returns an error if the current directory cannot be determined.
    fn current_dir(&self) -> std::io::Result<PathBuf>;

    /// Platform configuration directory for style-gate, e.g. `~/.config/style-gate` on Linux.
    fn config_dir(&self) -> Option<PathBuf>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn current_dir(&self) -> std::io::Result<PathBuf> {
        std::env::current_dir()
    }

    fn config_dir(&self) -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "style-gate")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }
}

/// Loads configuration from the filesystem.
///
/// Search order:
/// 1. `.style-gate.toml` in the current directory
/// 2. `config.toml` in the platform config directory
/// 3. `Config::default()` if neither exists
///
/// Rule-set paths resolve against the local config's directory, and against
/// the current directory otherwise.
#[derive(Debug)]
pub struct FileConfigLoader<F: FileSystem = RealFileSystem> {
    fs: F,
}

impl Default for FileConfigLoader<RealFileSystem> {
    fn default() -> Self {
        Self::new()
    }
}

impl FileConfigLoader<RealFileSystem> {
    #[must_use]
    pub const fn new() -> Self {
        Self { fs: RealFileSystem }
    }
}

impl<F: FileSystem> FileConfigLoader<F> {
    #[must_use]
    pub const fn with_fs(fs: F) -> Self {
        Self { fs }
    }

    fn parse_config(content: &str) -> Result<Config> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn read_config(&self, path: &Path) -> Result<Config> {
        let content = self
            .fs
            .read_to_string(path)
            .map_err(|source| StyleGateError::FileRead {
                path: path.to_path_buf(),
                source,
            })?;
        Self::parse_config(&content)
    }
}

impl<F: FileSystem> ConfigLoader for FileConfigLoader<F> {
    fn load(&self) -> Result<LoadResult> {
        let cwd = self.fs.current_dir()?;

        let local = cwd.join(LOCAL_CONFIG_NAME);
        if self.fs.exists(&local) {
            tracing::debug!(path = %local.display(), "using project configuration");
            return Ok(LoadResult {
                config: self.read_config(&local)?,
                base_dir: cwd,
            });
        }

        if let Some(user) = self
            .fs
            .config_dir()
            .map(|dir| dir.join(USER_CONFIG_NAME))
            .filter(|path| self.fs.exists(path))
        {
            tracing::debug!(path = %user.display(), "using user configuration");
            return Ok(LoadResult {
                config: self.read_config(&user)?,
                base_dir: cwd,
            });
        }

        tracing::debug!("no configuration file found, using defaults");
        Ok(LoadResult {
            config: Config::default(),
            base_dir: cwd,
        })
    }

    fn load_from_path(&self, path: &Path) -> Result<LoadResult> {
        let config = self.read_config(path)?;
        let base_dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => self.fs.current_dir()?,
        };
        Ok(LoadResult { config, base_dir })
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
