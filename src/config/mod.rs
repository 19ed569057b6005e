mod loader;
mod model;
mod template;

pub use loader::{ConfigLoader, FileConfigLoader, FileSystem, LoadResult, RealFileSystem};
pub(crate) use model::compile_pattern;
pub use model::{
    Config, DEFAULT_MATCH_PATTERN, DEFAULT_VIOLATION_PATTERN, DuplicatesConfig, ScanConfig,
    StyleConfig, StyleSuiteConfig,
};
pub use template::generate_config_template;
