mod filter;

pub use filter::{DEFAULT_EXCLUSION_MARKER, ExtensionFilter, FileFilter};

use std::fs::File;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Trait for scanning directories and finding files.
pub trait FileScanner {
    /// Walk `root` and return every matching file path in traversal order.
    ///
    /// Unreadable entries are skipped, so scanning never fails.
    fn scan(&self, root: &Path) -> Vec<PathBuf>;
}

/// Depth-first, single-threaded directory walker.
///
/// Entries are visited in the order the filesystem yields them; nothing is
/// sorted. Symlinks are followed, and link cycles surface as walker errors
/// that are skipped like any other unreadable entry.
pub struct DirectoryScanner<F: FileFilter> {
    filter: F,
}

impl<F: FileFilter> DirectoryScanner<F> {
    #[must_use]
    pub const fn new(filter: F) -> Self {
        Self { filter }
    }

    fn scan_impl(&self, root: &Path) -> Vec<PathBuf> {
        WalkDir::new(root)
            .follow_links(true)
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    tracing::trace!(error = %e, "skipping unreadable entry");
                    None
                }
            })
            .filter(|e| e.file_type().is_file() && self.filter.should_include(e.path()))
            .filter(|e| is_readable(e.path()))
            .map(walkdir::DirEntry::into_path)
            .collect()
    }
}

impl<F: FileFilter> FileScanner for DirectoryScanner<F> {
    fn scan(&self, root: &Path) -> Vec<PathBuf> {
        self.scan_impl(root)
    }
}

fn is_readable(path: &Path) -> bool {
    let readable = File::open(path).is_ok();
    if !readable {
        tracing::trace!(path = %path.display(), "skipping unreadable file");
    }
    readable
}

/// Collect every readable file under `root` whose path ends with `.{extension}`,
/// leaving out paths that contain [`DEFAULT_EXCLUSION_MARKER`].
///
/// A missing or unreadable root yields an empty list.
#[must_use]
pub fn collect(root: &Path, extension: &str) -> Vec<PathBuf> {
    DirectoryScanner::new(ExtensionFilter::new(extension)).scan(root)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
