#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the style-gate binary.
#[macro_export]
macro_rules! style_gate {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("style-gate"))
    };
}

/// Creates a temporary project directory for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content, creating parent directories.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    pub fn create_dir(&self, relative_path: &str) {
        let path = self.dir.path().join(relative_path);
        fs::create_dir_all(&path).expect("Failed to create directory");
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Writes `.style-gate.toml` in the project root.
    pub fn create_config(&self, content: &str) {
        self.create_file(".style-gate.toml", content);
    }

    /// Writes the three rule sets referenced by [`SCRIPTED_CONFIG`].
    pub fn create_rule_sets(&self) {
        for name in ["blocks", "naming", "imports"] {
            self.create_file(
                &format!("rules/{name}.xml"),
                &format!("<module name=\"{name}\"/>"),
            );
        }
    }

    /// A small Java project: two classes plus a module descriptor.
    pub fn create_java_sources(&self) {
        self.create_file("src/app/Main.java", "class Main {}\n");
        self.create_file("src/app/Util.java", "class Util {}\n");
        self.create_file("src/module-info.java", "module app {}\n");
        self.create_file("src/app/notes.txt", "TODO everything\n");
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Config whose collaborators are shell scripts:
/// - style: every line containing `TODO` is an `[ERROR]`
/// - duplicates: every file with `Copy` in its name is a duplication
pub const SCRIPTED_CONFIG: &str = r#"
[scan]
root = "src"
extension = "java"

[style]
command = ["sh", "-c", 'shift; for f in "$@"; do grep -n TODO "$f" | sed "s|^|[ERROR] $f:|"; done; exit 0', "sh", "{rules}"]

[style.suites.blocks]
rules = "rules/blocks.xml"

[style.suites.naming]
rules = "rules/naming.xml"

[style.suites.imports]
rules = "rules/imports.xml"

[duplicates]
language = "java"
minimum_tile_size = 60
command = ["sh", "-c", 'echo "cpd $0 $1"; shift; for f in "$@"; do case "$f" in *Copy*) echo "Found a 10 line (61 tokens) duplication in the following files: "; echo "Starting at line 1 of $f";; esac; done; exit 0', "{language}", "{minimum_tile_size}"]
"#;
