//! Test helpers for behavioral specifications.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::{Predicate, PredicateBooleanExt};
use std::path::Path;
use std::process::Command;

/// Returns a Command configured to run the sitecheck binary
pub fn sitecheck_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("sitecheck"))
}

/// Returns a `sitecheck check <root>` command for the given site tree
pub fn check_in(root: &Path) -> Command {
    let mut cmd = sitecheck_cmd();
    cmd.arg("check").arg(root);
    cmd
}

/// Get path to a test fixture directory
pub fn fixture(name: &str) -> std::path::PathBuf {
    let manifest_dir =
        std::env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR should be set");
    std::path::PathBuf::from(manifest_dir)
        .parent()
        .expect("parent should exist")
        .parent()
        .expect("grandparent should exist")
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Temporary site tree with helper methods.
///
/// Reduces boilerplate by auto-creating parent directories and panicking on
/// errors (we're in tests).
///
/// # Examples
///
/// ```ignore
/// let temp = Project::site();
/// temp.file("index.html", "<html lang=\"en\"></html>");
/// check_in(temp.path()).assert().failure();
/// ```
pub struct Project {
    dir: tempfile::TempDir,
}

impl Project {
    /// Create an empty site tree with no files
    pub fn empty() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    /// Create a site tree that satisfies both built-in checks
    pub fn site() -> Self {
        let temp = Self::empty();
        temp.file("index.html", "<html lang=\"th\"><head></head></html>");
        temp.file("assets/style.css", "body{font-family:\"Google Sans\";}");
        temp
    }

    /// Get the site root path
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write sitecheck.toml (auto-prefixes with `version = 1` if not present)
    pub fn config(&self, content: &str) {
        let content = if content.contains("version") {
            content.to_string()
        } else {
            format!("version = 1\n{}", content)
        };
        std::fs::write(self.dir.path().join("sitecheck.toml"), content).unwrap();
    }

    /// Write a file at the given path (parent directories created automatically)
    pub fn file(&self, path: impl AsRef<Path>, content: &str) {
        self.file_bytes(path, content.as_bytes());
    }

    /// Write raw bytes at the given path
    pub fn file_bytes(&self, path: impl AsRef<Path>, content: &[u8]) {
        let full_path = self.dir.path().join(path.as_ref());
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(full_path, content).unwrap();
    }

    /// Remove a file
    pub fn remove(&self, path: impl AsRef<Path>) {
        std::fs::remove_file(self.dir.path().join(path.as_ref())).unwrap();
    }
}

/// Parse JSON from a finished command's stdout
pub fn json_output(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.output().expect("command should run");
    serde_json::from_slice(&output.stdout).expect("valid JSON on stdout")
}
