//! Test helpers for behavioral specifications.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use predicates;
pub use predicates::prelude::PredicateBooleanExt;

use std::path::Path;

use assert_cmd::Command;
use tempfile::TempDir;

/// Returns a Command configured to run the verdict binary.
pub fn verdict_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("verdict"))
}

/// A scratch project directory, optionally with a fake installed copy
/// of the library under `node_modules/verdict`.
pub struct Project {
    dir: TempDir,
}

impl Project {
    /// Project with no installed library.
    pub fn empty() -> Self {
        Self { dir: TempDir::new().unwrap() }
    }

    /// Project with the library installed at the given version.
    pub fn with_library(version: &str) -> Self {
        let project = Self::empty();
        let lib = project.path().join("node_modules").join("verdict");
        std::fs::create_dir_all(&lib).unwrap();
        std::fs::write(
            lib.join("package.json"),
            format!(r#"{{ "name": "verdict", "version": "{version}" }}"#),
        )
        .unwrap();
        project
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// A verdict invocation rooted in this project.
    pub fn cmd(&self) -> Command {
        let mut cmd = verdict_cmd();
        cmd.current_dir(self.path());
        cmd
    }
}
