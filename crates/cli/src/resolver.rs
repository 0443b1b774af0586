// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Verdict Contributors

//! Installed-library resolution.
//!
//! Walks from the current directory up to the filesystem root looking for
//! `node_modules/verdict/package.json`, the same shape node's module
//! resolution would find. Reads nothing but the package metadata file.

use std::path::{Path, PathBuf};

use semver::Version;
use serde::Deserialize;

use crate::error::Error;

/// npm package name of the companion test-runner library.
pub const PACKAGE_NAME: &str = "verdict";

/// Parsed `package.json` metadata. Fields beyond name/version are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct PackageMetadata {
    pub name: String,
    pub version: Version,
    #[serde(default)]
    pub description: Option<String>,
}

/// A located install of the library: its directory and parsed metadata.
#[derive(Debug, Clone)]
pub struct Resolved {
    pub dir: PathBuf,
    pub metadata: PackageMetadata,
}

/// Locate the installed library starting from `start_dir`.
pub fn resolve(start_dir: &Path) -> Result<Resolved, Error> {
    let mut current = start_dir.to_path_buf();

    loop {
        let dir = current.join("node_modules").join(PACKAGE_NAME);
        let manifest = dir.join("package.json");
        if manifest.exists() {
            let content = std::fs::read_to_string(&manifest)?;
            let metadata: PackageMetadata = serde_json::from_str(&content)
                .map_err(|source| Error::Metadata { path: manifest, source })?;
            tracing::debug!(
                version = %metadata.version,
                dir = %dir.display(),
                "resolved installed library"
            );
            return Ok(Resolved { dir, metadata });
        }

        match current.parent() {
            Some(parent) => current = parent.to_path_buf(),
            None => {
                return Err(Error::DependencyNotFound {
                    searched_from: start_dir.to_path_buf(),
                });
            }
        }
    }
}

#[cfg(test)]
#[path = "resolver_tests.rs"]
mod tests;
