// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Verdict Contributors

//! Unit tests for installed-library resolution.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::fs;

use tempfile::TempDir;

use super::*;
use crate::error::Error;

fn install(root: &Path, version: &str) {
    let dir = root.join("node_modules").join(PACKAGE_NAME);
    fs::create_dir_all(&dir).unwrap();
    fs::write(
        dir.join("package.json"),
        format!(r#"{{ "name": "verdict", "version": "{version}" }}"#),
    )
    .unwrap();
}

#[test]
fn resolves_in_the_starting_directory() {
    let tmp = TempDir::new().unwrap();
    install(tmp.path(), "4.1.0");

    let resolved = resolve(tmp.path()).unwrap();
    assert_eq!(resolved.metadata.name, "verdict");
    assert_eq!(resolved.metadata.version.to_string(), "4.1.0");
    assert!(resolved.dir.ends_with("node_modules/verdict"));
}

#[test]
fn resolves_by_walking_up_from_a_nested_directory() {
    let tmp = TempDir::new().unwrap();
    install(tmp.path(), "3.2.1");
    let nested = tmp.path().join("tests").join("functional");
    fs::create_dir_all(&nested).unwrap();

    let resolved = resolve(&nested).unwrap();
    assert_eq!(resolved.metadata.version.to_string(), "3.2.1");
}

#[test]
fn missing_install_is_dependency_not_found() {
    let tmp = TempDir::new().unwrap();
    match resolve(tmp.path()) {
        Err(Error::DependencyNotFound { searched_from }) => {
            assert_eq!(searched_from, tmp.path());
        }
        other => panic!("expected DependencyNotFound, got {other:?}"),
    }
}

#[test]
fn malformed_metadata_is_reported_with_its_path() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().join("node_modules").join(PACKAGE_NAME);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("package.json"), "not json").unwrap();

    match resolve(tmp.path()) {
        Err(Error::Metadata { path, .. }) => assert!(path.ends_with("package.json")),
        other => panic!("expected Metadata error, got {other:?}"),
    }
}

#[test]
fn unrelated_metadata_fields_are_ignored() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().join("node_modules").join(PACKAGE_NAME);
    fs::create_dir_all(&dir).unwrap();
    fs::write(
        dir.join("package.json"),
        r#"{
            "name": "verdict",
            "version": "4.2.0",
            "description": "test runner",
            "main": "index.js",
            "scripts": { "test": "node bin/verdict.js" },
            "dependencies": { "leadfoot": "^2.0.0" }
        }"#,
    )
    .unwrap();

    let resolved = resolve(tmp.path()).unwrap();
    assert_eq!(resolved.metadata.version.to_string(), "4.2.0");
    assert_eq!(resolved.metadata.description.as_deref(), Some("test runner"));
}
