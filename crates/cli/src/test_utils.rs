// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Verdict Contributors

//! Shared helpers for unit tests.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::path::PathBuf;

use semver::Version;

use crate::context::Context;
use crate::resolver::{PackageMetadata, Resolved};
use crate::verbose::VerboseLogger;

/// A fake resolved install at the given version.
pub fn fake_resolved(version: &str) -> Resolved {
    Resolved {
        dir: PathBuf::from("/tmp/node_modules/verdict"),
        metadata: PackageMetadata {
            name: "verdict".to_string(),
            version: Version::parse(version).unwrap(),
            description: None,
        },
    }
}

/// A context around a fake install, verbose disabled.
pub fn fake_context(version: &str) -> Context {
    Context::new(fake_resolved(version), VerboseLogger::new(false))
}
