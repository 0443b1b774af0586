// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Verdict Contributors

//! Error taxonomy for the dispatch phase.
//!
//! Everything here is surfaced at a single top-level boundary in main,
//! which prints the message and exits non-zero. Messages are written to
//! be actionable (what to run, what version is required) rather than
//! raw fault traces.

use std::path::PathBuf;
use std::process::ExitStatus;

use semver::Version;

use crate::resolver::PACKAGE_NAME;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(
        "could not find an installed copy of {PACKAGE_NAME} (searched from {}); \
         run `npm install {PACKAGE_NAME}` and try again",
        .searched_from.display()
    )]
    DependencyNotFound { searched_from: PathBuf },

    #[error(
        "installed {PACKAGE_NAME} {installed} is not supported; this release of the CLI \
         requires {PACKAGE_NAME} {minimum} or newer (run `npm install {PACKAGE_NAME}@latest`)"
    )]
    UnsupportedVersion { installed: Version, minimum: Version },

    #[error("unknown command: {0}")]
    UnknownCommand(String),

    #[error("failed to launch {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`npm install` exited with {status}")]
    InstallFailed { status: ExitStatus },

    #[error("failed to parse {}: {source}", .path.display())]
    Metadata {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
