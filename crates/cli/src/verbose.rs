// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Verdict Contributors

//! Verbose output logger for diagnostic information.
//!
//! Writes diagnostic output to stderr. Enabled with `--verbose`/`-v` or
//! `VERDICT_DEBUG=1`. The flag is pre-scanned from the raw arguments
//! because resolution and dispatch happen before clap parses anything.

use std::ffi::OsString;

/// Verbose output logger. Writes to stderr when enabled.
/// All output is conditional on verbose mode being enabled.
pub struct VerboseLogger {
    enabled: bool,
}

impl VerboseLogger {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Print a verbose line to stderr.
    pub fn log(&self, msg: &str) {
        if self.enabled {
            eprintln!("  {}", msg);
        }
    }
}

/// Whether verbose mode was requested, from raw args or the environment.
pub fn verbose_requested(args: &[OsString]) -> bool {
    if std::env::var("VERDICT_DEBUG").is_ok_and(|v| v == "1") {
        return true;
    }
    args.iter().skip(1).any(|a| a == "-v" || a == "--verbose")
}

#[cfg(test)]
#[path = "verbose_tests.rs"]
mod tests;
