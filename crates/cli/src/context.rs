// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Verdict Contributors

//! Shared context handed to the selected adapter.

use std::path::PathBuf;

use crate::registry::CommandRegistry;
use crate::resolver::{PackageMetadata, Resolved};
use crate::verbose::VerboseLogger;

/// A supported browser and the WebDriver capability name it maps to.
#[derive(Debug, Clone, Copy)]
pub struct Browser {
    pub name: &'static str,
    pub browser_name: &'static str,
}

/// Browsers `init` can scaffold an environment for.
pub const BROWSERS: &[Browser] = &[
    Browser { name: "chrome", browser_name: "chrome" },
    Browser { name: "firefox", browser_name: "firefox" },
    Browser { name: "safari", browser_name: "safari" },
    Browser { name: "edge", browser_name: "MicrosoftEdge" },
];

/// Look up a browser by its user-facing name.
pub fn browser(name: &str) -> Option<&'static Browser> {
    BROWSERS.iter().find(|b| b.name.eq_ignore_ascii_case(name))
}

/// Aggregate owned by the front-end for the process lifetime.
///
/// The adapter mutates the registry during registration; afterwards the
/// front-end takes the registry out so command actions can borrow the
/// rest of the context immutably.
pub struct Context {
    pub browsers: &'static [Browser],
    pub install_dir: PathBuf,
    pub metadata: PackageMetadata,
    pub verbose: VerboseLogger,
    pub registry: CommandRegistry,
}

impl Context {
    pub fn new(resolved: Resolved, verbose: VerboseLogger) -> Self {
        Self {
            browsers: BROWSERS,
            install_dir: resolved.dir,
            metadata: resolved.metadata,
            verbose,
            registry: CommandRegistry::default(),
        }
    }

    pub fn take_registry(&mut self) -> CommandRegistry {
        std::mem::take(&mut self.registry)
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
