// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Verdict Contributors

//! Command-line front-end for the verdict test runner.
//!
//! The binary carries no test-running logic of its own. It locates the
//! installed `verdict` library, matches the installed version against
//! the compiled-in adapters, lets the selected adapter register
//! commands, and parses the process arguments against that registry.
//! Test execution is delegated to the library's own node entry points.

pub mod adapter;
pub mod bootstrap;
pub mod context;
pub mod dispatch;
pub mod error;
pub mod range;
pub mod registry;
pub mod resolver;
pub mod verbose;

#[cfg(test)]
pub(crate) mod test_utils;

use std::ffi::OsString;

pub use error::Error;

use context::Context;
use verbose::VerboseLogger;

/// Run the front-end against the process arguments. Returns the exit
/// code; every fatal error propagates to the caller's single boundary.
pub fn run() -> anyhow::Result<i32> {
    run_with_args(std::env::args_os().collect())
}

/// The whole flow: resolve (with one bootstrap attempt), dispatch,
/// sort options, inject the default command, parse, execute.
pub fn run_with_args(args: Vec<OsString>) -> anyhow::Result<i32> {
    let verbose = VerboseLogger::new(verbose::verbose_requested(&args));
    let cwd = std::env::current_dir()?;

    let resolved = bootstrap::resolve_or_install(&cwd)?;
    verbose.log(&format!(
        "found {} {} in {}",
        resolved.metadata.name,
        resolved.metadata.version,
        resolved.dir.display()
    ));

    let mut ctx = Context::new(resolved, verbose);
    dispatch::dispatch(&mut ctx)?;

    let mut registry = ctx.take_registry();
    registry.sort_options();

    let argv = registry::with_default_command(args);
    registry.execute(&ctx, argv)
}
