// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Verdict Contributors

//! Version-family adapters.
//!
//! Each supported major-version family of the library gets one adapter,
//! compiled into the binary and selected once at startup by the range
//! matcher. An adapter's single entry point registers commands against
//! the shared context; it does not own the context.

pub mod cli3;
pub mod cli4;

use std::path::Path;
use std::process::Command;

use anyhow::Context as _;

use crate::context::Context;
use crate::error::Error;
use crate::range::VersionRange;
use crate::registry::CommandSpec;

/// One compiled-in adapter: its identity, supported range, and entry
/// point.
pub struct AdapterDef {
    pub name: &'static str,
    pub range: fn() -> VersionRange,
    pub register: fn(&mut Context),
}

/// All adapters in selection order. cli3 is checked before cli4.
pub const ALL: &[AdapterDef] = &[
    AdapterDef { name: "cli3", range: cli3::range, register: cli3::register },
    AdapterDef { name: "cli4", range: cli4::range, register: cli4::register },
];

/// Launch a node entry point from the installed library, inheriting
/// stdio, and report the child's exit code as our own.
pub(crate) fn run_node(ctx: &Context, script: &str, args: &[String]) -> anyhow::Result<i32> {
    let entry = ctx.install_dir.join(script);
    ctx.verbose
        .log(&format!("launching node {} {}", entry.display(), args.join(" ")));
    let status = Command::new("node")
        .arg(&entry)
        .args(args)
        .status()
        .map_err(|source| Error::Spawn {
            program: format!("node {}", entry.display()),
            source,
        })?;
    // A signal-terminated child carries no code.
    Ok(status.code().unwrap_or(1))
}

/// The `version` command, identical across families.
pub(crate) fn version_command() -> CommandSpec {
    CommandSpec {
        name: "version",
        about: "Show the CLI and library versions".to_string(),
        options: Vec::new(),
        trailing_args: false,
        action: Box::new(|_matches, ctx| {
            println!("verdict-cli {}", env!("CARGO_PKG_VERSION"));
            println!(
                "{} {} ({})",
                ctx.metadata.name,
                ctx.metadata.version,
                ctx.install_dir.display()
            );
            Ok(0)
        }),
    }
}

/// Write an `init` scaffold, refusing to clobber an existing config.
pub(crate) fn write_config(path: &Path, config: &serde_json::Value) -> anyhow::Result<()> {
    if path.exists() {
        anyhow::bail!("{} already exists; delete it to re-run init", path.display());
    }
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    std::fs::write(path, format!("{:#}\n", config))
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}
