// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Verdict Contributors

//! Command registry and execution.
//!
//! Adapters register commands here during dispatch; the registry then
//! materializes a clap command tree and parses the process arguments
//! against it exactly once. Registration is closed before parsing
//! begins, except for one deterministic option-sort pass.

use std::ffi::OsString;

use clap::error::ErrorKind;
use clap::{Arg, ArgAction, ArgMatches, Command};

use crate::context::Context;
use crate::error::Error;

/// Subcommand injected when the invocation names none.
pub const DEFAULT_COMMAND: &str = "run";

/// A command action: parsed arguments in, process exit code out.
pub type Action = Box<dyn Fn(&ArgMatches, &Context) -> anyhow::Result<i32>>;

/// One option definition, keyed by its literal flag text
/// (`"-b, --browser"` or `"--grep"` style).
pub struct OptionSpec {
    pub flag: String,
    pub value_name: Option<&'static str>,
    pub help: String,
    pub default: Option<String>,
    pub value_parser: Option<clap::builder::ValueParser>,
}

impl OptionSpec {
    /// A boolean flag taking no value.
    pub fn flag(flag: &str, help: &str) -> Self {
        Self {
            flag: flag.to_string(),
            value_name: None,
            help: help.to_string(),
            default: None,
            value_parser: None,
        }
    }

    /// An option taking a single value.
    pub fn value(flag: &str, value_name: &'static str, help: &str) -> Self {
        Self {
            flag: flag.to_string(),
            value_name: Some(value_name),
            help: help.to_string(),
            default: None,
            value_parser: None,
        }
    }

    pub fn with_default(mut self, default: &str) -> Self {
        self.default = Some(default.to_string());
        self
    }

    pub fn with_parser(mut self, parser: clap::builder::ValueParser) -> Self {
        self.value_parser = Some(parser);
        self
    }
}

/// A registered command: immutable after registration closes.
pub struct CommandSpec {
    pub name: &'static str,
    pub about: String,
    pub options: Vec<OptionSpec>,
    /// Capture trailing arguments and pass them through to the action.
    pub trailing_args: bool,
    pub action: Action,
}

impl CommandSpec {
    fn to_clap(&self) -> Command {
        let mut cmd = Command::new(self.name).about(self.about.clone());
        for opt in &self.options {
            cmd = cmd.arg(to_arg(opt));
        }
        if self.trailing_args {
            cmd = cmd.arg(
                Arg::new("args")
                    .value_name("ARG")
                    .num_args(0..)
                    .trailing_var_arg(true)
                    .allow_hyphen_values(true)
                    .help("Arguments passed through to the runner"),
            );
        }
        cmd
    }
}

/// Split a flag literal into its short and long components.
fn parse_flag(flag: &str) -> (Option<char>, Option<String>) {
    let mut short = None;
    let mut long = None;
    for token in flag.split(',') {
        let token = token.trim();
        if let Some(rest) = token.strip_prefix("--") {
            long = Some(rest.to_string());
        } else if let Some(rest) = token.strip_prefix('-') {
            short = rest.chars().next();
        }
    }
    (short, long)
}

fn to_arg(opt: &OptionSpec) -> Arg {
    let (short, long) = parse_flag(&opt.flag);
    let id = long
        .clone()
        .or_else(|| short.map(|c| c.to_string()))
        .unwrap_or_else(|| opt.flag.clone());

    let mut arg = Arg::new(id).help(opt.help.clone());
    if let Some(short) = short {
        arg = arg.short(short);
    }
    if let Some(long) = long {
        arg = arg.long(long);
    }
    match opt.value_name {
        Some(value_name) => {
            arg = arg.value_name(value_name).action(ArgAction::Set);
            if let Some(default) = &opt.default {
                arg = arg.default_value(default.clone());
            }
            if let Some(parser) = &opt.value_parser {
                arg = arg.value_parser(parser.clone());
            }
        }
        None => arg = arg.action(ArgAction::SetTrue),
    }
    arg
}

/// Sort key for the option pass: flags without a `--` prefix come
/// first, then `--` flags, each group ordered by lowercase flag text.
/// Per-group declaration order is deliberately not preserved so
/// generated help stays stable across runs.
fn option_sort_key(flag: &str) -> (u8, String) {
    let group = if flag.starts_with("--") { 1 } else { 0 };
    (group, flag.to_lowercase())
}

/// Registry of commands populated during adapter dispatch.
#[derive(Default)]
pub struct CommandRegistry {
    commands: Vec<CommandSpec>,
}

impl CommandRegistry {
    pub fn register(&mut self, spec: CommandSpec) {
        tracing::debug!(command = spec.name, "registered command");
        self.commands.push(spec);
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.commands.iter().map(|c| c.name)
    }

    pub fn get(&self, name: &str) -> Option<&CommandSpec> {
        self.commands.iter().find(|c| c.name == name)
    }

    /// Apply the one-time deterministic option sort. Idempotent.
    pub fn sort_options(&mut self) {
        for command in &mut self.commands {
            command.options.sort_by_key(|opt| option_sort_key(&opt.flag));
        }
    }

    /// Materialize the clap command tree for the current registry.
    pub fn build_cli(&self) -> Command {
        let mut cmd = Command::new("verdict")
            .version(env!("CARGO_PKG_VERSION"))
            .about("Command-line front-end for the verdict test runner")
            .allow_external_subcommands(true)
            .arg(
                Arg::new("verbose")
                    .short('v')
                    .long("verbose")
                    .global(true)
                    .action(ArgAction::SetTrue)
                    .help("Enable verbose output"),
            );
        for spec in &self.commands {
            cmd = cmd.subcommand(spec.to_clap());
        }
        cmd
    }

    /// Parse `argv` and run exactly one command's action.
    ///
    /// Unknown subcommands fall through to a catch-all that prints the
    /// unknown name plus general help and reports failure without
    /// crashing.
    pub fn execute(&self, ctx: &Context, argv: Vec<OsString>) -> anyhow::Result<i32> {
        let mut cli = self.build_cli();
        let matches = match cli.try_get_matches_from_mut(argv) {
            Ok(matches) => matches,
            Err(err)
                if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) =>
            {
                err.print()?;
                return Ok(0);
            }
            Err(err) => {
                err.print()?;
                return Ok(1);
            }
        };

        match matches.subcommand() {
            Some((name, sub)) => match self.get(name) {
                Some(spec) => (spec.action)(sub, ctx),
                None => {
                    eprintln!("{}", Error::UnknownCommand(name.to_string()));
                    eprintln!();
                    eprintln!("{}", cli.render_help());
                    Ok(1)
                }
            },
            None => {
                // Unreachable in practice: default injection guarantees a
                // subcommand unless help/version short-circuited above.
                eprintln!("{}", cli.render_help());
                Ok(1)
            }
        }
    }
}

/// Inject the default `run` subcommand when the raw arguments name no
/// subcommand and request neither help nor version.
pub fn with_default_command(mut args: Vec<OsString>) -> Vec<OsString> {
    let wants_help_or_version = args.iter().skip(1).any(|a| {
        let a = a.to_string_lossy();
        a == "-h" || a == "--help" || a == "-V" || a == "--version"
    });
    let has_subcommand = args
        .iter()
        .skip(1)
        .any(|a| !a.to_string_lossy().starts_with('-'));

    if !wants_help_or_version && !has_subcommand {
        args.push(OsString::from(DEFAULT_COMMAND));
    }
    args
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
