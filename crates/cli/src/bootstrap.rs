// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Verdict Contributors

//! Interactive recovery when the library is missing.
//!
//! Runs at most once per process. The user gets a single line to choose
//! an install channel; anything unrecognized declines. An install runs
//! `npm install` synchronously with inherited stdio so npm's own output
//! stays visible, then resolution is retried exactly once.

use std::io::{BufRead, Write};
use std::path::Path;
use std::process::Command;

use crate::error::Error;
use crate::resolver::{self, PACKAGE_NAME, Resolved};

/// Outcome of the install prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallChoice {
    Latest,
    Next,
    Decline,
}

impl InstallChoice {
    /// npm dist-tag to install, if any.
    pub fn tag(self) -> Option<&'static str> {
        match self {
            InstallChoice::Latest => Some("latest"),
            InstallChoice::Next => Some("next"),
            InstallChoice::Decline => None,
        }
    }
}

/// Match one line of input against the three choices.
///
/// Any non-empty prefix of `latest` or `next` (case-insensitive) picks
/// that channel; the two words share no prefix, so the patterns are
/// mutually exclusive. Everything else, including an empty line or EOF,
/// declines.
pub fn parse_choice(answer: &str) -> InstallChoice {
    let answer = answer.trim().to_lowercase();
    if !answer.is_empty() && "latest".starts_with(&answer) {
        InstallChoice::Latest
    } else if !answer.is_empty() && "next".starts_with(&answer) {
        InstallChoice::Next
    } else {
        InstallChoice::Decline
    }
}

/// Install seam so tests can observe invocations without shelling out.
pub trait Installer {
    fn install(&self, tag: &str) -> Result<(), Error>;
}

/// Installs via `npm install verdict@<tag>`, inheriting stdio.
pub struct NpmInstaller;

impl Installer for NpmInstaller {
    fn install(&self, tag: &str) -> Result<(), Error> {
        let status = Command::new("npm")
            .arg("install")
            .arg(format!("{PACKAGE_NAME}@{tag}"))
            .status()
            .map_err(|source| Error::Spawn { program: "npm".to_string(), source })?;
        if status.success() {
            Ok(())
        } else {
            Err(Error::InstallFailed { status })
        }
    }
}

/// Prompt once on `output`, read one line from `input`, and run the
/// chosen install, if any. Install failures propagate unmodified.
pub fn offer_install<R, W>(
    input: &mut R,
    output: &mut W,
    installer: &dyn Installer,
) -> Result<InstallChoice, Error>
where
    R: BufRead,
    W: Write,
{
    write!(
        output,
        "{PACKAGE_NAME} is not installed in this project.\n\
         Install it now? (l)atest, (n)ext for the pre-release channel, \
         anything else to skip: "
    )?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    let choice = parse_choice(&line);
    if let Some(tag) = choice.tag() {
        writeln!(output)?;
        installer.install(tag)?;
    }
    Ok(choice)
}

/// Resolve the library, offering one interactive install on failure.
///
/// The stdin lock is scoped to this call so the input channel is
/// released on every path out of here.
pub fn resolve_or_install(start_dir: &Path) -> Result<Resolved, Error> {
    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut output = std::io::stderr();
    resolve_or_install_with(start_dir, &mut input, &mut output, &NpmInstaller)
}

/// The resolve/prompt/retry flow over injected streams and installer.
/// Resolution is retried at most once, whatever the prompt answer was.
pub fn resolve_or_install_with<R, W>(
    start_dir: &Path,
    input: &mut R,
    output: &mut W,
    installer: &dyn Installer,
) -> Result<Resolved, Error>
where
    R: BufRead,
    W: Write,
{
    match resolver::resolve(start_dir) {
        Ok(resolved) => Ok(resolved),
        Err(Error::DependencyNotFound { .. }) => {
            let choice = offer_install(input, output, installer)?;
            tracing::debug!(?choice, "install prompt answered, retrying resolution");
            resolver::resolve(start_dir)
        }
        Err(err) => Err(err),
    }
}

#[cfg(test)]
#[path = "bootstrap_tests.rs"]
mod tests;
