// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Verdict Contributors

//! Adapter for the verdict 4.x family.
//!
//! The 4.x library has a single `bin/verdict.js` entry point taking
//! ordinary flags, with `--serveOnly` replacing the separate server.

use std::path::Path;

use clap::builder::{PossibleValuesParser, ValueParser};
use semver::Version;

use crate::context::{Browser, Context, browser};
use crate::range::VersionRange;
use crate::registry::{CommandSpec, OptionSpec};

use super::{run_node, version_command, write_config};

/// Config scaffold location for 4.x projects.
pub const CONFIG_PATH: &str = "verdict.json";

/// Single entry point for the 4.x family.
const ENTRY: &str = "bin/verdict.js";

pub fn range() -> VersionRange {
    VersionRange::new(Version::new(4, 0, 0), Version::new(4, 9, 9))
}

/// Register the 4.x command set.
pub fn register(ctx: &mut Context) {
    let browsers: Vec<&'static str> = ctx.browsers.iter().map(|b| b.name).collect();

    ctx.registry.register(version_command());

    ctx.registry.register(CommandSpec {
        name: "init",
        about: "Scaffold a verdict 4.x test configuration".to_string(),
        options: vec![
            OptionSpec::value("-b, --browser", "NAME", "Browser to configure for WebDriver tests")
                .with_default("chrome")
                .with_parser(ValueParser::new(PossibleValuesParser::new(browsers))),
        ],
        trailing_args: false,
        action: Box::new(|matches, _ctx| {
            let name = matches
                .get_one::<String>("browser")
                .map(String::as_str)
                .unwrap_or("chrome");
            let browser = browser(name)
                .ok_or_else(|| anyhow::anyhow!("unsupported browser: {name}"))?;
            write_config(Path::new(CONFIG_PATH), &init_config(browser))?;
            println!("wrote {CONFIG_PATH}");
            Ok(0)
        }),
    });

    ctx.registry.register(CommandSpec {
        name: "run",
        about: "Run tests".to_string(),
        options: vec![
            OptionSpec::value("-c, --config", "PATH", "Path to the test configuration")
                .with_default(CONFIG_PATH),
            OptionSpec::value("--suites", "GLOB", "Suites to run instead of the configured set"),
            OptionSpec::value("--reporters", "NAME", "Reporters to use"),
            OptionSpec::value("--grep", "PATTERN", "Only run tests matching the pattern"),
            OptionSpec::flag("--bail", "Stop after the first test failure"),
        ],
        trailing_args: true,
        action: Box::new(|matches, ctx| {
            let config = matches
                .get_one::<String>("config")
                .map(String::as_str)
                .unwrap_or(CONFIG_PATH);
            let extra: Vec<String> = matches
                .get_many::<String>("args")
                .map(|values| values.cloned().collect())
                .unwrap_or_default();
            let args = runner_args(
                config,
                matches.get_one::<String>("suites").map(String::as_str),
                matches.get_one::<String>("reporters").map(String::as_str),
                matches.get_one::<String>("grep").map(String::as_str),
                matches.get_flag("bail"),
                &extra,
            );
            run_node(ctx, ENTRY, &args)
        }),
    });

    ctx.registry.register(CommandSpec {
        name: "serve",
        about: "Serve the test page without running tests".to_string(),
        options: vec![
            OptionSpec::value("-c, --config", "PATH", "Path to the test configuration")
                .with_default(CONFIG_PATH),
            OptionSpec::value("-p, --port", "PORT", "Port to listen on")
                .with_parser(ValueParser::new(clap::value_parser!(u16))),
        ],
        trailing_args: false,
        action: Box::new(|matches, ctx| {
            let config = matches
                .get_one::<String>("config")
                .map(String::as_str)
                .unwrap_or(CONFIG_PATH);
            let args = server_args(config, matches.get_one::<u16>("port").copied());
            run_node(ctx, ENTRY, &args)
        }),
    });
}

fn init_config(browser: &Browser) -> serde_json::Value {
    serde_json::json!({
        "suites": ["tests/**/*.js"],
        "environments": [{ "browserName": browser.browser_name }],
        "plugins": [],
    })
}

fn runner_args(
    config: &str,
    suites: Option<&str>,
    reporters: Option<&str>,
    grep: Option<&str>,
    bail: bool,
    extra: &[String],
) -> Vec<String> {
    let mut args = vec!["--config".to_string(), config.to_string()];
    if let Some(suites) = suites {
        args.push("--suites".to_string());
        args.push(suites.to_string());
    }
    if let Some(reporters) = reporters {
        args.push("--reporters".to_string());
        args.push(reporters.to_string());
    }
    if let Some(grep) = grep {
        args.push("--grep".to_string());
        args.push(grep.to_string());
    }
    if bail {
        args.push("--bail".to_string());
    }
    args.extend(extra.iter().cloned());
    args
}

fn server_args(config: &str, port: Option<u16>) -> Vec<String> {
    let mut args = vec![
        "--config".to_string(),
        config.to_string(),
        "--serveOnly".to_string(),
    ];
    if let Some(port) = port {
        args.push("--port".to_string());
        args.push(port.to_string());
    }
    args
}

#[cfg(test)]
#[path = "cli4_tests.rs"]
mod tests;
