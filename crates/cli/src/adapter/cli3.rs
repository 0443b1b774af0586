// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Verdict Contributors

//! Adapter for the verdict 3.x family.
//!
//! The 3.x library ships separate client and server entry points, and
//! both take `key=value` pairs rather than flags.

use std::path::Path;

use clap::builder::{PossibleValuesParser, ValueParser};
use semver::Version;

use crate::context::{Browser, Context, browser};
use crate::range::VersionRange;
use crate::registry::{CommandSpec, OptionSpec};

use super::{run_node, version_command, write_config};

/// Config scaffold location for 3.x projects.
pub const CONFIG_PATH: &str = "tests/verdict.json";

pub fn range() -> VersionRange {
    VersionRange::new(Version::new(3, 0, 0), Version::new(3, 9, 9))
}

/// Register the 3.x command set.
pub fn register(ctx: &mut Context) {
    let browsers: Vec<&'static str> = ctx.browsers.iter().map(|b| b.name).collect();

    ctx.registry.register(version_command());

    ctx.registry.register(CommandSpec {
        name: "init",
        about: "Scaffold a verdict 3.x test configuration".to_string(),
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
        about: "Run tests with the node client".to_string(),
        options: vec![
            OptionSpec::value("-c, --config", "PATH", "Path to the test configuration")
                .with_default(CONFIG_PATH),
            OptionSpec::value("--reporter", "NAME", "Reporter to use"),
            OptionSpec::value("--grep", "PATTERN", "Only run tests matching the pattern"),
        ],
        trailing_args: false,
        action: Box::new(|matches, ctx| {
            let config = matches
                .get_one::<String>("config")
                .map(String::as_str)
                .unwrap_or(CONFIG_PATH);
            let args = runner_args(
                config,
                matches.get_one::<String>("reporter").map(String::as_str),
                matches.get_one::<String>("grep").map(String::as_str),
            );
            run_node(ctx, "bin/client.js", &args)
        }),
    });

    ctx.registry.register(CommandSpec {
        name: "serve",
        about: "Start the instrumenting test server".to_string(),
        options: vec![
            OptionSpec::value("-c, --config", "PATH", "Path to the test configuration")
                .with_default(CONFIG_PATH),
            OptionSpec::value("-p, --port", "PORT", "Port to listen on")
                .with_parser(ValueParser::new(clap::value_parser!(u16))),
            OptionSpec::flag("--keep-open", "Keep the server running after a test pass"),
        ],
        trailing_args: false,
        action: Box::new(|matches, ctx| {
            let config = matches
                .get_one::<String>("config")
                .map(String::as_str)
                .unwrap_or(CONFIG_PATH);
            let args = server_args(
                config,
                matches.get_one::<u16>("port").copied(),
                matches.get_flag("keep-open"),
            );
            run_node(ctx, "bin/server.js", &args)
        }),
    });
}

fn init_config(browser: &Browser) -> serde_json::Value {
    serde_json::json!({
        "suites": ["tests/unit/**/*.js"],
        "functionalSuites": ["tests/functional/**/*.js"],
        "environments": [{ "browserName": browser.browser_name }],
        "tunnel": "selenium",
    })
}

fn runner_args(config: &str, reporter: Option<&str>, grep: Option<&str>) -> Vec<String> {
    let mut args = vec![format!("config={config}")];
    if let Some(reporter) = reporter {
        args.push(format!("reporters={reporter}"));
    }
    if let Some(grep) = grep {
        args.push(format!("grep={grep}"));
    }
    args
}

fn server_args(config: &str, port: Option<u16>, keep_open: bool) -> Vec<String> {
    let mut args = vec![format!("config={config}")];
    if let Some(port) = port {
        args.push(format!("port={port}"));
    }
    if keep_open {
        args.push("keepOpen=true".to_string());
    }
    args
}

#[cfg(test)]
#[path = "cli3_tests.rs"]
mod tests;
