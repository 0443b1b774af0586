// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Verdict Contributors

//! Version-gated adapter selection.
//!
//! This is the compatibility-shim layer: it lets the front-end support
//! multiple incompatible major versions of the library without version
//! logic leaking anywhere else.

use semver::Version;

use crate::adapter;
use crate::context::Context;
use crate::error::Error;

/// Lowest version any compiled-in adapter accepts.
pub fn minimum_supported() -> Version {
    adapter::ALL
        .first()
        .map(|def| (def.range)().min)
        .unwrap_or_else(|| Version::new(0, 0, 0))
}

/// Select and invoke the first adapter whose range accepts the
/// installed version.
///
/// Ranges are checked in declared order. They are non-overlapping by
/// construction; an overlapping misconfiguration would silently prefer
/// the earlier-declared adapter.
pub fn dispatch(ctx: &mut Context) -> Result<&'static str, Error> {
    let version = ctx.metadata.version.clone();
    for def in adapter::ALL {
        let range = (def.range)();
        if range.accepts(&version) {
            tracing::debug!(adapter = def.name, %version, range = %range, "selected adapter");
            ctx.verbose.log(&format!("using {} for verdict {}", def.name, version));
            (def.register)(ctx);
            return Ok(def.name);
        }
    }
    Err(Error::UnsupportedVersion {
        installed: version,
        minimum: minimum_supported(),
    })
}

#[cfg(test)]
#[path = "dispatch_tests.rs"]
mod tests;
