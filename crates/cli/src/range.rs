// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Verdict Contributors

//! Inclusive semantic-version ranges.

use semver::Version;

/// An inclusive `[min, max]` version range.
///
/// Ordering is the semver crate's: numeric comparison of the
/// major.minor.patch triple, with pre-release versions sorting below the
/// release they precede (`4.0.0-rc.1 < 4.0.0`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionRange {
    pub min: Version,
    pub max: Version,
}

impl VersionRange {
    pub fn new(min: Version, max: Version) -> Self {
        Self { min, max }
    }

    /// True when `min <= version <= max`. Pure; absence of a match is a
    /// valid outcome, not an error.
    pub fn accepts(&self, version: &Version) -> bool {
        *version >= self.min && *version <= self.max
    }
}

impl std::fmt::Display for VersionRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

#[cfg(test)]
#[path = "range_tests.rs"]
mod tests;
