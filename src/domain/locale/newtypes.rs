// SPDX-License-Identifier: MPL-2.0
//! Locale newtypes.
//!
//! This module provides type-safe wrappers for the identifiers that flow
//! through locale resolution, so that an empty language code can never be
//! mistaken for a usable locale.

use std::fmt;

// =============================================================================
// UserId
// =============================================================================

/// Stable identifier of the user an inbound event originates from.
///
/// Used as the key of the resolution cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserId(i64);

impl UserId {
    /// Wraps a raw user identifier.
    #[must_use]
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Returns the raw identifier.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for UserId {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Locale
// =============================================================================

/// Canonical default locale code.
pub const DEFAULT_LOCALE_CODE: &str = "en";

/// Short code naming a translation catalog (e.g. `en`, `ru`).
///
/// A `Locale` is never empty: surrounding whitespace is trimmed and a blank
/// input does not produce a value. Beyond that the code is taken as-is; it is
/// not checked against the catalogs that are actually installed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Locale(String);

impl Locale {
    /// Builds a locale from a raw code, returning `None` for blank input.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    /// Returns the locale code.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self(DEFAULT_LOCALE_CODE.to_string())
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Locale {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
