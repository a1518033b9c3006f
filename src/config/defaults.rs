// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Locales**: Resource tree location and canonical layout
//! - **Store**: Persistent locale store lookup
//! - **Cache**: Resolution cache sizing

// ==========================================================================
// Locale Resource Defaults
// ==========================================================================

/// Default resource root, relative to the working directory.
pub const DEFAULT_LOCALES_DIR: &str = "locales";

/// File name every locale directory must contain.
pub const DEFAULT_CANONICAL_FILENAME: &str = "main.ftl";

/// Extension of flat per-locale resource files.
pub const DEFAULT_RESOURCE_EXTENSION: &str = "ftl";

/// Locale used when neither the store nor the client supply one.
pub const DEFAULT_LOCALE: &str = crate::domain::locale::DEFAULT_LOCALE_CODE;

// ==========================================================================
// Store Defaults
// ==========================================================================

/// Upper bound accepted for the store lookup timeout (in milliseconds).
pub const MAX_LOOKUP_TIMEOUT_MS: u64 = 60_000;

// ==========================================================================
// Cache Defaults
// ==========================================================================

/// Smallest accepted cache bound. Values below are raised to it.
pub const MIN_CACHE_USERS: usize = 16;
