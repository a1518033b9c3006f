// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! These traits use only domain types, ensuring the application layer remains
//! independent of concrete implementations.
//!
//! # Available Ports
//!
//! - [`locale_store`]: Persisted per-user locale lookup
//! - [`localization`]: Localization context construction
//!
//! # Design Notes
//!
//! - All traits use domain types only (no Fluent types, no file formats)
//! - Traits are `Send + Sync` so they can be shared across runtime workers
//! - Fallible methods return `Result` with port-level error types

pub mod locale_store;
pub mod localization;

// Re-export main types for convenience
pub use locale_store::{LocaleStore, StoreError};
pub use localization::LocalizationEngine;
