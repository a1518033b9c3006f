// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`store`]: Persisted user locales (implements [`LocaleStore`])
//!
//! The Fluent implementation of [`LocalizationEngine`] lives in
//! [`crate::i18n::fluent`] next to the bootstrap that prepares its files.
//!
//! [`LocaleStore`]: crate::application::port::LocaleStore
//! [`LocalizationEngine`]: crate::application::port::LocalizationEngine

pub mod store;

// Re-export main types for convenience
pub use store::{MemoryLocaleStore, TomlLocaleStore};
