// SPDX-License-Identifier: MPL-2.0
//! Persistent locale store adapters (implement [`LocaleStore`]).
//!
//! [`LocaleStore`]: crate::application::port::LocaleStore

pub mod memory;
pub mod toml_file;

pub use memory::MemoryLocaleStore;
pub use toml_file::TomlLocaleStore;
