// SPDX-License-Identifier: MPL-2.0
//! Application layer - Use cases and orchestration.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - The pipeline uses application layer ports, never concrete adapters
//!
//! # Example
//!
//! ```ignore
//! use locale_relay::application::port::LocaleStore;
//! use locale_relay::infrastructure::store::MemoryLocaleStore;
//!
//! // Infrastructure implements the port trait
//! let store = MemoryLocaleStore::new();
//! let _ = store.lookup(42.into()).await;
//! ```

pub mod port;
