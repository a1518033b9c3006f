// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the pipeline.
//!
//! This module decides which locale each inbound event is rendered in and
//! prepares the Fluent resources the renderer reads.
//!
//! # Features
//!
//! - Per-user locale resolution: cache, persisted choice, client hint, default
//! - One-time normalization of flat `.ftl` files into `<locale>/main.ftl`
//! - Loading of the normalized tree into Fluent bundles

pub mod bootstrap;
pub mod fluent;
pub mod resolver;

pub use bootstrap::{BootstrapReport, ResourceBootstrapper, ResourceDescriptor};
pub use fluent::{FluentCatalog, L10nContext};
pub use resolver::{LocaleResolver, Tier};
