// SPDX-License-Identifier: MPL-2.0
//! Localization engine port definition.
//!
//! The rendering engine turns a resolved [`Locale`] into a context handle that
//! downstream handlers use to render responses. How the handle renders text is
//! the engine's business; the pipeline only builds it and passes it along.

use crate::domain::locale::Locale;

/// Port for building per-event localization contexts.
///
/// # Example
///
/// ```ignore
/// use locale_relay::application::port::LocalizationEngine;
/// use locale_relay::domain::locale::Locale;
///
/// fn context_for(engine: &impl LocalizationEngine, code: &str) {
///     let locale = Locale::parse(code).unwrap_or_default();
///     let _ctx = engine.new_context(&locale);
/// }
/// ```
pub trait LocalizationEngine: Send + Sync {
    /// Handle attached to each event's context.
    type Context: Clone + Send + Sync + 'static;

    /// Builds the localization context for `locale`.
    ///
    /// Must not fail: an engine that lacks `locale` falls back to whatever it
    /// considers its default.
    fn new_context(&self, locale: &Locale) -> Self::Context;
}
