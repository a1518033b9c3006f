// SPDX-License-Identifier: MPL-2.0
//! Dispatch hook attaching the resolved locale to every event.

use super::context::{Event, EventContext};
use crate::application::port::LocalizationEngine;
use crate::error::Result;
use crate::i18n::resolver::LocaleResolver;
use async_trait::async_trait;
use std::sync::Arc;

/// Downstream event handler.
#[async_trait]
pub trait Handler: Send + Sync {
    /// Handles one event.
    ///
    /// # Errors
    ///
    /// Whatever the handler fails with is returned from the dispatch unchanged.
    async fn handle(&self, event: Event, ctx: EventContext) -> Result<()>;
}

/// Resolves each event's locale and hands the event on with the locale and
/// its localization context attached.
///
/// Handlers read the values back with `ctx.get::<Locale>()` and
/// `ctx.get::<E::Context>()`.
pub struct LocaleMiddleware<E: LocalizationEngine> {
    resolver: Arc<LocaleResolver>,
    engine: Arc<E>,
}

impl<E: LocalizationEngine> Clone for LocaleMiddleware<E> {
    fn clone(&self) -> Self {
        Self {
            resolver: self.resolver.clone(),
            engine: self.engine.clone(),
        }
    }
}

impl<E: LocalizationEngine> LocaleMiddleware<E> {
    #[must_use]
    pub fn new(resolver: Arc<LocaleResolver>, engine: Arc<E>) -> Self {
        Self { resolver, engine }
    }

    #[must_use]
    pub fn resolver(&self) -> &LocaleResolver {
        &self.resolver
    }

    /// Resolves the locale of `event`, stores it and its localization context
    /// in `ctx`, then runs `handler`.
    ///
    /// Events without a user get the default locale and do not touch the
    /// resolver's cache.
    ///
    /// # Errors
    ///
    /// Only the handler's own error; locale resolution cannot fail.
    pub async fn dispatch<H>(&self, event: Event, mut ctx: EventContext, handler: &H) -> Result<()>
    where
        H: Handler + ?Sized,
    {
        let locale = match &event.from_user {
            Some(user) => {
                self.resolver
                    .resolve(user.id, user.language_code.as_deref())
                    .await
            }
            None => self.resolver.default_locale().clone(),
        };

        let l10n = self.engine.new_context(&locale);
        ctx.insert(l10n);
        ctx.insert(locale);

        handler.handle(event, ctx).await
    }
}
