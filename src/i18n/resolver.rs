// SPDX-License-Identifier: MPL-2.0
//! Per-user locale resolution with an in-process cache.
//!
//! Resolution walks four tiers and stops at the first one that yields a
//! locale:
//!
//! 1. **Cache** - a locale already resolved for this user in this process
//! 2. **Store** - the locale the user persisted (best effort)
//! 3. **Hint** - the language code the client declared on the event
//! 4. **Default** - the configured default locale
//!
//! Whatever tiers 2-4 produce is written back to the cache, so every later
//! call for the same user is answered without I/O.
//!
//! # Concurrency
//!
//! The cache map sits behind a mutex that is only held for a single map
//! operation, never across the store lookup. Two first-time resolutions of
//! the same user may both reach the store and both write the cache; the last
//! write wins and both writers derived their value from the same sources.

use crate::application::port::{LocaleStore, StoreError};
use crate::config::Config;
use crate::domain::locale::{Locale, UserId};
use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

/// Tier that produced a resolved locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Cache,
    Store,
    Hint,
    Default,
}

/// Resolves the display locale of each user. Never fails.
pub struct LocaleResolver {
    store: Option<Arc<dyn LocaleStore>>,
    default_locale: Locale,
    lookup_timeout: Option<Duration>,
    cache: Mutex<LruCache<UserId, Locale>>,
}

impl LocaleResolver {
    /// Creates a resolver backed by `store`, with an unbounded cache.
    #[must_use]
    pub fn new(store: Arc<dyn LocaleStore>, default_locale: Locale) -> Self {
        Self {
            store: Some(store),
            default_locale,
            lookup_timeout: None,
            cache: Mutex::new(LruCache::unbounded()),
        }
    }

    /// Creates a resolver that skips the store tier entirely.
    #[must_use]
    pub fn without_store(default_locale: Locale) -> Self {
        Self {
            store: None,
            default_locale,
            lookup_timeout: None,
            cache: Mutex::new(LruCache::unbounded()),
        }
    }

    /// Builds a resolver from the `[locales]`, `[store]` and `[cache]` sections.
    ///
    /// A blank `default_locale` falls back to the built-in default.
    #[must_use]
    pub fn from_config(config: &Config, store: Option<Arc<dyn LocaleStore>>) -> Self {
        let default_locale = Locale::parse(&config.locales.default_locale).unwrap_or_default();
        let mut resolver = match store {
            Some(store) => Self::new(store, default_locale),
            None => Self::without_store(default_locale),
        };
        if let Some(capacity) = config.cache_capacity() {
            resolver = resolver.with_capacity(capacity);
        }
        if let Some(limit) = config.lookup_timeout() {
            resolver = resolver.with_lookup_timeout(limit);
        }
        resolver
    }

    /// Bounds the cache to `capacity` users, evicting the least recently used.
    #[must_use]
    pub fn with_capacity(self, capacity: NonZeroUsize) -> Self {
        Self {
            cache: Mutex::new(LruCache::new(capacity)),
            ..self
        }
    }

    /// Treats store lookups slower than `limit` as failed.
    #[must_use]
    pub fn with_lookup_timeout(self, limit: Duration) -> Self {
        Self {
            lookup_timeout: Some(limit),
            ..self
        }
    }

    /// Returns the locale used when no other tier applies.
    #[must_use]
    pub fn default_locale(&self) -> &Locale {
        &self.default_locale
    }

    /// Resolves the locale for `user_id`, using `hint` when the store has none.
    ///
    /// A blank hint counts as absent.
    pub async fn resolve(&self, user_id: UserId, hint: Option<&str>) -> Locale {
        self.resolve_with_tier(user_id, hint).await.0
    }

    /// Same as [`resolve`](Self::resolve), also reporting which tier answered.
    pub async fn resolve_with_tier(&self, user_id: UserId, hint: Option<&str>) -> (Locale, Tier) {
        if let Some(locale) = self.cached(user_id) {
            tracing::trace!(%user_id, %locale, "locale cache hit");
            return (locale, Tier::Cache);
        }

        let (locale, tier) = match self.lookup_store(user_id).await {
            Some(locale) => (locale, Tier::Store),
            None => match hint.and_then(Locale::parse) {
                Some(locale) => (locale, Tier::Hint),
                None => (self.default_locale.clone(), Tier::Default),
            },
        };

        tracing::debug!(%user_id, %locale, ?tier, "resolved locale");
        self.lock_cache().put(user_id, locale.clone());
        (locale, tier)
    }

    /// Returns the cached locale of `user_id` without consulting other tiers.
    #[must_use]
    pub fn cached(&self, user_id: UserId) -> Option<Locale> {
        self.lock_cache().get(&user_id).cloned()
    }

    /// Number of users currently cached.
    #[must_use]
    pub fn cached_len(&self) -> usize {
        self.lock_cache().len()
    }

    /// Store tier. Errors, timeouts and misses all map to `None`.
    async fn lookup_store(&self, user_id: UserId) -> Option<Locale> {
        let store = self.store.as_ref()?;

        let outcome = match self.lookup_timeout {
            Some(limit) => tokio::time::timeout(limit, store.lookup(user_id))
                .await
                .unwrap_or(Err(StoreError::Timeout)),
            None => store.lookup(user_id).await,
        };

        match outcome {
            Ok(Some(locale)) => Some(locale),
            Ok(None) => {
                tracing::debug!(%user_id, "no persisted locale");
                None
            }
            Err(err) => {
                tracing::warn!(%user_id, error = %err, "locale store lookup failed, falling back");
                None
            }
        }
    }

    fn lock_cache(&self) -> MutexGuard<'_, LruCache<UserId, Locale>> {
        // Entries are written whole, so a poisoned map is still consistent.
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
