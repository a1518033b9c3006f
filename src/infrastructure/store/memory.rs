// SPDX-License-Identifier: MPL-2.0
//! In-memory locale store.

use crate::application::port::{LocaleStore, StoreError};
use crate::domain::locale::{Locale, UserId};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

/// Locale store kept in process memory.
#[derive(Debug, Default)]
pub struct MemoryLocaleStore {
    entries: RwLock<HashMap<UserId, Locale>>,
}

impl MemoryLocaleStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `locale` for `user_id`, returning the previous value.
    pub fn set(&self, user_id: UserId, locale: Locale) -> Option<Locale> {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(user_id, locale)
    }

    pub fn remove(&self, user_id: UserId) -> Option<Locale> {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&user_id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl FromIterator<(UserId, Locale)> for MemoryLocaleStore {
    fn from_iter<I: IntoIterator<Item = (UserId, Locale)>>(iter: I) -> Self {
        Self {
            entries: RwLock::new(iter.into_iter().collect()),
        }
    }
}

#[async_trait]
impl LocaleStore for MemoryLocaleStore {
    async fn lookup(&self, user_id: UserId) -> Result<Option<Locale>, StoreError> {
        Ok(self
            .entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&user_id)
            .cloned())
    }
}
