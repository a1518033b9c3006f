// SPDX-License-Identifier: MPL-2.0
//! Persistent locale store port definition.
//!
//! This module defines the [`LocaleStore`] trait: the lookup contract of the
//! persistent store that remembers which locale a user picked. Schema and
//! connection management belong to the adapter; the resolver only sees
//! `lookup`.

use crate::domain::locale::{Locale, UserId};
use async_trait::async_trait;
use std::fmt;

// =============================================================================
// StoreError
// =============================================================================

/// Errors a locale store lookup can fail with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The backing store could not be reached or read.
    Unavailable(String),

    /// The backing store was reached but its content is not usable.
    Corrupt(String),

    /// The lookup did not complete within the configured deadline.
    Timeout,
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Unavailable(msg) => write!(f, "Locale store unavailable: {msg}"),
            StoreError::Corrupt(msg) => write!(f, "Locale store corrupt: {msg}"),
            StoreError::Timeout => write!(f, "Locale store lookup timed out"),
        }
    }
}

impl std::error::Error for StoreError {}

// =============================================================================
// LocaleStore Trait
// =============================================================================

/// Port for looking up the persisted locale of a user.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`; lookups for different users run
/// concurrently.
#[async_trait]
pub trait LocaleStore: Send + Sync {
    /// Returns the locale recorded for `user_id`, or `None` if the user never
    /// set one.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the store cannot answer.
    async fn lookup(&self, user_id: UserId) -> Result<Option<Locale>, StoreError>;
}
