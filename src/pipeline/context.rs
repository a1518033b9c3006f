// SPDX-License-Identifier: MPL-2.0
//! Inbound events and their per-event processing context.

use crate::domain::locale::UserId;
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;

/// The user an event originates from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    /// Language code declared by the user's client, if any.
    pub language_code: Option<String>,
}

/// An inbound event as seen by the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    /// Absent for events not tied to a user (e.g. channel posts).
    pub from_user: Option<User>,
    pub text: String,
}

impl Event {
    #[must_use]
    pub fn from_user(id: UserId, language_code: Option<&str>, text: impl Into<String>) -> Self {
        Self {
            from_user: Some(User {
                id,
                language_code: language_code.map(str::to_string),
            }),
            text: text.into(),
        }
    }

    #[must_use]
    pub fn anonymous(text: impl Into<String>) -> Self {
        Self {
            from_user: None,
            text: text.into(),
        }
    }
}

/// Per-event values, looked up by type.
///
/// Middlewares insert values before the handler runs; handlers read them back
/// with [`get`](Self::get).
#[derive(Default)]
pub struct EventContext {
    values: HashMap<TypeId, Box<dyn Any + Send + Sync>>,
}

impl EventContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value`, returning the value of the same type it replaced.
    pub fn insert<T: Send + Sync + 'static>(&mut self, value: T) -> Option<T> {
        self.values
            .insert(TypeId::of::<T>(), Box::new(value))
            .and_then(|old| old.downcast::<T>().ok())
            .map(|old| *old)
    }

    #[must_use]
    pub fn get<T: Send + Sync + 'static>(&self) -> Option<&T> {
        self.values
            .get(&TypeId::of::<T>())
            .and_then(|value| value.downcast_ref::<T>())
    }

    pub fn remove<T: Send + Sync + 'static>(&mut self) -> Option<T> {
        self.values
            .remove(&TypeId::of::<T>())
            .and_then(|value| value.downcast::<T>().ok())
            .map(|value| *value)
    }

    #[must_use]
    pub fn contains<T: Send + Sync + 'static>(&self) -> bool {
        self.values.contains_key(&TypeId::of::<T>())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl fmt::Debug for EventContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventContext")
            .field("len", &self.values.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::locale;
    use crate::domain::locale::Locale;

    #[test]
    fn insert_then_get_by_type() {
        let mut ctx = EventContext::new();
        ctx.insert(locale("ru"));
        ctx.insert(7_u32);

        assert_eq!(ctx.get::<Locale>(), Some(&locale("ru")));
        assert_eq!(ctx.get::<u32>(), Some(&7));
        assert!(ctx.get::<String>().is_none());
        assert_eq!(ctx.len(), 2);
    }

    #[test]
    fn insert_replaces_value_of_same_type() {
        let mut ctx = EventContext::new();
        assert!(ctx.insert(locale("en")).is_none());

        let previous = ctx.insert(locale("de"));

        assert_eq!(previous, Some(locale("en")));
        assert_eq!(ctx.get::<Locale>(), Some(&locale("de")));
    }

    #[test]
    fn remove_takes_value_out() {
        let mut ctx = EventContext::new();
        ctx.insert(locale("fr"));

        assert_eq!(ctx.remove::<Locale>(), Some(locale("fr")));
        assert!(!ctx.contains::<Locale>());
        assert!(ctx.is_empty());
    }

    #[test]
    fn event_constructors_fill_user() {
        let event = Event::from_user(UserId::new(42), Some("de"), "/start");
        let user = event.from_user.expect("user should be set");
        assert_eq!(user.id, UserId::new(42));
        assert_eq!(user.language_code.as_deref(), Some("de"));

        assert!(Event::anonymous("post").from_user.is_none());
    }
}
