// SPDX-License-Identifier: MPL-2.0
//! Test utilities shared by unit tests.
//!
//! Provides a scriptable [`LocaleStore`] double and small filesystem helpers
//! for building resource trees.

use crate::application::port::{LocaleStore, StoreError};
use crate::domain::locale::{Locale, UserId};
use async_trait::async_trait;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Builds a locale from a literal code.
pub fn locale(code: &str) -> Locale {
    Locale::parse(code).expect("test locale codes are non-blank")
}

/// Writes `content` to `dir/name`, creating parent directories.
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("failed to create parent dir");
    }
    fs::write(&path, content).expect("failed to write test file");
    path
}

/// Store double that answers from a fixed table, or always fails, and counts
/// how often it was asked.
pub struct ScriptedStore {
    entries: HashMap<UserId, Locale>,
    fail: bool,
    delay: Option<Duration>,
    lookups: AtomicUsize,
}

impl ScriptedStore {
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
            fail: false,
            delay: None,
            lookups: AtomicUsize::new(0),
        }
    }

    pub fn with_entry(user: i64, code: &str) -> Self {
        let mut store = Self::empty();
        store.entries.insert(UserId::new(user), locale(code));
        store
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::empty()
        }
    }

    pub fn delayed(self, delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..self
        }
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LocaleStore for ScriptedStore {
    async fn lookup(&self, user_id: UserId) -> Result<Option<Locale>, StoreError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if self.fail {
            return Err(StoreError::Unavailable("scripted failure".to_string()));
        }
        Ok(self.entries.get(&user_id).cloned())
    }
}
