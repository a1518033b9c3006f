// SPDX-License-Identifier: MPL-2.0
//! Locale store backed by a TOML file.
//!
//! # File Format
//!
//! ```toml
//! [users]
//! 42 = "ru"
//! 1337 = "de"
//! ```
//!
//! The file is read on every lookup; the resolver's cache keeps that off the
//! hot path. A missing file means no user has a persisted locale.

use crate::application::port::{LocaleStore, StoreError};
use crate::domain::locale::{Locale, UserId};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

#[derive(Debug, Default, Serialize, Deserialize)]
struct UserLocales {
    #[serde(default)]
    users: BTreeMap<String, String>,
}

/// Locale store reading a `[users]` table from a TOML file.
#[derive(Debug)]
pub struct TomlLocaleStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl TomlLocaleStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Persists `locale` for `user_id`, creating the file if needed.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the file cannot be read, parsed or written.
    pub async fn set(&self, user_id: UserId, locale: &Locale) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;

        let mut table = self.read_table().await?;
        table
            .users
            .insert(user_id.to_string(), locale.as_str().to_string());

        let content =
            toml::to_string_pretty(&table).map_err(|e| StoreError::Corrupt(e.to_string()))?;
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        }
        tokio::fs::write(&self.path, content)
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))
    }

    async fn read_table(&self) -> Result<UserLocales, StoreError> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(UserLocales::default()),
            Err(err) => return Err(StoreError::Unavailable(err.to_string())),
        };
        toml::from_str(&content).map_err(|e| StoreError::Corrupt(e.to_string()))
    }
}

#[async_trait]
impl LocaleStore for TomlLocaleStore {
    async fn lookup(&self, user_id: UserId) -> Result<Option<Locale>, StoreError> {
        let table = self.read_table().await?;
        Ok(table
            .users
            .get(&user_id.to_string())
            .and_then(|code| Locale::parse(code)))
    }
}
