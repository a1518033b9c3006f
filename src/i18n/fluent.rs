// SPDX-License-Identifier: MPL-2.0
use crate::application::port::LocalizationEngine;
use crate::config::LocalesConfig;
use crate::domain::locale::Locale;
use crate::error::{Error, Result};
use fluent_bundle::concurrent::FluentBundle;
use fluent_bundle::FluentResource;
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use unic_langid::LanguageIdentifier;

pub type Bundle = FluentBundle<FluentResource>;

/// Fluent bundles loaded from the canonical `<root>/<locale>/<file>` layout.
pub struct FluentCatalog {
    bundles: HashMap<Locale, Arc<Bundle>>,
    available_locales: Vec<Locale>,
    default_locale: Locale,
}

/// Localization handle attached to each event.
#[derive(Clone)]
pub struct L10nContext {
    locale: Locale,
    effective: Locale,
    bundle: Option<Arc<Bundle>>,
}

impl L10nContext {
    /// The locale resolved for the event.
    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// The locale whose bundle is actually used.
    pub fn effective_locale(&self) -> &Locale {
        &self.effective
    }

    /// `true` when the resolved locale has no catalog and the default stands in.
    pub fn is_fallback(&self) -> bool {
        self.locale != self.effective
    }

    pub fn bundle(&self) -> Option<&Bundle> {
        self.bundle.as_deref()
    }
}

impl fmt::Debug for L10nContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("L10nContext")
            .field("locale", &self.locale)
            .field("effective", &self.effective)
            .field("has_bundle", &self.bundle.is_some())
            .finish()
    }
}

impl FluentCatalog {
    pub fn from_config(config: &LocalesConfig) -> Result<Self> {
        let default_locale = Locale::parse(&config.default_locale).unwrap_or_default();
        Self::load(&config.root, &config.canonical_filename, default_locale)
    }

    pub fn load(root: &Path, canonical_filename: &str, default_locale: Locale) -> Result<Self> {
        let mut bundles = HashMap::new();
        let mut available_locales = Vec::new();

        for entry in fs::read_dir(root)? {
            let entry = entry?;
            let dir = entry.path();
            if !dir.is_dir() {
                continue;
            }

            let name = entry.file_name().to_string_lossy().into_owned();
            let Some(locale) = Locale::parse(&name) else {
                continue;
            };
            let Ok(langid) = name.parse::<LanguageIdentifier>() else {
                tracing::warn!(dir = %dir.display(), "not a language identifier, skipping");
                continue;
            };

            let path = dir.join(canonical_filename);
            if !path.is_file() {
                tracing::warn!(dir = %dir.display(), file = canonical_filename, "locale directory has no canonical file");
                continue;
            }

            let source = fs::read_to_string(&path)?;
            let resource = FluentResource::try_new(source).map_err(|(_, errors)| {
                Error::Catalog(format!("{}: {} parse error(s)", path.display(), errors.len()))
            })?;
            let mut bundle = FluentBundle::new_concurrent(vec![langid]);
            bundle.add_resource(resource).map_err(|errors| {
                Error::Catalog(format!("{}: {} conflicting message(s)", path.display(), errors.len()))
            })?;

            tracing::debug!(%locale, path = %path.display(), "loaded locale catalog");
            bundles.insert(locale.clone(), Arc::new(bundle));
            available_locales.push(locale);
        }

        available_locales.sort();
        if !bundles.contains_key(&default_locale) {
            tracing::warn!(locale = %default_locale, "default locale has no catalog");
        }

        Ok(Self {
            bundles,
            available_locales,
            default_locale,
        })
    }

    pub fn available_locales(&self) -> &[Locale] {
        &self.available_locales
    }

    pub fn default_locale(&self) -> &Locale {
        &self.default_locale
    }

    pub fn contains(&self, locale: &Locale) -> bool {
        self.bundles.contains_key(locale)
    }
}

impl LocalizationEngine for FluentCatalog {
    type Context = L10nContext;

    fn new_context(&self, locale: &Locale) -> L10nContext {
        let (effective, bundle) = match self.bundles.get(locale) {
            Some(bundle) => (locale.clone(), Some(bundle.clone())),
            None => (
                self.default_locale.clone(),
                self.bundles.get(&self.default_locale).cloned(),
            ),
        };
        L10nContext {
            locale: locale.clone(),
            effective,
            bundle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{locale, write_file};
    use tempfile::tempdir;

    #[test]
    fn loads_every_canonical_locale() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let root = temp_dir.path();
        write_file(root, "en/main.ftl", "hello = Hello");
        write_file(root, "ru/main.ftl", "hello = Привет");

        let catalog = FluentCatalog::load(root, "main.ftl", locale("en")).expect("load failed");

        assert_eq!(catalog.available_locales(), &[locale("en"), locale("ru")]);
    }

    #[test]
    fn context_uses_bundle_of_requested_locale() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let root = temp_dir.path();
        write_file(root, "en/main.ftl", "hello = Hello");
        write_file(root, "ru/main.ftl", "hello = Привет\nbye = Пока");

        let catalog = FluentCatalog::load(root, "main.ftl", locale("en")).expect("load failed");
        let ctx = catalog.new_context(&locale("ru"));

        assert_eq!(ctx.locale(), &locale("ru"));
        assert!(!ctx.is_fallback());
        let bundle = ctx.bundle().expect("ru bundle should be present");
        assert!(bundle.has_message("bye"));
    }

    #[test]
    fn unknown_locale_falls_back_to_default_bundle() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let root = temp_dir.path();
        write_file(root, "en/main.ftl", "hello = Hello");

        let catalog = FluentCatalog::load(root, "main.ftl", locale("en")).expect("load failed");
        let ctx = catalog.new_context(&locale("xx"));

        assert_eq!(ctx.locale(), &locale("xx"));
        assert_eq!(ctx.effective_locale(), &locale("en"));
        assert!(ctx.is_fallback());
        assert!(ctx.bundle().is_some());
    }

    #[test]
    fn directory_without_canonical_file_is_skipped() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let root = temp_dir.path();
        write_file(root, "en/main.ftl", "hello = Hello");
        write_file(root, "de/other.ftl", "hello = Hallo");

        let catalog = FluentCatalog::load(root, "main.ftl", locale("en")).expect("load failed");

        assert!(catalog.contains(&locale("en")));
        assert!(!catalog.contains(&locale("de")));
    }

    #[test]
    fn invalid_ftl_is_a_catalog_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let root = temp_dir.path();
        write_file(root, "en/main.ftl", "hello = {");

        let result = FluentCatalog::load(root, "main.ftl", locale("en"));

        assert!(matches!(result, Err(Error::Catalog(_))));
    }

    #[test]
    fn missing_default_catalog_yields_context_without_bundle() {
        let temp_dir = tempdir().expect("failed to create temp dir");

        let catalog =
            FluentCatalog::load(temp_dir.path(), "main.ftl", locale("en")).expect("load failed");
        let ctx = catalog.new_context(&locale("ru"));

        assert!(ctx.bundle().is_none());
        assert_eq!(ctx.effective_locale(), &locale("en"));
    }
}
