// SPDX-License-Identifier: MPL-2.0
//! One-time normalization of the locale resource tree.
//!
//! Translators drop flat files such as `locales/ru.ftl`; the catalog expects
//! `locales/ru/main.ftl`. [`ResourceBootstrapper::normalize`] moves every flat
//! file into its locale directory under the canonical name, and is safe to run
//! on every start: a file already in canonical position is never overwritten
//! and its flat counterpart is left where it is.
//!
//! Runs once, synchronously, before the catalog is built and before any
//! events are dispatched. Assumes a single process bootstraps a given root.

use crate::config::LocalesConfig;
use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// A flat resource file found directly under the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceDescriptor {
    /// Locale code taken from the file stem.
    pub locale: String,
    /// Current location of the file.
    pub source: PathBuf,
}

/// One locale directory of the final tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleDir {
    pub name: String,
    pub files: Vec<String>,
}

/// What a normalization pass did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BootstrapReport {
    /// Canonical paths that received a moved file.
    pub moved: Vec<PathBuf>,
    /// Flat files left in place because the canonical file already existed.
    pub skipped: Vec<PathBuf>,
    /// Paths that could not be processed, with the error message.
    pub failed: Vec<(PathBuf, String)>,
    /// Locale directories under the root after the pass, sorted by name.
    pub layout: Vec<LocaleDir>,
}

impl BootstrapReport {
    /// Returns `true` if the pass did not touch the filesystem.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.moved.is_empty()
    }
}

/// Moves flat per-locale files into the canonical directory layout.
#[derive(Debug, Clone)]
pub struct ResourceBootstrapper {
    canonical_filename: String,
    extension: String,
}

impl ResourceBootstrapper {
    /// Creates a bootstrapper placing `*.{extension}` files at
    /// `<root>/<locale>/<canonical_filename>`.
    #[must_use]
    pub fn new(canonical_filename: impl Into<String>, extension: impl Into<String>) -> Self {
        Self {
            canonical_filename: canonical_filename.into(),
            extension: extension.into().trim_start_matches('.').to_string(),
        }
    }

    /// Creates a bootstrapper from the `[locales]` config section.
    #[must_use]
    pub fn from_config(config: &LocalesConfig) -> Self {
        Self::new(config.canonical_filename.clone(), config.extension.clone())
    }

    /// Returns the canonical path of `locale` under `root`.
    #[must_use]
    pub fn canonical_path(&self, root: &Path, locale: &str) -> PathBuf {
        root.join(locale).join(&self.canonical_filename)
    }

    /// Normalizes the resource tree under `root`.
    ///
    /// Files are handled one at a time: a flat file that cannot be moved is
    /// logged, recorded in [`BootstrapReport::failed`] and left in place, and
    /// the pass continues with the next one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ResourceRootMissing`] before touching anything if
    /// `root` is not an existing directory. No other failure is returned.
    pub fn normalize(&self, root: &Path) -> Result<BootstrapReport> {
        if !root.is_dir() {
            return Err(Error::ResourceRootMissing(root.to_path_buf()));
        }

        let mut report = BootstrapReport::default();
        let resources = match self.scan(root) {
            Ok(resources) => resources,
            Err(err) => {
                tracing::warn!(root = %root.display(), error = %err, "failed to scan resource root");
                report.failed.push((root.to_path_buf(), err.to_string()));
                Vec::new()
            }
        };
        tracing::info!(root = %root.display(), found = resources.len(), "scanned flat locale files");

        for resource in resources {
            let target = self.canonical_path(root, &resource.locale);
            if target.exists() {
                tracing::info!(
                    source = %resource.source.display(),
                    target = %target.display(),
                    "canonical file already present, leaving flat file in place"
                );
                report.skipped.push(resource.source);
                continue;
            }

            if let Err(err) = relocate(&resource.source, &target) {
                tracing::warn!(
                    source = %resource.source.display(),
                    target = %target.display(),
                    error = %err,
                    "failed to move flat locale file"
                );
                report.failed.push((resource.source, err.to_string()));
                continue;
            }
            tracing::info!(
                locale = %resource.locale,
                target = %target.display(),
                "moved flat locale file"
            );
            report.moved.push(target);
        }

        match layout(root) {
            Ok(dirs) => report.layout = dirs,
            Err(err) => {
                tracing::warn!(root = %root.display(), error = %err, "failed to list locale directories");
            }
        }
        for dir in &report.layout {
            tracing::info!(locale = %dir.name, files = ?dir.files, "locale directory");
        }
        Ok(report)
    }

    /// Lists flat resource files directly under `root`, sorted by file name.
    ///
    /// # Errors
    ///
    /// Returns an error if `root` cannot be read.
    pub fn scan(&self, root: &Path) -> Result<Vec<ResourceDescriptor>> {
        let mut resources = Vec::new();

        for entry in fs::read_dir(root)? {
            let entry = entry?;
            let path = entry.path();

            if !path.is_file() || !self.is_resource(&path) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                resources.push(ResourceDescriptor {
                    locale: stem.to_string(),
                    source: path.clone(),
                });
            }
        }

        resources.sort_by(|a, b| a.source.file_name().cmp(&b.source.file_name()));
        Ok(resources)
    }

    fn is_resource(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(&self.extension))
    }
}

/// Creates the locale directory of `target` and moves `source` there.
fn relocate(source: &Path, target: &Path) -> std::io::Result<()> {
    if let Some(dir) = target.parent() {
        fs::create_dir_all(dir)?;
    }
    fs::rename(source, target)
}

/// Lists the subdirectories of `root` with their file names, both sorted.
///
/// # Errors
///
/// Returns an error if `root` or one of its subdirectories cannot be read.
pub fn layout(root: &Path) -> Result<Vec<LocaleDir>> {
    let mut dirs = Vec::new();

    for entry in fs::read_dir(root)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }

        let mut files = Vec::new();
        for file in fs::read_dir(&path)? {
            files.push(file?.file_name().to_string_lossy().into_owned());
        }
        files.sort();

        dirs.push(LocaleDir {
            name: entry.file_name().to_string_lossy().into_owned(),
            files,
        });
    }

    dirs.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(dirs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::write_file;
    use tempfile::tempdir;

    fn bootstrapper() -> ResourceBootstrapper {
        ResourceBootstrapper::new("main.ftl", "ftl")
    }

    #[test]
    fn flat_file_moves_to_canonical_position() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let root = temp_dir.path();
        write_file(root, "ru.ftl", "hello = Привет");

        let report = bootstrapper().normalize(root).expect("normalize failed");

        let target = root.join("ru").join("main.ftl");
        assert_eq!(report.moved, vec![target.clone()]);
        assert!(!root.join("ru.ftl").exists());
        assert_eq!(
            fs::read_to_string(target).expect("failed to read target"),
            "hello = Привет"
        );
    }

    #[test]
    fn second_run_is_a_noop() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let root = temp_dir.path();
        write_file(root, "ru.ftl", "hello = Привет");

        let first = bootstrapper().normalize(root).expect("first run failed");
        let second = bootstrapper().normalize(root).expect("second run failed");

        assert!(!first.is_noop());
        assert!(second.is_noop());
        assert!(second.skipped.is_empty());
        assert_eq!(first.layout, second.layout);
    }

    #[test]
    fn existing_canonical_tree_is_preserved() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let root = temp_dir.path();
        let existing = write_file(root, "en/main.ftl", "hello = Hello");

        let report = bootstrapper().normalize(root).expect("normalize failed");

        assert!(report.is_noop());
        assert_eq!(
            fs::read_to_string(existing).expect("failed to read file"),
            "hello = Hello"
        );
        assert_eq!(
            report.layout,
            vec![LocaleDir {
                name: "en".to_string(),
                files: vec!["main.ftl".to_string()],
            }]
        );
    }

    #[test]
    fn canonical_file_is_never_overwritten() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let root = temp_dir.path();
        let canonical = write_file(root, "de/main.ftl", "hello = Hallo");
        let flat = write_file(root, "de.ftl", "hello = stale");

        let report = bootstrapper().normalize(root).expect("normalize failed");

        assert_eq!(report.skipped, vec![flat.clone()]);
        assert!(flat.exists(), "skipped source must not be deleted");
        assert_eq!(
            fs::read_to_string(canonical).expect("failed to read file"),
            "hello = Hallo"
        );
    }

    #[test]
    fn failed_file_does_not_stop_the_pass() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let root = temp_dir.path();
        // A regular file where the `de` locale directory should go.
        write_file(root, "de", "not a directory");
        let blocked = write_file(root, "de.ftl", "hello = Hallo");
        write_file(root, "ru.ftl", "hello = Привет");

        let report = bootstrapper()
            .normalize(root)
            .expect("only a missing root is fatal");

        assert_eq!(report.moved, vec![root.join("ru").join("main.ftl")]);
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].0, blocked);
        assert!(blocked.exists(), "failed source must stay in place");
        assert!(!root.join("ru.ftl").exists());
        assert_eq!(
            fs::read_to_string(root.join("ru").join("main.ftl")).expect("failed to read target"),
            "hello = Привет"
        );
        let names: Vec<_> = report.layout.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["ru"]);
    }

    #[test]
    fn missing_root_is_fatal_and_writes_nothing() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let root = temp_dir.path().join("locales");

        let err = bootstrapper()
            .normalize(&root)
            .expect_err("missing root must fail");

        assert!(matches!(err, Error::ResourceRootMissing(ref p) if p == &root));
        assert!(!root.exists());
        let entries = fs::read_dir(temp_dir.path())
            .expect("failed to read temp dir")
            .count();
        assert_eq!(entries, 0);
    }

    #[test]
    fn empty_root_is_a_noop() {
        let temp_dir = tempdir().expect("failed to create temp dir");

        let report = bootstrapper()
            .normalize(temp_dir.path())
            .expect("normalize failed");

        assert_eq!(report, BootstrapReport::default());
    }

    #[test]
    fn unrelated_files_in_locale_dir_are_untouched() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let root = temp_dir.path();
        write_file(root, "fr/notes.txt", "translator notes");
        write_file(root, "fr.ftl", "hello = Bonjour");

        let report = bootstrapper().normalize(root).expect("normalize failed");

        assert_eq!(report.moved.len(), 1);
        assert_eq!(
            report.layout,
            vec![LocaleDir {
                name: "fr".to_string(),
                files: vec!["main.ftl".to_string(), "notes.txt".to_string()],
            }]
        );
    }

    #[test]
    fn scan_ignores_other_extensions_and_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let root = temp_dir.path();
        write_file(root, "README.md", "docs");
        write_file(root, "de.FTL", "hello = Hallo");
        write_file(root, "en.ftl", "hello = Hello");
        fs::create_dir(root.join("es.ftl")).expect("failed to create dir");

        let resources = bootstrapper().scan(root).expect("scan failed");

        let locales: Vec<_> = resources.iter().map(|r| r.locale.as_str()).collect();
        assert_eq!(locales, vec!["de", "en"]);
    }

    #[test]
    fn moves_every_flat_file_in_one_pass() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let root = temp_dir.path();
        for code in ["en", "de", "ru"] {
            write_file(root, &format!("{code}.ftl"), "hello = x");
        }

        let report = bootstrapper().normalize(root).expect("normalize failed");

        assert_eq!(report.moved.len(), 3);
        let names: Vec<_> = report.layout.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["de", "en", "ru"]);
    }

    #[test]
    fn extension_with_leading_dot_is_accepted() {
        let bootstrapper = ResourceBootstrapper::new("main.ftl", ".ftl");
        assert!(bootstrapper.is_resource(Path::new("ru.ftl")));
        assert!(!bootstrapper.is_resource(Path::new("ru.txt")));
    }
}
