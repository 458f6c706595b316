//! Bulk insertion of translation entries into locale files

use std::io::Write;
use std::path::{
    Path,
    PathBuf,
};

use serde_json::Value;

use crate::config::ToolSettings;
use crate::error::LocaleError;
use crate::locale::{
    load_locale,
    locale_path,
    save_locale,
};
use crate::tree::{
    LocaleTree,
    deep_set,
    split_key,
};

/// A dotted key with its translation per language code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranslationEntry {
    pub key: &'static str,
    pub values: &'static [(&'static str, &'static str)],
}

impl TranslationEntry {
    #[must_use]
    pub const fn new(key: &'static str, values: &'static [(&'static str, &'static str)]) -> Self {
        Self { key, values }
    }

    /// The translation for `language`, if the entry defines one.
    #[must_use]
    pub fn value_for(&self, language: &str) -> Option<&'static str> {
        self.values.iter().find(|(lang, _)| *lang == language).map(|(_, value)| *value)
    }

    /// The translation for `language`, falling back to the `fallback` language.
    #[must_use]
    pub fn resolve_value(&self, language: &str, fallback: &str) -> Option<&'static str> {
        self.value_for(language).or_else(|| self.value_for(fallback))
    }
}

/// Deep-set every entry into `tree` using its value for `language`.
///
/// Returns the number of entries applied.
///
/// # Errors
/// - an entry has no value for `language` nor for the reference language
/// - an entry's key runs through an existing leaf
pub fn apply_entries(
    tree: &mut LocaleTree,
    entries: &[TranslationEntry],
    language: &str,
    settings: &ToolSettings,
) -> Result<usize, LocaleError> {
    let fallback = settings.reference_language.as_str();

    for entry in entries {
        let value = entry.resolve_value(language, fallback).ok_or_else(|| {
            LocaleError::MissingFallback {
                key: entry.key.to_string(),
                language: language.to_string(),
            }
        })?;

        let segments = split_key(entry.key, &settings.key_separator);
        deep_set(tree, &segments, Value::String(value.to_string()))?;
    }

    Ok(entries.len())
}

/// Apply `entries` to the locale file of every configured language and write
/// each file back.
///
/// Languages without a locale file are skipped. Files are processed one at a
/// time; a failure stops the run and leaves already written files as they are.
/// Writes `Updated <path>` to `out` after each file.
pub fn update_locales(
    settings: &ToolSettings,
    root: &Path,
    entries: &[TranslationEntry],
    out: &mut impl Write,
) -> Result<Vec<PathBuf>, LocaleError> {
    let dir = settings.resolve_locales_dir(root);
    let mut updated = Vec::new();

    for language in &settings.languages {
        let path = locale_path(&dir, language);
        if !path.exists() {
            tracing::debug!("Skipping {language}: {:?} does not exist", path);
            continue;
        }

        let mut tree = load_locale(&path)?;
        let applied = apply_entries(&mut tree, entries, language, settings)?;
        save_locale(&path, &tree)?;

        tracing::debug!(language = %language, entries = applied, "Updated locale");
        writeln!(out, "Updated {}", path.display()).map_err(LocaleError::Output)?;
        updated.push(path);
    }

    tracing::info!(files = updated.len(), "Locale update finished");
    Ok(updated)
}
