//! Missing-key reports
//!
//! Compares every target language against the reference language and lists
//! the leaf paths the target lacks. Nothing is written back.

use std::collections::BTreeSet;
use std::io::Write;
use std::path::Path;

use crate::config::ToolSettings;
use crate::error::LocaleError;
use crate::locale::{
    load_locale,
    locale_path,
};
use crate::tree::flatten_keys;

/// Missing keys of one language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingKeysReport {
    pub language: String,
    /// Sorted ascending.
    pub missing: Vec<String>,
}

/// Keys present in `reference_keys` but not in `target_keys`, sorted.
///
/// Keys that only the target has are never reported.
#[must_use]
pub fn missing_keys(
    target_keys: &BTreeSet<String>,
    reference_keys: &BTreeSet<String>,
) -> Vec<String> {
    reference_keys.difference(target_keys).cloned().collect()
}

/// Write one report: a header with the count, then one key per line.
pub fn report_missing(
    out: &mut impl Write,
    name: &str,
    missing: &[String],
) -> std::io::Result<()> {
    writeln!(out, "--- Missing keys in {name} ({}) ---", missing.len())?;
    for key in missing {
        writeln!(out, "{key}")?;
    }
    Ok(())
}

/// Build the missing-key report of every target language.
///
/// Every configured locale file must exist; a missing or malformed file aborts
/// the whole comparison.
pub fn collect_reports(
    settings: &ToolSettings,
    root: &Path,
) -> Result<Vec<MissingKeysReport>, LocaleError> {
    let dir = settings.resolve_locales_dir(root);
    let separator = settings.key_separator.as_str();

    let reference = load_locale(&locale_path(&dir, &settings.reference_language))?;
    let reference_keys = flatten_keys(&reference, separator);
    tracing::debug!(
        language = %settings.reference_language,
        keys = reference_keys.len(),
        "Loaded reference locale"
    );

    let targets = settings
        .target_languages()
        .map(|language| {
            let tree = load_locale(&locale_path(&dir, language))?;
            Ok((language, flatten_keys(&tree, separator)))
        })
        .collect::<Result<Vec<_>, LocaleError>>()?;

    Ok(targets
        .into_iter()
        .map(|(language, keys)| MissingKeysReport {
            language: language.to_string(),
            missing: missing_keys(&keys, &reference_keys),
        })
        .collect())
}

/// Load all locales and write the missing-key report of each target language
/// to `out`, in configured order.
pub fn compare_locales(
    settings: &ToolSettings,
    root: &Path,
    out: &mut impl Write,
) -> Result<Vec<MissingKeysReport>, LocaleError> {
    let reports = collect_reports(settings, root)?;

    for report in &reports {
        report_missing(out, &report.language, &report.missing)
            .map_err(LocaleError::Output)?;
    }

    let total: usize = reports.iter().map(|r| r.missing.len()).sum();
    tracing::info!(languages = reports.len(), missing = total, "Comparison finished");

    Ok(reports)
}
