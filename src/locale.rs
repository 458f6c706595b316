//! Locale file input and output

use std::path::{
    Path,
    PathBuf,
};

use serde_json::Value;

use crate::error::LocaleError;
use crate::tree::LocaleTree;

/// Path of the locale file for `language`: `<dir>/<language>.json`.
#[must_use]
pub fn locale_path(dir: &Path, language: &str) -> PathBuf {
    dir.join(format!("{language}.json"))
}

/// Read and parse a locale file.
///
/// # Errors
/// - the file cannot be read (missing files included)
/// - the content is not JSON, or its root is not an object
pub fn load_locale(path: &Path) -> Result<LocaleTree, LocaleError> {
    tracing::debug!("Loading locale file: {:?}", path);

    let content = std::fs::read_to_string(path).map_err(|e| LocaleError::io(path, e))?;
    let json: Value = serde_json::from_str(&content).map_err(|e| LocaleError::parse(path, e))?;

    match json {
        Value::Object(tree) => Ok(tree),
        _ => Err(LocaleError::NotAnObject { path: path.to_path_buf() }),
    }
}

/// Serialize a tree with two-space indentation. Non-ASCII text is written as
/// is, not escaped.
pub fn to_pretty_json(tree: &LocaleTree) -> Result<String, LocaleError> {
    serde_json::to_string_pretty(tree).map_err(LocaleError::Serialize)
}

/// Overwrite `path` with the serialized tree.
pub fn save_locale(path: &Path, tree: &LocaleTree) -> Result<(), LocaleError> {
    let content = to_pretty_json(tree)?;
    std::fs::write(path, content).map_err(|e| LocaleError::io(path, e))?;

    tracing::debug!("Wrote locale file: {:?}", path);
    Ok(())
}
