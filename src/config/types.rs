use std::collections::HashSet;
use std::path::{
    Path,
    PathBuf,
};

use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

use super::CONFIG_FILE_NAME;

/// 設定値 1 件分の問題
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid setting '{field}': {message}")]
pub struct ValidationError {
    /// camelCase のフィールド名 (例: "languages[1]")
    pub field: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field: field.into(), message: message.into() }
    }
}

/// 設定ファイルの読み込み・検証エラー
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid {}:\n{}", CONFIG_FILE_NAME, list_problems(.0))]
    Invalid(Vec<ValidationError>),

    #[error("Failed to read {}: {}", CONFIG_FILE_NAME, .0)]
    Read(#[from] std::io::Error),

    #[error("Malformed {}: {}", CONFIG_FILE_NAME, .0)]
    Malformed(#[from] serde_json::Error),
}

/// 検証エラーを 1 行ずつの箇条書きにする
fn list_problems(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|err| format!("  - {}: {}", err.field, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ToolSettings {
    /// Directory holding `<lang>.json` files, relative to the working directory.
    pub locales_dir: PathBuf,

    /// Language whose key set is canonical. Also the fallback language when a
    /// translation entry has no value for the language being written.
    pub reference_language: String,

    /// Languages processed, in order. The differencer reports every language
    /// except the reference one.
    pub languages: Vec<String>,

    pub key_separator: String,
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            locales_dir: PathBuf::from("locales"),
            reference_language: "en".to_string(),
            languages: ["en", "zh", "vi", "mn"].iter().map(ToString::to_string).collect(),
            key_separator: ".".to_string(),
        }
    }
}

impl ToolSettings {
    /// Languages compared against the reference language, in configured order.
    pub fn target_languages(&self) -> impl Iterator<Item = &str> {
        self.languages
            .iter()
            .map(String::as_str)
            .filter(move |lang| *lang != self.reference_language)
    }

    /// Resolve `locales_dir` against `root` unless it is already absolute.
    #[must_use]
    pub fn resolve_locales_dir(&self, root: &Path) -> PathBuf {
        if self.locales_dir.is_absolute() {
            self.locales_dir.clone()
        } else {
            root.join(&self.locales_dir)
        }
    }

    /// # Errors
    /// - Empty separator or locales directory
    /// - No languages, blank or duplicated languages
    /// - Reference language missing from `languages`
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.key_separator.is_empty() {
            errors.push(ValidationError::new(
                "keySeparator",
                "The separator cannot be empty. Please specify a separator, for example: \".\" (dot)",
            ));
        }

        if self.locales_dir.as_os_str().is_empty() {
            errors.push(ValidationError::new(
                "localesDir",
                "The directory cannot be empty. Example: \"locales\"",
            ));
        }

        if self.languages.is_empty() {
            errors.push(ValidationError::new(
                "languages",
                "At least one language is required. Example: [\"en\", \"zh\"]",
            ));
        }

        let mut seen = HashSet::new();
        for (index, lang) in self.languages.iter().enumerate() {
            if lang.trim().is_empty() {
                errors.push(ValidationError::new(
                    format!("languages[{index}]"),
                    "The language code cannot be empty",
                ));
            } else if !seen.insert(lang.as_str()) {
                errors.push(ValidationError::new(
                    format!("languages[{index}]"),
                    format!("Duplicate language '{lang}'"),
                ));
            }
        }

        if self.reference_language.is_empty() {
            errors.push(ValidationError::new(
                "referenceLanguage",
                "The reference language cannot be empty. Example: \"en\"",
            ));
        } else if !self.languages.is_empty() && !seen.contains(self.reference_language.as_str()) {
            errors.push(ValidationError::new(
                "referenceLanguage",
                format!(
                    "Reference language '{}' must also be listed in 'languages'",
                    self.reference_language
                ),
            ));
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}
