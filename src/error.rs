//! Errors raised while reading, editing and writing locale files

use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigError;

/// Every failure the locale tools can run into.
///
/// All of them are fatal for the current run: nothing is retried and files
/// written before the failure are left as they are.
#[derive(Error, Debug)]
pub enum LocaleError {
    /// The locale file could not be read or written
    #[error("Failed to access locale file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The locale file is not valid JSON
    #[error("Failed to parse locale file '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The locale file parsed, but its root is not an object
    #[error("Locale file '{}' must contain a JSON object at the top level", path.display())]
    NotAnObject { path: PathBuf },

    /// `deep_set` was called without any key segment
    #[error("Key path must have at least one segment")]
    EmptyKeyPath,

    /// An intermediate segment of a key path already holds a leaf value
    #[error("Cannot set {segments:?}: '{segment}' already holds a value that is not an object")]
    PathConflict { segments: Vec<String>, segment: String },

    /// A translation entry has neither the requested nor the fallback language
    #[error("Translation entry '{key}' has no value for '{language}' and no fallback value")]
    MissingFallback { key: String, language: String },

    /// A report or progress line could not be written
    #[error("Failed to write output: {0}")]
    Output(#[source] std::io::Error),

    /// The tree could not be serialized back to JSON
    #[error("Failed to serialize locale tree: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl LocaleError {
    /// 読み書きに失敗したファイルのパスを添えて包む
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }

    /// JSON として読めなかったファイルのパスを添えて包む
    pub(crate) fn parse(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Parse { path: path.into(), source }
    }
}
