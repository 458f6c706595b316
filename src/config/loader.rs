//! 設定ファイルの読み込み

use std::path::Path;

use super::{
    ConfigError,
    ToolSettings,
};

/// 作業ディレクトリで探す設定ファイル名（任意）
pub const CONFIG_FILE_NAME: &str = ".locale-tools.json";

/// `root` から `.locale-tools.json` を読み込む
///
/// # Arguments
/// * `root` - 設定ファイルを探すディレクトリ
///
/// # Returns
/// - `Ok(Some(settings))`: 設定ファイルが見つかり、読み込みに成功
/// - `Ok(None)`: 設定ファイルが見つからない
/// - `Err(ConfigError)`: ファイル読み込みまたはパースエラー
pub(super) fn load_from_dir(root: &Path) -> Result<Option<ToolSettings>, ConfigError> {
    let config_path = root.join(CONFIG_FILE_NAME);

    if !config_path.exists() {
        tracing::debug!("Configuration file not found: {:?}", config_path);
        return Ok(None);
    }

    tracing::debug!("Loading configuration from: {:?}", config_path);

    let content = std::fs::read_to_string(&config_path)?;
    let settings: ToolSettings = serde_json::from_str(&content)?;

    Ok(Some(settings))
}

/// 設定を読み込んで検証する
///
/// 設定ファイルが無ければデフォルト値を使う。
///
/// # Errors
/// - ファイル読み込みエラー
/// - JSON パースエラー
/// - バリデーションエラー
pub fn load_settings(root: &Path) -> Result<ToolSettings, ConfigError> {
    let settings = load_from_dir(root)?.unwrap_or_default();

    settings.validate().map_err(ConfigError::Invalid)?;
    tracing::debug!("Settings loaded: {:?}", settings);

    Ok(settings)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use std::fs;

    use googletest::prelude::*;
    use rstest::rstest;
    use tempfile::TempDir;

    use super::*;

    #[rstest]
    fn load_from_dir_with_valid_config() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILE_NAME), r#"{"keySeparator": "/"}"#).unwrap();

        let settings = load_from_dir(temp_dir.path()).unwrap();

        assert_that!(settings, some(field!(ToolSettings.key_separator, eq("/"))));
    }

    #[rstest]
    fn load_from_dir_without_config() {
        let temp_dir = TempDir::new().unwrap();

        let settings = load_from_dir(temp_dir.path()).unwrap();

        assert!(settings.is_none());
    }

    #[rstest]
    fn load_from_dir_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILE_NAME), "invalid json").unwrap();

        let result = load_from_dir(temp_dir.path());

        assert!(matches!(result, Err(ConfigError::Malformed(_))));
    }

    #[rstest]
    fn load_settings_defaults_without_config() {
        let temp_dir = TempDir::new().unwrap();

        let settings = load_settings(temp_dir.path()).unwrap();

        assert_eq!(settings, ToolSettings::default());
    }

    #[rstest]
    fn load_settings_rejects_invalid_config() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILE_NAME), r#"{"languages": []}"#).unwrap();

        let result = load_settings(temp_dir.path());

        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }
}
