//! locale-tools
//!
//! ネストした JSON ロケールファイルの保守ツール
//! (基準言語に対する欠落キーの報告と、翻訳の一括追加)

pub mod config;
pub mod diff;
pub mod error;
pub mod locale;
pub mod logging;
pub mod merge;
pub mod tree;
pub mod vocab;

pub use error::LocaleError;
