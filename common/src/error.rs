//! エラー型定義
//!
//! 統一エラー型（thiserror使用）
//!
//! アクション境界で握りつぶされる失敗（HTTPステータス異常・トランスポート
//! エラー）はこの型に乗らず、`Option::None` として返る。`BotError` は
//! 起動時の設定エラーとループ境界のイテレーションガードでのみ使う。

use thiserror::Error;

/// Traffic Botエラー型
#[derive(Debug, Error)]
pub enum BotError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// HTTP client error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
