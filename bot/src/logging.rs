//! ロギング初期化ユーティリティ
//!
//! タイムスタンプ・レベル付きの可読ログを標準出力へ流す。
//! フィルタは `RUST_LOG` で上書き可能（デフォルト: info）。

use traffic_bot_common::error::BotError;
use tracing_subscriber::EnvFilter;

/// グローバルなtracingサブスクライバを初期化する
///
/// 二重初期化は `Config` エラーとして返す（テストから複数回呼ばれ得る）。
pub fn init() -> Result<(), BotError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| BotError::Config(format!("failed to set tracing subscriber: {e}")))
}
