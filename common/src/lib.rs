//! Traffic Bot 共通ライブラリ
//!
//! マイクロサービス群に対して合成トラフィックを流すボットの共通型定義

#![warn(missing_docs)]

/// 設定構造体
pub mod config;

/// エラー型定義
pub mod error;

/// 通信メッセージ定義
pub mod protocol;

/// 共通型定義
pub mod types;
