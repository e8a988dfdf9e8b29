//! Traffic Bot
//!
//! マイクロサービス群へ合成トラフィックを流し続けるバックグラウンドボット

#![warn(missing_docs)]

/// ユーザーアクション（HTTP経由の作成・取得）
pub mod actions;

/// 設定管理（環境変数ヘルパー）
pub mod config;

/// 合成データ生成
pub mod fakegen;

/// ロギング初期化ユーティリティ
pub mod logging;

/// エンドポイントレジストリ
pub mod registry;

/// 協調シャットダウン
pub mod shutdown;

/// トラフィックシミュレーションループ
pub mod simulator;
