//! 通信メッセージ定義
//!
//! Bot→ユーザーサービス間のリクエストペイロード

use serde::{Deserialize, Serialize};

/// ユーザー作成リクエスト
///
/// 毎回Fake Data Providerで新規生成し、送信後は破棄する。
/// 永続化はダウンストリーム側の責務。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserCreateRequest {
    /// ユーザー名
    pub username: String,
    /// メールアドレス
    pub email: String,
}
