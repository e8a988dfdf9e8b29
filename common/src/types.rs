//! 共通型定義
//!
//! Service, UserRecord等のコアデータ型

use serde::{Deserialize, Serialize};

/// 論理サービス名
///
/// トラフィック送信先となるマイクロサービスの固定セット。
/// 閉じた列挙型のため、未登録サービスの問い合わせは型レベルで起こらない。
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Service {
    /// ユーザーサービス
    User,
    /// 商品サービス
    Product,
    /// 注文サービス
    Order,
    /// 決済サービス
    Payment,
    /// 通知サービス
    Notification,
}

impl Service {
    /// 全サービスの一覧（レジストリ構築用）
    pub const ALL: [Service; 5] = [
        Service::User,
        Service::Product,
        Service::Order,
        Service::Payment,
        Service::Notification,
    ];

    /// 論理サービス名
    pub fn as_str(&self) -> &'static str {
        match self {
            Service::User => "user",
            Service::Product => "product",
            Service::Order => "order",
            Service::Payment => "payment",
            Service::Notification => "notification",
        }
    }

    /// デフォルトのベースURL（docker-compose内のサービス名解決を前提）
    pub fn default_base_url(&self) -> &'static str {
        match self {
            Service::User => "http://user:3001",
            Service::Product => "http://product:3002",
            Service::Order => "http://order:3003",
            Service::Payment => "http://payment:3004",
            Service::Notification => "http://notification:3005",
        }
    }

    /// ベースURL上書き用の環境変数名
    pub fn env_var(&self) -> &'static str {
        match self {
            Service::User => "TRAFFIC_BOT_USER_URL",
            Service::Product => "TRAFFIC_BOT_PRODUCT_URL",
            Service::Order => "TRAFFIC_BOT_ORDER_URL",
            Service::Payment => "TRAFFIC_BOT_PAYMENT_URL",
            Service::Notification => "TRAFFIC_BOT_NOTIFICATION_URL",
        }
    }

    /// 旧環境変数名（非推奨、後方互換のため残置）
    pub fn legacy_env_var(&self) -> &'static str {
        match self {
            Service::User => "USER_SERVICE_URL",
            Service::Product => "PRODUCT_SERVICE_URL",
            Service::Order => "ORDER_SERVICE_URL",
            Service::Payment => "PAYMENT_SERVICE_URL",
            Service::Notification => "NOTIFICATION_SERVICE_URL",
        }
    }
}

impl std::fmt::Display for Service {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// ユーザーサービスが返すユーザーレコード
///
/// レコード本体はダウンストリームのユーザーサービスが所有する。
/// ボットは `id` だけを参照し、それ以外のフィールドは読み流す。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserRecord {
    /// 一意識別子（UUID等、サーバー採番）
    pub id: String,
    /// ユーザー名（サーバーが返す場合のみ）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// メールアドレス（サーバーが返す場合のみ）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// その他のフィールド（role, status等）は型を固定せず保持する
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
