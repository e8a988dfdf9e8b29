//! ユーザーサービスへのHTTPアクション
//!
//! 作成（POST /api/users）と取得（GET /api/users/{id}）。
//! リトライなし。ステータス異常・トランスポートエラーはログに記録し、
//! 結果なし（`None`）に変換して返す。

use std::time::Duration;

use reqwest::{Client, StatusCode};
use tracing::{error, info, warn};

use traffic_bot_common::error::BotError;
use traffic_bot_common::types::UserRecord;

use crate::fakegen;

/// 1リクエストのタイムアウト（秒）
///
/// クライアント既定の無期限ブロックを避けるための上限であり、
/// リトライ等のポリシーは一切持たない。
const REQUEST_TIMEOUT_SECS: u64 = 10;

/// ユーザーサービスに対するアクション実行器
#[derive(Debug, Clone)]
pub struct UserActions {
    /// HTTPクライアント（接続プール共有）
    client: Client,
    /// ユーザーサービスのベースURL
    base_url: String,
}

impl UserActions {
    /// 新しいアクション実行器を作成する
    pub fn new(base_url: impl Into<String>) -> Result<Self, BotError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// ユーザーを作成する
    ///
    /// ペイロードはFake Data Providerで毎回生成する。HTTP 200のときだけ
    /// レスポンスボディをパースして返す。それ以外（ステータス異常・
    /// トランスポートエラー・パース失敗）はログに残して `None`。
    pub async fn create_user(&self) -> Option<UserRecord> {
        let payload = fakegen::user_create_request();
        let url = format!("{}/api/users", self.base_url);

        match self.client.post(&url).json(&payload).send().await {
            Ok(response) if response.status() == StatusCode::OK => {
                match response.json::<UserRecord>().await {
                    Ok(record) => {
                        info!(username = %payload.username, user_id = %record.id, "Created user");
                        Some(record)
                    }
                    Err(e) => {
                        error!(error = %e, "Failed to parse create user response");
                        None
                    }
                }
            }
            Ok(response) => {
                error!(status = response.status().as_u16(), "Failed to create user");
                None
            }
            Err(e) => {
                error!(error = %e, "Error creating user");
                None
            }
        }
    }

    /// ユーザーをIDで取得する
    ///
    /// HTTP 200でパース成功なら `Some`。ステータス異常は想定内のミス
    /// （存在しないID等）なのでWARN、トランスポートエラーはERROR。
    pub async fn get_user(&self, user_id: &str) -> Option<UserRecord> {
        let url = format!("{}/api/users/{}", self.base_url, user_id);

        match self.client.get(&url).send().await {
            Ok(response) if response.status() == StatusCode::OK => {
                match response.json::<UserRecord>().await {
                    Ok(record) => {
                        info!(user_id = %record.id, "Retrieved user");
                        Some(record)
                    }
                    Err(e) => {
                        error!(error = %e, "Failed to parse get user response");
                        None
                    }
                }
            }
            Ok(response) => {
                warn!(
                    status = response.status().as_u16(),
                    user_id, "Failed to get user"
                );
                None
            }
            Err(e) => {
                error!(error = %e, user_id, "Error getting user");
                None
            }
        }
    }
}
