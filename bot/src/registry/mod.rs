//! エンドポイントレジストリ
//!
//! 論理サービス名からベースURLへの不変マッピング。
//! 起動時に一度だけ構築し、プロセス存続中は変更しない。

use std::collections::HashMap;

use traffic_bot_common::types::Service;

use crate::config::get_env_with_fallback;

/// エンドポイントレジストリ
///
/// 全サービス分のエントリを起動時に確定する。`Service` が閉じた列挙型
/// のため、未登録サービスの参照は表現できない。
#[derive(Debug, Clone)]
pub struct EndpointRegistry {
    endpoints: HashMap<Service, String>,
}

impl EndpointRegistry {
    /// 環境変数からレジストリを構築する
    ///
    /// サービスごとに `TRAFFIC_BOT_<SERVICE>_URL`（旧: `<SERVICE>_SERVICE_URL`）
    /// で上書きでき、未設定ならデフォルトURLを使う。
    pub fn from_env() -> Self {
        Self::build(|service| get_env_with_fallback(service.env_var(), service.legacy_env_var()))
    }

    /// 上書き解決関数を指定してレジストリを構築する
    ///
    /// 末尾のスラッシュはパス結合時の二重スラッシュを避けるため落とす。
    pub fn build(overrides: impl Fn(Service) -> Option<String>) -> Self {
        let endpoints = Service::ALL
            .into_iter()
            .map(|service| {
                let url = overrides(service)
                    .map(|url| url.trim_end_matches('/').to_string())
                    .unwrap_or_else(|| service.default_base_url().to_string());
                (service, url)
            })
            .collect();
        Self { endpoints }
    }

    /// サービスのベースURLを返す
    pub fn base_url(&self, service: Service) -> &str {
        self.endpoints
            .get(&service)
            .map(String::as_str)
            .unwrap_or_else(|| service.default_base_url())
    }
}
