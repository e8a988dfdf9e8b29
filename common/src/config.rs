//! 設定管理
//!
//! SimulatorConfig等の設定構造体

use serde::{Deserialize, Serialize};

/// トラフィックシミュレーター設定
///
/// 各スリープ区間の上下限（秒）とエラー演出の確率。
/// デフォルト値は元のトラフィックボットの挙動に一致する。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SimulatorConfig {
    /// イテレーション冒頭のスリープ下限（秒）(デフォルト: 1.0)
    #[serde(default = "default_idle_min")]
    pub idle_min_secs: f64,

    /// イテレーション冒頭のスリープ上限（秒）(デフォルト: 5.0)
    #[serde(default = "default_idle_max")]
    pub idle_max_secs: f64,

    /// 作成→取得の間のスリープ下限（秒）(デフォルト: 0.5)
    #[serde(default = "default_followup_min")]
    pub followup_min_secs: f64,

    /// 作成→取得の間のスリープ上限（秒）(デフォルト: 2.0)
    #[serde(default = "default_followup_max")]
    pub followup_max_secs: f64,

    /// ネットワークエラー演出の発生確率 (デフォルト: 0.1)
    #[serde(default = "default_error_probability")]
    pub error_probability: f64,

    /// ネットワークエラー演出時のスリープ下限（秒）(デフォルト: 2.0)
    #[serde(default = "default_error_pause_min")]
    pub error_pause_min_secs: f64,

    /// ネットワークエラー演出時のスリープ上限（秒）(デフォルト: 5.0)
    #[serde(default = "default_error_pause_max")]
    pub error_pause_max_secs: f64,

    /// イテレーション失敗時の待機（秒）(デフォルト: 5.0)
    #[serde(default = "default_failure_pause")]
    pub failure_pause_secs: f64,
}

fn default_idle_min() -> f64 {
    1.0
}

fn default_idle_max() -> f64 {
    5.0
}

fn default_followup_min() -> f64 {
    0.5
}

fn default_followup_max() -> f64 {
    2.0
}

fn default_error_probability() -> f64 {
    0.1
}

fn default_error_pause_min() -> f64 {
    2.0
}

fn default_error_pause_max() -> f64 {
    5.0
}

fn default_failure_pause() -> f64 {
    5.0
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            idle_min_secs: default_idle_min(),
            idle_max_secs: default_idle_max(),
            followup_min_secs: default_followup_min(),
            followup_max_secs: default_followup_max(),
            error_probability: default_error_probability(),
            error_pause_min_secs: default_error_pause_min(),
            error_pause_max_secs: default_error_pause_max(),
            failure_pause_secs: default_failure_pause(),
        }
    }
}
