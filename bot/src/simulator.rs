//! トラフィックシミュレーションループ
//!
//! 単一タスクの逐次ループ。毎イテレーションでランダムなスリープを挟み、
//! 「作成してから取得」か「存在しないIDの取得」をランダムに実行する。
//! 低確率でネットワークエラー演出（ログと追加スリープのみ、リクエストは
//! 一切変化させない）を行う。シャットダウンシグナルが立つまで回り続ける。

use std::time::Duration;

use rand::Rng;
use tracing::{error, info, warn};

use traffic_bot_common::config::SimulatorConfig;
use traffic_bot_common::error::BotError;

use crate::actions::UserActions;
use crate::fakegen;
use crate::shutdown::ShutdownSignal;

/// 1イテレーションで実行するアクションの種別
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TrafficAction {
    /// ユーザーを作成し、成功したら少し待ってから取得する
    CreateThenFetch,
    /// 存在しないIDでユーザーを取得する（基本的にミスする想定）
    FetchNonexistent,
}

/// トラフィックシミュレーター
///
/// 同時に飛ぶリクエストは常に1本。イテレーションをまたいで共有する
/// 可変状態は持たない。
#[derive(Debug, Clone)]
pub struct TrafficSimulator {
    actions: UserActions,
    config: SimulatorConfig,
}

impl TrafficSimulator {
    /// 新しいシミュレーターを作成する
    pub fn new(actions: UserActions, config: SimulatorConfig) -> Self {
        Self { actions, config }
    }

    /// シミュレーションループを実行する
    ///
    /// シグナルが立つまで終了しない。アクション境界を越えて漏れた失敗は
    /// ここで捕捉し、ログに残して一定時間待機してから続行する。
    pub async fn run(&self, shutdown: ShutdownSignal) {
        info!("Starting traffic simulation loop");

        while !shutdown.is_triggered() {
            if let Err(e) = self.run_iteration(&shutdown).await {
                error!(error = %e, "Error in traffic simulation");
                let pause = Duration::from_secs_f64(self.config.failure_pause_secs);
                self.sleep_or_shutdown(pause, &shutdown).await;
            }
        }

        info!("Traffic simulation loop stopped");
    }

    /// 1イテレーションを実行する
    ///
    /// アクション内で握りつぶされる失敗はここには届かない。届いた失敗は
    /// `run` 側のガードが処理する。
    async fn run_iteration(&self, shutdown: &ShutdownSignal) -> Result<(), BotError> {
        let idle = self.jitter(self.config.idle_min_secs, self.config.idle_max_secs);
        self.sleep_or_shutdown(idle, shutdown).await;
        if shutdown.is_triggered() {
            return Ok(());
        }

        match self.pick_action() {
            TrafficAction::CreateThenFetch => {
                if let Some(user) = self.actions.create_user().await {
                    let followup =
                        self.jitter(self.config.followup_min_secs, self.config.followup_max_secs);
                    self.sleep_or_shutdown(followup, shutdown).await;
                    if shutdown.is_triggered() {
                        return Ok(());
                    }
                    self.actions.get_user(&user.id).await;
                }
            }
            TrafficAction::FetchNonexistent => {
                let fake_id = fakegen::user_id();
                self.actions.get_user(&fake_id).await;
            }
        }

        if self.roll_simulated_error() {
            warn!("Simulating network error");
            let pause = self.jitter(
                self.config.error_pause_min_secs,
                self.config.error_pause_max_secs,
            );
            self.sleep_or_shutdown(pause, shutdown).await;
        }

        Ok(())
    }

    /// [min, max] 秒から一様に選んだスリープ時間
    fn jitter(&self, min_secs: f64, max_secs: f64) -> Duration {
        let secs = rand::rng().random_range(min_secs..=max_secs);
        Duration::from_secs_f64(secs)
    }

    /// アクション種別を等確率で選ぶ
    fn pick_action(&self) -> TrafficAction {
        if rand::rng().random_bool(0.5) {
            TrafficAction::CreateThenFetch
        } else {
            TrafficAction::FetchNonexistent
        }
    }

    /// ネットワークエラー演出を発動するかどうか
    fn roll_simulated_error(&self) -> bool {
        rand::rng().random_bool(self.config.error_probability)
    }

    /// シャットダウンと競合させたスリープ
    async fn sleep_or_shutdown(&self, duration: Duration, shutdown: &ShutdownSignal) {
        tokio::select! {
            _ = shutdown.wait() => {}
            _ = tokio::time::sleep(duration) => {}
        }
    }
}
