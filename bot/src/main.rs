//! Traffic Bot Entry Point

use traffic_bot::actions::UserActions;
use traffic_bot::registry::EndpointRegistry;
use traffic_bot::shutdown::ShutdownSignal;
use traffic_bot::simulator::TrafficSimulator;
use traffic_bot::{config, logging};
use traffic_bot_common::types::Service;
use tracing::info;

#[tokio::main]
async fn main() {
    logging::init().expect("failed to initialize logging");

    info!("Traffic Bot v{}", env!("CARGO_PKG_VERSION"));

    // シミュレーター設定（不正な境界値は起動時に弾く）
    let simulator_config = match config::simulator_config_from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    // エンドポイントレジストリを初期化（以後不変）
    let registry = EndpointRegistry::from_env();
    info!(
        user_service = registry.base_url(Service::User),
        "Endpoint registry initialized"
    );

    let actions = match UserActions::new(registry.base_url(Service::User)) {
        Ok(actions) => actions,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let simulator = TrafficSimulator::new(actions, simulator_config);

    // Ctrl-Cで協調シャットダウン
    let shutdown = ShutdownSignal::new();
    let ctrl_c = shutdown.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Received Ctrl-C, shutting down");
            ctrl_c.trigger();
        }
    });

    info!("Starting traffic bot...");
    simulator.run(shutdown).await;
}
