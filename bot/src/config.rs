//! Configuration management via environment variables
//!
//! Provides helper functions for reading environment variables with fallback
//! to deprecated variable names with warning logs, plus the loader for
//! [`SimulatorConfig`].

use traffic_bot_common::config::SimulatorConfig;
use traffic_bot_common::error::BotError;

/// Get an environment variable with fallback to a deprecated name
///
/// If the new variable name is set, returns its value.
/// If only the old (deprecated) variable name is set, returns its value
/// and logs a deprecation warning.
pub fn get_env_with_fallback(new_name: &str, old_name: &str) -> Option<String> {
    if let Ok(val) = std::env::var(new_name) {
        return Some(val);
    }
    if let Ok(val) = std::env::var(old_name) {
        tracing::warn!(
            "Environment variable '{}' is deprecated, use '{}' instead",
            old_name,
            new_name
        );
        return Some(val);
    }
    None
}

/// Get an environment variable with fallback, parsing to a specific type
///
/// Returns the default if neither variable is set or parsing fails.
pub fn get_env_with_fallback_parse<T: std::str::FromStr>(
    new_name: &str,
    old_name: &str,
    default: T,
) -> T {
    get_env_with_fallback(new_name, old_name)
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

/// シミュレーター設定を環境変数から構築する
///
/// 未設定の項目は [`SimulatorConfig::default`] の値を使う。
/// 境界の大小関係と確率レンジを検証し、不正なら起動時エラーにする。
pub fn simulator_config_from_env() -> Result<SimulatorConfig, BotError> {
    let defaults = SimulatorConfig::default();
    let config = SimulatorConfig {
        idle_min_secs: get_env_with_fallback_parse(
            "TRAFFIC_BOT_IDLE_MIN_SECS",
            "IDLE_MIN_SECS",
            defaults.idle_min_secs,
        ),
        idle_max_secs: get_env_with_fallback_parse(
            "TRAFFIC_BOT_IDLE_MAX_SECS",
            "IDLE_MAX_SECS",
            defaults.idle_max_secs,
        ),
        followup_min_secs: get_env_with_fallback_parse(
            "TRAFFIC_BOT_FOLLOWUP_MIN_SECS",
            "FOLLOWUP_MIN_SECS",
            defaults.followup_min_secs,
        ),
        followup_max_secs: get_env_with_fallback_parse(
            "TRAFFIC_BOT_FOLLOWUP_MAX_SECS",
            "FOLLOWUP_MAX_SECS",
            defaults.followup_max_secs,
        ),
        error_probability: get_env_with_fallback_parse(
            "TRAFFIC_BOT_ERROR_PROBABILITY",
            "ERROR_PROBABILITY",
            defaults.error_probability,
        ),
        error_pause_min_secs: get_env_with_fallback_parse(
            "TRAFFIC_BOT_ERROR_PAUSE_MIN_SECS",
            "ERROR_PAUSE_MIN_SECS",
            defaults.error_pause_min_secs,
        ),
        error_pause_max_secs: get_env_with_fallback_parse(
            "TRAFFIC_BOT_ERROR_PAUSE_MAX_SECS",
            "ERROR_PAUSE_MAX_SECS",
            defaults.error_pause_max_secs,
        ),
        failure_pause_secs: get_env_with_fallback_parse(
            "TRAFFIC_BOT_FAILURE_PAUSE_SECS",
            "FAILURE_PAUSE_SECS",
            defaults.failure_pause_secs,
        ),
    };
    validate(&config)?;
    Ok(config)
}

/// 設定値の整合性を検証する
pub fn validate(config: &SimulatorConfig) -> Result<(), BotError> {
    let ranges = [
        ("idle", config.idle_min_secs, config.idle_max_secs),
        ("followup", config.followup_min_secs, config.followup_max_secs),
        (
            "error_pause",
            config.error_pause_min_secs,
            config.error_pause_max_secs,
        ),
    ];
    for (name, min, max) in ranges {
        if !(0.0..=max).contains(&min) {
            return Err(BotError::Config(format!(
                "{name} bounds invalid: min={min} max={max}"
            )));
        }
    }
    if !(0.0..=1.0).contains(&config.error_probability) {
        return Err(BotError::Config(format!(
            "error_probability must be within [0, 1]: {}",
            config.error_probability
        )));
    }
    if config.failure_pause_secs < 0.0 {
        return Err(BotError::Config(format!(
            "failure_pause_secs must not be negative: {}",
            config.failure_pause_secs
        )));
    }
    Ok(())
}
