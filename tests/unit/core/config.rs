//! Unit tests for configuration defaults

use optrix::config::{Config, EngineConfig, DEFAULT_HISTORY_CAPACITY, DEFAULT_PORT};

#[test]
fn test_engine_defaults() {
    let config = EngineConfig::default();
    assert_eq!(config.volatility_gate_vix, 18.0);
    assert_eq!(config.vix_bands.extreme, 25.0);
    assert_eq!(config.vix_bands.high, 18.0);
    assert_eq!(config.vix_bands.low, 12.0);
    assert_eq!(config.regime.high_volatility_vix, 20.0);
    assert_eq!(config.regime.low_volatility_vix, 12.0);
    assert_eq!(config.history_capacity, DEFAULT_HISTORY_CAPACITY);
    assert_eq!(config.recent_signals_limit, 10);
    assert_eq!(config.max_confidence, 0.95);
}

#[test]
fn test_bind_address() {
    let config = Config::default();
    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.bind_address(), "0.0.0.0:5000");

    let config = Config {
        host: "127.0.0.1".to_string(),
        port: 8080,
        ..Config::default()
    };
    assert_eq!(config.bind_address(), "127.0.0.1:8080");
}

#[test]
fn test_engine_config_round_trips_through_json() {
    let config = EngineConfig::default();
    let value = serde_json::to_value(&config).unwrap();
    assert_eq!(value["volatility_gate_vix"], 18.0);
    let parsed: EngineConfig = serde_json::from_value(value).unwrap();
    assert_eq!(parsed, config);
}
