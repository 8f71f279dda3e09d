//! Process and engine configuration.
//!
//! Every threshold the decision path uses lives in [`EngineConfig`]. The
//! volatility gate, the descriptive VIX bands and the market-regime bounds are
//! separate values on purpose and are tuned independently.

use serde::{Deserialize, Serialize};
use std::env;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_HISTORY_CAPACITY: usize = 1000;
pub const DEFAULT_RECENT_SIGNALS: usize = 10;

/// Deployment environment name (`production`, `sandbox`, ...).
pub fn get_environment() -> String {
    env::var("APP_ENV")
        .or_else(|_| env::var("ENVIRONMENT"))
        .unwrap_or_else(|_| "sandbox".to_string())
}

/// Descriptive VIX condition boundaries used in reports only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VixBands {
    pub extreme: f64,
    pub high: f64,
    pub low: f64,
}

impl Default for VixBands {
    fn default() -> Self {
        Self {
            extreme: 25.0,
            high: 18.0,
            low: 12.0,
        }
    }
}

/// Market regime boundaries used in reports only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegimeThresholds {
    pub high_volatility_vix: f64,
    pub low_volatility_vix: f64,
    /// SuperTrend bullish only counts as a trend while RSI stays below this.
    pub bullish_rsi_ceiling: f64,
    /// SuperTrend bearish only counts as a trend while RSI stays above this.
    pub bearish_rsi_floor: f64,
}

impl Default for RegimeThresholds {
    fn default() -> Self {
        Self {
            high_volatility_vix: 20.0,
            low_volatility_vix: 12.0,
            bullish_rsi_ceiling: 70.0,
            bearish_rsi_floor: 30.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Above this VIX the engine refuses to trade and answers `HOLD`.
    pub volatility_gate_vix: f64,
    pub vix_bands: VixBands,
    pub regime: RegimeThresholds,
    pub history_capacity: usize,
    pub recent_signals_limit: usize,
    pub max_confidence: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            volatility_gate_vix: 18.0,
            vix_bands: VixBands::default(),
            regime: RegimeThresholds::default(),
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            recent_signals_limit: DEFAULT_RECENT_SIGNALS,
            max_confidence: 0.95,
        }
    }
}

impl EngineConfig {
    /// Defaults overridden by `VOLATILITY_GATE_VIX` and `HISTORY_CAPACITY`.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            volatility_gate_vix: parse_env("VOLATILITY_GATE_VIX")
                .unwrap_or(defaults.volatility_gate_vix),
            history_capacity: parse_env::<usize>("HISTORY_CAPACITY")
                .filter(|capacity| *capacity > 0)
                .unwrap_or(defaults.history_capacity),
            ..defaults
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub environment: String,
    pub engine: EngineConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            environment: "sandbox".to_string(),
            engine: EngineConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// Unset or unparsable variables fall back to defaults.
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port: parse_env("PORT").unwrap_or(DEFAULT_PORT),
            environment: get_environment(),
            engine: EngineConfig::from_env(),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_env<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|value| value.trim().parse().ok())
}
