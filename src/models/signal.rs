use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::indicators::IndicatorSnapshot;
use crate::models::regime::{MarketRegime, VixCondition};

/// Discrete label emitted by an analyzer.
///
/// Labels are not mutually exclusive across analyzers; the same indicator can
/// produce differently named tags from different analyzers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SignalTag {
    // Composite analyzer
    RsiOversold,
    RsiOverbought,
    RsiNeutral,
    EmaBearish,
    EmaBullish,
    SmaBearish,
    SmaBullish,
    MacdBullish,
    MacdBearish,
    MacdNeutral,
    VixCalm,
    VixHigh,
    BollingerWithin,
    BollingerOverbought,
    BollingerOversold,
    CciSell,
    CciBuy,
    SupertrendBullish,
    SupertrendBearish,
    VolumeWeak,
    VolumeStrong,
    AroonUptrend,
    AroonDowntrend,
    ParabolicBearish,
    ParabolicBullish,
    MfiOversold,
    MfiOverbought,
    PriceRanging,
    PriceTrending,
    // Volume-pattern analyzer
    VolumeSpike,
    VolumeStrengthWeak,
    VolumeStrengthStrong,
    // Trend analyzer
    StrongTrend,
    WeakTrend,
    StochasticOversold,
    StochasticOverbought,
    HighVolatility,
    LowVolatility,
    // Price-position analyzer
    NearBbUpper,
    NearBbLower,
    AboveEma,
    BelowEma,
    AboveSma,
    BelowSma,
    // Oscillator analyzer
    CciOversold,
    CciOverbought,
}

impl SignalTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RsiOversold => "RSI_OVERSOLD",
            Self::RsiOverbought => "RSI_OVERBOUGHT",
            Self::RsiNeutral => "RSI_NEUTRAL",
            Self::EmaBearish => "EMA_BEARISH",
            Self::EmaBullish => "EMA_BULLISH",
            Self::SmaBearish => "SMA_BEARISH",
            Self::SmaBullish => "SMA_BULLISH",
            Self::MacdBullish => "MACD_BULLISH",
            Self::MacdBearish => "MACD_BEARISH",
            Self::MacdNeutral => "MACD_NEUTRAL",
            Self::VixCalm => "VIX_CALM",
            Self::VixHigh => "VIX_HIGH",
            Self::BollingerWithin => "BOLLINGER_WITHIN",
            Self::BollingerOverbought => "BOLLINGER_OVERBOUGHT",
            Self::BollingerOversold => "BOLLINGER_OVERSOLD",
            Self::CciSell => "CCI_SELL",
            Self::CciBuy => "CCI_BUY",
            Self::SupertrendBullish => "SUPERTREND_BULLISH",
            Self::SupertrendBearish => "SUPERTREND_BEARISH",
            Self::VolumeWeak => "VOLUME_WEAK",
            Self::VolumeStrong => "VOLUME_STRONG",
            Self::AroonUptrend => "AROON_UPTREND",
            Self::AroonDowntrend => "AROON_DOWNTREND",
            Self::ParabolicBearish => "PARABOLIC_BEARISH",
            Self::ParabolicBullish => "PARABOLIC_BULLISH",
            Self::MfiOversold => "MFI_OVERSOLD",
            Self::MfiOverbought => "MFI_OVERBOUGHT",
            Self::PriceRanging => "PRICE_RANGING",
            Self::PriceTrending => "PRICE_TRENDING",
            Self::VolumeSpike => "VOLUME_SPIKE",
            Self::VolumeStrengthWeak => "VOLUME_STRENGTH_WEAK",
            Self::VolumeStrengthStrong => "VOLUME_STRENGTH_STRONG",
            Self::StrongTrend => "STRONG_TREND",
            Self::WeakTrend => "WEAK_TREND",
            Self::StochasticOversold => "STOCHASTIC_OVERSOLD",
            Self::StochasticOverbought => "STOCHASTIC_OVERBOUGHT",
            Self::HighVolatility => "HIGH_VOLATILITY",
            Self::LowVolatility => "LOW_VOLATILITY",
            Self::NearBbUpper => "NEAR_BB_UPPER",
            Self::NearBbLower => "NEAR_BB_LOWER",
            Self::AboveEma => "ABOVE_EMA",
            Self::BelowEma => "BELOW_EMA",
            Self::AboveSma => "ABOVE_SMA",
            Self::BelowSma => "BELOW_SMA",
            Self::CciOversold => "CCI_OVERSOLD",
            Self::CciOverbought => "CCI_OVERBOUGHT",
        }
    }
}

impl fmt::Display for SignalTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Option-side trade decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TradeSignal {
    /// Bullish: buy a call.
    #[serde(rename = "BUY_CE")]
    BuyCe,
    /// Bearish: buy a put.
    #[serde(rename = "BUY_PE")]
    BuyPe,
    #[serde(rename = "HOLD")]
    Hold,
}

impl TradeSignal {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BuyCe => "BUY_CE",
            Self::BuyPe => "BUY_PE",
            Self::Hold => "HOLD",
        }
    }
}

impl fmt::Display for TradeSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    pub signal: TradeSignal,
    pub confidence: f64,
}

impl Decision {
    pub fn new(signal: TradeSignal, confidence: f64) -> Self {
        Self { signal, confidence }
    }

    pub fn hold() -> Self {
        Self::new(TradeSignal::Hold, 0.0)
    }
}

/// One evaluated snapshot as kept in the history buffer. Never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionRecord {
    pub timestamp: DateTime<Utc>,
    pub signal: TradeSignal,
    pub confidence: f64,
    pub tags: Vec<SignalTag>,
    pub strength: f64,
    pub snapshot: IndicatorSnapshot,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub detected_signals: Vec<SignalTag>,
    pub total_strength: f64,
    pub vix_condition: VixCondition,
    pub market_regime: MarketRegime,
    pub ltp: f64,
    pub signal_count: usize,
}

/// Successful evaluation result handed to the transport layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalReport {
    pub signal: TradeSignal,
    pub confidence: f64,
    pub analysis: Analysis,
    pub timestamp: DateTime<Utc>,
}

/// `HOLD` answer produced when a snapshot could not be evaluated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DegradedResponse {
    pub signal: TradeSignal,
    pub confidence: f64,
    pub error: String,
    pub timestamp: DateTime<Utc>,
}

impl DegradedResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            signal: TradeSignal::Hold,
            confidence: 0.0,
            error: error.into(),
            timestamp: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PredictionResponse {
    Report(SignalReport),
    Degraded(DegradedResponse),
}

impl PredictionResponse {
    pub fn signal(&self) -> TradeSignal {
        match self {
            Self::Report(report) => report.signal,
            Self::Degraded(degraded) => degraded.signal,
        }
    }

    pub fn confidence(&self) -> f64 {
        match self {
            Self::Report(report) => report.confidence,
            Self::Degraded(degraded) => degraded.confidence,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Report(_) => None,
            Self::Degraded(degraded) => Some(&degraded.error),
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, Self::Degraded(_))
    }
}
