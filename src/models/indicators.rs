//! Typed indicator snapshot.
//!
//! Every indicator family is a structured field with a documented default, so
//! the analyzers never deal with missing values. Status labels come from a
//! small fixed vocabulary per family; anything unrecognised maps to `Other`
//! and never matches a rule.
//!
//! The snapshot (de)serializes in the payload shape, through the same reader
//! used for incoming requests.

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::indicators::parser::{parse_payload, to_record};

pub const DEFAULT_RSI: f64 = 50.0;
pub const DEFAULT_VIX: f64 = 15.0;
pub const DEFAULT_MFI: f64 = 50.0;
pub const DEFAULT_ADX: f64 = 20.0;
pub const DEFAULT_STOCHASTIC: f64 = 50.0;
pub const DEFAULT_ATR: f64 = 20.0;
/// Half-width of the synthetic Bollinger channel used when bands are not supplied.
pub const DEFAULT_BAND_HALF_WIDTH: f64 = 50.0;

/// A status vocabulary: a default for absent labels and a catch-all for
/// anything that is present but not recognised.
pub trait StatusLabel: DeserializeOwned + Default {
    fn other() -> Self;
}

macro_rules! status_label {
    ($($ty:ty),* $(,)?) => {
        $(impl StatusLabel for $ty {
            fn other() -> Self {
                Self::Other
            }
        })*
    };
}

/// Directional label shared by RSI, EMA20, SMA50, MACD, SuperTrend and Parabolic SAR.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TrendStatus {
    Bullish,
    Bearish,
    #[default]
    Neutral,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum VixStatus {
    #[serde(rename = "Calm Market")]
    CalmMarket,
    #[default]
    Normal,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BandStatus {
    #[default]
    #[serde(rename = "Within Bands")]
    WithinBands,
    #[serde(rename = "Above Upper")]
    AboveUpper,
    #[serde(rename = "Below Lower")]
    BelowLower,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CciStatus {
    Buy,
    Sell,
    #[default]
    Neutral,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum VolumeStatus {
    Weak,
    Strong,
    #[default]
    Normal,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum VolumeType {
    #[serde(rename = "Weak Volume")]
    WeakVolume,
    #[default]
    Normal,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AroonStatus {
    Uptrend,
    Downtrend,
    #[default]
    Neutral,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MfiStatus {
    Oversold,
    Overbought,
    #[default]
    Neutral,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PriceActionType {
    Ranging,
    Trending,
    #[default]
    Normal,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RsiReading {
    pub value: f64,
    pub status: TrendStatus,
}

impl Default for RsiReading {
    fn default() -> Self {
        Self {
            value: DEFAULT_RSI,
            status: TrendStatus::Neutral,
        }
    }
}

/// EMA20 or SMA50. `value` defaults to the last traded price.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MovingAverageReading {
    pub value: f64,
    pub status: TrendStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MacdReading {
    pub histogram: f64,
    pub status: TrendStatus,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VixReading {
    pub value: f64,
    pub status: VixStatus,
}

impl Default for VixReading {
    fn default() -> Self {
        Self {
            value: DEFAULT_VIX,
            status: VixStatus::Normal,
        }
    }
}

/// Bollinger status plus channel. Bands default to `LTP ± 50`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BollingerReading {
    pub status: BandStatus,
    pub upper: f64,
    pub lower: f64,
}

impl BollingerReading {
    pub fn around(ltp: f64) -> Self {
        Self {
            status: BandStatus::WithinBands,
            upper: ltp + DEFAULT_BAND_HALF_WIDTH,
            lower: ltp - DEFAULT_BAND_HALF_WIDTH,
        }
    }

    /// Where `ltp` sits inside the channel: 0.0 at the lower band, 1.0 at the upper.
    /// A degenerate channel reports the midpoint.
    pub fn position_of(&self, ltp: f64) -> f64 {
        if self.upper == self.lower {
            0.5
        } else {
            (ltp - self.lower) / (self.upper - self.lower)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CciReading {
    pub value: f64,
    pub status: CciStatus,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MfiReading {
    pub value: f64,
    pub status: MfiStatus,
}

impl Default for MfiReading {
    fn default() -> Self {
        Self {
            value: DEFAULT_MFI,
            status: MfiStatus::Neutral,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct VolumeStrengthReading {
    pub kind: VolumeType,
    pub score: f64,
}

/// One validated indicator snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorSnapshot {
    pub ltp: f64,
    pub rsi: RsiReading,
    pub ema20: MovingAverageReading,
    pub sma50: MovingAverageReading,
    pub macd: MacdReading,
    pub vix: VixReading,
    pub bollinger: BollingerReading,
    pub cci: CciReading,
    pub supertrend: TrendStatus,
    pub volume: VolumeStatus,
    pub volume_strength: VolumeStrengthReading,
    pub volume_spike: bool,
    pub aroon: AroonStatus,
    pub parabolic_sar: TrendStatus,
    pub mfi: MfiReading,
    pub price_action: PriceActionType,
    pub adx: f64,
    pub stochastic: f64,
    pub atr: f64,
}

impl IndicatorSnapshot {
    /// All-default snapshot anchored at `ltp`.
    pub fn with_ltp(ltp: f64) -> Self {
        Self {
            ltp,
            rsi: RsiReading::default(),
            ema20: MovingAverageReading {
                value: ltp,
                status: TrendStatus::Neutral,
            },
            sma50: MovingAverageReading {
                value: ltp,
                status: TrendStatus::Neutral,
            },
            macd: MacdReading::default(),
            vix: VixReading::default(),
            bollinger: BollingerReading::around(ltp),
            cci: CciReading::default(),
            supertrend: TrendStatus::Neutral,
            volume: VolumeStatus::Normal,
            volume_strength: VolumeStrengthReading::default(),
            volume_spike: false,
            aroon: AroonStatus::Neutral,
            parabolic_sar: TrendStatus::Neutral,
            mfi: MfiReading::default(),
            price_action: PriceActionType::Normal,
            adx: DEFAULT_ADX,
            stochastic: DEFAULT_STOCHASTIC,
            atr: DEFAULT_ATR,
        }
    }
}

impl Default for IndicatorSnapshot {
    fn default() -> Self {
        Self::with_ltp(0.0)
    }
}

status_label!(
    TrendStatus,
    VixStatus,
    BandStatus,
    CciStatus,
    VolumeStatus,
    VolumeType,
    AroonStatus,
    MfiStatus,
    PriceActionType,
);

impl Serialize for IndicatorSnapshot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        to_record(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for IndicatorSnapshot {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let payload = Value::deserialize(deserializer)?;
        parse_payload(&payload).map_err(D::Error::custom)
    }
}
