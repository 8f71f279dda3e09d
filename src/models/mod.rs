//! Shared data models spanning the engine layers.

pub mod indicators;
pub mod regime;
pub mod signal;
pub mod stats;

pub use indicators::{
    AroonStatus, BandStatus, BollingerReading, CciReading, CciStatus, IndicatorSnapshot,
    MacdReading, MfiReading, MfiStatus, MovingAverageReading, PriceActionType, RsiReading,
    TrendStatus, VixReading, VixStatus, VolumeStatus, VolumeStrengthReading, VolumeType,
};
pub use regime::{MarketRegime, VixCondition};
pub use signal::{
    Analysis, Decision, DecisionRecord, DegradedResponse, PredictionResponse, SignalReport,
    SignalTag, TradeSignal,
};
pub use stats::{HealthSnapshot, StatsSnapshot};
