//! Composite analyzer: one rule per indicator family.
//!
//! Each family follows the same shape: a strong reading at a fixed magnitude
//! (thresholds override the status label), and a weak reading scored with a
//! configurable pattern weight.

use crate::indicators::registry::{Analyzer, AnalyzerOutput};
use crate::models::indicators::*;
use crate::models::signal::SignalTag;
use crate::signals::weights::PatternWeights;

pub const RSI_OVERSOLD: f64 = 35.0;
pub const RSI_OVERBOUGHT: f64 = 65.0;
pub const VIX_CALM_BELOW: f64 = 15.0;
pub const VIX_HIGH_ABOVE: f64 = 20.0;
pub const CCI_BAND: f64 = 100.0;
pub const MFI_OVERSOLD: f64 = 20.0;
pub const MFI_OVERBOUGHT: f64 = 80.0;

pub struct CompositeAnalyzer;

impl Analyzer for CompositeAnalyzer {
    fn name(&self) -> &'static str {
        "composite"
    }

    fn analyze(&self, s: &IndicatorSnapshot, w: &PatternWeights) -> AnalyzerOutput {
        let mut out = AnalyzerOutput::new();

        if s.rsi.value < RSI_OVERSOLD {
            out.push(SignalTag::RsiOversold, 0.8);
        } else if s.rsi.value > RSI_OVERBOUGHT {
            out.push(SignalTag::RsiOverbought, -0.8);
        } else if s.rsi.status == TrendStatus::Neutral {
            out.push(SignalTag::RsiNeutral, w.rsi_neutral);
        }

        match s.ema20.status {
            TrendStatus::Bearish => out.push(SignalTag::EmaBearish, -w.ema_bearish),
            TrendStatus::Bullish => out.push(SignalTag::EmaBullish, w.ema_bearish),
            _ => {}
        }

        match s.sma50.status {
            TrendStatus::Bearish => out.push(SignalTag::SmaBearish, -w.sma_bearish),
            TrendStatus::Bullish => out.push(SignalTag::SmaBullish, w.sma_bearish),
            _ => {}
        }

        if s.macd.status == TrendStatus::Bullish || s.macd.histogram > 0.0 {
            out.push(SignalTag::MacdBullish, 0.7);
        } else if s.macd.status == TrendStatus::Bearish || s.macd.histogram < 0.0 {
            out.push(SignalTag::MacdBearish, -0.7);
        } else {
            out.push(SignalTag::MacdNeutral, w.macd_neutral);
        }

        if s.vix.status == VixStatus::CalmMarket || s.vix.value < VIX_CALM_BELOW {
            out.push(SignalTag::VixCalm, w.vix_calm);
        } else if s.vix.value > VIX_HIGH_ABOVE {
            out.push(SignalTag::VixHigh, -0.5);
        }

        match s.bollinger.status {
            BandStatus::WithinBands => out.push(SignalTag::BollingerWithin, w.bollinger_within),
            BandStatus::AboveUpper => out.push(SignalTag::BollingerOverbought, -0.6),
            BandStatus::BelowLower => out.push(SignalTag::BollingerOversold, 0.6),
            BandStatus::Other => {}
        }

        if s.cci.status == CciStatus::Sell || s.cci.value < -CCI_BAND {
            out.push(SignalTag::CciSell, -w.cci_sell);
        } else if s.cci.status == CciStatus::Buy || s.cci.value > CCI_BAND {
            out.push(SignalTag::CciBuy, w.cci_sell);
        }

        match s.supertrend {
            TrendStatus::Bullish => out.push(SignalTag::SupertrendBullish, w.supertrend_bullish),
            TrendStatus::Bearish => out.push(SignalTag::SupertrendBearish, -w.supertrend_bullish),
            _ => {}
        }

        if s.volume == VolumeStatus::Weak || s.volume_strength.kind == VolumeType::WeakVolume {
            out.push(SignalTag::VolumeWeak, w.volume_weak);
        } else if s.volume == VolumeStatus::Strong {
            out.push(SignalTag::VolumeStrong, 0.5);
        }

        match s.aroon {
            AroonStatus::Uptrend => out.push(SignalTag::AroonUptrend, w.aroon_uptrend),
            AroonStatus::Downtrend => out.push(SignalTag::AroonDowntrend, -w.aroon_uptrend),
            _ => {}
        }

        match s.parabolic_sar {
            TrendStatus::Bearish => out.push(SignalTag::ParabolicBearish, -w.parabolic_bearish),
            TrendStatus::Bullish => out.push(SignalTag::ParabolicBullish, w.parabolic_bearish),
            _ => {}
        }

        if s.mfi.status == MfiStatus::Oversold || s.mfi.value < MFI_OVERSOLD {
            out.push(SignalTag::MfiOversold, w.mfi_oversold);
        } else if s.mfi.status == MfiStatus::Overbought || s.mfi.value > MFI_OVERBOUGHT {
            out.push(SignalTag::MfiOverbought, -w.mfi_oversold);
        }

        match s.price_action {
            PriceActionType::Ranging => out.push(SignalTag::PriceRanging, w.price_ranging),
            PriceActionType::Trending => out.push(SignalTag::PriceTrending, 0.3),
            _ => {}
        }

        out
    }
}
