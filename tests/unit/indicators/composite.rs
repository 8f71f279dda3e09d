//! Unit tests for the composite analyzer

use optrix::indicators::{Analyzer, CompositeAnalyzer};
use optrix::models::indicators::*;
use optrix::models::signal::SignalTag;
use optrix::signals::weights::PatternWeights;

fn analyze(snapshot: &IndicatorSnapshot) -> optrix::indicators::AnalyzerOutput {
    CompositeAnalyzer.analyze(snapshot, &PatternWeights::default())
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {}, got {}",
        expected,
        actual
    );
}

#[test]
fn test_default_snapshot() {
    let output = analyze(&IndicatorSnapshot::default());
    assert_eq!(
        output.tags,
        vec![
            SignalTag::RsiNeutral,
            SignalTag::MacdNeutral,
            SignalTag::BollingerWithin
        ]
    );
    assert_close(output.strength, 0.6 + 0.5 + 0.4);
}

#[test]
fn test_rsi_oversold_contributes_fixed_strength() {
    let mut snapshot = IndicatorSnapshot::default();
    snapshot.rsi.value = 30.0;
    let output = analyze(&snapshot);
    assert!(output.contains(SignalTag::RsiOversold));
    assert!(!output.contains(SignalTag::RsiNeutral));
    assert_close(output.strength, 0.8 + 0.5 + 0.4);
}

#[test]
fn test_rsi_overbought_overrides_status() {
    let mut snapshot = IndicatorSnapshot::default();
    snapshot.rsi = RsiReading {
        value: 70.0,
        status: TrendStatus::Neutral,
    };
    let output = analyze(&snapshot);
    assert!(output.contains(SignalTag::RsiOverbought));
    assert_close(output.strength, -0.8 + 0.5 + 0.4);
}

#[test]
fn test_rsi_non_neutral_status_in_band_emits_nothing() {
    let mut snapshot = IndicatorSnapshot::default();
    snapshot.rsi.status = TrendStatus::Bullish;
    let output = analyze(&snapshot);
    assert!(!output.tags.iter().any(|t| t.as_str().starts_with("RSI")));
}

#[test]
fn test_moving_averages_use_symmetric_weights() {
    let mut snapshot = IndicatorSnapshot::default();
    snapshot.ema20.status = TrendStatus::Bullish;
    snapshot.sma50.status = TrendStatus::Bearish;
    let output = analyze(&snapshot);
    assert!(output.contains(SignalTag::EmaBullish));
    assert!(output.contains(SignalTag::SmaBearish));
    // +0.7 and -0.7 cancel out
    assert_close(output.strength, 1.5);
}

#[test]
fn test_macd_histogram_overrides_neutral_status() {
    let mut snapshot = IndicatorSnapshot::default();
    snapshot.macd.histogram = -2.5;
    let output = analyze(&snapshot);
    assert!(output.contains(SignalTag::MacdBearish));
    assert_close(output.strength, 0.6 - 0.7 + 0.4);

    snapshot.macd = MacdReading {
        histogram: -2.5,
        status: TrendStatus::Bullish,
    };
    assert!(analyze(&snapshot).contains(SignalTag::MacdBullish));
}

#[test]
fn test_vix_calm_and_high() {
    let mut snapshot = IndicatorSnapshot::default();
    snapshot.vix.value = 12.0;
    assert!(analyze(&snapshot).contains(SignalTag::VixCalm));

    snapshot.vix = VixReading {
        value: 16.0,
        status: VixStatus::CalmMarket,
    };
    assert!(analyze(&snapshot).contains(SignalTag::VixCalm));

    snapshot.vix = VixReading {
        value: 22.0,
        status: VixStatus::Normal,
    };
    let output = analyze(&snapshot);
    assert!(output.contains(SignalTag::VixHigh));
    assert_close(output.strength, 1.5 - 0.5);

    snapshot.vix.value = 18.0;
    let output = analyze(&snapshot);
    assert!(!output.contains(SignalTag::VixHigh));
    assert!(!output.contains(SignalTag::VixCalm));
}

#[test]
fn test_bollinger_statuses() {
    let mut snapshot = IndicatorSnapshot::default();
    snapshot.bollinger.status = BandStatus::AboveUpper;
    assert!(analyze(&snapshot).contains(SignalTag::BollingerOverbought));
    snapshot.bollinger.status = BandStatus::BelowLower;
    assert!(analyze(&snapshot).contains(SignalTag::BollingerOversold));
    snapshot.bollinger.status = BandStatus::Other;
    let output = analyze(&snapshot);
    assert!(!output.tags.iter().any(|t| t.as_str().starts_with("BOLLINGER")));
}

#[test]
fn test_cci_threshold_and_status() {
    let mut snapshot = IndicatorSnapshot::default();
    snapshot.cci.value = -150.0;
    let output = analyze(&snapshot);
    assert!(output.contains(SignalTag::CciSell));
    assert_close(output.strength, 1.5 - 0.8);

    snapshot.cci = CciReading {
        value: 0.0,
        status: CciStatus::Buy,
    };
    assert!(analyze(&snapshot).contains(SignalTag::CciBuy));
}

#[test]
fn test_trend_overlays() {
    let mut snapshot = IndicatorSnapshot::default();
    snapshot.supertrend = TrendStatus::Bullish;
    snapshot.aroon = AroonStatus::Downtrend;
    snapshot.parabolic_sar = TrendStatus::Bearish;
    let output = analyze(&snapshot);
    assert!(output.contains(SignalTag::SupertrendBullish));
    assert!(output.contains(SignalTag::AroonDowntrend));
    assert!(output.contains(SignalTag::ParabolicBearish));
    assert_close(output.strength, 1.5 + 0.9 - 0.7 - 0.6);
}

#[test]
fn test_volume_weak_uses_negative_weight() {
    let mut snapshot = IndicatorSnapshot::default();
    snapshot.volume_strength.kind = VolumeType::WeakVolume;
    let output = analyze(&snapshot);
    assert!(output.contains(SignalTag::VolumeWeak));
    assert_close(output.strength, 1.5 - 0.3);

    let mut snapshot = IndicatorSnapshot::default();
    snapshot.volume = VolumeStatus::Strong;
    let output = analyze(&snapshot);
    assert!(output.contains(SignalTag::VolumeStrong));
    assert_close(output.strength, 1.5 + 0.5);
}

#[test]
fn test_mfi_and_price_action() {
    let mut snapshot = IndicatorSnapshot::default();
    snapshot.mfi.value = 85.0;
    snapshot.price_action = PriceActionType::Ranging;
    let output = analyze(&snapshot);
    assert!(output.contains(SignalTag::MfiOverbought));
    assert!(output.contains(SignalTag::PriceRanging));
    assert_close(output.strength, 1.5 - 0.8 - 0.2);

    snapshot.mfi = MfiReading {
        value: 50.0,
        status: MfiStatus::Oversold,
    };
    snapshot.price_action = PriceActionType::Trending;
    let output = analyze(&snapshot);
    assert!(output.contains(SignalTag::MfiOversold));
    assert!(output.contains(SignalTag::PriceTrending));
    assert_close(output.strength, 1.5 + 0.8 + 0.3);
}

#[test]
fn test_custom_weights_are_applied() {
    let mut weights = PatternWeights::default();
    weights.set("rsi_neutral", 0.0).unwrap();
    weights.set("bollinger_within", 1.0).unwrap();
    let output = CompositeAnalyzer.analyze(&IndicatorSnapshot::default(), &weights);
    assert_close(output.strength, 0.0 + 0.5 + 1.0);
}

#[test]
fn test_unknown_weight_key_is_rejected() {
    let mut weights = PatternWeights::default();
    assert!(weights.set("rsi_bullish", 0.5).is_err());
    assert!(weights.set("vix_calm", f64::NAN).is_err());
    assert_eq!(weights, PatternWeights::default());
}
