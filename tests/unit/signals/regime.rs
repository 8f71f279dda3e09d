//! Unit tests for the VIX condition and market regime labels

use optrix::config::{RegimeThresholds, VixBands};
use optrix::models::indicators::*;
use optrix::models::regime::{MarketRegime, VixCondition};
use optrix::signals::regime::RegimeClassifier;

fn snapshot(vix: f64, rsi: f64, supertrend: TrendStatus) -> IndicatorSnapshot {
    let mut snapshot = IndicatorSnapshot::default();
    snapshot.vix.value = vix;
    snapshot.rsi.value = rsi;
    snapshot.supertrend = supertrend;
    snapshot
}

#[test]
fn test_vix_condition_bands() {
    let classifier = RegimeClassifier::default();
    assert_eq!(classifier.vix_condition(26.0), VixCondition::ExtremeVolatility);
    assert_eq!(classifier.vix_condition(25.0), VixCondition::HighVolatility);
    assert_eq!(classifier.vix_condition(18.5), VixCondition::HighVolatility);
    assert_eq!(classifier.vix_condition(18.0), VixCondition::NormalVolatility);
    assert_eq!(classifier.vix_condition(12.0), VixCondition::NormalVolatility);
    assert_eq!(classifier.vix_condition(11.9), VixCondition::LowVolatility);
}

#[test]
fn test_market_regime_volatility_first() {
    let classifier = RegimeClassifier::default();
    assert_eq!(
        classifier.market_regime(&snapshot(21.0, 50.0, TrendStatus::Bullish)),
        MarketRegime::HighVolatility
    );
    assert_eq!(
        classifier.market_regime(&snapshot(11.0, 50.0, TrendStatus::Bearish)),
        MarketRegime::LowVolatility
    );
}

#[test]
fn test_market_regime_trend_qualified_by_rsi() {
    let classifier = RegimeClassifier::default();
    assert_eq!(
        classifier.market_regime(&snapshot(15.0, 65.0, TrendStatus::Bullish)),
        MarketRegime::BullishTrend
    );
    assert_eq!(
        classifier.market_regime(&snapshot(15.0, 75.0, TrendStatus::Bullish)),
        MarketRegime::SidewaysMarket
    );
    assert_eq!(
        classifier.market_regime(&snapshot(15.0, 35.0, TrendStatus::Bearish)),
        MarketRegime::BearishTrend
    );
    assert_eq!(
        classifier.market_regime(&snapshot(15.0, 25.0, TrendStatus::Bearish)),
        MarketRegime::SidewaysMarket
    );
}

#[test]
fn test_market_regime_ranging() {
    let mut ranging = snapshot(15.0, 50.0, TrendStatus::Neutral);
    ranging.price_action = PriceActionType::Ranging;
    assert_eq!(
        RegimeClassifier::default().market_regime(&ranging),
        MarketRegime::SidewaysRanging
    );
}

#[test]
fn test_custom_thresholds() {
    let classifier = RegimeClassifier::new(
        VixBands {
            extreme: 40.0,
            high: 30.0,
            low: 10.0,
        },
        RegimeThresholds {
            high_volatility_vix: 35.0,
            ..RegimeThresholds::default()
        },
    );
    assert_eq!(classifier.vix_condition(26.0), VixCondition::NormalVolatility);
    assert_eq!(
        classifier.market_regime(&snapshot(26.0, 50.0, TrendStatus::Neutral)),
        MarketRegime::SidewaysMarket
    );
}

#[test]
fn test_labels_serialize_in_screaming_case() {
    assert_eq!(
        serde_json::to_value(VixCondition::NormalVolatility).unwrap(),
        "NORMAL_VOLATILITY"
    );
    assert_eq!(
        serde_json::to_value(MarketRegime::SidewaysRanging).unwrap(),
        "SIDEWAYS_RANGING"
    );
}
