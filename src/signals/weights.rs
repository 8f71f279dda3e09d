use serde::{Deserialize, Serialize};

/// Configurable magnitudes for the weak "neutral / within-band" rules.
///
/// Strong-signal rules use fixed magnitudes; everything here can be retuned
/// without touching the analyzers. Several weights are applied with both signs
/// (e.g. `ema_bearish` scores EMA_BEARISH negatively and EMA_BULLISH positively).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PatternWeights {
    pub rsi_neutral: f64,
    pub ema_bearish: f64,
    pub sma_bearish: f64,
    pub macd_neutral: f64,
    pub vix_calm: f64,
    pub bollinger_within: f64,
    pub cci_sell: f64,
    pub supertrend_bullish: f64,
    pub volume_weak: f64,
    pub aroon_uptrend: f64,
    pub parabolic_bearish: f64,
    pub mfi_oversold: f64,
    pub price_ranging: f64,
    pub volume_strength_weak: f64,
}

impl Default for PatternWeights {
    fn default() -> Self {
        Self {
            rsi_neutral: 0.6,
            ema_bearish: 0.7,
            sma_bearish: 0.7,
            macd_neutral: 0.5,
            vix_calm: 0.8,
            bollinger_within: 0.4,
            cci_sell: 0.8,
            supertrend_bullish: 0.9,
            volume_weak: -0.3,
            aroon_uptrend: 0.7,
            parabolic_bearish: 0.6,
            mfi_oversold: 0.8,
            price_ranging: -0.2,
            volume_strength_weak: -0.4,
        }
    }
}

impl PatternWeights {
    /// Every weight paired with its key, in declaration order.
    pub fn entries(&self) -> [(&'static str, f64); 14] {
        [
            ("rsi_neutral", self.rsi_neutral),
            ("ema_bearish", self.ema_bearish),
            ("sma_bearish", self.sma_bearish),
            ("macd_neutral", self.macd_neutral),
            ("vix_calm", self.vix_calm),
            ("bollinger_within", self.bollinger_within),
            ("cci_sell", self.cci_sell),
            ("supertrend_bullish", self.supertrend_bullish),
            ("volume_weak", self.volume_weak),
            ("aroon_uptrend", self.aroon_uptrend),
            ("parabolic_bearish", self.parabolic_bearish),
            ("mfi_oversold", self.mfi_oversold),
            ("price_ranging", self.price_ranging),
            ("volume_strength_weak", self.volume_strength_weak),
        ]
    }

    /// `Err` naming the first non-finite weight.
    pub fn validate(&self) -> Result<(), String> {
        match self.entries().iter().find(|(_, value)| !value.is_finite()) {
            Some((key, value)) => Err(format!("Weight '{}' must be finite, got: {}", key, value)),
            None => Ok(()),
        }
    }

    /// Replace a single weight by key. Returns `Err` for unknown keys or
    /// non-finite values.
    pub fn set(&mut self, key: &str, value: f64) -> Result<(), String> {
        if !value.is_finite() {
            return Err(format!("Weight '{}' must be finite, got: {}", key, value));
        }
        let slot = match key {
            "rsi_neutral" => &mut self.rsi_neutral,
            "ema_bearish" => &mut self.ema_bearish,
            "sma_bearish" => &mut self.sma_bearish,
            "macd_neutral" => &mut self.macd_neutral,
            "vix_calm" => &mut self.vix_calm,
            "bollinger_within" => &mut self.bollinger_within,
            "cci_sell" => &mut self.cci_sell,
            "supertrend_bullish" => &mut self.supertrend_bullish,
            "volume_weak" => &mut self.volume_weak,
            "aroon_uptrend" => &mut self.aroon_uptrend,
            "parabolic_bearish" => &mut self.parabolic_bearish,
            "mfi_oversold" => &mut self.mfi_oversold,
            "price_ranging" => &mut self.price_ranging,
            "volume_strength_weak" => &mut self.volume_strength_weak,
            other => return Err(format!("Unknown pattern weight: {}", other)),
        };
        *slot = value;
        Ok(())
    }
}
