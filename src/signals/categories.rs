//! Directional classification of signal tags.
//!
//! A tag is bullish or bearish when its name contains one of the keywords
//! below. A tag may match neither list (e.g. `VIX_CALM`, `NEAR_BB_UPPER`).

use crate::models::signal::SignalTag;

pub const BULLISH_KEYWORDS: [&str; 6] = ["BULLISH", "OVERSOLD", "BUY", "UPTREND", "STRONG", "ABOVE"];
pub const BEARISH_KEYWORDS: [&str; 6] = [
    "BEARISH",
    "OVERBOUGHT",
    "SELL",
    "DOWNTREND",
    "WEAK",
    "BELOW",
];

pub fn is_bullish(tag: SignalTag) -> bool {
    let name = tag.as_str();
    BULLISH_KEYWORDS.iter().any(|keyword| name.contains(keyword))
}

pub fn is_bearish(tag: SignalTag) -> bool {
    let name = tag.as_str();
    BEARISH_KEYWORDS.iter().any(|keyword| name.contains(keyword))
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DirectionalTally {
    pub bullish: usize,
    pub bearish: usize,
}

pub fn tally(tags: &[SignalTag]) -> DirectionalTally {
    DirectionalTally {
        bullish: tags.iter().filter(|tag| is_bullish(**tag)).count(),
        bearish: tags.iter().filter(|tag| is_bearish(**tag)).count(),
    }
}
