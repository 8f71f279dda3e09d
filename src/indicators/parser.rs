//! Reads an indicator snapshot out of a loosely shaped JSON payload.
//!
//! Two payload shapes are accepted: a bare record (legacy) and a sequence whose
//! first element is the record (current). Fields are validated once here:
//! absent fields and sub-records that are not objects fall back to their
//! defaults, a present numeric field that cannot be read as a number (`null`
//! included) is a computation error, and a present status that is not a known
//! label reads as `Other`.
//!
//! [`to_record`] writes a snapshot back out in the same shape, so a stored
//! snapshot can be evaluated again.

use serde_json::{json, Map, Value};

use crate::error::{EngineError, Result};
use crate::models::indicators::*;

pub type Record = Map<String, Value>;

/// Extract and validate the snapshot carried by `payload`.
pub fn parse_payload(payload: &Value) -> Result<IndicatorSnapshot> {
    let record = unwrap_record(payload)?;
    parse_snapshot(record)
}

fn unwrap_record(payload: &Value) -> Result<&Record> {
    match payload {
        Value::Null => Err(EngineError::invalid_request("No data provided")),
        Value::Object(record) if record.is_empty() => {
            Err(EngineError::invalid_request("No data provided"))
        }
        Value::Object(record) => Ok(record),
        Value::Array(items) => match items.first() {
            None => Err(EngineError::invalid_request("No data provided")),
            Some(Value::Object(record)) => Ok(record),
            Some(_) => Err(EngineError::invalid_request(
                "snapshot list must wrap an indicator record",
            )),
        },
        _ => Err(EngineError::invalid_request(
            "snapshot must be an indicator record or a list wrapping one",
        )),
    }
}

/// Build a snapshot from an already unwrapped record.
pub fn parse_snapshot(record: &Record) -> Result<IndicatorSnapshot> {
    let ltp = match record.get("LTP") {
        None => 0.0,
        Some(value) => coerce_f64(value).ok_or_else(|| not_a_number("LTP", None, value))?,
    };

    let rsi = family(record, "RSI");
    let ema = family(record, "EMA20");
    let sma = family(record, "SMA50");
    let macd = family(record, "MACD");
    let vix = family(record, "VIX");
    let bands = family(record, "BollingerBands");
    let cci = family(record, "CCI");
    let volume_strength = family(record, "VolumeStrength");
    let mfi = family(record, "MFI");

    Ok(IndicatorSnapshot {
        ltp,
        rsi: RsiReading {
            value: number(rsi, "RSI", "rsi", DEFAULT_RSI)?,
            status: status(rsi, "status"),
        },
        ema20: MovingAverageReading {
            value: number(ema, "EMA20", "ema", ltp)?,
            status: status(ema, "status"),
        },
        sma50: MovingAverageReading {
            value: number(sma, "SMA50", "sma", ltp)?,
            status: status(sma, "status"),
        },
        macd: MacdReading {
            histogram: number(macd, "MACD", "histogram", 0.0)?,
            status: status(macd, "status"),
        },
        vix: VixReading {
            value: number(vix, "VIX", "vix", DEFAULT_VIX)?,
            status: status(vix, "status"),
        },
        bollinger: BollingerReading {
            status: status(bands, "status"),
            upper: number(bands, "BollingerBands", "upper", ltp + DEFAULT_BAND_HALF_WIDTH)?,
            lower: number(bands, "BollingerBands", "lower", ltp - DEFAULT_BAND_HALF_WIDTH)?,
        },
        cci: CciReading {
            value: number(cci, "CCI", "value", 0.0)?,
            status: status(cci, "status"),
        },
        supertrend: status(family(record, "SuperTrend"), "status"),
        volume: status(family(record, "VolumeIndicators"), "status"),
        volume_strength: VolumeStrengthReading {
            kind: status(volume_strength, "type"),
            score: number(volume_strength, "VolumeStrength", "score", 0.0)?,
        },
        volume_spike: family(record, "VolumeSpike")
            .and_then(|spike| spike.get("spike"))
            .map(is_truthy)
            .unwrap_or(false),
        aroon: status(family(record, "Aroon"), "status"),
        parabolic_sar: status(family(record, "ParabolicSAR"), "status"),
        mfi: MfiReading {
            value: number(mfi, "MFI", "value", DEFAULT_MFI)?,
            status: status(mfi, "status"),
        },
        price_action: status(family(record, "PriceAction"), "type"),
        adx: number(family(record, "ADX"), "ADX", "value", DEFAULT_ADX)?,
        stochastic: number(
            family(record, "Stochastic"),
            "Stochastic",
            "value",
            DEFAULT_STOCHASTIC,
        )?,
        atr: number(family(record, "ATR"), "ATR", "value", DEFAULT_ATR)?,
    })
}

/// Sub-record for one indicator family; anything that is not an object is ignored.
fn family<'a>(record: &'a Record, key: &str) -> Option<&'a Record> {
    record.get(key).and_then(Value::as_object)
}

fn number(family: Option<&Record>, indicator: &str, field: &str, default: f64) -> Result<f64> {
    match family.and_then(|f| f.get(field)) {
        None => Ok(default),
        Some(value) => coerce_f64(value).ok_or_else(|| not_a_number(indicator, Some(field), value)),
    }
}

/// Absent statuses take the family default; `null`, non-strings and unknown
/// labels read as `Other`.
fn status<T: StatusLabel>(family: Option<&Record>, field: &str) -> T {
    match family.and_then(|f| f.get(field)) {
        None => T::default(),
        Some(value) if value.is_string() => {
            serde_json::from_value(value.clone()).unwrap_or_else(|_| T::other())
        }
        Some(_) => T::other(),
    }
}

/// Numbers and numeric strings are accepted; everything else is rejected.
pub fn coerce_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(n) => n.as_f64().map(|v| v != 0.0).unwrap_or(false),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

fn not_a_number(indicator: &str, field: Option<&str>, value: &Value) -> EngineError {
    let location = match field {
        Some(field) => format!("{}.{}", indicator, field),
        None => indicator.to_string(),
    };
    EngineError::computation(format!(
        "could not convert {} to a number: {}",
        location, value
    ))
}

/// Write `snapshot` back out in the payload shape [`parse_snapshot`] reads.
pub fn to_record(snapshot: &IndicatorSnapshot) -> Record {
    let record = json!({
        "LTP": snapshot.ltp,
        "RSI": {"rsi": snapshot.rsi.value, "status": snapshot.rsi.status},
        "EMA20": {"ema": snapshot.ema20.value, "status": snapshot.ema20.status},
        "SMA50": {"sma": snapshot.sma50.value, "status": snapshot.sma50.status},
        "MACD": {"histogram": snapshot.macd.histogram, "status": snapshot.macd.status},
        "VIX": {"vix": snapshot.vix.value, "status": snapshot.vix.status},
        "BollingerBands": {
            "status": snapshot.bollinger.status,
            "upper": snapshot.bollinger.upper,
            "lower": snapshot.bollinger.lower,
        },
        "CCI": {"value": snapshot.cci.value, "status": snapshot.cci.status},
        "SuperTrend": {"status": snapshot.supertrend},
        "VolumeIndicators": {"status": snapshot.volume},
        "VolumeStrength": {
            "type": snapshot.volume_strength.kind,
            "score": snapshot.volume_strength.score,
        },
        "VolumeSpike": {"spike": snapshot.volume_spike},
        "Aroon": {"status": snapshot.aroon},
        "ParabolicSAR": {"status": snapshot.parabolic_sar},
        "MFI": {"value": snapshot.mfi.value, "status": snapshot.mfi.status},
        "PriceAction": {"type": snapshot.price_action},
        "ADX": {"value": snapshot.adx},
        "Stochastic": {"value": snapshot.stochastic},
        "ATR": {"value": snapshot.atr},
    });
    match record {
        Value::Object(record) => record,
        _ => Record::new(),
    }
}
