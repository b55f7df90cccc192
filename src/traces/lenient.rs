//! Field deserializers that never fail a whole record.
//!
//! The trace endpoint forwards whatever the observation store holds, so a
//! field can arrive with the wrong JSON type. A mismatch becomes `None` (or a
//! coerced value) instead of rejecting the payload.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Strings as-is, numbers and booleans rendered as text, anything else `None`.
///
/// A numeric `time` therefore reaches timestamp parsing and is reported there.
pub(crate) fn string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    })
}

/// Any finite JSON number, or a string holding one.
pub(crate) fn float<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(as_f64(&Value::deserialize(deserializer)?))
}

/// Non-negative counts. Fractions are rounded; negatives and junk are `None`.
pub(crate) fn count<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    if let Some(n) = value.as_u64() {
        return Ok(Some(n));
    }
    Ok(as_f64(&value)
        .filter(|f| *f >= 0.0)
        .map(|f| f.round().min(u64::MAX as f64) as u64))
}

fn as_f64(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|f| f.is_finite())
}
