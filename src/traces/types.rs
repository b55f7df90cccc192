//! Type definitions for trace records returned by `/api/traces`

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use super::lenient;

/// A single LLM call as reported by the trace endpoint.
///
/// Every field is optional: the endpoint forwards whatever the upstream
/// observation store recorded, and older deployments omit several fields.
/// A field of the wrong JSON type is coerced or dropped, never fatal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TraceRecord {
    /// Short observation id
    #[serde(deserialize_with = "lenient::string")]
    pub id: Option<String>,
    /// Parent trace id
    #[serde(rename = "traceId", deserialize_with = "lenient::string")]
    pub trace_id: Option<String>,
    /// Call start time, usually RFC 3339
    #[serde(deserialize_with = "lenient::string")]
    pub time: Option<String>,
    /// Model name
    #[serde(deserialize_with = "lenient::string")]
    pub model: Option<String>,
    /// End-to-end latency in milliseconds
    #[serde(deserialize_with = "lenient::float")]
    pub latency_ms: Option<f64>,
    /// Time to first token in seconds
    #[serde(deserialize_with = "lenient::float")]
    pub time_to_first_token_s: Option<f64>,
    #[serde(deserialize_with = "lenient::count")]
    pub total_tokens: Option<u64>,
    #[serde(deserialize_with = "lenient::count")]
    pub input_tokens: Option<u64>,
    #[serde(deserialize_with = "lenient::count")]
    pub output_tokens: Option<u64>,
    /// User prompt text
    #[serde(deserialize_with = "lenient::string")]
    pub input_content: Option<String>,
    /// Model completion text
    #[serde(deserialize_with = "lenient::string")]
    pub output_content: Option<String>,
}

impl TraceRecord {
    /// Parse the record timestamp, if present and valid.
    pub fn parsed_time(&self) -> Option<DateTime<Utc>> {
        self.time.as_deref().and_then(parse_timestamp)
    }
}

/// Response body of `/api/traces`.
///
/// Older servers return a bare array, newer ones wrap it under `traces`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum TracesPayload {
    Bare(Vec<TraceRecord>),
    Wrapped { traces: Vec<TraceRecord> },
}

impl TracesPayload {
    pub fn into_records(self) -> Vec<TraceRecord> {
        match self {
            TracesPayload::Bare(records) => records,
            TracesPayload::Wrapped { traces } => traces,
        }
    }
}

/// Parse a timestamp the way the dashboard accepts it.
///
/// Accepts RFC 3339, a naive `YYYY-MM-DDTHH:MM:SS[.fff]` (treated as UTC) and a
/// bare `YYYY-MM-DD` date (midnight UTC).
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
