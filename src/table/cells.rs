//! Cell formatting for the call table
//!
//! Each column has its own missing-value rule. The important one: a numeric
//! `0` is a value, not a missing field.

use chrono::{DateTime, Local, Utc};
use serde::Serialize;

use crate::traces::TraceRecord;

/// Shown in place of a missing or unusable value.
pub const PLACEHOLDER: &str = "-";

/// Appended to truncated previews.
pub const ELLIPSIS: &str = "...";

/// Default preview length for input/output text, in characters.
pub const DEFAULT_PREVIEW_CHARS: usize = 60;

/// Visible text plus optional hover detail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableCell {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl TableCell {
    fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            title: None,
        }
    }

    fn with_title(text: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            title: Some(title.into()),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.text == PLACEHOLDER
    }
}

/// One rendered table row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableRow {
    pub time: TableCell,
    pub model: TableCell,
    pub latency: TableCell,
    pub tokens: TableCell,
    /// Input/output/total breakdown, always present
    pub token_detail: String,
    pub input: TableCell,
    pub output: TableCell,
}

/// Build the row for one trace, previews cut at `preview_chars`.
pub fn build_row(trace: &TraceRecord, preview_chars: usize) -> TableRow {
    TableRow {
        time: time_cell(trace.time.as_deref()),
        model: match trace.model.as_deref() {
            Some(model) if !model.is_empty() => TableCell::plain(model),
            _ => TableCell::plain(PLACEHOLDER),
        },
        latency: number_cell(trace.latency_ms),
        tokens: number_cell(trace.total_tokens.map(|t| t as f64)),
        token_detail: token_breakdown(trace),
        input: text_cell(trace.input_content.as_deref(), preview_chars),
        output: text_cell(trace.output_content.as_deref(), preview_chars),
    }
}

fn time_cell(raw: Option<&str>) -> TableCell {
    let Some(raw) = raw else {
        return TableCell::plain(PLACEHOLDER);
    };
    match crate::traces::parse_timestamp(raw) {
        Some(dt) => TableCell::with_title(format_local_time(&dt), raw),
        None => TableCell::with_title(PLACEHOLDER, raw),
    }
}

fn number_cell(value: Option<f64>) -> TableCell {
    match value {
        Some(v) => TableCell::plain(format_number(v)),
        None => TableCell::plain(PLACEHOLDER),
    }
}

fn text_cell(text: Option<&str>, preview_chars: usize) -> TableCell {
    match text {
        Some(full) if !full.is_empty() => {
            let (preview, _) = truncate_preview(full, preview_chars);
            TableCell::with_title(preview, full)
        }
        _ => TableCell::plain(PLACEHOLDER),
    }
}

/// `in: X · out: Y · total: Z`, with placeholders for missing counts.
pub fn token_breakdown(trace: &TraceRecord) -> String {
    let fmt = |v: Option<u64>| v.map_or_else(|| PLACEHOLDER.to_string(), |n| format_number(n as f64));
    format!(
        "in: {} · out: {} · total: {}",
        fmt(trace.input_tokens),
        fmt(trace.output_tokens),
        fmt(trace.total_tokens)
    )
}

/// Cut `text` to `max_chars` characters, appending [`ELLIPSIS`] only if
/// something was removed. Returns the preview and whether it was truncated.
pub fn truncate_preview(text: &str, max_chars: usize) -> (String, bool) {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => (format!("{}{}", &text[..byte_idx], ELLIPSIS), true),
        None => (text.to_string(), false),
    }
}

/// Format a number with thousands separators and at most three decimals.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let fixed = format!("{:.3}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let is_zero = int_part.chars().all(|c| c == '0') && frac_part.is_empty();
    let sign = if value < 0.0 && !is_zero { "-" } else { "" };

    if frac_part.is_empty() {
        format!("{}{}", sign, grouped)
    } else {
        format!("{}{}.{}", sign, grouped, frac_part)
    }
}

/// Local-time rendering, e.g. `1/2/2024, 3:04:05 PM`.
pub fn format_local_time(dt: &DateTime<Utc>) -> String {
    dt.with_timezone(&Local)
        .format("%-m/%-d/%Y, %-I:%M:%S %p")
        .to_string()
}
