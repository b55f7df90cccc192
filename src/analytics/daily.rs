//! Per-day aggregation feeding the time-series chart

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::traces::TraceRecord;

/// Label used when the requested metric is not recognized.
pub const GENERIC_SERIES_LABEL: &str = "Value";

/// Sums for one calendar day (UTC).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyAggregate {
    /// `YYYY-MM-DD`
    pub day: String,
    pub latency_sum: f64,
    pub token_sum: u64,
    pub count: u64,
}

impl DailyAggregate {
    fn new(day: String) -> Self {
        Self {
            day,
            latency_sum: 0.0,
            token_sum: 0,
            count: 0,
        }
    }

    pub(crate) fn add(&mut self, trace: &TraceRecord) {
        self.latency_sum += trace.latency_ms.unwrap_or(0.0);
        self.token_sum = self
            .token_sum
            .saturating_add(trace.total_tokens.unwrap_or(0));
        self.count += 1;
    }

    /// Mean latency, 0 for an empty bucket.
    pub fn avg_latency(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.latency_sum / self.count as f64
        }
    }
}

/// Metrics the time-series and model charts can plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SeriesMetric {
    /// Mean latency per bucket
    #[default]
    AvgLatency,
    /// Number of calls per bucket
    Calls,
    /// Total tokens per bucket
    Tokens,
}

impl SeriesMetric {
    /// Identifier used by the metric selectors.
    pub fn id(&self) -> &'static str {
        match self {
            SeriesMetric::AvgLatency => "avg_latency",
            SeriesMetric::Calls => "calls",
            SeriesMetric::Tokens => "tokens",
        }
    }

    /// Human-readable label for legends and axis titles.
    pub fn label(&self) -> &'static str {
        match self {
            SeriesMetric::AvgLatency => "Avg Latency (ms)",
            SeriesMetric::Calls => "Calls",
            SeriesMetric::Tokens => "Tokens",
        }
    }
}

impl FromStr for SeriesMetric {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "avg_latency" | "latency" => Ok(SeriesMetric::AvgLatency),
            "calls" | "count" => Ok(SeriesMetric::Calls),
            "tokens" => Ok(SeriesMetric::Tokens),
            _ => Err(format!("Invalid metric: {}", s)),
        }
    }
}

/// One labelled line: x labels (days) and y values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricSeries {
    pub label: String,
    pub labels: Vec<String>,
    pub data: Vec<f64>,
}

impl MetricSeries {
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Bucket traces by UTC calendar day, sorted ascending.
///
/// Traces with a missing or unparseable `time` are skipped (and logged); they
/// still appear in the call table.
pub fn group_by_day(items: &[TraceRecord]) -> Vec<DailyAggregate> {
    let mut buckets: BTreeMap<String, DailyAggregate> = BTreeMap::new();

    for trace in items {
        let Some(day) = day_key(trace) else {
            continue;
        };
        buckets
            .entry(day.clone())
            .or_insert_with(|| DailyAggregate::new(day))
            .add(trace);
    }

    buckets.into_values().collect()
}

/// Project day buckets onto one metric.
///
/// An unknown `metric_id` gives an empty series labelled
/// [`GENERIC_SERIES_LABEL`].
pub fn build_series_by_metric(days: &[DailyAggregate], metric_id: &str) -> MetricSeries {
    let Ok(metric) = metric_id.parse::<SeriesMetric>() else {
        tracing::debug!(metric = metric_id, "Unknown time-series metric");
        return MetricSeries {
            label: GENERIC_SERIES_LABEL.to_string(),
            labels: Vec::new(),
            data: Vec::new(),
        };
    };

    let labels = days.iter().map(|d| d.day.clone()).collect();
    let data = days
        .iter()
        .map(|d| match metric {
            SeriesMetric::AvgLatency => d.avg_latency(),
            SeriesMetric::Calls => d.count as f64,
            SeriesMetric::Tokens => d.token_sum as f64,
        })
        .collect();

    MetricSeries {
        label: metric.label().to_string(),
        labels,
        data,
    }
}

/// `YYYY-MM-DD` of the trace timestamp, or `None` when it can't be used.
pub(crate) fn day_key(trace: &TraceRecord) -> Option<String> {
    let raw = trace.time.as_deref()?;
    match trace.parsed_time() {
        Some(dt) => Some(dt.format("%Y-%m-%d").to_string()),
        None => {
            tracing::warn!(time = %raw, "Skipping trace with unparseable timestamp");
            None
        }
    }
}
