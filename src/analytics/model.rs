//! Per-day, per-model aggregation feeding the stacked model chart

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use super::daily::{day_key, DailyAggregate, SeriesMetric};
use crate::traces::TraceRecord;

/// Label for traces without a model.
pub const UNKNOWN_MODEL: &str = "Unknown";

/// Separator reserved for composite (day, model) keys; stripped from model names.
pub const MODEL_KEY_SEPARATOR: char = '|';

/// Dataset colors, assigned to models by index and reused cyclically.
pub const MODEL_PALETTE: [&str; 8] = [
    "#4e79a7", "#f28e2b", "#e15759", "#76b7b2", "#59a14f", "#edc948", "#b07aa1", "#ff9da7",
];

/// Sums for one (day, model) pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyModelAggregate {
    pub day: String,
    pub model: String,
    pub latency_sum: f64,
    pub token_sum: u64,
    pub count: u64,
}

impl DailyModelAggregate {
    fn value(&self, metric: SeriesMetric) -> f64 {
        match metric {
            SeriesMetric::Calls => self.count as f64,
            SeriesMetric::Tokens => self.token_sum as f64,
            SeriesMetric::AvgLatency if self.count == 0 => 0.0,
            SeriesMetric::AvgLatency => self.latency_sum / self.count as f64,
        }
    }
}

/// One model's stacked series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelDataset {
    pub label: String,
    pub color: &'static str,
    pub data: Vec<f64>,
}

/// Everything the model chart needs: shared x labels, one dataset per model.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelChartSeries {
    pub axis_title: String,
    pub labels: Vec<String>,
    pub datasets: Vec<ModelDataset>,
}

/// Model name as used in the chart: `Unknown` when missing, separator removed.
pub fn model_label(trace: &TraceRecord) -> String {
    match trace.model.as_deref() {
        Some(name) if !name.trim().is_empty() => name.replace(MODEL_KEY_SEPARATOR, ""),
        _ => UNKNOWN_MODEL.to_string(),
    }
}

/// Bucket traces by (UTC day, model), sorted by day then model.
///
/// Same skip rule as [`super::group_by_day`] for missing or bad timestamps.
pub fn group_by_day_and_model(items: &[TraceRecord]) -> Vec<DailyModelAggregate> {
    let mut buckets: BTreeMap<(String, String), DailyAggregate> = BTreeMap::new();

    for trace in items {
        let Some(day) = day_key(trace) else {
            continue;
        };
        let key = (day, model_label(trace));
        buckets
            .entry(key)
            .or_insert_with_key(|(day, _)| DailyAggregate {
                day: day.clone(),
                latency_sum: 0.0,
                token_sum: 0,
                count: 0,
            })
            .add(trace);
    }

    buckets
        .into_iter()
        .map(|((day, model), agg)| DailyModelAggregate {
            day,
            model,
            latency_sum: agg.latency_sum,
            token_sum: agg.token_sum,
            count: agg.count,
        })
        .collect()
}

/// Build one dataset per model across every day seen.
///
/// Missing (day, model) cells are 0, not gaps: the chart stacks, and a gap
/// would break the column total. An unknown `metric_id` falls back to calls.
pub fn build_model_chart_series(
    aggregates: &[DailyModelAggregate],
    metric_id: &str,
) -> ModelChartSeries {
    let metric = metric_id.parse().unwrap_or(SeriesMetric::Calls);

    let days: Vec<String> = aggregates
        .iter()
        .map(|a| a.day.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    let models: BTreeSet<&str> = aggregates.iter().map(|a| a.model.as_str()).collect();

    let lookup: BTreeMap<(&str, &str), &DailyModelAggregate> = aggregates
        .iter()
        .map(|a| ((a.day.as_str(), a.model.as_str()), a))
        .collect();

    let datasets = models
        .into_iter()
        .enumerate()
        .map(|(index, model)| ModelDataset {
            label: model.to_string(),
            color: MODEL_PALETTE[index % MODEL_PALETTE.len()],
            data: days
                .iter()
                .map(|day| {
                    lookup
                        .get(&(day.as_str(), model))
                        .map(|agg| agg.value(metric))
                        .unwrap_or(0.0)
                })
                .collect(),
        })
        .collect();

    ModelChartSeries {
        axis_title: metric.label().to_string(),
        labels: days,
        datasets,
    }
}
