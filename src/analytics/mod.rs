//! Aggregations over the in-memory trace list
//!
//! Everything here is pure and recomputed from scratch on each render:
//! - [`compute_kpis`] for the headline tiles
//! - [`group_by_day`] / [`build_series_by_metric`] for the time-series chart
//! - [`group_by_day_and_model`] / [`build_model_chart_series`] for the stacked model chart

pub mod daily;
pub mod kpi;
pub mod model;

pub use daily::{
    build_series_by_metric, group_by_day, DailyAggregate, MetricSeries, SeriesMetric,
    GENERIC_SERIES_LABEL,
};
pub use kpi::{compute_kpis, KpiText, Kpis};
pub use model::{
    build_model_chart_series, group_by_day_and_model, model_label, DailyModelAggregate,
    ModelChartSeries, ModelDataset, MODEL_PALETTE, UNKNOWN_MODEL,
};
