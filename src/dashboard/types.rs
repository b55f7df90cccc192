//! Type definitions for dashboard results

use serde::Serialize;

use crate::analytics::{Kpis, MetricSeries, ModelChartSeries};
use crate::table::{PaginationState, TableRow};

/// Result of a load request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Traces fetched and rendered
    Loaded(usize),
    /// Another load was in flight; nothing happened
    Rejected,
    /// Fetch failed; previous data kept
    Failed(String),
}

/// Point-in-time copy of everything the dashboard shows
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSnapshot {
    pub kpis: Kpis,
    pub pagination: PaginationState,
    pub rows: Vec<TableRow>,
    pub series: MetricSeries,
    pub model_series: ModelChartSeries,
}
