//! Headline KPIs over the loaded traces

use serde::Serialize;

use crate::traces::TraceRecord;

/// Aggregate KPIs shown above the call table.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Kpis {
    /// Number of traces
    pub total: usize,
    /// Mean latency in milliseconds, 0 when there are no traces
    pub avg_latency_ms: f64,
    /// Mean total tokens per call, 0 when there are no traces
    pub avg_tokens: f64,
}

impl Kpis {
    /// Display text for the three KPI tiles: total, latency, tokens.
    pub fn display(&self) -> KpiText {
        KpiText {
            total: self.total.to_string(),
            avg_latency: format!("{:.1}", self.avg_latency_ms),
            avg_tokens: format!("{:.1}", self.avg_tokens),
        }
    }
}

/// Formatted KPI values, one string per tile.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct KpiText {
    pub total: String,
    pub avg_latency: String,
    pub avg_tokens: String,
}

/// Compute count and means. Missing values count as 0.
pub fn compute_kpis(items: &[TraceRecord]) -> Kpis {
    let total = items.len();
    if total == 0 {
        return Kpis::default();
    }

    let latency_sum: f64 = items.iter().map(|t| t.latency_ms.unwrap_or(0.0)).sum();
    let token_sum: f64 = items
        .iter()
        .map(|t| t.total_tokens.unwrap_or(0) as f64)
        .sum();

    Kpis {
        total,
        avg_latency_ms: latency_sum / total as f64,
        avg_tokens: token_sum / total as f64,
    }
}
