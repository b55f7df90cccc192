//! Dashboard behaviour configuration

use serde::{Deserialize, Serialize};

/// Largest `limit` the trace endpoint serves.
pub const API_MAX_LIMIT: u32 = 200;

/// Load limits and table layout
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardSettings {
    /// Limit used when the requested one is invalid
    pub default_limit: u32,
    /// Largest accepted limit, at most [`API_MAX_LIMIT`]
    pub max_limit: u32,
    /// Rows per table page
    pub page_size: usize,
    /// Characters shown for input/output previews
    pub preview_chars: usize,
    /// Initial time-series metric
    pub metric: String,
    /// Initial model chart metric
    pub model_metric: String,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            default_limit: 50,
            max_limit: API_MAX_LIMIT,
            page_size: crate::table::DEFAULT_PAGE_SIZE,
            preview_chars: crate::table::DEFAULT_PREVIEW_CHARS,
            metric: "avg_latency".to_string(),
            model_metric: "calls".to_string(),
        }
    }
}
