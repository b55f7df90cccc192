//! Rendering surface the dashboard draws into

use crate::analytics::KpiText;
use crate::table::{PaginationState, TableRow};

/// State of the load button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadButton {
    Idle,
    Loading,
}

impl LoadButton {
    pub fn label(&self) -> &'static str {
        match self {
            LoadButton::Idle => "Load",
            LoadButton::Loading => "Loading...",
        }
    }

    pub fn disabled(&self) -> bool {
        matches!(self, LoadButton::Loading)
    }
}

/// Widgets of the dashboard page.
///
/// Implementations own their widget state (inputs, selections) and are
/// called synchronously by the controller. They must not call back into it.
pub trait DashboardView: Send + Sync {
    /// KPI tiles: total calls, average latency, average tokens.
    fn set_kpis(&self, kpis: &KpiText);

    /// Replace the visible table body.
    fn render_rows(&self, rows: &[TableRow]);

    fn set_pagination(&self, state: &PaginationState);

    /// Raw text of the limit input.
    fn limit_input(&self) -> String;

    fn set_limit_input(&self, value: &str);

    fn set_load_button(&self, state: LoadButton);

    /// Identifier selected in the time-series metric picker.
    fn selected_metric(&self) -> String;

    /// Identifier selected in the model chart metric picker.
    fn selected_model_metric(&self) -> String;

    /// Show or hide the container holding both charts.
    fn set_charts_visible(&self, visible: bool);
}
