//! Dashboard controller: load orchestration and re-rendering

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::analytics::{
    build_model_chart_series, build_series_by_metric, compute_kpis, group_by_day,
    group_by_day_and_model,
};
use crate::charts::{ChartFactory, ChartSlot, LineChart, StackedChart};
use crate::config::DashboardSettings;
use crate::notify::Notifier;
use crate::table::{build_row, clamp_page, page_slice, pagination_state, TableRow};
use crate::traces::{TraceRecord, TraceSource};

use super::limit::{validate_limit, LimitInput};
use super::types::{DashboardSnapshot, LoadOutcome};
use super::view::{DashboardView, LoadButton};

/// Everything the controller talks to.
#[derive(Clone)]
pub struct DashboardDeps {
    pub source: Arc<dyn TraceSource>,
    pub view: Arc<dyn DashboardView>,
    pub charts: Arc<dyn ChartFactory>,
    pub notifier: Arc<dyn Notifier>,
}

/// Trace dashboard.
///
/// Holds the last fetched trace list and the pagination cursor. The list is
/// only ever replaced as a whole after a successful fetch; table, KPIs and
/// charts are always recomputed from it.
pub struct Dashboard {
    deps: DashboardDeps,
    settings: DashboardSettings,
    state: Mutex<DashboardState>,
    loading: AtomicBool,
}

struct DashboardState {
    all_items: Vec<TraceRecord>,
    page: usize,
    latency_chart: ChartSlot<dyn LineChart>,
    model_chart: ChartSlot<dyn StackedChart>,
}

/// Clears the loading flag and restores the button however `load` exits.
struct LoadingGuard<'a> {
    dashboard: &'a Dashboard,
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.dashboard.deps.view.set_load_button(LoadButton::Idle);
        self.dashboard.loading.store(false, Ordering::Release);
    }
}

impl Dashboard {
    pub fn new(deps: DashboardDeps, settings: DashboardSettings) -> Self {
        Self {
            deps,
            settings,
            state: Mutex::new(DashboardState {
                all_items: Vec::new(),
                page: 1,
                latency_chart: ChartSlot::empty(),
                model_chart: ChartSlot::empty(),
            }),
            loading: AtomicBool::new(false),
        }
    }

    /// Fetch traces and re-render everything.
    ///
    /// A call made while another load is in flight is dropped with a warning.
    pub async fn load(&self) -> LoadOutcome {
        if self.loading.swap(true, Ordering::AcqRel) {
            tracing::warn!("Load requested while another load is in flight");
            self.deps
                .notifier
                .notify_warning("Already loading data, please wait.");
            return LoadOutcome::Rejected;
        }
        let _guard = LoadingGuard { dashboard: self };

        let limit = match validate_limit(
            &self.deps.view.limit_input(),
            self.settings.default_limit,
            self.settings.max_limit,
        ) {
            LimitInput::Accepted(limit) => limit,
            LimitInput::Corrected(limit) => {
                self.deps.view.set_limit_input(&limit.to_string());
                self.deps.notifier.notify_warning(&format!(
                    "Limit must be a number between 1 and {}. Using default of {}.",
                    self.settings.max_limit, limit
                ));
                limit
            }
        };

        self.deps.view.set_load_button(LoadButton::Loading);

        match self.deps.source.fetch_traces(limit).await {
            Ok(items) => {
                let count = items.len();
                {
                    let mut state = self.lock();
                    state.all_items = items;
                    state.page = 1;
                    self.render_all(&mut state);
                }
                tracing::info!(count, limit, "Dashboard loaded");
                self.deps
                    .notifier
                    .notify_success(&format!("Loaded {} traces", count));
                LoadOutcome::Loaded(count)
            }
            Err(e) => {
                tracing::error!(error = %e, limit, "Failed to load traces");
                let reason = e.to_string();
                self.deps
                    .notifier
                    .notify_error(&format!("Failed to load data: {}", reason));
                LoadOutcome::Failed(reason)
            }
        }
    }

    /// Show `page`, clamped into range. Returns the page actually shown.
    pub fn go_to_page(&self, page: usize) -> usize {
        let mut state = self.lock();
        state.page = clamp_page(page, state.all_items.len(), self.settings.page_size);
        self.render_table(&state);
        state.page
    }

    pub fn next_page(&self) -> usize {
        let current = self.current_page();
        self.go_to_page(current + 1)
    }

    pub fn prev_page(&self) -> usize {
        let current = self.current_page();
        self.go_to_page(current.saturating_sub(1))
    }

    /// Re-draw the time-series chart after the metric picker changed.
    pub fn metric_changed(&self) {
        let mut state = self.lock();
        self.render_time_series(&mut state);
    }

    /// Re-draw the model chart after its metric picker changed.
    pub fn model_metric_changed(&self) {
        let mut state = self.lock();
        self.render_model_chart(&mut state);
    }

    pub fn current_page(&self) -> usize {
        self.lock().page
    }

    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::Acquire)
    }

    /// Copy of the loaded traces.
    pub fn items(&self) -> Vec<TraceRecord> {
        self.lock().all_items.clone()
    }

    /// Everything currently displayed, computed from the held traces.
    pub fn snapshot(&self) -> DashboardSnapshot {
        let state = self.lock();
        let items = &state.all_items;
        DashboardSnapshot {
            kpis: compute_kpis(items),
            pagination: pagination_state(items.len(), state.page, self.settings.page_size),
            rows: self.page_rows(&state),
            series: build_series_by_metric(
                &group_by_day(items),
                &self.deps.view.selected_metric(),
            ),
            model_series: build_model_chart_series(
                &group_by_day_and_model(items),
                &self.deps.view.selected_model_metric(),
            ),
        }
    }

    fn lock(&self) -> MutexGuard<'_, DashboardState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn render_all(&self, state: &mut DashboardState) {
        let kpis = compute_kpis(&state.all_items);
        self.deps.view.set_kpis(&kpis.display());
        self.render_table(state);
        self.render_time_series(state);
        self.render_model_chart(state);
    }

    fn page_rows(&self, state: &DashboardState) -> Vec<TableRow> {
        page_slice(&state.all_items, state.page, self.settings.page_size)
            .iter()
            .map(|trace| build_row(trace, self.settings.preview_chars))
            .collect()
    }

    fn render_table(&self, state: &DashboardState) {
        self.deps.view.render_rows(&self.page_rows(state));
        self.deps.view.set_pagination(&pagination_state(
            state.all_items.len(),
            state.page,
            self.settings.page_size,
        ));
    }

    fn render_time_series(&self, state: &mut DashboardState) {
        if state.all_items.is_empty() {
            state.latency_chart.tear_down();
            self.deps.view.set_charts_visible(false);
            return;
        }
        self.deps.view.set_charts_visible(true);

        let days = group_by_day(&state.all_items);
        let series = build_series_by_metric(&days, &self.deps.view.selected_metric());
        state.latency_chart.show(self.deps.charts.as_ref(), &series);
    }

    fn render_model_chart(&self, state: &mut DashboardState) {
        if state.all_items.is_empty() {
            state.model_chart.tear_down();
            self.deps.view.set_charts_visible(false);
            return;
        }
        self.deps.view.set_charts_visible(true);

        let aggregates = group_by_day_and_model(&state.all_items);
        let series =
            build_model_chart_series(&aggregates, &self.deps.view.selected_model_metric());
        state.model_chart.show(self.deps.charts.as_ref(), &series);
    }
}
