//! Shared test utilities for tracedash integration tests.
//!
//! Provides trace builders and recording doubles for every surface the
//! dashboard talks to.

#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;
use tracedash::analytics::{KpiText, MetricSeries, ModelChartSeries};
use tracedash::charts::{ChartFactory, LineChart, StackedChart};
use tracedash::config::DashboardSettings;
use tracedash::dashboard::{Dashboard, DashboardDeps, DashboardView, LoadButton};
use tracedash::notify::{NotificationKind, Notifier};
use tracedash::table::{PaginationState, TableRow};
use tracedash::traces::{FetchError, TraceRecord, TraceSource};

// =============================================================================
// Trace Builders
// =============================================================================

/// Create a trace with the fields the aggregations look at.
pub fn make_trace(time: &str, model: &str, latency_ms: f64, total_tokens: u64) -> TraceRecord {
    TraceRecord {
        id: Some(format!("{}-{}", model, time)),
        time: Some(time.to_string()),
        model: Some(model.to_string()),
        latency_ms: Some(latency_ms),
        total_tokens: Some(total_tokens),
        ..Default::default()
    }
}

/// `count` traces spread over one day, alternating between two models.
pub fn make_traces(count: usize) -> Vec<TraceRecord> {
    (0..count)
        .map(|i| {
            let model = if i % 2 == 0 { "gpt-4" } else { "claude-3" };
            make_trace(
                &format!("2024-03-01T{:02}:{:02}:00Z", (i / 60) % 24, i % 60),
                model,
                100.0 + i as f64,
                10 + i as u64,
            )
        })
        .collect()
}

// =============================================================================
// View
// =============================================================================

#[derive(Default)]
struct ViewState {
    kpis: Option<KpiText>,
    rows: Vec<TableRow>,
    pagination: Option<PaginationState>,
    limit: String,
    buttons: Vec<LoadButton>,
    metric: String,
    model_metric: String,
    charts_visible: Option<bool>,
    row_renders: usize,
}

/// [`DashboardView`] that records everything it is told.
pub struct RecordingView {
    state: Mutex<ViewState>,
}

impl RecordingView {
    pub fn new(limit: &str) -> Self {
        Self {
            state: Mutex::new(ViewState {
                limit: limit.to_string(),
                metric: "avg_latency".to_string(),
                model_metric: "calls".to_string(),
                ..Default::default()
            }),
        }
    }

    pub fn kpis(&self) -> Option<KpiText> {
        self.state.lock().unwrap().kpis.clone()
    }

    pub fn rows(&self) -> Vec<TableRow> {
        self.state.lock().unwrap().rows.clone()
    }

    pub fn row_renders(&self) -> usize {
        self.state.lock().unwrap().row_renders
    }

    pub fn pagination(&self) -> Option<PaginationState> {
        self.state.lock().unwrap().pagination.clone()
    }

    pub fn limit(&self) -> String {
        self.state.lock().unwrap().limit.clone()
    }

    pub fn set_limit(&self, limit: &str) {
        self.state.lock().unwrap().limit = limit.to_string();
    }

    pub fn buttons(&self) -> Vec<LoadButton> {
        self.state.lock().unwrap().buttons.clone()
    }

    pub fn select_metric(&self, metric: &str) {
        self.state.lock().unwrap().metric = metric.to_string();
    }

    pub fn select_model_metric(&self, metric: &str) {
        self.state.lock().unwrap().model_metric = metric.to_string();
    }

    pub fn charts_visible(&self) -> Option<bool> {
        self.state.lock().unwrap().charts_visible
    }
}

impl DashboardView for RecordingView {
    fn set_kpis(&self, kpis: &KpiText) {
        self.state.lock().unwrap().kpis = Some(kpis.clone());
    }

    fn render_rows(&self, rows: &[TableRow]) {
        let mut state = self.state.lock().unwrap();
        state.rows = rows.to_vec();
        state.row_renders += 1;
    }

    fn set_pagination(&self, pagination: &PaginationState) {
        self.state.lock().unwrap().pagination = Some(pagination.clone());
    }

    fn limit_input(&self) -> String {
        self.limit()
    }

    fn set_limit_input(&self, value: &str) {
        self.set_limit(value);
    }

    fn set_load_button(&self, button: LoadButton) {
        self.state.lock().unwrap().buttons.push(button);
    }

    fn selected_metric(&self) -> String {
        self.state.lock().unwrap().metric.clone()
    }

    fn selected_model_metric(&self) -> String {
        self.state.lock().unwrap().model_metric.clone()
    }

    fn set_charts_visible(&self, visible: bool) {
        self.state.lock().unwrap().charts_visible = Some(visible);
    }
}

// =============================================================================
// Notifier
// =============================================================================

/// [`Notifier`] that keeps every message in order.
#[derive(Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<(NotificationKind, String)>>,
}

impl RecordingNotifier {
    pub fn messages(&self) -> Vec<(NotificationKind, String)> {
        self.messages.lock().unwrap().clone()
    }

    pub fn of_kind(&self, kind: NotificationKind) -> Vec<String> {
        self.messages()
            .into_iter()
            .filter(|(k, _)| *k == kind)
            .map(|(_, m)| m)
            .collect()
    }

    fn push(&self, kind: NotificationKind, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push((kind, message.to_string()));
    }
}

impl Notifier for RecordingNotifier {
    fn notify_success(&self, message: &str) {
        self.push(NotificationKind::Success, message);
    }

    fn notify_error(&self, message: &str) {
        self.push(NotificationKind::Error, message);
    }

    fn notify_warning(&self, message: &str) {
        self.push(NotificationKind::Warning, message);
    }

    fn notify_info(&self, message: &str) {
        self.push(NotificationKind::Info, message);
    }
}

// =============================================================================
// Charts
// =============================================================================

/// Lifecycle calls observed on chart instances.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartEvent {
    LineCreated(MetricSeries),
    LineUpdated(MetricSeries),
    LineDestroyed,
    StackedCreated(ModelChartSeries),
    StackedReplaced(ModelChartSeries),
    StackedDestroyed,
}

type EventLog = Arc<Mutex<Vec<ChartEvent>>>;

/// [`ChartFactory`] whose instances log into a shared event list.
#[derive(Default)]
pub struct RecordingCharts {
    events: EventLog,
}

impl RecordingCharts {
    pub fn events(&self) -> Vec<ChartEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn clear(&self) {
        self.events.lock().unwrap().clear();
    }
}

struct RecordingLine {
    events: EventLog,
}

impl LineChart for RecordingLine {
    fn update(&mut self, series: &MetricSeries) {
        self.events
            .lock()
            .unwrap()
            .push(ChartEvent::LineUpdated(series.clone()));
    }

    fn destroy(&mut self) {
        self.events.lock().unwrap().push(ChartEvent::LineDestroyed);
    }
}

struct RecordingStacked {
    events: EventLog,
}

impl StackedChart for RecordingStacked {
    fn replace(&mut self, series: &ModelChartSeries) {
        self.events
            .lock()
            .unwrap()
            .push(ChartEvent::StackedReplaced(series.clone()));
    }

    fn destroy(&mut self) {
        self.events.lock().unwrap().push(ChartEvent::StackedDestroyed);
    }
}

impl ChartFactory for RecordingCharts {
    fn create_line_chart(&self, series: &MetricSeries) -> Box<dyn LineChart> {
        self.events
            .lock()
            .unwrap()
            .push(ChartEvent::LineCreated(series.clone()));
        Box::new(RecordingLine {
            events: Arc::clone(&self.events),
        })
    }

    fn create_stacked_chart(&self, series: &ModelChartSeries) -> Box<dyn StackedChart> {
        self.events
            .lock()
            .unwrap()
            .push(ChartEvent::StackedCreated(series.clone()));
        Box::new(RecordingStacked {
            events: Arc::clone(&self.events),
        })
    }
}

// =============================================================================
// Trace Sources
// =============================================================================

/// Replays queued responses; an empty queue yields an empty list.
#[derive(Default)]
pub struct ScriptedSource {
    responses: Mutex<VecDeque<Result<Vec<TraceRecord>, FetchError>>>,
    limits: Mutex<Vec<u32>>,
}

impl ScriptedSource {
    pub fn with_traces(traces: Vec<TraceRecord>) -> Self {
        let source = Self::default();
        source.push_ok(traces);
        source
    }

    pub fn push_ok(&self, traces: Vec<TraceRecord>) {
        self.responses.lock().unwrap().push_back(Ok(traces));
    }

    pub fn push_err(&self, error: FetchError) {
        self.responses.lock().unwrap().push_back(Err(error));
    }

    /// Limits passed to each fetch, in call order.
    pub fn limits(&self) -> Vec<u32> {
        self.limits.lock().unwrap().clone()
    }
}

#[async_trait]
impl TraceSource for ScriptedSource {
    async fn fetch_traces(&self, limit: u32) -> Result<Vec<TraceRecord>, FetchError> {
        self.limits.lock().unwrap().push(limit);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}

/// Blocks every fetch until the test releases it.
#[derive(Default)]
pub struct GatedSource {
    pub started: Notify,
    pub release: Notify,
    traces: Vec<TraceRecord>,
    calls: Mutex<u32>,
}

impl GatedSource {
    pub fn new(traces: Vec<TraceRecord>) -> Self {
        Self {
            traces,
            ..Default::default()
        }
    }

    pub fn calls(&self) -> u32 {
        *self.calls.lock().unwrap()
    }
}

#[async_trait]
impl TraceSource for GatedSource {
    async fn fetch_traces(&self, _limit: u32) -> Result<Vec<TraceRecord>, FetchError> {
        *self.calls.lock().unwrap() += 1;
        self.started.notify_one();
        self.release.notified().await;
        Ok(self.traces.clone())
    }
}

// =============================================================================
// Dashboard Fixture
// =============================================================================

/// Dashboard wired to recording doubles.
pub struct Harness {
    pub dashboard: Dashboard,
    pub view: Arc<RecordingView>,
    pub notifier: Arc<RecordingNotifier>,
    pub charts: Arc<RecordingCharts>,
}

pub fn harness(source: Arc<dyn TraceSource>, limit: &str) -> Harness {
    harness_with_settings(source, limit, DashboardSettings::default())
}

pub fn harness_with_settings(
    source: Arc<dyn TraceSource>,
    limit: &str,
    settings: DashboardSettings,
) -> Harness {
    let view = Arc::new(RecordingView::new(limit));
    let notifier = Arc::new(RecordingNotifier::default());
    let charts = Arc::new(RecordingCharts::default());

    let dashboard = Dashboard::new(
        DashboardDeps {
            source,
            view: view.clone(),
            charts: charts.clone(),
            notifier: notifier.clone(),
        },
        settings,
    );

    Harness {
        dashboard,
        view,
        notifier,
        charts,
    }
}
