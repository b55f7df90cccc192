//! Terminal implementations of the dashboard's view, chart and toast surfaces
//!
//! Widgets write into a shared [`Frame`]; `tracedash show` prints the frame once
//! loading and navigation are done. Toasts go straight to stderr.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::analytics::{KpiText, MetricSeries, ModelChartSeries};
use crate::charts::{ChartFactory, LineChart, StackedChart};
use crate::cli::output::{
    format_kpis, format_line_chart, format_model_chart, format_pagination, format_rows_table,
    format_toast,
};
use crate::dashboard::{DashboardView, LoadButton};
use crate::notify::{Notification, ToastId, ToastSurface};
use crate::table::{PaginationState, TableRow};

/// Last rendered content of every widget.
#[derive(Debug, Default)]
pub struct Frame {
    kpis: Option<KpiText>,
    rows: Vec<TableRow>,
    pagination: Option<PaginationState>,
    charts_visible: bool,
    line_chart: Option<String>,
    model_chart: Option<String>,
}

type SharedFrame = Arc<Mutex<Frame>>;

fn lock(frame: &SharedFrame) -> MutexGuard<'_, Frame> {
    frame.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// [`DashboardView`] backed by CLI arguments and a text frame.
pub struct TerminalView {
    limit: Mutex<String>,
    metric: String,
    model_metric: String,
    frame: SharedFrame,
}

impl TerminalView {
    pub fn new(
        limit: impl Into<String>,
        metric: impl Into<String>,
        model_metric: impl Into<String>,
    ) -> Self {
        Self {
            limit: Mutex::new(limit.into()),
            metric: metric.into(),
            model_metric: model_metric.into(),
            frame: Arc::new(Mutex::new(Frame::default())),
        }
    }

    /// Chart factory drawing into this view's frame.
    pub fn chart_factory(&self) -> TerminalCharts {
        TerminalCharts {
            frame: Arc::clone(&self.frame),
        }
    }

    /// Compose the current frame.
    pub fn render(&self) -> String {
        let frame = lock(&self.frame);
        let mut sections = Vec::new();

        if let Some(kpis) = &frame.kpis {
            sections.push(format_kpis(kpis));
        }
        sections.push(format_rows_table(&frame.rows));
        if let Some(pagination) = &frame.pagination {
            let line = format_pagination(pagination);
            if !line.is_empty() {
                sections.push(line);
            }
        }
        if frame.charts_visible {
            sections.extend(frame.line_chart.clone());
            sections.extend(frame.model_chart.clone());
        }

        sections.join("\n\n")
    }
}

impl DashboardView for TerminalView {
    fn set_kpis(&self, kpis: &KpiText) {
        lock(&self.frame).kpis = Some(kpis.clone());
    }

    fn render_rows(&self, rows: &[TableRow]) {
        lock(&self.frame).rows = rows.to_vec();
    }

    fn set_pagination(&self, state: &PaginationState) {
        lock(&self.frame).pagination = Some(state.clone());
    }

    fn limit_input(&self) -> String {
        self.limit
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    fn set_limit_input(&self, value: &str) {
        *self.limit.lock().unwrap_or_else(|poisoned| poisoned.into_inner()) = value.to_string();
    }

    fn set_load_button(&self, state: LoadButton) {
        tracing::debug!(label = state.label(), disabled = state.disabled(), "Load button");
    }

    fn selected_metric(&self) -> String {
        self.metric.clone()
    }

    fn selected_model_metric(&self) -> String {
        self.model_metric.clone()
    }

    fn set_charts_visible(&self, visible: bool) {
        lock(&self.frame).charts_visible = visible;
    }
}

/// Creates text charts inside a [`TerminalView`] frame.
pub struct TerminalCharts {
    frame: SharedFrame,
}

impl ChartFactory for TerminalCharts {
    fn create_line_chart(&self, series: &MetricSeries) -> Box<dyn LineChart> {
        let mut chart = TextLineChart {
            frame: Arc::clone(&self.frame),
        };
        chart.update(series);
        Box::new(chart)
    }

    fn create_stacked_chart(&self, series: &ModelChartSeries) -> Box<dyn StackedChart> {
        let mut chart = TextStackedChart {
            frame: Arc::clone(&self.frame),
        };
        chart.replace(series);
        Box::new(chart)
    }
}

struct TextLineChart {
    frame: SharedFrame,
}

impl LineChart for TextLineChart {
    fn update(&mut self, series: &MetricSeries) {
        lock(&self.frame).line_chart = Some(format_line_chart(series));
    }

    fn destroy(&mut self) {
        lock(&self.frame).line_chart = None;
    }
}

struct TextStackedChart {
    frame: SharedFrame,
}

impl StackedChart for TextStackedChart {
    fn replace(&mut self, series: &ModelChartSeries) {
        lock(&self.frame).model_chart = Some(format_model_chart(series));
    }

    fn destroy(&mut self) {
        lock(&self.frame).model_chart = None;
    }
}

/// Prints toasts to stderr as they appear.
#[derive(Debug, Default)]
pub struct TerminalToasts;

impl ToastSurface for TerminalToasts {
    fn mount(&self, toast: &Notification) {
        eprintln!("{}", format_toast(toast));
    }

    fn begin_exit(&self, id: ToastId) {
        tracing::trace!(toast = %id, "Toast leaving");
    }

    fn remove(&self, id: ToastId) {
        tracing::trace!(toast = %id, "Toast removed");
    }
}
