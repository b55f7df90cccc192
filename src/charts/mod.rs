//! Chart adapter interface
//!
//! The dashboard owns at most one instance per chart. Drawing is delegated to
//! whatever [`ChartFactory`] is injected; the controller only decides when to
//! create, update, replace or destroy.
//!
//! The two charts have different update contracts:
//! - the time-series chart is mutated in place via [`LineChart::update`]
//! - the model chart swaps all datasets via [`StackedChart::replace`], since
//!   the set of models can change from one load to the next

use crate::analytics::{MetricSeries, ModelChartSeries};

/// Time-series line chart instance.
pub trait LineChart: Send {
    /// Overwrite labels, data and series label, then redraw without animation.
    fn update(&mut self, series: &MetricSeries);

    /// Release the instance. It is dropped right after.
    fn destroy(&mut self);
}

/// Stacked per-model chart instance.
pub trait StackedChart: Send {
    /// Replace the whole dataset collection and axis title, then redraw.
    fn replace(&mut self, series: &ModelChartSeries);

    /// Release the instance. It is dropped right after.
    fn destroy(&mut self);
}

/// Creates chart instances bound to the dashboard's chart areas.
pub trait ChartFactory: Send + Sync {
    fn create_line_chart(&self, series: &MetricSeries) -> Box<dyn LineChart>;

    fn create_stacked_chart(&self, series: &ModelChartSeries) -> Box<dyn StackedChart>;
}

/// Holds the optional live instance of one chart.
pub(crate) struct ChartSlot<C: ?Sized> {
    instance: Option<Box<C>>,
}

impl<C: ?Sized> ChartSlot<C> {
    pub(crate) fn empty() -> Self {
        Self { instance: None }
    }

    #[cfg(test)]
    pub(crate) fn is_live(&self) -> bool {
        self.instance.is_some()
    }
}

impl ChartSlot<dyn LineChart> {
    /// Update the live chart in place, or create it on first use.
    pub(crate) fn show(&mut self, factory: &dyn ChartFactory, series: &MetricSeries) {
        match self.instance.as_mut() {
            Some(chart) => chart.update(series),
            None => {
                tracing::debug!(label = %series.label, "Creating time-series chart");
                self.instance = Some(factory.create_line_chart(series));
            }
        }
    }

    pub(crate) fn tear_down(&mut self) {
        if let Some(mut chart) = self.instance.take() {
            tracing::debug!("Destroying time-series chart");
            chart.destroy();
        }
    }
}

impl ChartSlot<dyn StackedChart> {
    /// Replace the live chart's datasets, or create it on first use.
    pub(crate) fn show(&mut self, factory: &dyn ChartFactory, series: &ModelChartSeries) {
        match self.instance.as_mut() {
            Some(chart) => chart.replace(series),
            None => {
                tracing::debug!(models = series.datasets.len(), "Creating model chart");
                self.instance = Some(factory.create_stacked_chart(series));
            }
        }
    }

    pub(crate) fn tear_down(&mut self) {
        if let Some(mut chart) = self.instance.take() {
            tracing::debug!("Destroying model chart");
            chart.destroy();
        }
    }
}
