//! Integration tests for the dashboard controller
//!
//! Drives load, pagination and metric changes against recording doubles.

mod common;

use common::{
    harness, harness_with_settings, make_trace, make_traces, ChartEvent, GatedSource,
    ScriptedSource,
};
use std::sync::Arc;
use tracedash::analytics::KpiText;
use tracedash::config::DashboardSettings;
use tracedash::dashboard::{LoadButton, LoadOutcome};
use tracedash::notify::NotificationKind;
use tracedash::traces::FetchError;

const LIMIT_WARNING: &str = "Limit must be a number between 1 and 200. Using default of 50.";

// =============================================================================
// Load
// =============================================================================

#[tokio::test]
async fn test_single_trace_populates_every_widget() {
    let source = Arc::new(ScriptedSource::with_traces(vec![make_trace(
        "2024-01-01T10:00:00Z",
        "gpt-4",
        120.0,
        50,
    )]));
    let h = harness(source.clone(), "50");

    assert_eq!(h.dashboard.load().await, LoadOutcome::Loaded(1));

    assert_eq!(
        h.view.kpis(),
        Some(KpiText {
            total: "1".to_string(),
            avg_latency: "120.0".to_string(),
            avg_tokens: "50.0".to_string(),
        })
    );
    assert_eq!(h.view.rows().len(), 1);
    assert_eq!(h.view.rows()[0].model.text, "gpt-4");
    assert_eq!(h.view.charts_visible(), Some(true));

    let snapshot = h.dashboard.snapshot();
    assert_eq!(snapshot.series.labels, vec!["2024-01-01"]);
    assert_eq!(snapshot.series.data, vec![120.0]);
    assert_eq!(snapshot.model_series.datasets.len(), 1);
    assert_eq!(snapshot.model_series.datasets[0].label, "gpt-4");

    assert_eq!(source.limits(), vec![50]);
    assert_eq!(
        h.notifier.of_kind(NotificationKind::Success),
        vec!["Loaded 1 traces"]
    );
}

#[tokio::test]
async fn test_button_shows_loading_then_idle() {
    let h = harness(Arc::new(ScriptedSource::with_traces(make_traces(3))), "50");

    h.dashboard.load().await;

    assert_eq!(h.view.buttons(), vec![LoadButton::Loading, LoadButton::Idle]);
    assert!(!h.dashboard.is_loading());
}

#[tokio::test]
async fn test_zero_latency_renders_as_number() {
    let source = Arc::new(ScriptedSource::with_traces(vec![make_trace(
        "2024-01-01T10:00:00Z",
        "gpt-4",
        0.0,
        7,
    )]));
    let h = harness(source, "50");

    h.dashboard.load().await;

    let rows = h.view.rows();
    assert_eq!(rows[0].latency.text, "0");
    assert!(!rows[0].latency.is_placeholder());
}

#[tokio::test]
async fn test_empty_result_shows_zero_kpis_and_hides_charts() {
    let h = harness(Arc::new(ScriptedSource::with_traces(Vec::new())), "50");

    assert_eq!(h.dashboard.load().await, LoadOutcome::Loaded(0));

    let kpis = h.view.kpis().unwrap();
    assert_eq!(kpis.total, "0");
    assert_eq!(kpis.avg_latency, "0.0");
    assert_eq!(kpis.avg_tokens, "0.0");
    assert!(h.view.rows().is_empty());
    assert!(!h.view.pagination().unwrap().visible);
    assert_eq!(h.view.charts_visible(), Some(false));
    assert!(h.charts.events().is_empty());
}

#[tokio::test]
async fn test_second_load_while_busy_is_rejected() {
    let source = Arc::new(GatedSource::new(make_traces(4)));
    let h = harness(source.clone(), "50");

    let first = h.dashboard.load();
    let second = async {
        source.started.notified().await;
        assert!(h.dashboard.is_loading());
        let outcome = h.dashboard.load().await;
        source.release.notify_one();
        outcome
    };
    let (first, second) = tokio::join!(first, second);

    assert_eq!(first, LoadOutcome::Loaded(4));
    assert_eq!(second, LoadOutcome::Rejected);
    assert_eq!(source.calls(), 1);
    assert_eq!(
        h.notifier.of_kind(NotificationKind::Warning),
        vec!["Already loading data, please wait."]
    );
    assert_eq!(h.dashboard.items().len(), 4);
    assert!(!h.dashboard.is_loading());
}

#[tokio::test]
async fn test_load_allowed_again_after_completion() {
    let source = Arc::new(ScriptedSource::default());
    source.push_ok(make_traces(2));
    source.push_ok(make_traces(5));
    let h = harness(source.clone(), "50");

    assert_eq!(h.dashboard.load().await, LoadOutcome::Loaded(2));
    assert_eq!(h.dashboard.load().await, LoadOutcome::Loaded(5));
    assert_eq!(source.limits().len(), 2);
}

// =============================================================================
// Limit Validation
// =============================================================================

#[tokio::test]
async fn test_invalid_limits_fall_back_to_default() {
    for raw in ["0", "-5", "abc", "500", "", "12.5"] {
        let source = Arc::new(ScriptedSource::default());
        let h = harness(source.clone(), raw);

        h.dashboard.load().await;

        assert_eq!(source.limits(), vec![50], "limit input {:?}", raw);
        assert_eq!(h.view.limit(), "50", "limit input {:?}", raw);
        assert_eq!(
            h.notifier.of_kind(NotificationKind::Warning),
            vec![LIMIT_WARNING],
            "limit input {:?}",
            raw
        );
    }
}

#[tokio::test]
async fn test_boundary_limits_accepted() {
    for (raw, expected) in [("1", 1), ("200", 200), (" 75 ", 75)] {
        let source = Arc::new(ScriptedSource::default());
        let h = harness(source.clone(), raw);

        h.dashboard.load().await;

        assert_eq!(source.limits(), vec![expected]);
        assert!(h.notifier.of_kind(NotificationKind::Warning).is_empty());
    }
}

#[tokio::test]
async fn test_limit_bounds_follow_settings() {
    let settings = DashboardSettings {
        default_limit: 20,
        max_limit: 100,
        ..Default::default()
    };
    let source = Arc::new(ScriptedSource::default());
    let h = harness_with_settings(source.clone(), "150", settings);

    h.dashboard.load().await;

    assert_eq!(source.limits(), vec![20]);
    assert_eq!(
        h.notifier.of_kind(NotificationKind::Warning),
        vec!["Limit must be a number between 1 and 100. Using default of 20."]
    );
}

// =============================================================================
// Failures
// =============================================================================

#[tokio::test]
async fn test_failed_load_keeps_previous_data() {
    let source = Arc::new(ScriptedSource::default());
    source.push_ok(make_traces(3));
    source.push_err(FetchError::Status { status: 500 });
    let h = harness(source, "50");

    h.dashboard.load().await;
    let kpis_before = h.view.kpis();

    let outcome = h.dashboard.load().await;

    assert_eq!(
        outcome,
        LoadOutcome::Failed("HTTP error! status: 500".to_string())
    );
    assert_eq!(h.dashboard.items().len(), 3);
    assert_eq!(h.view.kpis(), kpis_before);
    assert_eq!(
        h.notifier.of_kind(NotificationKind::Error),
        vec!["Failed to load data: HTTP error! status: 500"]
    );
    assert_eq!(h.view.buttons().last(), Some(&LoadButton::Idle));
    assert!(!h.dashboard.is_loading());
}

#[tokio::test]
async fn test_failed_first_load_leaves_dashboard_empty() {
    let source = Arc::new(ScriptedSource::default());
    source.push_err(FetchError::Status { status: 404 });
    let h = harness(source, "50");

    assert!(matches!(h.dashboard.load().await, LoadOutcome::Failed(_)));
    assert!(h.dashboard.items().is_empty());
    assert!(h.view.kpis().is_none());
    assert!(h.notifier.of_kind(NotificationKind::Success).is_empty());
}

// =============================================================================
// Pagination
// =============================================================================

#[tokio::test]
async fn test_pagination_walks_pages_without_refetching() {
    let source = Arc::new(ScriptedSource::with_traces(make_traces(25)));
    let h = harness(source.clone(), "50");
    h.dashboard.load().await;

    assert_eq!(h.view.rows().len(), 10);
    assert_eq!(h.view.pagination().unwrap().label(), "Page 1 of 3");
    assert!(h.view.pagination().unwrap().prev_disabled);

    assert_eq!(h.dashboard.next_page(), 2);
    assert_eq!(h.dashboard.next_page(), 3);
    assert_eq!(h.view.rows().len(), 5);
    assert!(h.view.pagination().unwrap().next_disabled);

    // Stays on the last page
    assert_eq!(h.dashboard.next_page(), 3);
    assert_eq!(h.dashboard.prev_page(), 2);

    assert_eq!(source.limits().len(), 1);
}

#[tokio::test]
async fn test_go_to_page_clamps() {
    let h = harness(Arc::new(ScriptedSource::with_traces(make_traces(25))), "50");
    h.dashboard.load().await;

    assert_eq!(h.dashboard.go_to_page(0), 1);
    assert_eq!(h.dashboard.go_to_page(99), 3);
    assert_eq!(h.dashboard.prev_page(), 2);
    assert_eq!(h.dashboard.go_to_page(1), 1);
    assert_eq!(h.dashboard.prev_page(), 1);
}

#[tokio::test]
async fn test_reload_resets_to_first_page() {
    let source = Arc::new(ScriptedSource::default());
    source.push_ok(make_traces(25));
    source.push_ok(make_traces(25));
    let h = harness(source, "50");

    h.dashboard.load().await;
    h.dashboard.go_to_page(3);
    h.dashboard.load().await;

    assert_eq!(h.dashboard.current_page(), 1);
    assert_eq!(h.view.pagination().unwrap().label(), "Page 1 of 3");
}

#[tokio::test]
async fn test_single_page_hides_pagination() {
    let h = harness(Arc::new(ScriptedSource::with_traces(make_traces(10))), "50");
    h.dashboard.load().await;

    assert!(!h.view.pagination().unwrap().visible);
}

// =============================================================================
// Charts
// =============================================================================

#[tokio::test]
async fn test_chart_lifecycle_across_loads() {
    let source = Arc::new(ScriptedSource::default());
    source.push_ok(make_traces(4));
    source.push_ok(make_traces(6));
    source.push_ok(Vec::new());
    source.push_ok(make_traces(2));
    let h = harness(source, "50");

    h.dashboard.load().await;
    let events = h.charts.events();
    assert!(matches!(
        events[..],
        [ChartEvent::LineCreated(_), ChartEvent::StackedCreated(_)]
    ));

    h.charts.clear();
    h.dashboard.load().await;
    let events = h.charts.events();
    assert!(matches!(
        events[..],
        [ChartEvent::LineUpdated(_), ChartEvent::StackedReplaced(_)]
    ));

    h.charts.clear();
    h.dashboard.load().await;
    assert_eq!(
        h.charts.events(),
        vec![ChartEvent::LineDestroyed, ChartEvent::StackedDestroyed]
    );
    assert_eq!(h.view.charts_visible(), Some(false));

    h.charts.clear();
    h.dashboard.load().await;
    let events = h.charts.events();
    assert!(matches!(
        events[..],
        [ChartEvent::LineCreated(_), ChartEvent::StackedCreated(_)]
    ));
    assert_eq!(h.view.charts_visible(), Some(true));
}

#[tokio::test]
async fn test_metric_change_updates_line_chart_only() {
    let source = Arc::new(ScriptedSource::with_traces(vec![
        make_trace("2024-01-01T10:00:00Z", "gpt-4", 100.0, 10),
        make_trace("2024-01-01T11:00:00Z", "gpt-4", 300.0, 30),
    ]));
    let h = harness(source.clone(), "50");
    h.dashboard.load().await;
    h.charts.clear();

    h.view.select_metric("tokens");
    h.dashboard.metric_changed();

    match &h.charts.events()[..] {
        [ChartEvent::LineUpdated(series)] => {
            assert_eq!(series.label, "Tokens");
            assert_eq!(series.data, vec![40.0]);
        }
        other => panic!("unexpected chart events: {:?}", other),
    }
    assert_eq!(source.limits().len(), 1);
}

#[tokio::test]
async fn test_unknown_metric_draws_empty_series() {
    let h = harness(Arc::new(ScriptedSource::with_traces(make_traces(3))), "50");
    h.dashboard.load().await;
    h.charts.clear();

    h.view.select_metric("p99");
    h.dashboard.metric_changed();

    match &h.charts.events()[..] {
        [ChartEvent::LineUpdated(series)] => {
            assert_eq!(series.label, "Value");
            assert!(series.data.is_empty());
        }
        other => panic!("unexpected chart events: {:?}", other),
    }
}

#[tokio::test]
async fn test_model_metric_change_replaces_stacked_chart() {
    let source = Arc::new(ScriptedSource::with_traces(vec![
        make_trace("2024-01-01T10:00:00Z", "gpt-4", 100.0, 10),
        make_trace("2024-01-01T11:00:00Z", "claude-3", 200.0, 20),
        make_trace("2024-01-02T09:00:00Z", "gpt-4", 300.0, 30),
    ]));
    let h = harness(source, "50");
    h.dashboard.load().await;
    h.charts.clear();

    h.view.select_model_metric("tokens");
    h.dashboard.model_metric_changed();

    match &h.charts.events()[..] {
        [ChartEvent::StackedReplaced(series)] => {
            assert_eq!(series.axis_title, "Tokens");
            assert_eq!(series.labels, vec!["2024-01-01", "2024-01-02"]);
            let labels: Vec<_> = series.datasets.iter().map(|d| d.label.as_str()).collect();
            assert_eq!(labels, vec!["claude-3", "gpt-4"]);
            assert_eq!(series.datasets[0].data, vec![20.0, 0.0]);
            assert_eq!(series.datasets[1].data, vec![10.0, 30.0]);
        }
        other => panic!("unexpected chart events: {:?}", other),
    }
}

#[tokio::test]
async fn test_metric_change_before_load_draws_nothing() {
    let h = harness(Arc::new(ScriptedSource::default()), "50");

    h.dashboard.metric_changed();
    h.dashboard.model_metric_changed();

    assert!(h.charts.events().is_empty());
    assert_eq!(h.view.charts_visible(), Some(false));
}
