//! Output formatting helpers for the terminal dashboard

use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, ContentArrangement, Table};
use std::fmt::Write;

use crate::analytics::{KpiText, MetricSeries, ModelChartSeries};
use crate::notify::{Notification, NotificationKind};
use crate::table::{format_number, PaginationState, TableRow};

/// Width of the longest bar in text charts
const BAR_WIDTH: usize = 40;

/// Format the three KPI tiles on one line
pub fn format_kpis(kpis: &KpiText) -> String {
    format!(
        "{} {}   {} {} ms   {} {}",
        "Total calls:".bold(),
        kpis.total,
        "Avg latency:".bold(),
        kpis.avg_latency,
        "Avg tokens:".bold(),
        kpis.avg_tokens
    )
}

/// Format the visible page of calls as a table
pub fn format_rows_table(rows: &[TableRow]) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        "Time", "Model", "Latency (ms)", "Tokens", "Input", "Output",
    ]);

    for row in rows {
        table.add_row(vec![
            Cell::new(&row.time.text),
            Cell::new(&row.model.text),
            Cell::new(&row.latency.text),
            Cell::new(format!("{}\n{}", row.tokens.text, row.token_detail.dimmed())),
            Cell::new(&row.input.text),
            Cell::new(&row.output.text),
        ]);
    }

    table.to_string()
}

/// `Page X of Y` with prev/next hints; empty when pagination is hidden
pub fn format_pagination(state: &PaginationState) -> String {
    if !state.visible {
        return String::new();
    }

    let prev = if state.prev_disabled {
        "‹ prev".dimmed().to_string()
    } else {
        "‹ prev".to_string()
    };
    let next = if state.next_disabled {
        "next ›".dimmed().to_string()
    } else {
        "next ›".to_string()
    };

    format!("{}   {}   {}", prev, state.label(), next)
}

/// Horizontal bar chart, one bar per day
pub fn format_line_chart(series: &MetricSeries) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "{}", series.label.bold());

    if series.is_empty() {
        let _ = writeln!(output, "  (no data)");
        return output;
    }

    let max = series.data.iter().cloned().fold(0.0_f64, f64::max);
    for (label, value) in series.labels.iter().zip(&series.data) {
        let _ = writeln!(
            output,
            "  {}  {} {}",
            label,
            bar(*value, max).cyan(),
            format_number(*value)
        );
    }

    output
}

/// Stacked chart rendered as one line per day with per-model segments
pub fn format_model_chart(series: &ModelChartSeries) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "{} by model", series.axis_title.bold());

    if series.datasets.is_empty() {
        let _ = writeln!(output, "  (no data)");
        return output;
    }

    for (day_idx, day) in series.labels.iter().enumerate() {
        let segments: Vec<String> = series
            .datasets
            .iter()
            .filter_map(|ds| {
                let value = ds.data.get(day_idx).copied().unwrap_or(0.0);
                (value > 0.0).then(|| format!("{}={}", ds.label, format_number(value)))
            })
            .collect();
        let total: f64 = series
            .datasets
            .iter()
            .map(|ds| ds.data.get(day_idx).copied().unwrap_or(0.0))
            .sum();

        let _ = writeln!(
            output,
            "  {}  total {}  [{}]",
            day,
            format_number(total),
            segments.join(", ")
        );
    }

    output
}

/// One-line toast: icon, title, message, colored by kind
pub fn format_toast(toast: &Notification) -> String {
    let head = format!("{} {}", toast.kind.icon(), toast.title);
    let head = match toast.kind {
        NotificationKind::Success => head.green(),
        NotificationKind::Error => head.red(),
        NotificationKind::Warning => head.yellow(),
        NotificationKind::Info => head.cyan(),
    };
    format!("{}: {}", head.bold(), toast.message)
}

fn bar(value: f64, max: f64) -> String {
    if max <= 0.0 || value <= 0.0 {
        return String::new();
    }
    let len = ((value / max) * BAR_WIDTH as f64).round().max(1.0) as usize;
    "█".repeat(len)
}
