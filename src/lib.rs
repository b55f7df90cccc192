//! tracedash - trace analytics dashboard for LLM API calls
//!
//! Loads recorded calls from a trace service and derives everything the
//! dashboard shows from that one list: KPI tiles, a paginated call table,
//! a per-day time series and a per-model stacked breakdown. Presentation is
//! injected through traits so the same controller drives a browser page, the
//! bundled terminal front-end, or test doubles.

pub mod analytics;
pub mod charts;
pub mod cli;
pub mod config;
pub mod dashboard;
pub mod logging;
pub mod notify;
pub mod table;
pub mod traces;
