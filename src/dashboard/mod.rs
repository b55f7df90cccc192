//! Trace dashboard controller
//!
//! Fetches traces through an injected [`crate::traces::TraceSource`] and
//! renders, from the same in-memory list:
//! - KPI tiles (total calls, average latency, average tokens)
//! - a paginated call table
//! - a per-day time-series chart and a stacked per-model chart
//!
//! Pagination and metric changes never re-fetch.

pub mod controller;
pub mod limit;
pub mod types;
pub mod view;

pub use controller::{Dashboard, DashboardDeps};
pub use limit::{validate_limit, LimitInput};
pub use types::{DashboardSnapshot, LoadOutcome};
pub use view::{DashboardView, LoadButton};
