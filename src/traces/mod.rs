//! Trace records and the source they are fetched from.

pub mod error;
pub mod fetcher;
mod lenient;
pub mod types;

pub use error::FetchError;
pub use fetcher::{HttpTraceFetcher, TraceSource, TRACES_PATH};
pub use types::{parse_timestamp, TraceRecord, TracesPayload};
