//! HTTP trace source.

use async_trait::async_trait;

use super::error::FetchError;
use super::types::{TraceRecord, TracesPayload};

/// Path of the trace listing endpoint, relative to the API base URL.
pub const TRACES_PATH: &str = "/api/traces";

/// Anything that can produce a list of traces for a given limit.
///
/// The dashboard only talks to this trait, so tests can swap the HTTP client
/// for an in-memory source.
#[async_trait]
pub trait TraceSource: Send + Sync {
    /// Fetch at most `limit` traces, newest first as ordered by the server.
    async fn fetch_traces(&self, limit: u32) -> Result<Vec<TraceRecord>, FetchError>;
}

/// [`TraceSource`] backed by `GET {base_url}/api/traces?limit=N`.
pub struct HttpTraceFetcher {
    client: reqwest::Client,
    base_url: String,
    bearer_token: Option<String>,
}

impl HttpTraceFetcher {
    /// Create a fetcher with a default HTTP client.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, reqwest::Client::new())
    }

    /// Create a fetcher with a custom HTTP client (for testing).
    pub fn with_client(base_url: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            bearer_token: None,
        }
    }

    /// Send `Authorization: Bearer <token>` with every request.
    pub fn with_bearer_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }

    /// Full URL of the trace endpoint.
    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, TRACES_PATH)
    }
}

#[async_trait]
impl TraceSource for HttpTraceFetcher {
    async fn fetch_traces(&self, limit: u32) -> Result<Vec<TraceRecord>, FetchError> {
        let url = self.endpoint();
        tracing::debug!(url = %url, limit, "Fetching traces");

        let mut request = self.client.get(&url).query(&[("limit", limit)]);
        if let Some(token) = &self.bearer_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "Trace endpoint returned error status");
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let records = serde_json::from_str::<TracesPayload>(&body)?.into_records();
        tracing::info!(count = records.len(), "Fetched traces");

        Ok(records)
    }
}
