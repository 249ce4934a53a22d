//! HTTP client for the fleet backend REST API.

pub mod hosted;
pub mod models;
pub mod nodes;

use std::time::Duration;
use thiserror::Error;

/// Bounded per-request timeout. The backend normally answers in
/// milliseconds; a node whose usage probe hangs must not stall the
/// whole aggregation cycle indefinitely.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("node list unavailable: {0}")]
    NodeListUnavailable(String),
    #[error("mutation failed: {0}")]
    MutationFailed(String),
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}

/// Client for one backend endpoint. Cheap to clone; all calls share the
/// underlying connection pool.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap(); // Should not fail with default settings

        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}
