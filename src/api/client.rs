//! HTTP client for the recent-callers endpoint.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::Client;

use super::error::SyncError;
use super::source::RecentCallersSource;
use crate::callers::RecentResponse;
use crate::config::ApiConfig;

/// reqwest-backed [`RecentCallersSource`].
///
/// Issues a bare `GET` with no query, body, or auth headers.
pub struct CallerApi {
    client: Client,
    url: String,
}

impl CallerApi {
    /// Create a client from API configuration.
    ///
    /// The connect timeout is always applied; a total timeout only when
    /// `timeout_seconds` is set.
    pub fn from_config(config: &ApiConfig) -> Result<Self, SyncError> {
        let mut builder = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds as u64));

        if let Some(secs) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(secs as u64));
        }

        let client = builder.build().map_err(SyncError::Client)?;

        Ok(Self {
            client,
            url: config.recent_url(),
        })
    }

    /// Get the resource URL.
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl RecentCallersSource for CallerApi {
    async fn fetch_recent(&self) -> Result<RecentResponse, SyncError> {
        tracing::debug!(url = %self.url, "Fetching recent callers");

        let start = Instant::now();
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|source| SyncError::Transport {
                url: self.url.clone(),
                source,
            })?;

        let latency_ms = start.elapsed().as_millis() as u64;
        let status = response.status();

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());

            tracing::error!(
                status = %status,
                latency_ms,
                error = %body,
                "Recent callers request failed"
            );

            return Err(SyncError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let text = response
            .text()
            .await
            .map_err(|source| SyncError::Transport {
                url: self.url.clone(),
                source,
            })?;

        tracing::debug!(
            status = %status,
            latency_ms,
            bytes = text.len(),
            "Got recent callers response"
        );

        Ok(serde_json::from_str(&text)?)
    }
}
