//! Implements the `Api` trait against the real YNAB HTTP API using `reqwest`.

use crate::api::Api;
use crate::Result;
use anyhow::{bail, Context};
use reqwest::StatusCode;
use tracing::trace;

/// Talks to the YNAB API with bearer-token authentication. The inner `reqwest::Client` pools
/// connections and releases the response stream when the response is dropped, on every exit
/// path. Timeouts are the client's defaults; nothing is configured separately.
pub(crate) struct YnabApi {
    http: reqwest::Client,
    token: String,
}

impl YnabApi {
    pub(crate) fn new(token: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            token: token.into(),
        }
    }
}

#[async_trait::async_trait]
impl Api for YnabApi {
    async fn get(&self, url: &str) -> Result<Vec<u8>> {
        trace!("GET {url}");
        let response = self
            .http
            .get(url)
            .bearer_auth(&self.token)
            .send()
            .await
            .with_context(|| format!("Request to {url} failed"))?;

        // The API contract is 200-only; other 2xx codes are unexpected here too.
        if response.status() != StatusCode::OK {
            bail!("bad status: {}", response.status().as_u16());
        }

        let body = response
            .bytes()
            .await
            .with_context(|| format!("Failed to read response body from {url}"))?;
        Ok(body.to_vec())
    }
}
