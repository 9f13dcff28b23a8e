//! Implements the very simple `Api` trait using in-memory data for testing purposes.

use crate::api::Api;
use crate::Result;
use anyhow::bail;
use std::collections::HashMap;

/// What the [`TestApi`] should answer for a given URL.
#[derive(Debug, Clone)]
pub(crate) enum TestResponse {
    /// A 200 with this body.
    Body(Vec<u8>),
    /// A non-200 status with an empty body.
    Status(u16),
}

/// An implementation of the `Api` trait that serves canned responses from memory. URLs with no
/// registered response behave like a transport failure.
#[derive(Debug, Default)]
pub(crate) struct TestApi {
    responses: HashMap<String, TestResponse>,
}

impl TestApi {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Register a 200 response with `body` for `url`.
    pub(crate) fn with_body(mut self, url: impl Into<String>, body: impl Into<Vec<u8>>) -> Self {
        self.responses
            .insert(url.into(), TestResponse::Body(body.into()));
        self
    }

    /// Register a non-200 `status` for `url`.
    pub(crate) fn with_status(mut self, url: impl Into<String>, status: u16) -> Self {
        self.responses
            .insert(url.into(), TestResponse::Status(status));
        self
    }
}

#[async_trait::async_trait]
impl Api for TestApi {
    async fn get(&self, url: &str) -> Result<Vec<u8>> {
        match self.responses.get(url) {
            Some(TestResponse::Body(body)) => Ok(body.clone()),
            Some(TestResponse::Status(status)) => bail!("bad status: {status}"),
            None => bail!("no route to {url}"),
        }
    }
}
