//! The HTTP seam between the backup command and the YNAB API.

mod ynab;

#[cfg(test)]
mod test_client;

use crate::Result;

pub(crate) use ynab::YnabApi;

#[cfg(test)]
pub(crate) use test_client::TestApi;

/// Abstraction over the YNAB HTTP API so that commands can be exercised without a network. The
/// production implementation is [`YnabApi`]; tests use an in-memory implementation.
#[async_trait::async_trait]
pub(crate) trait Api: Send + Sync {
    /// Perform an authenticated GET against `url` and return the full response body. Any non-200
    /// status is an error.
    async fn get(&self, url: &str) -> Result<Vec<u8>>;
}
