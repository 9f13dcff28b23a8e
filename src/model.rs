//! Data structures for the budgets list endpoint.
//!
//! Budget detail documents are deliberately never modeled here. They are opaque to this program
//! and get written to disk byte-for-byte as received.

use crate::Result;
use anyhow::Context;
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// One entry from the budgets list endpoint. The `id` is opaque and API-assigned; the `name` is
/// user-chosen and can contain arbitrary Unicode.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub(crate) struct BudgetSummary {
    pub(crate) id: String,
    pub(crate) name: String,
    pub(crate) last_modified_on: DateTime<Utc>,
}

/// The envelope the list endpoint wraps its payload in.
#[derive(Debug, Deserialize)]
struct ListResponse {
    data: ListData,
}

#[derive(Debug, Deserialize)]
struct ListData {
    budgets: Vec<BudgetSummary>,
}

/// Decode the budgets list envelope `{"data":{"budgets":[...]}}`.
///
/// The summaries are returned in server order. No sorting, dedup or filtering happens on the
/// client side.
pub(crate) fn decode_budgets(body: &[u8]) -> Result<Vec<BudgetSummary>> {
    let response: ListResponse =
        serde_json::from_slice(body).context("Failed to decode budgets list response")?;
    Ok(response.data.budgets)
}
