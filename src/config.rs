//! Configuration for a backup run.

use crate::Result;
use anyhow::Context;
use std::path::{Path, PathBuf};
use url::Url;

/// Holds everything a backup run needs: the bearer token, the base budgets URL and the output
/// directory. Immutable after construction; cheap to clone.
#[derive(Debug, Clone)]
pub struct Config {
    token: String,
    base_url: Url,
    output_dir: PathBuf,
}

impl Config {
    /// Create a `Config`, validating the base URL.
    pub fn new(
        token: impl Into<String>,
        base_url: &str,
        output_dir: impl Into<PathBuf>,
    ) -> Result<Self> {
        let base_url =
            Url::parse(base_url).with_context(|| format!("Invalid base URL '{base_url}'"))?;
        Ok(Self {
            token: token.into(),
            base_url,
            output_dir: output_dir.into(),
        })
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    /// The budgets list endpoint.
    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// The detail endpoint for a single budget, `<base_url>/<id>`.
    pub fn budget_url(&self, id: &str) -> String {
        format!("{}/{}", self.base_url.as_str().trim_end_matches('/'), id)
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}
