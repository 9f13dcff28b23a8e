//! These structs provide the CLI interface for the ynab-backup CLI.

use clap::Parser;
use std::path::{Path, PathBuf};

/// The default list endpoint of the YNAB v1 API.
pub const DEFAULT_URL: &str = "https://api.youneedabudget.com/v1/budgets";

/// ynab-backup: download all of your YNAB budgets to local JSON files.
///
/// The purpose of this program is to fetch the list of budgets belonging to your YNAB (see
/// https://ynab.com) account and save each budget's full JSON document to a local directory,
/// one timestamped file per budget.
///
/// You will need a YNAB personal access token for this. Generate one in the YNAB web app under
/// Account Settings > Developer Settings and pass it with --token or the YNAB_BEARER_TOKEN
/// environment variable.
#[derive(Debug, Parser, Clone)]
pub struct Args {
    /// The YNAB API bearer token. Falls back to the YNAB_BEARER_TOKEN environment variable when
    /// the flag is not given.
    #[arg(long, env = "YNAB_BEARER_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// The directory where budget JSON files are written.
    #[arg(long, default_value = "budgets")]
    output: PathBuf,

    /// The base API URL for the budgets endpoint.
    #[arg(long, default_value = DEFAULT_URL)]
    url: String,

    /// Enable verbose logging to stderr. Without this flag the program is silent except for fatal
    /// errors. This can be overridden by RUST_LOG, see the tracing-subscriber crate.
    #[arg(long)]
    verbose: bool,
}

impl Args {
    pub fn new(
        token: Option<String>,
        output: impl Into<PathBuf>,
        url: impl Into<String>,
        verbose: bool,
    ) -> Self {
        Self {
            token,
            output: output.into(),
            url: url.into(),
            verbose,
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }
}
