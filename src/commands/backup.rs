//! The backup command: list the account's budgets and save each one as a local JSON file.

use crate::api::{Api, YnabApi};
use crate::commands::Out;
use crate::filename::build_filename;
use crate::model::{decode_budgets, BudgetSummary};
use crate::{utils, Config, Result};
use anyhow::Context;
use serde::Serialize;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Structured result of a backup run.
///
/// `processed` counts every budget the run attempted, successful or not, matching the exit-code
/// contract where item failures are warnings rather than errors. `saved` holds the paths that
/// were actually written, so the two can be compared to detect partial failure.
#[derive(Debug, Clone, Serialize)]
pub struct BackupReport {
    processed: usize,
    saved: Vec<PathBuf>,
}

impl BackupReport {
    pub fn processed(&self) -> usize {
        self.processed
    }

    pub fn saved(&self) -> &[PathBuf] {
        &self.saved
    }
}

/// Download every budget in the account to the configured output directory.
pub async fn backup(config: Config) -> Result<Out<BackupReport>> {
    let api = YnabApi::new(config.token());
    backup_with(&api, &config).await
}

/// Runs the backup against any `Api` implementation. Strictly sequential: create the output
/// directory, fetch the list, then fetch and save each budget in list order. The first two
/// phases are fatal on failure; per-budget failures are logged and skipped.
pub(crate) async fn backup_with(api: &dyn Api, config: &Config) -> Result<Out<BackupReport>> {
    debug!("Creating output directory {}", config.output_dir().display());
    utils::create_dir_all(config.output_dir())
        .await
        .context("failed to create output dir")?;

    debug!("Fetching budgets list from {}", config.base_url());
    let budgets = fetch_budgets(api, config).await.context("fetch budgets")?;

    let mut report = BackupReport {
        processed: 0,
        saved: Vec::new(),
    };
    for budget in &budgets {
        debug!("Processing budget {} ({})", budget.name, budget.id);
        match download_and_save(api, config, budget).await {
            Ok(path) => {
                debug!("Saved to {}", path.display());
                report.saved.push(path);
            }
            Err(e) => warn!("{e:#}"),
        }
        report.processed += 1;
    }

    let message = format!("Processed {} budgets", report.processed);
    Ok(Out::new(message, report))
}

/// Fetch and decode the budgets list.
async fn fetch_budgets(api: &dyn Api, config: &Config) -> Result<Vec<BudgetSummary>> {
    let body = api.get(config.base_url()).await?;
    let budgets = decode_budgets(&body)?;
    debug!("Fetched {} budgets", budgets.len());
    Ok(budgets)
}

/// Fetch a single budget's full JSON and write it verbatim to the output directory. Returns the
/// written path.
async fn download_and_save(
    api: &dyn Api,
    config: &Config,
    budget: &BudgetSummary,
) -> Result<PathBuf> {
    let url = config.budget_url(&budget.id);
    let body = api
        .get(&url)
        .await
        .with_context(|| format!("download budget {}", budget.id))?;
    let path = config.output_dir().join(build_filename(budget));
    utils::write(&path, body)
        .await
        .with_context(|| format!("write file for budget {}", budget.id))?;
    Ok(path)
}
