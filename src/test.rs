//! Shared test utilities for creating test environments.
//!
//! This module is only compiled when running tests (`#[cfg(test)]`).

use crate::Config;
use std::path::PathBuf;
use tempfile::TempDir;

/// Test environment with a scratch output directory and a ready-made `Config`. Holds the
/// `TempDir` to keep the directory alive for the duration of the test.
pub(crate) struct TestEnv {
    _temp_dir: TempDir,
    config: Config,
}

impl TestEnv {
    pub(crate) fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("budgets");
        let config = Config::new("testtoken", "https://ynab.test/v1/budgets", &output).unwrap();
        Self {
            _temp_dir: temp_dir,
            config,
        }
    }

    /// Returns a clone of the Config.
    pub(crate) fn config(&self) -> Config {
        self.config.clone()
    }

    /// Lists the files currently in the output directory, sorted by name. Empty when the
    /// directory was never created.
    pub(crate) fn output_files(&self) -> Vec<PathBuf> {
        let mut files: Vec<PathBuf> = match std::fs::read_dir(self.config.output_dir()) {
            Ok(entries) => entries.map(|e| e.unwrap().path()).collect(),
            Err(_) => Vec::new(),
        };
        files.sort();
        files
    }
}
