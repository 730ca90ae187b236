//! Runtime settings, resolved once from command-line options and environment.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Url;

use crate::api::client::parse_base_url;
use crate::store::{RESULTS_FILENAME, ResultStore};
use crate::utils::default_cache_dir;

/// Log file name inside the cache directory
pub const LOG_FILENAME: &str = "contact-finder.log";

#[derive(Debug, Clone)]
pub struct Settings {
    pub api_url: Url,
    pub cache_dir: PathBuf,
    pub persist_results: bool,
    pub request_timeout: Option<Duration>,
}

/// Raw option values as they come off the command line
#[derive(Debug, Clone, Default)]
pub struct SettingsInput {
    pub api_url: String,
    pub cache_dir: Option<PathBuf>,
    pub no_persist: bool,
    pub timeout_secs: Option<u64>,
}

impl Settings {
    pub fn resolve(input: SettingsInput) -> Result<Self> {
        let api_url = parse_base_url(&input.api_url)
            .with_context(|| format!("Invalid API URL '{}'", input.api_url))?;

        let cache_dir = match input.cache_dir {
            Some(dir) => dir,
            None => default_cache_dir()?,
        };

        let request_timeout = input.timeout_secs.filter(|s| *s > 0).map(Duration::from_secs);

        Ok(Self { api_url, cache_dir, persist_results: !input.no_persist, request_timeout })
    }

    pub fn results_path(&self) -> PathBuf {
        self.cache_dir.join(RESULTS_FILENAME)
    }

    pub fn log_path(&self) -> PathBuf {
        self.cache_dir.join(LOG_FILENAME)
    }

    /// The result store these settings call for: file-backed unless persistence is off
    pub fn open_store(&self) -> ResultStore {
        if self.persist_results { ResultStore::open(self.results_path()) } else { ResultStore::new() }
    }
}
