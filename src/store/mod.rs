//! Single-slot hand-off between the search screen and the results screen.
//!
//! [`ResultStore`] holds at most one result list: the most recent completed
//! search. It is owned by whoever drives the workflow (the TUI app or a CLI
//! command) and passed by reference; there is no global slot.
//!
//! Optionally the slot is backed by a JSON file so a restarted client can pick
//! up where it left off:
//! - Linux: `~/.cache/contact-finder/last-results.json`
//! - macOS: `~/Library/Caches/contact-finder/last-results.json`
//! - Windows: `%LOCALAPPDATA%\contact-finder\last-results.json`

pub mod persistence;

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use persistence::{RESULTS_FILENAME, STORE_VERSION, load_results, save_results};

use crate::models::{Company, SearchCriteria};

/// What the slot holds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredResults {
    pub companies: Vec<Company>,
    #[serde(default)]
    pub criteria: Option<SearchCriteria>,
    pub saved_at: DateTime<Utc>,
}

#[derive(Debug, Default)]
pub struct ResultStore {
    slot: Option<StoredResults>,
    backing_file: Option<PathBuf>,
}

impl ResultStore {
    /// In-memory store, gone when the process exits
    pub fn new() -> Self {
        Self::default()
    }

    /// Store backed by `path`, loading whatever a previous run left there.
    ///
    /// A missing, corrupt or outdated file yields an empty slot.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let slot = match load_results(&path) {
            Ok(slot) => slot,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring unreadable results file");
                None
            }
        };

        Self { slot, backing_file: Some(path) }
    }

    pub fn backing_file(&self) -> Option<&Path> {
        self.backing_file.as_deref()
    }

    /// Replace the slot with `companies`
    pub fn put(&mut self, companies: Vec<Company>) {
        self.replace(StoredResults { companies, criteria: None, saved_at: Utc::now() });
    }

    /// Replace the slot with `companies`, remembering the criteria that found them
    pub fn put_search(&mut self, criteria: SearchCriteria, companies: Vec<Company>) {
        self.replace(StoredResults { companies, criteria: Some(criteria), saved_at: Utc::now() });
    }

    /// The stored list, or an empty list when nothing was stored
    pub fn get(&self) -> Vec<Company> {
        self.slot.as_ref().map(|s| s.companies.clone()).unwrap_or_default()
    }

    /// The full slot, including when and for what it was stored
    pub fn current(&self) -> Option<&StoredResults> {
        self.slot.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.slot.as_ref().is_none_or(|s| s.companies.is_empty())
    }

    pub fn clear(&mut self) {
        self.slot = None;
        if let Some(path) = &self.backing_file
            && let Err(e) = persistence::remove_results(path)
        {
            tracing::warn!(path = %path.display(), error = %e, "failed to remove results file");
        }
    }

    fn replace(&mut self, results: StoredResults) {
        if let Some(path) = &self.backing_file
            && let Err(e) = save_results(path, &results)
        {
            // The in-memory slot stays authoritative for this run
            tracing::warn!(path = %path.display(), error = %e, "failed to persist results");
        }
        tracing::debug!(count = results.companies.len(), "result store replaced");
        self.slot = Some(results);
    }
}
