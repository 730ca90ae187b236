//! Results file load/save with atomic writes

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::StoredResults;

/// Schema version for invalidation on format changes
pub const STORE_VERSION: u32 = 1;

pub const RESULTS_FILENAME: &str = "last-results.json";

#[derive(Serialize, Deserialize)]
struct ResultsFile {
    version: u32,
    #[serde(flatten)]
    results: StoredResults,
}

#[derive(Deserialize)]
struct VersionHeader {
    version: u32,
}

/// Load stored results.
/// Returns None if the file is missing or was written by an incompatible version.
pub fn load_results(path: &Path) -> Result<Option<StoredResults>> {
    if !path.exists() {
        return Ok(None);
    }

    let json = fs::read_to_string(path).context("Failed to read results file")?;

    let header: VersionHeader = serde_json::from_str(&json).context("Failed to parse results file")?;
    if header.version != STORE_VERSION {
        tracing::warn!(
            expected = STORE_VERSION,
            found = header.version,
            "results file version mismatch, starting empty"
        );
        return Ok(None);
    }

    let file: ResultsFile = serde_json::from_str(&json).context("Failed to parse results file")?;
    Ok(Some(file.results))
}

/// Save results atomically (temp file + rename)
pub fn save_results(path: &Path, results: &StoredResults) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).context("Failed to create results directory")?;
    }

    let file = ResultsFile { version: STORE_VERSION, results: results.clone() };
    let json = serde_json::to_string_pretty(&file).context("Failed to serialize results")?;

    let temp = path.with_extension("json.tmp");
    fs::write(&temp, json).context("Failed to write results temp file")?;
    fs::rename(&temp, path).context("Failed to rename results temp file")?;

    Ok(())
}

/// Remove the results file if present
pub fn remove_results(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_file(path).context("Failed to remove results file")?;
    }
    Ok(())
}
