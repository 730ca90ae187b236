use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Directory name under the platform cache directory
const APP_DIR: &str = "contact-finder";

/// Get the default cache directory (`~/.cache/contact-finder` on Linux)
pub fn default_cache_dir() -> Result<PathBuf> {
    let base = dirs::cache_dir()
        .or_else(|| env::var_os("HOME").map(|home| PathBuf::from(home).join(".cache")))
        .context("Could not determine a cache directory (HOME not set)")?;
    Ok(base.join(APP_DIR))
}
