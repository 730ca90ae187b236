//! Opening contact URLs outside the client.
//!
//! The results screen never navigates away: a returned `contact_url` is handed
//! to an [`ExternalOpener`], which for real use launches the platform's default
//! handler (browser, mail client, dialer) without waiting for it.

use anyhow::{Context, Result};
use reqwest::Url;

/// Schemes a backend-supplied URL may use
const ALLOWED_SCHEMES: [&str; 9] =
    ["http", "https", "mailto", "tel", "sms", "whatsapp", "tg", "skype", "msteams"];

/// Capability to open a URL in a new, independent viewing context
pub trait ExternalOpener {
    fn open(&mut self, url: &str) -> Result<()>;
}

/// Opens URLs with the operating system's default handler
#[derive(Debug, Default)]
pub struct SystemOpener;

impl ExternalOpener for SystemOpener {
    fn open(&mut self, url: &str) -> Result<()> {
        open::that_detached(url).with_context(|| format!("Kon {} niet openen", url))?;
        tracing::info!(url, "opened contact url");
        Ok(())
    }
}

/// Opener that only records what it was asked to open (for `--no-open` and tests)
#[derive(Debug, Default)]
pub struct RecordingOpener {
    pub opened: Vec<String>,
}

impl ExternalOpener for RecordingOpener {
    fn open(&mut self, url: &str) -> Result<()> {
        self.opened.push(url.to_string());
        Ok(())
    }
}

/// Reject URLs that should never reach the platform handler
pub fn validate_url(url: &str) -> Result<Url> {
    let trimmed = url.trim();
    if trimmed.is_empty() {
        anyhow::bail!("Lege link kan niet worden geopend");
    }

    let parsed = Url::parse(trimmed).with_context(|| format!("Ongeldige link '{}'", trimmed))?;
    if !ALLOWED_SCHEMES.contains(&parsed.scheme()) {
        anyhow::bail!("Links met schema '{}' worden niet geopend", parsed.scheme());
    }

    Ok(parsed)
}

/// Validate `url`, then hand it to `opener`
pub fn open_external(opener: &mut dyn ExternalOpener, url: &str) -> Result<()> {
    validate_url(url)?;
    opener.open(url.trim())
}
