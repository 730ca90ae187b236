use anyhow::{Context, Result};
use arboard::Clipboard;

use crate::models::Company;

/// Longest contact value we will put on the clipboard
const MAX_CONTACT_LEN: usize = 1024;

/// Trait for clipboard operations (allows mocking in tests)
trait ClipboardProvider {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// Real clipboard implementation using arboard
struct SystemClipboard {
    clipboard: Clipboard,
}

impl SystemClipboard {
    fn new() -> Result<Self> {
        let clipboard = Clipboard::new().context("Klembord niet beschikbaar")?;
        Ok(Self { clipboard })
    }
}

impl ClipboardProvider for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        self.clipboard.set_text(text).context("Klembord kon niet worden gevuld")?;
        Ok(())
    }
}

/// Pick the text to copy for a company without touching the system clipboard
fn contact_text(company: &Company) -> Result<&str> {
    let Some(contact) = company.known_contact() else {
        anyhow::bail!("Geen contactgegevens bekend voor {}", company.name);
    };

    if contact.len() > MAX_CONTACT_LEN {
        anyhow::bail!(
            "Contactgegeven te groot ({} bytes, max {})",
            contact.len(),
            MAX_CONTACT_LEN
        );
    }

    Ok(contact)
}

#[cfg(test)]
fn copy_with_provider(company: &Company, provider: &mut dyn ClipboardProvider) -> Result<()> {
    let text = contact_text(company)?;
    provider.set_text(text)?;
    Ok(())
}

/// Copy a company's contact value (phone number, e-mail address) to the system clipboard.
///
/// # Errors
/// Returns error if:
/// - The company has no known contact
/// - The contact value is implausibly large
/// - The system clipboard is unavailable (headless environment, denied access)
pub fn copy_contact(company: &Company) -> Result<()> {
    // Validate first so a missing contact is reported even without a clipboard
    let text = contact_text(company)?;

    let mut clipboard = SystemClipboard::new()?;
    clipboard.set_text(text)?;
    tracing::debug!(company = %company.name, "contact copied to clipboard");
    Ok(())
}
