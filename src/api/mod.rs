//! Backend API: the two calls this client consumes.
//!
//! - `POST /search` with [`SearchCriteria`], answered by a list of companies,
//!   an informational message, or an error
//! - `POST /contact` with a [`ContactRequest`], answered by a status and an
//!   optional URL to open, or an error
//!
//! Loosely typed response bodies are decided once, in [`wire`], into the
//! tagged [`SearchOutcome`] and [`ContactOutcome`]. Callers match on those and
//! never re-inspect raw fields. [`ApiError`] is the transport-failure class
//! and is kept apart from application-level errors the backend reports.

pub mod client;
pub mod error;
pub mod wire;

pub use client::{DEFAULT_API_URL, HttpApiClient};
pub use error::ApiError;

use crate::models::{Company, ContactRequest, SearchCriteria};

/// Fallback status text when the backend accepts a contact request silently
pub const DEFAULT_CONTACT_STATUS: &str = "Contactpoging gestart";

/// Result of a search, exactly one variant per outcome
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Backend reported an error
    Failed(String),
    /// Backend found nothing and said so
    Empty(String),
    /// Companies matched (possibly an empty list)
    Found(Vec<Company>),
}

/// Result of a contact request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactOutcome {
    /// Backend reported an error
    Failed(String),
    /// Contact attempt accepted
    Started { status: Option<String>, contact_url: Option<String> },
}

impl ContactOutcome {
    /// Status text for an accepted attempt, with the default fallback
    pub fn status_text(&self) -> Option<&str> {
        match self {
            ContactOutcome::Failed(_) => None,
            ContactOutcome::Started { status, .. } => {
                Some(status.as_deref().unwrap_or(DEFAULT_CONTACT_STATUS))
            }
        }
    }

    /// URL the user should be sent to, if any
    pub fn contact_url(&self) -> Option<&str> {
        match self {
            ContactOutcome::Failed(_) => None,
            ContactOutcome::Started { contact_url, .. } => contact_url.as_deref(),
        }
    }
}

/// The backend seam. Implemented over HTTP by [`HttpApiClient`] and by mocks in tests.
///
/// Calls block; the TUI runs them on worker threads, hence `Send + Sync`.
pub trait ContactFinderApi: Send + Sync {
    fn search(&self, criteria: &SearchCriteria) -> Result<SearchOutcome, ApiError>;

    fn contact(&self, request: &ContactRequest) -> Result<ContactOutcome, ApiError>;
}
