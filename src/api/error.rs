use thiserror::Error;

/// Transport-class failures: the backend could not be reached or did not
/// answer with a body this client understands.
///
/// Application errors a 2xx response reports in an `error` field are not
/// `ApiError`s; they arrive as `SearchOutcome::Failed` / `ContactOutcome::Failed`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("backend returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("could not decode backend response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("backend response has no error, message or data")]
    UnexpectedResponse,

    #[error("invalid API base URL '{0}'")]
    InvalidBaseUrl(String),

    #[error("could not start request worker: {0}")]
    Spawn(#[from] std::io::Error),
}

/// Shown when a search fails below the application level
pub const SEARCH_FAILED: &str = "Er ging iets fout bij het zoeken.";

/// Shown when a contact request fails below the application level
pub const CONTACT_FAILED: &str = "Er ging iets fout bij het initiëren van contact.";
