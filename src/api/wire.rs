//! Raw response bodies and their one-time interpretation.

use serde::Deserialize;

use super::{ApiError, ContactOutcome, SearchOutcome};
use crate::models::Company;
use crate::models::deserializers::deserialize_non_empty;

/// `POST /search` response as the backend sends it
#[derive(Debug, Default, Deserialize)]
pub struct SearchResponseBody {
    #[serde(default)]
    pub companies: Option<Vec<Company>>,
    #[serde(default, deserialize_with = "deserialize_non_empty")]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "deserialize_non_empty")]
    pub error: Option<String>,
}

/// `POST /contact` response as the backend sends it
#[derive(Debug, Default, Deserialize)]
pub struct ContactResponseBody {
    #[serde(default, deserialize_with = "deserialize_non_empty")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "deserialize_non_empty")]
    pub contact_url: Option<String>,
    #[serde(default, deserialize_with = "deserialize_non_empty")]
    pub error: Option<String>,
}

impl SearchResponseBody {
    /// Decide the outcome: error, then message, then companies
    pub fn into_outcome(self) -> Result<SearchOutcome, ApiError> {
        if let Some(error) = self.error {
            return Ok(SearchOutcome::Failed(error));
        }
        if let Some(message) = self.message {
            return Ok(SearchOutcome::Empty(message));
        }
        match self.companies {
            Some(companies) => Ok(SearchOutcome::Found(companies)),
            None => Err(ApiError::UnexpectedResponse),
        }
    }
}

impl ContactResponseBody {
    pub fn into_outcome(self) -> ContactOutcome {
        match self.error {
            Some(error) => ContactOutcome::Failed(error),
            None => ContactOutcome::Started { status: self.status, contact_url: self.contact_url },
        }
    }
}

/// Interpret a search response body
pub fn decode_search(status: u16, body: &str) -> Result<SearchOutcome, ApiError> {
    if !is_success(status) {
        return Err(status_error(status, body));
    }
    serde_json::from_str::<SearchResponseBody>(body)?.into_outcome()
}

/// Interpret a contact response body
pub fn decode_contact(status: u16, body: &str) -> Result<ContactOutcome, ApiError> {
    // Any non-2xx is a failed request, whatever the body claims
    if !is_success(status) {
        return Err(status_error(status, body));
    }
    Ok(serde_json::from_str::<ContactResponseBody>(body)?.into_outcome())
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

fn status_error(status: u16, body: &str) -> ApiError {
    // Error pages can be large HTML documents; keep the log line readable
    let body: String = body.chars().take(200).collect();
    ApiError::Status { status, body }
}
