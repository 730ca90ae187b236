use std::time::Duration;

use reqwest::Url;
use reqwest::blocking::Client;
use serde::Serialize;

use super::wire::{decode_contact, decode_search};
use super::{ApiError, ContactFinderApi, ContactOutcome, SearchOutcome};
use crate::models::{ContactRequest, SearchCriteria};

/// Backend location used when nothing else is configured
pub const DEFAULT_API_URL: &str = "http://localhost:5000";

const SEARCH_PATH: &str = "search";
const CONTACT_PATH: &str = "contact";

/// Blocking HTTP implementation of [`ContactFinderApi`]
pub struct HttpApiClient {
    client: Client,
    base_url: Url,
}

impl HttpApiClient {
    /// Create a client for `base_url`.
    ///
    /// `timeout` of `None` means requests wait as long as the backend takes.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, ApiError> {
        let base_url = parse_base_url(base_url)?;
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("contact-finder/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url.join(path).map_err(|_| ApiError::InvalidBaseUrl(self.base_url.to_string()))
    }

    /// POST a JSON body and hand back the status code and raw body text
    fn post<B: Serialize>(&self, path: &str, body: &B) -> Result<(u16, String), ApiError> {
        let url = self.endpoint(path)?;
        tracing::debug!(%url, "POST");

        let response = self.client.post(url.clone()).json(body).send()?;
        let status = response.status().as_u16();
        let text = response.text()?;

        tracing::debug!(%url, status, bytes = text.len(), "response received");
        Ok((status, text))
    }
}

impl ContactFinderApi for HttpApiClient {
    fn search(&self, criteria: &SearchCriteria) -> Result<SearchOutcome, ApiError> {
        let (status, body) = self.post(SEARCH_PATH, criteria).inspect_err(|e| {
            tracing::warn!(error = %e, "search request failed");
        })?;
        decode_search(status, &body)
    }

    fn contact(&self, request: &ContactRequest) -> Result<ContactOutcome, ApiError> {
        let (status, body) = self.post(CONTACT_PATH, request).inspect_err(|e| {
            tracing::warn!(error = %e, company_id = %request.company_id, "contact request failed");
        })?;
        decode_contact(status, &body)
    }
}

/// Parse and normalise the base URL so endpoint paths join underneath it.
///
/// `http://host/api` and `http://host/api/` both resolve `search` to
/// `http://host/api/search`.
pub fn parse_base_url(raw: &str) -> Result<Url, ApiError> {
    let trimmed = raw.trim();
    let mut url = Url::parse(trimmed).map_err(|_| ApiError::InvalidBaseUrl(raw.to_string()))?;

    if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
        return Err(ApiError::InvalidBaseUrl(raw.to_string()));
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url.set_query(None);
    url.set_fragment(None);

    Ok(url)
}
