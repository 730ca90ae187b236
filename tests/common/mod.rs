//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::Utc;
use contact_finder::store::{RESULTS_FILENAME, StoredResults, save_results};
use contact_finder::{
    ApiError, Company, ContactFinderApi, ContactOutcome, ContactRequest, SearchCriteria,
    SearchOutcome,
};
use tempfile::TempDir;

/// Backend stand-in: canned outcomes, every call recorded.
///
/// A call without a canned outcome fails like an unreachable backend.
#[derive(Default)]
pub struct MockApi {
    search: Mutex<Option<SearchOutcome>>,
    contact: Mutex<Option<ContactOutcome>>,
    pub searches: Mutex<Vec<SearchCriteria>>,
    pub contacts: Mutex<Vec<ContactRequest>>,
}

impl MockApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search_returns(self, outcome: SearchOutcome) -> Self {
        *self.search.lock().unwrap() = Some(outcome);
        self
    }

    pub fn contact_returns(self, outcome: ContactOutcome) -> Self {
        *self.contact.lock().unwrap() = Some(outcome);
        self
    }

    pub fn search_count(&self) -> usize {
        self.searches.lock().unwrap().len()
    }

    pub fn contact_count(&self) -> usize {
        self.contacts.lock().unwrap().len()
    }
}

impl ContactFinderApi for MockApi {
    fn search(&self, criteria: &SearchCriteria) -> Result<SearchOutcome, ApiError> {
        self.searches.lock().unwrap().push(criteria.clone());
        self.search.lock().unwrap().clone().ok_or(ApiError::UnexpectedResponse)
    }

    fn contact(&self, request: &ContactRequest) -> Result<ContactOutcome, ApiError> {
        self.contacts.lock().unwrap().push(request.clone());
        self.contact.lock().unwrap().clone().ok_or(ApiError::UnexpectedResponse)
    }
}

/// `Started` outcome with the given status and optional URL
pub fn started(status: &str, url: Option<&str>) -> ContactOutcome {
    ContactOutcome::Started { status: Some(status.to_string()), contact_url: url.map(str::to_string) }
}

/// Builder for company lists
pub struct CompanyListBuilder {
    companies: Vec<Company>,
}

impl CompanyListBuilder {
    pub fn new() -> Self {
        Self { companies: Vec::new() }
    }

    /// Add a company without contact details
    pub fn company(mut self, id: i64, name: &str) -> Self {
        self.companies.push(Company::new(id, name));
        self
    }

    /// Add a company with a contact value
    pub fn with_contact(mut self, id: i64, name: &str, contact: &str) -> Self {
        self.companies.push(Company::new(id, name).with_contact(contact));
        self
    }

    /// `count` generated companies, every other one with a phone number
    pub fn generated(mut self, count: usize) -> Self {
        for i in 0..count {
            let company = Company::new(i as i64 + 1, format!("Bedrijf {}", i + 1));
            let company = if i % 2 == 0 {
                company.with_contact(format!("+31 20 555 {:04}", i))
            } else {
                company
            };
            self.companies.push(company);
        }
        self
    }

    pub fn build(self) -> Vec<Company> {
        self.companies
    }
}

impl Default for CompanyListBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Temporary cache directory, optionally pre-filled with stored results
pub struct CacheDir {
    temp_dir: TempDir,
}

impl CacheDir {
    pub fn new() -> Self {
        Self { temp_dir: TempDir::new().expect("Failed to create temp dir") }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn results_path(&self) -> PathBuf {
        self.temp_dir.path().join(RESULTS_FILENAME)
    }

    /// Write `companies` as the stored results of a search for `criteria`
    pub fn with_results(self, criteria: Option<SearchCriteria>, companies: Vec<Company>) -> Self {
        let results = StoredResults { companies, criteria, saved_at: Utc::now() };
        save_results(&self.results_path(), &results).expect("Failed to write results file");
        self
    }

    /// Write raw file content in place of the results file
    pub fn with_raw_results(self, content: &str) -> Self {
        std::fs::write(self.results_path(), content).expect("Failed to write results file");
        self
    }
}

impl Default for CacheDir {
    fn default() -> Self {
        Self::new()
    }
}

/// Search criteria for Amsterdam / IT
pub fn amsterdam_it() -> SearchCriteria {
    SearchCriteria::from_input("Amsterdam", "IT", "software, consultancy", "").expect("valid criteria")
}
