use serde::{Deserialize, Serialize};

/// Criteria for one search request.
///
/// Built fresh for every form submission and never mutated after it is sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchCriteria {
    pub city: String,
    pub industry: String,
    pub company_types: Vec<String>,
    pub areas: Vec<String>,
}

impl SearchCriteria {
    /// Build criteria from raw form input.
    ///
    /// Returns `None` when city or industry is blank. The list inputs are
    /// comma-separated and may be empty.
    pub fn from_input(city: &str, industry: &str, company_types: &str, areas: &str) -> Option<Self> {
        let city = city.trim();
        let industry = industry.trim();
        if city.is_empty() || industry.is_empty() {
            return None;
        }

        Some(Self {
            city: city.to_string(),
            industry: industry.to_string(),
            company_types: split_list(company_types),
            areas: split_list(areas),
        })
    }

    /// One-line summary, e.g. `Amsterdam / IT`
    pub fn summary(&self) -> String {
        format!("{} / {}", self.city, self.industry)
    }
}

/// Split a comma-separated input into trimmed, non-empty tokens, keeping order
pub fn split_list(input: &str) -> Vec<String> {
    input.split(',').map(str::trim).filter(|t| !t.is_empty()).map(String::from).collect()
}
