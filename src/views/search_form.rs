//! The search form: four text fields, presence validation, outcome handling.

use crate::api::error::SEARCH_FAILED;
use crate::api::{ApiError, SearchOutcome};
use crate::models::{Company, SearchCriteria};

/// Shown when city or industry is missing
pub const REQUIRED_FIELDS_MISSING: &str = "Stad en branche zijn vereist.";

/// Per-field input limit
const MAX_FIELD_LEN: usize = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    City,
    Industry,
    CompanyTypes,
    Areas,
}

impl FormField {
    pub const ALL: [FormField; 4] =
        [FormField::City, FormField::Industry, FormField::CompanyTypes, FormField::Areas];

    pub fn label(&self) -> &'static str {
        match self {
            FormField::City => "Stad",
            FormField::Industry => "Branche",
            FormField::CompanyTypes => "Bedrijfstypes (komma-gescheiden)",
            FormField::Areas => "Gebieden (komma-gescheiden)",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            FormField::City => "Bijv: Amsterdam",
            FormField::Industry => "Bijv: IT",
            FormField::CompanyTypes => "Bijv: software, consultancy",
            FormField::Areas => "Bijv: centrum, bedrijventerrein",
        }
    }

    pub fn is_required(&self) -> bool {
        matches!(self, FormField::City | FormField::Industry)
    }

    fn index(&self) -> usize {
        match self {
            FormField::City => 0,
            FormField::Industry => 1,
            FormField::CompanyTypes => 2,
            FormField::Areas => 3,
        }
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Content of the form's message slot.
///
/// All three share one slot under the fields; they are kept apart so the
/// "nothing found" case can be shown as information rather than as an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Local validation failed; nothing was sent
    Invalid(String),
    /// The backend reported an error, or could not be reached
    Failed(String),
    /// The backend found no companies
    NoMatches(String),
}

impl Notice {
    pub fn text(&self) -> &str {
        match self {
            Notice::Invalid(text) | Notice::Failed(text) | Notice::NoMatches(text) => text,
        }
    }

    pub fn is_error(&self) -> bool {
        !matches!(self, Notice::NoMatches(_))
    }
}

#[derive(Debug, Clone)]
pub struct SearchForm {
    city: String,
    industry: String,
    company_types: String,
    areas: String,
    focus: FormField,
    notice: Option<Notice>,
    /// Searches submitted from this form that have not answered yet
    pending: usize,
}

impl Default for SearchForm {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchForm {
    pub fn new() -> Self {
        Self {
            city: String::new(),
            industry: String::new(),
            company_types: String::new(),
            areas: String::new(),
            focus: FormField::City,
            notice: None,
            pending: 0,
        }
    }

    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::City => &self.city,
            FormField::Industry => &self.industry,
            FormField::CompanyTypes => &self.company_types,
            FormField::Areas => &self.areas,
        }
    }

    fn value_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::City => &mut self.city,
            FormField::Industry => &mut self.industry,
            FormField::CompanyTypes => &mut self.company_types,
            FormField::Areas => &mut self.areas,
        }
    }

    pub fn set_value(&mut self, field: FormField, value: &str) {
        *self.value_mut(field) = value.chars().take(MAX_FIELD_LEN).collect();
    }

    pub fn focus(&self) -> FormField {
        self.focus
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// A search for this form is in flight
    pub fn is_pending(&self) -> bool {
        self.pending > 0
    }

    pub fn insert_char(&mut self, c: char) {
        let field = self.value_mut(self.focus);
        if field.chars().count() < MAX_FIELD_LEN {
            field.push(c);
        }
    }

    pub fn delete_char(&mut self) {
        self.value_mut(self.focus).pop();
    }

    /// Start a submission.
    ///
    /// Clears the message slot, then either returns the criteria to send or
    /// records the validation failure and returns `None` (no request must be made).
    pub fn prepare(&mut self) -> Option<SearchCriteria> {
        self.notice = None;

        match SearchCriteria::from_input(&self.city, &self.industry, &self.company_types, &self.areas)
        {
            Some(criteria) => {
                self.pending += 1;
                Some(criteria)
            }
            None => {
                self.notice = Some(Notice::Invalid(REQUIRED_FIELDS_MISSING.to_string()));
                None
            }
        }
    }

    /// Apply a finished search.
    ///
    /// Returns the companies when the caller should store them and switch to
    /// the results screen; every other outcome lands in the message slot.
    pub fn finish(&mut self, result: Result<SearchOutcome, ApiError>) -> Option<Vec<Company>> {
        self.pending = self.pending.saturating_sub(1);

        match result {
            Err(e) => {
                tracing::warn!(error = %e, "search failed");
                self.notice = Some(Notice::Failed(SEARCH_FAILED.to_string()));
                None
            }
            Ok(SearchOutcome::Failed(error)) => {
                self.notice = Some(Notice::Failed(error));
                None
            }
            Ok(SearchOutcome::Empty(message)) => {
                self.notice = Some(Notice::NoMatches(message));
                None
            }
            Ok(SearchOutcome::Found(companies)) => {
                tracing::info!(count = companies.len(), "search returned companies");
                Some(companies)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> SearchForm {
        let mut form = SearchForm::new();
        form.set_value(FormField::City, "Amsterdam");
        form.set_value(FormField::Industry, "IT");
        form.set_value(FormField::CompanyTypes, " software, , consultancy ");
        form
    }

    #[test]
    fn test_new_form_is_empty() {
        let form = SearchForm::new();
        for field in FormField::ALL {
            assert_eq!(form.value(field), "");
        }
        assert_eq!(form.focus(), FormField::City);
        assert!(form.notice().is_none());
        assert!(!form.is_pending());
    }

    #[test]
    fn test_typing_goes_to_focused_field() {
        let mut form = SearchForm::new();
        for c in "Utrecht".chars() {
            form.insert_char(c);
        }
        form.focus_next();
        form.insert_char('X');
        form.delete_char();
        form.insert_char('Y');

        assert_eq!(form.value(FormField::City), "Utrecht");
        assert_eq!(form.value(FormField::Industry), "Y");
    }

    #[test]
    fn test_focus_wraps() {
        let mut form = SearchForm::new();
        form.focus_previous();
        assert_eq!(form.focus(), FormField::Areas);
        form.focus_next();
        assert_eq!(form.focus(), FormField::City);
    }

    #[test]
    fn test_field_length_limit() {
        let mut form = SearchForm::new();
        for _ in 0..300 {
            form.insert_char('a');
        }
        assert_eq!(form.value(FormField::City).len(), 256);
    }

    #[test]
    fn test_prepare_missing_city() {
        let mut form = SearchForm::new();
        form.set_value(FormField::Industry, "IT");

        assert!(form.prepare().is_none());
        assert_eq!(form.notice(), Some(&Notice::Invalid(REQUIRED_FIELDS_MISSING.to_string())));
        assert!(!form.is_pending());
    }

    #[test]
    fn test_prepare_whitespace_industry_is_missing() {
        let mut form = SearchForm::new();
        form.set_value(FormField::City, "Amsterdam");
        form.set_value(FormField::Industry, "   ");
        assert!(form.prepare().is_none());
    }

    #[test]
    fn test_prepare_builds_criteria_and_clears_notice() {
        let mut form = filled_form();
        form.notice = Some(Notice::Failed("oud".to_string()));

        let criteria = form.prepare().unwrap();
        assert_eq!(criteria.city, "Amsterdam");
        assert_eq!(criteria.company_types, vec!["software", "consultancy"]);
        assert!(criteria.areas.is_empty());
        assert!(form.notice().is_none());
        assert!(form.is_pending());
    }

    #[test]
    fn test_finish_found_returns_companies() {
        let mut form = filled_form();
        form.prepare();

        let companies = form.finish(Ok(SearchOutcome::Found(vec![Company::new(1, "Acme")])));
        assert_eq!(companies.unwrap().len(), 1);
        assert!(form.notice().is_none());
        assert!(!form.is_pending());
    }

    #[test]
    fn test_pending_until_last_search_answers() {
        let mut form = filled_form();
        form.prepare();
        form.prepare();

        form.finish(Ok(SearchOutcome::Empty("Geen bedrijven gevonden".to_string())));
        assert!(form.is_pending());

        form.finish(Ok(SearchOutcome::Found(vec![Company::new(1, "Acme")])));
        assert!(!form.is_pending());
    }

    #[test]
    fn test_finish_without_prepare_stays_idle() {
        let mut form = filled_form();
        form.finish(Err(ApiError::UnexpectedResponse));
        assert!(!form.is_pending());
    }

    #[test]
    fn test_finish_message_is_informational() {
        let mut form = filled_form();
        form.prepare();

        let result = form.finish(Ok(SearchOutcome::Empty("Geen bedrijven gevonden".to_string())));
        assert!(result.is_none());
        let notice = form.notice().unwrap();
        assert_eq!(notice.text(), "Geen bedrijven gevonden");
        assert!(!notice.is_error());
    }

    #[test]
    fn test_finish_backend_error() {
        let mut form = filled_form();
        form.prepare();

        assert!(form.finish(Ok(SearchOutcome::Failed("Quota op".to_string()))).is_none());
        assert_eq!(form.notice(), Some(&Notice::Failed("Quota op".to_string())));
    }

    #[test]
    fn test_finish_transport_error_is_generic() {
        let mut form = filled_form();
        form.prepare();

        assert!(form.finish(Err(ApiError::UnexpectedResponse)).is_none());
        let notice = form.notice().unwrap();
        assert_eq!(notice.text(), SEARCH_FAILED);
        assert!(notice.is_error());
    }

    #[test]
    fn test_field_metadata() {
        assert!(FormField::City.is_required());
        assert!(FormField::Industry.is_required());
        assert!(!FormField::Areas.is_required());
        assert_eq!(FormField::City.placeholder(), "Bijv: Amsterdam");
    }
}
