//! The results screen: one row per stored company, each with its own
//! contact-method picker and feedback line.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};

use super::name_filter::NameFilter;
use super::selector::ContactMethodSelector;
use crate::api::error::CONTACT_FAILED;
use crate::api::{ApiError, ContactOutcome};
use crate::models::{Company, ContactRequest, SearchCriteria};
use crate::opener::{ExternalOpener, open_external};
use crate::store::ResultStore;

pub const NO_RESULTS_TITLE: &str = "Geen resultaten gevonden";
pub const NO_RESULTS_HINT: &str =
    "Ga terug naar de homepagina om een nieuwe zoekopdracht te doen.";

static NEXT_GENERATION: AtomicU64 = AtomicU64::new(1);

/// A contact request together with the result list it was started from.
///
/// Company ids are only unique within one search, so a reply is matched to a
/// row only while that list is still the one on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingContact {
    pub request: ContactRequest,
    pub generation: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    Success(String),
    Error(String),
}

impl Feedback {
    pub fn text(&self) -> &str {
        match self {
            Feedback::Success(text) | Feedback::Error(text) => text,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Feedback::Error(_))
    }
}

#[derive(Debug, Clone)]
pub struct ResultRow {
    pub company: Company,
    pub selector: ContactMethodSelector,
    pub feedback: Option<Feedback>,
    /// Contact requests started from this row that have not answered yet
    pub in_flight: usize,
}

impl ResultRow {
    fn new(company: Company) -> Self {
        Self { company, selector: ContactMethodSelector::new(), feedback: None, in_flight: 0 }
    }
}

pub struct ResultsView {
    /// Distinct for every view built, including two built from the same list
    generation: u64,
    rows: Vec<ResultRow>,
    criteria: Option<SearchCriteria>,
    saved_at: Option<DateTime<Utc>>,
    filter: NameFilter,
    /// Indices into `rows` that pass the filter
    visible: Vec<usize>,
    /// Position within `visible`
    selected: usize,
}

impl ResultsView {
    /// Activate the view from whatever the store currently holds
    pub fn from_store(store: &ResultStore) -> Self {
        let current = store.current();
        let mut view = Self::from_companies(store.get());
        view.criteria = current.and_then(|c| c.criteria.clone());
        view.saved_at = current.map(|c| c.saved_at);
        view
    }

    pub fn from_companies(companies: Vec<Company>) -> Self {
        let rows: Vec<ResultRow> = companies.into_iter().map(ResultRow::new).collect();
        let visible = (0..rows.len()).collect();
        Self {
            generation: NEXT_GENERATION.fetch_add(1, Ordering::Relaxed),
            rows,
            criteria: None,
            saved_at: None,
            filter: NameFilter::new(),
            visible,
            selected: 0,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// No companies at all: the terminal "no results" state
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[ResultRow] {
        &self.rows
    }

    pub fn criteria(&self) -> Option<&SearchCriteria> {
        self.criteria.as_ref()
    }

    pub fn saved_at(&self) -> Option<&DateTime<Utc>> {
        self.saved_at.as_ref()
    }

    /// Rows passing the name filter, in backend order
    pub fn visible_rows(&self) -> impl Iterator<Item = &ResultRow> {
        self.visible.iter().filter_map(|&idx| self.rows.get(idx))
    }

    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    /// Position of the selection among the visible rows
    pub fn selected_position(&self) -> usize {
        self.selected
    }

    /// Index into [`ResultsView::rows`] of the selected row
    pub fn selected_index(&self) -> Option<usize> {
        self.visible.get(self.selected).copied()
    }

    pub fn selected_row(&self) -> Option<&ResultRow> {
        self.selected_index().and_then(|idx| self.rows.get(idx))
    }

    fn selected_row_mut(&mut self) -> Option<&mut ResultRow> {
        let idx = self.selected_index()?;
        self.rows.get_mut(idx)
    }

    pub fn move_selection(&mut self, delta: isize) {
        let total = self.visible.len();
        if total == 0 {
            self.selected = 0;
            return;
        }
        let new_idx = (self.selected as isize + delta).max(0) as usize;
        self.selected = new_idx.min(total - 1);
    }

    pub fn select_next_method(&mut self) {
        if let Some(row) = self.selected_row_mut() {
            row.selector.select_next();
        }
    }

    pub fn select_previous_method(&mut self) {
        if let Some(row) = self.selected_row_mut() {
            row.selector.select_previous();
        }
    }

    pub fn filter_query(&self) -> &str {
        self.filter.query()
    }

    pub fn push_filter_char(&mut self, c: char) {
        self.filter.push(c);
        self.refresh_visible();
    }

    pub fn pop_filter_char(&mut self) {
        self.filter.pop();
        self.refresh_visible();
    }

    pub fn clear_filter(&mut self) {
        self.filter.clear();
        self.refresh_visible();
    }

    fn refresh_visible(&mut self) {
        let names: Vec<&str> = self.rows.iter().map(|r| r.company.name.as_str()).collect();
        self.visible = self.filter.visible(names);
        self.selected = 0;
    }

    /// Submit the selected row: clear its feedback and build the request to send
    pub fn begin_contact(&mut self) -> Option<PendingContact> {
        let generation = self.generation;
        let row = self.selected_row_mut()?;
        row.feedback = None;
        row.in_flight += 1;
        let request = ContactRequest::new(row.company.id.clone(), row.selector.submit());
        Some(PendingContact { request, generation })
    }

    /// Apply a finished contact request.
    ///
    /// Opens the returned URL (at most once) through `opener` and records the
    /// feedback on the company's row. Returns the feedback, or `None` when
    /// the company is no longer listed because a newer search replaced the list.
    pub fn finish_contact(
        &mut self,
        pending: &PendingContact,
        result: Result<ContactOutcome, ApiError>,
        opener: &mut dyn ExternalOpener,
    ) -> Option<Feedback> {
        let request = &pending.request;
        let feedback = match result {
            Err(e) => {
                tracing::warn!(error = %e, company_id = %request.company_id, "contact failed");
                Feedback::Error(CONTACT_FAILED.to_string())
            }
            Ok(ContactOutcome::Failed(error)) => Feedback::Error(format!("Fout: {}", error)),
            Ok(outcome) => {
                let status = outcome.status_text().unwrap_or_default().to_string();
                match outcome.contact_url() {
                    Some(url) => match open_external(opener, url) {
                        Ok(()) => Feedback::Success(status),
                        Err(e) => {
                            tracing::warn!(url, error = %e, "could not open contact url");
                            Feedback::Error(format!("{} (link niet geopend: {})", status, e))
                        }
                    },
                    None => Feedback::Success(status),
                }
            }
        };

        if pending.generation != self.generation {
            tracing::debug!(company_id = %request.company_id, "contact result for a replaced result list");
            return None;
        }
        let Some(row) = self.rows.iter_mut().find(|r| r.company.id == request.company_id) else {
            tracing::debug!(company_id = %request.company_id, "contact result for company no longer listed");
            return None;
        };
        row.in_flight = row.in_flight.saturating_sub(1);
        row.feedback = Some(feedback.clone());
        Some(feedback)
    }
}
