/// End-to-end workflow tests
///
/// These tests drive the complete flow against a mocked backend:
/// search form → store → results list → contact request → external link
mod common;

use std::sync::{Arc, Mutex};
use std::time::Duration;

use contact_finder::models::split_list;
use contact_finder::opener::ExternalOpener;
use contact_finder::store::ResultStore;
use contact_finder::tui::{Action, App, Route};
use contact_finder::views::{Feedback, FormField, Notice, REQUIRED_FIELDS_MISSING};
use contact_finder::{
    Company, CompanyId, ContactFinderApi, ContactMethod, ContactOutcome, RecordingOpener, ResultsView,
    SearchForm, SearchOutcome,
};
use common::{CacheDir, CompanyListBuilder, MockApi, started};

fn filled_form(city: &str, industry: &str, types: &str, areas: &str) -> SearchForm {
    let mut form = SearchForm::new();
    form.set_value(FormField::City, city);
    form.set_value(FormField::Industry, industry);
    form.set_value(FormField::CompanyTypes, types);
    form.set_value(FormField::Areas, areas);
    form
}

/// Submit `form` the way the shell does; returns whether results were stored
fn submit(form: &mut SearchForm, api: &dyn ContactFinderApi, store: &mut ResultStore) -> bool {
    let Some(criteria) = form.prepare() else {
        return false;
    };
    match form.finish(api.search(&criteria)) {
        Some(companies) => {
            store.put_search(criteria, companies);
            true
        }
        None => false,
    }
}

#[test]
fn test_e2e_split_list_examples() {
    assert_eq!(split_list(" software, , consultancy "), vec!["software", "consultancy"]);
    assert_eq!(split_list(""), Vec::<String>::new());
    assert_eq!(split_list("b,a"), vec!["b", "a"]);
}

#[test]
fn test_e2e_validation_blocks_request() {
    let api = MockApi::new();
    let mut store = ResultStore::new();
    let mut form = filled_form("", "IT", "", "");

    assert!(!submit(&mut form, &api, &mut store));
    assert_eq!(api.search_count(), 0);
    assert_eq!(form.notice(), Some(&Notice::Invalid(REQUIRED_FIELDS_MISSING.to_string())));
}

#[test]
fn test_e2e_search_sends_trimmed_criteria() {
    let api = MockApi::new().search_returns(SearchOutcome::Found(vec![]));
    let mut store = ResultStore::new();
    let mut form = filled_form(" Amsterdam ", "IT ", " software, , consultancy ", "centrum");

    assert!(submit(&mut form, &api, &mut store));

    let sent = api.searches.lock().unwrap()[0].clone();
    assert_eq!(sent.city, "Amsterdam");
    assert_eq!(sent.industry, "IT");
    assert_eq!(sent.company_types, vec!["software", "consultancy"]);
    assert_eq!(sent.areas, vec!["centrum"]);
}

#[test]
fn test_e2e_found_companies_reach_results_view() {
    let api = MockApi::new().search_returns(SearchOutcome::Found(vec![Company::new(1, "Acme")]));
    let mut store = ResultStore::new();
    let mut form = filled_form("Amsterdam", "IT", "", "");

    assert!(submit(&mut form, &api, &mut store));
    assert_eq!(store.get(), vec![Company::new(1, "Acme")]);

    let view = ResultsView::from_store(&store);
    assert_eq!(view.rows().len(), 1);
    assert_eq!(view.rows()[0].company.name, "Acme");
    assert_eq!(view.rows()[0].company.display_contact(), "Onbekend");
    assert_eq!(view.rows()[0].selector.selected(), ContactMethod::Whatsapp);
}

#[test]
fn test_e2e_empty_message_stays_on_form() {
    let api = MockApi::new()
        .search_returns(SearchOutcome::Empty("Geen bedrijven gevonden".to_string()));
    let mut store = ResultStore::new();
    let mut form = filled_form("Amsterdam", "IT", "", "");

    assert!(!submit(&mut form, &api, &mut store));
    let notice = form.notice().unwrap();
    assert_eq!(notice.text(), "Geen bedrijven gevonden");
    assert!(!notice.is_error());
    assert!(store.is_empty());
}

#[test]
fn test_e2e_empty_list_leads_to_no_results_state() {
    let api = MockApi::new().search_returns(SearchOutcome::Found(vec![]));
    let mut store = ResultStore::new();
    let mut form = filled_form("Amsterdam", "IT", "", "");

    assert!(submit(&mut form, &api, &mut store));
    let mut view = ResultsView::from_store(&store);
    assert!(view.is_empty());
    assert!(view.begin_contact().is_none());
}

#[test]
fn test_e2e_contact_with_url_opens_once() {
    let api = MockApi::new().contact_returns(started("Gestart", Some("https://x.test")));
    let mut store = ResultStore::new();
    store.put(CompanyListBuilder::new().company(1, "Acme").company(2, "Globex").build());
    let mut view = ResultsView::from_store(&store);
    let mut opener = RecordingOpener::default();

    view.move_selection(1);
    view.select_previous_method();
    let pending = view.begin_contact().unwrap();
    assert_eq!(pending.request.contact_method, ContactMethod::Email);

    let feedback = view.finish_contact(&pending, api.contact(&pending.request), &mut opener);

    assert_eq!(feedback, Some(Feedback::Success("Gestart".to_string())));
    assert_eq!(opener.opened, vec!["https://x.test".to_string()]);
    assert_eq!(api.contacts.lock().unwrap()[0].company_id, CompanyId::Number(2));
    assert!(view.rows()[0].feedback.is_none());
}

#[test]
fn test_e2e_contact_without_url_does_not_open() {
    let api = MockApi::new().contact_returns(ContactOutcome::Started { status: None, contact_url: None });
    let mut view = ResultsView::from_companies(vec![Company::new(1, "Acme")]);
    let mut opener = RecordingOpener::default();

    let pending = view.begin_contact().unwrap();
    let feedback = view.finish_contact(&pending, api.contact(&pending.request), &mut opener).unwrap();

    assert_eq!(feedback.text(), "Contactpoging gestart");
    assert!(opener.opened.is_empty());
}

#[test]
fn test_e2e_contact_error_is_shown() {
    let api = MockApi::new().contact_returns(ContactOutcome::Failed("niet bereikbaar".to_string()));
    let mut view = ResultsView::from_companies(vec![Company::new(1, "Acme")]);
    let mut opener = RecordingOpener::default();

    let pending = view.begin_contact().unwrap();
    let feedback = view.finish_contact(&pending, api.contact(&pending.request), &mut opener).unwrap();

    assert!(feedback.is_error());
    assert!(feedback.text().contains("niet bereikbaar"));
    assert!(opener.opened.is_empty());
}

#[test]
fn test_e2e_results_survive_restart() {
    let cache = CacheDir::new();
    let api = MockApi::new().search_returns(SearchOutcome::Found(
        CompanyListBuilder::new().with_contact(5, "Initech", "hr@initech.test").build(),
    ));

    {
        let mut store = ResultStore::open(cache.results_path());
        let mut form = filled_form("Utrecht", "Software", "", "");
        assert!(submit(&mut form, &api, &mut store));
    }

    let store = ResultStore::open(cache.results_path());
    let view = ResultsView::from_store(&store);
    assert_eq!(view.rows()[0].company.display_contact(), "hr@initech.test");
    assert_eq!(view.criteria().map(|c| c.city.as_str()), Some("Utrecht"));
    assert!(view.saved_at().is_some());
}

/// Opener whose record stays readable after the app takes ownership
#[derive(Clone, Default)]
struct SharedOpener(Arc<Mutex<Vec<String>>>);

impl ExternalOpener for SharedOpener {
    fn open(&mut self, url: &str) -> anyhow::Result<()> {
        self.0.lock().unwrap().push(url.to_string());
        Ok(())
    }
}

#[test]
fn test_e2e_interactive_app_full_flow() {
    let api = Arc::new(
        MockApi::new()
            .search_returns(SearchOutcome::Found(vec![Company::new(1, "Acme")]))
            .contact_returns(started("Gestart", Some("https://x.test"))),
    );
    let opener = SharedOpener::default();
    let mut app = App::new(api.clone(), Box::new(opener.clone()), ResultStore::new());

    for c in "Amsterdam".chars() {
        app.handle_action(Action::InsertChar(c));
    }
    app.handle_action(Action::NextField);
    for c in "IT".chars() {
        app.handle_action(Action::InsertChar(c));
    }
    app.handle_action(Action::Submit);
    assert!(app.wait_for_requests(Duration::from_secs(5)));
    assert_eq!(app.route(), Route::Results);

    app.handle_action(Action::Submit);
    assert!(app.wait_for_requests(Duration::from_secs(5)));

    assert_eq!(api.search_count(), 1);
    assert_eq!(api.contact_count(), 1);
    assert_eq!(*opener.0.lock().unwrap(), vec!["https://x.test".to_string()]);
    assert_eq!(app.results().rows()[0].feedback, Some(Feedback::Success("Gestart".to_string())));
}
