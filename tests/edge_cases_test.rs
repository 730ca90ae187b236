/// Edge case tests for values the backend and the user can produce
mod common;

use contact_finder::api::wire::{decode_contact, decode_search};
use contact_finder::views::ContactMethodSelector;
use contact_finder::{
    ApiError, Company, CompanyId, ContactMethod, ContactOutcome, ResultsView, SearchCriteria,
    SearchOutcome,
};
use common::CompanyListBuilder;

#[test]
fn test_edge_case_company_ids_of_both_kinds() {
    let SearchOutcome::Found(companies) =
        decode_search(200, r#"{"companies":[{"id":12,"name":"A"},{"id":"uuid-x","name":"B"}]}"#)
            .unwrap()
    else {
        panic!("expected companies")
    };

    assert_eq!(companies[0].id, CompanyId::Number(12));
    assert_eq!(companies[1].id, CompanyId::Text("uuid-x".to_string()));
    assert_eq!(CompanyId::parse_arg(" 12 "), CompanyId::Number(12));
    assert_eq!(CompanyId::parse_arg("uuid-x"), CompanyId::Text("uuid-x".to_string()));
}

#[test]
fn test_edge_case_contact_request_wire_shape() {
    let request = contact_finder::ContactRequest::new(CompanyId::Number(3), ContactMethod::LiveChat);
    let value = serde_json::to_value(&request).unwrap();

    assert_eq!(value, serde_json::json!({ "company_id": 3, "contact_method": "live_chat" }));
}

#[test]
fn test_edge_case_search_criteria_wire_shape() {
    let criteria = SearchCriteria::from_input("Amsterdam", "IT", "", " centrum ,").unwrap();
    let value = serde_json::to_value(&criteria).unwrap();

    assert_eq!(
        value,
        serde_json::json!({
            "city": "Amsterdam",
            "industry": "IT",
            "company_types": [],
            "areas": ["centrum"],
        })
    );
}

#[test]
fn test_edge_case_blank_strings_count_as_absent() {
    assert_eq!(
        decode_search(200, r#"{"message":"   ","companies":[]}"#).unwrap(),
        SearchOutcome::Found(vec![])
    );
    assert_eq!(
        decode_contact(200, r#"{"status":"","contact_url":""}"#).unwrap(),
        ContactOutcome::Started { status: None, contact_url: None }
    );
}

#[test]
fn test_edge_case_body_without_known_fields() {
    assert!(matches!(decode_search(200, r#"{"result":"ok"}"#), Err(ApiError::UnexpectedResponse)));
    assert!(matches!(decode_search(200, "not json"), Err(ApiError::Decode(_))));
    assert!(matches!(decode_search(404, "Not Found"), Err(ApiError::Status { status: 404, .. })));
}

#[test]
fn test_edge_case_selector_wraps_both_ways() {
    let mut selector = ContactMethodSelector::new();
    assert_eq!(selector.selected(), ContactMethod::Whatsapp);

    for _ in 0..ContactMethod::ALL.len() {
        selector.select_next();
    }
    assert_eq!(selector.submit(), ContactMethod::Whatsapp);

    selector.select(ContactMethod::Email);
    selector.select_previous();
    assert_eq!(selector.submit(), ContactMethod::LiveChat);
}

#[test]
fn test_edge_case_contact_method_parsing() {
    assert_eq!("E-MAIL".parse::<ContactMethod>().ok(), None);
    assert_eq!("EMAIL".parse::<ContactMethod>().unwrap(), ContactMethod::Email);
    assert_eq!("contact-form".parse::<ContactMethod>().unwrap(), ContactMethod::ContactForm);
    assert!("".parse::<ContactMethod>().is_err());
}

#[test]
fn test_edge_case_unicode_names_filter() {
    let mut view = ResultsView::from_companies(vec![
        Company::new(1, "Café de Zwaan"),
        Company::new(2, "Bakkerij Müller"),
        Company::new(3, "東京 Trading"),
    ]);

    for c in "muller".chars() {
        view.push_filter_char(c);
    }
    let names: Vec<&str> = view.visible_rows().map(|r| r.company.name.as_str()).collect();
    assert_eq!(names, vec!["Bakkerij Müller"]);

    view.clear_filter();
    for c in "東京".chars() {
        view.push_filter_char(c);
    }
    assert_eq!(view.visible_count(), 1);
}

#[test]
fn test_edge_case_selection_clamped_to_visible_rows() {
    let mut view = ResultsView::from_companies(CompanyListBuilder::new().generated(25).build());

    view.move_selection(100);
    assert_eq!(view.selected_position(), 24);
    view.move_selection(-100);
    assert_eq!(view.selected_position(), 0);

    for c in "Bedrijf 2".chars() {
        view.push_filter_char(c);
    }
    view.move_selection(100);
    assert!(view.selected_position() < view.visible_count());
}

#[test]
fn test_edge_case_filter_keeps_feedback_and_methods() {
    let mut view = ResultsView::from_companies(vec![Company::new(1, "Acme"), Company::new(2, "Globex")]);
    view.move_selection(1);
    view.select_next_method();

    view.push_filter_char('x');
    view.clear_filter();

    assert_eq!(view.rows()[1].selector.selected(), ContactMethod::Whatsapp.next());
    assert_eq!(view.rows().len(), 2);
}
