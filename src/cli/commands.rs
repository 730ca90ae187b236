use std::io::{self, Write};

use anyhow::{Context, Result, bail};

use super::Commands;
use crate::api::error::CONTACT_FAILED;
use crate::api::{ContactFinderApi, ContactOutcome, HttpApiClient};
use crate::config::Settings;
use crate::models::{Company, CompanyId, ContactRequest};
use crate::opener::{ExternalOpener, RecordingOpener, SystemOpener, open_external};
use crate::store::ResultStore;
use crate::utils::{display_line, format_timestamp};
use crate::views::{FormField, NO_RESULTS_HINT, NO_RESULTS_TITLE, Notice, SearchForm};

pub(super) fn execute(command: Commands, settings: &Settings) -> Result<()> {
    let mut out = io::stdout().lock();

    match command {
        Commands::Search { city, industry, types, areas, json } => {
            let api = HttpApiClient::new(settings.api_url.as_str(), settings.request_timeout)?;
            let mut store = settings.open_store();

            let mut form = SearchForm::new();
            form.set_value(FormField::City, &city);
            form.set_value(FormField::Industry, &industry);
            form.set_value(FormField::CompanyTypes, &types);
            form.set_value(FormField::Areas, &areas);

            run_search(&api, &mut store, &mut form, json, &mut out)
        }
        Commands::Contact { company_id, method, no_open } => {
            let api = HttpApiClient::new(settings.api_url.as_str(), settings.request_timeout)?;
            let store = settings.open_store();
            let request = ContactRequest::new(CompanyId::parse_arg(&company_id), method);

            let mut opener: Box<dyn ExternalOpener> =
                if no_open { Box::new(RecordingOpener::default()) } else { Box::new(SystemOpener) };
            run_contact(&api, &store, &request, opener.as_mut(), &mut out)
        }
        Commands::Results { json } => show_results(&settings.open_store(), json, &mut out),
    }
}

/// Submit `form` once. Companies found are stored and printed; the form's
/// notice decides everything else.
fn run_search(
    api: &dyn ContactFinderApi,
    store: &mut ResultStore,
    form: &mut SearchForm,
    json: bool,
    out: &mut impl Write,
) -> Result<()> {
    let Some(criteria) = form.prepare() else {
        return notice_result(form, json, out);
    };

    tracing::info!(criteria = %criteria.summary(), "searching");
    let result = api.search(&criteria);

    match form.finish(result) {
        Some(companies) => {
            store.put_search(criteria, companies);
            print_companies(&store.get(), json, out)
        }
        None => notice_result(form, json, out),
    }
}

/// Turn the form's notice into output: "nothing found" is a normal answer,
/// anything else is a failure
fn notice_result(form: &SearchForm, json: bool, out: &mut impl Write) -> Result<()> {
    match form.notice() {
        Some(Notice::NoMatches(message)) => {
            if json {
                writeln!(out, "[]")?;
            } else {
                writeln!(out, "{}", display_line(message))?;
            }
            Ok(())
        }
        Some(notice) => bail!("{}", display_line(notice.text())),
        None => Ok(()),
    }
}

fn run_contact(
    api: &dyn ContactFinderApi,
    store: &ResultStore,
    request: &ContactRequest,
    opener: &mut dyn ExternalOpener,
    out: &mut impl Write,
) -> Result<()> {
    let name = store
        .get()
        .into_iter()
        .find(|c| c.id == request.company_id)
        .map(|c| display_line(&c.name))
        .unwrap_or_else(|| request.company_id.to_string());

    let outcome = match api.contact(request) {
        Ok(outcome) => outcome,
        Err(e) => {
            tracing::warn!(error = %e, company_id = %request.company_id, "contact failed");
            bail!(CONTACT_FAILED);
        }
    };

    if let ContactOutcome::Failed(error) = &outcome {
        bail!("Fout: {}", display_line(error));
    }

    let status = outcome.status_text().unwrap_or_default();
    writeln!(out, "{} ({}): {}", name, request.contact_method.label(), display_line(status))?;

    if let Some(url) = outcome.contact_url() {
        writeln!(out, "Link: {}", display_line(url))?;
        open_external(opener, url).context("Link niet geopend")?;
    }

    Ok(())
}

fn show_results(store: &ResultStore, json: bool, out: &mut impl Write) -> Result<()> {
    let Some(current) = store.current() else {
        return print_companies(&[], json, out);
    };

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(current)?)?;
        return Ok(());
    }

    if let Some(criteria) = &current.criteria {
        writeln!(out, "Zoekopdracht: {}", display_line(&criteria.summary()))?;
    }
    writeln!(out, "Opgeslagen: {}", format_timestamp(&current.saved_at))?;
    writeln!(out)?;
    print_companies(&current.companies, false, out)
}

fn print_companies(companies: &[Company], json: bool, out: &mut impl Write) -> Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(companies)?)?;
        return Ok(());
    }

    if companies.is_empty() {
        writeln!(out, "{}", NO_RESULTS_TITLE)?;
        writeln!(out, "{}", NO_RESULTS_HINT)?;
        return Ok(());
    }

    writeln!(out, "{} bedrijven gevonden", companies.len())?;
    for company in companies {
        writeln!(out)?;
        writeln!(out, "[{}] {}", company.id, display_line(&company.name))?;
        writeln!(out, "    Contact: {}", display_line(company.display_contact()))?;
    }

    Ok(())
}
