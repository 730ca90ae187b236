//! TUI application state and event handling.
//!
//! The `App` owns everything the interactive client needs:
//!
//! - **Routes**: the search form and the results list, switched by key
//! - **Result store**: the single slot a successful search writes into
//! - **Requests**: each backend call runs on its own worker thread and reports
//!   back over a channel that the event loop drains every tick
//! - **Status messages**: transient feedback for clipboard operations
//! - **Dirty state tracking**: redraw only when something changed

use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Result;
use ratatui::Terminal;
use ratatui::backend::Backend;

use super::events::{Action, InputMode, poll_event};
use super::rendering::{RenderState, render_ui};
use crate::api::{ApiError, ContactFinderApi, ContactOutcome, SearchOutcome};
use crate::clipboard::copy_contact;
use crate::models::SearchCriteria;
use crate::opener::ExternalOpener;
use crate::store::ResultStore;
use crate::views::{PendingContact, ResultsView, SearchForm};

/// Duration for success status messages (milliseconds)
const STATUS_SUCCESS_DURATION_MS: u64 = 3000;
/// Duration for error status messages (milliseconds)
const STATUS_ERROR_DURATION_MS: u64 = 5000;
/// Rows skipped by PageUp / PageDown
const PAGE_SIZE: isize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// `/`: the search form
    Search,
    /// `/results`: the stored result list
    Results,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Search => "/",
            Route::Results => "/results",
        }
    }
}

/// Type of status message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Success,
    Error,
}

/// Transient status message with expiry
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub message_type: MessageType,
    pub expires_at: Instant,
}

/// Work handed to a request thread
#[derive(Debug, Clone)]
enum Job {
    Search(SearchCriteria),
    Contact(PendingContact),
}

/// What a request thread sends back
enum Completion {
    Search { criteria: SearchCriteria, result: Result<SearchOutcome, ApiError> },
    Contact { pending: PendingContact, result: Result<ContactOutcome, ApiError> },
}

impl Job {
    fn thread_name(&self) -> String {
        match self {
            Job::Search(_) => "search-request".to_string(),
            Job::Contact(pending) => format!("contact-request-{}", pending.request.company_id),
        }
    }

    fn run(self, api: &dyn ContactFinderApi) -> Completion {
        match self {
            Job::Search(criteria) => {
                let result = api.search(&criteria);
                Completion::Search { criteria, result }
            }
            Job::Contact(pending) => {
                let result = api.contact(&pending.request);
                Completion::Contact { pending, result }
            }
        }
    }

    fn fail(self, error: ApiError) -> Completion {
        match self {
            Job::Search(criteria) => Completion::Search { criteria, result: Err(error) },
            Job::Contact(pending) => Completion::Contact { pending, result: Err(error) },
        }
    }
}

pub struct App {
    route: Route,
    form: SearchForm,
    results: ResultsView,
    store: ResultStore,
    api: Arc<dyn ContactFinderApi>,
    opener: Box<dyn ExternalOpener>,
    completions_tx: Sender<Completion>,
    completions_rx: Receiver<Completion>,
    /// Requests dispatched whose completion has not been applied yet
    in_flight: usize,
    /// Typing goes into the results name filter
    filter_editing: bool,
    status_message: Option<StatusMessage>,
    should_quit: bool,
    needs_redraw: bool,
    last_draw_time: Instant,
}

impl App {
    pub fn new(
        api: Arc<dyn ContactFinderApi>,
        opener: Box<dyn ExternalOpener>,
        store: ResultStore,
    ) -> Self {
        let (completions_tx, completions_rx) = mpsc::channel();
        let results = ResultsView::from_store(&store);

        Self {
            route: Route::Search,
            form: SearchForm::new(),
            results,
            store,
            api,
            opener,
            completions_tx,
            completions_rx,
            in_flight: 0,
            filter_editing: false,
            status_message: None,
            should_quit: false,
            needs_redraw: true,
            last_draw_time: Instant::now(),
        }
    }

    /// Start on the results screen with whatever the store holds
    pub fn resume(mut self) -> Self {
        self.route = Route::Results;
        self
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn form(&self) -> &SearchForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut SearchForm {
        &mut self.form
    }

    pub fn results(&self) -> &ResultsView {
        &self.results
    }

    pub fn store(&self) -> &ResultStore {
        &self.store
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn status_message(&self) -> Option<&StatusMessage> {
        self.status_message.as_ref()
    }

    pub fn input_mode(&self) -> InputMode {
        match self.route {
            Route::Search => InputMode::Text,
            Route::Results if self.filter_editing => InputMode::Text,
            Route::Results => InputMode::Navigate,
        }
    }

    /// Set a transient status message with automatic expiry
    fn set_status(&mut self, text: impl Into<String>, message_type: MessageType, duration_ms: u64) {
        self.status_message = Some(StatusMessage {
            text: text.into(),
            message_type,
            expires_at: Instant::now() + Duration::from_millis(duration_ms),
        });
        self.needs_redraw = true;
    }

    /// Check and clear expired status messages
    fn check_and_clear_expired_status(&mut self) {
        if self.status_message.as_ref().is_some_and(|msg| Instant::now() >= msg.expires_at) {
            self.status_message = None;
            self.needs_redraw = true;
        }
    }

    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        while !self.should_quit {
            self.check_and_clear_expired_status();
            self.drain_completions();

            // Draw if dirty or if it's been >100ms (for terminal resize handling)
            let now = Instant::now();
            let elapsed = now.duration_since(self.last_draw_time);
            if self.needs_redraw || elapsed >= Duration::from_millis(100) {
                terminal.draw(|f| render_ui(f, &self.render_state()))?;
                self.needs_redraw = false;
                self.last_draw_time = now;
            }

            let action = poll_event(Duration::from_millis(100), self.input_mode())?;
            self.handle_action(action);
        }

        if self.in_flight > 0 {
            tracing::info!(in_flight = self.in_flight, "quitting with requests still in flight");
        }
        Ok(())
    }

    pub(crate) fn render_state(&self) -> RenderState<'_> {
        RenderState {
            route: self.route,
            form: &self.form,
            results: &self.results,
            filter_editing: self.filter_editing,
            in_flight: self.in_flight,
            status_message: self.status_message.as_ref(),
        }
    }

    /// Apply every completion that has arrived. Returns how many were applied.
    pub fn drain_completions(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(completion) = self.completions_rx.try_recv() {
            self.apply(completion);
            applied += 1;
        }
        applied
    }

    /// Block until every in-flight request has completed and been applied,
    /// or `timeout` passes. Returns whether nothing is left in flight.
    pub fn wait_for_requests(&mut self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        while self.in_flight > 0 {
            let remaining = deadline.saturating_duration_since(Instant::now());
            match self.completions_rx.recv_timeout(remaining) {
                Ok(completion) => self.apply(completion),
                Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => break,
            }
        }
        self.in_flight == 0
    }

    /// Handle a user action
    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::ShowSearch => self.navigate(Route::Search),
            Action::ShowResults => self.navigate(Route::Results),
            Action::None => {}
            other => match self.route {
                Route::Search => self.handle_search_action(other),
                Route::Results => self.handle_results_action(other),
            },
        }
    }

    fn navigate(&mut self, route: Route) {
        if self.route != route {
            tracing::debug!(from = self.route.path(), to = route.path(), "navigate");
            self.route = route;
            self.filter_editing = false;
            self.needs_redraw = true;
        }
    }

    fn handle_search_action(&mut self, action: Action) {
        match action {
            Action::Back => self.should_quit = true,
            Action::NextField | Action::MoveDown => self.form.focus_next(),
            Action::PreviousField | Action::MoveUp => self.form.focus_previous(),
            Action::InsertChar(c) => self.form.insert_char(c),
            Action::DeleteChar => self.form.delete_char(),
            Action::Submit => self.submit_search(),
            _ => return,
        }
        self.needs_redraw = true;
    }

    fn handle_results_action(&mut self, action: Action) {
        if self.filter_editing {
            match action {
                Action::InsertChar(c) => self.results.push_filter_char(c),
                Action::DeleteChar => self.results.pop_filter_char(),
                Action::Submit => self.filter_editing = false,
                Action::Back => {
                    self.results.clear_filter();
                    self.filter_editing = false;
                }
                Action::MoveUp => self.results.move_selection(-1),
                Action::MoveDown => self.results.move_selection(1),
                _ => return,
            }
            self.needs_redraw = true;
            return;
        }

        match action {
            Action::Back => self.navigate(Route::Search),
            Action::MoveUp => self.results.move_selection(-1),
            Action::MoveDown => self.results.move_selection(1),
            Action::PageUp => self.results.move_selection(-PAGE_SIZE),
            Action::PageDown => self.results.move_selection(PAGE_SIZE),
            Action::NextMethod => self.results.select_next_method(),
            Action::PreviousMethod => self.results.select_previous_method(),
            Action::Submit => self.start_contact(),
            Action::CopyContact => self.copy_selected_contact(),
            Action::StartFilter if !self.results.is_empty() => self.filter_editing = true,
            _ => return,
        }
        self.needs_redraw = true;
    }

    fn submit_search(&mut self) {
        if let Some(criteria) = self.form.prepare() {
            tracing::info!(criteria = %criteria.summary(), "search submitted");
            self.dispatch(Job::Search(criteria));
        }
    }

    fn start_contact(&mut self) {
        if let Some(pending) = self.results.begin_contact() {
            tracing::info!(
                company_id = %pending.request.company_id,
                method = %pending.request.contact_method,
                "contact submitted"
            );
            self.dispatch(Job::Contact(pending));
        }
    }

    fn copy_selected_contact(&mut self) {
        let Some(row) = self.results.selected_row() else {
            self.set_status("✗ Geen bedrijf geselecteerd", MessageType::Error, STATUS_ERROR_DURATION_MS);
            return;
        };

        match copy_contact(&row.company) {
            Ok(()) => {
                self.set_status(
                    "✓ Contact gekopieerd",
                    MessageType::Success,
                    STATUS_SUCCESS_DURATION_MS,
                );
            }
            Err(e) => {
                self.set_status(
                    format!("✗ Kopiëren mislukt: {}", e),
                    MessageType::Error,
                    STATUS_ERROR_DURATION_MS,
                );
            }
        }
    }

    /// Run `job` on its own thread; its completion arrives on the channel
    fn dispatch(&mut self, job: Job) {
        let api = Arc::clone(&self.api);
        let tx = self.completions_tx.clone();
        let retained = job.clone();

        self.in_flight += 1;
        let spawned = thread::Builder::new().name(job.thread_name()).spawn(move || {
            let completion = job.run(api.as_ref());
            // The receiver only goes away when the app has quit
            let _ = tx.send(completion);
        });

        if let Err(e) = spawned {
            tracing::error!(error = %e, "failed to spawn request thread");
            self.apply(retained.fail(ApiError::Spawn(e)));
        }
    }

    fn apply(&mut self, completion: Completion) {
        self.in_flight = self.in_flight.saturating_sub(1);
        self.needs_redraw = true;

        match completion {
            Completion::Search { criteria, result } => {
                if let Some(companies) = self.form.finish(result) {
                    self.store.put_search(criteria, companies);
                    self.results = ResultsView::from_store(&self.store);
                    self.navigate(Route::Results);
                }
            }
            Completion::Contact { pending, result } => {
                self.results.finish_contact(&pending, result, self.opener.as_mut());
            }
        }
    }
}
