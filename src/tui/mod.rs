//! Interactive client: search form and results list in the terminal.
mod app;
mod events;
mod layout;
mod rendering;
mod terminal;

use std::sync::Arc;

use anyhow::Result;
pub use app::{App, MessageType, Route, StatusMessage};
pub use events::{Action, InputMode, key_to_action};
use terminal::TerminalManager;

use crate::api::HttpApiClient;
use crate::config::Settings;
use crate::opener::SystemOpener;

/// Run the interactive TUI until the user quits
pub fn run_interactive(settings: &Settings, resume: bool) -> Result<()> {
    let api = HttpApiClient::new(settings.api_url.as_str(), settings.request_timeout)?;
    let store = settings.open_store();
    tracing::info!(
        api_url = %settings.api_url,
        stored = store.get().len(),
        resume,
        "starting interactive client"
    );

    let mut app = App::new(Arc::new(api), Box::new(SystemOpener), store);
    if resume {
        app = app.resume();
    }

    let mut manager = TerminalManager::new()?;
    let res = app.run(manager.terminal_mut());
    manager.restore()?;

    res
}
