use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};

/// How plain character keys are interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Characters are typed into a field (search form, results filter)
    Text,
    /// Characters are commands (results list)
    Navigate,
}

/// User actions from keyboard events
#[derive(Debug, PartialEq)]
pub enum Action {
    Quit,
    Back,
    ShowSearch,
    ShowResults,
    NextField,
    PreviousField,
    MoveUp,
    MoveDown,
    PageUp,
    PageDown,
    NextMethod,
    PreviousMethod,
    Submit,
    CopyContact,
    StartFilter,
    InsertChar(char),
    DeleteChar,
    None,
}

/// Poll for keyboard events and convert to actions
pub fn poll_event(timeout: Duration, mode: InputMode) -> anyhow::Result<Action> {
    if event::poll(timeout)?
        && let Event::Key(key) = event::read()?
    {
        return Ok(key_to_action(key, mode));
    }
    Ok(Action::None)
}

pub fn key_to_action(key: KeyEvent, mode: InputMode) -> Action {
    match (key.code, key.modifiers) {
        // Global
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,
        (KeyCode::Esc, _) => Action::Back,
        (KeyCode::F(1), _) => Action::ShowSearch,
        (KeyCode::F(2), _) => Action::ShowResults,
        (KeyCode::Up, _) => Action::MoveUp,
        (KeyCode::Down, _) => Action::MoveDown,
        (KeyCode::PageUp, _) => Action::PageUp,
        (KeyCode::PageDown, _) => Action::PageDown,
        (KeyCode::Enter, _) => Action::Submit,
        (KeyCode::Char('y'), KeyModifiers::CONTROL) => Action::CopyContact,
        (KeyCode::Backspace, _) => Action::DeleteChar,

        _ => match mode {
            InputMode::Text => text_key(key),
            InputMode::Navigate => navigate_key(key),
        },
    }
}

fn text_key(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Tab, _) => Action::NextField,
        (KeyCode::BackTab, _) => Action::PreviousField,
        (KeyCode::Char(c), KeyModifiers::NONE) | (KeyCode::Char(c), KeyModifiers::SHIFT) => {
            Action::InsertChar(c)
        }
        _ => Action::None,
    }
}

fn navigate_key(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Right, _) | (KeyCode::Tab, _) => Action::NextMethod,
        (KeyCode::Left, _) | (KeyCode::BackTab, _) => Action::PreviousMethod,
        (KeyCode::Char('k'), KeyModifiers::NONE) => Action::MoveUp,
        (KeyCode::Char('j'), KeyModifiers::NONE) => Action::MoveDown,
        (KeyCode::Char('l'), KeyModifiers::NONE) => Action::NextMethod,
        (KeyCode::Char('h'), KeyModifiers::NONE) => Action::PreviousMethod,
        (KeyCode::Char('/'), KeyModifiers::NONE) => Action::StartFilter,
        (KeyCode::Char('q'), KeyModifiers::NONE) => Action::Quit,
        _ => Action::None,
    }
}
