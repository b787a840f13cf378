//! Keyboard event handling, split by whether the dropdown is open.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::App;
use crate::multiselect::StripControl;

use super::Action;

/// Handle keyboard events and return the appropriate action.
pub fn handle_key_event(app: &App, key: KeyEvent) -> Action {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Action::Quit;
    }

    if app.widget.picker().is_open() {
        handle_dropdown_mode(key)
    } else {
        handle_normal_mode(app, key)
    }
}

fn handle_dropdown_mode(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char(' ') => Action::ClosePicker,
        KeyCode::Up | KeyCode::Char('k') => Action::PickPrev,
        KeyCode::Down | KeyCode::Char('j') => Action::PickNext,
        _ => Action::None,
    }
}

fn handle_normal_mode(app: &App, key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Char(' ') => Action::TogglePicker,
        KeyCode::Up | KeyCode::Char('k') => Action::PickPrev,
        KeyCode::Down | KeyCode::Char('j') => Action::PickNext,
        KeyCode::Enter | KeyCode::Char('a') => Action::AddSelected,
        KeyCode::Backspace | KeyCode::Char('x') => remove_last(app),
        KeyCode::Char('c') => Action::Clear,
        KeyCode::Char('e') => Action::ToggleEnabled,
        KeyCode::Char('n') => Action::ToggleNumbering,
        _ => Action::None,
    }
}

/// Same as clicking the last remove button
fn remove_last(app: &App) -> Action {
    app.widget
        .strip()
        .iter()
        .rev()
        .find(|c| matches!(c, StripControl::RemoveButton { .. }))
        .map(|c| Action::RemoveEntry(c.entry()))
        .unwrap_or(Action::None)
}
