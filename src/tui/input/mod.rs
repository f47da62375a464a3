//! Keyboard input handling
//!
//! Keys map onto `App` intent methods. Anything that needs the backend comes
//! back as a list of tasks for the caller to dispatch.

use crate::app::{App, Task};
use crate::selection::ChatMode;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Handle one key press, returning tasks to run in the background
pub fn handle_key(app: &mut App, key: KeyEvent) -> Vec<Task> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return Vec::new();
    }

    if app.dialog.is_open() {
        handle_dialog_key(app, key.code).into_iter().collect()
    } else {
        handle_list_key(app, key.code)
    }
}

fn handle_dialog_key(app: &mut App, code: KeyCode) -> Option<Task> {
    match code {
        KeyCode::Esc => app.close_dialog(),
        KeyCode::Enter => return app.submit_dialog(),
        KeyCode::Tab | KeyCode::Down => app.dialog_next_field(),
        KeyCode::Backspace => app.dialog_backspace(),
        KeyCode::Char(c) => app.dialog_input(c),
        _ => {}
    }
    None
}

fn handle_list_key(app: &mut App, code: KeyCode) -> Vec<Task> {
    match code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit(),
        KeyCode::Char('j') | KeyCode::Down => app.select_next(),
        KeyCode::Char('k') | KeyCode::Up => app.select_prev(),
        KeyCode::Enter => app.activate_cursor(),
        KeyCode::Char(' ') => app.toggle_cursor_agent(),
        KeyCode::Char('g') => app.toggle_group_mode(),
        KeyCode::Char('n') => app.open_create_dialog(),
        KeyCode::Char('c') if app.selection.mode() == ChatMode::Group => {
            let _ = app.launch();
        }
        KeyCode::Char('r') => return vec![app.refresh_catalog()],
        KeyCode::Char('x') => app.reset(),
        KeyCode::Char('d') => app.notices.dismiss(),
        _ => {}
    }
    Vec::new()
}
