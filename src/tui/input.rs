use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::model::task::Filter;

use super::app::{App, InputField, Mode};

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Bare modifier presses are noise
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }

    // The error popup blocks everything until dismissed, like alert()
    if app.error.is_some() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
            app.error = None;
        }
        return;
    }

    if app.show_help {
        app.show_help = false;
        return;
    }

    match app.mode {
        Mode::Navigate => handle_navigate(app, key),
        Mode::Insert => handle_insert(app, key),
        Mode::Search => handle_search(app, key),
        Mode::Confirm => handle_confirm(app, key),
    }
}

fn handle_navigate(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (KeyModifiers::NONE, KeyCode::Char('q')) => app.should_quit = true,

        // Cursor movement
        (_, KeyCode::Down) | (KeyModifiers::NONE, KeyCode::Char('j')) => {
            let view = app.view();
            if !view.rows.is_empty() && app.cursor + 1 < view.rows.len() {
                app.cursor += 1;
            }
        }
        (_, KeyCode::Up) | (KeyModifiers::NONE, KeyCode::Char('k')) => {
            app.cursor = app.cursor.saturating_sub(1);
        }
        (KeyModifiers::NONE, KeyCode::Char('g')) => app.cursor = 0,
        (KeyModifiers::SHIFT, KeyCode::Char('G')) => {
            let view = app.view();
            app.cursor = view.rows.len().saturating_sub(1);
        }

        // Toggle completion
        (KeyModifiers::NONE, KeyCode::Char(' ') | KeyCode::Char('x'))
        | (_, KeyCode::Enter) => app.toggle_selected(),

        // Add form
        (KeyModifiers::NONE, KeyCode::Char('a')) => {
            app.input_focus = InputField::Title;
            app.mode = Mode::Insert;
        }

        // Delete (with confirmation)
        (KeyModifiers::NONE, KeyCode::Char('d')) | (_, KeyCode::Delete) => {
            app.request_delete_selected();
        }

        // Search
        (KeyModifiers::NONE, KeyCode::Char('/')) => {
            app.search_input = app.controller.search().to_string();
            app.mode = Mode::Search;
        }
        // Esc clears an active search term
        (_, KeyCode::Esc) => {
            if !app.controller.search().is_empty() {
                app.search_input.clear();
                app.apply_search();
            }
        }

        // Filter tabs
        (KeyModifiers::NONE, KeyCode::Char('f')) | (_, KeyCode::Tab) => {
            let next = app.controller.filter().next();
            app.controller.set_filter(next);
        }
        (KeyModifiers::NONE, KeyCode::Char('1')) => app.controller.set_filter(Filter::All),
        (KeyModifiers::NONE, KeyCode::Char('2')) => app.controller.set_filter(Filter::Active),
        (KeyModifiers::NONE, KeyCode::Char('3')) => app.controller.set_filter(Filter::Completed),

        // Reload from the server
        (KeyModifiers::NONE, KeyCode::Char('r')) => app.refresh(),

        (KeyModifiers::NONE, KeyCode::Char('?')) => app.show_help = true,

        _ => {}
    }
}

fn handle_insert(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (_, KeyCode::Esc) => {
            app.title_input.clear();
            app.desc_input.clear();
            app.input_focus = InputField::Title;
            app.mode = Mode::Navigate;
        }
        (_, KeyCode::Enter) => app.submit_form(),
        (_, KeyCode::Tab) | (_, KeyCode::Down) => {
            app.input_focus = match app.input_focus {
                InputField::Title => InputField::Description,
                InputField::Description => InputField::Title,
            };
        }
        (_, KeyCode::BackTab) | (_, KeyCode::Up) => {
            app.input_focus = match app.input_focus {
                InputField::Title => InputField::Description,
                InputField::Description => InputField::Title,
            };
        }
        (_, KeyCode::Backspace) => {
            field_mut(app).pop();
        }
        (KeyModifiers::CONTROL, KeyCode::Char('u')) => field_mut(app).clear(),
        (_, KeyCode::Char(c)) => field_mut(app).push(c),
        _ => {}
    }
}

fn field_mut(app: &mut App) -> &mut String {
    match app.input_focus {
        InputField::Title => &mut app.title_input,
        InputField::Description => &mut app.desc_input,
    }
}

fn handle_search(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        // Esc cancels the prompt and the term with it
        (_, KeyCode::Esc) => {
            app.search_input.clear();
            app.apply_search();
            app.mode = Mode::Navigate;
        }
        // Enter keeps the term active
        (_, KeyCode::Enter) => app.mode = Mode::Navigate,
        (_, KeyCode::Backspace) => {
            app.search_input.pop();
            app.apply_search();
        }
        (KeyModifiers::CONTROL, KeyCode::Char('u')) => {
            app.search_input.clear();
            app.apply_search();
        }
        (_, KeyCode::Char(c)) => {
            app.search_input.push(c);
            app.apply_search();
        }
        _ => {}
    }
}

fn handle_confirm(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (KeyModifiers::NONE, KeyCode::Char('y')) => app.confirm_delete(),
        (KeyModifiers::NONE, KeyCode::Char('n')) | (_, KeyCode::Esc) => {
            app.pending_delete = None;
            app.mode = Mode::Navigate;
        }
        _ => {}
    }
}
