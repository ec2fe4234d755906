use crate::api::HttpClient;
use crate::ops::controller::{Controller, Ui};
use crate::ops::view::ViewModel;

use super::theme::Theme;

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    /// The add form is open (title + description fields)
    Insert,
    /// The search prompt is active; the view filters live while typing
    Search,
    /// A delete is awaiting y/n
    Confirm,
}

/// Which field of the add form has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    Title,
    Description,
}

/// The TUI's implementation of the controller's [`Ui`] capability.
///
/// Confirmations are resolved by the confirm modal before the controller
/// runs, so `confirm` just replays that answer; notifications queue up for
/// the error popup.
#[derive(Debug, Default)]
pub struct Prompter {
    pub assume_yes: bool,
    pub notices: Vec<String>,
}

impl Ui for Prompter {
    fn confirm(&mut self, _message: &str) -> bool {
        self.assume_yes
    }

    fn notify(&mut self, message: &str) {
        self.notices.push(message.to_string());
    }
}

/// Main application state
pub struct App {
    pub controller: Controller<HttpClient, Prompter>,
    pub mode: Mode,
    pub should_quit: bool,
    pub theme: Theme,
    /// Cursor index into the derived view's rows
    pub cursor: usize,
    /// Scroll offset in display lines
    pub scroll_offset: usize,
    pub show_help: bool,
    /// Add form fields (kept populated when a create fails, so the user
    /// can retry without retyping)
    pub title_input: String,
    pub desc_input: String,
    pub input_focus: InputField,
    /// Search prompt text; mirrored into the controller on every keystroke
    pub search_input: String,
    /// Task id awaiting delete confirmation
    pub pending_delete: Option<i64>,
    /// Blocking error popup, the terminal stand-in for `alert()`
    pub error: Option<String>,
}

impl App {
    pub fn new(controller: Controller<HttpClient, Prompter>) -> Self {
        App {
            controller,
            mode: Mode::Navigate,
            should_quit: false,
            theme: Theme::default(),
            cursor: 0,
            scroll_offset: 0,
            show_help: false,
            title_input: String::new(),
            desc_input: String::new(),
            input_focus: InputField::Title,
            search_input: String::new(),
            pending_delete: None,
            error: None,
        }
    }

    /// Move queued notifications into the error popup.
    pub fn take_notices(&mut self) {
        let notices = std::mem::take(&mut self.controller.ui_mut().notices);
        if !notices.is_empty() {
            self.error = Some(notices.join("\n"));
        }
    }

    /// The derived view under the current filter and search term.
    pub fn view(&self) -> ViewModel {
        self.controller.view()
    }

    /// Keep the cursor inside the (possibly shrunken) view.
    pub fn clamp_cursor(&mut self, view: &ViewModel) {
        if view.rows.is_empty() {
            self.cursor = 0;
        } else if self.cursor >= view.rows.len() {
            self.cursor = view.rows.len() - 1;
        }
    }

    /// The id under the cursor, if any row is visible.
    pub fn selected_id(&self) -> Option<i64> {
        let view = self.view();
        view.rows.get(self.cursor.min(view.rows.len().saturating_sub(1)))
            .map(|row| row.id)
    }

    // -----------------------------------------------------------------------
    // Controller operations (each drains notifications into the popup)
    // -----------------------------------------------------------------------

    pub fn refresh(&mut self) {
        self.controller.load();
        self.take_notices();
    }

    pub fn toggle_selected(&mut self) {
        if let Some(id) = self.selected_id() {
            self.controller.toggle(id);
            self.take_notices();
        }
    }

    /// Open the confirm modal for the task under the cursor.
    pub fn request_delete_selected(&mut self) {
        if let Some(id) = self.selected_id() {
            self.pending_delete = Some(id);
            self.mode = Mode::Confirm;
        }
    }

    /// The modal answered yes: run the delete with the confirm pre-answered.
    pub fn confirm_delete(&mut self) {
        self.mode = Mode::Navigate;
        let Some(id) = self.pending_delete.take() else {
            return;
        };
        self.controller.ui_mut().assume_yes = true;
        self.controller.delete(id);
        self.controller.ui_mut().assume_yes = false;
        self.take_notices();
    }

    /// Submit the add form. On success the fields clear and the form
    /// closes; on failure (including a silently rejected empty title) the
    /// form stays open with the fields intact.
    pub fn submit_form(&mut self) {
        let created = self.controller.create(&self.title_input, &self.desc_input);
        if created {
            self.title_input.clear();
            self.desc_input.clear();
            self.input_focus = InputField::Title;
            self.mode = Mode::Navigate;
        }
        self.take_notices();
    }

    /// Mirror the live search prompt into the controller.
    pub fn apply_search(&mut self) {
        self.controller.set_search(self.search_input.clone());
    }
}
