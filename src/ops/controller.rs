use tracing::error;

use crate::api::TodoApi;
use crate::model::task::{Filter, NewTask, Task, TaskUpdate};
use crate::ops::view::{self, Stats, ViewModel};

/// User-interaction capability injected into the controller, standing in
/// for the confirm/alert dialogs of a graphical front end. The CLI answers
/// `confirm` from stdin; the TUI answers it from a modal it has already
/// shown, and queues `notify` messages for its error popup.
pub trait Ui {
    fn confirm(&mut self, message: &str) -> bool;
    fn notify(&mut self, message: &str);
}

pub const CONFIRM_DELETE: &str = "Are you sure you want to delete this todo?";

/// How a delete attempt ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    /// The user declined the confirmation; nothing was sent
    Declined,
    Failed,
}

/// The task list controller: an in-memory cache of tasks plus the transient
/// filter and search term, with every state change round-tripping through
/// the server followed by a full reload. Nothing is ever mutated locally.
pub struct Controller<A: TodoApi, U: Ui> {
    api: A,
    ui: U,
    tasks: Vec<Task>,
    filter: Filter,
    search: String,
}

impl<A: TodoApi, U: Ui> Controller<A, U> {
    pub fn new(api: A, ui: U) -> Self {
        Controller {
            api,
            ui,
            tasks: Vec::new(),
            filter: Filter::default(),
            search: String::new(),
        }
    }

    /// Fetch the full collection and replace the cache. On failure the
    /// prior cache stays visible and the user gets one notification; there
    /// is no automatic retry.
    pub fn load(&mut self) -> bool {
        match self.api.list() {
            Ok(tasks) => {
                self.tasks = tasks;
                true
            }
            Err(err) => {
                error!(error = %err, "loading todos failed");
                self.ui.notify("Failed to load todos. Please refresh the page.");
                false
            }
        }
    }

    /// Create a task and resynchronize. An empty (after trimming) title is
    /// silently rejected without a request. Returns true when the creation
    /// succeeded, telling the caller it may clear its input fields; on
    /// failure the caller keeps them so the user can retry without
    /// retyping.
    pub fn create(&mut self, title: &str, description: &str) -> bool {
        let new = NewTask::from_input(title, description);
        if new.title.is_empty() {
            return false;
        }
        match self.api.create(&new) {
            Ok(()) => {
                self.load();
                true
            }
            Err(err) => {
                error!(error = %err, "adding todo failed");
                self.ui.notify("Failed to add todo. Please try again.");
                false
            }
        }
    }

    /// Flip a task's completed flag server-side, then resynchronize.
    /// No optimistic local toggle.
    pub fn toggle(&mut self, id: i64) -> bool {
        match self.api.toggle(id) {
            Ok(()) => {
                self.load();
                true
            }
            Err(err) => {
                error!(error = %err, id, "toggling todo failed");
                self.ui.notify("Failed to update todo. Please try again.");
                false
            }
        }
    }

    /// Replace a task's fields, then resynchronize.
    pub fn update(&mut self, id: i64, update: &TaskUpdate) -> bool {
        match self.api.update(id, update) {
            Ok(()) => {
                self.load();
                true
            }
            Err(err) => {
                error!(error = %err, id, "updating todo failed");
                self.ui.notify("Failed to update todo. Please try again.");
                false
            }
        }
    }

    /// Ask for confirmation, then delete and resynchronize. A declined
    /// confirmation sends nothing.
    pub fn delete(&mut self, id: i64) -> DeleteOutcome {
        if !self.ui.confirm(CONFIRM_DELETE) {
            return DeleteOutcome::Declined;
        }
        match self.api.delete(id) {
            Ok(()) => {
                self.load();
                DeleteOutcome::Deleted
            }
            Err(err) => {
                error!(error = %err, id, "deleting todo failed");
                self.ui.notify("Failed to delete todo. Please try again.");
                DeleteOutcome::Failed
            }
        }
    }

    /// Transient UI state; re-derives the view from the cache, no network.
    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    /// Transient UI state; re-derives the view from the cache, no network.
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    /// The full cache, in server order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// The derived view under the current filter and search term.
    pub fn view(&self) -> ViewModel {
        view::build_view(&self.tasks, self.filter, &self.search)
    }

    /// Counts over the full cache, independent of filter and search.
    pub fn stats(&self) -> Stats {
        view::stats(&self.tasks)
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn ui_mut(&mut self) -> &mut U {
        &mut self.ui
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiError;
    use std::cell::RefCell;

    /// Which calls reached the fake service
    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Call {
        List,
        Get(i64),
        Create(NewTask),
        Update(i64),
        Toggle(i64),
        Delete(i64),
    }

    /// In-memory stand-in for the server. `fail_next` makes the next
    /// non-list call answer with a 500; `fail_list` does the same for
    /// loads.
    struct FakeApi {
        tasks: RefCell<Vec<Task>>,
        calls: RefCell<Vec<Call>>,
        next_id: RefCell<i64>,
        fail_next: RefCell<bool>,
        fail_list: RefCell<bool>,
    }

    impl FakeApi {
        fn with_tasks(tasks: Vec<Task>) -> FakeApi {
            let next_id = tasks.iter().map(|t| t.id).max().unwrap_or(0) + 1;
            FakeApi {
                tasks: RefCell::new(tasks),
                calls: RefCell::new(Vec::new()),
                next_id: RefCell::new(next_id),
                fail_next: RefCell::new(false),
                fail_list: RefCell::new(false),
            }
        }

        fn server_error() -> ApiError {
            ApiError::Status {
                status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            }
        }

        fn take_failure(&self) -> Result<(), ApiError> {
            if self.fail_next.replace(false) {
                Err(Self::server_error())
            } else {
                Ok(())
            }
        }
    }

    impl TodoApi for FakeApi {
        fn list(&self) -> Result<Vec<Task>, ApiError> {
            self.calls.borrow_mut().push(Call::List);
            if self.fail_list.replace(false) {
                return Err(Self::server_error());
            }
            Ok(self.tasks.borrow().clone())
        }

        fn get(&self, id: i64) -> Result<Option<Task>, ApiError> {
            self.calls.borrow_mut().push(Call::Get(id));
            Ok(self.tasks.borrow().iter().find(|t| t.id == id).cloned())
        }

        fn create(&self, new: &NewTask) -> Result<(), ApiError> {
            self.calls.borrow_mut().push(Call::Create(new.clone()));
            self.take_failure()?;
            let id = self.next_id.replace_with(|id| *id + 1);
            self.tasks.borrow_mut().push(Task {
                id,
                title: new.title.clone(),
                description: new.description.clone(),
                completed: new.completed,
            });
            Ok(())
        }

        fn update(&self, id: i64, update: &TaskUpdate) -> Result<(), ApiError> {
            self.calls.borrow_mut().push(Call::Update(id));
            self.take_failure()?;
            let mut tasks = self.tasks.borrow_mut();
            let task = tasks
                .iter_mut()
                .find(|t| t.id == id)
                .ok_or(ApiError::Status {
                    status: reqwest::StatusCode::NOT_FOUND,
                })?;
            task.title = update.title.clone();
            task.description = update.description.clone();
            task.completed = update.completed;
            Ok(())
        }

        fn toggle(&self, id: i64) -> Result<(), ApiError> {
            self.calls.borrow_mut().push(Call::Toggle(id));
            self.take_failure()?;
            let mut tasks = self.tasks.borrow_mut();
            let task = tasks
                .iter_mut()
                .find(|t| t.id == id)
                .ok_or(ApiError::Status {
                    status: reqwest::StatusCode::NOT_FOUND,
                })?;
            task.completed = !task.completed;
            Ok(())
        }

        fn delete(&self, id: i64) -> Result<(), ApiError> {
            self.calls.borrow_mut().push(Call::Delete(id));
            self.take_failure()?;
            self.tasks.borrow_mut().retain(|t| t.id != id);
            Ok(())
        }
    }

    /// Records notifications; answers every confirm with a fixed value.
    struct RecordingUi {
        answer: bool,
        confirms: Vec<String>,
        notices: Vec<String>,
    }

    impl RecordingUi {
        fn answering(answer: bool) -> RecordingUi {
            RecordingUi {
                answer,
                confirms: Vec::new(),
                notices: Vec::new(),
            }
        }
    }

    impl Ui for RecordingUi {
        fn confirm(&mut self, message: &str) -> bool {
            self.confirms.push(message.to_string());
            self.answer
        }

        fn notify(&mut self, message: &str) {
            self.notices.push(message.to_string());
        }
    }

    fn task(id: i64, title: &str, completed: bool) -> Task {
        Task {
            id,
            title: title.to_string(),
            description: None,
            completed,
        }
    }

    fn sample_tasks() -> Vec<Task> {
        vec![task(1, "Buy milk", false), task(2, "Pay bills", true)]
    }

    fn controller_with(
        tasks: Vec<Task>,
        answer: bool,
    ) -> Controller<FakeApi, RecordingUi> {
        let mut c = Controller::new(FakeApi::with_tasks(tasks), RecordingUi::answering(answer));
        assert!(c.load());
        c
    }

    #[test]
    fn load_replaces_the_cache() {
        let c = controller_with(sample_tasks(), true);
        assert_eq!(c.tasks().len(), 2);
        assert_eq!(c.tasks()[0].title, "Buy milk");
    }

    #[test]
    fn failed_load_keeps_prior_cache_and_notifies_once() {
        let mut c = controller_with(sample_tasks(), true);
        *c.api().fail_list.borrow_mut() = true;

        assert!(!c.load());
        assert_eq!(c.tasks().len(), 2);
        assert_eq!(
            c.ui_mut().notices,
            vec!["Failed to load todos. Please refresh the page."]
        );
    }

    #[test]
    fn create_sends_trimmed_payload_and_resyncs() {
        let mut c = controller_with(Vec::new(), true);
        assert!(c.create("  Buy milk ", " from the corner store "));

        assert_eq!(c.tasks().len(), 1);
        assert_eq!(c.tasks()[0].title, "Buy milk");
        assert_eq!(
            c.tasks()[0].description.as_deref(),
            Some("from the corner store")
        );
        assert!(!c.tasks()[0].completed);
        // create, then the reload
        let calls = c.api().calls.borrow();
        assert!(matches!(calls.last(), Some(Call::List)));
    }

    #[test]
    fn empty_title_sends_no_request_and_no_notification() {
        let mut c = controller_with(sample_tasks(), true);
        let calls_before = c.api().calls.borrow().len();

        assert!(!c.create("", "desc"));
        assert!(!c.create("   ", "desc"));

        assert_eq!(c.api().calls.borrow().len(), calls_before);
        assert_eq!(c.tasks().len(), 2);
        assert!(c.ui_mut().notices.is_empty());
    }

    #[test]
    fn failed_create_notifies_and_leaves_cache_alone() {
        let mut c = controller_with(sample_tasks(), true);
        *c.api().fail_next.borrow_mut() = true;

        assert!(!c.create("New task", ""));
        assert_eq!(c.tasks().len(), 2);
        assert_eq!(
            c.ui_mut().notices,
            vec!["Failed to add todo. Please try again."]
        );
        // The failed create must not be followed by a reload
        assert!(matches!(
            c.api().calls.borrow().last(),
            Some(Call::Create(_))
        ));
    }

    #[test]
    fn toggle_roundtrips_through_the_server() {
        let mut c = controller_with(sample_tasks(), true);
        assert!(c.toggle(1));
        assert!(c.tasks()[0].completed);
    }

    #[test]
    fn failed_toggle_leaves_cache_unchanged_with_one_notification() {
        let mut c = controller_with(sample_tasks(), true);
        *c.api().fail_next.borrow_mut() = true;

        assert!(!c.toggle(1));
        assert!(!c.tasks()[0].completed);
        assert_eq!(
            c.ui_mut().notices,
            vec!["Failed to update todo. Please try again."]
        );
        // No automatic retry: exactly one toggle call went out
        let toggles = c
            .api()
            .calls
            .borrow()
            .iter()
            .filter(|call| matches!(call, Call::Toggle(_)))
            .count();
        assert_eq!(toggles, 1);
    }

    #[test]
    fn delete_asks_for_confirmation_first() {
        let mut c = controller_with(sample_tasks(), true);
        assert_eq!(c.delete(1), DeleteOutcome::Deleted);
        assert_eq!(c.ui_mut().confirms, vec![CONFIRM_DELETE]);
        assert_eq!(c.tasks().len(), 1);
        assert_eq!(c.tasks()[0].id, 2);
    }

    #[test]
    fn declined_delete_sends_nothing() {
        let mut c = controller_with(sample_tasks(), false);
        let calls_before = c.api().calls.borrow().len();

        assert_eq!(c.delete(1), DeleteOutcome::Declined);
        assert_eq!(c.api().calls.borrow().len(), calls_before);
        assert_eq!(c.tasks().len(), 2);
    }

    #[test]
    fn failed_delete_notifies() {
        let mut c = controller_with(sample_tasks(), true);
        *c.api().fail_next.borrow_mut() = true;

        assert_eq!(c.delete(1), DeleteOutcome::Failed);
        assert_eq!(c.tasks().len(), 2);
        assert_eq!(
            c.ui_mut().notices,
            vec!["Failed to delete todo. Please try again."]
        );
    }

    #[test]
    fn update_resyncs_the_cache() {
        let mut c = controller_with(sample_tasks(), true);
        let update = TaskUpdate {
            title: "Buy oat milk".to_string(),
            description: Some("the blue carton".to_string()),
            completed: true,
        };
        assert!(c.update(1, &update));
        assert_eq!(c.tasks()[0].title, "Buy oat milk");
        assert!(c.tasks()[0].completed);
    }

    #[test]
    fn filter_and_search_touch_no_network() {
        let mut c = controller_with(sample_tasks(), true);
        let calls_before = c.api().calls.borrow().len();

        c.set_filter(Filter::Active);
        c.set_search("pay");

        assert_eq!(c.api().calls.borrow().len(), calls_before);
    }

    #[test]
    fn view_applies_filter_then_search() {
        let mut c = controller_with(sample_tasks(), true);

        c.set_filter(Filter::Active);
        let ids: Vec<i64> = c.view().rows.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1]);

        c.set_filter(Filter::Completed);
        let ids: Vec<i64> = c.view().rows.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2]);

        c.set_filter(Filter::All);
        c.set_search("pay");
        let ids: Vec<i64> = c.view().rows.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2]);
    }

    #[test]
    fn stats_ignore_filter_and_search() {
        let mut c = controller_with(sample_tasks(), true);
        c.set_filter(Filter::Completed);
        c.set_search("nothing matches this");

        let s = c.stats();
        assert_eq!((s.total, s.active, s.completed), (2, 1, 1));
    }
}
