use serde::{Deserialize, Serialize};

/// A task as the server reports it.
///
/// The wire shape is `{id, title, description: string|null, completed}`.
/// Extra server-side fields (timestamps and the like) are ignored on decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Server-assigned, stable identifier
    pub id: i64,
    /// Non-empty after creation (enforced client-side before submission)
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub completed: bool,
}

impl Task {
    /// The character used inside the checkbox `[ ]`
    pub fn checkbox_char(&self) -> char {
        if self.completed { 'x' } else { ' ' }
    }
}

/// Creation payload. Always submitted with `completed: false`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewTask {
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
}

impl NewTask {
    /// Build a creation payload from raw input fields. Both fields are
    /// trimmed; an empty description becomes `None`.
    pub fn from_input(title: &str, description: &str) -> NewTask {
        let description = description.trim();
        NewTask {
            title: title.trim().to_string(),
            description: if description.is_empty() {
                None
            } else {
                Some(description.to_string())
            },
            completed: false,
        }
    }
}

/// Full-replace payload for the update endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskUpdate {
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
}

impl From<&Task> for TaskUpdate {
    fn from(task: &Task) -> TaskUpdate {
        TaskUpdate {
            title: task.title.clone(),
            description: task.description.clone(),
            completed: task.completed,
        }
    }
}

/// Which subset of the cache is shown
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl Filter {
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Active, Filter::Completed];

    pub fn as_str(self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Active => "active",
            Filter::Completed => "completed",
        }
    }

    /// Pure predicate over `completed`
    pub fn matches(self, task: &Task) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => !task.completed,
            Filter::Completed => task.completed,
        }
    }

    /// The next filter tab (wraps around)
    pub fn next(self) -> Filter {
        match self {
            Filter::All => Filter::Active,
            Filter::Active => Filter::Completed,
            Filter::Completed => Filter::All,
        }
    }
}

impl std::str::FromStr for Filter {
    type Err = String;

    fn from_str(s: &str) -> Result<Filter, String> {
        match s {
            "all" => Ok(Filter::All),
            "active" => Ok(Filter::Active),
            "completed" | "done" => Ok(Filter::Completed),
            other => Err(format!(
                "invalid filter '{}' (expected all, active, or completed)",
                other
            )),
        }
    }
}

/// Case-insensitive substring match against title and description.
///
/// `term` must already be trimmed and lowercased; callers with raw input
/// should normalize via [`normalize_search`] first.
pub fn matches_search(task: &Task, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    if task.title.to_lowercase().contains(term) {
        return true;
    }
    task.description
        .as_deref()
        .is_some_and(|d| d.to_lowercase().contains(term))
}

/// Normalize a raw search term: trim whitespace, lowercase.
pub fn normalize_search(raw: &str) -> String {
    raw.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: i64, title: &str, completed: bool) -> Task {
        Task {
            id,
            title: title.to_string(),
            description: None,
            completed,
        }
    }

    #[test]
    fn filter_predicates() {
        let open = task(1, "Buy milk", false);
        let done = task(2, "Pay bills", true);

        assert!(Filter::All.matches(&open));
        assert!(Filter::All.matches(&done));
        assert!(Filter::Active.matches(&open));
        assert!(!Filter::Active.matches(&done));
        assert!(!Filter::Completed.matches(&open));
        assert!(Filter::Completed.matches(&done));
    }

    #[test]
    fn filter_parse_roundtrip() {
        for f in Filter::ALL {
            assert_eq!(f.as_str().parse::<Filter>(), Ok(f));
        }
        assert_eq!("done".parse::<Filter>(), Ok(Filter::Completed));
        assert!("backwards".parse::<Filter>().is_err());
    }

    #[test]
    fn search_is_case_insensitive_over_title_and_description() {
        let mut t = task(1, "Buy Milk", false);
        t.description = Some("from the Corner store".to_string());

        assert!(matches_search(&t, &normalize_search("MILK")));
        assert!(matches_search(&t, &normalize_search("corner")));
        assert!(!matches_search(&t, &normalize_search("bread")));
    }

    #[test]
    fn empty_or_whitespace_term_matches_everything() {
        let t = task(1, "Buy milk", false);
        assert!(matches_search(&t, &normalize_search("")));
        assert!(matches_search(&t, &normalize_search("   ")));
    }

    #[test]
    fn search_ignores_missing_description() {
        let t = task(1, "Buy milk", false);
        assert!(!matches_search(&t, "store"));
    }

    #[test]
    fn task_decodes_wire_shape() {
        let json = r#"{"id":3,"title":"Buy milk","description":null,"completed":false}"#;
        let t: Task = serde_json::from_str(json).unwrap();
        assert_eq!(t, task(3, "Buy milk", false));
    }

    #[test]
    fn task_decode_tolerates_unknown_server_fields() {
        let json = r#"{"id":7,"title":"Pay bills","description":"rent","completed":true,"createdAt":"2025-01-01T00:00:00"}"#;
        let t: Task = serde_json::from_str(json).unwrap();
        assert_eq!(t.id, 7);
        assert_eq!(t.description.as_deref(), Some("rent"));
        assert!(t.completed);
    }

    #[test]
    fn new_task_trims_and_drops_empty_description() {
        let n = NewTask::from_input("  Buy milk  ", "   ");
        assert_eq!(n.title, "Buy milk");
        assert_eq!(n.description, None);
        assert!(!n.completed);

        let n = NewTask::from_input("Buy milk", " 2% ");
        assert_eq!(n.description.as_deref(), Some("2%"));
    }
}
