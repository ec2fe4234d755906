use serde::Serialize;

use crate::model::task::{Filter, Task, matches_search, normalize_search};

/// Why the derived view has no rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyState {
    /// The cache itself has nothing to show for this filter
    NoTasks,
    /// A search term is active and nothing matched it
    NoMatches,
}

impl EmptyState {
    pub fn message(self) -> &'static str {
        match self {
            EmptyState::NoTasks => "No todos yet. Add one to get started!",
            EmptyState::NoMatches => "No todos found matching your search",
        }
    }
}

/// One visible task row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskRow {
    pub id: i64,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub completed: bool,
}

impl From<&Task> for TaskRow {
    fn from(task: &Task) -> TaskRow {
        TaskRow {
            id: task.id,
            title: task.title.clone(),
            description: task.description.clone(),
            completed: task.completed,
        }
    }
}

/// The derived view: the subset of the cache currently shown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewModel {
    pub rows: Vec<TaskRow>,
    /// `Some` exactly when `rows` is empty
    pub empty: Option<EmptyState>,
}

impl ViewModel {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Derive the view: filter first, then search, order preserved from the
/// cache (which preserves server order). Pure; no network, no UI.
pub fn build_view(tasks: &[Task], filter: Filter, search: &str) -> ViewModel {
    let term = normalize_search(search);
    let rows: Vec<TaskRow> = tasks
        .iter()
        .filter(|t| filter.matches(t))
        .filter(|t| matches_search(t, &term))
        .map(TaskRow::from)
        .collect();

    let empty = if rows.is_empty() {
        Some(if term.is_empty() {
            EmptyState::NoTasks
        } else {
            EmptyState::NoMatches
        })
    } else {
        None
    };

    ViewModel { rows, empty }
}

/// Counts shown in the stats line. Always computed over the full cache,
/// never the filtered view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub total: usize,
    pub active: usize,
    pub completed: usize,
}

pub fn stats(tasks: &[Task]) -> Stats {
    let completed = tasks.iter().filter(|t| t.completed).count();
    Stats {
        total: tasks.len(),
        active: tasks.len() - completed,
        completed,
    }
}

// ---------------------------------------------------------------------------
// Markup rendering
// ---------------------------------------------------------------------------

/// Escape task-supplied text for insertion into markup. Everything that can
/// open a tag, an entity, or an attribute is replaced; nothing the user
/// typed is ever interpolated raw.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render the derived view as an HTML fragment (the `tk list --html`
/// output), one `todo-item` block per row.
pub fn render_markup(view: &ViewModel) -> String {
    if let Some(empty) = view.empty {
        return format!(
            "<div class=\"empty-state\"><p>{}</p></div>\n",
            empty.message()
        );
    }

    let mut out = String::new();
    for row in &view.rows {
        let class = if row.completed {
            "todo-item completed"
        } else {
            "todo-item"
        };
        let checked = if row.completed { " checked" } else { "" };
        out.push_str(&format!("<div class=\"{}\">\n", class));
        out.push_str(&format!(
            "  <input type=\"checkbox\" class=\"checkbox\" data-id=\"{}\"{}>\n",
            row.id, checked
        ));
        out.push_str(&format!(
            "  <div class=\"todo-title\">{}</div>\n",
            escape_html(&row.title)
        ));
        if let Some(description) = &row.description {
            out.push_str(&format!(
                "  <div class=\"todo-description\">{}</div>\n",
                escape_html(description)
            ));
        }
        out.push_str(&format!(
            "  <button class=\"todo-delete\" data-id=\"{}\">delete</button>\n",
            row.id
        ));
        out.push_str("</div>\n");
    }
    out
}
