use serde::Serialize;

use crate::model::task::{Filter, Task};
use crate::ops::view::{Stats, TaskRow, ViewModel};

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct TaskJson {
    pub id: i64,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub completed: bool,
}

#[derive(Serialize)]
pub struct ListJson {
    pub filter: Filter,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    pub tasks: Vec<TaskJson>,
}

#[derive(Serialize)]
pub struct StatsJson {
    pub total: usize,
    pub active: usize,
    pub completed: usize,
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

pub fn task_to_json(task: &Task) -> TaskJson {
    TaskJson {
        id: task.id,
        title: task.title.clone(),
        description: task.description.clone(),
        completed: task.completed,
    }
}

pub fn row_to_json(row: &TaskRow) -> TaskJson {
    TaskJson {
        id: row.id,
        title: row.title.clone(),
        description: row.description.clone(),
        completed: row.completed,
    }
}

pub fn stats_to_json(stats: &Stats) -> StatsJson {
    StatsJson {
        total: stats.total,
        active: stats.active,
        completed: stats.completed,
    }
}

// ---------------------------------------------------------------------------
// Human-readable formatting
// ---------------------------------------------------------------------------

/// Format a single row as a one-line summary: `[x] 12  Pay bills`
pub fn format_row_line(row: &TaskRow) -> String {
    let check = if row.completed { 'x' } else { ' ' };
    format!("[{}] {:>4}  {}", check, row.id, row.title)
}

/// Format the derived view for the terminal: one line per row, description
/// indented underneath, or the empty-state message.
pub fn format_view(view: &ViewModel) -> Vec<String> {
    if let Some(empty) = view.empty {
        return vec![empty.message().to_string()];
    }

    let mut lines = Vec::new();
    for row in &view.rows {
        lines.push(format_row_line(row));
        if let Some(description) = &row.description {
            lines.push(format!("           {}", description));
        }
    }
    lines
}

/// Format a full task detail block.
pub fn format_task_detail(task: &Task) -> Vec<String> {
    let mut lines = vec![
        format!("[{}] {:>4}  {}", task.checkbox_char(), task.id, task.title),
        format!("     state: {}", if task.completed { "completed" } else { "active" }),
    ];
    if let Some(description) = &task.description {
        lines.push(format!("     description: {}", description));
    }
    lines
}

/// The stats line: `3 total · 2 active · 1 completed`
pub fn format_stats(stats: &Stats) -> String {
    format!(
        "{} total · {} active · {} completed",
        stats.total, stats.active, stats.completed
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::view::build_view;

    fn sample_tasks() -> Vec<Task> {
        vec![
            Task {
                id: 1,
                title: "Buy milk".to_string(),
                description: Some("the blue carton".to_string()),
                completed: false,
            },
            Task {
                id: 2,
                title: "Pay bills".to_string(),
                description: None,
                completed: true,
            },
        ]
    }

    #[test]
    fn view_formats_rows_with_descriptions() {
        let view = build_view(&sample_tasks(), Filter::All, "");
        let lines = format_view(&view);
        assert_eq!(lines[0], "[ ]    1  Buy milk");
        assert_eq!(lines[1], "           the blue carton");
        assert_eq!(lines[2], "[x]    2  Pay bills");
    }

    #[test]
    fn empty_view_formats_the_empty_state() {
        let view = build_view(&[], Filter::All, "milk");
        assert_eq!(
            format_view(&view),
            vec!["No todos found matching your search".to_string()]
        );
    }

    #[test]
    fn stats_line_reads_like_the_stats_bar() {
        let s = Stats {
            total: 3,
            active: 2,
            completed: 1,
        };
        assert_eq!(format_stats(&s), "3 total · 2 active · 1 completed");
    }

    #[test]
    fn json_skips_missing_descriptions() {
        let tasks = sample_tasks();
        let json = serde_json::to_string(&task_to_json(&tasks[1])).unwrap();
        assert!(!json.contains("description"));
    }
}
