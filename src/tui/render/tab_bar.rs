use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::task::Filter;
use crate::tui::app::App;

/// Render the tab bar: brand on the left, one tab per filter with the
/// count of tasks it would show, and a separator line underneath.
pub fn render_tab_bar(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let tasks = app.controller.tasks();
    let current = app.controller.filter();

    let mut spans: Vec<Span> = vec![Span::styled(
        " [·] tick ",
        Style::default()
            .fg(app.theme.highlight)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    )];

    for (i, filter) in Filter::ALL.into_iter().enumerate() {
        let count = tasks.iter().filter(|t| filter.matches(t)).count();
        let label = format!(" {}:{} {} ", i + 1, filter.as_str(), count);
        let style = if filter == current {
            Style::default()
                .fg(app.theme.text_bright)
                .bg(app.theme.selection_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.dim).bg(bg)
        };
        spans.push(Span::styled(label, style));
        spans.push(Span::styled(" ", Style::default().bg(bg)));
    }

    let tab_line = Line::from(spans);
    let separator = Line::from(Span::styled(
        "─".repeat(area.width as usize),
        Style::default().fg(app.theme.dim).bg(bg),
    ));

    let paragraph = Paragraph::new(vec![tab_line, separator]).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
