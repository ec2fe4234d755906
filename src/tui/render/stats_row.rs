use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;

/// Render the stats row: counts over the full cache (never the filtered
/// view), with the active search term shown on the right when set.
pub fn render_stats_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let stats = app.controller.stats();
    let width = area.width as usize;

    let counts = format!(
        " {} total · {} active · {} completed",
        stats.total, stats.active, stats.completed
    );
    let mut spans = vec![Span::styled(
        counts.clone(),
        Style::default().fg(app.theme.text).bg(bg),
    )];

    let term = app.controller.search();
    if !term.is_empty() {
        let tail = format!("/{} ", term);
        let used = counts.chars().count() + tail.chars().count();
        if used < width {
            spans.push(Span::styled(
                " ".repeat(width - used),
                Style::default().bg(bg),
            ));
        }
        spans.push(Span::styled(
            tail,
            Style::default().fg(app.theme.cyan).bg(bg),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
