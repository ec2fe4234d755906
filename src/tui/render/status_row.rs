use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};

/// Render the status row (bottom of screen): mode-specific hints, and the
/// live search prompt while searching.
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let line = match app.mode {
        Mode::Search => {
            // Search prompt: /term▌
            let mut spans = vec![
                Span::styled(
                    format!("/{}", app.search_input),
                    Style::default().fg(app.theme.text_bright).bg(bg),
                ),
                Span::styled("\u{258C}", Style::default().fg(app.theme.highlight).bg(bg)),
            ];
            let hint = "Enter keep  Esc clear";
            let content_width: usize = spans.iter().map(|s| s.content.chars().count()).sum();
            let hint_width = hint.chars().count();
            if content_width + hint_width < width {
                spans.push(Span::styled(
                    " ".repeat(width - content_width - hint_width),
                    Style::default().bg(bg),
                ));
                spans.push(Span::styled(hint, Style::default().fg(app.theme.dim).bg(bg)));
            }
            Line::from(spans)
        }
        Mode::Insert => hint_line(app, width, "Enter add  Tab next field  Esc cancel"),
        Mode::Confirm => hint_line(app, width, "y delete  n cancel"),
        Mode::Navigate => hint_line(
            app,
            width,
            "space toggle  a add  d delete  / search  f filter  r reload  ? help  q quit",
        ),
    };

    let paragraph = Paragraph::new(line).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

fn hint_line<'a>(app: &App, width: usize, hint: &'a str) -> Line<'a> {
    let bg = app.theme.background;
    let hint_width = hint.chars().count();
    let mut spans = Vec::new();
    if hint_width < width {
        spans.push(Span::styled(
            " ".repeat(width - hint_width),
            Style::default().bg(bg),
        ));
    }
    spans.push(Span::styled(hint, Style::default().fg(app.theme.dim).bg(bg)));
    Line::from(spans)
}
