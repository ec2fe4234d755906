use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::tui::app::App;

/// Render the task list: one row per visible task (checkbox + title, with
/// the description dimmed underneath), or the empty-state message.
pub fn render_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let view = app.view();
    app.clamp_cursor(&view);

    let bg = app.theme.background;

    if let Some(empty) = view.empty {
        let paragraph = Paragraph::new(format!(" {}", empty.message()))
            .style(Style::default().fg(app.theme.dim).bg(bg));
        frame.render_widget(paragraph, area);
        return;
    }

    // Build all display lines, remembering which line each cursor row
    // starts on so scrolling can follow it
    let mut display_lines: Vec<Line> = Vec::new();
    let mut cursor_line = 0;

    for (i, row) in view.rows.iter().enumerate() {
        let is_cursor = i == app.cursor;
        if is_cursor {
            cursor_line = display_lines.len();
        }
        let row_bg = if is_cursor { app.theme.selection_bg } else { bg };

        let check_style = if row.completed {
            Style::default().fg(app.theme.green).bg(row_bg)
        } else {
            Style::default().fg(app.theme.dim).bg(row_bg)
        };
        let title_style = if row.completed {
            Style::default()
                .fg(app.theme.dim)
                .bg(row_bg)
                .add_modifier(Modifier::CROSSED_OUT)
        } else if is_cursor {
            Style::default()
                .fg(app.theme.text_bright)
                .bg(row_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.text_bright).bg(row_bg)
        };

        let checkbox = if row.completed { " [x] " } else { " [ ] " };
        let mut spans = vec![
            Span::styled(checkbox, check_style),
            Span::styled(row.title.clone(), title_style),
        ];

        // Pad the cursor row to full width
        if is_cursor {
            let content_width: usize = spans.iter().map(|s| s.content.width()).sum();
            let w = area.width as usize;
            if content_width < w {
                spans.push(Span::styled(
                    " ".repeat(w - content_width),
                    Style::default().bg(row_bg),
                ));
            }
        }
        display_lines.push(Line::from(spans));

        if let Some(description) = &row.description {
            display_lines.push(Line::from(vec![
                Span::styled("      ", Style::default().bg(bg)),
                Span::styled(
                    description.clone(),
                    Style::default().fg(app.theme.dim).bg(bg),
                ),
            ]));
        }
    }

    // Keep the cursor row visible
    let height = area.height as usize;
    if height > 0 {
        if cursor_line < app.scroll_offset {
            app.scroll_offset = cursor_line;
        } else if cursor_line >= app.scroll_offset + height {
            app.scroll_offset = cursor_line + 1 - height;
        }
    }

    let lines: Vec<Line> = display_lines
        .into_iter()
        .skip(app.scroll_offset)
        .take(height)
        .collect();

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
