use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::ops::controller::CONFIRM_DELETE;
use crate::tui::app::{App, InputField};

use super::centered_rect_fixed;

/// Render the add form: title + description fields, focused field marked
/// with a block cursor.
pub fn render_add_form(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let popup_w: u16 = 52.min(area.width.saturating_sub(2));
    let popup_h: u16 = 6;
    let overlay = centered_rect_fixed(popup_w, popup_h, area);
    frame.render_widget(Clear, overlay);

    let field_line = |label: &str, value: &str, focused: bool| {
        let label_style = Style::default().fg(app.theme.dim).bg(bg);
        let value_style = if focused {
            Style::default().fg(app.theme.text_bright).bg(bg)
        } else {
            Style::default().fg(app.theme.text).bg(bg)
        };
        let mut spans = vec![
            Span::styled(format!(" {:<12}", label), label_style),
            Span::styled(value.to_string(), value_style),
        ];
        if focused {
            spans.push(Span::styled(
                "\u{258C}",
                Style::default().fg(app.theme.highlight).bg(bg),
            ));
        }
        Line::from(spans)
    };

    let lines = vec![
        field_line(
            "Title",
            &app.title_input,
            app.input_focus == InputField::Title,
        ),
        Line::from(""),
        field_line(
            "Description",
            &app.desc_input,
            app.input_focus == InputField::Description,
        ),
    ];

    let block = Block::default()
        .title(" Add todo ")
        .title_style(
            Style::default()
                .fg(app.theme.highlight)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.highlight).bg(bg))
        .style(Style::default().bg(bg));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(bg));
    frame.render_widget(paragraph, overlay);
}

/// Render the delete confirmation modal.
pub fn render_confirm_popup(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let popup_w: u16 = 48.min(area.width.saturating_sub(2));
    let inner_w = popup_w.saturating_sub(2) as usize;

    let text_style = Style::default().fg(app.theme.text).bg(bg);
    let mut styled_lines: Vec<(String, Style)> = Vec::new();

    for s in wrap_text(" ", CONFIRM_DELETE, inner_w) {
        styled_lines.push((s, text_style));
    }
    styled_lines.push(("".into(), text_style));
    styled_lines.push((
        " y delete   n cancel".into(),
        Style::default().fg(app.theme.dim).bg(bg),
    ));

    render_bordered_lines(frame, app, area, popup_w, styled_lines, app.theme.red);
}

/// Render the blocking error popup.
pub fn render_error_popup(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let popup_w: u16 = 48.min(area.width.saturating_sub(2));
    let inner_w = popup_w.saturating_sub(2) as usize;

    let message = app.error.as_deref().unwrap_or("");

    let mut styled_lines: Vec<(String, Style)> = Vec::new();
    styled_lines.push((
        " Error".into(),
        Style::default()
            .fg(app.theme.red)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    ));
    styled_lines.push(("".into(), Style::default().bg(bg)));
    for part in message.lines() {
        for s in wrap_text(" ", part, inner_w) {
            styled_lines.push((s, Style::default().fg(app.theme.text_bright).bg(bg)));
        }
    }
    styled_lines.push(("".into(), Style::default().bg(bg)));
    styled_lines.push((
        " Press Enter to dismiss".into(),
        Style::default().fg(app.theme.dim).bg(bg),
    ));

    render_bordered_lines(frame, app, area, popup_w, styled_lines, app.theme.red);
}

/// Render the help overlay listing the key bindings.
pub fn render_help_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let bindings: &[(&str, &str)] = &[
        ("j/k, arrows", "move cursor"),
        ("space, x", "toggle completion"),
        ("a", "add todo"),
        ("d, Del", "delete todo (asks first)"),
        ("/", "search (live)"),
        ("f, Tab", "cycle filter"),
        ("1/2/3", "all / active / completed"),
        ("r", "reload from server"),
        ("q", "quit"),
    ];

    let mut styled_lines: Vec<(String, Style)> = Vec::new();
    styled_lines.push((
        " Keys".into(),
        Style::default()
            .fg(app.theme.highlight)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    ));
    styled_lines.push(("".into(), Style::default().bg(bg)));
    for (key, what) in bindings {
        styled_lines.push((
            format!(" {:<13} {}", key, what),
            Style::default().fg(app.theme.text).bg(bg),
        ));
    }

    render_bordered_lines(frame, app, area, 44, styled_lines, app.theme.highlight);
}

fn render_bordered_lines(
    frame: &mut Frame,
    app: &App,
    area: Rect,
    popup_w: u16,
    styled_lines: Vec<(String, Style)>,
    border: ratatui::style::Color,
) {
    let bg = app.theme.background;
    let popup_h = ((styled_lines.len() as u16) + 2).min(area.height.saturating_sub(2));
    let overlay = centered_rect_fixed(popup_w, popup_h, area);
    frame.render_widget(Clear, overlay);

    let lines: Vec<Line> = styled_lines
        .into_iter()
        .map(|(text, style)| Line::from(Span::styled(text, style)))
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border).bg(bg))
        .style(Style::default().bg(bg));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(bg));
    frame.render_widget(paragraph, overlay);
}

/// Word-wrap `text` into lines of at most `max_width` display columns.
/// Every line (including the first) is prefixed with `indent`.
fn wrap_text(indent: &str, text: &str, max_width: usize) -> Vec<String> {
    let indent_width = indent.width();
    let mut lines = Vec::new();
    let mut current = indent.to_string();

    for word in text.split_whitespace() {
        let space = if current.width() == indent_width { 0 } else { 1 };
        if current.width() + space + word.width() > max_width && current.width() > indent_width {
            lines.push(current);
            current = indent.to_string();
        }
        if current.width() > indent_width {
            current.push(' ');
        }
        current.push_str(word);
    }
    if current.width() > indent_width || lines.is_empty() {
        lines.push(current);
    }
    lines
}
