pub mod list;
pub mod popups;
pub mod stats_row;
pub mod status_row;
pub mod tab_bar;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::Block;

use super::app::{App, Mode};

/// Main render function, dispatching to the sub-renderers
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: tab bar (2 rows) | task list | stats row | status row
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    tab_bar::render_tab_bar(frame, app, chunks[0]);
    list::render_list(frame, app, chunks[1]);
    stats_row::render_stats_row(frame, app, chunks[2]);
    status_row::render_status_row(frame, app, chunks[3]);

    // Popups (rendered on top of everything)
    if app.mode == Mode::Insert {
        popups::render_add_form(frame, app, frame.area());
    }
    if app.mode == Mode::Confirm {
        popups::render_confirm_popup(frame, app, frame.area());
    }
    if app.show_help {
        popups::render_help_overlay(frame, app, frame.area());
    }
    if app.error.is_some() {
        popups::render_error_popup(frame, app, frame.area());
    }
}

/// Center a fixed-size rect inside `area`.
pub(super) fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}
