//! Top-level UI layout: sidebar, search bar, content area, status bar.

pub mod overlays;
pub mod search_bar;
pub mod sidebar;
pub mod status_bar;
pub mod stock_table;

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Margin, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph, Wrap};
use ratatui::Frame;

use screener_core::Content;

use crate::app::{AppState, Overlay};
use crate::theme;

const SIDEBAR_WIDTH: u16 = 26;

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &AppState) {
    f.render_widget(Block::default().style(theme::base()), f.area());

    // Split: main area + 1-line status bar.
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(1)])
        .split(f.area());

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(20)])
        .split(rows[0]);

    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(columns[1]);

    sidebar::render(f, columns[0], app);
    search_bar::render(f, main[0], app);
    draw_content(f, main[1], app);
    status_bar::render(f, rows[1], app);

    // Draw overlays on top.
    match &app.overlay {
        Overlay::Help => overlays::render_help(f, rows[0]),
        Overlay::Detail(idx) => overlays::render_detail(f, rows[0], app, *idx),
        Overlay::None => {}
    }
}

fn draw_content(f: &mut Frame, area: Rect, app: &AppState) {
    let content = app.view.content();
    let (style, alignment, top_pad) = match &content {
        Content::Table => {
            stock_table::render(f, area, app);
            return;
        }
        Content::ComingSoon(_) => (theme::muted(), Alignment::Center, area.height / 3),
        Content::Error(_) => (theme::negative(), Alignment::Left, 1),
        Content::Loading | Content::Empty => (theme::text(), Alignment::Left, 1),
    };

    let mut lines: Vec<Line> = vec![Line::from(""); top_pad as usize];
    lines.push(Line::styled(content.message().unwrap_or_default(), style));

    let para = Paragraph::new(lines)
        .alignment(alignment)
        .wrap(Wrap { trim: true });
    f.render_widget(para, area.inner(Margin::new(2, 0)));
}

/// Compute a centered rect for overlays.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
