//! Sidebar: one row per screener, active tab filled, cursor marked when focused.

use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Padding, Paragraph};
use ratatui::Frame;

use screener_core::ScreenerId;

use crate::app::{AppState, Focus};
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let focused = app.focus == Focus::Sidebar;
    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(theme::panel_border(focused))
        .padding(Padding::new(1, 1, 1, 0));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled("Screeners", theme::primary_bold())),
        Line::from(""),
    ];

    for screener in ScreenerId::ALL {
        let is_active = screener == app.view.active;
        let is_cursor = focused && screener.index() == app.sidebar_cursor;

        let mut style = if is_active {
            theme::selected()
        } else {
            theme::text()
        };
        if is_cursor {
            style = style.add_modifier(Modifier::UNDERLINED);
        }

        let marker = if is_cursor { ">" } else { " " };
        lines.push(Line::from(vec![
            Span::styled(marker, theme::accent()),
            Span::styled(
                format!(" {}:{:<width$}", screener.index() + 1, screener.label(), width = label_width(inner)),
                style,
            ),
        ]));
        lines.push(Line::from(""));
    }

    f.render_widget(Paragraph::new(lines), inner);
}

/// Pad labels so the active fill spans the sidebar.
fn label_width(inner: Rect) -> usize {
    (inner.width as usize).saturating_sub(4)
}
