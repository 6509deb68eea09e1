//! Search bar: upper-cased ticker query plus a Search button that is
//! disabled while the query is empty.

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use ratatui::Frame;

use crate::app::{AppState, Focus};
use crate::theme;

const PLACEHOLDER: &str = "Search ticker...";

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let focused = app.focus == Focus::Search;
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(12)])
        .split(area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::panel_border(focused));

    let query = &app.view.search;
    let line = if query.is_empty() {
        let mut spans = vec![Span::styled(PLACEHOLDER, theme::muted())];
        if focused {
            spans.insert(0, Span::styled("_", theme::accent()));
        }
        Line::from(spans)
    } else {
        let mut spans = vec![Span::styled(query.as_str(), theme::text())];
        if focused {
            spans.push(Span::styled("_", theme::accent()));
        }
        Line::from(spans)
    };
    f.render_widget(Paragraph::new(line).block(block), chunks[0]);

    let enabled = app.view.search_enabled();
    let button = Paragraph::new(Line::from(Span::styled(" Search ", theme::button(enabled))))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(theme::panel_border(enabled && focused)),
        );
    f.render_widget(button, chunks[1]);
}
