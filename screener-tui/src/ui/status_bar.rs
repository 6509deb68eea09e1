//! Bottom status bar: key hints, last status message, last load time.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::{AppState, Focus, StatusLevel};
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let mut spans: Vec<Span> = Vec::new();

    let hints = match app.focus {
        Focus::Search => " [Enter]search [Esc]clear+reload [Tab]focus",
        Focus::Sidebar => " [1-3]screener [j/k]move [Enter]select [/]search [?]help [q]uit",
        Focus::Table => " [j/k]scroll [Enter]detail [/]search [?]help [q]uit",
    };
    spans.push(Span::styled(hints, theme::muted()));
    spans.push(Span::raw(" | "));

    if let Some((msg, level)) = &app.status_message {
        let style = match level {
            StatusLevel::Info => theme::text(),
            StatusLevel::Warning => theme::warning(),
            StatusLevel::Error => theme::negative(),
        };
        spans.push(Span::styled(msg.as_str(), style));
    }

    if let Some(at) = app.last_loaded {
        spans.push(Span::styled(
            format!("  (loaded {} from {})", at.format("%H:%M:%S"), app.source_label),
            theme::muted(),
        ));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
