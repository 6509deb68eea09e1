//! Overlay widgets: key help and the stock detail card.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use screener_core::table::{render_row, CellTone};

use crate::app::AppState;
use crate::theme;
use crate::ui::centered_rect;

pub fn render_help(f: &mut Frame, area: Rect) {
    let popup = centered_rect(60, 60, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(true))
        .title(" Keys ")
        .title_style(theme::primary_bold())
        .style(theme::base());

    let keys = [
        ("Tab / Shift-Tab", "move focus: sidebar, search, table"),
        ("1 2 3", "Stocks / News / ETF screener (outside search)"),
        ("/", "jump to the search box"),
        ("Enter (search)", "filter loaded rows by ticker"),
        ("Esc (search)", "clear the search and reload all stocks"),
        ("j / k", "move in sidebar or table"),
        ("Enter (table)", "show stock detail"),
        ("q", "quit (outside search)"),
        ("Ctrl-C", "quit from anywhere"),
    ];

    let mut lines = vec![Line::from("")];
    for (key, what) in keys {
        lines.push(Line::from(vec![
            Span::styled(format!("  {key:>16}  "), theme::accent()),
            Span::styled(what, theme::text()),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("  Press any key to dismiss...", theme::muted())));

    f.render_widget(Paragraph::new(lines).block(block), popup);
}

/// Detail card for a stock row, including the backend's screening reason.
pub fn render_detail(f: &mut Frame, area: Rect, app: &AppState, idx: usize) {
    let popup = centered_rect(70, 60, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(true))
        .title(" Stock Detail [Esc]close ")
        .title_style(theme::primary_bold())
        .style(theme::base());

    let inner = block.inner(popup);
    f.render_widget(block, popup);

    let Some(stock) = app.view.rows.get(idx) else {
        f.render_widget(Paragraph::new(Span::styled("Stock not found.", theme::muted())), inner);
        return;
    };

    let r = render_row(stock);
    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(Span::styled(
        format!("{}  {}", r.ticker, r.company_name),
        theme::primary_bold(),
    )));
    lines.push(Line::from(""));
    field(&mut lines, "Status", &r.status, r.status_tone);
    field(&mut lines, "Sector", &r.sector, CellTone::Neutral);
    field(&mut lines, "Price", &r.price, CellTone::Neutral);
    field(&mut lines, "RVOL", &r.rvol, CellTone::Neutral);
    field(&mut lines, "Volume", &r.volume, CellTone::Neutral);
    field(&mut lines, "Change", &r.change, r.change_tone);

    if let Some(reason) = stock.reason.as_deref().filter(|s| !s.is_empty()) {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("Reason", theme::primary_bold())));
        lines.push(Line::from(Span::styled(reason.to_string(), theme::text())));
    }

    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}

fn field(lines: &mut Vec<Line<'_>>, label: &str, value: &str, tone: CellTone) {
    lines.push(Line::from(vec![
        Span::styled(format!("  {label:>8}: "), theme::muted()),
        Span::styled(value.to_string(), theme::tone(tone)),
    ]));
}
