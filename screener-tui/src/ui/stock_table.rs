//! Stock table: one row per loaded stock, status and change cells colored
//! by their tone.

use ratatui::layout::{Constraint, Rect};
use ratatui::style::Modifier;
use ratatui::widgets::{Block, Borders, Cell, Row, Table, TableState};
use ratatui::Frame;

use screener_core::table::{render_row, HEADERS};

use crate::app::{AppState, Focus};
use crate::theme;

const WIDTHS: [Constraint; 8] = [
    Constraint::Length(8),
    Constraint::Min(16),
    Constraint::Length(16),
    Constraint::Length(20),
    Constraint::Length(11),
    Constraint::Length(7),
    Constraint::Length(12),
    Constraint::Length(9),
];

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let focused = app.focus == Focus::Table;

    let header = Row::new(HEADERS.iter().map(|h| Cell::from(*h)))
        .style(theme::selected())
        .height(1);

    let rows = app.view.rows.iter().map(|stock| {
        let r = render_row(stock);
        Row::new(vec![
            Cell::from(r.ticker).style(theme::text().add_modifier(Modifier::BOLD)),
            Cell::from(r.company_name).style(theme::text()),
            Cell::from(r.status).style(theme::tone(r.status_tone).add_modifier(Modifier::BOLD)),
            Cell::from(r.sector).style(theme::text()),
            Cell::from(r.price).style(theme::text()),
            Cell::from(r.rvol).style(theme::text()),
            Cell::from(r.volume).style(theme::text()),
            Cell::from(r.change).style(theme::tone(r.change_tone)),
        ])
    });

    let table = Table::new(rows, WIDTHS)
        .header(header)
        .column_spacing(2)
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(theme::panel_border(focused))
                .title(format!(" {} stocks ", app.view.rows.len()))
                .title_style(theme::panel_title(focused)),
        )
        .row_highlight_style(theme::muted().add_modifier(Modifier::REVERSED));

    let mut state = TableState::default();
    if focused {
        state.select(Some(app.table_cursor));
    }
    f.render_stateful_widget(table, area, &mut state);
}
