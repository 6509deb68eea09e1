//! Keyboard input dispatch: overlays → search box → global keys → focus handlers.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use screener_core::{Content, ScreenerId};

use crate::app::{AppState, Focus, Overlay};

pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.running = false;
        return;
    }

    // 1. Overlays consume input first.
    match app.overlay {
        Overlay::Help => {
            app.overlay = Overlay::None;
            return;
        }
        Overlay::Detail(_) => {
            if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q')) {
                app.overlay = Overlay::None;
            }
            return;
        }
        Overlay::None => {}
    }

    // 2. Focus cycling works everywhere, including the search box.
    match key.code {
        KeyCode::Tab => {
            app.focus = if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.focus.prev()
            } else {
                app.focus.next()
            };
            return;
        }
        KeyCode::BackTab => {
            app.focus = app.focus.prev();
            return;
        }
        _ => {}
    }

    // 3. The search box takes every printable key.
    if app.focus == Focus::Search {
        handle_search_key(app, key);
        return;
    }

    // 4. Global keys.
    match key.code {
        KeyCode::Char('q') => {
            app.running = false;
            return;
        }
        KeyCode::Char('?') => {
            app.overlay = Overlay::Help;
            return;
        }
        KeyCode::Char('/') => {
            app.focus = Focus::Search;
            return;
        }
        KeyCode::Char(c @ '1'..='3') => {
            let idx = c as usize - '1' as usize;
            if let Some(id) = ScreenerId::from_index(idx) {
                app.select_screener(id);
            }
            return;
        }
        _ => {}
    }

    // 5. Focus-specific keys.
    match app.focus {
        Focus::Sidebar => handle_sidebar_key(app, key),
        Focus::Table => handle_table_key(app, key),
        Focus::Search => {}
    }
}

fn handle_search_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.submit_search(),
        KeyCode::Esc => app.clear_search(),
        KeyCode::Backspace => app.pop_search_char(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.push_search_char(c);
        }
        _ => {}
    }
}

fn handle_sidebar_key(app: &mut AppState, key: KeyEvent) {
    let count = ScreenerId::ALL.len();
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            if app.sidebar_cursor + 1 < count {
                app.sidebar_cursor += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.sidebar_cursor = app.sidebar_cursor.saturating_sub(1);
        }
        KeyCode::Enter | KeyCode::Char('l') | KeyCode::Right => {
            if let Some(id) = ScreenerId::from_index(app.sidebar_cursor) {
                app.select_screener(id);
            }
        }
        _ => {}
    }
}

fn handle_table_key(app: &mut AppState, key: KeyEvent) {
    // Rows are only navigable while the table is actually on screen.
    if app.view.content() != Content::Table {
        return;
    }
    let row_count = app.view.rows.len();
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            if app.table_cursor + 1 < row_count {
                app.table_cursor += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.table_cursor = app.table_cursor.saturating_sub(1);
        }
        KeyCode::Char('g') | KeyCode::Home => app.table_cursor = 0,
        KeyCode::Char('G') | KeyCode::End => app.table_cursor = row_count.saturating_sub(1),
        KeyCode::Enter => {
            if app.selected_row().is_some() {
                app.overlay = Overlay::Detail(app.table_cursor);
            }
        }
        _ => {}
    }
}
