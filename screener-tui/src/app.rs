//! Application state: single-owner, main-thread only.
//!
//! Wraps the screener `ViewState` with terminal concerns: keyboard focus,
//! cursors, overlays and the worker channels. Every fetch the view asks for
//! is routed through [`AppState::apply`].

use std::sync::mpsc::{Receiver, Sender};

use chrono::NaiveDateTime;
use tracing::{debug, warn};

use screener_core::{Effect, FetchError, ScreenerId, StockRow, ViewState};

use crate::worker::{WorkerCommand, WorkerResponse};

/// Which region receives key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Sidebar,
    Search,
    Table,
}

impl Focus {
    pub fn next(self) -> Focus {
        match self {
            Focus::Sidebar => Focus::Search,
            Focus::Search => Focus::Table,
            Focus::Table => Focus::Sidebar,
        }
    }

    pub fn prev(self) -> Focus {
        match self {
            Focus::Sidebar => Focus::Table,
            Focus::Search => Focus::Sidebar,
            Focus::Table => Focus::Search,
        }
    }
}

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

/// Which overlay (if any) is shown on top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Overlay {
    None,
    Help,
    Detail(usize), // index into view.rows
}

/// Top-level application state.
pub struct AppState {
    pub view: ViewState,
    pub running: bool,

    // Navigation
    pub focus: Focus,
    pub sidebar_cursor: usize,
    pub table_cursor: usize,
    pub overlay: Overlay,

    // Worker communication
    pub worker_tx: Sender<WorkerCommand>,
    pub worker_rx: Receiver<WorkerResponse>,
    next_request_id: u64,
    pending_fetches: usize,

    // Cross-cutting
    pub status_message: Option<(String, StatusLevel)>,
    pub last_loaded: Option<NaiveDateTime>,
    pub source_label: String,
}

impl AppState {
    pub fn new(
        worker_tx: Sender<WorkerCommand>,
        worker_rx: Receiver<WorkerResponse>,
        source_label: String,
    ) -> Self {
        Self {
            view: ViewState::new(),
            running: true,
            focus: Focus::Search,
            sidebar_cursor: 0,
            table_cursor: 0,
            overlay: Overlay::None,
            worker_tx,
            worker_rx,
            next_request_id: 1,
            pending_fetches: 0,
            status_message: None,
            last_loaded: None,
            source_label,
        }
    }

    /// Initial load on start-up.
    pub fn mount(&mut self) {
        let effect = self.view.mount();
        self.apply(effect);
    }

    /// Carry out a side effect requested by the view.
    pub fn apply(&mut self, effect: Effect) {
        match effect {
            Effect::None => {}
            Effect::Fetch => self.request_fetch(),
        }
    }

    fn request_fetch(&mut self) {
        let request_id = self.next_request_id;
        self.next_request_id += 1;
        self.view.begin_fetch();
        debug!(request_id, "fetch requested");
        if self
            .worker_tx
            .send(WorkerCommand::FetchStocks { request_id })
            .is_ok()
        {
            self.pending_fetches += 1;
        } else {
            warn!(request_id, "worker channel closed");
            self.view
                .finish_fetch(Err(FetchError::Network("worker unavailable".into())));
        }
    }

    /// Whether any fetch sent to the worker has not answered yet.
    pub fn fetch_in_flight(&self) -> bool {
        self.pending_fetches > 0
    }

    /// Drain worker responses without blocking.
    pub fn drain_worker(&mut self) {
        while let Ok(resp) = self.worker_rx.try_recv() {
            self.handle_worker_response(resp);
        }
    }

    pub fn handle_worker_response(&mut self, resp: WorkerResponse) {
        match resp {
            WorkerResponse::StocksLoaded { request_id, result } => {
                debug!(request_id, ok = result.is_ok(), "fetch completed");
                self.pending_fetches = self.pending_fetches.saturating_sub(1);
                let ok = result.is_ok();
                self.view.finish_fetch(result);
                self.clamp_table_cursor();
                if ok {
                    self.last_loaded = Some(chrono::Local::now().naive_local());
                    self.set_status(format!("Loaded {} stocks", self.view.rows.len()));
                } else if let Some(err) = &self.view.error {
                    self.status_message = Some((err.clone(), StatusLevel::Error));
                }
            }
        }
    }

    pub fn select_screener(&mut self, id: ScreenerId) {
        self.sidebar_cursor = id.index();
        let effect = self.view.select_screener(id);
        self.apply(effect);
    }

    pub fn push_search_char(&mut self, c: char) {
        let mut text = self.view.search.clone();
        text.push(c);
        self.view.set_search(&text);
    }

    pub fn pop_search_char(&mut self) {
        let mut text = self.view.search.clone();
        text.pop();
        self.view.set_search(&text);
    }

    /// The Search button. Ignored while the query is empty.
    pub fn submit_search(&mut self) {
        if !self.view.search_enabled() {
            self.set_warning("Type a ticker to search");
            return;
        }
        let effect = self.view.handle_search();
        self.table_cursor = 0;
        self.apply(effect);
        if !self.view.loading {
            self.set_status(format!(
                "{} match \"{}\"",
                self.view.rows.len(),
                self.view.search
            ));
        }
    }

    /// Empty the search box and run the search, which reloads the full list.
    pub fn clear_search(&mut self) {
        self.view.set_search("");
        self.table_cursor = 0;
        let effect = self.view.handle_search();
        self.apply(effect);
    }

    /// Row under the table cursor, if the table is showing.
    pub fn selected_row(&self) -> Option<&StockRow> {
        self.view.rows.get(self.table_cursor)
    }

    fn clamp_table_cursor(&mut self) {
        if self.table_cursor >= self.view.rows.len() {
            self.table_cursor = self.view.rows.len().saturating_sub(1);
        }
    }

    /// Set an info status message.
    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    /// Set a warning status message.
    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }
}
