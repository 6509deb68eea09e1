//! View state: the single owner of what the screener shows.
//!
//! Every UI event maps onto one method here. Methods that need the network
//! return an [`Effect`] instead of fetching, so the front end decides how the
//! fetch runs (the TUI hands it to its worker thread) and feeds the outcome
//! back through [`ViewState::begin_fetch`] / [`ViewState::finish_fetch`].

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::data::FetchError;
use crate::domain::{ScreenerId, StockRow};

/// Message shown for every fetch failure, whatever the cause.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to load stocks.";
pub const LOADING_MESSAGE: &str = "Loading stocks...";
pub const EMPTY_MESSAGE: &str = "No stocks found.";

/// Side effect requested by a state transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Issue one full fetch of the stock list.
    Fetch,
}

/// What the main area should display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    ComingSoon(String),
    Loading,
    Error(String),
    Empty,
    Table,
}

impl Content {
    /// Static text for the non-table states.
    pub fn message(&self) -> Option<String> {
        match self {
            Content::ComingSoon(label) => Some(format!("{label} coming soon!")),
            Content::Loading => Some(LOADING_MESSAGE.into()),
            Content::Error(msg) => Some(msg.clone()),
            Content::Empty => Some(EMPTY_MESSAGE.into()),
            Content::Table => None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ViewState {
    pub active: ScreenerId,
    /// Always upper-case.
    pub search: String,
    /// In backend order; replaced on fetch, narrowed on search.
    pub rows: Vec<StockRow>,
    pub loading: bool,
    pub error: Option<String>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Initial load when the view first appears.
    pub fn mount(&self) -> Effect {
        if self.active.is_implemented() {
            Effect::Fetch
        } else {
            Effect::None
        }
    }

    /// Switch tabs. Fetches only when the active tab changes to Stocks;
    /// rows, search text and error are left as they are.
    pub fn select_screener(&mut self, id: ScreenerId) -> Effect {
        if self.active == id {
            return Effect::None;
        }
        debug!(from = self.active.id(), to = id.id(), "screener selected");
        self.active = id;
        if id.is_implemented() {
            Effect::Fetch
        } else {
            Effect::None
        }
    }

    pub fn set_search(&mut self, text: &str) {
        self.search = text.to_uppercase();
    }

    /// The Search action is unavailable while the query is empty.
    pub fn search_enabled(&self) -> bool {
        !self.search.is_empty()
    }

    /// Empty query reloads the full list; otherwise narrows the loaded rows
    /// in place. Never queries the server with the search text.
    pub fn handle_search(&mut self) -> Effect {
        if self.search.is_empty() {
            return Effect::Fetch;
        }
        let before = self.rows.len();
        let query = self.search.clone();
        self.rows.retain(|row| row.ticker_matches(&query));
        info!(query = %query, before, after = self.rows.len(), "filtered stock list");
        Effect::None
    }

    pub fn begin_fetch(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Apply a fetch outcome. Failures keep the previous rows.
    pub fn finish_fetch(&mut self, result: Result<Vec<StockRow>, FetchError>) {
        self.loading = false;
        match result {
            Ok(rows) => {
                info!(count = rows.len(), "stock list loaded");
                self.rows = rows;
                self.error = None;
            }
            Err(err) => {
                warn!(error = %err, "stock list fetch failed");
                self.error = Some(FETCH_FAILED_MESSAGE.into());
            }
        }
    }

    pub fn content(&self) -> Content {
        if !self.active.is_implemented() {
            return Content::ComingSoon(self.active.label().into());
        }
        if self.loading {
            return Content::Loading;
        }
        if let Some(err) = &self.error {
            return Content::Error(err.clone());
        }
        if self.rows.is_empty() {
            Content::Empty
        } else {
            Content::Table
        }
    }
}

/// Rows whose ticker contains `query`, case-insensitively, in input order.
pub fn filter_by_ticker(rows: &[StockRow], query: &str) -> Vec<StockRow> {
    rows.iter()
        .filter(|row| row.ticker_matches(query))
        .cloned()
        .collect()
}
