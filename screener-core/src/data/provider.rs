//! Stock source trait and structured fetch errors.
//!
//! The `StockSource` trait abstracts over where the listing comes from so the
//! worker can be driven by a canned source in tests.

use thiserror::Error;

use crate::domain::StockRow;

/// Why a fetch failed.
///
/// The screen shows a single fixed message for every variant; the detail is
/// only written to the log.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(String),

    #[error("server responded with HTTP {status}")]
    Status { status: u16 },

    #[error("malformed screener payload: {0}")]
    Decode(String),

    #[error("HTTP client setup failed: {0}")]
    Client(String),
}

/// Source of the full, unfiltered stock listing.
pub trait StockSource: Send {
    /// Human-readable description (endpoint URL for HTTP sources).
    fn describe(&self) -> String;

    /// Fetch every row the backend currently screens.
    fn fetch_all(&self) -> Result<Vec<StockRow>, FetchError>;
}

/// Source that always returns the same result. Used by tests and demos.
#[derive(Debug, Clone)]
pub struct StaticSource {
    result: Result<Vec<StockRow>, FetchError>,
}

impl StaticSource {
    pub fn rows(rows: Vec<StockRow>) -> Self {
        Self { result: Ok(rows) }
    }

    pub fn failing(err: FetchError) -> Self {
        Self { result: Err(err) }
    }
}

impl StockSource for StaticSource {
    fn describe(&self) -> String {
        "static".into()
    }

    fn fetch_all(&self) -> Result<Vec<StockRow>, FetchError> {
        self.result.clone()
    }
}
