//! Screener Core: domain types, view state, and the stock fetch collaborator.
//!
//! This crate holds everything the terminal front end renders:
//! - Domain types (stock rows, screener tabs, compliance status)
//! - The view state machine (tab selection, search, fetch lifecycle)
//! - Cell formatting for the stock table
//! - The `StockSource` trait and its HTTP implementation
//! - TOML configuration

pub mod config;
pub mod data;
pub mod domain;
pub mod table;
pub mod view;

pub use config::{ConfigError, ScreenerConfig};
pub use data::{FetchError, HttpStockSource, StockSource};
pub use domain::{ComplianceStatus, ScreenerId, ScreenerPayload, StockRow};
pub use table::{CellTone, RenderedRow};
pub use view::{Content, Effect, ViewState};

#[cfg(test)]
mod tests {
    use super::*;

    /// Compile-time check: everything crossing the worker channel is Send.
    #[allow(dead_code)]
    fn assert_send_sync() {
        fn require_send<T: Send>() {}
        fn require_sync<T: Sync>() {}

        require_send::<StockRow>();
        require_sync::<StockRow>();
        require_send::<FetchError>();
        require_send::<ViewState>();
        require_send::<HttpStockSource>();
        require_send::<Box<dyn StockSource>>();
    }
}
