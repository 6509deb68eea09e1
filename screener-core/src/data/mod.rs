//! Fetch collaborator: the one network call the screener makes.

pub mod http;
pub mod provider;

pub use http::HttpStockSource;
pub use provider::{FetchError, StaticSource, StockSource};
