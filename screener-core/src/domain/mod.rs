//! Domain types for the halal screener.

pub mod screener;
pub mod status;
pub mod stock;

pub use screener::ScreenerId;
pub use status::ComplianceStatus;
pub use stock::{ScreenerPayload, StockRow};
