//! Halal screener terminal UI.
//!
//! A sidebar of screener tabs, an upper-case ticker search box, and a table of
//! screened stocks fetched on a background worker thread.

pub mod app;
pub mod input;
pub mod logging;
pub mod theme;
pub mod ui;
pub mod worker;

pub use app::AppState;
pub use theme::Theme;
