//! Screener tabs: the fixed, ordered set of listing categories.

use serde::{Deserialize, Serialize};

/// Which screener tab is active. Only `Stocks` has a listing behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScreenerId {
    #[default]
    Stocks,
    News,
    Etf,
}

impl ScreenerId {
    /// All screeners in sidebar order.
    pub const ALL: [ScreenerId; 3] = [ScreenerId::Stocks, ScreenerId::News, ScreenerId::Etf];

    pub fn id(self) -> &'static str {
        match self {
            ScreenerId::Stocks => "stocks",
            ScreenerId::News => "news",
            ScreenerId::Etf => "etf",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ScreenerId::Stocks => "Stocks Screener",
            ScreenerId::News => "News Screener",
            ScreenerId::Etf => "ETF Screener",
        }
    }

    pub fn index(self) -> usize {
        match self {
            ScreenerId::Stocks => 0,
            ScreenerId::News => 1,
            ScreenerId::Etf => 2,
        }
    }

    pub fn from_index(i: usize) -> Option<Self> {
        Self::ALL.get(i).copied()
    }

    /// Whether this screener has a backing listing (the others are placeholders).
    pub fn is_implemented(self) -> bool {
        self == ScreenerId::Stocks
    }
}
