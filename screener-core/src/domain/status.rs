//! Compliance status: free-text classification mapped onto tagged variants.
//!
//! The backend returns status as free text ("Halal ✅", "Haram ❌", "Doubtful").
//! Classification is substring based and order sensitive: a haram match wins
//! over doubtful, which wins over halal. The original text is what gets shown;
//! the variant only drives styling.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComplianceStatus {
    Halal,
    Haraam,
    Doubtful,
    Unknown,
}

impl ComplianceStatus {
    /// Classify a free-text status, case-insensitively.
    pub fn classify(text: &str) -> Self {
        let lower = text.to_lowercase();
        // "haraam" does not contain "haram", so both spellings are checked.
        if lower.contains("haram") || lower.contains("haraam") {
            ComplianceStatus::Haraam
        } else if lower.contains("doubtful") {
            ComplianceStatus::Doubtful
        } else if lower.contains("halal") {
            ComplianceStatus::Halal
        } else {
            ComplianceStatus::Unknown
        }
    }
}
