//! Stock row: one line of the screener listing, as returned by the backend.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::status::ComplianceStatus;

/// A single screened stock.
///
/// Field names follow the backend's camelCase wire format. Nothing is
/// validated: optional fields that are absent (or `null`) stay `None`, and
/// `rvol`/`volume` are passed through as opaque JSON values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockRow {
    pub ticker: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub company_name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sector: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rvol: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<Value>,
    /// Signed daily change, in percent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub change: Option<f64>,
    /// Backend's explanation for the status (ratio breaches, sector match, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl StockRow {
    /// Minimal row with only the always-present fields filled in.
    pub fn new(
        ticker: impl Into<String>,
        company_name: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            ticker: ticker.into(),
            company_name: company_name.into(),
            status: status.into(),
            sector: None,
            price: None,
            rvol: None,
            volume: None,
            change: None,
            reason: None,
        }
    }

    pub fn compliance(&self) -> ComplianceStatus {
        ComplianceStatus::classify(&self.status)
    }

    /// Case-insensitive substring match on the ticker.
    pub fn ticker_matches(&self, query: &str) -> bool {
        self.ticker.to_lowercase().contains(&query.to_lowercase())
    }
}

/// Response body of `GET /stocks-screener`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreenerPayload {
    pub halal: Vec<StockRow>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_sparse_row() {
        let json = r#"{"ticker":"ABC","companyName":"Able Co","status":"Halal","price":10.5,"change":-2.345}"#;
        let row: StockRow = serde_json::from_str(json).unwrap();
        assert_eq!(row.ticker, "ABC");
        assert_eq!(row.company_name, "Able Co");
        assert_eq!(row.price, Some(10.5));
        assert_eq!(row.change, Some(-2.345));
        assert!(row.sector.is_none());
        assert!(row.rvol.is_none());
        assert!(row.volume.is_none());
    }

    #[test]
    fn null_company_name_becomes_empty() {
        // The backend sends companyName: null when screening errored.
        let json = r#"{"ticker":"MKDW","companyName":null,"status":"Error ⚠️","reason":"Could not fetch profile for MKDW"}"#;
        let row: StockRow = serde_json::from_str(json).unwrap();
        assert_eq!(row.company_name, "");
        assert_eq!(row.reason.as_deref(), Some("Could not fetch profile for MKDW"));
    }

    #[test]
    fn opaque_rvol_and_volume_pass_through() {
        let json = r#"{"ticker":"X","companyName":"X Corp","status":"Halal","rvol":"1.8x","volume":1200000}"#;
        let row: StockRow = serde_json::from_str(json).unwrap();
        assert_eq!(row.rvol, Some(Value::String("1.8x".into())));
        assert_eq!(row.volume, Some(serde_json::json!(1200000)));
    }

    #[test]
    fn unknown_fields_ignored() {
        let json = r#"{"ticker":"X","companyName":"X","status":"Halal","marketCap":123}"#;
        assert!(serde_json::from_str::<StockRow>(json).is_ok());
    }

    #[test]
    fn ticker_match_is_case_insensitive() {
        let row = StockRow::new("AaPl", "Apple", "Halal");
        assert!(row.ticker_matches("AP"));
        assert!(row.ticker_matches("apl"));
        assert!(!row.ticker_matches("MS"));
    }

    #[test]
    fn payload_requires_halal_key() {
        assert!(serde_json::from_str::<ScreenerPayload>(r#"{"stocks":[]}"#).is_err());
        let p: ScreenerPayload = serde_json::from_str(r#"{"halal":[]}"#).unwrap();
        assert!(p.halal.is_empty());
    }
}
