//! Stock table cell formatting: display strings and tones, no terminal types.
//!
//! Sector, RVOL and volume use truthiness: absent, null, empty string, `false`
//! and numeric zero all render as the placeholder, so a real zero volume is
//! indistinguishable from a missing one. Price and change only fall back to
//! the placeholder when absent.

use std::fmt;

use serde_json::Value;

use crate::domain::{ComplianceStatus, StockRow};

/// Shown for any missing cell value.
pub const PLACEHOLDER: &str = "N/A";

/// Column headers, in display order.
pub const HEADERS: [&str; 8] = [
    "Ticker",
    "Company Name",
    "Halal / Haraam",
    "Sector",
    "Price",
    "RVOL",
    "Volume",
    "Change",
];

/// Semantic color of a cell; the front end maps tones onto its palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellTone {
    /// Green.
    Positive,
    /// Red.
    Negative,
    /// Yellow.
    Caution,
    /// Default text color.
    Neutral,
}

/// One table row, fully formatted.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedRow {
    pub ticker: String,
    pub company_name: String,
    pub status: String,
    pub status_tone: CellTone,
    pub sector: String,
    pub price: String,
    pub rvol: String,
    pub volume: String,
    pub change: String,
    pub change_tone: CellTone,
}

impl RenderedRow {
    /// Cells in header order.
    pub fn cells(&self) -> [&str; 8] {
        [
            &self.ticker,
            &self.company_name,
            &self.status,
            &self.sector,
            &self.price,
            &self.rvol,
            &self.volume,
            &self.change,
        ]
    }
}

impl fmt::Display for RenderedRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.cells().join(" | "))
    }
}

pub fn render_row(row: &StockRow) -> RenderedRow {
    RenderedRow {
        ticker: row.ticker.clone(),
        company_name: row.company_name.clone(),
        status: row.status.clone(),
        status_tone: status_tone(row.compliance()),
        sector: format_sector(row.sector.as_deref()),
        price: format_price(row.price),
        rvol: format_opaque(row.rvol.as_ref()),
        volume: format_opaque(row.volume.as_ref()),
        change: format_change(row.change),
        change_tone: change_tone(row.change),
    }
}

pub fn status_tone(status: ComplianceStatus) -> CellTone {
    match status {
        ComplianceStatus::Haraam => CellTone::Negative,
        ComplianceStatus::Doubtful => CellTone::Caution,
        ComplianceStatus::Halal | ComplianceStatus::Unknown => CellTone::Positive,
    }
}

pub fn format_price(price: Option<f64>) -> String {
    match price {
        Some(p) => format!("${}", fixed_cents(p)),
        None => PLACEHOLDER.into(),
    }
}

pub fn format_change(change: Option<f64>) -> String {
    match change {
        Some(c) if c > 0.0 => format!("+{}%", fixed_cents(c)),
        // Collapses -0.0 so zero never renders with a sign.
        Some(c) if c == 0.0 => "0.00%".into(),
        Some(c) => format!("{}%", fixed_cents(c)),
        None => PLACEHOLDER.into(),
    }
}

pub fn change_tone(change: Option<f64>) -> CellTone {
    match change {
        Some(c) if c > 0.0 => CellTone::Positive,
        Some(c) if c < 0.0 => CellTone::Negative,
        _ => CellTone::Neutral,
    }
}

/// Two decimal places, with exact half-cent ties rounded away from zero.
///
/// `{:.2}` breaks ties to even, so `10.125` would print as `10.12`.
fn fixed_cents(x: f64) -> String {
    if is_half_cent(x) {
        let cents = (x.abs() * 100.0).round();
        let sign = if x < 0.0 { "-" } else { "" };
        format!("{sign}{:.2}", cents / 100.0)
    } else {
        format!("{x:.2}")
    }
}

/// True when `x * 200` is exactly an odd integer, i.e. `x` sits on a half cent.
fn is_half_cent(x: f64) -> bool {
    let bits = x.abs().to_bits();
    let biased = ((bits >> 52) & 0x7ff) as i32;
    if biased == 0 || biased == 0x7ff {
        return false;
    }
    let mantissa = (bits & ((1u64 << 52) - 1)) | (1u64 << 52);
    // |x| = mantissa * 2^exp, and x * 200 = mantissa * 25 * 2^(exp + 3).
    let shift = -(biased - 1075 + 3);
    shift >= 0 && mantissa.trailing_zeros() as i32 == shift
}

fn format_sector(sector: Option<&str>) -> String {
    match sector {
        Some(s) if !s.is_empty() => s.to_string(),
        _ => PLACEHOLDER.into(),
    }
}

/// Raw passthrough of an opaque JSON value, or the placeholder when falsy.
///
/// Floats print in shortest form without a trailing `.0`, so a backend that
/// sends `51000000.0` shows `51000000`.
pub fn format_opaque(value: Option<&Value>) -> String {
    match value {
        Some(v) if !is_falsy(v) => match v {
            Value::String(s) => s.clone(),
            Value::Number(n) => match n.as_f64() {
                Some(x) if n.is_f64() => x.to_string(),
                _ => n.to_string(),
            },
            other => other.to_string(),
        },
        _ => PLACEHOLDER.into(),
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64().map_or(false, |x| x == 0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn status_tones() {
        assert_eq!(status_tone(ComplianceStatus::classify("Haraam")), CellTone::Negative);
        assert_eq!(status_tone(ComplianceStatus::classify("Doubtful")), CellTone::Caution);
        assert_eq!(status_tone(ComplianceStatus::classify("Halal")), CellTone::Positive);
        assert_eq!(status_tone(ComplianceStatus::classify("Pending review")), CellTone::Positive);
    }

    #[test]
    fn price_formatting() {
        assert_eq!(format_price(Some(10.5)), "$10.50");
        assert_eq!(format_price(Some(1234.567)), "$1234.57");
        assert_eq!(format_price(Some(0.0)), "$0.00");
        assert_eq!(format_price(Some(10.125)), "$10.13");
        assert_eq!(format_price(Some(0.375)), "$0.38");
        assert_eq!(format_price(Some(10.25)), "$10.25");
        assert_eq!(format_price(Some(1.005)), "$1.00");
        assert_eq!(format_price(None), "N/A");
    }

    #[test]
    fn change_formatting_and_tone() {
        assert_eq!(format_change(Some(1.2)), "+1.20%");
        assert_eq!(format_change(Some(-2.345)), "-2.35%");
        assert_eq!(format_change(Some(0.0)), "0.00%");
        assert_eq!(format_change(Some(-0.0)), "0.00%");
        assert_eq!(format_change(Some(0.125)), "+0.13%");
        assert_eq!(format_change(Some(-0.125)), "-0.13%");
        assert_eq!(format_change(None), "N/A");

        assert_eq!(change_tone(Some(0.5)), CellTone::Positive);
        assert_eq!(change_tone(Some(-0.5)), CellTone::Negative);
        assert_eq!(change_tone(Some(0.0)), CellTone::Neutral);
        assert_eq!(change_tone(None), CellTone::Neutral);
    }

    #[test]
    fn opaque_values_use_truthiness() {
        assert_eq!(format_opaque(Some(&json!(1.8))), "1.8");
        assert_eq!(format_opaque(Some(&json!(1200000))), "1200000");
        assert_eq!(format_opaque(Some(&json!("2.1x"))), "2.1x");
        assert_eq!(format_opaque(Some(&json!(0))), "N/A");
        assert_eq!(format_opaque(Some(&json!(0.0))), "N/A");
        assert_eq!(format_opaque(Some(&json!(""))), "N/A");
        assert_eq!(format_opaque(Some(&json!(false))), "N/A");
        assert_eq!(format_opaque(Some(&Value::Null)), "N/A");
        assert_eq!(format_opaque(None), "N/A");
    }

    #[test]
    fn whole_floats_drop_trailing_zero() {
        let volume: Value = serde_json::from_str("51000000.0").unwrap();
        assert_eq!(format_opaque(Some(&volume)), "51000000");
        assert_eq!(format_opaque(Some(&json!(1.0))), "1");
        assert_eq!(format_opaque(Some(&json!(2.25))), "2.25");
        assert_eq!(format_opaque(Some(&json!(-3))), "-3");
    }

    #[test]
    fn empty_sector_is_placeholder() {
        let mut row = StockRow::new("KO", "Coca-Cola", "Halal");
        row.sector = Some(String::new());
        assert_eq!(render_row(&row).sector, "N/A");
        row.sector = Some("Consumer Defensive".into());
        assert_eq!(render_row(&row).sector, "Consumer Defensive");
    }

    #[test]
    fn display_joins_cells() {
        let mut row = StockRow::new("NVDA", "NVIDIA", "Doubtful");
        row.change = Some(3.0);
        row.volume = Some(json!(500));
        assert_eq!(
            render_row(&row).to_string(),
            "NVDA | NVIDIA | Doubtful | N/A | N/A | N/A | 500 | +3.00%"
        );
    }
}
