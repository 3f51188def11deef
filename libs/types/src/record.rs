//! Sales record types
//!
//! A `SalesRecord` is one ingested row. Records are immutable once stored;
//! the only way to change the record set is a full replacement run.
//!
//! External input never becomes a `SalesRecord` directly: it is read into
//! a `RawSalesRow` (every column optional) and promoted through
//! `SalesRecord::from_row`, which either yields a valid record or a typed
//! `ValidationError`.

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;
use crate::ids::OrderId;

/// Date format of the `date` column.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// One stored sales row.
///
/// `date` is kept as the ISO string so that lexicographic ordering
/// matches chronological ordering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesRecord {
    pub order_id: OrderId,
    pub customer_name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub status: String,
    pub date: String,
}

/// Unvalidated row as read from a tabular source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawSalesRow {
    pub order_id: Option<String>,
    pub customer_name: Option<String>,
    pub amount: Option<String>,
    pub status: Option<String>,
    pub date: Option<String>,
}

impl SalesRecord {
    /// Promote a raw row into a record.
    ///
    /// `line` is the 1-based source line, used only for error reporting.
    pub fn from_row(row: RawSalesRow, line: usize) -> Result<Self, ValidationError> {
        let order_id = required(row.order_id, line, "order_id")?;
        let customer_name = required(row.customer_name, line, "customer_name")?;
        let amount_raw = required(row.amount, line, "amount")?;
        let status = required(row.status, line, "status")?;
        let date = required(row.date, line, "date")?;

        let amount = parse_amount(&amount_raw, line)?;
        parse_date(&date).ok_or_else(|| ValidationError::InvalidDate {
            order_id: order_id.clone(),
            value: date.clone(),
        })?;

        Ok(Self {
            order_id: OrderId::new(order_id),
            customer_name,
            amount,
            status,
            date,
        })
    }

    /// Parse the calendar date of this record.
    pub fn calendar_date(&self) -> Result<NaiveDate, ValidationError> {
        parse_date(&self.date).ok_or_else(|| ValidationError::InvalidDate {
            order_id: self.order_id.to_string(),
            value: self.date.clone(),
        })
    }
}

fn required(
    value: Option<String>,
    line: usize,
    field: &'static str,
) -> Result<String, ValidationError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.trim().to_string()),
        _ => Err(ValidationError::MissingField { line, field }),
    }
}

/// Amounts must fit `Decimal`: magnitude up to `Decimal::MAX` (about
/// 7.9e28) and at most 28 fractional digits. Numbers outside that range are
/// reported separately from text that is not a number at all.
fn parse_amount(raw: &str, line: usize) -> Result<Decimal, ValidationError> {
    let value = raw.to_string();
    let amount = match Decimal::from_str(raw).or_else(|_| Decimal::from_scientific(raw)) {
        Ok(amount) => amount,
        Err(_) => {
            return Err(match raw.parse::<f64>() {
                Ok(v) if v.is_finite() && v < 0.0 => ValidationError::NegativeAmount { line, value },
                Ok(v) if v.is_finite() => ValidationError::AmountOutOfRange { line, value },
                _ => ValidationError::InvalidAmount { line, value },
            });
        }
    };

    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(ValidationError::NegativeAmount { line, value });
    }
    Ok(amount)
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(amount: &str, date: &str) -> RawSalesRow {
        RawSalesRow {
            order_id: Some("ORD-001".to_string()),
            customer_name: Some("Acme Corp".to_string()),
            amount: Some(amount.to_string()),
            status: Some("completed".to_string()),
            date: Some(date.to_string()),
        }
    }

    #[test]
    fn test_from_row_valid() {
        let record = SalesRecord::from_row(row("1250.50", "2024-03-14"), 2).unwrap();
        assert_eq!(record.order_id.as_str(), "ORD-001");
        assert_eq!(record.amount, Decimal::from_str("1250.50").unwrap());
        assert_eq!(record.date, "2024-03-14");
    }

    #[test]
    fn test_from_row_trims_fields() {
        let mut raw = row(" 10 ", "2024-03-14");
        raw.customer_name = Some("  Globex ".to_string());
        let record = SalesRecord::from_row(raw, 2).unwrap();
        assert_eq!(record.customer_name, "Globex");
        assert_eq!(record.amount, Decimal::from(10));
    }

    #[test]
    fn test_from_row_missing_field() {
        let mut raw = row("10", "2024-03-14");
        raw.status = None;
        let err = SalesRecord::from_row(raw, 5).unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingField {
                line: 5,
                field: "status"
            }
        );
    }

    #[test]
    fn test_from_row_empty_cell_is_missing() {
        let mut raw = row("10", "2024-03-14");
        raw.customer_name = Some("   ".to_string());
        let err = SalesRecord::from_row(raw, 3).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::MissingField {
                field: "customer_name",
                ..
            }
        ));
    }

    #[test]
    fn test_from_row_non_numeric_amount() {
        let err = SalesRecord::from_row(row("twelve", "2024-03-14"), 2).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidAmount { line: 2, .. }));
    }

    #[test]
    fn test_from_row_scientific_amount() {
        let record = SalesRecord::from_row(row("1.5e2", "2024-03-14"), 2).unwrap();
        assert_eq!(record.amount, Decimal::from(150));
    }

    #[test]
    fn test_from_row_negative_amount() {
        let err = SalesRecord::from_row(row("-3.00", "2024-03-14"), 2).unwrap_err();
        assert!(matches!(err, ValidationError::NegativeAmount { .. }));
    }

    #[test]
    fn test_from_row_amount_beyond_decimal_range() {
        for raw in ["1e30", "100000000000000000000000000000"] {
            let err = SalesRecord::from_row(row(raw, "2024-03-14"), 4).unwrap_err();
            assert_eq!(
                err,
                ValidationError::AmountOutOfRange {
                    line: 4,
                    value: raw.to_string()
                }
            );
        }
    }

    #[test]
    fn test_from_row_non_finite_amount_is_invalid() {
        let err = SalesRecord::from_row(row("NaN", "2024-03-14"), 2).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidAmount { .. }));
    }

    #[test]
    fn test_from_row_invalid_date() {
        let err = SalesRecord::from_row(row("10", "14/03/2024"), 2).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidDate { .. }));
    }

    #[test]
    fn test_amount_serializes_as_number() {
        let record = SalesRecord::from_row(row("99.5", "2024-03-14"), 2).unwrap();
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["amount"], serde_json::json!(99.5));
        assert_eq!(json["order_id"], serde_json::json!("ORD-001"));
    }

    #[test]
    fn test_calendar_date_rejects_malformed() {
        let mut record = SalesRecord::from_row(row("1", "2024-01-02"), 2).unwrap();
        record.date = "not-a-date".to_string();
        assert!(record.calendar_date().is_err());
    }
}
