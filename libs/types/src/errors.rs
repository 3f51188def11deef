//! Error types for sales record validation
//!
//! Raised by the record factory during ingestion and by date-bucketing
//! in the analytics service.

use thiserror::Error;

/// A record or one of its fields failed validation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("line {line}: missing required field `{field}`")]
    MissingField { line: usize, field: &'static str },

    #[error("line {line}: amount `{value}` is not a number")]
    InvalidAmount { line: usize, value: String },

    #[error("line {line}: amount `{value}` is outside the supported decimal range")]
    AmountOutOfRange { line: usize, value: String },

    #[error("line {line}: amount `{value}` must not be negative")]
    NegativeAmount { line: usize, value: String },

    #[error("order {order_id}: invalid date `{value}`, expected YYYY-MM-DD")]
    InvalidDate { order_id: String, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_display() {
        let err = ValidationError::MissingField {
            line: 4,
            field: "amount",
        };
        assert_eq!(err.to_string(), "line 4: missing required field `amount`");
    }

    #[test]
    fn test_invalid_date_display() {
        let err = ValidationError::InvalidDate {
            order_id: "ORD-7".to_string(),
            value: "2024/01/05".to_string(),
        };
        assert!(err.to_string().contains("ORD-7"));
        assert!(err.to_string().contains("2024/01/05"));
    }
}
