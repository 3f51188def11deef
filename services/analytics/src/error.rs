//! Errors surfaced by analytics reads

use persistence::StorageError;
use sales_types::errors::ValidationError;
use thiserror::Error;

/// Failure of an analytics read.
///
/// An empty record set is never an error.
#[derive(Debug, Error)]
pub enum AnalyticsError {
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("invalid stored record: {0}")]
    Validation(#[from] ValidationError),

    #[error("amount total exceeds the decimal range")]
    AmountOverflow,
}
