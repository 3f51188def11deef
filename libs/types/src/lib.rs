//! Types library for the sales analytics services
//!
//! Shared by the ingestion loader, the storage layer, the analytics
//! aggregation and the HTTP gateway, so that every stage agrees on the
//! shape of a sales record and of the derived analytics views.
//!
//! # Modules
//! - `ids`: Order identifier
//! - `record`: `SalesRecord` and its validating factory
//! - `analytics`: Derived views (metrics, revenue/orders series, recent orders)
//! - `errors`: Validation error taxonomy

pub mod analytics;
pub mod errors;
pub mod ids;
pub mod record;

// Library version constant
pub const LIB_VERSION: &str = "1.0.0";

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::analytics::*;
    pub use crate::errors::*;
    pub use crate::ids::*;
    pub use crate::record::*;
}
