//! Ingestion Loader
//!
//! Replaces the whole sales collection with the rows of a tabular source.
//!
//! ```text
//!  sample_sales.csv
//!        │
//!   ┌────▼────┐
//!   │ Source  │  ← parse + validate every row (no storage access)
//!   └────┬────┘
//!        │ Vec<SalesRecord>
//!   ┌────▼────┐
//!   │ Loader  │  ← delete all, then insert batch
//!   └────┬────┘
//!        │
//!    SalesStore
//! ```
//!
//! A validation failure anywhere in the file aborts before storage is
//! touched. A storage failure between the delete and the insert leaves the
//! collection empty; that window is not hidden.

pub mod config;
pub mod loader;
pub mod source;

pub use config::IngestConfig;
pub use loader::{IngestionError, SalesLoader};
pub use source::read_records;

/// Source path used when `SALES_CSV_PATH` is not set.
pub const DEFAULT_SOURCE_PATH: &str = "data/sample_sales.csv";
