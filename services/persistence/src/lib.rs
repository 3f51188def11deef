//! Sales record storage
//!
//! The document store is an external collaborator reached through the
//! narrow `SalesStore` trait: bounded reads, a date-descending read,
//! delete-all, batch insert and count. Two implementations:
//!
//! - `MongoSalesStore`: MongoDB collection (production)
//! - `MemorySalesStore`: in-process vector with failure injection (tests)
//!
//! The storage handle is constructed once at startup from `StoreConfig`
//! and released explicitly at shutdown.

pub mod config;
pub mod error;
pub mod memory;
pub mod mongo;
pub mod store;

pub use config::{ConfigError, StoreConfig};
pub use error::{Result, StorageError};
pub use memory::MemorySalesStore;
pub use mongo::MongoSalesStore;
pub use store::SalesStore;

/// Default collection holding sales records.
pub const SALES_COLLECTION: &str = "sales";
