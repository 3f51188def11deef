//! Sales Analytics Service
//!
//! Reads the current record set from storage and derives four views:
//! - Summary metrics (revenue, orders, customers) with half-over-half trend
//! - Monthly revenue series, bucketed by month name
//! - Weekly orders series (fixed placeholder data)
//! - The five most recent orders
//!
//! # Architecture
//!
//! ```text
//!     SalesStore
//!         │  bounded fetch
//!   ┌─────┴──────┬────────────┐
//!   │            │            │
//! ┌─▼──────┐ ┌───▼────┐ ┌─────▼─────┐
//! │Metrics │ │Revenue │ │  Recent   │
//! └─┬──────┘ └───┬────┘ └─────┬─────┘
//!   │            │            │
//! ┌─▼────────────▼────────────▼─┐
//! │      AnalyticsService       │
//! └─────────────────────────────┘
//! ```
//!
//! Every aggregation is a pure function over `&[SalesRecord]`; the service
//! only adds the storage fetch. Nothing is cached.

pub mod error;
pub mod metrics;
pub mod orders;
pub mod recent;
pub mod revenue;
pub mod service;

pub use error::AnalyticsError;
pub use service::AnalyticsService;

/// Upper bound on records read per analytics call.
///
/// This is a fixed cap, not pagination: record sets larger than this are
/// silently truncated.
pub const DEFAULT_FETCH_LIMIT: usize = 1000;
