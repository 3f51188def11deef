//! HTTP surface of the sales analytics service
//!
//! Read-only JSON endpoints under `/api`; see `router::create_router`.

pub mod config;
pub mod cors;
pub mod error;
pub mod handlers;
pub mod models;
pub mod router;
pub mod state;
