//! Storage configuration and environment helpers.
//!
//! Variables:
//! - `MONGO_URL` (required): connection string
//! - `DB_NAME` (required): database name
//! - `SALES_COLLECTION`: collection name, defaults to `sales`

use thiserror::Error;

use crate::SALES_COLLECTION;

/// Configuration loading failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} is invalid: {reason}")]
    Invalid { name: &'static str, reason: String },
}

/// Connection settings for the document store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub mongo_url: String,
    pub database: String,
    pub collection: String,
}

impl StoreConfig {
    /// Load from process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(env_lookup)
    }

    /// Load from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mongo_url = require(&lookup, "MONGO_URL")?;
        let database = require(&lookup, "DB_NAME")?;
        let collection =
            non_empty(&lookup, "SALES_COLLECTION").unwrap_or_else(|| SALES_COLLECTION.to_string());

        Ok(Self {
            mongo_url,
            database,
            collection,
        })
    }
}

/// Read a process environment variable.
pub fn env_lookup(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

/// Trimmed, non-empty value of `name`.
pub fn non_empty<F>(lookup: &F, name: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name).and_then(|v| {
        let trimmed = v.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Like `non_empty`, but absence is an error.
pub fn require<F>(lookup: &F, name: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    non_empty(lookup, name).ok_or(ConfigError::Missing(name))
}

/// Parse `name` into `T` when present.
pub fn parsed<F, T>(lookup: &F, name: &'static str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let Some(v) = non_empty(lookup, name) else {
        return Ok(None);
    };
    v.parse::<T>().map(Some).map_err(|e| ConfigError::Invalid {
        name,
        reason: e.to_string(),
    })
}
