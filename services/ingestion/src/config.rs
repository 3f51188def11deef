//! Ingestion configuration

use std::path::PathBuf;

use persistence::config::{env_lookup, non_empty};
use persistence::{ConfigError, StoreConfig};

use crate::DEFAULT_SOURCE_PATH;

/// Settings for one ingestion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestConfig {
    pub store: StoreConfig,
    pub source: PathBuf,
}

impl IngestConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(env_lookup)
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let store = StoreConfig::from_lookup(&lookup)?;
        let source = non_empty(&lookup, "SALES_CSV_PATH")
            .unwrap_or_else(|| DEFAULT_SOURCE_PATH.to_string());

        Ok(Self {
            store,
            source: PathBuf::from(source),
        })
    }
}
