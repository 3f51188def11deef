//! Gateway configuration
//!
//! Variables (in addition to the storage ones read by `StoreConfig`):
//! - `HOST`, `PORT`: bind address, default `0.0.0.0:8001`
//! - `CORS_ORIGINS`: comma-separated origins, default `*`
//! - `ANALYTICS_FETCH_LIMIT`: bounded fetch size, default 1000

use analytics::DEFAULT_FETCH_LIMIT;
use persistence::config::{env_lookup, non_empty, parsed};
use persistence::{ConfigError, StoreConfig};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8001;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    pub store: StoreConfig,
    pub host: String,
    pub port: u16,
    pub cors_origins: Vec<String>,
    pub fetch_limit: usize,
}

impl GatewayConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(env_lookup)
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let store = StoreConfig::from_lookup(&lookup)?;
        let host = non_empty(&lookup, "HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = parsed(&lookup, "PORT")?.unwrap_or(DEFAULT_PORT);
        let cors_origins = parse_cors_origins(
            non_empty(&lookup, "CORS_ORIGINS")
                .as_deref()
                .unwrap_or("*"),
        );
        let fetch_limit = parsed(&lookup, "ANALYTICS_FETCH_LIMIT")?.unwrap_or(DEFAULT_FETCH_LIMIT);

        if fetch_limit == 0 {
            return Err(ConfigError::Invalid {
                name: "ANALYTICS_FETCH_LIMIT",
                reason: "must be greater than zero".to_string(),
            });
        }

        Ok(Self {
            store,
            host,
            port,
            cors_origins,
            fetch_limit,
        })
    }
}

fn parse_cors_origins(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
