use serde::Serialize;

pub const SERVICE_NAME: &str = "Sales Analytics API";
pub const API_VERSION: &str = "1.0.0";

/// Body of `GET /api/`
#[derive(Debug, Clone, Serialize)]
pub struct ServiceInfo {
    pub message: &'static str,
    pub version: &'static str,
}

impl Default for ServiceInfo {
    fn default() -> Self {
        Self {
            message: SERVICE_NAME,
            version: API_VERSION,
        }
    }
}
