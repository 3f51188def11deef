//! CORS layer from configured origins

use axum::http::HeaderValue;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, Any, CorsLayer};

/// Build the CORS layer.
///
/// `*` allows any origin without credentials. An explicit list allows
/// credentials and mirrors the requested methods and headers, since
/// wildcards cannot be combined with credentials.
pub fn build_cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() || origins.iter().any(|o| o == "*") {
        if origins.len() > 1 {
            tracing::warn!(origins = ?origins, "'*' in CORS_ORIGINS overrides the other entries");
        }
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::error!(origin = %origin, "Invalid CORS origin; skipping");
                None
            }
        })
        .collect();

    tracing::info!(origins = ?origins, "CORS configured");

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}
