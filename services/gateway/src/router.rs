use crate::handlers::{analytics, root};
use crate::state::AppState;
use axum::{Router, routing::get};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub fn create_router(state: AppState, cors: CorsLayer) -> Router {
    let analytics_routes = Router::new()
        .route("/metrics", get(analytics::get_metrics))
        .route("/revenue", get(analytics::get_revenue))
        .route("/orders", get(analytics::get_orders))
        .route("/recent-orders", get(analytics::get_recent_orders));

    Router::new()
        .route("/api", get(root::service_info))
        .route("/api/", get(root::service_info))
        .nest("/api/analytics", analytics_routes)
        .fallback(root::not_found)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
