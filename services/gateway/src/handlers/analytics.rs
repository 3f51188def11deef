use crate::error::AppError;
use crate::state::AppState;
use axum::{Json, extract::State};
use sales_types::analytics::{OrderView, OrdersPoint, RevenuePoint, SalesMetrics};

pub async fn get_metrics(State(state): State<AppState>) -> Result<Json<SalesMetrics>, AppError> {
    let metrics = state.analytics.metrics().await?;
    Ok(Json(metrics))
}

pub async fn get_revenue(
    State(state): State<AppState>,
) -> Result<Json<Vec<RevenuePoint>>, AppError> {
    let series = state.analytics.revenue_series().await?;
    Ok(Json(series))
}

// Static series; never touches storage
pub async fn get_orders(State(state): State<AppState>) -> Json<Vec<OrdersPoint>> {
    Json(state.analytics.orders_series())
}

pub async fn get_recent_orders(
    State(state): State<AppState>,
) -> Result<Json<Vec<OrderView>>, AppError> {
    let orders = state.analytics.recent_orders().await?;
    Ok(Json(orders))
}
