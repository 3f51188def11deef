use crate::error::AppError;
use crate::models::ServiceInfo;
use axum::{Json, http::Uri};

pub async fn service_info() -> Json<ServiceInfo> {
    Json(ServiceInfo::default())
}

pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}
