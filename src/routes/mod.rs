use axum::Json;
use serde::Serialize;

use crate::error::AppError;

pub mod auth;
pub mod event;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// 健康检查接口
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

pub async fn not_found() -> AppError {
    AppError::NotFound
}
