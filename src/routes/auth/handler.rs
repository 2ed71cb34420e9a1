use axum::{
    extract::{Json, State, rejection::JsonRejection},
    http::HeaderMap,
};

use crate::{AppState, error::AppError, middleware::extract_bearer_token, utils::verify_password};

use super::model::{LoginRequest, LoginResponse, LogoutResponse, SessionStatusResponse};

/// 管理员登录
///
/// 请求体无法解析、缺少密码或密码错误都返回同一个错误。
#[axum::debug_handler]
pub async fn login(
    State(state): State<AppState>,
    req: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, AppError> {
    let password = req.ok().and_then(|Json(req)| req.password);

    match password {
        Some(password) if verify_password(&password, &state.config.admin_password) => {
            let token = state.sessions.create_session();
            tracing::info!("Admin logged in, {} active session(s)", state.sessions.len());
            Ok(Json(LoginResponse { token }))
        }
        _ => {
            tracing::warn!("Rejected admin login attempt");
            Err(AppError::InvalidCredentials)
        }
    }
}

/// 查询当前 token 是否有效，没有 token 不算错误
#[axum::debug_handler]
pub async fn me(State(state): State<AppState>, headers: HeaderMap) -> Json<SessionStatusResponse> {
    let authenticated = extract_bearer_token(&headers)
        .is_some_and(|token| state.sessions.validate_session(token));

    Json(SessionStatusResponse { authenticated })
}

/// 退出登录，总是成功
#[axum::debug_handler]
pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> Json<LogoutResponse> {
    if let Some(token) = extract_bearer_token(&headers).filter(|t| !t.is_empty()) {
        state.sessions.delete_session(token);
        tracing::info!("Admin logged out");
    }

    Json(LogoutResponse { ok: true })
}
