use axum::{
    body::Body,
    extract::State,
    http::{HeaderMap, Request, header::AUTHORIZATION},
    middleware::Next,
    response::Response,
};

use crate::{AppState, error::AppError, session::SessionStore};

const BEARER_PREFIX: &str = "Bearer ";

/// 解析 `Bearer <token>` 格式的头部值
///
/// `"Bearer "` 后面为空时返回 `Some("")`，由会话校验负责拒绝。
pub fn parse_bearer(value: &str) -> Option<&str> {
    value.strip_prefix(BEARER_PREFIX)
}

pub fn extract_bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)
        .and_then(|header| header.to_str().ok())
        .and_then(parse_bearer)
}

pub fn require_auth(sessions: &SessionStore, headers: &HeaderMap) -> Result<(), AppError> {
    match extract_bearer_token(headers) {
        Some(token) if sessions.validate_session(token) => Ok(()),
        _ => Err(AppError::Unauthorized),
    }
}

pub async fn auth_middleware(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    if let Err(e) = require_auth(&state.sessions, request.headers()) {
        tracing::warn!(
            "Rejected unauthenticated request: {} {}",
            request.method(),
            request.uri().path()
        );
        return Err(e);
    }

    Ok(next.run(request).await)
}
