use axum::{
    body::{Body, to_bytes},
    http::{Request, header::CONTENT_LENGTH},
    middleware::Next,
    response::Response,
};
use tracing::error;

const MAX_LOGGED_BODY: usize = 1024;

/// 记录所有 5xx 响应及其内容
pub async fn log_errors(req: Request<Body>, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_owned();
    let response = next.run(req).await;

    if !response.status().is_server_error() {
        return response;
    }

    let (mut parts, body) = response.into_parts();
    let bytes = match to_bytes(body, MAX_LOGGED_BODY).await {
        Ok(b) => b,
        Err(e) => {
            error!(%method, %path, status = %parts.status, "Failed to read error response body: {}", e);
            parts.headers.remove(CONTENT_LENGTH);
            return Response::from_parts(parts, Body::empty());
        }
    };

    error!(
        %method,
        %path,
        status = %parts.status,
        body = %String::from_utf8_lossy(&bytes),
        "Server error occurred"
    );

    parts.headers.remove(CONTENT_LENGTH);
    Response::from_parts(parts, Body::from(bytes))
}
