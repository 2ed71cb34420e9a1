#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
    response::Response,
};
use club_poisson::{
    AppState, config::Config, database::MemoryEventOperation, router::create_router,
};
use serde_json::Value;
use tower::ServiceExt;

pub const ADMIN_PASSWORD: &str = "poisson-rouge";

pub fn test_state() -> AppState {
    state_with_base_uri(None)
}

fn state_with_base_uri(base_uri: Option<&str>) -> AppState {
    let config = Config::from_lookup(|key| match key {
        "ADMIN_PASSWORD" => Some(ADMIN_PASSWORD.to_string()),
        "API_BASE_URI" => base_uri.map(str::to_string),
        _ => None,
    })
    .expect("test config");
    AppState::new(config, Arc::new(MemoryEventOperation::new()))
}

pub fn test_app() -> (Router, AppState) {
    let state = test_state();
    (create_router(state.clone()), state)
}

pub fn test_app_with_base_uri(base_uri: &str) -> Router {
    create_router(state_with_base_uri(Some(base_uri)))
}

pub fn request(method: &str, uri: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

pub async fn send_raw(app: &Router, req: Request<Body>) -> Response {
    app.clone().oneshot(req).await.unwrap()
}

pub async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let response = send_raw(app, req).await;
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

pub async fn login(app: &Router) -> String {
    let (status, body) = send(
        app,
        request(
            "POST",
            "/api/auth/login",
            None,
            Some(serde_json::json!({ "password": ADMIN_PASSWORD })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body["token"].as_str().unwrap().to_string()
}
