use axum::{
    Router,
    http::{
        Method,
        header::{AUTHORIZATION, CONTENT_TYPE},
    },
    routing::{get, post, put},
};
use tower_http::cors::{Any, CorsLayer};

use crate::{
    AppState,
    middleware::{auth_middleware, log_errors},
    routes,
};

/// 前端由独立的开发服务器提供，允许任意来源跨域访问
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
}

// 创建主路由
pub fn create_router(state: AppState) -> Router {
    // 公开路由
    let public_routes = Router::new()
        .route("/health", get(routes::health))
        .route("/auth/login", post(routes::auth::login))
        .route("/auth/me", get(routes::auth::me))
        .route("/auth/logout", post(routes::auth::logout))
        .route("/events", get(routes::event::list_events))
        .route("/events/{id}", get(routes::event::get_event));

    // 修改活动需要管理员 token
    let protected_routes = Router::new()
        .route("/events", post(routes::event::create_event))
        .route(
            "/events/{id}",
            put(routes::event::update_event).delete(routes::event::delete_event),
        )
        .route_layer(axum::middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    // 路径存在但方法不对时同样返回 JSON 404，且不经过鉴权
    let api_routes = Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .method_not_allowed_fallback(routes::not_found);

    // 前缀为空时直接挂在根路径
    let router = match state.config.api_base_uri.as_str() {
        "" => Router::new().merge(api_routes),
        prefix => Router::new().nest(prefix, api_routes),
    };

    router
        .fallback(routes::not_found)
        .layer(axum::middleware::from_fn(log_errors))
        .layer(cors_layer())
        .with_state(state)
}
