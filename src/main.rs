use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use club_poisson::{
    AppState,
    config::Config,
    database::{EventOperation, EventStore, MemoryEventOperation},
    router::create_router,
};
use sqlx::Executor;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // 初始化日志
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // 加载配置
    let config = or_exit(
        Config::from_env(),
        "Failed to load configuration (ADMIN_PASSWORD must be set)",
    );

    // 设置活动存储
    let events: Arc<dyn EventStore> = match &config.database_url {
        Some(database_url) => {
            let pool = PgPoolOptions::new()
                .max_connections(config.database_max_connections)
                .after_connect(|conn, _meta| {
                    Box::pin(async move {
                        conn.execute("SET application_name = 'club_poisson';")
                            .await?;
                        Ok(())
                    })
                })
                .connect(database_url)
                .await;
            let pool = or_exit(pool, "Failed to connect to Postgres");

            let operation = EventOperation::new(pool);
            or_exit(operation.migrate().await, "Failed to migrate database");
            Arc::new(operation)
        }
        None => {
            tracing::warn!("DATABASE_URL not set, events are kept in memory only");
            Arc::new(MemoryEventOperation::new())
        }
    };

    let addr = SocketAddr::new(
        config.server_host.parse().unwrap_or_else(|_| {
            tracing::warn!("Invalid server_host, falling back to dual-stack default");
            IpAddr::V6(std::net::Ipv6Addr::UNSPECIFIED)
        }),
        config.server_port,
    );

    // 设置应用状态
    let state = AppState::new(config, events);
    let app = create_router(state);

    // 启动服务器
    let listener = or_exit(
        tokio::net::TcpListener::bind(&addr).await,
        &format!("Failed to bind {addr}"),
    );
    tracing::info!("Server listening on {}", addr);
    or_exit(
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await,
        "Server error",
    );
}

/// 启动阶段的错误记录日志后退出进程
fn or_exit<T, E: std::fmt::Display>(result: Result<T, E>, context: &str) -> T {
    match result {
        Ok(value) => value,
        Err(e) => {
            tracing::error!("{}: {}", context, e);
            std::process::exit(1);
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
