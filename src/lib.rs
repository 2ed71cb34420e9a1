use config::Config;
use database::EventStore;
use session::SessionStore;
use std::sync::Arc;

pub mod config;
pub mod database;
pub mod error;
pub mod middleware;
pub mod router;
pub mod routes;
pub mod session;
pub mod utils;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub sessions: SessionStore,
    pub events: Arc<dyn EventStore>,
}

impl AppState {
    pub fn new(config: Config, events: Arc<dyn EventStore>) -> Self {
        Self {
            config: Arc::new(config),
            sessions: SessionStore::new(),
            events,
        }
    }
}
