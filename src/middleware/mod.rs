mod auth;
mod error_handler;

pub use auth::{auth_middleware, extract_bearer_token, parse_bearer, require_auth};
pub use error_handler::log_errors;
