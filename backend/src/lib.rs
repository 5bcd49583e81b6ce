use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

pub mod config;
pub mod error;
pub mod handlers {
    pub mod config_handlers;
    pub mod crawl_handlers;
}

use config::{PublicConfig, ServerConfig};
use handlers::{config_handlers, crawl_handlers};

pub struct AppState {
    pub http: reqwest::Client,
    pub public_config: PublicConfig,
    pub server_config: ServerConfig,
    pub environment: String,
}

impl AppState {
    pub fn from_env() -> Self {
        Self {
            http: reqwest::Client::new(),
            public_config: PublicConfig::from_env(),
            server_config: ServerConfig::from_env(),
            environment: config::environment(),
        }
    }
}

async fn health_check() -> &'static str {
    "OK"
}

async fn method_not_allowed() -> error::ApiError {
    error::ApiError::MethodNotAllowed
}

pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/crawl", get(crawl_handlers::crawl))
        .route("/api/crawl-url", post(crawl_handlers::crawl_url))
        .route("/api/config", get(config_handlers::get_config))
        .method_not_allowed_fallback(method_not_allowed)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}
