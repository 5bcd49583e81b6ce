use std::sync::Arc;

use axum::http::{header, Method};
use backend::{app, config, AppState};
use dotenvy::dotenv;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() {
    dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if config::is_development() {
            EnvFilter::new("info,backend=debug")
        } else {
            EnvFilter::new("info")
        }
    });
    fmt().with_env_filter(filter).with_target(true).init();

    let state = Arc::new(AppState::from_env());
    tracing::info!(
        "starting {} v{} ({})",
        state.public_config.app_name,
        state.public_config.app_version,
        state.environment
    );

    let frontend_url =
        std::env::var("FRONTEND_URL").unwrap_or_else(|_| "http://localhost:8080".to_string());
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_origin(AllowOrigin::exact(
            frontend_url.parse().expect("Invalid FRONTEND_URL"),
        ))
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::ORIGIN]);

    let app = app(state).layer(cors);

    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(3000);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port))
        .await
        .unwrap();
    tracing::info!("Starting server on port {}", port);
    axum::serve(listener, app.into_make_service()).await.unwrap();
}
