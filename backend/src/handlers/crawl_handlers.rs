use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Json, Response},
};
use serde::Deserialize;
use serde_json::{json, Value};
use url::Url;

use crate::error::ApiError;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CrawlUrlRequest {
    #[serde(default)]
    pub url: Option<String>,
    // the web client also sends a `format` hint; the extraction backend
    // decides the output formats on its own, so it is accepted and ignored
    #[serde(default)]
    pub format: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CrawlQuery {
    #[serde(default)]
    pub url: Option<String>,
}

/// POST /api/crawl-url
///
/// Validates the submitted URL, forwards it to the extraction backend and
/// relays `{title, html, markdown, icon}` back to the browser.
pub async fn crawl_url(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CrawlUrlRequest>,
) -> Result<Json<Value>, ApiError> {
    let url = payload.url.unwrap_or_default();
    if url.is_empty() {
        return Err(ApiError::MissingUrl);
    }
    Url::parse(&url).map_err(|_| ApiError::InvalidUrl)?;

    let endpoint = format!("{}/crawl-url", state.public_config.backend_api_url);
    tracing::info!(%url, "forwarding extraction request");

    let response = state
        .http
        .post(&endpoint)
        .json(&json!({ "url": url }))
        .send()
        .await
        .map_err(ApiError::Backend)?;

    if !response.status().is_success() {
        return Err(ApiError::BackendStatus(response.status()));
    }

    let result: Value = response.json().await.map_err(ApiError::Backend)?;

    let mut body = json!({
        "title": result["title"],
        "html": result["html"],
        "markdown": result["markdown"],
    });
    if let Some(icon) = result.get("icon").and_then(Value::as_str) {
        body["icon"] = json!(icon);
    }

    Ok(Json(body))
}

/// GET /api/crawl?url=<URL>
///
/// Relay variant for direct API consumers: forwards the URL as a query
/// parameter and passes the raw upstream body through, keeping the upstream
/// Content-Type and making sure a charset is present.
pub async fn crawl(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CrawlQuery>,
) -> Result<Response, ApiError> {
    let url = params.url.unwrap_or_default();
    if url.is_empty() {
        return Err(ApiError::MissingUrl);
    }

    let endpoint = format!("{}/crawl-url", state.public_config.backend_api_url);
    tracing::info!(%url, "relaying extraction request");

    let response = state
        .http
        .get(&endpoint)
        .query(&[("url", url.as_str())])
        .send()
        .await
        .map_err(ApiError::Backend)?;

    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned)
        .unwrap_or_else(|| "text/html; charset=utf-8".to_string());
    let content_type = if content_type.contains("charset") {
        content_type
    } else {
        format!("{}; charset=utf-8", content_type)
    };

    let body = response.text().await.map_err(ApiError::Backend)?;

    Ok(([(header::CONTENT_TYPE, content_type)], body).into_response())
}
