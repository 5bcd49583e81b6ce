use std::sync::Arc;

use axum::{extract::State, response::Json};
use serde_json::{json, Value};

use crate::AppState;

/// GET /api/config
///
/// Returns the public configuration plus a presence flag for the server
/// secret. The secret itself stays on the server.
pub async fn get_config(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(json!({
        "publicConfig": state.public_config,
        "serverConfigExists": state.server_config.has_api_secret(),
        "environment": state.environment,
    }))
}
