use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;

/// Error surface of the API routes. Every variant renders as an
/// `{"error": <message>}` body with a matching status code.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("please provide a url")]
    MissingUrl,

    #[error("please provide a valid url")]
    InvalidUrl,

    #[error("only the documented method is supported on this route")]
    MethodNotAllowed,

    /// The request to the extraction backend failed outright, or its body
    /// could not be decoded. Detail goes to the log, not to the client.
    #[error("failed to extract content, please check the url and try again")]
    Backend(#[source] reqwest::Error),

    /// The extraction backend answered with a non-success status.
    #[error("the extraction service returned an error, please try again later")]
    BackendStatus(StatusCode),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingUrl | ApiError::InvalidUrl => StatusCode::BAD_REQUEST,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Backend(_) | ApiError::BackendStatus(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Backend(source) => {
                tracing::error!("extraction backend request failed: {}", source);
            }
            ApiError::BackendStatus(status) => {
                tracing::error!("extraction backend returned status {}", status);
            }
            _ => {}
        }
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_map_to_400() {
        assert_eq!(ApiError::MissingUrl.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::InvalidUrl.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn backend_errors_map_to_500() {
        assert_eq!(
            ApiError::BackendStatus(StatusCode::BAD_GATEWAY).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
