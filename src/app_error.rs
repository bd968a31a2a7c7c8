use crate::models::AccessLogMeta;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    MetricsEncoding(prometheus::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AppError::MetricsEncoding(err) => write!(f, "Failed to encode metrics: {}", err),
        }
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message, error_type) = match self {
            AppError::MetricsEncoding(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to encode metrics: {}", err),
                "metrics_error",
            ),
        };

        let body = Json(json!({
            "error": error_message,
            "error_type": error_type
        }));

        let mut response = (status, body).into_response();

        // Inject error details for access logging
        response.extensions_mut().insert(AccessLogMeta {
            error: Some(error_message),
        });

        response
    }
}

impl From<prometheus::Error> for AppError {
    fn from(err: prometheus::Error) -> Self {
        AppError::MetricsEncoding(err)
    }
}
