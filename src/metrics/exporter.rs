use axum::{http::StatusCode, response::IntoResponse, routing::get, Router};
use prometheus::TextEncoder;

use crate::app_error::AppError;

pub fn create_metrics_router() -> Router {
    Router::new().route("/metrics", get(metrics_endpoint))
}

async fn metrics_endpoint() -> Result<impl IntoResponse, AppError> {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let output = encoder.encode_to_string(&metric_families)?;
    Ok((StatusCode::OK, output))
}
