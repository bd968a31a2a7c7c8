use axum::Json;

use crate::models::responses::HealthResponse;

/// Liveness probe. Query string and body are ignored.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::alive())
}
