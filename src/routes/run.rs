use axum::Json;
use tracing::info;

use crate::metrics::prometheus::RUN_REQUESTS_TOTAL;
use crate::models::responses::RunResponse;

/// Code runner endpoint. Execution is disabled, so the request body is never read
/// and every call gets the same reply.
pub async fn run_code() -> Json<RunResponse> {
    RUN_REQUESTS_TOTAL.inc();
    info!("Run request received while runner is disabled");
    Json(RunResponse::disabled())
}
