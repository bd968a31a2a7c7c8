use axum::{
    http::{header::HeaderValue, Method},
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing::warn;

use crate::config::{Config, CorsConfig};
use crate::metrics::{exporter::create_metrics_router, middleware::metrics_middleware};
use crate::middleware::access_log::access_log_middleware;

pub mod health;
pub mod run;

/// Builds the full application: API routes, `/metrics`, CORS and the request middlewares.
pub fn create_router(config: &Config) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/run", post(run::run_code))
        .merge(create_metrics_router())
        // route_layer keeps unmatched paths on axum's 404, even for OPTIONS
        .route_layer(cors_layer(&config.cors))
        .layer(axum_middleware::from_fn(metrics_middleware))
        .layer(axum_middleware::from_fn(access_log_middleware)) // Access Log 最外层
}

fn cors_layer(cors: &CorsConfig) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    if cors.allowed_origins.is_empty() {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = cors
        .allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    layer.allow_origin(AllowOrigin::list(origins))
}
