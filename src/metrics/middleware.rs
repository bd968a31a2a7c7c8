use axum::{body::Body, extract::Request, http::Method, middleware::Next, response::Response};
use std::time::Instant;

use crate::metrics::prometheus::{ACTIVE_REQUESTS, LATENCY, REQUESTS_TOTAL};

pub async fn metrics_middleware(req: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let method = method_label(req.method());

    ACTIVE_REQUESTS.inc();

    let response = next.run(req).await;

    ACTIVE_REQUESTS.dec();
    REQUESTS_TOTAL
        .with_label_values(&[method, response.status().as_str()])
        .inc();
    LATENCY.observe(start.elapsed().as_secs_f64());

    response
}

/// Extension methods are client-chosen, so they share one label.
pub fn method_label(method: &Method) -> &'static str {
    match *method {
        Method::GET => "GET",
        Method::POST => "POST",
        Method::PUT => "PUT",
        Method::DELETE => "DELETE",
        Method::HEAD => "HEAD",
        Method::OPTIONS => "OPTIONS",
        Method::PATCH => "PATCH",
        Method::CONNECT => "CONNECT",
        Method::TRACE => "TRACE",
        _ => "OTHER",
    }
}
