use prometheus::{
    exponential_buckets, histogram_opts, opts, register_histogram, register_int_counter,
    register_int_counter_vec, register_int_gauge, Histogram, IntCounter, IntCounterVec, IntGauge,
};

pub static REQUESTS_TOTAL: once_cell::sync::Lazy<IntCounterVec> = once_cell::sync::Lazy::new(|| {
    register_int_counter_vec!(
        opts!("runner_api_requests_total", "Total number of HTTP requests"),
        &["method", "status"]
    )
    .unwrap()
});

pub static ACTIVE_REQUESTS: once_cell::sync::Lazy<IntGauge> = once_cell::sync::Lazy::new(|| {
    register_int_gauge!("runner_api_active_requests", "Current active requests").unwrap()
});

pub static LATENCY: once_cell::sync::Lazy<Histogram> = once_cell::sync::Lazy::new(|| {
    let opts = histogram_opts!(
        "runner_api_latency_seconds",
        "End-to-end latency in seconds",
        exponential_buckets(0.0005, 2.0, 15).unwrap()
    );
    register_histogram!(opts).unwrap()
});

pub static RUN_REQUESTS_TOTAL: once_cell::sync::Lazy<IntCounter> = once_cell::sync::Lazy::new(|| {
    register_int_counter!(
        "runner_api_run_requests_total",
        "Requests received by the (disabled) code runner"
    )
    .unwrap()
});
