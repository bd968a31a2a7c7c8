pub mod responses;

/// Per-response details picked up by the access log middleware.
#[derive(Clone, Debug, Default)]
pub struct AccessLogMeta {
    pub error: Option<String>,
}
