use serde::Serialize;

/// Fixed reply of `POST /run` while code execution is switched off.
pub const RUNNER_DISABLED_OUTPUT: &str = "Runner is disabled for now. UI test OK.";

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub ok: bool,
}

impl HealthResponse {
    pub fn alive() -> Self {
        Self { ok: true }
    }
}

#[derive(Debug, Serialize)]
pub struct RunResponse {
    pub output: &'static str,
}

impl RunResponse {
    pub fn disabled() -> Self {
        Self {
            output: RUNNER_DISABLED_OUTPUT,
        }
    }
}
