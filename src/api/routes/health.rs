//! Health Routes
//!
//! Health check endpoints for monitoring.
//!
//! - GET /health/live - Liveness probe (process is alive)
//! - GET /health/ready - Readiness probe (callbacks wired)
//! - GET /health - Full health status

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::api::dto::HealthResponse;
use crate::api::state::AppState;

/// GET /health/live
///
/// Returns 200 if the process is alive, no dependency checks.
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /health/ready
///
/// Returns 200 once chart callbacks are registered. The dataset is loaded
/// and checked non-empty before the router exists, so it is not re-checked.
pub async fn readiness(State(state): State<Arc<AppState>>) -> StatusCode {
    if is_ready(&state) {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    }
}

/// GET /health
///
/// Full health status with dataset details.
pub async fn full_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let ready = is_ready(&state);

    Json(HealthResponse {
        status: if ready { "healthy" } else { "unhealthy" }.to_string(),
        callbacks: state.callbacks.len(),
        records: state.dataset.len(),
        sites: state.dataset.sites().len(),
        uptime_seconds: state.uptime_seconds(),
        started_at: state.started_at.to_rfc3339(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

fn is_ready(state: &AppState) -> bool {
    !state.callbacks.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_liveness() {
        let status = liveness().await;
        assert_eq!(status, StatusCode::OK);
    }
}
