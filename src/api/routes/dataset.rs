//! Dataset Routes
//!
//! - GET /api/v1/sites - Distinct launch sites
//! - GET /api/v1/payload-bounds - Observed payload bounds and slider domain

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::{PayloadBoundsResponse, SitesResponse};
use crate::api::state::AppState;

/// GET /api/v1/sites
pub async fn list_sites(State(state): State<Arc<AppState>>) -> Json<SitesResponse> {
    let sites = state.dataset.sites().to_vec();
    Json(SitesResponse {
        total: sites.len(),
        sites,
    })
}

/// GET /api/v1/payload-bounds
pub async fn payload_bounds(State(state): State<Arc<AppState>>) -> Json<PayloadBoundsResponse> {
    let bounds = state.dataset.payload_bounds();
    let slider = &state.layout.slider;

    Json(PayloadBoundsResponse {
        min: bounds.low,
        max: bounds.high,
        slider_min: slider.min,
        slider_max: slider.max,
        slider_step: slider.step,
    })
}
