//! Dashboard Routes
//!
//! - GET / - Dashboard HTML page
//! - GET /api/v1/layout - Layout and callback wiring as JSON

use axum::{extract::State, response::Html, Json};
use std::sync::Arc;

use crate::api::dto::LayoutResponse;
use crate::api::state::AppState;

/// GET /
pub async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(state.page.to_string())
}

/// GET /api/v1/layout
pub async fn layout(State(state): State<Arc<AppState>>) -> Json<LayoutResponse> {
    Json(LayoutResponse {
        layout: state.layout.as_ref().clone(),
        callbacks: state.callbacks.describe(),
    })
}
