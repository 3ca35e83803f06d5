//! Component Update Route
//!
//! - POST /api/v1/update - Run the callback bound to an output port
//!
//! Request:
//!
//! ```json
//! { "output": "success-payload-scatter-chart",
//!   "inputs": { "site-dropdown": "ALL", "payload-slider": [0, 10000] } }
//! ```

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::{FigureResponse, UpdateRequest};
use crate::api::error::ApiResult;
use crate::api::routes::charts::render;
use crate::api::state::AppState;
use crate::dashboard::OutputPort;

/// POST /api/v1/update
pub async fn update_component(
    State(state): State<Arc<AppState>>,
    Json(req): Json<UpdateRequest>,
) -> ApiResult<Json<FigureResponse>> {
    let output: OutputPort = req.output.parse()?;
    let values = req.inputs.resolve(state.layout.initial_values());

    render(&state, output, &values)
}
