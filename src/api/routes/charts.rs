//! Chart Routes
//!
//! Direct access to the two chart handlers with query-string controls.
//!
//! - GET /api/v1/charts/pie?site=ALL
//! - GET /api/v1/charts/scatter?site=ALL&low=0&high=10000

use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::{FigureResponse, PieParams, ScatterParams};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::dashboard::{ControlValues, OutputPort};
use crate::dataset::{PayloadRange, SiteSelection};

/// GET /api/v1/charts/pie
pub async fn pie_chart(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PieParams>,
) -> ApiResult<Json<FigureResponse>> {
    let mut values = state.layout.initial_values();
    if let Some(site) = params.site {
        values.site = SiteSelection::from(site);
    }

    render(&state, OutputPort::SuccessPieChart, &values)
}

/// GET /api/v1/charts/scatter
pub async fn scatter_chart(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ScatterParams>,
) -> ApiResult<Json<FigureResponse>> {
    let defaults = state.layout.initial_values();
    let low = params.low.unwrap_or(defaults.payload.low);
    let high = params.high.unwrap_or(defaults.payload.high);

    if !low.is_finite() || !high.is_finite() {
        return Err(ApiError::Validation(
            "low and high must be finite numbers".to_string(),
        ));
    }

    let values = ControlValues {
        site: params.site.map(SiteSelection::from).unwrap_or(defaults.site),
        payload: PayloadRange::new(low, high),
    };

    render(&state, OutputPort::PayloadScatterChart, &values)
}

/// Dispatch `output` and wrap the figure
pub(crate) fn render(
    state: &AppState,
    output: OutputPort,
    values: &ControlValues,
) -> ApiResult<Json<FigureResponse>> {
    let figure = state
        .callbacks
        .dispatch(output, &state.dataset, values, &state.chart_options)
        .ok_or_else(|| ApiError::NotFound(format!("No callback registered for {}", output)))?;

    Ok(Json(FigureResponse {
        output,
        title: figure.title().to_string(),
        figure: figure.to_plotly(),
    }))
}
