//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! These types are serialized/deserialized to/from JSON.

use serde::{Deserialize, Serialize};

use crate::dashboard::{CallbackSpec, ControlValues, DashboardLayout, OutputPort};
use crate::dataset::{PayloadRange, SiteSelection};

// ============================================
// LAYOUT DTOs
// ============================================

/// Layout plus callback wiring
#[derive(Debug, Serialize)]
pub struct LayoutResponse {
    pub layout: DashboardLayout,
    pub callbacks: Vec<CallbackSpec>,
}

// ============================================
// DATASET DTOs
// ============================================

/// Distinct launch sites
#[derive(Debug, Serialize)]
pub struct SitesResponse {
    /// Sites in order of first appearance
    pub sites: Vec<String>,
    pub total: usize,
}

/// Observed payload bounds and the slider domain
#[derive(Debug, Serialize)]
pub struct PayloadBoundsResponse {
    pub min: f64,
    pub max: f64,
    pub slider_min: f64,
    pub slider_max: f64,
    pub slider_step: f64,
}

// ============================================
// CHART DTOs
// ============================================

/// Pie chart query parameters
#[derive(Debug, Default, Deserialize)]
pub struct PieParams {
    /// Site name or `ALL` (default)
    #[serde(default)]
    pub site: Option<String>,
}

/// Scatter chart query parameters
#[derive(Debug, Default, Deserialize)]
pub struct ScatterParams {
    /// Site name or `ALL` (default)
    #[serde(default)]
    pub site: Option<String>,
    /// Lower payload bound, defaults to the observed minimum
    #[serde(default)]
    pub low: Option<f64>,
    /// Upper payload bound, defaults to the observed maximum
    #[serde(default)]
    pub high: Option<f64>,
}

/// A rendered figure for one output port
#[derive(Debug, Serialize)]
pub struct FigureResponse {
    pub output: OutputPort,
    pub title: String,
    /// plotly.js figure (`data` + `layout`)
    pub figure: serde_json::Value,
}

// ============================================
// UPDATE DTOs
// ============================================

/// Component update request
#[derive(Debug, Deserialize)]
pub struct UpdateRequest {
    /// Output port id, e.g. `success-pie-chart`
    pub output: String,
    /// Control values; missing ones fall back to the layout defaults
    #[serde(default)]
    pub inputs: UpdateInputs,
}

/// Possibly partial control values
#[derive(Debug, Default, Deserialize)]
pub struct UpdateInputs {
    #[serde(rename = "site-dropdown", default)]
    pub site: Option<SiteSelection>,
    #[serde(rename = "payload-slider", default)]
    pub payload: Option<PayloadRange>,
}

impl UpdateInputs {
    /// Fill missing values from `defaults`
    pub fn resolve(self, defaults: ControlValues) -> ControlValues {
        ControlValues {
            site: self.site.unwrap_or(defaults.site),
            payload: self.payload.unwrap_or(defaults.payload),
        }
    }
}

// ============================================
// HEALTH DTOs
// ============================================

/// Full health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status: healthy, unhealthy
    pub status: String,
    /// Number of registered chart callbacks
    pub callbacks: usize,
    /// Number of loaded launch records
    pub records: usize,
    /// Number of distinct launch sites
    pub sites: usize,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Start time (RFC 3339)
    pub started_at: String,
    /// Application version
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_inputs_partial() {
        let req: UpdateRequest =
            serde_json::from_str(r#"{"output": "success-pie-chart", "inputs": {"site-dropdown": "A"}}"#)
                .unwrap();
        let defaults = ControlValues {
            site: SiteSelection::All,
            payload: PayloadRange::new(0.0, 9600.0),
        };

        let values = req.inputs.resolve(defaults);
        assert_eq!(values.site, SiteSelection::site("A"));
        assert_eq!(values.payload, PayloadRange::new(0.0, 9600.0));
    }

    #[test]
    fn test_update_inputs_missing() {
        let req: UpdateRequest = serde_json::from_str(r#"{"output": "x"}"#).unwrap();
        assert!(req.inputs.site.is_none());
        assert!(req.inputs.payload.is_none());
    }
}
