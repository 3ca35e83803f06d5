//! Application State
//!
//! Shared state accessible by all API handlers.
//! Everything here is built once at startup and never mutated.

use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::Instant;

use crate::charts::ChartOptions;
use crate::config::{ApiConfig, DashboardConfig};
use crate::dashboard::{render_page, CallbackError, CallbackRegistry, DashboardLayout};
use crate::dataset::LaunchDataset;

/// Path of the component update endpoint, as seen by the page script
pub const UPDATE_PATH: &str = "/api/v1/update";

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// The launch records loaded at startup
    pub dataset: Arc<LaunchDataset>,
    /// Control and graph layout derived from the dataset
    pub layout: Arc<DashboardLayout>,
    /// Output port → handler bindings
    pub callbacks: Arc<CallbackRegistry>,
    /// Options passed to every chart handler
    pub chart_options: ChartOptions,
    /// Pre-rendered dashboard page
    pub page: Arc<str>,
    /// API configuration
    pub config: Arc<ApiConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
    /// Wall-clock start time reported by the health endpoint
    pub started_at: DateTime<Utc>,
}

impl AppState {
    /// Create state with the standard callback registry
    pub fn new(
        dataset: Arc<LaunchDataset>,
        dashboard: &DashboardConfig,
        config: ApiConfig,
    ) -> Result<Self, CallbackError> {
        let callbacks = CallbackRegistry::standard()?;
        Ok(Self::with_callbacks(dataset, dashboard, config, callbacks))
    }

    /// Create state with a custom callback registry
    pub fn with_callbacks(
        dataset: Arc<LaunchDataset>,
        dashboard: &DashboardConfig,
        config: ApiConfig,
        callbacks: CallbackRegistry,
    ) -> Self {
        let layout = DashboardLayout::build(&dataset, &dashboard.title, &dashboard.slider);
        let page = render_page(&layout, &callbacks.describe(), UPDATE_PATH);

        Self {
            dataset,
            layout: Arc::new(layout),
            callbacks: Arc::new(callbacks),
            chart_options: dashboard.chart_options(),
            page: Arc::from(page),
            config: Arc::new(config),
            start_time: Instant::now(),
            started_at: Utc::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
