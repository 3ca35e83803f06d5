//! # Launchboard
//!
//! Launch Records Dashboard - an interactive view over a static dataset of
//! rocket launches, served with Axum.
//!
//! ## Features
//!
//! - **Success pie**: successful launches per site, or success vs. failure for one site
//! - **Payload scatter**: payload mass vs. outcome, coloured by booster category
//! - **Reactive controls**: a site dropdown and a payload range slider bound to
//!   pure chart handlers through named ports
//!
//! ## Modules
//!
//! - [`dataset`]: Launch records and the CSV loader
//! - [`charts`]: Pie and scatter transforms, plotly figure rendering
//! - [`dashboard`]: Layout, callback registry and HTML page
//! - [`api`]: HTTP server with Axum
//! - [`config`]: TOML and environment configuration
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use launchboard::charts::{payload_scatter, success_pie, RangePolicy};
//! use launchboard::dataset::{load_dataset, PayloadRange, SiteSelection};
//! use std::path::Path;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let loaded = load_dataset(Path::new("spacex_launch_dash.csv"), false)?;
//!     let dataset = loaded.dataset;
//!
//!     let pie = success_pie(&dataset, &SiteSelection::All);
//!     println!("{}: {} successful launches", pie.title, pie.total());
//!
//!     let scatter = payload_scatter(
//!         &dataset,
//!         &SiteSelection::site("KSC LC-39A"),
//!         PayloadRange::new(0.0, 10_000.0),
//!         RangePolicy::default(),
//!     );
//!     println!("{} points", scatter.point_count());
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod charts;
pub mod config;
pub mod dashboard;
pub mod dataset;

// Re-export top-level types for convenience
pub use dataset::{
    load_dataset, DatasetError, DatasetLoader, DatasetResult, LaunchDataset, LaunchRecord,
    LoadReport, LoadedDataset, Outcome, PayloadRange, SiteSelection, ALL_SITES,
};

pub use charts::{
    payload_scatter, success_pie, ChartOptions, Figure, PieChart, PieSlice, RangePolicy,
    ScatterChart, ScatterPoint, ScatterSeries,
};

pub use dashboard::{
    CallbackError, CallbackRegistry, ControlValues, DashboardLayout, InputPort, OutputPort,
    SliderDomain, SliderSettings,
};

pub use api::{build_router, serve, ApiError, AppState};

pub use config::{ApiConfig, Config, ConfigError, DashboardConfig, DatasetConfig, LoggingConfig};
