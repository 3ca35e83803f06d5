//! Chart transforms
//!
//! Pure functions from (dataset, control values) to chart descriptors:
//!
//! - **pie**: success counts per site, or success vs. failure for one site
//! - **scatter**: payload mass vs. outcome, grouped by booster category
//! - **figure**: plotly.js JSON rendering of the descriptors
//!
//! ```text
//! LaunchDataset + SiteSelection (+ PayloadRange)
//!     → filter → group/count → PieChart | ScatterChart → Figure → plotly JSON
//! ```

pub mod figure;
pub mod pie;
pub mod scatter;

pub use figure::{Figure, SERIES_COLORS};
pub use pie::{success_pie, PieChart, PieSlice, ALL_SITES_PIE_TITLE};
pub use scatter::{
    payload_scatter, RangePolicy, ScatterChart, ScatterPoint, ScatterSeries, SCATTER_TITLE,
    SCATTER_X_TITLE, SCATTER_Y_TITLE,
};

/// Options shared by the chart handlers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChartOptions {
    pub scatter_range_policy: RangePolicy,
}
