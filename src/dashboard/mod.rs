//! Dashboard
//!
//! The interactive surface around the chart transforms:
//!
//! - **layout**: dropdown, range slider and graph regions
//! - **callbacks**: named input/output ports and their pure handlers
//! - **page**: the HTML document served at `/`
//!
//! # Update flow
//!
//! ```text
//! control change → dependents(input) → POST update(output, values)
//!     → dispatch(output) → handler(dataset, values) → Figure → Plotly.react
//! ```

pub mod callbacks;
pub mod layout;
pub mod page;

pub use callbacks::{
    pie_handler, scatter_handler, Callback, CallbackError, CallbackRegistry, CallbackSpec,
    ControlValues, Handler, InputPort, OutputPort,
};
pub use layout::{
    DashboardLayout, Dropdown, DropdownOption, GraphRegion, RangeSlider, SliderDomain,
    SliderSettings, DASHBOARD_TITLE,
};
pub use page::{html_escape, render_page};
