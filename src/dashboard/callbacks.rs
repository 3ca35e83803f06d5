//! Callback Registry
//!
//! Binds named input ports (controls) to named output ports (graphs). Each
//! output has exactly one handler: a pure function of the dataset and the
//! current control values.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::charts::{payload_scatter, success_pie, ChartOptions, Figure};
use crate::dataset::{LaunchDataset, PayloadRange, SiteSelection};

/// Controls whose value feeds a callback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputPort {
    #[serde(rename = "site-dropdown")]
    SiteDropdown,
    #[serde(rename = "payload-slider")]
    PayloadSlider,
}

impl InputPort {
    pub const ALL: [InputPort; 2] = [InputPort::SiteDropdown, InputPort::PayloadSlider];

    pub const fn id(self) -> &'static str {
        match self {
            InputPort::SiteDropdown => "site-dropdown",
            InputPort::PayloadSlider => "payload-slider",
        }
    }
}

/// Graph regions a callback writes to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutputPort {
    #[serde(rename = "success-pie-chart")]
    SuccessPieChart,
    #[serde(rename = "success-payload-scatter-chart")]
    PayloadScatterChart,
}

impl OutputPort {
    pub const ALL: [OutputPort; 2] = [OutputPort::SuccessPieChart, OutputPort::PayloadScatterChart];

    pub const fn id(self) -> &'static str {
        match self {
            OutputPort::SuccessPieChart => "success-pie-chart",
            OutputPort::PayloadScatterChart => "success-payload-scatter-chart",
        }
    }
}

macro_rules! port_traits {
    ($port:ty) => {
        impl fmt::Display for $port {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.id())
            }
        }

        impl FromStr for $port {
            type Err = CallbackError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <$port>::ALL
                    .into_iter()
                    .find(|port| port.id() == s)
                    .ok_or_else(|| CallbackError::UnknownPort(s.to_string()))
            }
        }
    };
}

port_traits!(InputPort);
port_traits!(OutputPort);

/// Callback registration and lookup errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CallbackError {
    #[error("Unknown component id: {0}")]
    UnknownPort(String),

    #[error("Output {0} already has a callback")]
    DuplicateOutput(OutputPort),

    #[error("Callback for {0} declares no inputs")]
    NoInputs(OutputPort),
}

/// Current value of every control
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlValues {
    #[serde(rename = "site-dropdown")]
    pub site: SiteSelection,
    #[serde(rename = "payload-slider")]
    pub payload: PayloadRange,
}

/// A pure chart handler
pub type Handler = fn(&LaunchDataset, &ControlValues, &ChartOptions) -> Figure;

/// One output port, the inputs it depends on, and its handler
#[derive(Clone)]
pub struct Callback {
    pub output: OutputPort,
    pub inputs: Vec<InputPort>,
    pub handler: Handler,
}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callback")
            .field("output", &self.output)
            .field("inputs", &self.inputs)
            .finish_non_exhaustive()
    }
}

/// Serializable view of a callback's wiring
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CallbackSpec {
    pub output: OutputPort,
    pub inputs: Vec<InputPort>,
}

/// Pie chart: site dropdown → success pie
pub fn pie_handler(dataset: &LaunchDataset, values: &ControlValues, _options: &ChartOptions) -> Figure {
    success_pie(dataset, &values.site).into()
}

/// Scatter chart: site dropdown + payload slider → payload scatter
pub fn scatter_handler(dataset: &LaunchDataset, values: &ControlValues, options: &ChartOptions) -> Figure {
    if values.payload.is_inverted() {
        tracing::debug!(payload = %values.payload, "Inverted payload range selects no launches");
    }
    payload_scatter(dataset, &values.site, values.payload, options.scatter_range_policy).into()
}

/// Registry of callbacks keyed by output port
#[derive(Debug, Clone, Default)]
pub struct CallbackRegistry {
    callbacks: Vec<Callback>,
}

impl CallbackRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the dashboard's two callbacks
    pub fn standard() -> Result<Self, CallbackError> {
        let mut registry = Self::new();
        registry.register(Callback {
            output: OutputPort::SuccessPieChart,
            inputs: vec![InputPort::SiteDropdown],
            handler: pie_handler,
        })?;
        registry.register(Callback {
            output: OutputPort::PayloadScatterChart,
            inputs: vec![InputPort::SiteDropdown, InputPort::PayloadSlider],
            handler: scatter_handler,
        })?;
        Ok(registry)
    }

    /// Register a callback. Each output may only be bound once.
    pub fn register(&mut self, callback: Callback) -> Result<(), CallbackError> {
        if callback.inputs.is_empty() {
            return Err(CallbackError::NoInputs(callback.output));
        }
        if self.get(callback.output).is_some() {
            return Err(CallbackError::DuplicateOutput(callback.output));
        }
        self.callbacks.push(callback);
        Ok(())
    }

    pub fn get(&self, output: OutputPort) -> Option<&Callback> {
        self.callbacks.iter().find(|c| c.output == output)
    }

    /// Outputs that must be refreshed when `input` changes
    pub fn dependents(&self, input: InputPort) -> Vec<OutputPort> {
        self.callbacks
            .iter()
            .filter(|c| c.inputs.contains(&input))
            .map(|c| c.output)
            .collect()
    }

    /// Run the handler bound to `output`
    pub fn dispatch(
        &self,
        output: OutputPort,
        dataset: &LaunchDataset,
        values: &ControlValues,
        options: &ChartOptions,
    ) -> Option<Figure> {
        let callback = self.get(output)?;
        if let SiteSelection::Site(site) = &values.site {
            if !dataset.contains_site(site) {
                tracing::debug!(site = %site, "Unknown launch site selects no launches");
            }
        }
        tracing::debug!(
            output = %output,
            site = %values.site,
            payload = %values.payload,
            "Dispatching callback"
        );
        Some((callback.handler)(dataset, values, options))
    }

    pub fn describe(&self) -> Vec<CallbackSpec> {
        self.callbacks
            .iter()
            .map(|c| CallbackSpec {
                output: c.output,
                inputs: c.inputs.clone(),
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }
}
