//! Dashboard Layout
//!
//! Describes the controls and graph regions shown on the page. Built once from
//! the dataset at startup and served to the browser as JSON.

use serde::{Deserialize, Serialize};

use super::callbacks::{ControlValues, InputPort, OutputPort};
use crate::dataset::{LaunchDataset, PayloadRange, SiteSelection, ALL_SITES};

pub const DASHBOARD_TITLE: &str = "SpaceX Launch Records Dashboard";
pub const ALL_SITES_LABEL: &str = "All Sites";
pub const DROPDOWN_PLACEHOLDER: &str = "Select a Launch Site here";
pub const SLIDER_LABEL: &str = "Payload range (Kg):";

/// How the slider's selectable domain is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SliderDomain {
    /// The configured `[min, max]` only
    Fixed,
    /// The observed payload bounds only
    Data,
    /// The configured `[min, max]`, widened to include the observed bounds
    #[default]
    Covering,
}

/// Slider settings taken from configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliderSettings {
    #[serde(default = "default_slider_min")]
    pub min: f64,
    #[serde(default = "default_slider_max")]
    pub max: f64,
    #[serde(default = "default_slider_step")]
    pub step: f64,
    #[serde(default)]
    pub domain: SliderDomain,
}

fn default_slider_min() -> f64 {
    0.0
}

fn default_slider_max() -> f64 {
    10_000.0
}

fn default_slider_step() -> f64 {
    1_000.0
}

impl Default for SliderSettings {
    fn default() -> Self {
        Self {
            min: default_slider_min(),
            max: default_slider_max(),
            step: default_slider_step(),
            domain: SliderDomain::default(),
        }
    }
}

impl SliderSettings {
    /// Resolve the selectable domain against the observed payload bounds
    pub fn resolve_domain(&self, bounds: PayloadRange) -> PayloadRange {
        let fixed = PayloadRange::new(self.min, self.max);
        match self.domain {
            SliderDomain::Fixed => fixed,
            SliderDomain::Data => bounds,
            SliderDomain::Covering => fixed.union(&bounds),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DropdownOption {
    pub label: String,
    pub value: String,
}

/// Site selection control
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dropdown {
    pub id: InputPort,
    pub options: Vec<DropdownOption>,
    pub value: SiteSelection,
    pub placeholder: String,
    pub searchable: bool,
}

/// Payload range control
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RangeSlider {
    pub id: InputPort,
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    /// Initial selection: the observed payload bounds
    pub value: PayloadRange,
}

/// A region that displays one chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphRegion {
    pub id: OutputPort,
}

/// Full page description
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardLayout {
    pub title: String,
    pub dropdown: Dropdown,
    pub slider: RangeSlider,
    pub graphs: Vec<GraphRegion>,
}

impl DashboardLayout {
    pub fn build(dataset: &LaunchDataset, title: &str, slider: &SliderSettings) -> Self {
        let mut options = vec![DropdownOption {
            label: ALL_SITES_LABEL.to_string(),
            value: ALL_SITES.to_string(),
        }];
        options.extend(dataset.sites().iter().map(|site| DropdownOption {
            label: site.clone(),
            value: site.clone(),
        }));

        let bounds = dataset.payload_bounds();
        let domain = slider.resolve_domain(bounds);

        Self {
            title: title.to_string(),
            dropdown: Dropdown {
                id: InputPort::SiteDropdown,
                options,
                value: SiteSelection::All,
                placeholder: DROPDOWN_PLACEHOLDER.to_string(),
                searchable: true,
            },
            slider: RangeSlider {
                id: InputPort::PayloadSlider,
                label: SLIDER_LABEL.to_string(),
                min: domain.low,
                max: domain.high,
                step: slider.step,
                value: bounds,
            },
            graphs: vec![
                GraphRegion {
                    id: OutputPort::SuccessPieChart,
                },
                GraphRegion {
                    id: OutputPort::PayloadScatterChart,
                },
            ],
        }
    }

    /// Control values before any user interaction
    pub fn initial_values(&self) -> ControlValues {
        ControlValues {
            site: self.dropdown.value.clone(),
            payload: self.slider.value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{LaunchRecord, Outcome};

    fn dataset(max_payload: f64) -> LaunchDataset {
        LaunchDataset::new(vec![
            LaunchRecord::new("CCAFS LC-40", 0.0, Outcome::Failure, "v1.0"),
            LaunchRecord::new("KSC LC-39A", max_payload, Outcome::Success, "FT"),
            LaunchRecord::new("CCAFS LC-40", 500.0, Outcome::Success, "v1.1"),
        ])
        .unwrap()
    }

    #[test]
    fn test_dropdown_options() {
        let layout = DashboardLayout::build(&dataset(9600.0), DASHBOARD_TITLE, &SliderSettings::default());
        let values: Vec<&str> = layout
            .dropdown
            .options
            .iter()
            .map(|o| o.value.as_str())
            .collect();
        assert_eq!(values, vec!["ALL", "CCAFS LC-40", "KSC LC-39A"]);
        assert_eq!(layout.dropdown.options[0].label, "All Sites");
        assert_eq!(layout.dropdown.value, SiteSelection::All);
    }

    #[test]
    fn test_slider_defaults_to_observed_bounds() {
        let layout = DashboardLayout::build(&dataset(9600.0), DASHBOARD_TITLE, &SliderSettings::default());
        assert_eq!(layout.slider.value, PayloadRange::new(0.0, 9600.0));
        assert_eq!(layout.slider.min, 0.0);
        assert_eq!(layout.slider.max, 10_000.0);
        assert_eq!(layout.slider.step, 1_000.0);
    }

    #[test]
    fn test_covering_domain_widens_for_heavy_payloads() {
        let layout = DashboardLayout::build(&dataset(15_600.0), DASHBOARD_TITLE, &SliderSettings::default());
        assert_eq!(layout.slider.max, 15_600.0);
    }

    #[test]
    fn test_fixed_and_data_domains() {
        let bounds = PayloadRange::new(350.0, 15_600.0);

        let fixed = SliderSettings {
            domain: SliderDomain::Fixed,
            ..Default::default()
        };
        assert_eq!(fixed.resolve_domain(bounds), PayloadRange::new(0.0, 10_000.0));

        let data = SliderSettings {
            domain: SliderDomain::Data,
            ..Default::default()
        };
        assert_eq!(data.resolve_domain(bounds), bounds);
    }

    #[test]
    fn test_initial_values() {
        let layout = DashboardLayout::build(&dataset(9600.0), DASHBOARD_TITLE, &SliderSettings::default());
        let values = layout.initial_values();
        assert_eq!(values.site, SiteSelection::All);
        assert_eq!(values.payload, PayloadRange::new(0.0, 9600.0));
    }

    #[test]
    fn test_layout_json_uses_component_ids() {
        let layout = DashboardLayout::build(&dataset(9600.0), DASHBOARD_TITLE, &SliderSettings::default());
        let value = serde_json::to_value(&layout).unwrap();
        assert_eq!(value["dropdown"]["id"], "site-dropdown");
        assert_eq!(value["slider"]["id"], "payload-slider");
        assert_eq!(value["slider"]["value"], serde_json::json!([0.0, 9600.0]));
        assert_eq!(value["graphs"][0]["id"], "success-pie-chart");
        assert_eq!(value["graphs"][1]["id"], "success-payload-scatter-chart");
    }
}
