//! Figure rendering
//!
//! Converts chart descriptors into plotly.js figure JSON
//! (`{"data": [...traces], "layout": {...}}`).

use serde::Serialize;
use serde_json::{json, Value};

use super::pie::PieChart;
use super::scatter::ScatterChart;

/// Trace colors, cycled per slice / series
pub const SERIES_COLORS: [&str; 6] = [
    "#FF9800", // Orange (primary)
    "#4CAF50", // Green
    "#2196F3", // Blue
    "#9C27B0", // Purple
    "#F44336", // Red
    "#00BCD4", // Cyan
];

fn color(idx: usize) -> &'static str {
    SERIES_COLORS[idx % SERIES_COLORS.len()]
}

/// Any chart the dashboard can display
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Figure {
    Pie(PieChart),
    Scatter(ScatterChart),
}

impl Figure {
    pub fn title(&self) -> &str {
        match self {
            Figure::Pie(pie) => &pie.title,
            Figure::Scatter(scatter) => &scatter.title,
        }
    }

    /// Render as a plotly.js figure
    pub fn to_plotly(&self) -> Value {
        match self {
            Figure::Pie(pie) => pie_figure(pie),
            Figure::Scatter(scatter) => scatter_figure(scatter),
        }
    }
}

impl From<PieChart> for Figure {
    fn from(pie: PieChart) -> Self {
        Figure::Pie(pie)
    }
}

impl From<ScatterChart> for Figure {
    fn from(scatter: ScatterChart) -> Self {
        Figure::Scatter(scatter)
    }
}

fn pie_figure(pie: &PieChart) -> Value {
    let labels: Vec<&str> = pie.slices.iter().map(|s| s.label.as_str()).collect();
    let values: Vec<u64> = pie.slices.iter().map(|s| s.value).collect();
    let colors: Vec<&str> = (0..pie.slices.len()).map(color).collect();

    json!({
        "data": [{
            "type": "pie",
            "labels": labels,
            "values": values,
            "marker": { "colors": colors },
        }],
        "layout": {
            "title": { "text": pie.title },
        },
    })
}

fn scatter_figure(scatter: &ScatterChart) -> Value {
    let traces: Vec<Value> = scatter
        .series
        .iter()
        .enumerate()
        .map(|(idx, series)| {
            let x: Vec<f64> = series.points.iter().map(|p| p.payload_mass_kg).collect();
            let y: Vec<u8> = series.points.iter().map(|p| p.outcome).collect();
            let text: Vec<&str> = series.points.iter().map(|p| p.hover.as_str()).collect();

            json!({
                "type": "scatter",
                "mode": "markers",
                "name": series.name,
                "legendgroup": series.name,
                "x": x,
                "y": y,
                "text": text,
                "marker": { "color": color(idx) },
            })
        })
        .collect();

    json!({
        "data": traces,
        "layout": {
            "title": { "text": scatter.title },
            "xaxis": { "title": { "text": scatter.x_title } },
            "yaxis": { "title": { "text": scatter.y_title } },
            "legend": { "title": { "text": scatter.legend_title } },
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::pie::PieSlice;
    use crate::charts::scatter::{payload_scatter, RangePolicy};
    use crate::dataset::{LaunchDataset, LaunchRecord, Outcome, PayloadRange, SiteSelection};

    #[test]
    fn test_pie_figure_shape() {
        let figure = Figure::from(PieChart {
            title: "Pie".to_string(),
            slices: vec![
                PieSlice {
                    label: "A".to_string(),
                    value: 3,
                },
                PieSlice {
                    label: "B".to_string(),
                    value: 2,
                },
            ],
        });

        let value = figure.to_plotly();
        assert_eq!(value["data"][0]["type"], "pie");
        assert_eq!(value["data"][0]["labels"], json!(["A", "B"]));
        assert_eq!(value["data"][0]["values"], json!([3, 2]));
        assert_eq!(value["layout"]["title"]["text"], "Pie");
    }

    #[test]
    fn test_empty_pie_has_empty_trace() {
        let figure = Figure::from(PieChart {
            title: "Empty".to_string(),
            slices: Vec::new(),
        });
        let value = figure.to_plotly();
        assert_eq!(value["data"][0]["values"], json!([]));
    }

    #[test]
    fn test_scatter_figure_one_trace_per_category() {
        let dataset = LaunchDataset::new(vec![
            LaunchRecord::new("A", 100.0, Outcome::Success, "FT"),
            LaunchRecord::new("A", 200.0, Outcome::Failure, "v1.1"),
            LaunchRecord::new("B", 300.0, Outcome::Success, "FT"),
        ])
        .unwrap();
        let chart = payload_scatter(
            &dataset,
            &SiteSelection::All,
            PayloadRange::new(0.0, 1000.0),
            RangePolicy::default(),
        );

        let value = Figure::from(chart).to_plotly();
        let traces = value["data"].as_array().unwrap();
        assert_eq!(traces.len(), 2);
        assert_eq!(traces[0]["name"], "FT");
        assert_eq!(traces[0]["x"], json!([100.0, 300.0]));
        assert_eq!(traces[0]["y"], json!([1, 1]));
        assert_eq!(traces[0]["mode"], "markers");
        assert_eq!(value["layout"]["xaxis"]["title"]["text"], "Payload Mass (kg)");
        assert_eq!(value["layout"]["yaxis"]["title"]["text"], "Outcome");
    }
}
