//! Payload vs. outcome scatter chart
//!
//! One point per launch at (payload mass, outcome flag), grouped into one
//! series per booster version category.

use serde::{Deserialize, Serialize};

use crate::dataset::{LaunchDataset, LaunchRecord, PayloadRange, SiteSelection};

pub const SCATTER_TITLE: &str = "Correlation between Payload and Outcome";
pub const SCATTER_X_TITLE: &str = "Payload Mass (kg)";
pub const SCATTER_Y_TITLE: &str = "Outcome";
pub const SCATTER_LEGEND_TITLE: &str = "Booster Version Category";

/// When the payload range filter applies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RangePolicy {
    /// Only when every site is selected; a single-site view shows all its launches
    #[default]
    AllSitesOnly,
    /// For every selection
    Always,
}

impl RangePolicy {
    fn applies_to(self, selection: &SiteSelection) -> bool {
        match self {
            RangePolicy::AllSitesOnly => matches!(selection, SiteSelection::All),
            RangePolicy::Always => true,
        }
    }
}

/// One plotted launch
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub payload_mass_kg: f64,
    /// 1 = success, 0 = failure
    pub outcome: u8,
    pub launch_site: String,
    pub hover: String,
}

impl ScatterPoint {
    fn from_record(record: &LaunchRecord) -> Self {
        Self {
            payload_mass_kg: record.payload_mass_kg,
            outcome: record.outcome.flag(),
            launch_site: record.launch_site.clone(),
            hover: record.hover_text(),
        }
    }
}

/// Points sharing a booster version category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterSeries {
    pub name: String,
    pub points: Vec<ScatterPoint>,
}

/// Scatter chart descriptor
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterChart {
    pub title: String,
    pub x_title: String,
    pub y_title: String,
    pub legend_title: String,
    pub series: Vec<ScatterSeries>,
}

impl ScatterChart {
    fn new(series: Vec<ScatterSeries>) -> Self {
        Self {
            title: SCATTER_TITLE.to_string(),
            x_title: SCATTER_X_TITLE.to_string(),
            y_title: SCATTER_Y_TITLE.to_string(),
            legend_title: SCATTER_LEGEND_TITLE.to_string(),
            series,
        }
    }

    pub fn points(&self) -> impl Iterator<Item = &ScatterPoint> {
        self.series.iter().flat_map(|s| s.points.iter())
    }

    pub fn point_count(&self) -> usize {
        self.series.iter().map(|s| s.points.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}

/// Build the payload scatter for a site selection and payload range
///
/// Series appear in the order their category first occurs among the
/// surviving records.
pub fn payload_scatter(
    dataset: &LaunchDataset,
    selection: &SiteSelection,
    range: PayloadRange,
    policy: RangePolicy,
) -> ScatterChart {
    let apply_range = policy.applies_to(selection);

    let mut series: Vec<ScatterSeries> = Vec::new();
    for record in dataset.records().iter().filter(|r| {
        selection.matches(&r.launch_site) && (!apply_range || range.contains(r.payload_mass_kg))
    }) {
        let point = ScatterPoint::from_record(record);
        match series
            .iter_mut()
            .find(|s| s.name == record.booster_version_category)
        {
            Some(existing) => existing.points.push(point),
            None => series.push(ScatterSeries {
                name: record.booster_version_category.clone(),
                points: vec![point],
            }),
        }
    }

    ScatterChart::new(series)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{LaunchRecord, Outcome};

    fn dataset() -> LaunchDataset {
        LaunchDataset::new(vec![
            LaunchRecord::new("A", 0.0, Outcome::Failure, "v1.0"),
            LaunchRecord::new("A", 2500.0, Outcome::Success, "FT"),
            LaunchRecord::new("B", 4000.0, Outcome::Success, "v1.0"),
            LaunchRecord::new("B", 6000.0, Outcome::Failure, "B4"),
            LaunchRecord::new("A", 9600.0, Outcome::Success, "B5"),
        ])
        .unwrap()
    }

    #[test]
    fn test_fixed_labels() {
        let chart = payload_scatter(
            &dataset(),
            &SiteSelection::All,
            PayloadRange::new(0.0, 10000.0),
            RangePolicy::default(),
        );
        assert_eq!(chart.title, "Correlation between Payload and Outcome");
        assert_eq!(chart.x_title, "Payload Mass (kg)");
        assert_eq!(chart.y_title, "Outcome");
        assert_eq!(chart.point_count(), 5);
    }

    #[test]
    fn test_all_sites_respects_inclusive_range() {
        let range = PayloadRange::new(2500.0, 6000.0);
        let chart = payload_scatter(&dataset(), &SiteSelection::All, range, RangePolicy::default());

        assert_eq!(chart.point_count(), 3);
        assert!(chart.points().all(|p| range.contains(p.payload_mass_kg)));
    }

    #[test]
    fn test_series_grouped_by_category_in_first_appearance_order() {
        let chart = payload_scatter(
            &dataset(),
            &SiteSelection::All,
            PayloadRange::new(0.0, 10000.0),
            RangePolicy::default(),
        );
        let names: Vec<&str> = chart.series.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["v1.0", "FT", "B4", "B5"]);
        assert_eq!(chart.series[0].points.len(), 2);
    }

    #[test]
    fn test_outcome_flag_on_y_axis() {
        let chart = payload_scatter(
            &dataset(),
            &SiteSelection::All,
            PayloadRange::new(0.0, 0.0),
            RangePolicy::default(),
        );
        let point = chart.points().next().unwrap();
        assert_eq!(point.outcome, 0);
        assert_eq!(point.payload_mass_kg, 0.0);
    }

    #[test]
    fn test_site_view_ignores_range_by_default() {
        let range = PayloadRange::new(2000.0, 3000.0);
        let chart = payload_scatter(&dataset(), &SiteSelection::site("A"), range, RangePolicy::AllSitesOnly);

        assert_eq!(chart.point_count(), 3);
        assert!(chart.points().all(|p| p.launch_site == "A"));
        assert!(chart.points().any(|p| !range.contains(p.payload_mass_kg)));
    }

    #[test]
    fn test_site_view_with_range_policy_always() {
        let range = PayloadRange::new(2000.0, 3000.0);
        let chart = payload_scatter(&dataset(), &SiteSelection::site("A"), range, RangePolicy::Always);

        assert_eq!(chart.point_count(), 1);
        assert!(chart
            .points()
            .all(|p| p.launch_site == "A" && range.contains(p.payload_mass_kg)));
    }

    #[test]
    fn test_inverted_range_is_empty() {
        let chart = payload_scatter(
            &dataset(),
            &SiteSelection::All,
            PayloadRange::new(8000.0, 1000.0),
            RangePolicy::default(),
        );
        assert!(chart.is_empty());
    }

    #[test]
    fn test_unknown_site_is_empty() {
        let chart = payload_scatter(
            &dataset(),
            &SiteSelection::site("Nowhere"),
            PayloadRange::new(0.0, 10000.0),
            RangePolicy::default(),
        );
        assert!(chart.is_empty());
    }

    #[test]
    fn test_idempotent() {
        let data = dataset();
        let range = PayloadRange::new(1000.0, 7000.0);
        assert_eq!(
            payload_scatter(&data, &SiteSelection::All, range, RangePolicy::default()),
            payload_scatter(&data, &SiteSelection::All, range, RangePolicy::default())
        );
    }

    #[test]
    fn test_range_policy_serde() {
        let policy: RangePolicy = serde_json::from_str("\"always\"").unwrap();
        assert_eq!(policy, RangePolicy::Always);
        assert_eq!(
            serde_json::to_string(&RangePolicy::AllSitesOnly).unwrap(),
            "\"all_sites_only\""
        );
    }
}
