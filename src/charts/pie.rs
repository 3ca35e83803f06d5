//! Success pie chart
//!
//! - All sites: successful launches counted per site.
//! - One site: launches of that site counted per outcome.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::dataset::{LaunchDataset, Outcome, SiteSelection};

/// Title used when every site is selected
pub const ALL_SITES_PIE_TITLE: &str = "All Sites Successful Launches Distribution";

/// One pie slice
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PieSlice {
    pub label: String,
    pub value: u64,
}

/// Pie chart descriptor
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PieChart {
    pub title: String,
    pub slices: Vec<PieSlice>,
}

impl PieChart {
    /// Sum of slice magnitudes
    pub fn total(&self) -> u64 {
        self.slices.iter().map(|s| s.value).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }
}

/// Build the success pie for a site selection
pub fn success_pie(dataset: &LaunchDataset, selection: &SiteSelection) -> PieChart {
    match selection {
        SiteSelection::All => successes_by_site(dataset),
        SiteSelection::Site(site) => outcomes_for_site(dataset, site),
    }
}

fn successes_by_site(dataset: &LaunchDataset) -> PieChart {
    let mut counts: BTreeMap<&str, u64> = BTreeMap::new();
    for record in dataset.records().iter().filter(|r| r.outcome.is_success()) {
        *counts.entry(record.launch_site.as_str()).or_default() += 1;
    }

    PieChart {
        title: ALL_SITES_PIE_TITLE.to_string(),
        slices: counts
            .into_iter()
            .map(|(site, value)| PieSlice {
                label: site.to_string(),
                value,
            })
            .collect(),
    }
}

fn outcomes_for_site(dataset: &LaunchDataset, site: &str) -> PieChart {
    let (mut success, mut failure) = (0u64, 0u64);
    for record in dataset.records().iter().filter(|r| r.launch_site == site) {
        match record.outcome {
            Outcome::Success => success += 1,
            Outcome::Failure => failure += 1,
        }
    }

    let slices = [(Outcome::Success, success), (Outcome::Failure, failure)]
        .into_iter()
        .filter(|(_, count)| *count > 0)
        .map(|(outcome, value)| PieSlice {
            label: outcome.label().to_string(),
            value,
        })
        .collect();

    PieChart {
        title: format!("Successful vs. Failed Launches for {}", site),
        slices,
    }
}
