//! Core data types for launch records
//!
//! - `LaunchRecord`: one launch attempt
//! - `Outcome`: binary success/failure flag
//! - `SiteSelection`: value of the site dropdown
//! - `PayloadRange`: inclusive payload mass interval
//! - `LaunchDataset`: the immutable record set with its derived values

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use super::error::{DatasetError, DatasetResult};

/// Dropdown value meaning "every launch site"
pub const ALL_SITES: &str = "ALL";

/// Launch outcome as recorded in the `class` column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Failure,
    Success,
}

impl Outcome {
    /// Numeric flag used on the scatter y-axis (1 = success)
    pub fn flag(self) -> u8 {
        match self {
            Outcome::Failure => 0,
            Outcome::Success => 1,
        }
    }

    pub fn is_success(self) -> bool {
        self == Outcome::Success
    }

    /// Slice label used by the per-site pie chart
    pub fn label(self) -> &'static str {
        match self {
            Outcome::Failure => "Failure",
            Outcome::Success => "Success",
        }
    }

    /// Parse a `class` cell. Accepts `0`/`1` in integer or float form.
    pub fn from_class(raw: &str) -> Option<Self> {
        let value: f64 = raw.trim().parse().ok()?;
        if value == 1.0 {
            Some(Outcome::Success)
        } else if value == 0.0 {
            Some(Outcome::Failure)
        } else {
            None
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single launch attempt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchRecord {
    /// Launch site identifier
    pub launch_site: String,
    /// Payload mass in kilograms
    pub payload_mass_kg: f64,
    /// Success or failure
    pub outcome: Outcome,
    /// Booster version category (used to colour scatter points)
    pub booster_version_category: String,
    /// Flight number, when the file carries one
    #[serde(default)]
    pub flight_number: Option<u32>,
    /// Full booster version, when the file carries one
    #[serde(default)]
    pub booster_version: Option<String>,
}

impl LaunchRecord {
    pub fn new(
        launch_site: impl Into<String>,
        payload_mass_kg: f64,
        outcome: Outcome,
        booster_version_category: impl Into<String>,
    ) -> Self {
        Self {
            launch_site: launch_site.into(),
            payload_mass_kg,
            outcome,
            booster_version_category: booster_version_category.into(),
            flight_number: None,
            booster_version: None,
        }
    }

    /// Builder method: set flight number
    pub fn flight_number(mut self, number: u32) -> Self {
        self.flight_number = Some(number);
        self
    }

    /// Builder method: set booster version
    pub fn booster_version(mut self, version: impl Into<String>) -> Self {
        self.booster_version = Some(version.into());
        self
    }

    /// Hover text shown next to a scatter point
    pub fn hover_text(&self) -> String {
        match (&self.flight_number, &self.booster_version) {
            (Some(n), Some(v)) => format!("Flight {} ({}) - {}", n, v, self.launch_site),
            (Some(n), None) => format!("Flight {} - {}", n, self.launch_site),
            (None, Some(v)) => format!("{} - {}", v, self.launch_site),
            (None, None) => self.launch_site.clone(),
        }
    }
}

/// Value of the site selector
///
/// Anything other than the `ALL` sentinel names a specific site. Site names are
/// not validated; an unknown name simply matches no records.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SiteSelection {
    #[default]
    All,
    Site(String),
}

impl SiteSelection {
    pub fn site(name: impl Into<String>) -> Self {
        SiteSelection::from(name.into())
    }

    /// Whether a record launched from a site passes this selection
    pub fn matches(&self, launch_site: &str) -> bool {
        match self {
            SiteSelection::All => true,
            SiteSelection::Site(name) => name == launch_site,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            SiteSelection::All => ALL_SITES,
            SiteSelection::Site(name) => name,
        }
    }
}

impl From<String> for SiteSelection {
    fn from(value: String) -> Self {
        if value == ALL_SITES {
            SiteSelection::All
        } else {
            SiteSelection::Site(value)
        }
    }
}

impl From<&str> for SiteSelection {
    fn from(value: &str) -> Self {
        SiteSelection::from(value.to_string())
    }
}

impl From<SiteSelection> for String {
    fn from(value: SiteSelection) -> Self {
        match value {
            SiteSelection::All => ALL_SITES.to_string(),
            SiteSelection::Site(name) => name,
        }
    }
}

impl FromStr for SiteSelection {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(SiteSelection::from(s))
    }
}

impl fmt::Display for SiteSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inclusive payload mass interval, serialized as `[low, high]`
///
/// An inverted interval (`low > high`) contains nothing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct PayloadRange {
    pub low: f64,
    pub high: f64,
}

impl PayloadRange {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    pub fn contains(&self, payload_mass_kg: f64) -> bool {
        self.low <= payload_mass_kg && payload_mass_kg <= self.high
    }

    pub fn is_inverted(&self) -> bool {
        self.low > self.high
    }

    /// Smallest range covering both `self` and `other`
    pub fn union(&self, other: &PayloadRange) -> PayloadRange {
        PayloadRange::new(self.low.min(other.low), self.high.max(other.high))
    }
}

impl From<[f64; 2]> for PayloadRange {
    fn from(value: [f64; 2]) -> Self {
        PayloadRange::new(value[0], value[1])
    }
}

impl From<PayloadRange> for [f64; 2] {
    fn from(value: PayloadRange) -> Self {
        [value.low, value.high]
    }
}

impl fmt::Display for PayloadRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.low, self.high)
    }
}

/// The immutable set of launch records loaded at startup
///
/// Derived values (distinct sites, payload bounds) are computed once here.
#[derive(Debug, Clone)]
pub struct LaunchDataset {
    records: Vec<LaunchRecord>,
    sites: Vec<String>,
    payload_bounds: PayloadRange,
}

impl LaunchDataset {
    /// Build a dataset from records. Fails if `records` is empty.
    pub fn new(records: Vec<LaunchRecord>) -> DatasetResult<Self> {
        if records.is_empty() {
            return Err(DatasetError::Empty);
        }

        let mut seen = HashSet::new();
        let sites: Vec<String> = records
            .iter()
            .filter(|r| seen.insert(r.launch_site.as_str()))
            .map(|r| r.launch_site.clone())
            .collect();

        let min = records
            .iter()
            .map(|r| r.payload_mass_kg)
            .fold(f64::INFINITY, f64::min);
        let max = records
            .iter()
            .map(|r| r.payload_mass_kg)
            .fold(f64::NEG_INFINITY, f64::max);

        Ok(Self {
            records,
            sites,
            payload_bounds: PayloadRange::new(min, max),
        })
    }

    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    /// Distinct launch sites in order of first appearance
    pub fn sites(&self) -> &[String] {
        &self.sites
    }

    /// Observed minimum and maximum payload mass
    pub fn payload_bounds(&self) -> PayloadRange {
        self.payload_bounds
    }

    pub fn contains_site(&self, site: &str) -> bool {
        self.sites.iter().any(|s| s == site)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn success_count(&self) -> usize {
        self.records.iter().filter(|r| r.outcome.is_success()).count()
    }
}
