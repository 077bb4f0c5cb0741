use std::collections::HashSet;
use std::fmt;

use super::error::DataLoadError;

/// Sentinel dropdown value meaning "every launch site".
pub const ALL_SITES: &str = "ALL";

// ---------------------------------------------------------------------------
// Outcome – the binary `class` column
// ---------------------------------------------------------------------------

/// Launch outcome as stored in the `class` column (1 = success, 0 = failure).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Outcome {
    Failure,
    Success,
}

impl Outcome {
    /// Interpret a raw class value; anything other than 0 or 1 is rejected.
    pub fn from_class(class: i64) -> Option<Self> {
        match class {
            0 => Some(Outcome::Failure),
            1 => Some(Outcome::Success),
            _ => None,
        }
    }

    pub fn class(self) -> u8 {
        match self {
            Outcome::Failure => 0,
            Outcome::Success => 1,
        }
    }

    pub fn is_success(self) -> bool {
        self == Outcome::Success
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Failure => write!(f, "Failure (0)"),
            Outcome::Success => write!(f, "Success (1)"),
        }
    }
}

// ---------------------------------------------------------------------------
// LaunchRecord – one row of the dataset
// ---------------------------------------------------------------------------

/// A single launch (one row of the source table).
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchRecord {
    pub launch_site: String,
    /// Always non-negative; the loader rejects anything else.
    pub payload_mass_kg: f64,
    pub booster_version_category: String,
    pub outcome: Outcome,
}

// ---------------------------------------------------------------------------
// Selection values
// ---------------------------------------------------------------------------

/// One entry of the site dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SiteOption {
    All,
    Site(String),
}

impl SiteOption {
    /// The value carried by the control.
    pub fn value(&self) -> &str {
        match self {
            SiteOption::All => ALL_SITES,
            SiteOption::Site(name) => name,
        }
    }

    /// The text shown to the user.
    pub fn label(&self) -> &str {
        match self {
            SiteOption::All => "All Sites",
            SiteOption::Site(name) => name,
        }
    }

    /// Whether a record from `site` passes this option.
    pub fn matches(&self, site: &str) -> bool {
        match self {
            SiteOption::All => true,
            SiteOption::Site(name) => name == site,
        }
    }
}

impl fmt::Display for SiteOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

/// Inclusive payload-mass interval selected on the range slider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayloadRange {
    low: f64,
    high: f64,
}

impl PayloadRange {
    /// Panics if `low > high` (or either bound is NaN): the slider never
    /// produces such a range, so receiving one is a caller bug.
    pub fn new(low: f64, high: f64) -> Self {
        assert!(low <= high, "payload range is reversed: [{low}, {high}]");
        Self { low, high }
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn high(&self) -> f64 {
        self.high
    }

    pub fn contains(&self, mass: f64) -> bool {
        self.low <= mass && mass <= self.high
    }
}

/// The current control values, owned by the UI host.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub site: SiteOption,
    pub payload: PayloadRange,
}

// ---------------------------------------------------------------------------
// DatasetStore – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The loaded launch records plus the facts derived from them once at load.
///
/// Built once and never mutated; everything downstream borrows it.
#[derive(Debug, Clone)]
pub struct DatasetStore {
    records: Vec<LaunchRecord>,
    sites: Vec<SiteOption>,
    booster_categories: Vec<String>,
    min_payload: f64,
    max_payload: f64,
}

impl DatasetStore {
    /// Derive site options, booster categories and the payload span.
    pub fn from_records(records: Vec<LaunchRecord>) -> Result<Self, DataLoadError> {
        if records.is_empty() {
            return Err(DataLoadError::Empty);
        }

        let mut sites = vec![SiteOption::All];
        let mut seen_sites: HashSet<&str> = HashSet::new();
        let mut booster_categories = Vec::new();
        let mut seen_categories: HashSet<&str> = HashSet::new();
        let mut min_payload = f64::INFINITY;
        let mut max_payload = f64::NEG_INFINITY;

        for rec in &records {
            if seen_sites.insert(&rec.launch_site) {
                sites.push(SiteOption::Site(rec.launch_site.clone()));
            }
            if seen_categories.insert(&rec.booster_version_category) {
                booster_categories.push(rec.booster_version_category.clone());
            }
            min_payload = min_payload.min(rec.payload_mass_kg);
            max_payload = max_payload.max(rec.payload_mass_kg);
        }

        Ok(DatasetStore {
            records,
            sites,
            booster_categories,
            min_payload,
            max_payload,
        })
    }

    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    /// `All` first, then each distinct launch site in first-seen order.
    pub fn sites(&self) -> &[SiteOption] {
        &self.sites
    }

    /// Distinct booster version categories in first-seen order.
    pub fn booster_categories(&self) -> &[String] {
        &self.booster_categories
    }

    pub fn min_payload(&self) -> f64 {
        self.min_payload
    }

    pub fn max_payload(&self) -> f64 {
        self.max_payload
    }

    /// Number of launch records; never zero.
    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    /// Dropdown on "ALL", slider spanning the full payload range of the data.
    pub fn initial_selection(&self) -> Selection {
        Selection {
            site: SiteOption::All,
            payload: PayloadRange::new(self.min_payload, self.max_payload),
        }
    }
}
