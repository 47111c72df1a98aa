use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Column names as they appear in the source dataset
// ---------------------------------------------------------------------------

pub const COL_FLIGHT_NUMBER: &str = "Flight Number";
pub const COL_LAUNCH_SITE: &str = "Launch Site";
pub const COL_CLASS: &str = "class";
pub const COL_PAYLOAD_MASS: &str = "Payload Mass (kg)";
pub const COL_BOOSTER_VERSION: &str = "Booster Version";
pub const COL_BOOSTER_CATEGORY: &str = "Booster Version Category";

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// A row or table that cannot be turned into launch records.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum RecordError {
    #[error("outcome class must be 0 or 1, got {0}")]
    InvalidClass(i64),
    #[error("row {row}: payload mass must be a finite non-negative number, got {value}")]
    InvalidPayload { row: usize, value: f64 },
    #[error("dataset contains no launch records")]
    Empty,
}

// ---------------------------------------------------------------------------
// Outcome – the binary `class` column
// ---------------------------------------------------------------------------

/// Launch outcome, encoded in the dataset as `1` (success) / `0` (failure).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum Outcome {
    Failure,
    Success,
}

impl Outcome {
    /// Numeric class value as stored in the dataset.
    pub fn class(self) -> u8 {
        match self {
            Outcome::Failure => 0,
            Outcome::Success => 1,
        }
    }
}

impl TryFrom<i64> for Outcome {
    type Error = RecordError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Outcome::Failure),
            1 => Ok(Outcome::Success),
            other => Err(RecordError::InvalidClass(other)),
        }
    }
}

impl From<Outcome> for i64 {
    fn from(outcome: Outcome) -> Self {
        i64::from(outcome.class())
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Success => write!(f, "Success"),
            Outcome::Failure => write!(f, "Failure"),
        }
    }
}

// ---------------------------------------------------------------------------
// LaunchRecord – one row of the dataset
// ---------------------------------------------------------------------------

/// A single launch attempt.
///
/// Field names follow the dataset headers; columns not listed here are
/// ignored when deserializing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchRecord {
    #[serde(rename = "Flight Number", default)]
    pub flight_number: Option<i64>,
    #[serde(rename = "Launch Site")]
    pub launch_site: String,
    #[serde(rename = "class")]
    pub outcome: Outcome,
    #[serde(rename = "Payload Mass (kg)")]
    pub payload_mass_kg: f64,
    #[serde(rename = "Booster Version", default)]
    pub booster_version: Option<String>,
    #[serde(rename = "Booster Version Category")]
    pub booster_category: String,
}

// ---------------------------------------------------------------------------
// LaunchTable – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The immutable launch table with indices computed once at load time.
#[derive(Debug, Clone)]
pub struct LaunchTable {
    records: Vec<LaunchRecord>,
    /// Distinct launch sites in first-appearance order.
    sites: Vec<String>,
    /// Distinct booster version categories, sorted.
    booster_categories: BTreeSet<String>,
    payload_min: f64,
    payload_max: f64,
}

impl LaunchTable {
    /// Validate the records and build the column indices.
    pub fn from_records(records: Vec<LaunchRecord>) -> Result<Self, RecordError> {
        if records.is_empty() {
            return Err(RecordError::Empty);
        }

        let mut sites: Vec<String> = Vec::new();
        let mut booster_categories = BTreeSet::new();
        let mut payload_min = f64::INFINITY;
        let mut payload_max = f64::NEG_INFINITY;

        for (row, rec) in records.iter().enumerate() {
            let mass = rec.payload_mass_kg;
            if !mass.is_finite() || mass < 0.0 {
                return Err(RecordError::InvalidPayload { row, value: mass });
            }
            payload_min = payload_min.min(mass);
            payload_max = payload_max.max(mass);

            if !sites.contains(&rec.launch_site) {
                sites.push(rec.launch_site.clone());
            }
            booster_categories.insert(rec.booster_category.clone());
        }

        Ok(LaunchTable {
            records,
            sites,
            booster_categories,
            payload_min,
            payload_max,
        })
    }

    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    /// Distinct launch sites, in the order they first appear in the file.
    pub fn sites(&self) -> &[String] {
        &self.sites
    }

    pub fn booster_categories(&self) -> &BTreeSet<String> {
        &self.booster_categories
    }

    /// Smallest payload mass in the table (kg).
    pub fn payload_min(&self) -> f64 {
        self.payload_min
    }

    /// Largest payload mass in the table (kg).
    pub fn payload_max(&self) -> f64 {
        self.payload_max
    }

    /// Number of launch records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always false for a successfully built table.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn record(site: &str, mass: f64, booster: &str, class: i64) -> LaunchRecord {
        LaunchRecord {
            flight_number: None,
            launch_site: site.to_string(),
            outcome: Outcome::try_from(class).unwrap(),
            payload_mass_kg: mass,
            booster_version: None,
            booster_category: booster.to_string(),
        }
    }

    /// Sites A and B: A has 2 successes / 1 failure, B has 1 success / 2 failures.
    pub(crate) fn two_site_table() -> LaunchTable {
        LaunchTable::from_records(vec![
            record("A", 500.0, "v1.0", 1),
            record("B", 2500.0, "FT", 0),
            record("A", 1500.0, "FT", 1),
            record("B", 3000.0, "B4", 1),
            record("A", 4000.0, "v1.0", 0),
            record("B", 9600.0, "B4", 0),
        ])
        .unwrap()
    }

    #[test]
    fn outcome_from_class_value() {
        assert_eq!(Outcome::try_from(1).unwrap(), Outcome::Success);
        assert_eq!(Outcome::try_from(0).unwrap(), Outcome::Failure);
        assert_eq!(Outcome::try_from(2), Err(RecordError::InvalidClass(2)));
        assert_eq!(Outcome::Success.class(), 1);
    }

    #[test]
    fn table_indices() {
        let table = two_site_table();
        assert_eq!(table.len(), 6);
        assert_eq!(table.sites(), ["A".to_string(), "B".to_string()]);
        let cats: Vec<&str> = table.booster_categories().iter().map(String::as_str).collect();
        assert_eq!(cats, ["B4", "FT", "v1.0"]);
        assert_eq!(table.payload_min(), 500.0);
        assert_eq!(table.payload_max(), 9600.0);
    }

    #[test]
    fn sites_keep_first_appearance_order() {
        let table = LaunchTable::from_records(vec![
            record("VAFB SLC-4E", 100.0, "FT", 1),
            record("CCAFS LC-40", 200.0, "FT", 1),
            record("VAFB SLC-4E", 300.0, "FT", 0),
        ])
        .unwrap();
        assert_eq!(table.sites(), ["VAFB SLC-4E".to_string(), "CCAFS LC-40".to_string()]);
    }

    #[test]
    fn empty_table_is_rejected() {
        assert_eq!(LaunchTable::from_records(Vec::new()).unwrap_err(), RecordError::Empty);
    }

    #[test]
    fn invalid_payload_is_rejected() {
        let err = LaunchTable::from_records(vec![
            record("A", 100.0, "FT", 1),
            record("A", f64::NAN, "FT", 1),
        ])
        .unwrap_err();
        assert!(matches!(err, RecordError::InvalidPayload { row: 1, .. }));

        let err = LaunchTable::from_records(vec![record("A", -5.0, "FT", 1)]).unwrap_err();
        assert!(matches!(err, RecordError::InvalidPayload { row: 0, .. }));
    }
}
