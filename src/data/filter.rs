use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::model::{LaunchRecord, LaunchTable};

// ---------------------------------------------------------------------------
// Site selection: "ALL" or a single launch site
// ---------------------------------------------------------------------------

/// Dropdown value meaning "every launch site".
pub const ALL_SITES: &str = "ALL";

/// The launch-site dropdown value.
///
/// A site name that does not exist in the table is still a valid selection;
/// it simply matches no records.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SiteSelection {
    #[default]
    All,
    Site(String),
}

impl SiteSelection {
    /// Whether a record launched from the selected site(s).
    pub fn matches(&self, record: &LaunchRecord) -> bool {
        match self {
            SiteSelection::All => true,
            SiteSelection::Site(site) => record.launch_site == *site,
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
    fn from(selection: SiteSelection) -> Self {
        selection.to_string()
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
        match self {
            SiteSelection::All => write!(f, "{ALL_SITES}"),
            SiteSelection::Site(site) => write!(f, "{site}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Payload range: inclusive [low, high] in kilograms
// ---------------------------------------------------------------------------

/// Inclusive payload-mass window. `low > high` is allowed and matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PayloadRange {
    pub low: f64,
    pub high: f64,
}

impl PayloadRange {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// The observed `[min, max]` of the table, used as the initial slider value.
    pub fn full(table: &LaunchTable) -> Self {
        Self::new(table.payload_min(), table.payload_max())
    }

    pub fn contains(&self, mass_kg: f64) -> bool {
        mass_kg >= self.low && mass_kg <= self.high
    }
}

// ---------------------------------------------------------------------------
// Filtering
// ---------------------------------------------------------------------------

/// Records launched from the selected site(s), in table order.
pub fn records_at_site<'a>(
    table: &'a LaunchTable,
    site: &'a SiteSelection,
) -> impl Iterator<Item = &'a LaunchRecord> + 'a {
    table.records().iter().filter(move |rec| site.matches(rec))
}

/// Records inside the payload range and launched from the selected site(s),
/// in table order.
pub fn filtered_records<'a>(
    table: &'a LaunchTable,
    site: &'a SiteSelection,
    range: PayloadRange,
) -> impl Iterator<Item = &'a LaunchRecord> + 'a {
    records_at_site(table, site).filter(move |rec| range.contains(rec.payload_mass_kg))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::tests::two_site_table;

    #[test]
    fn all_is_parsed_from_dropdown_value() {
        assert_eq!(SiteSelection::from("ALL"), SiteSelection::All);
        assert_eq!(
            SiteSelection::from("KSC LC-39A"),
            SiteSelection::Site("KSC LC-39A".to_string())
        );
        assert_eq!(SiteSelection::All.to_string(), "ALL");
    }

    #[test]
    fn range_is_inclusive() {
        let range = PayloadRange::new(1000.0, 2000.0);
        assert!(range.contains(1000.0));
        assert!(range.contains(2000.0));
        assert!(!range.contains(999.9));
        assert!(!range.contains(2000.1));
    }

    #[test]
    fn inverted_range_matches_nothing() {
        let table = two_site_table();
        let site = SiteSelection::All;
        assert_eq!(filtered_records(&table, &site, PayloadRange::new(5000.0, 100.0)).count(), 0);
    }

    #[test]
    fn site_and_range_combine() {
        let table = two_site_table();
        let site = SiteSelection::from("B");
        let masses: Vec<f64> = filtered_records(&table, &site, PayloadRange::new(0.0, 5000.0))
            .map(|r| r.payload_mass_kg)
            .collect();
        assert_eq!(masses, [2500.0, 3000.0]);
    }

    #[test]
    fn unknown_site_matches_nothing() {
        let table = two_site_table();
        let site = SiteSelection::from("Boca Chica");
        assert_eq!(records_at_site(&table, &site).count(), 0);
    }
}
