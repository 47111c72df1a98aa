//! Derived views: pure functions from the current selections to a chart.
//!
//! Neither view can fail. A site that is not in the table, an inverted
//! payload range, or a range outside the observed data all produce an empty
//! chart.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::data::filter::{PayloadRange, SiteSelection, filtered_records, records_at_site};
use crate::data::model::{LaunchTable, Outcome};

// ---------------------------------------------------------------------------
// Site-aggregation view (pie)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSlice {
    pub label: String,
    pub value: u64,
}

/// What the slices of a pie stand for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PieKind {
    /// One slice per launch site (the all-sites view).
    Sites,
    /// One slice per outcome class of a single site.
    Outcomes,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieChart {
    pub title: String,
    pub kind: PieKind,
    pub slices: Vec<PieSlice>,
}

impl PieChart {
    /// Sum of all slice values.
    pub fn total(&self) -> u64 {
        self.slices.iter().map(|s| s.value).sum()
    }
}

#[cfg(test)]
impl PieChart {
    pub(crate) fn value_of(&self, label: &str) -> Option<u64> {
        self.slices.iter().find(|s| s.label == label).map(|s| s.value)
    }
}

/// Success counts by site (`ALL`) or the success/failure split of one site.
pub fn success_pie(table: &LaunchTable, site: &SiteSelection) -> PieChart {
    match site {
        SiteSelection::All => {
            let mut successes: BTreeMap<&str, u64> = BTreeMap::new();
            for rec in table.records() {
                *successes.entry(rec.launch_site.as_str()).or_default() +=
                    u64::from(rec.outcome.class());
            }
            PieChart {
                title: "Total Successful Launches by Site".to_string(),
                kind: PieKind::Sites,
                slices: successes
                    .into_iter()
                    .map(|(site, value)| PieSlice {
                        label: site.to_string(),
                        value,
                    })
                    .collect(),
            }
        }
        SiteSelection::Site(name) => {
            let mut counts: BTreeMap<Outcome, u64> = BTreeMap::new();
            for rec in records_at_site(table, site) {
                *counts.entry(rec.outcome).or_default() += 1;
            }
            let mut counts: Vec<(Outcome, u64)> = counts.into_iter().collect();
            // Largest slice first; ties put Success ahead of Failure.
            counts.sort_by(|a, b| b.1.cmp(&a.1).then(b.0.cmp(&a.0)));
            PieChart {
                title: format!("Total Success Launches for site {name}"),
                kind: PieKind::Outcomes,
                slices: counts
                    .into_iter()
                    .map(|(outcome, value)| PieSlice {
                        label: outcome.to_string(),
                        value,
                    })
                    .collect(),
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Payload/outcome correlation view (scatter)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub payload_mass_kg: f64,
    pub class: u8,
    /// Hover text; only filled in for the all-sites view.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub launch_site: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booster_version: Option<String>,
}

/// All points sharing one booster version category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterSeries {
    pub booster_category: String,
    pub points: Vec<ScatterPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterChart {
    pub title: String,
    pub series: Vec<ScatterSeries>,
}

impl ScatterChart {
    /// Total number of plotted points across all series.
    pub fn point_count(&self) -> usize {
        self.series.iter().map(|s| s.points.len()).sum()
    }
}

/// Payload mass against outcome class, coloured by booster category.
pub fn payload_scatter(
    table: &LaunchTable,
    site: &SiteSelection,
    range: PayloadRange,
) -> ScatterChart {
    let title = match site {
        SiteSelection::All => "Correlation between Payload and Success for All Sites".to_string(),
        SiteSelection::Site(name) => {
            format!("Correlation between Payload and Success for site {name}")
        }
    };
    let show_site = matches!(site, SiteSelection::All);

    let mut series: Vec<ScatterSeries> = Vec::new();
    for rec in filtered_records(table, site, range) {
        let point = ScatterPoint {
            payload_mass_kg: rec.payload_mass_kg,
            class: rec.outcome.class(),
            launch_site: show_site.then(|| rec.launch_site.clone()),
            booster_version: rec.booster_version.clone(),
        };
        match series
            .iter_mut()
            .find(|s| s.booster_category == rec.booster_category)
        {
            Some(existing) => existing.points.push(point),
            None => series.push(ScatterSeries {
                booster_category: rec.booster_category.clone(),
                points: vec![point],
            }),
        }
    }

    let chart = ScatterChart { title, series };
    log::debug!("scatter for {site}: {} points", chart.point_count());
    chart
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::LaunchTable;
    use crate::data::model::tests::{record, two_site_table};

    #[test]
    fn all_sites_pie_sums_successes() {
        let table = two_site_table();
        let pie = success_pie(&table, &SiteSelection::All);
        assert_eq!(pie.title, "Total Successful Launches by Site");
        assert_eq!(pie.kind, PieKind::Sites);
        assert_eq!(pie.slices.len(), 2);
        assert_eq!(pie.value_of("A"), Some(2));
        assert_eq!(pie.value_of("B"), Some(1));
    }

    #[test]
    fn single_site_pie_splits_outcomes() {
        let table = two_site_table();
        let pie = success_pie(&table, &SiteSelection::from("A"));
        assert_eq!(pie.title, "Total Success Launches for site A");
        assert_eq!(pie.kind, PieKind::Outcomes);
        assert_eq!(
            pie.slices,
            vec![
                PieSlice { label: "Success".into(), value: 2 },
                PieSlice { label: "Failure".into(), value: 1 },
            ]
        );
    }

    #[test]
    fn per_site_pie_matches_record_counts() {
        let table = two_site_table();
        for site in table.sites() {
            let selection = SiteSelection::from(site.as_str());
            let pie = success_pie(&table, &selection);
            let records: Vec<_> = records_at_site(&table, &selection).collect();
            let mut distinct: Vec<u8> = records.iter().map(|r| r.outcome.class()).collect();
            distinct.sort_unstable();
            distinct.dedup();

            assert_eq!(pie.slices.len(), distinct.len());
            assert_eq!(pie.total(), records.len() as u64);
        }
    }

    #[test]
    fn site_without_successes_still_gets_a_slice() {
        let table = LaunchTable::from_records(vec![
            record("A", 100.0, "FT", 1),
            record("B", 200.0, "FT", 0),
        ])
        .unwrap();
        let pie = success_pie(&table, &SiteSelection::All);
        assert_eq!(pie.value_of("B"), Some(0));

        let pie = success_pie(&table, &SiteSelection::from("B"));
        assert_eq!(pie.slices, vec![PieSlice { label: "Failure".into(), value: 1 }]);
    }

    #[test]
    fn unknown_site_pie_is_empty() {
        let table = two_site_table();
        let pie = success_pie(&table, &SiteSelection::from("nowhere"));
        assert!(pie.slices.is_empty());
        assert_eq!(pie.title, "Total Success Launches for site nowhere");
    }

    #[test]
    fn full_range_scatter_contains_every_record() {
        let table = two_site_table();
        let chart = payload_scatter(&table, &SiteSelection::All, PayloadRange::full(&table));
        assert_eq!(chart.title, "Correlation between Payload and Success for All Sites");
        assert_eq!(chart.point_count(), table.len());
    }

    #[test]
    fn inverted_range_scatter_is_empty() {
        let table = two_site_table();
        let chart = payload_scatter(&table, &SiteSelection::All, PayloadRange::new(9000.0, 10.0));
        assert_eq!(chart.point_count(), 0);
        assert!(chart.series.is_empty());
    }

    #[test]
    fn zero_range_without_zero_payloads_is_empty() {
        let table = two_site_table();
        let chart = payload_scatter(&table, &SiteSelection::All, PayloadRange::new(0.0, 0.0));
        assert_eq!(chart.point_count(), 0);
    }

    #[test]
    fn scatter_series_follow_first_appearance() {
        let table = two_site_table();
        let chart = payload_scatter(&table, &SiteSelection::All, PayloadRange::new(0.0, 10_000.0));
        let order: Vec<&str> = chart.series.iter().map(|s| s.booster_category.as_str()).collect();
        assert_eq!(order, ["v1.0", "FT", "B4"]);
        assert_eq!(chart.series[0].points.len(), 2);
        assert_eq!(chart.series[0].points[0].launch_site.as_deref(), Some("A"));
    }

    #[test]
    fn single_site_scatter_filters_and_hides_site() {
        let table = two_site_table();
        let chart = payload_scatter(&table, &SiteSelection::from("A"), PayloadRange::new(1000.0, 5000.0));
        assert_eq!(chart.title, "Correlation between Payload and Success for site A");
        assert_eq!(chart.point_count(), 2);
        for series in &chart.series {
            for p in &series.points {
                assert!(p.launch_site.is_none());
                assert!((1000.0..=5000.0).contains(&p.payload_mass_kg));
            }
        }
    }

    #[test]
    fn views_are_idempotent() {
        let table = two_site_table();
        let site = SiteSelection::from("B");
        let range = PayloadRange::new(2000.0, 9600.0);
        assert_eq!(success_pie(&table, &site), success_pie(&table, &site));
        assert_eq!(
            payload_scatter(&table, &site, range),
            payload_scatter(&table, &site, range)
        );
    }
}
