use std::collections::BTreeSet;
use std::sync::Arc;

use serde::Serialize;

use crate::color::ColorMap;
use crate::data::filter::{ALL_SITES, PayloadRange, SiteSelection};
use crate::data::model::LaunchTable;
use crate::views::{PieChart, ScatterChart, payload_scatter, success_pie};

// ---------------------------------------------------------------------------
// Dropdown options
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SiteOption {
    pub label: String,
    pub value: String,
}

/// "All Sites" followed by every observed site, in file order.
pub fn site_options(table: &LaunchTable) -> Vec<SiteOption> {
    std::iter::once(SiteOption {
        label: "All Sites".to_string(),
        value: ALL_SITES.to_string(),
    })
    .chain(table.sites().iter().map(|site| SiteOption {
        label: site.clone(),
        value: site.clone(),
    }))
    .collect()
}

// ---------------------------------------------------------------------------
// Dashboard state
// ---------------------------------------------------------------------------

/// The full view state, independent of rendering.
pub struct DashboardState {
    /// Loaded once at startup, never mutated.
    pub table: Arc<LaunchTable>,

    /// Current dropdown value.
    pub site: SiteSelection,

    /// Current payload slider value.
    pub payload_range: PayloadRange,

    /// Colours per launch site (all-sites pie).
    pub site_colors: ColorMap,

    /// Colours per booster version category (scatter).
    pub booster_colors: ColorMap,

    /// Charts for the current selections (cached).
    pub pie: PieChart,
    pub scatter: ScatterChart,
}

impl DashboardState {
    /// Initial state: all sites, full observed payload range.
    pub fn new(table: Arc<LaunchTable>) -> Self {
        let site = SiteSelection::All;
        let payload_range = PayloadRange::full(&table);
        let sites: BTreeSet<String> = table.sites().iter().cloned().collect();

        Self {
            site_colors: ColorMap::new(&sites),
            booster_colors: ColorMap::new(table.booster_categories()),
            pie: success_pie(&table, &site),
            scatter: payload_scatter(&table, &site, payload_range),
            table,
            site,
            payload_range,
        }
    }

    /// Dropdown changed: both charts depend on the site.
    pub fn set_site(&mut self, site: SiteSelection) {
        if site == self.site {
            return;
        }
        log::debug!("site selection changed to {site}");
        self.site = site;
        self.pie = success_pie(&self.table, &self.site);
        self.scatter = payload_scatter(&self.table, &self.site, self.payload_range);
    }

    /// Slider changed: only the scatter chart depends on the range.
    pub fn set_payload_range(&mut self, range: PayloadRange) {
        if range == self.payload_range {
            return;
        }
        log::debug!("payload range changed to {}..={}", range.low, range.high);
        self.payload_range = range;
        self.scatter = payload_scatter(&self.table, &self.site, self.payload_range);
    }

    /// Back to the initial selections.
    pub fn reset(&mut self) {
        self.set_site(SiteSelection::All);
        self.set_payload_range(PayloadRange::full(&self.table));
    }

    pub fn site_options(&self) -> Vec<SiteOption> {
        site_options(&self.table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::tests::two_site_table;

    fn state() -> DashboardState {
        DashboardState::new(Arc::new(two_site_table()))
    }

    #[test]
    fn initial_state_shows_everything() {
        let st = state();
        assert_eq!(st.site, SiteSelection::All);
        assert_eq!(st.payload_range, PayloadRange::new(500.0, 9600.0));
        assert_eq!(st.scatter.point_count(), 6);
        assert_eq!(st.pie.title, "Total Successful Launches by Site");
    }

    #[test]
    fn options_start_with_all_sites() {
        let opts = state().site_options();
        assert_eq!(opts.len(), 3);
        assert_eq!(opts[0], SiteOption { label: "All Sites".into(), value: "ALL".into() });
        assert_eq!(opts[1].value, "A");
        assert_eq!(opts[2].label, "B");
    }

    #[test]
    fn site_change_recomputes_both_charts() {
        let mut st = state();
        st.set_site(SiteSelection::from("A"));
        assert_eq!(st.pie.title, "Total Success Launches for site A");
        assert_eq!(st.pie.value_of("Success"), Some(2));
        assert_eq!(st.pie.value_of("Failure"), Some(1));
        assert_eq!(st.scatter.point_count(), 3);
    }

    #[test]
    fn range_change_leaves_pie_alone() {
        let mut st = state();
        let pie_before = st.pie.clone();
        st.set_payload_range(PayloadRange::new(0.0, 0.0));
        assert_eq!(st.scatter.point_count(), 0);
        assert_eq!(st.pie, pie_before);
    }

    #[test]
    fn reset_restores_defaults() {
        let mut st = state();
        st.set_site(SiteSelection::from("B"));
        st.set_payload_range(PayloadRange::new(3000.0, 1000.0));
        st.reset();
        assert_eq!(st.site, SiteSelection::All);
        assert_eq!(st.scatter.point_count(), 6);
    }
}
