//! JSON API handlers.
//!
//! Handlers never fail on filter values: unknown sites and empty ranges
//! come back as empty figures. Only malformed query strings are rejected,
//! by the `Query` extractor.

use axum::Json;
use axum::extract::{Query, State};
use serde::{Deserialize, Serialize};

use super::ServerState;
use crate::config::SliderConfig;
use crate::data::filter::{PayloadRange, SiteSelection};
use crate::figure::Figure;
use crate::state::{SiteOption, site_options};
use crate::views::{payload_scatter, success_pie};

#[derive(Debug, Serialize)]
pub struct OptionsResponse {
    pub sites: Vec<SiteOption>,
    pub slider: SliderConfig,
    pub marks: Vec<(f64, String)>,
    /// Initial slider value: observed payload min/max.
    pub default_range: PayloadRange,
}

/// GET /api/options
pub async fn options(State(state): State<ServerState>) -> Json<OptionsResponse> {
    Json(OptionsResponse {
        sites: site_options(&state.table),
        slider: state.slider,
        marks: state.slider.marks(),
        default_range: PayloadRange::full(&state.table),
    })
}

#[derive(Debug, Deserialize)]
pub struct PieQuery {
    #[serde(default)]
    pub site: SiteSelection,
}

/// GET /api/pie?site=
pub async fn pie(State(state): State<ServerState>, Query(q): Query<PieQuery>) -> Json<Figure> {
    log::debug!("pie request: site={}", q.site);
    let chart = success_pie(&state.table, &q.site);
    Json(Figure::pie(&chart, &state.site_colors))
}

#[derive(Debug, Deserialize)]
pub struct ScatterQuery {
    #[serde(default)]
    pub site: SiteSelection,
    pub low: Option<f64>,
    pub high: Option<f64>,
}

/// GET /api/scatter?site=&low=&high=
///
/// Missing bounds fall back to the observed payload min/max.
pub async fn scatter(
    State(state): State<ServerState>,
    Query(q): Query<ScatterQuery>,
) -> Json<Figure> {
    let full = PayloadRange::full(&state.table);
    let range = PayloadRange::new(q.low.unwrap_or(full.low), q.high.unwrap_or(full.high));
    log::debug!("scatter request: site={} range={}..={}", q.site, range.low, range.high);

    let chart = payload_scatter(&state.table, &q.site, range);
    Json(Figure::scatter(&chart, &state.booster_colors))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::data::model::tests::two_site_table;

    fn test_state() -> ServerState {
        ServerState::new(Arc::new(two_site_table()), SliderConfig::default())
    }

    #[tokio::test]
    async fn options_lists_sites_and_default_range() {
        let Json(resp) = options(State(test_state())).await;
        assert_eq!(resp.sites.len(), 3);
        assert_eq!(resp.sites[0].value, "ALL");
        assert_eq!(resp.default_range, PayloadRange::new(500.0, 9600.0));
        assert_eq!(resp.marks.len(), 11);
    }

    #[tokio::test]
    async fn pie_defaults_to_all_sites() {
        let q = PieQuery { site: SiteSelection::default() };
        let Json(fig) = pie(State(test_state()), Query(q)).await;
        assert_eq!(fig.layout.title.text, "Total Successful Launches by Site");
    }

    #[tokio::test]
    async fn scatter_without_bounds_uses_full_range() {
        let q = ScatterQuery { site: SiteSelection::All, low: None, high: None };
        let Json(fig) = scatter(State(test_state()), Query(q)).await;
        assert_eq!(fig.data.len(), 3);
    }

    #[tokio::test]
    async fn scatter_inverted_bounds_is_empty() {
        let q = ScatterQuery {
            site: SiteSelection::All,
            low: Some(8000.0),
            high: Some(2000.0),
        };
        let Json(fig) = scatter(State(test_state()), Query(q)).await;
        assert!(fig.data.is_empty());
    }
}
