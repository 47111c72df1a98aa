//! Dashboard page handler.
//!
//! The page is server-rendered with the dropdown options and slider marks
//! filled in; the charts are fetched from the JSON API and drawn by Plotly.

use askama::Template;
use axum::extract::State;
use axum::response::Html;

use super::ServerState;
use crate::config::SliderConfig;
use crate::data::filter::PayloadRange;
use crate::state::{SiteOption, site_options};

fn render<T: Template>(tmpl: T) -> Html<String> {
    Html(tmpl.render().unwrap_or_else(|e| {
        log::error!("template render failed: {e}");
        format!("<pre>Template error: {e}</pre>")
    }))
}

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    title: &'static str,
    sites: Vec<SiteOption>,
    slider: SliderConfig,
    marks: Vec<(f64, String)>,
    default_range: PayloadRange,
}

/// GET /
pub async fn index(State(state): State<ServerState>) -> Html<String> {
    render(IndexTemplate {
        title: "SpaceX Launch Records Dashboard",
        sites: site_options(&state.table),
        slider: state.slider,
        marks: state.slider.marks(),
        default_range: PayloadRange::full(&state.table),
    })
}
