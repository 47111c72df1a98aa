//! HTTP surface of the dashboard.
//!
//! Every control change in the browser becomes a GET carrying the current
//! control values; the handler runs the matching view and answers with a
//! Plotly figure.
//!
//! # Routes
//!
//! | Method | Path | Description |
//! |---|---|---|
//! | GET | `/` | Dashboard page |
//! | GET | `/api/options` | Site dropdown options and slider settings |
//! | GET | `/api/pie?site=` | Success pie figure |
//! | GET | `/api/scatter?site=&low=&high=` | Payload/outcome scatter figure |

pub mod handlers;
pub mod pages;

use std::collections::BTreeSet;
use std::sync::Arc;

use axum::Router;
use axum::routing::get;

use crate::color::ColorMap;
use crate::config::SliderConfig;
use crate::data::model::LaunchTable;

/// Shared, read-only state for all handlers.
#[derive(Clone)]
pub struct ServerState {
    pub table: Arc<LaunchTable>,
    pub site_colors: Arc<ColorMap>,
    pub booster_colors: Arc<ColorMap>,
    pub slider: SliderConfig,
}

impl ServerState {
    pub fn new(table: Arc<LaunchTable>, slider: SliderConfig) -> Self {
        let sites: BTreeSet<String> = table.sites().iter().cloned().collect();
        Self {
            site_colors: Arc::new(ColorMap::new(&sites)),
            booster_colors: Arc::new(ColorMap::new(table.booster_categories())),
            table,
            slider,
        }
    }
}

/// Build the complete router (page + JSON API).
pub fn build_router(state: ServerState) -> Router {
    let api_routes = Router::new()
        .route("/options", get(handlers::options))
        .route("/pie", get(handlers::pie))
        .route("/scatter", get(handlers::scatter));

    Router::new()
        .route("/", get(pages::index))
        .nest("/api", api_routes)
        .with_state(state)
}
