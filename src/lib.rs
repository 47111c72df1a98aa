//! SpaceX launch records dashboard.
//!
//! A success-by-site pie chart and a payload/outcome scatter plot over a
//! launch table loaded once at startup. The same views back two front ends:
//! an HTTP server (`spacex-dash`) answering with Plotly figures, and a
//! native egui window (`spacex-dash-desktop`).

pub mod app;
pub mod color;
pub mod config;
pub mod data;
pub mod figure;
pub mod server;
pub mod state;
pub mod ui;
pub mod views;
