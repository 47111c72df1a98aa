//! Plotly-compatible chart descriptions.
//!
//! The browser page hands these straight to `Plotly.react(div, data, layout)`.

use serde::Serialize;

use crate::color::{ColorMap, outcome_color, to_hex};
use crate::data::model::{COL_BOOSTER_CATEGORY, COL_CLASS, COL_PAYLOAD_MASS};
use crate::views::{PieChart, PieKind, ScatterChart};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    Pie {
        labels: Vec<String>,
        values: Vec<u64>,
        marker: PieMarker,
    },
    Scatter {
        mode: &'static str,
        name: String,
        x: Vec<f64>,
        y: Vec<u8>,
        text: Vec<String>,
        marker: Marker,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieMarker {
    pub colors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub color: String,
    pub size: u32,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Layout {
    pub title: Title,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<Legend>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Title {
    pub text: String,
}

impl Title {
    fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub title: Title,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub title: Title,
}

impl Figure {
    /// One pie trace. Site slices use `site_colors`; outcome slices use the
    /// fixed success/failure colours.
    pub fn pie(chart: &PieChart, site_colors: &ColorMap) -> Self {
        let colors = chart
            .slices
            .iter()
            .map(|s| match chart.kind {
                PieKind::Sites => site_colors.hex_for(&s.label),
                PieKind::Outcomes => to_hex(outcome_color(&s.label)),
            })
            .collect();

        Figure {
            data: vec![Trace::Pie {
                labels: chart.slices.iter().map(|s| s.label.clone()).collect(),
                values: chart.slices.iter().map(|s| s.value).collect(),
                marker: PieMarker { colors },
            }],
            layout: Layout {
                title: Title::new(&chart.title),
                ..Default::default()
            },
        }
    }

    /// One marker trace per booster category.
    pub fn scatter(chart: &ScatterChart, booster_colors: &ColorMap) -> Self {
        let data = chart
            .series
            .iter()
            .map(|series| Trace::Scatter {
                mode: "markers",
                name: series.booster_category.clone(),
                x: series.points.iter().map(|p| p.payload_mass_kg).collect(),
                y: series.points.iter().map(|p| p.class).collect(),
                text: series
                    .points
                    .iter()
                    .map(|p| {
                        [p.launch_site.as_deref(), p.booster_version.as_deref()]
                            .into_iter()
                            .flatten()
                            .collect::<Vec<_>>()
                            .join("<br>")
                    })
                    .collect(),
                marker: Marker {
                    color: booster_colors.hex_for(&series.booster_category),
                    size: 10,
                },
            })
            .collect();

        Figure {
            data,
            layout: Layout {
                title: Title::new(&chart.title),
                xaxis: Some(Axis {
                    title: Title::new(COL_PAYLOAD_MASS),
                }),
                yaxis: Some(Axis {
                    title: Title::new(COL_CLASS),
                }),
                legend: Some(Legend {
                    title: Title::new(COL_BOOSTER_CATEGORY),
                }),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use serde_json::json;

    use super::*;
    use crate::data::filter::{PayloadRange, SiteSelection};
    use crate::data::model::LaunchTable;
    use crate::data::model::tests::{record, two_site_table};
    use crate::views::{payload_scatter, success_pie};

    fn colors(labels: &[&str]) -> ColorMap {
        let set: BTreeSet<String> = labels.iter().map(|s| s.to_string()).collect();
        ColorMap::new(&set)
    }

    #[test]
    fn pie_figure_shape() {
        let table = two_site_table();
        let pie = success_pie(&table, &SiteSelection::All);
        let fig = Figure::pie(&pie, &colors(&["A", "B"]));
        let value = serde_json::to_value(&fig).unwrap();

        assert_eq!(value["data"][0]["type"], "pie");
        assert_eq!(value["data"][0]["labels"], json!(["A", "B"]));
        assert_eq!(value["data"][0]["values"], json!([2, 1]));
        assert_eq!(value["layout"]["title"]["text"], "Total Successful Launches by Site");
        assert!(value["layout"].get("xaxis").is_none());
    }

    #[test]
    fn site_named_like_an_outcome_keeps_its_site_colour() {
        let table = LaunchTable::from_records(vec![
            record("Success", 100.0, "FT", 1),
            record("Failure", 200.0, "FT", 1),
        ])
        .unwrap();
        let site_colors = colors(&["Failure", "Success"]);
        let pie = success_pie(&table, &SiteSelection::All);
        let fig = Figure::pie(&pie, &site_colors);

        let Trace::Pie { labels, marker, .. } = &fig.data[0] else {
            panic!("expected a pie trace");
        };
        assert_eq!(labels, &["Failure", "Success"]);
        assert_eq!(
            marker.colors,
            vec![site_colors.hex_for("Failure"), site_colors.hex_for("Success")]
        );
        assert_ne!(marker.colors[1], to_hex(outcome_color("Success")));
    }

    #[test]
    fn outcome_pie_uses_outcome_colours() {
        let table = two_site_table();
        let pie = success_pie(&table, &SiteSelection::from("A"));
        let fig = Figure::pie(&pie, &colors(&["A", "B"]));

        let Trace::Pie { marker, .. } = &fig.data[0] else {
            panic!("expected a pie trace");
        };
        assert_eq!(
            marker.colors,
            vec![to_hex(outcome_color("Success")), to_hex(outcome_color("Failure"))]
        );
    }

    #[test]
    fn scatter_figure_has_trace_per_category() {
        let table = two_site_table();
        let chart = payload_scatter(&table, &SiteSelection::All, PayloadRange::full(&table));
        let fig = Figure::scatter(&chart, &colors(&["B4", "FT", "v1.0"]));
        let value = serde_json::to_value(&fig).unwrap();

        let traces = value["data"].as_array().unwrap();
        assert_eq!(traces.len(), 3);
        assert_eq!(traces[0]["type"], "scatter");
        assert_eq!(traces[0]["mode"], "markers");
        assert_eq!(traces[0]["name"], "v1.0");
        assert_eq!(traces[0]["x"], json!([500.0, 4000.0]));
        assert_eq!(traces[0]["y"], json!([1, 0]));
        assert_eq!(traces[0]["text"], json!(["A", "A"]));
        assert_eq!(value["layout"]["xaxis"]["title"]["text"], "Payload Mass (kg)");
        assert_eq!(value["layout"]["legend"]["title"]["text"], "Booster Version Category");
    }

    #[test]
    fn empty_scatter_has_no_traces() {
        let table = two_site_table();
        let chart = payload_scatter(&table, &SiteSelection::All, PayloadRange::new(1.0, 0.0));
        let fig = Figure::scatter(&chart, &colors(&[]));
        assert!(fig.data.is_empty());
        assert_eq!(fig.layout.title.text, chart.title);
    }
}
