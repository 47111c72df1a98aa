use std::f64::consts::TAU;

use eframe::egui::{Color32, RichText, Stroke, Ui};
use egui_plot::{Legend, Plot, PlotPoint, PlotPoints, Points, Polygon, Text};

use crate::color::outcome_color;
use crate::data::model::{COL_CLASS, COL_PAYLOAD_MASS};
use crate::state::DashboardState;
use crate::views::PieKind;

/// Arc resolution for a full circle.
const PIE_SEGMENTS: usize = 128;

// ---------------------------------------------------------------------------
// Pie chart (upper half of the central panel)
// ---------------------------------------------------------------------------

/// Closed wedge outline: centre, then the arc from `start` sweeping
/// clockwise by `sweep` radians, on the unit circle.
pub fn wedge_points(start: f64, sweep: f64) -> Vec<[f64; 2]> {
    let steps = ((sweep / TAU) * PIE_SEGMENTS as f64).ceil().max(1.0) as usize;
    let mut pts = Vec::with_capacity(steps + 2);
    pts.push([0.0, 0.0]);
    for i in 0..=steps {
        let angle = start - sweep * (i as f64 / steps as f64);
        pts.push([angle.cos(), angle.sin()]);
    }
    pts
}

/// Render the success pie, starting at twelve o'clock and going clockwise.
pub fn success_pie(ui: &mut Ui, state: &DashboardState) {
    let pie = &state.pie;
    ui.label(RichText::new(&pie.title).strong());

    let total = pie.total();
    if total == 0 {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.label("No launches to show");
        });
        return;
    }

    Plot::new("success_pie")
        .legend(Legend::default())
        .data_aspect(1.0)
        .show_axes(false)
        .show_grid(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .allow_boxed_zoom(false)
        .show_x(false)
        .show_y(false)
        .show(ui, |plot_ui| {
            let mut start = TAU / 4.0;
            for slice in &pie.slices {
                if slice.value == 0 {
                    continue;
                }
                let fraction = slice.value as f64 / total as f64;
                let sweep = fraction * TAU;
                let color = match pie.kind {
                    PieKind::Sites => state.site_colors.color_for(&slice.label),
                    PieKind::Outcomes => outcome_color(&slice.label),
                };

                plot_ui.polygon(
                    Polygon::new(PlotPoints::new(wedge_points(start, sweep)))
                        .fill_color(color)
                        .stroke(Stroke::new(1.0, Color32::WHITE))
                        .name(&slice.label),
                );

                let mid = start - sweep / 2.0;
                plot_ui.text(Text::new(
                    PlotPoint::new(0.65 * mid.cos(), 0.65 * mid.sin()),
                    RichText::new(format!("{:.1}%", fraction * 100.0)).color(Color32::WHITE),
                ));
                start -= sweep;
            }
        });
}

// ---------------------------------------------------------------------------
// Scatter plot (lower half of the central panel)
// ---------------------------------------------------------------------------

/// Render payload mass against class, one point series per booster category.
pub fn payload_scatter(ui: &mut Ui, state: &DashboardState) {
    let chart = &state.scatter;
    ui.label(RichText::new(&chart.title).strong());

    Plot::new("payload_scatter")
        .legend(Legend::default())
        .x_axis_label(COL_PAYLOAD_MASS)
        .y_axis_label(COL_CLASS)
        .include_y(-0.25)
        .include_y(1.25)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for series in &chart.series {
                let points: PlotPoints = series
                    .points
                    .iter()
                    .map(|p| [p.payload_mass_kg, f64::from(p.class)])
                    .collect();

                plot_ui.points(
                    Points::new(points)
                        .name(&series.booster_category)
                        .color(state.booster_colors.color_for(&series.booster_category))
                        .radius(4.0),
                );
            }
        });
}
