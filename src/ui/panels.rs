use eframe::egui::{self, RichText, Ui};

use crate::config::SliderConfig;
use crate::data::filter::{PayloadRange, SiteSelection};
use crate::state::DashboardState;

// ---------------------------------------------------------------------------
// Left side panel – site and payload controls
// ---------------------------------------------------------------------------

/// Render the left control panel.
pub fn side_panel(ui: &mut Ui, state: &mut DashboardState) {
    ui.heading("Filters");
    ui.separator();

    // ---- Site dropdown ----
    ui.strong("Launch site");
    let options = state.site_options();
    let selected_label = options
        .iter()
        .find(|opt| opt.value == state.site.to_string())
        .map(|opt| opt.label.clone())
        .unwrap_or_else(|| state.site.to_string());

    let mut picked: Option<SiteSelection> = None;
    egui::ComboBox::from_id_salt("site-dropdown")
        .selected_text(selected_label)
        .width(ui.available_width())
        .show_ui(ui, |ui: &mut Ui| {
            for opt in &options {
                let is_selected = state.site.to_string() == opt.value;
                if ui.selectable_label(is_selected, &opt.label).clicked() {
                    picked = Some(SiteSelection::from(opt.value.as_str()));
                }
            }
        });
    if let Some(site) = picked {
        state.set_site(site);
    }
    ui.separator();

    // ---- Payload range ----
    ui.strong("Payload range (kg)");
    let slider = SliderConfig::default();
    // Work on copies: the observed min/max need not sit on a step, and only
    // a user edit may replace the current bound.
    let mut low = state.payload_range.low;
    let mut high = state.payload_range.high;
    let low_changed = ui
        .add(
            egui::Slider::new(&mut low, slider.min..=slider.max)
                .step_by(slider.step)
                .clamping(egui::SliderClamping::Never)
                .suffix(" kg")
                .text("From"),
        )
        .changed();
    let high_changed = ui
        .add(
            egui::Slider::new(&mut high, slider.min..=slider.max)
                .step_by(slider.step)
                .clamping(egui::SliderClamping::Never)
                .suffix(" kg")
                .text("To"),
        )
        .changed();

    let mut range = state.payload_range;
    if low_changed {
        range.low = low;
    }
    if high_changed {
        range.high = high;
    }
    state.set_payload_range(range);

    if range.low > range.high {
        ui.label(RichText::new("Lower bound is above upper bound").weak());
    }

    ui.add_space(8.0);
    if ui.button("Reset").clicked() {
        state.reset();
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the title bar with record counts.
pub fn top_bar(ui: &mut Ui, state: &mut DashboardState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.heading("SpaceX Launch Records Dashboard");
        ui.separator();
        ui.label(format!(
            "{} launches, {} in view",
            state.table.len(),
            state.scatter.point_count()
        ));
        ui.separator();
        let full = PayloadRange::full(&state.table);
        ui.label(format!("observed payload {}–{} kg", full.low, full.high));
    });
}
