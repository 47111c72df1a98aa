use std::sync::Arc;

use eframe::egui;

use crate::data::model::LaunchTable;
use crate::state::DashboardState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct DashApp {
    pub state: DashboardState,
}

impl DashApp {
    pub fn new(table: Arc<LaunchTable>) -> Self {
        Self {
            state: DashboardState::new(table),
        }
    }
}

impl eframe::App for DashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: title bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: site + payload controls ----
        egui::SidePanel::left("filter_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: pie above scatter ----
        egui::CentralPanel::default().show(ctx, |ui| {
            let half = (ui.available_height() / 2.0 - 8.0).max(120.0);
            ui.allocate_ui(egui::vec2(ui.available_width(), half), |ui| {
                plot::success_pie(ui, &self.state);
            });
            ui.separator();
            plot::payload_scatter(ui, &self.state);
        });
    }
}
