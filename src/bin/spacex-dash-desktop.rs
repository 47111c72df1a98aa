use std::sync::Arc;

use eframe::egui;

use spacex_dash::app::DashApp;
use spacex_dash::config::DashConfig;
use spacex_dash::data::loader::load_file;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = DashConfig::default();
    let table = Arc::new(load_file(&config.data_path)?);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 900.0])
            .with_min_inner_size([700.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "SpaceX Launch Records Dashboard",
        options,
        Box::new(move |_cc| Ok(Box::new(DashApp::new(table)))),
    )
    .map_err(|e| anyhow::anyhow!("running native window: {e}"))
}
