mod app;
mod color;
mod config;
mod dashboard;
mod data;
mod geo;
mod state;
mod ui;

use std::path::Path;

use app::PowerAtlasApp;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let config = config::load_or_default(Path::new(config::CONFIG_FILE));
    log::info!("Using {config:?}");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(config.title.clone())
            .with_inner_size(config.window_size)
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    let title = config.title.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(|_cc| Ok(Box::new(PowerAtlasApp::new(config)))),
    )
}
