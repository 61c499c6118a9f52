use eframe::egui;

use crate::config::DashboardConfig;
use crate::state::AppState;
use crate::ui::{map, panels, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct PowerAtlasApp {
    pub state: AppState,
}

impl PowerAtlasApp {
    /// Build the app and load the configured table once.
    pub fn new(config: DashboardConfig) -> Self {
        let data_path = config.data_path.clone();
        let mut state = AppState::new(config);
        state.load_path(&data_path);
        Self { state }
    }
}

impl eframe::App for PowerAtlasApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: year range, selection, legend ----
        egui::SidePanel::left("control_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Bottom panel: detail table ----
        egui::TopBottomPanel::bottom("detail_table")
            .default_height(260.0)
            .resizable(true)
            .show(ctx, |ui| {
                table::detail_table(ui, &self.state);
            });

        // ---- Central panel: map ----
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(&self.state.config.title);
            if let Some(code) = map::choropleth(ui, &self.state) {
                self.state.click_region(code);
            }
        });
    }
}
