use eframe::egui::{self, Align, Color32, Layout, RichText, ScrollArea, Sense, Ui};

use crate::color::ContinuousColorMap;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – year range, selection, legend
// ---------------------------------------------------------------------------

/// Render the left control panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Years");
    ui.separator();

    let (Some(bounds), Some(current)) = (state.year_bounds, state.year_range()) else {
        ui.label(empty_panel_message(state));
        return;
    };

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Two-thumb year range ----
            let mut start = current.start();
            let mut end = current.end();
            let years = bounds.start()..=bounds.end();
            let from = ui.add(egui::Slider::new(&mut start, years.clone()).text("From"));
            let to = ui.add(egui::Slider::new(&mut end, years).text("To"));

            let next = if from.changed() {
                current.with_start(start)
            } else if to.changed() {
                current.with_end(end)
            } else {
                current
            };
            state.set_year_range(next);

            if ui.small_button("Full range").clicked() {
                state.set_year_range(bounds);
            }
            ui.separator();

            // ---- Map selection ----
            ui.strong("Selection");
            let selected = state.selected_state().map(str::to_string);
            match selected {
                Some(code) => {
                    let value = state.selected_value();
                    ui.horizontal(|ui: &mut Ui| {
                        match value {
                            Some(z) => ui.label(format!("{code}  (mean {z:.2})")),
                            None => ui.label(code),
                        };
                        if ui.small_button("Clear selection").clicked() {
                            state.clear_selection();
                        }
                    });
                }
                None => {
                    ui.label("Click a state on the map to list its records.");
                }
            }
            ui.separator();

            // ---- Legend ----
            let Some(figure) = state.map_figure() else {
                return;
            };
            ui.strong(format!("Mean residential price ({})", figure.color_scale.name()));
            match figure.color_map() {
                Some(cm) => color_legend(ui, &cm),
                None => {
                    ui.label("No records in the selected range.");
                }
            }

            if !figure.unplaced.is_empty() {
                ui.add_space(6.0);
                ui.label(
                    RichText::new(format!("Not on map: {}", figure.unplaced.join(", ")))
                        .color(Color32::GRAY),
                );
            }
        });
}

/// Why the year controls are not shown.
fn empty_panel_message(state: &AppState) -> &'static str {
    match &state.dataset {
        Some(_) => "Dataset has no records.",
        None => "No dataset loaded.",
    }
}

/// Gradient strip with the min / max labels underneath.
fn color_legend(ui: &mut Ui, cm: &ContinuousColorMap) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(ui.available_width(), 14.0), Sense::hover());
    let stops = cm.legend_stops(32);
    let width = rect.width() / stops.len() as f32;
    for (i, (_, color)) in stops.iter().enumerate() {
        let cell = egui::Rect::from_min_size(
            rect.min + egui::vec2(i as f32 * width, 0.0),
            egui::vec2(width + 0.5, rect.height()),
        );
        ui.painter().rect_filled(cell, 0.0, *color);
    }
    ui.horizontal(|ui: &mut Ui| {
        ui.label(format!("{:.2}", cm.min));
        ui.with_layout(Layout::right_to_left(Align::Center), |ui: &mut Ui| {
            ui.label(format!("{:.2}", cm.max));
        });
    });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            let can_export = state.detail_rows().is_some();
            if ui
                .add_enabled(can_export, egui::Button::new("Export table…"))
                .clicked()
            {
                export_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let (Some(ds), Some(rows)) = (&state.dataset, state.detail_rows()) {
            ui.label(format!("{} records loaded, {} shown", ds.len(), rows.len()));
        }

        ui.separator();

        if let Some(msg) = &state.status_message {
            let color = if msg.starts_with("Error") {
                Color32::RED
            } else {
                ui.visuals().text_color()
            };
            ui.label(RichText::new(msg).color(color));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open price table")
        .add_filter("Supported files", &["csv", "json", "parquet", "pq"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .add_filter("Parquet", &["parquet", "pq"])
        .pick_file();

    if let Some(path) = file {
        state.load_path(&path);
    }
}

pub fn export_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Export table")
        .add_filter("CSV", &["csv"])
        .set_file_name("filtered_prices.csv")
        .save_file();

    if let Some(path) = file {
        match state.export_rows(&path) {
            Ok(n) => {
                log::info!("Exported {n} records to {}", path.display());
                state.status_message = Some(format!("Exported {n} records"));
            }
            Err(e) => {
                log::error!("Failed to export table: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DashboardConfig;
    use crate::data::model::PriceTable;

    #[test]
    fn empty_file_is_not_reported_as_missing() {
        let mut state = AppState::new(DashboardConfig::default());
        assert_eq!(empty_panel_message(&state), "No dataset loaded.");

        state.set_dataset(PriceTable::default());
        assert_eq!(state.year_bounds, None);
        assert_eq!(empty_panel_message(&state), "Dataset has no records.");
    }
}
