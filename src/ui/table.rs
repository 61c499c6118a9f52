use eframe::egui::Ui;
use egui_extras::{Column, TableBuilder};

use crate::state::AppState;

const ROW_HEIGHT: f32 = 18.0;

/// Render the detail table of the currently filtered records.
pub fn detail_table(ui: &mut Ui, state: &AppState) {
    let Some(rows) = state.detail_rows() else {
        ui.label("No dataset loaded.");
        return;
    };

    ui.horizontal(|ui: &mut Ui| {
        ui.strong("Records");
        match (state.year_range(), state.selected_state()) {
            (Some(range), Some(code)) => ui.label(format!("{code}, {range}")),
            (Some(range), None) => ui.label(format!("all states, {range}")),
            _ => ui.label(""),
        };
    });

    if rows.is_empty() {
        ui.label("No records in the selected range.");
        return;
    }

    let records = rows.records();
    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .min_scrolled_height(0.0)
        .column(Column::auto().at_least(60.0))
        .column(Column::auto().at_least(80.0))
        .column(Column::remainder())
        .header(ROW_HEIGHT + 2.0, |mut header| {
            header.col(|ui| {
                ui.strong("Year");
            });
            header.col(|ui| {
                ui.strong("US_State");
            });
            header.col(|ui| {
                ui.strong("Residential Price");
            });
        })
        .body(|body| {
            body.rows(ROW_HEIGHT, records.len(), |mut row| {
                let record = &records[row.index()];
                row.col(|ui| {
                    ui.label(record.year.to_string());
                });
                row.col(|ui| {
                    ui.label(&record.state);
                });
                row.col(|ui| {
                    ui.label(format!("{:.2}", record.residential_price));
                });
            });
        });
}
