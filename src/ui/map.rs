use eframe::egui::{Color32, RichText, Stroke, Ui};
use egui_plot::{Plot, PlotPoint, PlotPoints, Polygon, Text};

use crate::geo::{self, GRID_COLS, GRID_ROWS};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Choropleth (central panel)
// ---------------------------------------------------------------------------

/// Render the state map.  Returns the state code of a clicked tile.
pub fn choropleth(ui: &mut Ui, state: &AppState) -> Option<&'static str> {
    let figure = match state.map_figure() {
        Some(fig) => fig,
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("Open a price table to view the map  (File → Open…)");
            });
            return None;
        }
    };
    let selected = state.selected_state();

    let response = Plot::new("choropleth")
        .data_aspect(1.0)
        .show_axes(false)
        .show_grid(false)
        .show_x(false)
        .show_y(false)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .allow_double_click_reset(false)
        .include_x(-0.6)
        .include_x(GRID_COLS as f64 - 0.4)
        .include_y(0.6)
        .include_y(-(GRID_ROWS as f64) + 0.4)
        .show(ui, |plot_ui| {
            for region in &figure.regions {
                let is_selected = selected == Some(region.state.as_str());
                let stroke = if is_selected {
                    Stroke::new(2.5, Color32::BLACK)
                } else {
                    Stroke::new(1.0, Color32::from_gray(160))
                };

                let points: PlotPoints = region.tile.corners().into_iter().collect();
                plot_ui.polygon(Polygon::new(points).fill_color(region.color).stroke(stroke));

                let [x, y] = region.tile.center();
                let label = RichText::new(&region.state).size(11.0).color(label_color(region.color));
                plot_ui.text(Text::new(PlotPoint::new(x, y), label));
            }
        });

    let hovered = response
        .response
        .hover_pos()
        .map(|pos| response.transform.value_from_position(pos))
        .and_then(|pt| geo::state_at(pt.x, pt.y));

    if let Some(region) = hovered.and_then(|code| figure.region(code)) {
        response.response.clone().on_hover_text(format!(
            "{}\nmean price: {:.2}\n{} record(s)",
            region.state, region.mean_price, region.samples
        ));
    }

    if response.response.clicked() {
        // Only placed regions with data produce a click payload.
        return hovered.filter(|code| figure.region(code).is_some());
    }
    None
}

/// Dark text on light tiles, light text on dark tiles.
fn label_color(fill: Color32) -> Color32 {
    let luma = 0.299 * fill.r() as f32 + 0.587 * fill.g() as f32 + 0.114 * fill.b() as f32;
    if luma > 140.0 {
        Color32::BLACK
    } else {
        Color32::WHITE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::ColorScale;

    #[test]
    fn labels_stay_readable_across_the_scale() {
        assert_eq!(label_color(ColorScale::Reds.sample(0.0)), Color32::BLACK);
        assert_eq!(label_color(ColorScale::Reds.sample(1.0)), Color32::WHITE);
    }
}
