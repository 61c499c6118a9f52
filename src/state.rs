use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};

use crate::config::DashboardConfig;
use crate::dashboard::callbacks::MapFigure;
use crate::dashboard::reactive::Dispatcher;
use crate::dashboard::selection::{selected_state, ClickData, ClickPoint};
use crate::data::loader;
use crate::data::model::{PriceTable, YearRange};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    pub config: DashboardConfig,

    /// Loaded table (None until a file loads successfully).
    pub dataset: Option<Arc<PriceTable>>,

    /// Slider bounds: `[min(Year), max(Year)]` of the loaded table.
    pub year_bounds: Option<YearRange>,

    /// Input/output wiring for the loaded table.
    pub dispatcher: Option<Dispatcher>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(config: DashboardConfig) -> Self {
        Self {
            config,
            dataset: None,
            year_bounds: None,
            dispatcher: None,
            status_message: None,
        }
    }

    /// Ingest a newly loaded table and reset all inputs.
    pub fn set_dataset(&mut self, table: PriceTable) {
        let table = Arc::new(table);
        self.year_bounds = table.year_bounds();
        self.dispatcher = Some(crate::dashboard::build(table.clone(), self.config.color_scale));
        self.dataset = Some(table);
        self.status_message = None;
    }

    /// Load `path`, replacing the current table on success.  On failure
    /// the error is logged, shown in the status line and the current table
    /// is kept.
    pub fn load_path(&mut self, path: &Path) {
        match loader::load_file(path).with_context(|| format!("loading {}", path.display())) {
            Ok(table) => {
                log::info!(
                    "Loaded {} price records for {} states from {}",
                    table.len(),
                    table.states().len(),
                    path.display()
                );
                self.set_dataset(table);
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                self.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }

    /// Current slider value.
    pub fn year_range(&self) -> Option<YearRange> {
        self.dispatcher.as_ref().map(|d| d.inputs().year_range)
    }

    pub fn set_year_range(&mut self, range: YearRange) {
        if let Some(d) = &mut self.dispatcher {
            d.set_year_range(range);
        }
    }

    /// Forward a click on the map region `state`.
    pub fn click_region(&mut self, state: &str) {
        let Some(d) = &mut self.dispatcher else {
            return;
        };
        let z = d
            .map_figure()
            .and_then(|fig| fig.region(state))
            .map(|r| r.mean_price);
        let click = ClickData {
            points: Some(vec![ClickPoint {
                location: Some(state.to_string()),
                z,
            }]),
        };
        d.set_click(Some(click));
    }

    pub fn clear_selection(&mut self) {
        if let Some(d) = &mut self.dispatcher {
            d.set_click(None);
        }
    }

    /// State narrowed by the current click, if any.
    pub fn selected_state(&self) -> Option<&str> {
        self.dispatcher
            .as_ref()
            .and_then(|d| selected_state(d.inputs().click.as_ref()))
    }

    /// Current mean price of the selected state, read from the latest map
    /// figure.  `None` when the state has no data in the selected range.
    pub fn selected_value(&self) -> Option<f64> {
        let state = self.selected_state()?;
        self.map_figure()?.region(state).map(|r| r.mean_price)
    }

    pub fn map_figure(&self) -> Option<&MapFigure> {
        self.dispatcher.as_ref().and_then(Dispatcher::map_figure)
    }

    pub fn detail_rows(&self) -> Option<&PriceTable> {
        self.dispatcher.as_ref().and_then(Dispatcher::detail_rows)
    }

    /// Write the rows currently shown in the detail table to `path`.
    pub fn export_rows(&self, path: &Path) -> Result<usize> {
        let rows = self.detail_rows().context("no table loaded")?;
        loader::write_csv(path, rows)
            .with_context(|| format!("exporting to {}", path.display()))?;
        Ok(rows.len())
    }
}
