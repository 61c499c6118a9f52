/// Dashboard controller: the two handlers and the runtime that wires them
/// to the slider and the map.
///
/// ```text
///   YearSlider ──┬──────────────► update_map   ──► MapFigure
///                │
///   MapClick ────┴──────────────► update_table ──► DetailTable
/// ```

pub mod callbacks;
pub mod reactive;
pub mod selection;

use std::sync::Arc;

use crate::color::ColorScale;
use crate::data::model::{PriceTable, YearRange};

use callbacks::{update_map, update_table};
use reactive::{Dispatcher, InputId, Inputs, OutputId, OutputValue};

/// Build a dispatcher for `table` with both handlers registered and run
/// once.  The slider starts at the full year range and nothing is selected.
pub fn build(table: Arc<PriceTable>, scale: ColorScale) -> Dispatcher {
    let year_range = table.year_bounds().unwrap_or(YearRange::new(0, 0));
    let mut dispatcher = Dispatcher::new(
        table,
        Inputs {
            year_range,
            click: None,
        },
    );

    dispatcher.subscribe(OutputId::MapFigure, &[InputId::YearSlider], move |t, inputs| {
        OutputValue::Figure(update_map(t, inputs.year_range, scale))
    });
    dispatcher.subscribe(
        OutputId::DetailTable,
        &[InputId::YearSlider, InputId::MapClick],
        |t, inputs| OutputValue::Rows(update_table(t, inputs.year_range, inputs.click.as_ref())),
    );

    dispatcher.start();
    dispatcher
}
