use std::collections::BTreeMap;
use std::sync::Arc;

use crate::data::model::{PriceTable, YearRange};

use super::callbacks::MapFigure;
use super::selection::ClickData;

// ---------------------------------------------------------------------------
// Identifiers
// ---------------------------------------------------------------------------

/// Controls whose value changes drive recomputation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum InputId {
    YearSlider,
    MapClick,
}

/// Widgets whose content is produced by a handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OutputId {
    MapFigure,
    DetailTable,
}

/// Current value of every input, handed to each handler.
#[derive(Debug, Clone, PartialEq)]
pub struct Inputs {
    pub year_range: YearRange,
    pub click: Option<ClickData>,
}

/// What a handler produces.
#[derive(Debug, Clone, PartialEq)]
pub enum OutputValue {
    Figure(MapFigure),
    Rows(PriceTable),
}

type Handler = Box<dyn Fn(&PriceTable, &Inputs) -> OutputValue>;

struct Subscription {
    output: OutputId,
    triggers: Vec<InputId>,
    handler: Handler,
}

// ---------------------------------------------------------------------------
// Dispatcher
// ---------------------------------------------------------------------------

/// Observer runtime connecting inputs to output handlers.
///
/// Each output subscribes to one or more inputs.  When an input changes,
/// its new value is stored first, then every subscribed handler runs exactly
/// once against the read-only table and a snapshot of all inputs.  Setting
/// an input to the value it already has triggers nothing.
pub struct Dispatcher {
    table: Arc<PriceTable>,
    inputs: Inputs,
    subscriptions: Vec<Subscription>,
    outputs: BTreeMap<OutputId, OutputValue>,
}

impl Dispatcher {
    pub fn new(table: Arc<PriceTable>, inputs: Inputs) -> Self {
        Self {
            table,
            inputs,
            subscriptions: Vec::new(),
            outputs: BTreeMap::new(),
        }
    }

    /// Register `handler` as the producer of `output`, run whenever any of
    /// `triggers` changes.
    pub fn subscribe<F>(&mut self, output: OutputId, triggers: &[InputId], handler: F)
    where
        F: Fn(&PriceTable, &Inputs) -> OutputValue + 'static,
    {
        self.subscriptions.push(Subscription {
            output,
            triggers: triggers.to_vec(),
            handler: Box::new(handler),
        });
    }

    /// Initial render: run every handler once.
    pub fn start(&mut self) -> Vec<OutputId> {
        let mut fired = Vec::with_capacity(self.subscriptions.len());
        for sub in &self.subscriptions {
            let value = (sub.handler)(&self.table, &self.inputs);
            self.outputs.insert(sub.output, value);
            fired.push(sub.output);
        }
        fired
    }

    /// Update the slider value.  Returns the outputs that were recomputed.
    pub fn set_year_range(&mut self, range: YearRange) -> Vec<OutputId> {
        if self.inputs.year_range == range {
            return Vec::new();
        }
        self.inputs.year_range = range;
        self.fire(InputId::YearSlider)
    }

    /// Update the map click selection.  Returns the outputs that were
    /// recomputed.
    pub fn set_click(&mut self, click: Option<ClickData>) -> Vec<OutputId> {
        if self.inputs.click == click {
            return Vec::new();
        }
        self.inputs.click = click;
        self.fire(InputId::MapClick)
    }

    fn fire(&mut self, input: InputId) -> Vec<OutputId> {
        let mut fired = Vec::new();
        for sub in self.subscriptions.iter().filter(|s| s.triggers.contains(&input)) {
            let value = (sub.handler)(&self.table, &self.inputs);
            self.outputs.insert(sub.output, value);
            fired.push(sub.output);
        }
        log::debug!("{input:?} changed; recomputed {fired:?}");
        fired
    }

    pub fn inputs(&self) -> &Inputs {
        &self.inputs
    }

    pub fn output(&self, id: OutputId) -> Option<&OutputValue> {
        self.outputs.get(&id)
    }

    /// Latest map figure, if the map output has been produced.
    pub fn map_figure(&self) -> Option<&MapFigure> {
        match self.output(OutputId::MapFigure)? {
            OutputValue::Figure(fig) => Some(fig),
            OutputValue::Rows(_) => None,
        }
    }

    /// Latest detail-table rows, if the table output has been produced.
    pub fn detail_rows(&self) -> Option<&PriceTable> {
        match self.output(OutputId::DetailTable)? {
            OutputValue::Rows(rows) => Some(rows),
            OutputValue::Figure(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::data::model::PriceRecord;

    fn dispatcher_with_counters() -> (Dispatcher, Rc<Cell<usize>>, Rc<Cell<usize>>) {
        let table = Arc::new(PriceTable::from_records(vec![
            PriceRecord::new(2015, "CA", 17.0),
            PriceRecord::new(2016, "CA", 18.0),
        ]));
        let mut d = Dispatcher::new(
            table,
            Inputs {
                year_range: YearRange::new(2015, 2016),
                click: None,
            },
        );

        let map_runs = Rc::new(Cell::new(0));
        let table_runs = Rc::new(Cell::new(0));

        let counter = map_runs.clone();
        d.subscribe(OutputId::MapFigure, &[InputId::YearSlider], move |t, _| {
            counter.set(counter.get() + 1);
            OutputValue::Rows(t.clone())
        });
        let counter = table_runs.clone();
        d.subscribe(
            OutputId::DetailTable,
            &[InputId::YearSlider, InputId::MapClick],
            move |t, inputs| {
                counter.set(counter.get() + 1);
                OutputValue::Rows(crate::data::filter::filter_by_years(t, inputs.year_range))
            },
        );
        (d, map_runs, table_runs)
    }

    #[test]
    fn start_runs_every_handler_once() {
        let (mut d, map_runs, table_runs) = dispatcher_with_counters();
        assert!(d.detail_rows().is_none());
        assert_eq!(d.start(), vec![OutputId::MapFigure, OutputId::DetailTable]);
        assert_eq!((map_runs.get(), table_runs.get()), (1, 1));
        assert_eq!(d.detail_rows().map(PriceTable::len), Some(2));
    }

    #[test]
    fn slider_change_runs_both_handlers_once_with_new_value() {
        let (mut d, map_runs, table_runs) = dispatcher_with_counters();
        d.start();

        let fired = d.set_year_range(YearRange::new(2016, 2016));

        assert_eq!(fired, vec![OutputId::MapFigure, OutputId::DetailTable]);
        assert_eq!((map_runs.get(), table_runs.get()), (2, 2));
        // The handler saw the updated value.
        assert_eq!(d.detail_rows().map(PriceTable::len), Some(1));
    }

    #[test]
    fn click_change_runs_only_table_handler() {
        let (mut d, map_runs, table_runs) = dispatcher_with_counters();
        d.start();

        let fired = d.set_click(Some(ClickData::region("CA", 17.5)));

        assert_eq!(fired, vec![OutputId::DetailTable]);
        assert_eq!((map_runs.get(), table_runs.get()), (1, 2));
    }

    #[test]
    fn unchanged_values_trigger_nothing() {
        let (mut d, map_runs, table_runs) = dispatcher_with_counters();
        d.start();

        assert!(d.set_year_range(YearRange::new(2015, 2016)).is_empty());
        assert!(d.set_click(None).is_empty());
        assert_eq!((map_runs.get(), table_runs.get()), (1, 1));
    }

    #[test]
    fn mismatched_output_variant_is_not_exposed() {
        let (mut d, _, _) = dispatcher_with_counters();
        d.start();
        // The test map handler produces rows, so no figure is available.
        assert!(d.map_figure().is_none());
        assert!(matches!(d.output(OutputId::MapFigure), Some(OutputValue::Rows(_))));
    }
}
