use eframe::egui::Color32;

use crate::color::{ColorScale, ContinuousColorMap};
use crate::data::aggregate::mean_price_by_state;
use crate::data::filter::{filter_by_state, filter_by_years};
use crate::data::model::{PriceTable, YearRange};
use crate::geo::{self, Tile};

use super::selection::{selected_state, ClickData};

// ---------------------------------------------------------------------------
// Map figure
// ---------------------------------------------------------------------------

/// A drawable state on the choropleth.
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    pub state: String,
    pub mean_price: f64,
    pub samples: usize,
    pub color: Color32,
    pub tile: Tile,
}

/// Renderer-neutral description of the choropleth.
#[derive(Debug, Clone, PartialEq)]
pub struct MapFigure {
    pub regions: Vec<Region>,
    /// Codes present in the data that the map cannot place.
    pub unplaced: Vec<String>,
    /// `(min, max)` of the mean prices, `None` when nothing was aggregated.
    pub price_range: Option<(f64, f64)>,
    pub color_scale: ColorScale,
}

impl MapFigure {
    pub fn region(&self, state: &str) -> Option<&Region> {
        self.regions.iter().find(|r| r.state == state)
    }

    /// Colour map used to paint the regions, for the legend.
    pub fn color_map(&self) -> Option<ContinuousColorMap> {
        self.price_range
            .map(|(min, max)| ContinuousColorMap::new(self.color_scale, min, max))
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// Recompute the choropleth for `range`: filter by year, average per state,
/// colour by mean price.
pub fn update_map(table: &PriceTable, range: YearRange, scale: ColorScale) -> MapFigure {
    let means = mean_price_by_state(&filter_by_years(table, range));

    let price_range = means
        .iter()
        .map(|m| m.mean_price)
        .fold(None::<(f64, f64)>, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        });
    let color_map = price_range.map(|(min, max)| ContinuousColorMap::new(scale, min, max));

    let mut regions = Vec::with_capacity(means.len());
    let mut unplaced = Vec::new();
    for mean in means {
        match (geo::tile_for(&mean.state), color_map) {
            (Some(tile), Some(cm)) => regions.push(Region {
                color: cm.color_for(mean.mean_price),
                state: mean.state,
                mean_price: mean.mean_price,
                samples: mean.samples,
                tile,
            }),
            _ => unplaced.push(mean.state),
        }
    }

    if !unplaced.is_empty() {
        log::debug!("No map location for {unplaced:?}; not drawn");
    }
    log::debug!("Map updated for {range}: {} regions", regions.len());

    MapFigure {
        regions,
        unplaced,
        price_range,
        color_scale: scale,
    }
}

/// Rows for the detail table: year-filtered, then narrowed to the clicked
/// state when the click payload names one.
pub fn update_table(table: &PriceTable, range: YearRange, click: Option<&ClickData>) -> PriceTable {
    let in_range = filter_by_years(table, range);
    match selected_state(click) {
        Some(state) => {
            log::debug!("Table narrowed to {state} for {range}");
            filter_by_state(&in_range, state)
        }
        None => in_range,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::selection::ClickPoint;
    use crate::data::model::PriceRecord;

    fn table() -> PriceTable {
        PriceTable::from_records(vec![
            PriceRecord::new(2015, "CA", 17.0),
            PriceRecord::new(2015, "TX", 9.0),
            PriceRecord::new(2016, "CA", 18.0),
        ])
    }

    #[test]
    fn map_reflects_selected_years() {
        let fig = update_map(&table(), YearRange::new(2015, 2015), ColorScale::Reds);

        let means: Vec<(&str, f64)> = fig
            .regions
            .iter()
            .map(|r| (r.state.as_str(), r.mean_price))
            .collect();
        assert_eq!(means, vec![("CA", 17.0), ("TX", 9.0)]);
        assert_eq!(fig.price_range, Some((9.0, 17.0)));
        assert!(fig.unplaced.is_empty());

        let all = update_map(&table(), YearRange::new(2015, 2016), ColorScale::Reds);
        assert_eq!(all.region("CA").map(|r| r.mean_price), Some(17.5));
        assert_eq!(all.region("CA").map(|r| r.samples), Some(2));
    }

    #[test]
    fn extreme_means_take_the_scale_endpoints() {
        let fig = update_map(&table(), YearRange::new(2015, 2015), ColorScale::Reds);
        assert_eq!(fig.region("TX").map(|r| r.color), Some(ColorScale::Reds.sample(0.0)));
        assert_eq!(fig.region("CA").map(|r| r.color), Some(ColorScale::Reds.sample(1.0)));
    }

    #[test]
    fn map_handler_is_idempotent() {
        let t = table();
        let range = YearRange::new(2015, 2016);
        let first = update_map(&t, range, ColorScale::Reds);
        let second = update_map(&t, range, ColorScale::Reds);
        assert_eq!(first, second);
    }

    #[test]
    fn unplaceable_codes_are_skipped_not_fatal() {
        let t = PriceTable::from_records(vec![
            PriceRecord::new(2015, "CA", 17.0),
            PriceRecord::new(2015, "PR", 20.0),
            PriceRecord::new(2015, "tx", 9.0),
        ]);
        let fig = update_map(&t, YearRange::new(2015, 2015), ColorScale::Reds);
        assert_eq!(fig.regions.len(), 1);
        assert_eq!(fig.unplaced, vec!["PR".to_string(), "tx".to_string()]);
    }

    #[test]
    fn empty_range_gives_empty_figure() {
        let fig = update_map(&table(), YearRange::new(1990, 1991), ColorScale::Reds);
        assert!(fig.regions.is_empty());
        assert_eq!(fig.price_range, None);
        assert!(fig.color_map().is_none());
    }

    #[test]
    fn table_narrows_to_clicked_state() {
        let click = ClickData::region("CA", 17.0);
        let rows = update_table(&table(), YearRange::new(2015, 2015), Some(&click));
        assert_eq!(rows.records(), &[PriceRecord::new(2015, "CA", 17.0)]);
    }

    #[test]
    fn table_falls_back_to_year_filter_without_valid_click() {
        let range = YearRange::new(2015, 2015);
        let expected = filter_by_years(&table(), range);

        assert_eq!(update_table(&table(), range, None), expected);
        assert_eq!(
            update_table(&table(), range, Some(&ClickData { points: None })),
            expected
        );
        let no_location = ClickData {
            points: Some(vec![ClickPoint { location: None, z: None }]),
        };
        assert_eq!(update_table(&table(), range, Some(&no_location)), expected);
    }

    #[test]
    fn end_to_end_example() {
        let t = table();
        let range = YearRange::new(2015, 2015);

        let means: Vec<_> = mean_price_by_state(&filter_by_years(&t, range))
            .into_iter()
            .map(|m| (m.state, m.mean_price))
            .collect();
        assert_eq!(means, vec![("CA".to_string(), 17.0), ("TX".to_string(), 9.0)]);

        let fig = update_map(&t, range, ColorScale::Reds);
        let ca = fig.region("CA").unwrap();
        let click = ClickData::region(&ca.state, ca.mean_price);
        let rows = update_table(&t, range, Some(&click));
        assert_eq!(rows.records(), &[PriceRecord::new(2015, "CA", 17.0)]);
    }
}
