use super::model::{PriceTable, YearRange};

// ---------------------------------------------------------------------------
// Row filters – each returns a fresh table, the input is never touched
// ---------------------------------------------------------------------------

/// Rows whose `year` lies inside the inclusive `range`.
pub fn filter_by_years(table: &PriceTable, range: YearRange) -> PriceTable {
    table
        .records()
        .iter()
        .filter(|r| range.contains(r.year))
        .cloned()
        .collect()
}

/// Rows whose state code equals `state` exactly (case-sensitive).
pub fn filter_by_state(table: &PriceTable, state: &str) -> PriceTable {
    table
        .records()
        .iter()
        .filter(|r| r.state == state)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::PriceRecord;

    fn sample() -> PriceTable {
        PriceTable::from_records(vec![
            PriceRecord::new(2013, "NY", 18.7),
            PriceRecord::new(2014, "CA", 16.2),
            PriceRecord::new(2015, "CA", 17.0),
            PriceRecord::new(2015, "TX", 9.0),
            PriceRecord::new(2016, "CA", 18.0),
            PriceRecord::new(2017, "TX", 9.4),
        ])
    }

    #[test]
    fn year_filter_keeps_exactly_the_rows_in_range() {
        let table = sample();
        for a in 2012..=2018 {
            for b in a..=2018 {
                let out = filter_by_years(&table, YearRange::new(a, b));
                let expected: Vec<_> = table
                    .records()
                    .iter()
                    .filter(|r| a <= r.year && r.year <= b)
                    .cloned()
                    .collect();
                assert_eq!(out.records(), expected.as_slice(), "range [{a}, {b}]");
            }
        }
    }

    #[test]
    fn year_filter_may_be_empty() {
        let out = filter_by_years(&sample(), YearRange::new(1990, 1999));
        assert!(out.is_empty());
    }

    #[test]
    fn year_filter_leaves_input_untouched() {
        let table = sample();
        let before = table.clone();
        let _ = filter_by_years(&table, YearRange::new(2015, 2015));
        assert_eq!(table, before);
    }

    #[test]
    fn state_filter_matches_code_exactly() {
        let out = filter_by_state(&sample(), "CA");
        assert_eq!(out.len(), 3);
        assert!(out.records().iter().all(|r| r.state == "CA"));

        assert!(filter_by_state(&sample(), "ca").is_empty());
        assert!(filter_by_state(&sample(), "C").is_empty());
    }

    #[test]
    fn state_filter_on_empty_table_is_empty() {
        assert!(filter_by_state(&PriceTable::default(), "CA").is_empty());
    }
}
