use std::collections::BTreeMap;

use super::model::PriceTable;

/// Mean residential price of one state over the rows it was computed from.
#[derive(Debug, Clone, PartialEq)]
pub struct StateMean {
    pub state: String,
    pub mean_price: f64,
    /// Number of rows that contributed to the mean.
    pub samples: usize,
}

/// Group rows by state and average their residential price.
///
/// Yields one entry per distinct state in `table`, sorted by state code.
pub fn mean_price_by_state(table: &PriceTable) -> Vec<StateMean> {
    let mut groups: BTreeMap<&str, (f64, usize)> = BTreeMap::new();
    for record in table.records() {
        let (sum, count) = groups.entry(record.state.as_str()).or_insert((0.0, 0));
        *sum += record.residential_price;
        *count += 1;
    }

    groups
        .into_iter()
        .map(|(state, (sum, count))| StateMean {
            state: state.to_string(),
            mean_price: sum / count as f64,
            samples: count,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::PriceRecord;

    #[test]
    fn one_row_per_state_with_arithmetic_mean() {
        let table = PriceTable::from_records(vec![
            PriceRecord::new(2015, "CA", 17.0),
            PriceRecord::new(2015, "TX", 9.0),
            PriceRecord::new(2016, "CA", 18.0),
            PriceRecord::new(2017, "CA", 19.0),
            PriceRecord::new(2016, "TX", 10.0),
        ]);

        let means = mean_price_by_state(&table);

        assert_eq!(
            means,
            vec![
                StateMean { state: "CA".into(), mean_price: 18.0, samples: 3 },
                StateMean { state: "TX".into(), mean_price: 9.5, samples: 2 },
            ]
        );
    }

    #[test]
    fn empty_table_aggregates_to_nothing() {
        assert!(mean_price_by_state(&PriceTable::default()).is_empty());
    }

    #[test]
    fn single_row_mean_is_the_value() {
        let table = PriceTable::from_records(vec![PriceRecord::new(2001, "HI", 16.41)]);
        let means = mean_price_by_state(&table);
        assert_eq!(means.len(), 1);
        assert_eq!(means[0].mean_price, 16.41);
    }
}
