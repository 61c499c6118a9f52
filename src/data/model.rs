use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// PriceRecord – one row of the source table
// ---------------------------------------------------------------------------

/// A single observation: the average residential electricity price of one
/// state in one year. Field names mirror the source file's column headers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRecord {
    #[serde(rename = "Year")]
    pub year: i32,
    /// Two-letter state code, also used as the map location key.
    #[serde(rename = "US_State")]
    pub state: String,
    #[serde(rename = "Residential Price")]
    pub residential_price: f64,
}

impl PriceRecord {
    pub fn new(year: i32, state: &str, residential_price: f64) -> Self {
        Self {
            year,
            state: state.to_string(),
            residential_price,
        }
    }
}

// ---------------------------------------------------------------------------
// YearRange – inclusive, always ascending
// ---------------------------------------------------------------------------

/// Inclusive `[start, end]` year bound. `start <= end` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct YearRange {
    start: i32,
    end: i32,
}

impl YearRange {
    /// Build a range from two years in either order.
    pub fn new(a: i32, b: i32) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    pub fn start(&self) -> i32 {
        self.start
    }

    pub fn end(&self) -> i32 {
        self.end
    }

    pub fn contains(&self, year: i32) -> bool {
        self.start <= year && year <= self.end
    }

    /// Move the lower bound; the upper bound is pushed along if overtaken.
    pub fn with_start(self, start: i32) -> Self {
        Self {
            start,
            end: self.end.max(start),
        }
    }

    /// Move the upper bound; the lower bound is pushed along if overtaken.
    pub fn with_end(self, end: i32) -> Self {
        Self {
            start: self.start.min(end),
            end,
        }
    }
}

impl fmt::Display for YearRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start == self.end {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}–{}", self.start, self.end)
        }
    }
}

// ---------------------------------------------------------------------------
// PriceTable – immutable set of records
// ---------------------------------------------------------------------------

/// An immutable table of price records. Filters never mutate a table; they
/// return a new one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceTable {
    records: Vec<PriceRecord>,
}

impl PriceTable {
    pub fn from_records(records: Vec<PriceRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[PriceRecord] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// `[min(Year), max(Year)]`, or `None` for an empty table.
    pub fn year_bounds(&self) -> Option<YearRange> {
        let min = self.records.iter().map(|r| r.year).min()?;
        let max = self.records.iter().map(|r| r.year).max()?;
        Some(YearRange::new(min, max))
    }

    /// Sorted set of distinct state codes.
    pub fn states(&self) -> BTreeSet<&str> {
        self.records.iter().map(|r| r.state.as_str()).collect()
    }
}

impl FromIterator<PriceRecord> for PriceTable {
    fn from_iter<I: IntoIterator<Item = PriceRecord>>(iter: I) -> Self {
        Self::from_records(iter.into_iter().collect())
    }
}
