/// Data layer: core types, loading, filtering and aggregation.
///
/// Architecture:
/// ```text
///  .csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → PriceTable
///   └──────────┘
///        │
///        ▼
///   ┌────────────┐
///   │ PriceTable  │  immutable Vec<PriceRecord>
///   └────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  year range / state code → new PriceTable
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ aggregate  │  mean price per state
///   └───────────┘
/// ```

pub mod aggregate;
pub mod filter;
pub mod loader;
pub mod model;
