/// Data layer: table model, loading, typed records and filtering.
///
/// Architecture:
/// ```text
///  .csv / .json
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → SalesTable (type-inferred cells)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ records   │  pick columns → RawPriceRecord / DepreciationRecord / RatioRecord
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  zip normalization + band filter, make filter
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod records;
pub mod filter;
