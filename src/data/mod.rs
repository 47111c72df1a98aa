/// Data layer: launch records, loading, and filtering.
///
/// Architecture:
/// ```text
///  .csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Vec<LaunchRecord>
///   └──────────┘
///        │
///        ▼
///   ┌─────────────┐
///   │ LaunchTable │  validated rows, site / booster index, payload min/max
///   └─────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  site selection + payload range → matching rows
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod filter;
