/// Data layer: core types, loading, and aggregation.
///
/// Architecture:
/// ```text
///  .csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → DatasetStore
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ DatasetStore  │  Vec<LaunchRecord>, site options, payload span
///   └──────────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ aggregate  │  selection → success breakdown / scatter points
///   └───────────┘
/// ```

pub mod aggregate;
pub mod error;
pub mod loader;
pub mod model;
