/// Data layer: core types, loading, cleaning, filtering, and aggregation.
///
/// Architecture:
/// ```text
///  .csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → raw rows
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ cleaner   │  coerce lat/lon/timestamp, drop bad rows, derive year
///   └──────────┘
///        │
///        ▼
///   ┌────────────────┐
///   │ SightingDataset │  Vec<Sighting>, shape index, year bounds
///   └────────────────┘
///        │
///        ▼
///   ┌──────────┐     ┌───────────┐
///   │  filter   │ ──▶ │ aggregate │  year/shape predicate → counts
///   └──────────┘     └───────────┘
/// ```

pub mod aggregate;
pub mod cleaner;
pub mod filter;
pub mod loader;
pub mod model;
