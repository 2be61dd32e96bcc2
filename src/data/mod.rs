/// Data layer: core types, loading, statistics and chart series.
///
/// Architecture:
/// ```text
///   .csv bytes
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse CSV → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ Dataset   │  header + rows, typed on demand
///   └──────────┘
///        │  + ColumnSelection (time, brightness)
///        ▼
///   ┌──────────┐      ┌──────────┐
///   │  stats    │      │  series   │
///   └──────────┘      └──────────┘
///  SummaryStatistics    ChartSeries
/// ```

pub mod error;
pub mod loader;
pub mod model;
pub mod series;
pub mod stats;

pub use error::{CurveError, ErrorKind};
pub use loader::{load_file, parse_csv, write_csv};
pub use model::{CellValue, ColumnSelection, Dataset};
pub use series::{chart_series, ChartSeries, TimeAxis};
pub use stats::{compute_statistics, SummaryStatistics};
