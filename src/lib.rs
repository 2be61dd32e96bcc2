//! Light curve viewer: load a time series from CSV, pick the time and
//! brightness columns, and derive summary statistics and a line chart.

pub mod config;
pub mod data;
pub mod state;

pub use config::ViewerConfig;
pub use data::{
    chart_series, compute_statistics, load_file, parse_csv, write_csv, CellValue, ChartSeries,
    ColumnSelection, CurveError, Dataset, ErrorKind, SummaryStatistics, TimeAxis,
};
pub use state::{Status, ViewerState};
