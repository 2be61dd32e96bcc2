use crate::data::error::{CurveError, GUIDANCE};
use crate::data::{chart_series, compute_statistics, parse_csv};
use crate::data::{ChartSeries, ColumnSelection, Dataset, SummaryStatistics};

// ---------------------------------------------------------------------------
// Viewer state
// ---------------------------------------------------------------------------

/// An error message shown to the user, with what to check next.
#[derive(Debug, Clone, PartialEq)]
pub struct Status {
    pub message: String,
    pub guidance: &'static str,
}

impl From<&CurveError> for Status {
    fn from(err: &CurveError) -> Self {
        Status {
            message: err.to_string(),
            guidance: err.guidance(),
        }
    }
}

/// The full viewer state, independent of rendering.
#[derive(Debug, Default)]
pub struct ViewerState {
    /// Loaded dataset (None until a file loads successfully).
    pub dataset: Option<Dataset>,

    /// Display name of the loaded file.
    pub source_name: Option<String>,

    /// Selected time / brightness columns.
    pub selection: ColumnSelection,

    /// Derived results for the current selection.
    pub statistics: Option<SummaryStatistics>,
    pub series: Option<ChartSeries>,

    /// Error shown in the UI.
    pub status: Option<Status>,
}

impl ViewerState {
    /// Parse uploaded bytes and make them the current dataset.
    ///
    /// A failed parse discards whatever was loaded before.
    pub fn load_bytes(&mut self, bytes: &[u8], source_name: &str) {
        match parse_csv(bytes) {
            Ok(dataset) => self.set_dataset(dataset, source_name),
            Err(e) => {
                log::error!("Failed to load {source_name}: {e}");
                self.clear();
                self.status = Some(Status::from(&e));
            }
        }
    }

    /// Report a failure that happened before parsing (e.g. reading the file).
    pub fn set_load_error(&mut self, err: &anyhow::Error) {
        self.clear();
        self.status = Some(Status {
            message: format!("{err:#}"),
            guidance: GUIDANCE,
        });
    }

    /// Replace the current dataset and recompute with a fresh selection.
    pub fn set_dataset(&mut self, dataset: Dataset, source_name: &str) {
        log::info!(
            "Loaded {source_name}: {} rows, columns {:?}",
            dataset.len(),
            dataset.columns()
        );
        self.selection = ColumnSelection::initial(&dataset);
        self.dataset = Some(dataset);
        self.source_name = Some(source_name.to_string());
        self.recompute();
    }

    pub fn set_time_column(&mut self, column: &str) {
        self.selection.time = column.to_string();
        self.recompute();
    }

    pub fn set_brightness_column(&mut self, column: &str) {
        self.selection.brightness = column.to_string();
        self.recompute();
    }

    /// Recompute statistics and chart for the current selection.
    /// On error both are cleared; no partial results are kept.
    pub fn recompute(&mut self) {
        let Some(dataset) = &self.dataset else {
            return;
        };
        let result = compute_statistics(dataset, &self.selection)
            .and_then(|stats| Ok((stats, chart_series(dataset, &self.selection)?)));

        match result {
            Ok((stats, series)) => {
                self.statistics = Some(stats);
                self.series = Some(series);
                self.status = None;
            }
            Err(e) => {
                log::error!("Cannot analyse selection {:?}: {e}", self.selection);
                self.statistics = None;
                self.series = None;
                self.status = Some(Status::from(&e));
            }
        }
    }

    fn clear(&mut self) {
        self.dataset = None;
        self.source_name = None;
        self.selection = ColumnSelection::default();
        self.statistics = None;
        self.series = None;
        self.status = None;
    }
}
