use std::fmt;

use serde::Serialize;

// ---------------------------------------------------------------------------
// CellValue – typed view of a single CSV cell
// ---------------------------------------------------------------------------

/// Markers that stand for a missing value, in addition to the empty cell.
/// Same set pandas' `read_csv` recognises by default.
pub const NA_MARKERS: &[&str] = &[
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// A dynamically-typed cell value mirroring common Pandas dtypes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    Integer(i64),
    Float(f64),
    Bool(bool),
    Text(String),
    Null,
}

impl CellValue {
    /// Infer the type of a raw cell.
    pub fn infer(raw: &str) -> Self {
        let s = raw.trim();
        if is_missing(s) {
            return CellValue::Null;
        }
        if let Ok(i) = s.parse::<i64>() {
            return CellValue::Integer(i);
        }
        if let Ok(f) = s.parse::<f64>() {
            return CellValue::Float(f);
        }
        match s {
            "true" | "True" | "TRUE" => CellValue::Bool(true),
            "false" | "False" | "FALSE" => CellValue::Bool(false),
            _ => CellValue::Text(raw.to_string()),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Float(v) => write!(f, "{v}"),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Text(s) => write!(f, "{s}"),
            CellValue::Null => write!(f, "<null>"),
        }
    }
}

/// Whether a trimmed cell counts as a missing value.
pub fn is_missing(trimmed: &str) -> bool {
    trimmed.is_empty() || NA_MARKERS.contains(&trimmed)
}

// ---------------------------------------------------------------------------
// Dataset – the parsed CSV table
// ---------------------------------------------------------------------------

/// The parsed CSV: header plus rows, cells kept exactly as read.
///
/// Every row has one cell per column; [`crate::data::loader::parse_csv`] is
/// the only constructor that reads untrusted input and it enforces this.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Dataset {
    /// Build a dataset from a header and rows of equal width.
    pub(crate) fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        debug_assert!(rows.iter().all(|r| r.len() == columns.len()));
        Dataset { columns, rows }
    }

    /// Ordered column names.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the dataset has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of a column in the header.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// All raw cells of one column, in row order.
    pub fn column(&self, name: &str) -> Option<impl Iterator<Item = &str> + '_> {
        let idx = self.column_index(name)?;
        Some(self.rows.iter().map(move |row| row[idx].as_str()))
    }

    /// Raw rows, in file order.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Typed value of a single cell.
    pub fn cell(&self, row: usize, column: &str) -> Option<CellValue> {
        let idx = self.column_index(column)?;
        self.rows.get(row).map(|r| CellValue::infer(&r[idx]))
    }

    /// The first `n` rows, for previews.
    pub fn head(&self, n: usize) -> &[Vec<String>] {
        &self.rows[..n.min(self.rows.len())]
    }
}

// ---------------------------------------------------------------------------
// ColumnSelection – which columns hold time and brightness
// ---------------------------------------------------------------------------

/// The user's choice of time and brightness columns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnSelection {
    pub time: String,
    pub brightness: String,
}

impl ColumnSelection {
    pub fn new(time: impl Into<String>, brightness: impl Into<String>) -> Self {
        ColumnSelection {
            time: time.into(),
            brightness: brightness.into(),
        }
    }

    /// Default selection for a freshly loaded dataset: the first column for
    /// both, the same way a select box starts on its first option.
    pub fn initial(dataset: &Dataset) -> Self {
        let first = dataset.columns().first().cloned().unwrap_or_default();
        ColumnSelection {
            time: first.clone(),
            brightness: first,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Dataset {
        Dataset::new(
            vec!["t".into(), "flux".into()],
            vec![
                vec!["0".into(), "1.5".into()],
                vec!["1".into(), "".into()],
                vec!["2".into(), "bright".into()],
            ],
        )
    }

    #[test]
    fn infers_cell_types() {
        assert_eq!(CellValue::infer("42"), CellValue::Integer(42));
        assert_eq!(CellValue::infer(" 2.5 "), CellValue::Float(2.5));
        assert_eq!(CellValue::infer("True"), CellValue::Bool(true));
        assert_eq!(CellValue::infer(""), CellValue::Null);
        assert_eq!(CellValue::infer("NaN"), CellValue::Null);
        assert_eq!(CellValue::infer("NULL"), CellValue::Null);
        assert_eq!(CellValue::infer(" n/a "), CellValue::Null);
        assert_eq!(CellValue::infer("-1.#IND"), CellValue::Null);
        assert_eq!(
            CellValue::infer("2024-01-01"),
            CellValue::Text("2024-01-01".into())
        );
    }

    #[test]
    fn cell_lookup_by_column_name() {
        let ds = sample();
        assert_eq!(ds.cell(0, "flux"), Some(CellValue::Float(1.5)));
        assert_eq!(ds.cell(1, "flux"), Some(CellValue::Null));
        assert_eq!(ds.cell(0, "missing"), None);
        assert_eq!(ds.cell(9, "t"), None);
    }

    #[test]
    fn head_is_clamped_to_length() {
        let ds = sample();
        assert_eq!(ds.head(2).len(), 2);
        assert_eq!(ds.head(100).len(), 3);
        assert_eq!(ds.head(0).len(), 0);
    }

    #[test]
    fn initial_selection_uses_first_column() {
        let sel = ColumnSelection::initial(&sample());
        assert_eq!(sel, ColumnSelection::new("t", "t"));
    }
}
