use thiserror::Error;

/// Guidance shown next to every error message.
pub const GUIDANCE: &str =
    "Check that the file is a valid CSV and that the time and brightness columns are selected correctly.";

/// Everything that can go wrong between raw bytes and a rendered curve.
#[derive(Error, Debug)]
pub enum CurveError {
    #[error("Failed to parse CSV: {0}")]
    Parse(#[from] csv::Error),

    #[error("Failed to parse CSV: the file is empty")]
    EmptyFile,

    #[error("No {role} column selected")]
    NoColumnSelected { role: &'static str },

    #[error("Column '{0}' not found in the file")]
    ColumnNotFound(String),

    #[error("Column '{column}' has non-numeric value '{value}' at row {row}")]
    NonNumeric {
        column: String,
        row: usize,
        value: String,
    },

    #[error("Column '{0}' contains no numeric values")]
    NoNumericData(String),

    #[error("The file has a header but no data rows")]
    EmptyDataset,
}

/// Coarse error categories, one per failure class the UI distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Parse,
    Column,
    Type,
    EmptyDataset,
}

impl CurveError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CurveError::Parse(_) | CurveError::EmptyFile => ErrorKind::Parse,
            CurveError::NoColumnSelected { .. } | CurveError::ColumnNotFound(_) => {
                ErrorKind::Column
            }
            CurveError::NonNumeric { .. } | CurveError::NoNumericData(_) => ErrorKind::Type,
            CurveError::EmptyDataset => ErrorKind::EmptyDataset,
        }
    }

    /// What the user should check before trying again.
    pub fn guidance(&self) -> &'static str {
        GUIDANCE
    }
}

pub type Result<T, E = CurveError> = std::result::Result<T, E>;
