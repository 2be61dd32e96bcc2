use serde::Serialize;

use super::error::{CurveError, Result};
use super::model::{is_missing, CellValue, ColumnSelection, Dataset};

// ---------------------------------------------------------------------------
// SummaryStatistics
// ---------------------------------------------------------------------------

/// Summary of the brightness column of a light curve.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryStatistics {
    pub max: f64,
    pub min: f64,
    pub mean: f64,
    /// Number of rows in the dataset, missing brightness values included.
    pub count: usize,
    /// Time value of the first row holding the maximum brightness.
    pub peak_time: CellValue,
    /// Row index of that maximum.
    pub peak_row: usize,
}

/// Compute max, min, mean, row count and time-of-peak for the selected
/// columns.
///
/// Missing brightness cells (empty or an NA marker) are skipped by the
/// aggregates but still counted as rows. When several rows share the
/// maximum, the first one wins.
pub fn compute_statistics(
    dataset: &Dataset,
    selection: &ColumnSelection,
) -> Result<SummaryStatistics> {
    resolve_columns(dataset, selection)?;
    if dataset.is_empty() {
        return Err(CurveError::EmptyDataset);
    }
    let brightness = numeric_column(dataset, &selection.brightness)?;

    let mut mean = 0.0;
    let mut n = 0usize;
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut peak_row = None;
    let (mut pos_inf, mut neg_inf) = (false, false);

    for (row, value) in brightness.iter().enumerate() {
        let Some(v) = *value else {
            continue;
        };
        n += 1;
        min = min.min(v);
        if peak_row.is_none() || v > max {
            max = v;
            peak_row = Some(row);
        }
        if v.is_infinite() {
            pos_inf |= v > 0.0;
            neg_inf |= v < 0.0;
            continue;
        }
        // Running mean; dividing both terms first keeps it finite near f64::MAX.
        let k = n as f64;
        mean += v / k - mean / k;
    }

    let Some(peak_row) = peak_row else {
        return Err(CurveError::NoNumericData(selection.brightness.clone()));
    };

    let mean = match (pos_inf, neg_inf) {
        (true, true) => f64::NAN,
        (true, false) => f64::INFINITY,
        (false, true) => f64::NEG_INFINITY,
        // Rounding may land an ulp outside the observed range.
        (false, false) => mean.clamp(min, max),
    };

    let peak_time = dataset
        .cell(peak_row, &selection.time)
        .unwrap_or(CellValue::Null);
    log::debug!(
        "Statistics for '{}': max={max} min={min} n={n} peak_row={peak_row}",
        selection.brightness
    );

    Ok(SummaryStatistics {
        max,
        min,
        mean,
        count: dataset.len(),
        peak_time,
        peak_row,
    })
}

// ---------------------------------------------------------------------------
// Shared column helpers
// ---------------------------------------------------------------------------

/// Check the selection against the header; returns (time, brightness) indices.
pub(crate) fn resolve_columns(
    dataset: &Dataset,
    selection: &ColumnSelection,
) -> Result<(usize, usize)> {
    let lookup = |name: &str, role: &'static str| -> Result<usize> {
        if name.is_empty() {
            return Err(CurveError::NoColumnSelected { role });
        }
        dataset
            .column_index(name)
            .ok_or_else(|| CurveError::ColumnNotFound(name.to_string()))
    };
    let time = lookup(&selection.time, "time")?;
    let brightness = lookup(&selection.brightness, "brightness")?;
    Ok((time, brightness))
}

/// Parse every cell of a column as `f64`; `None` marks a missing value.
pub(crate) fn numeric_column(dataset: &Dataset, column: &str) -> Result<Vec<Option<f64>>> {
    let cells = dataset
        .column(column)
        .ok_or_else(|| CurveError::ColumnNotFound(column.to_string()))?;

    cells
        .enumerate()
        .map(|(row, raw)| {
            let trimmed = raw.trim();
            if is_missing(trimmed) {
                return Ok(None);
            }
            match trimmed.parse::<f64>() {
                Ok(v) if v.is_nan() => Ok(None),
                Ok(v) => Ok(Some(v)),
                Err(_) => Err(CurveError::NonNumeric {
                    column: column.to_string(),
                    row,
                    value: raw.to_string(),
                }),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::error::ErrorKind;
    use crate::data::loader::parse_csv;

    fn stats(csv: &str, time: &str, brightness: &str) -> Result<SummaryStatistics> {
        let ds = parse_csv(csv.as_bytes()).unwrap();
        compute_statistics(&ds, &ColumnSelection::new(time, brightness))
    }

    #[test]
    fn basic_light_curve() {
        let s = stats("t,b\n0,1.0\n1,5.0\n2,2.0\n", "t", "b").unwrap();
        assert_eq!(s.max, 5.0);
        assert_eq!(s.min, 1.0);
        assert!((s.mean - 8.0 / 3.0).abs() < 1e-12);
        assert_eq!(s.count, 3);
        assert_eq!(s.peak_time, CellValue::Integer(1));
        assert_eq!(s.peak_row, 1);
    }

    #[test]
    fn ties_take_first_maximum() {
        let s = stats("t,b\n10,3\n20,7\n30,7\n40,1\n", "t", "b").unwrap();
        assert_eq!(s.peak_time, CellValue::Integer(20));
        assert_eq!(s.peak_row, 1);
    }

    #[test]
    fn negative_values_and_text_time() {
        let s = stats(
            "date,mag\n2024-01-01,-3.5\n2024-01-02,-1.25\n",
            "date",
            "mag",
        )
        .unwrap();
        assert_eq!(s.max, -1.25);
        assert_eq!(s.peak_time, CellValue::Text("2024-01-02".into()));
    }

    #[test]
    fn missing_cells_are_skipped_but_counted() {
        let s = stats("t,b\n0,2\n1,\n2,NaN\n3,4\n", "t", "b").unwrap();
        assert_eq!(s.count, 4);
        assert_eq!(s.mean, 3.0);
        assert_eq!(s.min, 2.0);
        assert_eq!(s.peak_time, CellValue::Integer(3));
    }

    #[test]
    fn all_missing_is_a_type_error() {
        let err = stats("t,b\n0,\n1,NA\n", "t", "b").unwrap_err();
        assert!(matches!(err, CurveError::NoNumericData(ref c) if c == "b"));
        assert_eq!(err.kind(), ErrorKind::Type);
    }

    #[test]
    fn non_numeric_brightness_is_a_type_error() {
        let err = stats("t,b\n0,1\n1,bright\n", "t", "b").unwrap_err();
        match err {
            CurveError::NonNumeric { column, row, value } => {
                assert_eq!(column, "b");
                assert_eq!(row, 1);
                assert_eq!(value, "bright");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn unknown_column_is_a_column_error() {
        let err = stats("t,b\n0,1\n", "t", "flux").unwrap_err();
        assert!(matches!(err, CurveError::ColumnNotFound(ref c) if c == "flux"));

        let err = stats("t,b\n0,1\n", "", "b").unwrap_err();
        assert!(matches!(err, CurveError::NoColumnSelected { role: "time" }));
    }

    #[test]
    fn header_only_is_empty_dataset() {
        let err = stats("t,b\n", "t", "b").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::EmptyDataset);
    }

    #[test]
    fn mean_of_equal_values_stays_within_range() {
        let s = stats("t,b\n0,0.1\n1,0.1\n2,0.1\n", "t", "b").unwrap();
        assert!(s.min <= s.mean && s.mean <= s.max);
        assert_eq!(s.mean, 0.1);

        let s = stats("t,b\n0,0.7\n1,0.7\n2,0.7\n3,0.7\n4,0.7\n5,0.7\n6,0.7\n7,0.7\n8,0.7\n9,0.7\n", "t", "b").unwrap();
        assert_eq!(s.mean, 0.7);
    }

    #[test]
    fn mean_does_not_overflow_near_f64_max() {
        let s = stats("t,b\n0,1e308\n1,1e308\n", "t", "b").unwrap();
        assert!(s.mean.is_finite());
        assert_eq!(s.mean, 1e308);

        let s = stats("t,b\n0,-1e308\n1,1e308\n", "t", "b").unwrap();
        assert_eq!(s.mean, 0.0);
    }

    #[test]
    fn infinite_brightness_propagates_to_mean() {
        let s = stats("t,b\n0,1\n1,inf\n2,3\n", "t", "b").unwrap();
        assert_eq!(s.mean, f64::INFINITY);
        assert_eq!(s.max, f64::INFINITY);
        assert_eq!(s.peak_row, 1);
    }

    #[test]
    fn pandas_na_markers_are_missing() {
        let s = stats("t,b\n0,NULL\n1,2\n2,n/a\n3,None\n4,#N/A\n5,4\n6,<NA>\n", "t", "b").unwrap();
        assert_eq!(s.count, 7);
        assert_eq!(s.min, 2.0);
        assert_eq!(s.mean, 3.0);
        assert_eq!(s.peak_time, CellValue::Integer(5));
    }

    #[test]
    fn serializes_for_export() {
        let s = stats("t,b\n0.5,2\n1.5,4\n", "t", "b").unwrap();
        let json = serde_json::to_value(&s).unwrap();
        assert_eq!(json["max"], 4.0);
        assert_eq!(json["count"], 2);
        assert_eq!(json["peak_time"], 1.5);
        assert_eq!(json["peak_row"], 1);
    }

    #[test]
    fn same_column_for_time_and_brightness() {
        let s = stats("b\n4\n9\n", "b", "b").unwrap();
        assert_eq!(s.peak_time, CellValue::Integer(9));
    }
}
