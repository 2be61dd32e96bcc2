use super::error::{CurveError, Result};
use super::model::{is_missing, ColumnSelection, Dataset};
use super::stats::{numeric_column, resolve_columns};

/// How the time column maps onto the x axis.
#[derive(Debug, Clone, PartialEq)]
pub enum TimeAxis {
    /// Every time cell is a number and is used directly as x.
    Numeric,
    /// Time cells are text (dates, labels): x is the row position and these
    /// are the tick labels, one per row.
    Categorical(Vec<String>),
}

/// The (x, y) pairs for the line chart, plus labels.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub axis: TimeAxis,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl ChartSeries {
    /// Points in the `[x, y]` form the plot widget consumes.
    pub fn points(&self) -> Vec<[f64; 2]> {
        self.x.iter().zip(&self.y).map(|(&x, &y)| [x, y]).collect()
    }

    /// Tick label for an x position, when the axis is categorical.
    pub fn tick_label(&self, x: f64) -> Option<&str> {
        match &self.axis {
            TimeAxis::Numeric => None,
            TimeAxis::Categorical(labels) => {
                if x < 0.0 || x.fract() != 0.0 {
                    return None;
                }
                labels.get(x as usize).map(String::as_str)
            }
        }
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

/// Build the line-chart series for the selected columns.
///
/// Rows whose brightness is missing are left out of the series.
pub fn chart_series(dataset: &Dataset, selection: &ColumnSelection) -> Result<ChartSeries> {
    let (time_idx, _) = resolve_columns(dataset, selection)?;
    if dataset.is_empty() {
        return Err(CurveError::EmptyDataset);
    }
    let brightness = numeric_column(dataset, &selection.brightness)?;

    let numeric_time: Option<Vec<f64>> = dataset
        .rows()
        .iter()
        .map(|row| {
            let cell = row[time_idx].trim();
            if is_missing(cell) {
                return None;
            }
            cell.parse::<f64>().ok()
        })
        .collect();

    let (axis, time_x) = match numeric_time {
        Some(xs) => (TimeAxis::Numeric, xs),
        None => {
            let labels: Vec<String> = dataset.rows().iter().map(|r| r[time_idx].clone()).collect();
            let xs = (0..labels.len()).map(|i| i as f64).collect();
            (TimeAxis::Categorical(labels), xs)
        }
    };

    let (x, y): (Vec<f64>, Vec<f64>) = time_x
        .into_iter()
        .zip(brightness)
        .filter_map(|(x, y)| y.map(|y| (x, y)))
        .unzip();

    Ok(ChartSeries {
        title: format!(
            "Light curve ({} vs {})",
            selection.brightness, selection.time
        ),
        x_label: "Time".to_string(),
        y_label: "Brightness".to_string(),
        axis,
        x,
        y,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::error::ErrorKind;
    use crate::data::loader::parse_csv;

    fn series(csv: &str, time: &str, brightness: &str) -> Result<ChartSeries> {
        let ds = parse_csv(csv.as_bytes()).unwrap();
        chart_series(&ds, &ColumnSelection::new(time, brightness))
    }

    #[test]
    fn numeric_time_is_used_as_x() {
        let s = series("hjd,mag\n0.5,1\n1.5,5\n2.5,2\n", "hjd", "mag").unwrap();
        assert_eq!(s.axis, TimeAxis::Numeric);
        assert_eq!(s.points(), vec![[0.5, 1.0], [1.5, 5.0], [2.5, 2.0]]);
        assert_eq!(s.title, "Light curve (mag vs hjd)");
        assert_eq!(s.tick_label(1.0), None);
    }

    #[test]
    fn text_time_becomes_categorical() {
        let s = series("date,mag\nmon,1\ntue,2\n", "date", "mag").unwrap();
        assert_eq!(s.x, vec![0.0, 1.0]);
        assert_eq!(s.tick_label(1.0), Some("tue"));
        assert_eq!(s.tick_label(0.5), None);
        assert_eq!(s.tick_label(7.0), None);
    }

    #[test]
    fn missing_brightness_rows_are_dropped() {
        let s = series("t,b\n0,1\n1,\n2,3\n", "t", "b").unwrap();
        assert_eq!(s.x, vec![0.0, 2.0]);
        assert_eq!(s.y, vec![1.0, 3.0]);
        assert_eq!(s.len(), 2);
    }

    #[test]
    fn same_checks_as_statistics() {
        assert_eq!(
            series("t,b\n0,x\n", "t", "b").unwrap_err().kind(),
            ErrorKind::Type
        );
        assert_eq!(
            series("t,b\n0,1\n", "q", "b").unwrap_err().kind(),
            ErrorKind::Column
        );
        assert_eq!(
            series("t,b\n", "t", "b").unwrap_err().kind(),
            ErrorKind::EmptyDataset
        );
    }
}
