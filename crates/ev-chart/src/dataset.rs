//! Chart datasets and the data sources that produce them.

use crate::config::DataSource;
use crate::error::{ChartError, ChartResult};
use chrono::NaiveDate;
use ev_core::{ensure_magnitude, max_value};
use ev_report::HistogramEntry;
use std::fs;

/// Shown until live data is bound to the chart.
pub const DEFAULT_DATASET: [f64; 9] = [80.0, 100.0, 56.0, 120.0, 180.0, 30.0, 40.0, 120.0, 160.0];

/// One bar: its magnitude plus what the x axis should say about it.
#[derive(Debug, Clone, PartialEq)]
pub struct Datum {
    pub value: f64,
    pub label: Option<String>,
    pub date: Option<NaiveDate>,
}

impl Datum {
    pub fn new(value: f64) -> Self {
        Self {
            value,
            label: None,
            date: None,
        }
    }

    pub fn labelled(label: impl Into<String>, value: f64) -> Self {
        Self {
            value,
            label: Some(label.into()),
            date: None,
        }
    }

    pub fn dated(date: NaiveDate, value: f64) -> Self {
        Self {
            value,
            label: None,
            date: Some(date),
        }
    }
}

/// Ordered bars. Every magnitude is finite and non-negative.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChartDataset {
    points: Vec<Datum>,
}

impl ChartDataset {
    pub fn new(values: impl IntoIterator<Item = f64>) -> ChartResult<Self> {
        Self::from_points(values.into_iter().map(Datum::new).collect())
    }

    pub fn from_points(points: Vec<Datum>) -> ChartResult<Self> {
        for (index, point) in points.iter().enumerate() {
            ensure_magnitude(point.value, "bar magnitude").map_err(|_| {
                ChartError::InvalidDataset {
                    index,
                    value: point.value,
                }
            })?;
        }
        Ok(Self { points })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// [`DEFAULT_DATASET`] as a dataset.
    pub fn illustrative() -> Self {
        Self {
            points: DEFAULT_DATASET.iter().copied().map(Datum::new).collect(),
        }
    }

    /// One bar per infection state, labelled with the state name.
    pub fn from_histogram(entries: &[HistogramEntry]) -> ChartResult<Self> {
        Self::from_points(
            entries
                .iter()
                .map(|entry| Datum::labelled(entry.state.clone(), entry.count))
                .collect(),
        )
    }

    /// Parse `date,value` CSV text. Columns may appear in any order; extra
    /// columns are ignored and blank lines skipped.
    pub fn from_csv(text: &str, date_format: &str) -> ChartResult<Self> {
        let mut lines = text
            .lines()
            .enumerate()
            .map(|(i, line)| (i + 1, line.trim()))
            .filter(|(_, line)| !line.is_empty());

        let Some((header_line, header)) = lines.next() else {
            return Ok(Self::empty());
        };
        let columns: Vec<&str> = header.split(',').map(str::trim).collect();
        let column = |name: &str| {
            columns
                .iter()
                .position(|c| c.eq_ignore_ascii_case(name))
                .ok_or_else(|| ChartError::DataFile {
                    line: header_line,
                    reason: format!("header has no '{name}' column"),
                })
        };
        let date_col = column("date")?;
        let value_col = column("value")?;

        let mut points = Vec::new();
        for (line_no, line) in lines {
            let cells: Vec<&str> = line.split(',').map(str::trim).collect();
            let cell = |col: usize| {
                cells.get(col).copied().ok_or_else(|| ChartError::DataFile {
                    line: line_no,
                    reason: format!("expected {} columns, found {}", columns.len(), cells.len()),
                })
            };
            let raw_date = cell(date_col)?;
            let raw_value = cell(value_col)?;
            let date = NaiveDate::parse_from_str(raw_date, date_format).map_err(|e| {
                ChartError::DataFile {
                    line: line_no,
                    reason: format!("date '{raw_date}': {e}"),
                }
            })?;
            let value: f64 = raw_value.parse().map_err(|_| ChartError::DataFile {
                line: line_no,
                reason: format!("value '{raw_value}' is not a number"),
            })?;
            points.push(Datum::dated(date, value));
        }

        Self::from_points(points)
    }

    pub fn points(&self) -> &[Datum] {
        &self.points
    }

    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.value).collect()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn max(&self) -> Option<f64> {
        max_value(&self.values())
    }
}

impl DataSource {
    pub fn load(&self) -> ChartResult<ChartDataset> {
        match self {
            DataSource::Literal { values } => ChartDataset::new(values.iter().copied()),
            DataSource::ExternalFile { path, date_format } => {
                let text = fs::read_to_string(path)?;
                ChartDataset::from_csv(&text, date_format)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn illustrative_matches_default_values() {
        let dataset = ChartDataset::illustrative();
        assert_eq!(dataset.len(), 9);
        assert_eq!(dataset.values(), DEFAULT_DATASET.to_vec());
        assert_eq!(dataset.max(), Some(180.0));
        assert_eq!(DataSource::default().load().unwrap(), dataset);
    }

    #[test]
    fn rejects_negative_and_non_finite() {
        assert!(matches!(
            ChartDataset::new([-1.0, 5.0, 10.0]),
            Err(ChartError::InvalidDataset { index: 0, value }) if value == -1.0
        ));
        assert!(matches!(
            ChartDataset::new([1.0, f64::NAN]),
            Err(ChartError::InvalidDataset { index: 1, .. })
        ));
        assert!(ChartDataset::new([1.0, f64::INFINITY]).is_err());
    }

    #[test]
    fn empty_is_valid() {
        let dataset = ChartDataset::new(Vec::new()).unwrap();
        assert!(dataset.is_empty());
        assert_eq!(dataset.max(), None);
    }

    #[test]
    fn histogram_bars_keep_state_labels() {
        let entries = vec![
            HistogramEntry {
                state: "Susceptible".to_string(),
                count: 4990.0,
            },
            HistogramEntry {
                state: "Infected".to_string(),
                count: 10.0,
            },
        ];
        let dataset = ChartDataset::from_histogram(&entries).unwrap();
        assert_eq!(dataset.values(), vec![4990.0, 10.0]);
        assert_eq!(dataset.points()[1].label.as_deref(), Some("Infected"));
    }

    #[test]
    fn csv_parses_dates_and_values() {
        let text = "date,value\n2013-01-01,53\n\n2013-02-01, 165\n";
        let dataset = ChartDataset::from_csv(text, "%Y-%m-%d").unwrap();
        assert_eq!(dataset.values(), vec![53.0, 165.0]);
        assert_eq!(
            dataset.points()[1].date,
            NaiveDate::from_ymd_opt(2013, 2, 1)
        );
    }

    #[test]
    fn csv_column_order_is_free() {
        let text = "value,date\n7,2020-03-01";
        let dataset = ChartDataset::from_csv(text, "%Y-%m-%d").unwrap();
        assert_eq!(dataset.values(), vec![7.0]);
    }

    #[test]
    fn csv_errors_carry_line_numbers() {
        let err = ChartDataset::from_csv("date,amount\n", "%Y-%m-%d").unwrap_err();
        assert!(matches!(err, ChartError::DataFile { line: 1, .. }));

        let err = ChartDataset::from_csv("date,value\n2013-01-01,53\n2013-13-01,1", "%Y-%m-%d")
            .unwrap_err();
        assert!(matches!(err, ChartError::DataFile { line: 3, .. }));

        let err = ChartDataset::from_csv("date,value\n2013-01-01,lots", "%Y-%m-%d").unwrap_err();
        assert!(matches!(err, ChartError::DataFile { line: 2, .. }));

        let err = ChartDataset::from_csv("date,value\n2013-01-01", "%Y-%m-%d").unwrap_err();
        assert!(matches!(err, ChartError::DataFile { line: 2, .. }));

        let err = ChartDataset::from_csv("date,value\n2013-01-01,-4", "%Y-%m-%d").unwrap_err();
        assert!(matches!(err, ChartError::InvalidDataset { index: 0, .. }));
    }
}
