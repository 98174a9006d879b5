//! Axis tick layout.

use crate::config::XAxisKind;
use crate::dataset::{ChartDataset, Datum};
use crate::geometry::ChartGeometry;
use std::fmt::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisOrient {
    Bottom,
    Left,
}

/// One tick: offset along the axis and its text.
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub offset: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    pub orient: AxisOrient,
    /// Translation of the axis group inside the margin group.
    pub translate: (f64, f64),
    /// Pixel extent of the axis line.
    pub extent: (f64, f64),
    pub ticks: Vec<Tick>,
}

impl Axis {
    /// Bottom axis: one tick per bar, centred on its band.
    pub fn x(geometry: &ChartGeometry, dataset: &ChartDataset, kind: &XAxisKind) -> Self {
        let ticks = dataset
            .points()
            .iter()
            .enumerate()
            .filter_map(|(index, point)| {
                geometry.x.center(index).map(|offset| Tick {
                    offset,
                    label: x_label(index, point, kind),
                })
            })
            .collect();

        Self {
            orient: AxisOrient::Bottom,
            translate: (0.0, geometry.usable_height),
            extent: (0.0, geometry.usable_width),
            ticks,
        }
    }

    /// Left axis over the linear scale's domain.
    pub fn y(geometry: &ChartGeometry, tick_count: usize) -> Self {
        let ticks = geometry
            .y
            .ticks(tick_count)
            .into_iter()
            .map(|value| Tick {
                offset: geometry.y.scale(value),
                label: format!("{value}"),
            })
            .collect();

        Self {
            orient: AxisOrient::Left,
            translate: (0.0, 0.0),
            extent: (geometry.usable_height, 0.0),
            ticks,
        }
    }
}

fn x_label(index: usize, point: &Datum, kind: &XAxisKind) -> String {
    match kind {
        XAxisKind::Categorical => point.label.clone().unwrap_or_else(|| index.to_string()),
        XAxisKind::Temporal { tick_format } => {
            let Some(date) = point.date else {
                return index.to_string();
            };
            let mut label = String::new();
            // chrono reports bad format items as fmt::Error; fall back to the index.
            match write!(label, "{}", date.format(tick_format)) {
                Ok(()) => label,
                Err(_) => index.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ChartConfig;
    use crate::surface::SurfaceSize;
    use chrono::NaiveDate;

    fn geometry(dataset: &ChartDataset) -> ChartGeometry {
        ChartGeometry::compute(&ChartConfig::default(), SurfaceSize::new(600.0, 300.0), dataset)
            .unwrap()
    }

    #[test]
    fn categorical_ticks_per_bar() {
        let dataset = ChartDataset::illustrative();
        let axis = Axis::x(&geometry(&dataset), &dataset, &XAxisKind::Categorical);
        assert_eq!(axis.ticks.len(), 9);
        assert_eq!(axis.ticks[0].label, "0");
        assert_eq!(axis.ticks[0].offset, 27.0);
        assert_eq!(axis.ticks[8].label, "8");
        assert_eq!(axis.translate, (0.0, 210.0));
    }

    #[test]
    fn categorical_uses_labels() {
        let dataset = ChartDataset::from_points(vec![
            Datum::labelled("Susceptible", 10.0),
            Datum::new(3.0),
        ])
        .unwrap();
        let axis = Axis::x(&geometry(&dataset), &dataset, &XAxisKind::Categorical);
        assert_eq!(axis.ticks[0].label, "Susceptible");
        assert_eq!(axis.ticks[1].label, "1");
    }

    #[test]
    fn temporal_ticks_format_dates() {
        let dataset = ChartDataset::from_points(vec![
            Datum::dated(NaiveDate::from_ymd_opt(2013, 1, 1).unwrap(), 53.0),
            Datum::new(3.0),
        ])
        .unwrap();
        let kind = XAxisKind::Temporal {
            tick_format: "%Y-%m".to_string(),
        };
        let axis = Axis::x(&geometry(&dataset), &dataset, &kind);
        assert_eq!(axis.ticks[0].label, "2013-01");
        assert_eq!(axis.ticks[1].label, "1");
    }

    #[test]
    fn y_ticks_follow_scale() {
        let dataset = ChartDataset::illustrative();
        let axis = Axis::y(&geometry(&dataset), 10);
        assert_eq!(axis.ticks.len(), 10);
        assert_eq!(axis.ticks[0].label, "0");
        assert_eq!(axis.ticks[0].offset, 210.0);
        assert_eq!(axis.ticks[9].label, "180");
        assert_eq!(axis.ticks[9].offset, 0.0);
    }

    #[test]
    fn empty_dataset_has_no_x_ticks() {
        let dataset = ChartDataset::empty();
        let geometry = geometry(&dataset);
        assert!(Axis::x(&geometry, &dataset, &XAxisKind::Categorical).ticks.is_empty());
        assert_eq!(Axis::y(&geometry, 10).ticks.len(), 1);
    }
}
