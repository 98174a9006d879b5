//! Per-render chart geometry.

use crate::config::{BarHeightMode, ChartConfig, Margin};
use crate::dataset::ChartDataset;
use crate::error::{ChartError, ChartResult};
use crate::scale::{BandScale, LinearScale};
use crate::surface::SurfaceSize;

/// Derived layout for one render. Never kept across renders.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartGeometry {
    pub outer: SurfaceSize,
    pub margin: Margin,
    pub usable_width: f64,
    pub usable_height: f64,
    pub x: BandScale,
    pub y: LinearScale,
    pub bar_padding: f64,
}

/// Placement of one bar inside the margin group.
///
/// `x` is applied as a horizontal translation, the rest as rect attributes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarGeometry {
    pub index: usize,
    pub value: f64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl ChartGeometry {
    pub fn compute(
        config: &ChartConfig,
        outer: SurfaceSize,
        dataset: &ChartDataset,
    ) -> ChartResult<Self> {
        let margin = config.margin;
        let usable_width = outer.width - margin.left - margin.right;
        let usable_height = outer.height - margin.top - margin.bottom;
        if !(usable_width > 0.0 && usable_height > 0.0) {
            return Err(ChartError::InvalidSurface {
                selector: config.selector.clone(),
                reason: format!(
                    "{}x{} leaves no room inside the margins",
                    outer.width, outer.height
                ),
            });
        }

        let y_max = config
            .max_expected_value
            .unwrap_or_else(|| dataset.max().unwrap_or(0.0));

        Ok(Self {
            outer,
            margin,
            usable_width,
            usable_height,
            x: BandScale::new(dataset.len(), usable_width, config.band_padding),
            y: LinearScale::new((0.0, y_max), (usable_height, 0.0)),
            bar_padding: config.bar_padding,
        })
    }

    /// Drawn bar width: band width minus bar padding, never negative.
    pub fn bar_width(&self) -> f64 {
        (self.x.bandwidth() - self.bar_padding).max(0.0)
    }

    pub fn bars(&self, dataset: &ChartDataset, mode: BarHeightMode) -> Vec<BarGeometry> {
        let width = self.bar_width();
        let step = self.x.step();
        dataset
            .points()
            .iter()
            .enumerate()
            .map(|(index, point)| {
                let (y, height) = match mode {
                    BarHeightMode::Raw => (self.usable_height - point.value, point.value),
                    BarHeightMode::Scaled => {
                        let y = self.y.scale(point.value);
                        (y, self.usable_height - y)
                    }
                };
                BarGeometry {
                    index,
                    value: point.value,
                    x: step * index as f64,
                    y,
                    width,
                    height,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_geometry(dataset: &ChartDataset) -> ChartGeometry {
        ChartGeometry::compute(
            &ChartConfig::default(),
            SurfaceSize::new(600.0, 300.0),
            dataset,
        )
        .unwrap()
    }

    #[test]
    fn default_surface_extent() {
        let geometry = default_geometry(&ChartDataset::illustrative());
        assert_eq!(geometry.usable_width, 540.0);
        assert_eq!(geometry.usable_height, 210.0);
        assert_eq!(geometry.y.domain(), (0.0, 180.0));
        assert_eq!(geometry.bar_width(), 49.0);
    }

    // Raw mode keeps the 1:1 pixel mapping even though a y scale exists.
    #[test]
    fn raw_bars_ignore_linear_scale() {
        let dataset = ChartDataset::illustrative();
        let geometry = default_geometry(&dataset);
        let bars = geometry.bars(&dataset, BarHeightMode::Raw);

        assert_eq!(bars[4].value, 180.0);
        assert_eq!(bars[4].height, 180.0);
        assert_eq!(bars[4].y, 30.0);
        assert_ne!(bars[4].y, geometry.y.scale(180.0));
    }

    #[test]
    fn scaled_bars_fill_usable_height() {
        let dataset = ChartDataset::illustrative();
        let geometry = default_geometry(&dataset);
        let bars = geometry.bars(&dataset, BarHeightMode::Scaled);

        assert_eq!(bars[4].y, 0.0);
        assert_eq!(bars[4].height, 210.0);
        assert_eq!(bars[5].height, 35.0);
    }

    #[test]
    fn fixed_upper_bound_overrides_dataset_max() {
        let config = ChartConfig {
            max_expected_value: Some(420.0),
            ..ChartConfig::default()
        };
        let dataset = ChartDataset::illustrative();
        let geometry =
            ChartGeometry::compute(&config, SurfaceSize::new(600.0, 300.0), &dataset).unwrap();
        assert_eq!(geometry.y.domain(), (0.0, 420.0));
        let bars = geometry.bars(&dataset, BarHeightMode::Scaled);
        assert_eq!(bars[4].height, 90.0);
    }

    #[test]
    fn narrow_bands_clamp_width_to_zero() {
        let dataset = ChartDataset::new(vec![1.0; 200]).unwrap();
        let geometry = default_geometry(&dataset);
        assert_eq!(geometry.bar_width(), 0.0);
    }

    #[test]
    fn surface_smaller_than_margins_is_rejected() {
        let err = ChartGeometry::compute(
            &ChartConfig::default(),
            SurfaceSize::new(50.0, 300.0),
            &ChartDataset::illustrative(),
        )
        .unwrap_err();
        assert!(matches!(err, ChartError::InvalidSurface { .. }));
    }
}
