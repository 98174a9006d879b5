//! Full-redraw bar chart renderer.

use crate::axis::Axis;
use crate::config::ChartConfig;
use crate::dataset::ChartDataset;
use crate::error::{ChartError, ChartResult};
use crate::geometry::ChartGeometry;
use crate::surface::{ChartScene, Document, SurfaceSize};
use tracing::debug;

const CHART_CLASS: &str = "bar-chart";

/// Draws datasets onto the surface named by its config.
///
/// Holds no state between renders; the surface keeps only the last scene.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartRenderer {
    config: ChartConfig,
}

impl ChartRenderer {
    pub fn new(config: ChartConfig) -> ChartResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// Validate `values` and redraw. On error the surface is left untouched.
    pub fn render(&self, values: &[f64], document: &mut Document) -> ChartResult<ChartScene> {
        let dataset = ChartDataset::new(values.iter().copied())?;
        self.render_dataset(&dataset, document)
    }

    pub fn render_dataset(
        &self,
        dataset: &ChartDataset,
        document: &mut Document,
    ) -> ChartResult<ChartScene> {
        let selector = &self.config.selector;
        let surface = document
            .select_mut(selector)
            .ok_or_else(|| ChartError::InvalidSurface {
                selector: selector.clone(),
                reason: "selector matches no surface".to_string(),
            })?;

        let size = match surface.size() {
            Some(size) if size.is_drawable() => size,
            Some(size) => {
                return Err(ChartError::InvalidSurface {
                    selector: selector.clone(),
                    reason: format!("unusable dimensions {}x{}", size.width, size.height),
                });
            }
            None => SurfaceSize::new(self.config.width, self.config.height),
        };

        let scene = self.scene(dataset, size)?;
        surface.replace_scene(scene.clone());
        Ok(scene)
    }

    /// Load the configured data source and redraw.
    pub fn render_source(&self, document: &mut Document) -> ChartResult<ChartScene> {
        let dataset = self.config.data_source.load()?;
        self.render_dataset(&dataset, document)
    }

    /// Build a scene without touching any surface.
    pub fn scene(&self, dataset: &ChartDataset, size: SurfaceSize) -> ChartResult<ChartScene> {
        let geometry = ChartGeometry::compute(&self.config, size, dataset)?;
        let bars = geometry.bars(dataset, self.config.bar_height_mode);
        debug!(
            selector = %self.config.selector,
            bars = bars.len(),
            usable_width = geometry.usable_width,
            usable_height = geometry.usable_height,
            bar_width = geometry.bar_width(),
            "chart redrawn"
        );

        Ok(ChartScene {
            size,
            class: CHART_CLASS.to_string(),
            origin: (geometry.margin.left, geometry.margin.top),
            x_axis: Axis::x(&geometry, dataset, &self.config.x_axis),
            y_axis: Axis::y(&geometry, self.config.y_tick_count),
            bars,
        })
    }
}
