//! Decode → observe → redraw.

use crate::BridgeResult;
use crate::config::{BridgeConfig, SnapshotBinding};
use ev_chart::{ChartDataset, ChartRenderer, ChartScene, Document};
use ev_report::StateDecoder;
use tracing::warn;

/// What one report did.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportOutcome {
    pub days_elapsed: Option<f64>,
    /// Bars drawn, or `None` when the chart was left as it was.
    pub redrawn_bars: Option<usize>,
}

/// Owns the decoder, the renderer and the document holding the surface.
///
/// Reports take `&mut self`: one report is fully handled before the next.
#[derive(Debug)]
pub struct SimulationBridge {
    decoder: StateDecoder,
    renderer: ChartRenderer,
    document: Document,
    binding: SnapshotBinding,
}

impl SimulationBridge {
    /// Bridge with a logging decoder.
    pub fn new(config: BridgeConfig, document: Document) -> BridgeResult<Self> {
        Ok(Self {
            decoder: StateDecoder::with_logging(),
            renderer: ChartRenderer::new(config.chart)?,
            document,
            binding: config.binding,
        })
    }

    pub fn with_decoder(mut self, decoder: StateDecoder) -> Self {
        self.decoder = decoder;
        self
    }

    pub fn binding(&self) -> SnapshotBinding {
        self.binding
    }

    pub fn renderer(&self) -> &ChartRenderer {
        &self.renderer
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Markup of the bridge's chart surface.
    pub fn svg_markup(&self) -> Option<String> {
        self.document.svg_markup(&self.renderer.config().selector)
    }

    /// First draw, from the configured data source.
    pub fn bootstrap(&mut self) -> BridgeResult<ChartScene> {
        Ok(self.renderer.render_source(&mut self.document)?)
    }

    pub fn report_simulation_state_json(&mut self, json: &str) -> BridgeResult<ReportOutcome> {
        let snapshot = self.decoder.decode(json)?;
        let days_elapsed = snapshot.days_elapsed();

        let redrawn_bars = match self.binding {
            SnapshotBinding::LogOnly => None,
            SnapshotBinding::InfectionHistogram => match snapshot.infection_state_histogram()? {
                Some(histogram) => {
                    let dataset = ChartDataset::from_histogram(&histogram)?;
                    let scene = self.renderer.render_dataset(&dataset, &mut self.document)?;
                    Some(scene.bars.len())
                }
                None => {
                    warn!("state report has no infectionStateHistogram; chart left unchanged");
                    None
                }
            },
        };

        Ok(ReportOutcome {
            days_elapsed,
            redrawn_bars,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ev_chart::SvgSurface;

    fn bridge(binding: SnapshotBinding) -> SimulationBridge {
        let config = BridgeConfig {
            binding,
            ..BridgeConfig::default()
        };
        let document = Document::new().with_surface("svg", SvgSurface::new());
        SimulationBridge::new(config, document).unwrap()
    }

    #[test]
    fn log_only_leaves_chart_alone() {
        let mut bridge = bridge(SnapshotBinding::LogOnly);
        bridge.bootstrap().unwrap();
        let before = bridge.svg_markup();

        let outcome = bridge
            .report_simulation_state_json(
                r#"{"hoursElapsed": 240, "infectionStateHistogram": [{"state": "Infected", "count": 3}]}"#,
            )
            .unwrap();

        assert_eq!(outcome.days_elapsed, Some(10.0));
        assert_eq!(outcome.redrawn_bars, None);
        assert_eq!(bridge.svg_markup(), before);
    }

    #[test]
    fn histogram_binding_without_histogram_keeps_chart() {
        let mut bridge = bridge(SnapshotBinding::InfectionHistogram);
        bridge.bootstrap().unwrap();

        let outcome = bridge.report_simulation_state_json(r#"{"hoursElapsed": 24}"#).unwrap();
        assert_eq!(outcome.redrawn_bars, None);
        assert_eq!(bridge.document().select("svg").unwrap().redraws(), 1);
    }
}
