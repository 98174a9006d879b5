//! Bridge configuration.

use crate::BridgeResult;
use ev_chart::ChartConfig;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct BridgeConfig {
    #[serde(default)]
    pub chart: ChartConfig,
    #[serde(default)]
    pub binding: SnapshotBinding,
}

/// What a decoded snapshot does to the chart.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SnapshotBinding {
    /// Snapshots are only observed; the chart keeps its bootstrap data.
    #[default]
    LogOnly,
    /// Each snapshot's infection-state histogram replaces the chart data.
    InfectionHistogram,
}

impl BridgeConfig {
    pub fn from_json_str(text: &str) -> BridgeResult<Self> {
        let config: BridgeConfig = serde_json::from_str(text)?;
        config.chart.validate()?;
        Ok(config)
    }

    pub fn from_yaml_str(text: &str) -> BridgeResult<Self> {
        let config: BridgeConfig = serde_yaml::from_str(text)?;
        config.chart.validate()?;
        Ok(config)
    }
}
