//! ev-bridge: the reporting entry point between the simulation module and
//! the chart.
//!
//! The simulation calls [`SimulationBridge::report_simulation_state_json`]
//! (exported to the page as [`REPORT_ENTRY_POINT`] with the `wasm` feature)
//! once per reporting tick. Each call decodes the report, notifies the
//! decoder's observers and, depending on [`SnapshotBinding`], redraws.

pub mod bridge;
pub mod config;
#[cfg(feature = "wasm")]
pub mod wasm;

pub use bridge::{ReportOutcome, SimulationBridge};
pub use config::{BridgeConfig, SnapshotBinding};

/// Name under which the simulation module looks up the reporting function.
pub const REPORT_ENTRY_POINT: &str = "ccToJs_reportSimulationStateJson";

pub type BridgeResult<T> = Result<T, BridgeError>;

#[derive(thiserror::Error, Debug)]
pub enum BridgeError {
    #[error(transparent)]
    Report(#[from] ev_report::ReportError),

    #[error(transparent)]
    Chart(#[from] ev_chart::ChartError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
