//! Browser exports.
//!
//! The page calls `installBridge` once before starting the simulation module;
//! the module then calls `ccToJs_reportSimulationStateJson` by name. Keep the
//! export names in sync with the simulation's imports.

use crate::{BridgeConfig, SimulationBridge};
use ev_chart::{Document, SvgSurface};
use std::cell::RefCell;
use wasm_bindgen::prelude::*;

thread_local! {
    static BRIDGE: RefCell<Option<SimulationBridge>> = const { RefCell::new(None) };
}

/// Build a bridge from JSON config, draw the bootstrap data and make it the
/// target of reports. Replaces any previously installed bridge.
#[wasm_bindgen(js_name = installBridge)]
pub fn install_bridge(config_json: &str) -> Result<(), JsError> {
    let config = BridgeConfig::from_json_str(config_json).map_err(to_js)?;
    let document = Document::new().with_surface(config.chart.selector.clone(), SvgSurface::new());
    let mut bridge = SimulationBridge::new(config, document).map_err(to_js)?;
    bridge.bootstrap().map_err(to_js)?;
    BRIDGE.with(|slot| *slot.borrow_mut() = Some(bridge));
    Ok(())
}

#[wasm_bindgen(js_name = ccToJs_reportSimulationStateJson)]
pub fn report_simulation_state_json(json: &str) -> Result<(), JsError> {
    BRIDGE.with(|slot| {
        let mut slot = slot.borrow_mut();
        let bridge = slot
            .as_mut()
            .ok_or_else(|| JsError::new("installBridge must be called before reporting"))?;
        bridge.report_simulation_state_json(json).map_err(to_js)?;
        Ok(())
    })
}

/// Current chart as SVG text, for the page to place into its `<svg>` host.
#[wasm_bindgen(js_name = chartMarkup)]
pub fn chart_markup() -> Option<String> {
    BRIDGE.with(|slot| slot.borrow().as_ref().and_then(SimulationBridge::svg_markup))
}

fn to_js(err: impl std::fmt::Display) -> JsError {
    JsError::new(&err.to_string())
}
