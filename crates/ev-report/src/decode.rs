//! State report decoding.

use crate::observer::{LogObserver, SnapshotObserver};
use crate::types::{HOURS_ELAPSED_KEY, SimulationSnapshot};
use crate::{ReportError, ReportResult};
use ev_core::hours_to_days;
use serde_json::Value;
use std::fmt;

/// Decode one serialized state report.
///
/// Pure: nothing is logged and no observer is involved.
pub fn decode_report(payload: &str) -> ReportResult<SimulationSnapshot> {
    let value: Value = serde_json::from_str(payload)?;
    let fields = match value {
        Value::Object(fields) => fields,
        other => {
            return Err(ReportError::NotAnObject {
                found: json_kind(&other),
            });
        }
    };

    let hours_elapsed = match fields.get(HOURS_ELAPSED_KEY) {
        None => None,
        Some(raw) => match raw.as_f64() {
            Some(h) if h.is_finite() && h >= 0.0 => Some(h),
            _ => {
                return Err(ReportError::InvalidHoursElapsed {
                    value: raw.to_string(),
                });
            }
        },
    };
    let days_elapsed = hours_elapsed.map(hours_to_days);

    Ok(SimulationSnapshot::new(fields, hours_elapsed, days_elapsed))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Decoder with an observer list notified after every successful decode.
pub struct StateDecoder {
    observers: Vec<Box<dyn SnapshotObserver>>,
}

impl StateDecoder {
    /// Decoder without observers.
    pub fn new() -> Self {
        Self {
            observers: Vec::new(),
        }
    }

    /// Decoder that logs every snapshot through [`LogObserver`].
    pub fn with_logging() -> Self {
        Self::new().with_observer(LogObserver)
    }

    pub fn with_observer(mut self, observer: impl SnapshotObserver + 'static) -> Self {
        self.observers.push(Box::new(observer));
        self
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    pub fn decode(&self, payload: &str) -> ReportResult<SimulationSnapshot> {
        let snapshot = decode_report(payload)?;
        for observer in &self.observers {
            observer.on_snapshot(&snapshot);
        }
        Ok(snapshot)
    }
}

impl Default for StateDecoder {
    fn default() -> Self {
        Self::with_logging()
    }
}

impl fmt::Debug for StateDecoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateDecoder")
            .field("observers", &self.observers.len())
            .finish()
    }
}
