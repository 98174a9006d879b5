//! Snapshot data types.

use ev_core::{Time, hours};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Wire key carrying elapsed simulated time in hours.
pub const HOURS_ELAPSED_KEY: &str = "hoursElapsed";
/// Derived key added on decode.
pub const DAYS_ELAPSED_KEY: &str = "daysElapsed";
/// Per-state subject counts sent by the epidemic simulation.
pub const INFECTION_HISTOGRAM_KEY: &str = "infectionStateHistogram";

/// One decoded state report.
///
/// Fields are kept verbatim and in wire order. A snapshot is never mutated;
/// the next report produces a new one.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationSnapshot {
    fields: Map<String, Value>,
    hours_elapsed: Option<f64>,
    days_elapsed: Option<f64>,
}

impl SimulationSnapshot {
    pub(crate) fn new(
        fields: Map<String, Value>,
        hours_elapsed: Option<f64>,
        days_elapsed: Option<f64>,
    ) -> Self {
        Self {
            fields,
            hours_elapsed,
            days_elapsed,
        }
    }

    pub fn hours_elapsed(&self) -> Option<f64> {
        self.hours_elapsed
    }

    /// `hoursElapsed / 24`, or `None` when the report carried no time.
    pub fn days_elapsed(&self) -> Option<f64> {
        self.days_elapsed
    }

    pub fn elapsed(&self) -> Option<Time> {
        self.hours_elapsed.map(hours)
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Wire fields exactly as reported, without `daysElapsed`.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Wire fields plus the derived `daysElapsed`.
    pub fn to_json_value(&self) -> Value {
        let mut out = self.fields.clone();
        if let Some(days) = self.days_elapsed {
            out.insert(DAYS_ELAPSED_KEY.to_string(), Value::from(days));
        }
        Value::Object(out)
    }

    pub fn infection_state_histogram(&self) -> crate::ReportResult<Option<Vec<HistogramEntry>>> {
        let Some(raw) = self.fields.get(INFECTION_HISTOGRAM_KEY) else {
            return Ok(None);
        };
        let entries: Vec<HistogramEntry> =
            serde_json::from_value(raw.clone()).map_err(|e| crate::ReportError::MalformedHistogram {
                reason: e.to_string(),
            })?;
        Ok(Some(entries))
    }
}

/// Number of subjects in one infection state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramEntry {
    pub state: String,
    pub count: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode_report;
    use ev_core::{in_days, in_hours};

    #[test]
    fn elapsed_agrees_with_days_elapsed() {
        let snapshot = decode_report(r#"{"hoursElapsed": 36}"#).unwrap();
        let elapsed = snapshot.elapsed().unwrap();
        assert!((in_hours(elapsed) - 36.0).abs() < 1e-9);
        assert!((in_days(elapsed) - snapshot.days_elapsed().unwrap()).abs() < 1e-9);
    }

    #[test]
    fn elapsed_absent_without_hours() {
        let snapshot = decode_report(r#"{"other": 1}"#).unwrap();
        assert_eq!(snapshot.elapsed(), None);
        assert_eq!(snapshot.days_elapsed(), None);
    }
}
