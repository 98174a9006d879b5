//! ev-report: decoding of simulation state reports.
//!
//! The simulation module hands over one JSON object per reporting tick. This
//! crate turns it into an immutable [`SimulationSnapshot`] and notifies any
//! registered [`SnapshotObserver`]s. Decoding itself has no side effects.

pub mod decode;
pub mod observer;
pub mod types;

pub use decode::{StateDecoder, decode_report};
pub use observer::{LogObserver, SnapshotObserver, day_count_line};
pub use types::*;

pub type ReportResult<T> = Result<T, ReportError>;

#[derive(thiserror::Error, Debug)]
pub enum ReportError {
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Parse error: state report must be a JSON object, found {found}")]
    NotAnObject { found: &'static str },

    #[error("Invalid hoursElapsed: {value} (expected a finite non-negative number)")]
    InvalidHoursElapsed { value: String },

    #[error("Malformed infectionStateHistogram: {reason}")]
    MalformedHistogram { reason: String },
}
