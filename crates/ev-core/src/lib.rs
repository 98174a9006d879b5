//! ev-core: shared foundation for epiviz.
//!
//! Contains:
//! - units (uom simulated-time types + constructors)
//! - numeric (finite / magnitude checks)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{EvError, EvResult};
pub use numeric::*;
pub use units::*;
