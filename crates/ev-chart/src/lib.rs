//! Bar chart rendering for epiviz.
//!
//! This crate turns a sequence of magnitudes into a redrawable bar chart on
//! an SVG surface. Every render is a pure function of the dataset, the
//! surface size and the [`ChartConfig`]; the previous scene on the surface is
//! replaced wholesale.
//!
//! # Pipeline
//!
//! - [`ChartDataset`]: validated magnitudes (finite, non-negative), with
//!   optional category labels or dates
//! - [`ChartGeometry`]: margins, usable extent, [`BandScale`] and
//!   [`LinearScale`], recomputed on every render
//! - [`Axis`]: categorical or temporal x ticks, linear y ticks
//! - [`ChartScene`]: the drawable result stored on an [`SvgSurface`]
//!
//! Surfaces live in a [`Document`] and are looked up by selector, so several
//! independent charts can coexist.

pub mod axis;
pub mod config;
pub mod dataset;
pub mod error;
pub mod geometry;
pub mod render;
pub mod scale;
pub mod surface;

pub use axis::{Axis, AxisOrient, Tick};
pub use config::{BarHeightMode, ChartConfig, DataSource, Margin, XAxisKind};
pub use dataset::{ChartDataset, DEFAULT_DATASET, Datum};
pub use error::{ChartError, ChartResult};
pub use geometry::{BarGeometry, ChartGeometry};
pub use render::ChartRenderer;
pub use scale::{BandScale, LinearScale, MAX_TICKS};
pub use surface::{ChartScene, Document, SurfaceSize, SvgSurface};
