//! Core library for the LED soft-start ramp simulator.
//!
//! The crate models a 2 second brightness ramp three ways (linear, cubic
//! ease-in-out, logarithmic) and exposes the pieces the rendering layer
//! builds on: the pure curve functions and their chart table, the
//! wall-clock-to-progress [`AnimationDriver`], and the
//! [`PresentationAdapter`] that turns per-tick snapshots into a view-model.
//! Rendering itself (chart widget, light panels) lives outside this crate
//! and only consumes the published values.

pub mod config;
pub mod curve;
pub mod driver;
pub mod error;
pub mod view;

pub use config::{AppConfig, ViewConfig};
pub use curve::{
    linear, logarithmic, s_curve, CurveKind, CurveSample, CurveTable, CURVE_TABLE_RESOLUTION,
};
pub use driver::{AnimationDriver, ProgressUpdate, RunState, RUN_DURATION_MS};
pub use error::{Result, SoftStartError};
pub use view::{
    ActiveCurveSelector, ChartHighlight, CurveReadout, PresentationAdapter, ViewModel,
};
