#![deny(missing_docs)]
//! Sample grid types and the thermal camera frame model.

/// Error types for the grid module.
pub mod error;

/// thermal camera frames and frame series.
pub mod frame;

/// scalar sample grid representation.
pub mod grid;

pub use crate::error::GridError;
pub use crate::frame::{FrameSeries, ProbeReadings, ThermalFrame};
pub use crate::grid::{GridSize, GridView, SampleGrid, Sampler};
