//! Sample interpolation methods for grid resampling.
//!
//! # Interpolation Modes
//!
//! - **Nearest**: uses the closest lattice sample, keeping the blocky look of the raw grid
//! - **Bilinear**: blends the four surrounding samples for a smooth gradient
//!
//! Both kernels clamp to the last valid row and column so a query never reads
//! outside the source lattice.

mod bilinear;

/// Mapping from output cells to fractional source coordinates.
pub mod grid;

pub(crate) mod interpolate;
mod nearest;

pub use bilinear::interpolate_at;
pub use grid::CoordinateMapping;
pub use interpolate::{interpolate_sample, InterpolationMode};
pub use nearest::nearest_at;
