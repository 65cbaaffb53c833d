use super::bilinear::interpolate_at;
use super::nearest::nearest_at;
use crate::scalar::Scalar;
use heatgrid_grid::Sampler;

/// Interpolation mode for the resample operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InterpolationMode {
    /// Bilinear interpolation
    #[default]
    Bilinear,
    /// Nearest neighbor interpolation
    Nearest,
}

/// Kernel for interpolating a sample value
///
/// # Arguments
///
/// * `sampler` - The source lattice.
/// * `x_max` - The last valid column index of the lattice.
/// * `y_max` - The last valid row index of the lattice.
/// * `x` - The fractional column of the query.
/// * `y` - The fractional row of the query.
/// * `interpolation` - The interpolation mode to use.
///
/// # Returns
///
/// The interpolated sample value.
#[inline]
pub fn interpolate_sample<T, S>(
    sampler: &S,
    x_max: usize,
    y_max: usize,
    x: T,
    y: T,
    interpolation: InterpolationMode,
) -> T
where
    T: Scalar,
    S: Sampler<T> + ?Sized,
{
    match interpolation {
        InterpolationMode::Bilinear => interpolate_at(sampler, x_max, y_max, x, y),
        InterpolationMode::Nearest => nearest_at(sampler, x_max, y_max, x, y),
    }
}
