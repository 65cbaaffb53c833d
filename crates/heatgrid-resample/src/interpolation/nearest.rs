use crate::scalar::Scalar;
use heatgrid_grid::Sampler;

/// Kernel for nearest neighbor interpolation
///
/// # Arguments
///
/// * `sampler` - The source lattice.
/// * `x_max` - The last valid column index of the lattice.
/// * `y_max` - The last valid row index of the lattice.
/// * `x` - The fractional column of the query.
/// * `y` - The fractional row of the query.
///
/// # Returns
///
/// The sample of the lattice node closest to the query, clamped to the lattice.
pub fn nearest_at<T, S>(sampler: &S, x_max: usize, y_max: usize, x: T, y: T) -> T
where
    T: Scalar,
    S: Sampler<T> + ?Sized,
{
    let ix = x.max(T::zero()).round().to_index().min(x_max);
    let iy = y.max(T::zero()).round().to_index().min(y_max);

    sampler.sample(ix, iy)
}
