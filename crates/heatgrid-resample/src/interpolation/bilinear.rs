use crate::scalar::Scalar;
use heatgrid_grid::Sampler;

/// Kernel for bilinear interpolation with boundary clamping.
///
/// The query is bracketed by the lattice nodes `x1 = floor(x)`, `x2 = ceil(x)`
/// and `y1 = floor(y)`, `y2 = ceil(y)`. A ceiling past `x_max` (or `y_max`)
/// falls back to the floor, so the last column and row degrade to linear
/// interpolation or to the node itself instead of reading out of bounds.
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
/// The interpolated value. A query on a lattice node returns that sample exactly,
/// and the result never leaves the range of the samples it blends.
///
/// Negative queries are treated as zero and a floor past the last index is
/// clamped to it.
///
/// # Example
///
/// ```
/// use heatgrid_grid::{GridSize, GridView};
/// use heatgrid_resample::interpolation::interpolate_at;
///
/// let data = [0.0f32, 10.0, 20.0, 30.0];
/// let grid = GridView::new(&data, GridSize::new(2, 2)).unwrap();
/// assert_eq!(interpolate_at(&grid, 1, 1, 0.5f32, 0.5), 15.0);
/// assert_eq!(interpolate_at(&grid, 1, 1, 1.5f32, 0.0), 10.0);
/// ```
pub fn interpolate_at<T, S>(sampler: &S, x_max: usize, y_max: usize, x: T, y: T) -> T
where
    T: Scalar,
    S: Sampler<T> + ?Sized,
{
    let x = x.max(T::zero());
    let y = y.max(T::zero());

    let x1 = x.floor().to_index().min(x_max);
    let mut x2 = x.ceil().to_index();
    if x2 > x_max {
        x2 = x1;
    }

    let y1 = y.floor().to_index().min(y_max);
    let mut y2 = y.ceil().to_index();
    if y2 > y_max {
        y2 = y1;
    }

    match (x1 == x2, y1 == y2) {
        (true, true) => sampler.sample(x1, y1),
        (true, false) => {
            let ty = weight(y, y1, y2);
            lerp(sampler.sample(x1, y1), sampler.sample(x1, y2), ty)
        }
        (false, true) => {
            let tx = weight(x, x1, x2);
            lerp(sampler.sample(x1, y1), sampler.sample(x2, y1), tx)
        }
        (false, false) => {
            let tx = weight(x, x1, x2);
            let ty = weight(y, y1, y2);
            let top = lerp(sampler.sample(x1, y1), sampler.sample(x2, y1), tx);
            let bottom = lerp(sampler.sample(x1, y2), sampler.sample(x2, y2), tx);
            lerp(top, bottom, ty)
        }
    }
}

/// Fraction of the way from node `lo` to node `hi`, in `[0, 1]`.
#[inline]
fn weight<T: Scalar>(v: T, lo: usize, hi: usize) -> T {
    let lo = T::from_index(lo);
    let hi = T::from_index(hi);
    ((v - lo) / (hi - lo)).max(T::zero()).min(T::one())
}

// Blending in this form keeps equal endpoints exact.
#[inline]
fn lerp<T: Scalar>(a: T, b: T, t: T) -> T {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use super::interpolate_at;
    use heatgrid_grid::{GridError, GridSize, SampleGrid};

    fn square() -> Result<SampleGrid<f32>, GridError> {
        SampleGrid::new(GridSize::new(2, 2), vec![0.0, 10.0, 20.0, 30.0])
    }

    #[test]
    fn exact_nodes() -> Result<(), GridError> {
        let value = |x: usize, y: usize| (x * 7 + y * 13) as f32 * 0.1;
        let grid = SampleGrid::from_fn(GridSize::new(4, 3), value)?;
        for y in 0..3 {
            for x in 0..4 {
                let v = interpolate_at(&grid, 3, 2, x as f32, y as f32);
                assert_eq!(v, value(x, y));
            }
        }
        Ok(())
    }

    #[test]
    fn center() -> Result<(), GridError> {
        let grid = square()?;
        assert_eq!(interpolate_at(&grid, 1, 1, 0.5f32, 0.5), 15.0);
        Ok(())
    }

    #[test]
    fn vertical_edge() -> Result<(), GridError> {
        let grid = square()?;
        // x on a node: blend along y only
        assert_eq!(interpolate_at(&grid, 1, 1, 0.0f32, 0.25), 5.0);
        assert_eq!(interpolate_at(&grid, 1, 1, 1.0f32, 0.5), 20.0);
        Ok(())
    }

    #[test]
    fn horizontal_edge() -> Result<(), GridError> {
        let grid = square()?;
        assert_eq!(interpolate_at(&grid, 1, 1, 0.25f32, 0.0), 2.5);
        assert_eq!(interpolate_at(&grid, 1, 1, 0.5f32, 1.0), 25.0);
        Ok(())
    }

    #[test]
    fn boundary_clamp() -> Result<(), GridError> {
        let grid = square()?;
        // ceil(1.5) = 2 is past the last column, so x2 falls back to x1 = 1
        assert_eq!(interpolate_at(&grid, 1, 1, 1.5f32, 0.0), 10.0);
        assert_eq!(interpolate_at(&grid, 1, 1, 1.5f32, 0.5), 20.0);
        assert_eq!(interpolate_at(&grid, 1, 1, 0.5f32, 1.5), 25.0);
        assert_eq!(interpolate_at(&grid, 1, 1, 1.9f32, 1.9), 30.0);
        Ok(())
    }

    #[test]
    fn out_of_range_queries() -> Result<(), GridError> {
        let grid = square()?;
        assert_eq!(interpolate_at(&grid, 1, 1, -3.0f32, -0.5), 0.0);
        assert_eq!(interpolate_at(&grid, 1, 1, 7.0f32, 9.0), 30.0);
        Ok(())
    }

    #[test]
    fn single_sample() -> Result<(), GridError> {
        let grid = SampleGrid::new(GridSize::new(1, 1), vec![42.0f64])?;
        assert_eq!(interpolate_at(&grid, 0, 0, 0.7, 0.3), 42.0);
        Ok(())
    }
}
