use crate::error::ResampleError;
use crate::interpolation::{interpolate_sample, CoordinateMapping, InterpolationMode};
use crate::parallel::{par_iter_rows_mut, ExecutionStrategy};
use crate::scalar::Scalar;
use heatgrid_grid::{GridError, GridSize, GridView, SampleGrid, Sampler, ThermalFrame};

/// Options for the resample operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResampleOptions {
    /// The interpolation kernel.
    pub mode: InterpolationMode,
    /// How output cells map to source coordinates.
    pub mapping: CoordinateMapping,
    /// How output rows are scheduled.
    pub strategy: ExecutionStrategy,
}

/// Resample a flat row-major grid to a new size with bilinear interpolation.
///
/// Output cell `(ox, oy)` samples the source at
/// `(ox * src.width / dst.width, oy * src.height / dst.height)`; samples past the
/// last source row or column are clamped to it.
///
/// # Arguments
///
/// * `grid` - The source samples, `src_size.width * src_size.height` long.
/// * `src_size` - The size of the source grid.
/// * `dst_size` - The size of the output grid.
///
/// # Returns
///
/// A newly allocated grid of `dst_size`.
///
/// # Errors
///
/// Returns [`GridError::InvalidDimensions`] (wrapped in [`ResampleError::Grid`])
/// if either size is empty or the data length does not match `src_size`.
///
/// # Example
///
/// ```
/// use heatgrid_grid::GridSize;
/// use heatgrid_resample::resample::resample;
///
/// let out = resample(&[1.0f32, 2.0, 3.0, 4.0], GridSize::new(2, 2), GridSize::new(1, 1)).unwrap();
/// assert_eq!(out.to_rows(), vec![vec![1.0]]);
///
/// let out = resample(&[0.0f32, 10.0], GridSize::new(2, 1), GridSize::new(4, 1)).unwrap();
/// assert_eq!(out.as_slice(), &[0.0, 5.0, 10.0, 10.0]);
/// ```
pub fn resample<T: Scalar>(
    grid: &[T],
    src_size: GridSize,
    dst_size: GridSize,
) -> Result<SampleGrid<T>, ResampleError> {
    let src = GridView::new(grid, src_size)?;
    resample_with(&src, dst_size, ResampleOptions::default())
}

/// Resample a grid to a new size with the given options.
///
/// # Errors
///
/// Returns [`ResampleError::Grid`] for an empty source or target size and
/// [`ResampleError::Parallel`] if the execution strategy is invalid. Nothing is
/// computed when an error is returned.
pub fn resample_with<T, S>(
    src: &S,
    dst_size: GridSize,
    options: ResampleOptions,
) -> Result<SampleGrid<T>, ResampleError>
where
    T: Scalar,
    S: Sampler<T> + Sync + ?Sized,
{
    let mut dst = SampleGrid::from_size_val(dst_size, T::zero())?;
    resample_into(src, &mut dst, options)?;
    Ok(dst)
}

/// Resample a grid into a preallocated output grid.
///
/// The size of `dst` selects the output resolution.
///
/// # Errors
///
/// Same as [`resample_with`].
pub fn resample_into<T, S>(
    src: &S,
    dst: &mut SampleGrid<T>,
    options: ResampleOptions,
) -> Result<(), ResampleError>
where
    T: Scalar,
    S: Sampler<T> + Sync + ?Sized,
{
    let src_size = src.size();
    if src_size.is_empty() {
        return Err(GridError::InvalidDimensions {
            size: src_size,
            len: 0,
        }
        .into());
    }
    options.strategy.validate()?;

    let dst_size = dst.size();
    log::debug!(
        "resampling {} -> {} ({:?}, {:?}, {:?})",
        src_size,
        dst_size,
        options.mode,
        options.mapping,
        options.strategy
    );

    // source coordinates are separable per axis
    let xs: Vec<T> = options.mapping.axis_coords(src_size.width, dst_size.width);
    let ys: Vec<T> = options.mapping.axis_coords(src_size.height, dst_size.height);
    let (x_max, y_max) = (src_size.max_x(), src_size.max_y());

    par_iter_rows_mut(
        dst.as_slice_mut(),
        dst_size.width,
        options.strategy,
        |row, out| {
            let y = ys[row];
            for (v, &x) in out.iter_mut().zip(xs.iter()) {
                *v = interpolate_sample(src, x_max, y_max, x, y, options.mode);
            }
        },
    )?;

    Ok(())
}

/// Resample the camera grid of a thermal frame.
///
/// # Errors
///
/// Same as [`resample_with`].
pub fn resample_frame(
    frame: &ThermalFrame,
    dst_size: GridSize,
    options: ResampleOptions,
) -> Result<SampleGrid<f32>, ResampleError> {
    resample_with(frame.temps(), dst_size, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn resample_smoke() -> Result<(), ResampleError> {
        let out = resample(
            &[0.0f32, 10.0, 20.0, 30.0],
            GridSize::new(2, 2),
            GridSize::new(3, 3),
        )?;
        assert_eq!(out.size(), GridSize::new(3, 3));
        assert_eq!(out.as_slice()[0], 0.0);
        assert_eq!(out.as_slice()[8], 30.0);
        // (2/3, 2/3) blends all four corners
        assert_relative_eq!(out.as_slice()[4], 20.0, epsilon = 1e-4);
        Ok(())
    }

    #[test]
    fn resample_align_corners_center() -> Result<(), ResampleError> {
        let data = [0.0f32, 10.0, 20.0, 30.0];
        let src = GridView::new(&data, GridSize::new(2, 2))?;
        let options = ResampleOptions {
            mapping: CoordinateMapping::AlignCorners,
            ..Default::default()
        };
        let out = resample_with(&src, GridSize::new(3, 3), options)?;
        assert_eq!(
            out.to_rows(),
            vec![
                vec![0.0, 5.0, 10.0],
                vec![10.0, 15.0, 20.0],
                vec![20.0, 25.0, 30.0]
            ]
        );
        Ok(())
    }

    #[test]
    fn resample_invalid_source() {
        let res = resample(&[1.0f32, 2.0, 3.0], GridSize::new(2, 2), GridSize::new(4, 4));
        assert!(matches!(
            res,
            Err(ResampleError::Grid(GridError::InvalidDimensions { len: 3, .. }))
        ));

        let res = resample::<f32>(&[], GridSize::new(0, 0), GridSize::new(4, 4));
        assert!(matches!(
            res,
            Err(ResampleError::Grid(GridError::InvalidDimensions { .. }))
        ));
    }

    #[test]
    fn resample_invalid_target() {
        let res = resample(&[1.0f32; 4], GridSize::new(2, 2), GridSize::new(0, 3));
        assert!(matches!(
            res,
            Err(ResampleError::Grid(GridError::InvalidDimensions { .. }))
        ));
        let res = resample(&[1.0f32; 4], GridSize::new(2, 2), GridSize::new(3, 0));
        assert!(res.is_err());
    }

    #[test]
    fn resample_overflowing_sizes() {
        let data = [1.0f32, 2.0, 3.0, 4.0];
        let res = resample(&data, GridSize::new(usize::MAX, 2), GridSize::new(2, 2));
        assert!(matches!(
            res,
            Err(ResampleError::Grid(GridError::InvalidDimensions { len: 4, .. }))
        ));

        let wrapping = GridSize::new(1 << (usize::BITS - 1), 2);
        let res = resample::<f32>(&[], wrapping, GridSize::new(2, 2));
        assert!(matches!(
            res,
            Err(ResampleError::Grid(GridError::InvalidDimensions { len: 0, .. }))
        ));

        let res = resample(&data, GridSize::new(2, 2), GridSize::new(usize::MAX, 2));
        assert!(matches!(
            res,
            Err(ResampleError::Grid(GridError::InvalidDimensions { .. }))
        ));
    }

    #[test]
    fn resample_invalid_strategy() -> Result<(), GridError> {
        let grid = SampleGrid::from_size_val(GridSize::new(2, 2), 1.0f32)?;
        let options = ResampleOptions {
            strategy: ExecutionStrategy::Fixed(0),
            ..Default::default()
        };
        let res = resample_with(&grid, GridSize::new(4, 4), options);
        assert!(matches!(res, Err(ResampleError::Parallel(_))));
        Ok(())
    }

    #[test]
    fn resample_nearest() -> Result<(), ResampleError> {
        let grid = SampleGrid::new(GridSize::new(2, 2), vec![0.0f32, 10.0, 20.0, 30.0])?;
        let options = ResampleOptions {
            mode: InterpolationMode::Nearest,
            ..Default::default()
        };
        let out = resample_with(&grid, GridSize::new(4, 4), options)?;
        assert_eq!(
            out.as_slice(),
            &[
                0.0, 10.0, 10.0, 10.0, //
                20.0, 30.0, 30.0, 30.0, //
                20.0, 30.0, 30.0, 30.0, //
                20.0, 30.0, 30.0, 30.0,
            ]
        );
        Ok(())
    }

    #[test]
    fn resample_into_preallocated() -> Result<(), ResampleError> {
        let src = SampleGrid::from_fn(GridSize::new(3, 2), |x, y| (x + 3 * y) as f64)?;
        let mut dst = SampleGrid::from_size_val(GridSize::new(3, 2), -1.0)?;
        resample_into(&src, &mut dst, ResampleOptions::default())?;
        assert_eq!(dst, src);
        Ok(())
    }

    #[cfg(feature = "serde")]
    #[test]
    fn resample_options_serde() -> Result<(), Box<dyn std::error::Error>> {
        let options = ResampleOptions {
            mode: InterpolationMode::Nearest,
            mapping: CoordinateMapping::AlignCorners,
            strategy: ExecutionStrategy::Fixed(4),
        };
        let json = serde_json::to_string(&options)?;
        let deserialized: ResampleOptions = serde_json::from_str(&json)?;
        assert_eq!(deserialized, options);

        let out = resample(&[0.0f32, 10.0], GridSize::new(2, 1), GridSize::new(4, 1))?;
        let value = serde_json::to_value(&out)?;
        assert_eq!(value["data"], serde_json::json!([0.0, 5.0, 10.0, 10.0]));
        Ok(())
    }
}
