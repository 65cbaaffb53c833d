use crate::parallel::ParallelError;
use heatgrid_grid::GridError;

/// An error type for the resample module.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ResampleError {
    /// The source or target grid has invalid dimensions.
    #[error(transparent)]
    Grid(#[from] GridError),

    /// The execution strategy could not be applied.
    #[error(transparent)]
    Parallel(#[from] ParallelError),
}
