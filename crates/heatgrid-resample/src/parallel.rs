use rayon::prelude::*;
use thiserror::Error;

/// Errors that can occur during parallel execution.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParallelError {
    /// The thread pool failed to build.
    #[error("failed to build thread pool: {0}")]
    BuildError(String),

    /// The requested thread count is invalid.
    #[error("thread count must be > 0, got {0}")]
    InvalidThreadCount(usize),

    /// The row width must be non-zero.
    #[error("row width must be > 0")]
    InvalidRowWidth,
}

/// Controls how the rows of an output grid are computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExecutionStrategy {
    /// Run sequentially on the current thread.
    #[default]
    Serial,

    /// Use the global Rayon thread pool to process rows in parallel.
    ParallelRows,

    /// Run on a local thread pool with `n` threads.
    ///
    /// # Warning
    /// Creates a new thread pool on every call, which has significant overhead.
    /// Use this primarily for benchmarking or specific isolation needs.
    Fixed(usize),
}

impl ExecutionStrategy {
    /// Check the strategy before any work is scheduled.
    pub fn validate(&self) -> Result<(), ParallelError> {
        match self {
            ExecutionStrategy::Fixed(0) => Err(ParallelError::InvalidThreadCount(0)),
            _ => Ok(()),
        }
    }
}

/// Apply a function to each row of a row-major buffer with the given strategy.
///
/// # Arguments
///
/// * `dst` - The destination buffer, a whole number of rows long.
/// * `cols` - The number of elements per row.
/// * `strategy` - The execution strategy.
/// * `f` - Called with the row index and the mutable row.
///
/// # Errors
///
/// Returns [`ParallelError::InvalidRowWidth`] for `cols == 0`, and
/// [`ParallelError::InvalidThreadCount`] or [`ParallelError::BuildError`] if a
/// fixed thread pool cannot be created.
pub fn par_iter_rows_mut<T, F>(
    dst: &mut [T],
    cols: usize,
    strategy: ExecutionStrategy,
    f: F,
) -> Result<(), ParallelError>
where
    T: Send,
    F: Fn(usize, &mut [T]) + Send + Sync,
{
    if cols == 0 {
        return Err(ParallelError::InvalidRowWidth);
    }
    strategy.validate()?;

    match strategy {
        ExecutionStrategy::Serial => {
            dst.chunks_exact_mut(cols)
                .enumerate()
                .for_each(|(row, chunk)| f(row, chunk));
        }
        ExecutionStrategy::ParallelRows => {
            dst.par_chunks_exact_mut(cols)
                .enumerate()
                .for_each(|(row, chunk)| f(row, chunk));
        }
        ExecutionStrategy::Fixed(n) => {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(n)
                .build()
                .map_err(|e| ParallelError::BuildError(e.to_string()))?;

            pool.install(|| {
                dst.par_chunks_exact_mut(cols)
                    .enumerate()
                    .for_each(|(row, chunk)| f(row, chunk));
            });
        }
    }
    Ok(())
}
