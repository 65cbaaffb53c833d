use crate::grid::GridSize;

/// An error type for the grid module.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum GridError {
    /// Error when a grid shape is empty or does not match the data length.
    #[error("Invalid dimensions: data length {len} for grid of size {size}")]
    InvalidDimensions {
        /// The requested grid size.
        size: GridSize,
        /// The length of the sample data.
        len: usize,
    },

    /// Error when a thermal frame does not carry exactly one full camera grid.
    #[error("Frame data length ({0}) does not match the camera grid length ({1})")]
    InvalidFrameLength(usize, usize),

    /// Error when the number of probe readings is not three.
    #[error("Expected 3 probe readings, got {0}")]
    InvalidProbeCount(usize),

    /// Error when a frame series is built without frames.
    #[error("A frame series needs at least one frame")]
    EmptySeries,
}
