use crate::error::GridError;
use crate::grid::{GridSize, SampleGrid};

/// Number of columns of the infrared camera grid.
pub const FRAME_WIDTH: usize = 32;

/// Number of rows of the infrared camera grid.
pub const FRAME_HEIGHT: usize = 24;

/// Number of temperature samples in one camera frame.
pub const FRAME_LEN: usize = FRAME_WIDTH * FRAME_HEIGHT;

/// Seconds between the Unix epoch and the 2000-01-01 epoch of the capture device.
pub const EMBEDDED_EPOCH_OFFSET: u64 = 946_684_800;

/// Convert a capture-device timestamp (seconds since 2000-01-01) to Unix seconds.
///
/// Saturates at `u64::MAX`.
pub fn unix_from_device_epoch(device_secs: u64) -> u64 {
    device_secs.saturating_add(EMBEDDED_EPOCH_OFFSET)
}

/// Size of the infrared camera grid.
pub fn frame_size() -> GridSize {
    GridSize::new(FRAME_WIDTH, FRAME_HEIGHT)
}

/// Readings of the three point probes, in degrees Celsius.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProbeReadings {
    /// The probe at the top of the enclosure.
    pub top: f32,
    /// The probe in the middle of the enclosure.
    pub middle: f32,
    /// The probe at the bottom of the enclosure.
    pub bottom: f32,
}

impl ProbeReadings {
    /// Build the readings from a `[top, middle, bottom]` slice.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidProbeCount`] unless exactly three values are given.
    pub fn from_slice(values: &[f32]) -> Result<Self, GridError> {
        match values {
            [top, middle, bottom] => Ok(Self {
                top: *top,
                middle: *middle,
                bottom: *bottom,
            }),
            _ => Err(GridError::InvalidProbeCount(values.len())),
        }
    }

    /// The readings as a `[top, middle, bottom]` array.
    pub fn to_array(&self) -> [f32; 3] {
        [self.top, self.middle, self.bottom]
    }
}

/// One capture of the thermal camera and its probes.
#[derive(Clone, Debug, PartialEq)]
pub struct ThermalFrame {
    /// Capture time in Unix seconds.
    pub timestamp: u64,
    temps: SampleGrid<f32>,
    /// The point probe readings taken with the frame.
    pub probes: ProbeReadings,
}

impl ThermalFrame {
    /// Create a frame from a row-major slice of 768 camera temperatures.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidFrameLength`] if `temps` is not one full camera grid.
    ///
    /// # Examples
    ///
    /// ```
    /// use heatgrid_grid::frame::{ProbeReadings, ThermalFrame, FRAME_LEN};
    ///
    /// let frame = ThermalFrame::new(0, vec![21.5; FRAME_LEN], ProbeReadings::default()).unwrap();
    /// assert_eq!(frame.temps().size().width, 32);
    /// ```
    pub fn new(
        timestamp: u64,
        temps: Vec<f32>,
        probes: ProbeReadings,
    ) -> Result<Self, GridError> {
        if temps.len() != FRAME_LEN {
            return Err(GridError::InvalidFrameLength(temps.len(), FRAME_LEN));
        }
        Ok(Self {
            timestamp,
            temps: SampleGrid::new(frame_size(), temps)?,
            probes,
        })
    }

    /// The camera temperatures as a 32x24 grid.
    pub fn temps(&self) -> &SampleGrid<f32> {
        &self.temps
    }
}

/// A set of frames ordered by capture time.
#[derive(Clone, Debug)]
pub struct FrameSeries {
    frames: Vec<ThermalFrame>,
}

impl FrameSeries {
    /// Create a series, sorting the frames by timestamp.
    ///
    /// Frames sharing a timestamp keep their input order.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::EmptySeries`] if no frames are given.
    pub fn new(mut frames: Vec<ThermalFrame>) -> Result<Self, GridError> {
        if frames.is_empty() {
            return Err(GridError::EmptySeries);
        }
        frames.sort_by_key(|f| f.timestamp);
        Ok(Self { frames })
    }

    /// Number of frames.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Always false; a series holds at least one frame.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// The earliest frame.
    pub fn first(&self) -> &ThermalFrame {
        &self.frames[0]
    }

    /// The latest frame.
    pub fn last(&self) -> &ThermalFrame {
        &self.frames[self.frames.len() - 1]
    }

    /// The `(earliest, latest)` timestamps of the series.
    pub fn time_range(&self) -> (u64, u64) {
        (self.first().timestamp, self.last().timestamp)
    }

    /// The frames in capture order.
    pub fn frames(&self) -> &[ThermalFrame] {
        &self.frames
    }

    /// The latest frame captured at or before `timestamp`.
    ///
    /// Among frames sharing a timestamp the last one wins. A timestamp before
    /// the series starts selects the earliest frame.
    pub fn at_or_before(&self, timestamp: u64) -> &ThermalFrame {
        match self.frames.partition_point(|f| f.timestamp <= timestamp) {
            0 => self.first(),
            idx => &self.frames[idx - 1],
        }
    }
}
