use crate::error::GridError;

/// Grid size in samples
///
/// A struct to represent the size of a sample grid.
///
/// # Examples
///
/// ```
/// use heatgrid_grid::GridSize;
///
/// let size = GridSize {
///     width: 32,
///     height: 24,
/// };
///
/// assert_eq!(size.len(), 768);
/// assert_eq!(size.max_x(), 31);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridSize {
    /// Number of columns
    pub width: usize,
    /// Number of rows
    pub height: usize,
}

impl GridSize {
    /// Create a new grid size.
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Total number of samples in a grid of this size.
    ///
    /// Saturates at `usize::MAX`; see [`GridSize::checked_len`].
    pub fn len(&self) -> usize {
        self.width.saturating_mul(self.height)
    }

    /// Total number of samples, or `None` if `width * height` overflows.
    pub fn checked_len(&self) -> Option<usize> {
        self.width.checked_mul(self.height)
    }

    /// Whether the grid holds no samples.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Last valid column index.
    ///
    /// Only meaningful for non-empty sizes.
    pub fn max_x(&self) -> usize {
        self.width.saturating_sub(1)
    }

    /// Last valid row index.
    ///
    /// Only meaningful for non-empty sizes.
    pub fn max_y(&self) -> usize {
        self.height.saturating_sub(1)
    }

    /// Check that the size is non-empty and matches a data length.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidDimensions`] if either side is zero, if
    /// `width * height` overflows, or if `len` differs from it.
    pub fn validate(&self, len: usize) -> Result<(), GridError> {
        match self.checked_len() {
            Some(n) if n > 0 && n == len => Ok(()),
            _ => Err(GridError::InvalidDimensions { size: *self, len }),
        }
    }

    /// Number of samples to allocate for a new grid of this size holding `T`.
    fn alloc_len<T>(&self) -> Result<usize, GridError> {
        let fits = |n: usize| {
            n > 0
                && n.checked_mul(std::mem::size_of::<T>())
                    .is_some_and(|bytes| bytes <= isize::MAX as usize)
        };
        self.checked_len()
            .filter(|&n| fits(n))
            .ok_or(GridError::InvalidDimensions {
                size: *self,
                len: 0,
            })
    }
}

impl std::fmt::Display for GridSize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl From<[usize; 2]> for GridSize {
    fn from(size: [usize; 2]) -> Self {
        GridSize {
            width: size[0],
            height: size[1],
        }
    }
}

/// Read access to a scalar sample at an integer lattice coordinate.
///
/// Implementors guarantee that `sample(x, y)` is valid for every
/// `x < size().width` and `y < size().height`.
pub trait Sampler<T> {
    /// The size of the lattice.
    fn size(&self) -> GridSize;

    /// The sample at column `x` and row `y`.
    fn sample(&self, x: usize, y: usize) -> T;
}

/// A borrowed, row-major view over a flat slice of samples.
#[derive(Clone, Copy, Debug)]
pub struct GridView<'a, T> {
    data: &'a [T],
    size: GridSize,
}

impl<'a, T> GridView<'a, T> {
    /// Create a view over `data` interpreted as a grid of `size`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidDimensions`] if the size is empty or does not
    /// match the slice length.
    ///
    /// # Examples
    ///
    /// ```
    /// use heatgrid_grid::{GridSize, GridView, Sampler};
    ///
    /// let data = [0.0f32, 10.0, 20.0, 30.0];
    /// let view = GridView::new(&data, GridSize::new(2, 2)).unwrap();
    /// assert_eq!(view.sample(1, 1), 30.0);
    /// ```
    pub fn new(data: &'a [T], size: GridSize) -> Result<Self, GridError> {
        size.validate(data.len())?;
        Ok(Self { data, size })
    }

    /// The underlying samples in row-major order.
    pub fn as_slice(&self) -> &'a [T] {
        self.data
    }
}

impl<T: Copy> Sampler<T> for GridView<'_, T> {
    fn size(&self) -> GridSize {
        self.size
    }

    #[inline]
    fn sample(&self, x: usize, y: usize) -> T {
        self.data[y * self.size.width + x]
    }
}

/// An owned, row-major grid of scalar samples.
///
/// Sample `(x, y)` is stored at `data[y * width + x]`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SampleGrid<T> {
    size: GridSize,
    data: Vec<T>,
}

impl<T> SampleGrid<T> {
    /// Create a new grid from row-major sample data.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidDimensions`] if the size is empty or does not
    /// match the data length.
    ///
    /// # Examples
    ///
    /// ```
    /// use heatgrid_grid::{GridSize, SampleGrid};
    ///
    /// let grid = SampleGrid::new(GridSize::new(3, 2), vec![0u8; 6]).unwrap();
    /// assert_eq!(grid.width(), 3);
    /// assert_eq!(grid.height(), 2);
    /// ```
    pub fn new(size: GridSize, data: Vec<T>) -> Result<Self, GridError> {
        size.validate(data.len())?;
        Ok(Self { size, data })
    }

    /// Create a grid of `size` filled with `val`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidDimensions`] if the size is empty or too
    /// large to allocate.
    pub fn from_size_val(size: GridSize, val: T) -> Result<Self, GridError>
    where
        T: Clone,
    {
        let len = size.alloc_len::<T>()?;
        Self::new(size, vec![val; len])
    }

    /// Create a grid by evaluating `f(x, y)` for every cell in row-major order.
    ///
    /// # Errors
    ///
    /// Same as [`SampleGrid::from_size_val`].
    pub fn from_fn(
        size: GridSize,
        mut f: impl FnMut(usize, usize) -> T,
    ) -> Result<Self, GridError> {
        let mut data = Vec::with_capacity(size.alloc_len::<T>()?);
        for y in 0..size.height {
            for x in 0..size.width {
                data.push(f(x, y));
            }
        }
        Self::new(size, data)
    }

    /// The size of the grid.
    pub fn size(&self) -> GridSize {
        self.size
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.size.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.size.height
    }

    /// The samples in row-major order.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// The samples in row-major order, mutably.
    pub fn as_slice_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consume the grid and return its row-major samples.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// The sample at `(x, y)`, or `None` when out of bounds.
    pub fn get(&self, x: usize, y: usize) -> Option<&T> {
        if x >= self.size.width || y >= self.size.height {
            return None;
        }
        self.data.get(y * self.size.width + x)
    }

    /// Iterate over the rows of the grid.
    pub fn rows(&self) -> std::slice::ChunksExact<'_, T> {
        self.data.chunks_exact(self.size.width)
    }

    /// Copy the grid into `height` rows of `width` samples each.
    pub fn to_rows(&self) -> Vec<Vec<T>>
    where
        T: Clone,
    {
        self.rows().map(<[T]>::to_vec).collect()
    }

    /// Borrow the grid as a [`GridView`].
    pub fn view(&self) -> GridView<'_, T> {
        GridView {
            data: &self.data,
            size: self.size,
        }
    }
}

impl<T: Copy + PartialOrd> SampleGrid<T> {
    /// The smallest and largest sample of the grid.
    ///
    /// NaN samples are skipped unless every sample is NaN.
    pub fn min_max(&self) -> (T, T) {
        // non-empty by construction
        let first = self.data[0];
        self.data.iter().fold((first, first), |(lo, hi), &v| {
            let lo = if v < lo || is_nan(&lo) { v } else { lo };
            let hi = if v > hi || is_nan(&hi) { v } else { hi };
            (lo, hi)
        })
    }
}

fn is_nan<T: PartialOrd>(v: &T) -> bool {
    v.partial_cmp(v).is_none()
}

impl<T: Copy> Sampler<T> for SampleGrid<T> {
    fn size(&self) -> GridSize {
        self.size
    }

    #[inline]
    fn sample(&self, x: usize, y: usize) -> T {
        self.data[y * self.size.width + x]
    }
}
