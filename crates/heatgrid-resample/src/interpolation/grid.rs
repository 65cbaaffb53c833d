use crate::scalar::Scalar;

/// How output cells are placed over the source lattice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CoordinateMapping {
    /// Output cell `o` samples the source at `o * src_len / dst_len`.
    ///
    /// When upsampling, the last output cells fall past the last source node and
    /// are resolved by the boundary clamp.
    #[default]
    Proportional,
    /// The first and last output cells sit on the first and last source nodes,
    /// i.e. `o * (src_len - 1) / (dst_len - 1)`.
    ///
    /// A single output cell maps to the first source node.
    AlignCorners,
}

impl CoordinateMapping {
    /// The fractional source coordinate of output cell `dst_idx` along one axis.
    ///
    /// # Arguments
    ///
    /// * `dst_idx` - The output cell index.
    /// * `src_len` - The number of source samples along the axis.
    /// * `dst_len` - The number of output cells along the axis.
    ///
    /// # Example
    ///
    /// ```
    /// use heatgrid_resample::interpolation::CoordinateMapping;
    ///
    /// let x: f32 = CoordinateMapping::Proportional.source_coord(3, 2, 4);
    /// assert_eq!(x, 1.5);
    /// let x: f32 = CoordinateMapping::AlignCorners.source_coord(3, 2, 4);
    /// assert_eq!(x, 1.0);
    /// ```
    pub fn source_coord<T: Scalar>(&self, dst_idx: usize, src_len: usize, dst_len: usize) -> T {
        match self {
            CoordinateMapping::Proportional => {
                T::from_index(dst_idx * src_len) / T::from_index(dst_len)
            }
            CoordinateMapping::AlignCorners => {
                if dst_len <= 1 {
                    return T::zero();
                }
                T::from_index(dst_idx * (src_len - 1)) / T::from_index(dst_len - 1)
            }
        }
    }

    /// The source coordinates of every output cell along one axis.
    pub(crate) fn axis_coords<T: Scalar>(&self, src_len: usize, dst_len: usize) -> Vec<T> {
        (0..dst_len)
            .map(|i| self.source_coord(i, src_len, dst_len))
            .collect()
    }
}
