/// Trait for the floating point sample types a grid can be resampled in.
///
/// Send and Sync are required for the parallel execution strategies.
pub trait Scalar: num_traits::Float + Send + Sync {
    /// Convert a lattice index to a coordinate.
    fn from_index(i: usize) -> Self;

    /// Truncate a non-negative coordinate to a lattice index.
    ///
    /// Negative and NaN values map to zero.
    fn to_index(self) -> usize;
}

impl Scalar for f32 {
    #[inline]
    fn from_index(i: usize) -> Self {
        i as f32
    }

    #[inline]
    fn to_index(self) -> usize {
        self as usize
    }
}

impl Scalar for f64 {
    #[inline]
    fn from_index(i: usize) -> Self {
        i as f64
    }

    #[inline]
    fn to_index(self) -> usize {
        self as usize
    }
}

#[cfg(test)]
mod tests {
    use super::Scalar;

    #[test]
    fn index_roundtrip() {
        assert_eq!(f32::from_index(31), 31.0);
        assert_eq!(2.9f32.to_index(), 2);
        assert_eq!((-0.5f64).to_index(), 0);
        assert_eq!(f64::NAN.to_index(), 0);
    }
}
