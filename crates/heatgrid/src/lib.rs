#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

#[doc(inline)]
pub use heatgrid_grid as grid;

#[doc(inline)]
pub use heatgrid_resample as resample;
