#![doc = include_str!("../README.md")]

pub mod error;
pub mod exec;
pub mod image;
pub mod kernels;
pub mod ops;

// --- High-level re-exports -------------------------------------------------

pub use crate::error::Error;
pub use crate::exec::time_execution;
pub use crate::image::{Rgba, RgbaImage};
pub use crate::kernels::{convolve, max_pool, rectify, symmetric_difference, WeightMatrix};
pub use crate::ops::Operation;

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use rasterops::prelude::*;
///
/// # fn main() -> Result<(), Error> {
/// let mut input = RgbaImage::new(8, 8)?;
/// input.data.fill(Rgba::gray(200));
///
/// let output = Operation::Rectify { ceiling: 127 }.apply(&input, None, 4)?;
/// assert_eq!(output.size(), (8, 8));
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::error::Error;
    pub use crate::exec::time_execution;
    pub use crate::image::{Rgba, RgbaImage};
    pub use crate::ops::Operation;
}
