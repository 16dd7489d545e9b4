//! The four raster transform kernels.
//!
//! Shared contract: the caller supplies the input image(s) and a freshly
//! allocated output of exactly the right size; the kernel validates that
//! sizing before any pixel work begins, then fills every output pixel from
//! the input(s). Kernels never resize or reallocate their output, and every
//! kernel forces alpha to 255.
//!
//! All four are data-parallel with no cross-pixel write dependencies, so
//! they run through [`crate::exec::run_rows`] with any worker count.
mod convolve;
mod diff;
mod pool;
mod rectify;

pub use self::convolve::{convolve, WeightMatrix};
pub use self::diff::symmetric_difference;
pub use self::pool::max_pool;
pub use self::rectify::rectify;

use crate::error::Error;
use crate::image::RgbaImage;

/// Reject caller-supplied sizing that does not match the kernel contract.
pub(crate) fn ensure_size(
    context: &'static str,
    image: &RgbaImage,
    expected_width: usize,
    expected_height: usize,
) -> Result<(), Error> {
    if image.w != expected_width || image.h != expected_height {
        return Err(Error::Dimension {
            context,
            expected_width,
            expected_height,
            actual_width: image.w,
            actual_height: image.h,
        });
    }
    Ok(())
}
