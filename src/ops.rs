//! Closed set of raster operations with exhaustive dispatch.
//!
//! Each variant carries its own parameters, so adding or removing an
//! operation is a compile-time-checked change rather than a string
//! comparison at the call site. [`Operation::apply`] sizes and allocates
//! the output for the caller and invokes the matching kernel.
use crate::error::Error;
use crate::image::RgbaImage;
use crate::kernels::{convolve, max_pool, rectify, symmetric_difference, WeightMatrix};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Operation {
    Rectify { ceiling: u8 },
    MaxPool,
    Convolve { weights: WeightMatrix },
    SymmetricDifference,
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Rectify { .. } => "rectify",
            Operation::MaxPool => "max-pool",
            Operation::Convolve { .. } => "convolve",
            Operation::SymmetricDifference => "symmetric-difference",
        }
    }

    /// Output dimensions produced for an input of `w × h`.
    pub fn output_size(&self, w: usize, h: usize) -> (usize, usize) {
        match self {
            Operation::Rectify { .. } | Operation::SymmetricDifference => (w, h),
            Operation::MaxPool => (w / 2, h / 2),
            Operation::Convolve { .. } => (w.saturating_sub(2), h.saturating_sub(2)),
        }
    }

    /// Allocate a correctly sized output and run the kernel over `threads`
    /// workers. `second` is required by `SymmetricDifference` and ignored by
    /// the single-input operations.
    pub fn apply(
        &self,
        input: &RgbaImage,
        second: Option<&RgbaImage>,
        threads: usize,
    ) -> Result<RgbaImage, Error> {
        let (out_w, out_h) = self.output_size(input.w, input.h);
        let mut output = RgbaImage::new(out_w, out_h)?;
        match self {
            Operation::Rectify { ceiling } => rectify(input, &mut output, *ceiling, threads)?,
            Operation::MaxPool => max_pool(input, &mut output, threads)?,
            Operation::Convolve { weights } => convolve(input, &mut output, weights, threads)?,
            Operation::SymmetricDifference => {
                let second = second.ok_or(Error::MissingSecondInput)?;
                symmetric_difference(input, second, &mut output, threads)?;
            }
        }
        Ok(output)
    }
}
