//! 2×2 max pooling with truncating division on odd dimensions.
//!
//! Output pixel (x, y) takes the per-channel maximum of the input block at
//! (2x, 2y), (2x+1, 2y), (2x, 2y+1), (2x+1, 2y+1). An odd trailing row or
//! column of the input is silently dropped, matching the truncating output
//! size ⌊W/2⌋ × ⌊H/2⌋.
use super::ensure_size;
use crate::error::Error;
use crate::exec::run_rows;
use crate::image::{Rgba, RgbaImage};

/// Downsample `input` by taking the channel-wise maximum of each 2×2 block.
/// `output` must be exactly ⌊W/2⌋ × ⌊H/2⌋ for a W×H input.
pub fn max_pool(input: &RgbaImage, output: &mut RgbaImage, threads: usize) -> Result<(), Error> {
    ensure_size("max-pool output", output, input.w / 2, input.h / 2)?;
    run_rows(output, threads, |y, row| {
        let top = input.row(2 * y);
        let bottom = input.row(2 * y + 1);
        for (x, out) in row.iter_mut().enumerate() {
            let block = [top[2 * x], top[2 * x + 1], bottom[2 * x], bottom[2 * x + 1]];
            let mut px = Rgba::new(0, 0, 0, u8::MAX);
            for p in block {
                px.r = px.r.max(p.r);
                px.g = px.g.max(p.g);
                px.b = px.b.max(p.b);
            }
            *out = px;
        }
    })
}
