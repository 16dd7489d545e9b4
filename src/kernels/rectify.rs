//! Intensity rectification: clamp each color channel to `[ceiling, 255]`.
use super::ensure_size;
use crate::error::Error;
use crate::exec::run_rows;
use crate::image::{Rgba, RgbaImage};

/// Clamp every R, G and B value of `input` to `[ceiling, 255]` and force
/// alpha to 255. `output` must match the input size exactly.
pub fn rectify(
    input: &RgbaImage,
    output: &mut RgbaImage,
    ceiling: u8,
    threads: usize,
) -> Result<(), Error> {
    ensure_size("rectify output", output, input.w, input.h)?;
    run_rows(output, threads, |y, row| {
        for (out, px) in row.iter_mut().zip(input.row(y)) {
            *out = Rgba::new(
                px.r.clamp(ceiling, u8::MAX),
                px.g.clamp(ceiling, u8::MAX),
                px.b.clamp(ceiling, u8::MAX),
                u8::MAX,
            );
        }
    })
}
