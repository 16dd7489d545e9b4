//! 3×3 weighted convolution over the image interior.
//!
//! Output pixel (x, y) accumulates the 3×3 input neighborhood anchored at
//! (x, y): for offsets k, l in 0..3 the sample at (x+k, y+l) is multiplied
//! by `weights[l][k]`. The transposed weight indexing (row index `l` paired
//! with the horizontal offset `k`) is intentional; downstream output depends
//! on this exact pairing, so do not swap the axes. See DESIGN.md.
//!
//! There is no border padding: the output is exactly (W−2) × (H−2), so
//! every neighborhood read stays inside the input. Channel sums are clamped
//! to [0, 255] and rounded to the nearest integer, half away from zero.
use super::ensure_size;
use crate::error::Error;
use crate::exec::run_rows;
use crate::image::{Rgba, RgbaImage};

/// A fixed 3×3 grid of convolution weights, addressed as `weights[l][k]`.
pub type WeightMatrix = [[f32; 3]; 3];

#[inline]
fn quantize(sum: f32) -> u8 {
    sum.clamp(0.0, 255.0).round() as u8
}

/// Convolve the interior of `input` with a 3×3 weight matrix. `output` must
/// be exactly (W−2) × (H−2) for a W×H input, and the input at least 3×3.
pub fn convolve(
    input: &RgbaImage,
    output: &mut RgbaImage,
    weights: &WeightMatrix,
    threads: usize,
) -> Result<(), Error> {
    let (Some(out_w), Some(out_h)) = (input.w.checked_sub(2), input.h.checked_sub(2)) else {
        return Err(Error::TooSmall {
            context: "convolve",
            width: input.w,
            height: input.h,
        });
    };
    if out_w == 0 || out_h == 0 {
        return Err(Error::TooSmall {
            context: "convolve",
            width: input.w,
            height: input.h,
        });
    }
    ensure_size("convolve output", output, out_w, out_h)?;

    run_rows(output, threads, |y, row| {
        let rows = [input.row(y), input.row(y + 1), input.row(y + 2)];
        for (x, out) in row.iter_mut().enumerate() {
            let mut r = 0.0f32;
            let mut g = 0.0f32;
            let mut b = 0.0f32;
            for k in 0..3 {
                for (l, input_row) in rows.iter().enumerate() {
                    let p = input_row[x + k];
                    let wt = weights[l][k];
                    r += f32::from(p.r) * wt;
                    g += f32::from(p.g) * wt;
                    b += f32::from(p.b) * wt;
                }
            }
            *out = Rgba::new(quantize(r), quantize(g), quantize(b), u8::MAX);
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const IDENTITY: WeightMatrix = [[0.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 0.0]];

    fn sample(width: usize, height: usize) -> RgbaImage {
        let mut img = RgbaImage::new(width, height).unwrap();
        for (i, px) in img.data.iter_mut().enumerate() {
            *px = Rgba::new((i * 13) as u8, (i * 29) as u8, (i * 3) as u8, 77);
        }
        img
    }

    #[test]
    fn identity_kernel_reproduces_the_interior() {
        let input = sample(6, 5);
        let mut output = RgbaImage::new(4, 3).unwrap();
        convolve(&input, &mut output, &IDENTITY, 1).unwrap();
        for y in 0..3 {
            for x in 0..4 {
                let expected = input.get(x + 1, y + 1);
                let got = output.get(x, y);
                assert_eq!((got.r, got.g, got.b), (expected.r, expected.g, expected.b));
                assert_eq!(got.a, 255);
            }
        }
    }

    #[test]
    fn weights_are_indexed_transposed() {
        // Weight at [l][k] = [0][1] multiplies the sample at offset (k, l) =
        // (1, 0), i.e. the pixel directly above the anchored center.
        let mut weights = [[0.0f32; 3]; 3];
        weights[0][1] = 1.0;
        let mut input = RgbaImage::new(3, 3).unwrap();
        input.set(1, 0, Rgba::new(42, 0, 0, 0));
        let mut output = RgbaImage::new(1, 1).unwrap();
        convolve(&input, &mut output, &weights, 1).unwrap();
        assert_eq!(output.get(0, 0).r, 42);
    }

    #[test]
    fn sums_clamp_to_channel_range() {
        let mut input = RgbaImage::new(3, 3).unwrap();
        input.data.fill(Rgba::gray(200));
        let all_ones: WeightMatrix = [[1.0; 3]; 3];
        let mut output = RgbaImage::new(1, 1).unwrap();
        convolve(&input, &mut output, &all_ones, 1).unwrap();
        assert_eq!(output.get(0, 0), Rgba::new(255, 255, 255, 255));

        let negative: WeightMatrix = [[-1.0; 3]; 3];
        convolve(&input, &mut output, &negative, 1).unwrap();
        assert_eq!(output.get(0, 0), Rgba::new(0, 0, 0, 255));
    }

    #[test]
    fn fractional_sums_round_to_nearest() {
        let mut input = RgbaImage::new(3, 3).unwrap();
        input.data.fill(Rgba::gray(10));
        let mut weights = [[0.0f32; 3]; 3];
        weights[1][1] = 0.75; // 10 * 0.75 = 7.5 exactly, rounds half away from zero
        let mut output = RgbaImage::new(1, 1).unwrap();
        convolve(&input, &mut output, &weights, 1).unwrap();
        assert_eq!(output.get(0, 0).r, 8);
    }

    #[test]
    fn inputs_smaller_than_the_kernel_are_rejected() {
        let input = RgbaImage::new(2, 5).unwrap();
        let mut output = RgbaImage::new(1, 3).unwrap();
        let err = convolve(&input, &mut output, &IDENTITY, 1).unwrap_err();
        assert!(matches!(err, Error::TooSmall { .. }));
    }

    #[test]
    fn wrong_output_size_is_rejected() {
        let input = sample(6, 6);
        let mut output = RgbaImage::new(6, 6).unwrap();
        let err = convolve(&input, &mut output, &IDENTITY, 1).unwrap_err();
        assert!(matches!(err, Error::Dimension { .. }));
    }

    #[test]
    fn output_is_identical_for_any_thread_count() {
        let input = sample(20, 17);
        let weights: WeightMatrix = [[1.0, 2.0, -1.0], [2.0, 0.25, -2.0], [1.0, -2.0, -1.0]];
        let mut reference = RgbaImage::new(18, 15).unwrap();
        convolve(&input, &mut reference, &weights, 1).unwrap();
        for threads in [2, 4, 8] {
            let mut output = RgbaImage::new(18, 15).unwrap();
            convolve(&input, &mut output, &weights, threads).unwrap();
            assert_eq!(output, reference);
        }
    }
}
