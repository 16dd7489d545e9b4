//! Per-pixel absolute difference between two same-sized images.
use super::ensure_size;
use crate::error::Error;
use crate::exec::run_rows;
use crate::image::{Rgba, RgbaImage};

/// Write `|first - second|` per color channel into `output`. Both inputs
/// and the output must share the same dimensions.
pub fn symmetric_difference(
    first: &RgbaImage,
    second: &RgbaImage,
    output: &mut RgbaImage,
    threads: usize,
) -> Result<(), Error> {
    ensure_size("symmetric-difference second input", second, first.w, first.h)?;
    ensure_size("symmetric-difference output", output, first.w, first.h)?;
    run_rows(output, threads, |y, row| {
        for ((out, a), b) in row.iter_mut().zip(first.row(y)).zip(second.row(y)) {
            *out = Rgba::new(
                a.r.abs_diff(b.r),
                a.g.abs_diff(b.g),
                a.b.abs_diff(b.b),
                u8::MAX,
            );
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(seed: usize) -> RgbaImage {
        let mut img = RgbaImage::new(5, 4).unwrap();
        for (i, px) in img.data.iter_mut().enumerate() {
            let v = (i * 37 + seed * 101) as u8;
            *px = Rgba::new(v, v.wrapping_add(40), v.wrapping_mul(3), v);
        }
        img
    }

    #[test]
    fn difference_is_commutative() {
        let a = sample(1);
        let b = sample(2);
        let mut ab = RgbaImage::new(5, 4).unwrap();
        let mut ba = RgbaImage::new(5, 4).unwrap();
        symmetric_difference(&a, &b, &mut ab, 1).unwrap();
        symmetric_difference(&b, &a, &mut ba, 1).unwrap();
        assert_eq!(ab, ba);
    }

    #[test]
    fn identical_inputs_give_zero_with_opaque_alpha() {
        let a = sample(3);
        let mut out = RgbaImage::new(5, 4).unwrap();
        symmetric_difference(&a, &a, &mut out, 1).unwrap();
        assert!(out.data.iter().all(|p| *p == Rgba::new(0, 0, 0, 255)));
    }

    #[test]
    fn mismatched_inputs_are_rejected_before_any_write() {
        let a = sample(1);
        let b = RgbaImage::new(4, 4).unwrap();
        let mut out = RgbaImage::new(5, 4).unwrap();
        let err = symmetric_difference(&a, &b, &mut out, 1).unwrap_err();
        assert!(matches!(err, Error::Dimension { .. }));
        assert!(out.data.iter().all(|p| *p == Rgba::default()));
    }

    #[test]
    fn output_is_identical_for_any_thread_count() {
        let a = sample(4);
        let b = sample(9);
        let mut reference = RgbaImage::new(5, 4).unwrap();
        symmetric_difference(&a, &b, &mut reference, 1).unwrap();
        for threads in [2, 4, 8] {
            let mut out = RgbaImage::new(5, 4).unwrap();
            symmetric_difference(&a, &b, &mut out, threads).unwrap();
            assert_eq!(out, reference);
        }
    }
}
