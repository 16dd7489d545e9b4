use rasterops::{Rgba, RgbaImage};

/// Deterministic multi-channel pattern exercising the full value range.
pub fn gradient_rgba(width: usize, height: usize) -> RgbaImage {
    assert!(width > 0 && height > 0, "image dimensions must be positive");

    let mut img = RgbaImage::new(width, height).expect("allocation");
    for y in 0..height {
        for x in 0..width {
            let v = ((x * 7 + y * 13) % 256) as u8;
            img.set(
                x,
                y,
                Rgba::new(v, v.wrapping_mul(3), 255 - v, ((x + y) % 2 * 200) as u8),
            );
        }
    }
    img
}

/// Solid single-color image.
pub fn solid_rgba(width: usize, height: usize, px: Rgba) -> RgbaImage {
    let mut img = RgbaImage::new(width, height).expect("allocation");
    img.data.fill(px);
    img
}
