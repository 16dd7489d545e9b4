//! Owned RGBA8 image in row-major layout (stride == width).
//!
//! The buffer is exclusively owned: `Clone` is a deep copy, moves transfer
//! ownership, and no other entity holds a reference after construction.
//! Coordinate access outside `0..w × 0..h` is a programming error and
//! panics rather than reading a neighboring pixel.
use crate::error::Error;
use crate::image::pixel::Rgba;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RgbaImage {
    /// Image width in pixels
    pub w: usize,
    /// Image height in pixels
    pub h: usize,
    /// Number of pixels between consecutive rows (equals `w`)
    pub stride: usize,
    /// Backing storage in row-major order, `w * h` pixels
    pub data: Vec<Rgba>,
}

impl RgbaImage {
    /// Construct a zero-initialized buffer of size `w × h`.
    ///
    /// Fails with [`Error::Allocation`] when the buffer cannot be reserved,
    /// including when `w * h` overflows.
    pub fn new(w: usize, h: usize) -> Result<Self, Error> {
        let len = w
            .checked_mul(h)
            .ok_or(Error::Allocation { width: w, height: h })?;
        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| Error::Allocation { width: w, height: h })?;
        data.resize(len, Rgba::default());
        Ok(Self {
            w,
            h,
            stride: w,
            data,
        })
    }

    /// Wrap an existing pixel buffer; its length must equal `w * h`.
    pub fn from_raw(w: usize, h: usize, data: Vec<Rgba>) -> Result<Self, Error> {
        let expected = w.checked_mul(h);
        if expected != Some(data.len()) {
            return Err(Error::Decode(format!(
                "pixel buffer length {} does not match {}x{}",
                data.len(),
                w,
                h
            )));
        }
        Ok(Self {
            w,
            h,
            stride: w,
            data,
        })
    }

    #[inline]
    /// Convert (x, y) to a linear index into `data`. Panics when the
    /// coordinate lies outside the image; a plain linear index would wrap
    /// an oversized `x` into the next row instead of failing.
    pub fn idx(&self, x: usize, y: usize) -> usize {
        assert!(
            x < self.w && y < self.h,
            "pixel access ({x}, {y}) out of bounds for {}x{} image",
            self.w,
            self.h
        );
        y * self.stride + x
    }

    #[inline]
    /// Get the pixel at (x, y). Precondition: `x < w`, `y < h`.
    pub fn get(&self, x: usize, y: usize) -> Rgba {
        self.data[self.idx(x, y)]
    }

    #[inline]
    /// Mutable handle to the pixel at (x, y). Precondition: `x < w`, `y < h`.
    pub fn get_mut(&mut self, x: usize, y: usize) -> &mut Rgba {
        let i = self.idx(x, y);
        &mut self.data[i]
    }

    #[inline]
    /// Set the pixel at (x, y). Precondition: `x < w`, `y < h`.
    pub fn set(&mut self, x: usize, y: usize, px: Rgba) {
        let i = self.idx(x, y);
        self.data[i] = px;
    }

    #[inline]
    pub fn row(&self, y: usize) -> &[Rgba] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }

    #[inline]
    pub fn row_mut(&mut self, y: usize) -> &mut [Rgba] {
        let start = y * self.stride;
        let end = start + self.w;
        &mut self.data[start..end]
    }

    /// View the buffer as raw RGBA8 bytes, four per pixel, row-major.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.data)
    }

    #[inline]
    pub fn size(&self) -> (usize, usize) {
        (self.w, self.h)
    }
}
