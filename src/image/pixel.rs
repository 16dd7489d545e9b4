//! Four-channel 8-bit pixel value type.
//!
//! `Rgba` is `repr(C)` and `Pod` so an image buffer can be reinterpreted as
//! raw RGBA8 bytes at the codec boundary without copying per pixel.
use bytemuck::{Pod, Zeroable};

/// A single RGBA color sample, one byte per channel, copied by value.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Pod, Zeroable)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque pixel with identical R, G and B channels.
    pub const fn gray(v: u8) -> Self {
        Self::new(v, v, v, u8::MAX)
    }
}
