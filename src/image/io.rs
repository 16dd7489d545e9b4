//! PNG codec boundary and JSON helpers.
//!
//! - `decode_png` / `encode_png`: in-memory PNG ↔ [`RgbaImage`].
//! - `load_rgba` / `save_rgba`: file convenience wrappers.
//! - `write_json_file`: pretty-print a serializable value to disk.
//!
//! The byte contract with the codec is row-major RGBA8, four bytes per
//! pixel. Decoding and encoding are delegated to the `image` crate's PNG
//! codec; failures carry its diagnostic text.
use super::{Rgba, RgbaImage};
use crate::error::Error;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, ImageFormat};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Decode PNG bytes into an owned RGBA8 image.
pub fn decode_png(bytes: &[u8]) -> Result<RgbaImage, Error> {
    let decoded = image::load_from_memory_with_format(bytes, ImageFormat::Png)
        .map_err(|e| Error::Decode(e.to_string()))?
        .into_rgba8();
    let width = decoded.width() as usize;
    let height = decoded.height() as usize;
    let pixels: Vec<Rgba> = bytemuck::cast_slice(decoded.as_raw()).to_vec();
    RgbaImage::from_raw(width, height, pixels)
}

/// Encode an image as PNG bytes.
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>, Error> {
    let mut out = Vec::new();
    PngEncoder::new(&mut out)
        .write_image(
            image.as_bytes(),
            image.w as u32,
            image.h as u32,
            ExtendedColorType::Rgba8,
        )
        .map_err(|e| Error::Encode(e.to_string()))?;
    Ok(out)
}

/// Load a PNG file from disk.
pub fn load_rgba(path: &Path) -> Result<RgbaImage, Error> {
    let bytes = fs::read(path)
        .map_err(|e| Error::Decode(format!("failed to read {}: {e}", path.display())))?;
    decode_png(&bytes)
}

/// Save an image to a PNG file, creating parent directories.
pub fn save_rgba(path: &Path, image: &RgbaImage) -> Result<(), Error> {
    ensure_parent_dir(path)?;
    let bytes = encode_png(image)?;
    fs::write(path, bytes)
        .map_err(|e| Error::Encode(format!("failed to write {}: {e}", path.display())))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), Error> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| Error::Encode(format!("failed to serialize JSON for {}: {e}", path.display())))?;
    fs::write(path, json)
        .map_err(|e| Error::Encode(format!("failed to write JSON {}: {e}", path.display())))
}

fn ensure_parent_dir(path: &Path) -> Result<(), Error> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| Error::Encode(format!("failed to create {}: {e}", parent.display())))?;
        }
    }
    Ok(())
}
