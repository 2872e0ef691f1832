//! PNG decode/encode at the buffer boundary
//!
//! The core never touches raw file bytes; this module converts between
//! `ColorBuffer` and 8-bit RGBA images on disk. Channel values are scaled
//! by 255 and rounded on export, so exactly-representable levels survive a
//! round trip unchanged.

use crate::io::error::{Result, TextureError};
use crate::raster::buffer::ColorBuffer;
use crate::raster::color::Color;
use image::{Rgba, RgbaImage};
use std::path::Path;

const CHANNEL_MAX: f32 = 255.0;

/// Decode a PNG (or any format the image crate recognizes) into a buffer
///
/// # Errors
///
/// Returns `ImageLoad` for unreadable or malformed image files and
/// `InvalidDimensions` for images with a zero dimension
pub fn load_texture(path: &Path) -> Result<ColorBuffer> {
    let decoded = image::open(path)
        .map_err(|e| TextureError::ImageLoad {
            path: path.to_path_buf(),
            source: e,
        })?
        .to_rgba8();

    let (width, height) = decoded.dimensions();
    let pixels = decoded
        .pixels()
        .map(|&Rgba([r, g, b, a])| {
            Color::new(
                f32::from(r) / CHANNEL_MAX,
                f32::from(g) / CHANNEL_MAX,
                f32::from(b) / CHANNEL_MAX,
                f32::from(a) / CHANNEL_MAX,
            )
        })
        .collect();

    ColorBuffer::from_pixels(width, height, pixels)
}

/// Encode a buffer as a PNG file, creating parent directories as needed
///
/// # Errors
///
/// Returns `FileSystem` if the parent directory cannot be created and
/// `ImageExport` if encoding or writing fails
pub fn save_texture(buffer: &ColorBuffer, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| TextureError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    let image = RgbaImage::from_fn(buffer.width(), buffer.height(), |x, y| {
        let px = buffer.pixel(x, y);
        Rgba([
            quantize(px.r),
            quantize(px.g),
            quantize(px.b),
            quantize(px.a),
        ])
    });

    image.save(path).map_err(|e| TextureError::ImageExport {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}

fn quantize(channel: f32) -> u8 {
    (channel.clamp(0.0, 1.0) * CHANNEL_MAX).round() as u8
}
