//! Buffer-level transforms: flip, rotate, recolor, composite
//!
//! All transforms are pure: they read the input buffer and return a fresh
//! one. Layer compositing is the only fallible operation (it requires every
//! layer to share the target dimensions).

use crate::io::error::{Result, TextureError, invalid_parameter};
use crate::raster::buffer::ColorBuffer;
use crate::raster::color::Color;

/// Mirror the buffer top-to-bottom
///
/// Applying the flip twice returns the original buffer.
pub fn flip_y(buffer: &ColorBuffer) -> ColorBuffer {
    let (width, height) = buffer.dimensions();
    ColorBuffer::from_fn(width, height, |x, y| buffer.pixel(x, height - 1 - y))
        .unwrap_or_else(|_| buffer.clone())
}

/// Rotate the buffer 90 degrees clockwise
///
/// A width x height input produces a height x width output; four
/// applications return the original buffer for any dimensions.
pub fn rotate90(buffer: &ColorBuffer) -> ColorBuffer {
    let (width, height) = buffer.dimensions();
    ColorBuffer::from_fn(height, width, |x, y| buffer.pixel(y, height - 1 - x))
        .unwrap_or_else(|_| buffer.clone())
}

/// Recolor a grayscale buffer along a gradient
///
/// Each pixel becomes `lerp(start, end, luminance)`, mapping black in the
/// source to `start` and white to `end`.
pub fn grayscale_to_gradient(buffer: &ColorBuffer, start: Color, end: Color) -> ColorBuffer {
    buffer.map_pixels(|px| start.lerp(end, px.luminance()))
}

/// Merge an ordered stack of layers into one buffer
///
/// Accumulation starts from transparent black sized as the first layer.
/// Each layer blends over the accumulator with its own alpha as the weight:
/// `acc = lerp(acc, px, px.a)`. A layer pixel with alpha 0 is invisible and
/// alpha 1 fully replaces the accumulated value; this is the layer-weighted
/// blend the original tool used, not standard "over" compositing.
///
/// # Errors
///
/// Returns `InvalidParameter` for an empty stack (no target size exists)
/// and `DimensionMismatch` if any layer's dimensions differ from the first
/// layer's.
pub fn composite_layers(layers: &[ColorBuffer]) -> Result<ColorBuffer> {
    let Some(first) = layers.first() else {
        return Err(invalid_parameter(
            "layers",
            &0,
            &"compositing requires at least one layer",
        ));
    };
    let target = first.dimensions();

    for (index, layer) in layers.iter().enumerate() {
        if layer.dimensions() != target {
            return Err(TextureError::DimensionMismatch {
                expected: target,
                actual: layer.dimensions(),
                layer: index,
            });
        }
    }

    let mut accumulated = ColorBuffer::filled(target.0, target.1, Color::CLEAR)?;
    for layer in layers {
        accumulated = ColorBuffer::from_fn(target.0, target.1, |x, y| {
            let px = layer.pixel(x, y);
            accumulated.pixel(x, y).lerp(px, px.a)
        })?;
    }
    Ok(accumulated)
}
