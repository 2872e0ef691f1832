//! Pixel buffer model, primitive rasterization, and buffer transforms

/// RGBA color buffers with row-major pixel storage
pub mod buffer;
/// Normalized RGBA color values and interpolation
pub mod color;
/// Shape primitives and pure rasterization functions
pub mod draw;
/// Buffer-level transforms: flip, rotate, recolor, composite
pub mod transform;

pub use buffer::ColorBuffer;
pub use color::Color;
pub use draw::Shape;
