//! Procedural texture synthesis and raster editing over RGBA pixel buffers
//!
//! Pattern generators sample layered coherent noise to produce grayscale
//! textures, transforms recolor and composite buffers, and the rasterizer
//! renders line, rectangle, and circle primitives for interactive editing
//! sessions backed by an undo snapshot history.

#![forbid(unsafe_code)]

/// Input/output operations, CLI, and error handling
pub mod io;
/// Pixel buffer model, primitive rasterization, and buffer transforms
pub mod raster;
/// Interactive editing session with tool state and undo history
pub mod session;
/// Coherent-noise evaluation and procedural pattern generators
pub mod synthesis;

pub use io::error::{Result, TextureError};
