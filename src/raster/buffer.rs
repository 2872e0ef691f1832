//! RGBA color buffers with row-major pixel storage
//!
//! The buffer is the substrate every generator, transform, and rasterization
//! function operates on. Pixels use a top-left origin: (0, 0) is the top-left
//! corner, y grows downward, and pixel (x, y) sits at row-major index
//! `x + y * width`.

use crate::io::error::{Result, invalid_dimensions};
use crate::raster::color::Color;
use ndarray::Array2;

/// A width x height grid of RGBA pixels
///
/// Dimensions are always positive; construction fails on zero width or
/// height. The pixel count is `width * height` at all times.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorBuffer {
    // Indexed [row, col] = [y, x]; ndarray's default layout is row-major
    pixels: Array2<Color>,
}

impl ColorBuffer {
    /// Create a fully transparent buffer
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimensions` if either dimension is zero
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::filled(width, height, Color::CLEAR)
    }

    /// Create a buffer filled with a single color
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimensions` if either dimension is zero
    pub fn filled(width: u32, height: u32, color: Color) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(invalid_dimensions(width, height));
        }
        Ok(Self {
            pixels: Array2::from_elem((height as usize, width as usize), color),
        })
    }

    /// Create a buffer by evaluating a function at every pixel coordinate
    ///
    /// The function receives (x, y) with the top-left origin convention and
    /// is called exactly once per pixel.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimensions` if either dimension is zero
    pub fn from_fn(width: u32, height: u32, f: impl Fn(u32, u32) -> Color) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(invalid_dimensions(width, height));
        }
        Ok(Self {
            pixels: Array2::from_shape_fn((height as usize, width as usize), |(y, x)| {
                f(x as u32, y as u32)
            }),
        })
    }

    /// Create a buffer from a row-major pixel sequence
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimensions` if either dimension is zero or the
    /// sequence length is not `width * height`
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Color>) -> Result<Self> {
        if width == 0 || height == 0 || pixels.len() != (width as usize) * (height as usize) {
            return Err(invalid_dimensions(width, height));
        }
        match Array2::from_shape_vec((height as usize, width as usize), pixels) {
            Ok(array) => Ok(Self { pixels: array }),
            Err(_) => Err(invalid_dimensions(width, height)),
        }
    }

    /// Buffer width in pixels
    pub fn width(&self) -> u32 {
        self.pixels.ncols() as u32
    }

    /// Buffer height in pixels
    pub fn height(&self) -> u32 {
        self.pixels.nrows() as u32
    }

    /// Buffer dimensions as (width, height)
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    /// Read the pixel at signed coordinates, if in bounds
    pub fn get(&self, x: i32, y: i32) -> Option<Color> {
        let col = usize::try_from(x).ok()?;
        let row = usize::try_from(y).ok()?;
        self.pixels.get([row, col]).copied()
    }

    /// Read the pixel at unsigned coordinates, transparent outside bounds
    pub(crate) fn pixel(&self, x: u32, y: u32) -> Color {
        self.pixels
            .get([y as usize, x as usize])
            .copied()
            .unwrap_or(Color::CLEAR)
    }

    /// Write a pixel, silently clipping out-of-bounds coordinates
    ///
    /// Drawing code tolerates coordinates outside the canvas instead of
    /// failing, matching interactive-tool expectations.
    pub(crate) fn set(&mut self, x: i32, y: i32, color: Color) {
        let (Ok(col), Ok(row)) = (usize::try_from(x), usize::try_from(y)) else {
            return;
        };
        if let Some(px) = self.pixels.get_mut([row, col]) {
            *px = color;
        }
    }

    /// Iterate pixels in row-major order
    pub fn pixels(&self) -> impl Iterator<Item = &Color> {
        self.pixels.iter()
    }

    /// Apply a function to every pixel, producing a fresh buffer
    #[must_use]
    pub fn map_pixels(&self, f: impl Fn(Color) -> Color) -> Self {
        Self {
            pixels: self.pixels.map(|&c| f(c)),
        }
    }
}
