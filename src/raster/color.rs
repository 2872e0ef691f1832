//! Normalized RGBA color values and interpolation

use crate::io::error::{TextureError, invalid_parameter};
use std::str::FromStr;

// Perceptual grayscale weights (ITU-R BT.601)
const LUMA_RED: f32 = 0.299;
const LUMA_GREEN: f32 = 0.587;
const LUMA_BLUE: f32 = 0.114;

/// An RGBA color with each channel normalized to [0, 1]
///
/// Channels are not clamped at construction; consumers that require the
/// normalized range clamp on use.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red channel
    pub r: f32,
    /// Green channel
    pub g: f32,
    /// Blue channel
    pub b: f32,
    /// Alpha channel (0 transparent, 1 opaque)
    pub a: f32,
}

impl Color {
    /// Opaque black
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    /// Opaque white
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
    /// Fully transparent black
    pub const CLEAR: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Create a color from four channel values
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque gray level
    pub const fn gray(level: f32) -> Self {
        Self::new(level, level, level, 1.0)
    }

    /// Interpolate between two colors
    ///
    /// The blend factor is clamped to [0, 1] before interpolation, so the
    /// result always lies between the two endpoints channel-wise.
    #[must_use]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self::new(
            (other.r - self.r).mul_add(t, self.r),
            (other.g - self.g).mul_add(t, self.g),
            (other.b - self.b).mul_add(t, self.b),
            (other.a - self.a).mul_add(t, self.a),
        )
    }

    /// Perceptual grayscale value of the RGB channels, clamped to [0, 1]
    pub fn luminance(self) -> f32 {
        LUMA_RED
            .mul_add(self.r, LUMA_GREEN.mul_add(self.g, LUMA_BLUE * self.b))
            .clamp(0.0, 1.0)
    }
}

fn hex_channel(digits: &str, text: &str) -> Result<f32, TextureError> {
    let value = u8::from_str_radix(digits, 16)
        .map_err(|e| invalid_parameter("color", &text, &format!("invalid hex digits: {e}")))?;
    Ok(f32::from(value) / 255.0)
}

impl FromStr for Color {
    type Err = TextureError;

    /// Parse a `#rrggbb` or `#rrggbbaa` hex color (leading `#` optional)
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let digits = text.strip_prefix('#').unwrap_or(text);
        if digits.len() != 6 && digits.len() != 8 {
            return Err(invalid_parameter(
                "color",
                &text,
                &"expected 6 or 8 hex digits",
            ));
        }

        let r = hex_channel(digits.get(0..2).unwrap_or_default(), text)?;
        let g = hex_channel(digits.get(2..4).unwrap_or_default(), text)?;
        let b = hex_channel(digits.get(4..6).unwrap_or_default(), text)?;
        let a = match digits.get(6..8) {
            Some(alpha) => hex_channel(alpha, text)?,
            None => 1.0,
        };

        Ok(Self::new(r, g, b, a))
    }
}
