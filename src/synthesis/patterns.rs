//! Procedural pattern generators over a noise field
//!
//! Each generator visits every pixel exactly once and writes
//! `lerp(black, white, t)` for a pattern-specific scalar t in [0, 1]. For
//! fixed parameters and seed the output is bit-reproducible. The generator
//! set is a closed enum dispatching to plain functions, replacing the
//! original design's runtime polymorphism over generator callables.

use crate::io::configuration::DEFAULT_TEXTURE_SIZE;
use crate::io::error::Result;
use crate::raster::buffer::ColorBuffer;
use crate::raster::color::Color;
use crate::synthesis::noise::NoiseField;
use crate::synthesis::registry::{ParamSpec, ResolvedParams};
use std::f32::consts::PI;

const SIZE: f64 = DEFAULT_TEXTURE_SIZE as f64;

const MARBLE_PARAMS: &[ParamSpec] = &[
    ParamSpec::integer("width", SIZE),
    ParamSpec::integer("height", SIZE),
    ParamSpec::float("x_period", 5.0),
    ParamSpec::float("y_period", 10.0),
    ParamSpec::float("turb_power", 300.0),
    ParamSpec::float("turb_size", 32.0),
];

const WOOD_PARAMS: &[ParamSpec] = &[
    ParamSpec::integer("width", SIZE),
    ParamSpec::integer("height", SIZE),
    ParamSpec::float("xy_period", 12.0),
    ParamSpec::float("turb_power", 0.1),
    ParamSpec::float("turb_size", 32.0),
];

const CLOUDS_PARAMS: &[ParamSpec] = &[
    ParamSpec::integer("width", SIZE),
    ParamSpec::integer("height", SIZE),
    ParamSpec::float("size", 64.0),
];

const XOR_PARAMS: &[ParamSpec] = &[
    ParamSpec::integer("width", SIZE),
    ParamSpec::integer("height", SIZE),
];

/// The closed set of procedural pattern generators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneratorKind {
    /// Sine bands warped by turbulence
    Marble,
    /// Concentric rings warped by turbulence
    Wood,
    /// Raw multi-octave turbulence
    Clouds,
    /// Coordinate XOR interference pattern
    Xor,
}

impl GeneratorKind {
    /// Every registered generator, in menu order
    pub const ALL: [Self; 4] = [Self::Marble, Self::Wood, Self::Clouds, Self::Xor];

    /// Generator name as used by the parameter source
    pub const fn name(self) -> &'static str {
        match self {
            Self::Marble => "marble",
            Self::Wood => "wood",
            Self::Clouds => "clouds",
            Self::Xor => "xor",
        }
    }

    /// Look up a generator by name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// Ordered parameter schema for this generator
    pub const fn schema(self) -> &'static [ParamSpec] {
        match self {
            Self::Marble => MARBLE_PARAMS,
            Self::Wood => WOOD_PARAMS,
            Self::Clouds => CLOUDS_PARAMS,
            Self::Xor => XOR_PARAMS,
        }
    }

    /// Render this pattern into a freshly allocated buffer
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the resolved width or height is not a
    /// positive integer representable in 32 bits
    pub fn generate(self, params: &ResolvedParams, noise: &NoiseField) -> Result<ColorBuffer> {
        let (width, height) = params.dimensions()?;
        match self {
            Self::Marble => marble(width, height, params, noise),
            Self::Wood => wood(width, height, params, noise),
            Self::Clouds => clouds(width, height, params, noise),
            Self::Xor => xor(width, height),
        }
    }
}

fn grayscale(t: f32) -> Color {
    Color::BLACK.lerp(Color::WHITE, t)
}

// x_period and y_period together set the band angle; both zero degenerates
// to a turbulence pattern, turb_power zero to a plain sine pattern.
fn marble(
    width: u32,
    height: u32,
    params: &ResolvedParams,
    noise: &NoiseField,
) -> Result<ColorBuffer> {
    let x_period = params.float_or("x_period", 5.0);
    let y_period = params.float_or("y_period", 10.0);
    let turb_power = params.float_or("turb_power", 300.0);
    let turb_size = params.float_or("turb_size", 32.0);
    let (w, h) = (width as f32, height as f32);

    ColorBuffer::from_fn(width, height, |x, y| {
        let (xf, yf) = (x as f32, y as f32);
        let xy = xf * x_period / h
            + yf * y_period / w
            + turb_power * noise.turbulence(xf, yf, turb_size) / 256.0;
        grayscale((xy * PI).sin().abs())
    })
}

fn wood(
    width: u32,
    height: u32,
    params: &ResolvedParams,
    noise: &NoiseField,
) -> Result<ColorBuffer> {
    let xy_period = params.float_or("xy_period", 12.0);
    let turb_power = params.float_or("turb_power", 0.1);
    let turb_size = params.float_or("turb_size", 32.0);
    let (w, h) = (width as f32, height as f32);

    ColorBuffer::from_fn(width, height, |x, y| {
        let dx = (x as f32 - h / 2.0) / h;
        let dy = (y as f32 - w / 2.0) / w;
        let dist = dy.mul_add(dy, dx * dx).sqrt()
            + turb_power * noise.turbulence(x as f32, y as f32, turb_size) / 256.0;
        grayscale((2.0 * PI * xy_period * dist).sin().abs())
    })
}

fn clouds(
    width: u32,
    height: u32,
    params: &ResolvedParams,
    noise: &NoiseField,
) -> Result<ColorBuffer> {
    let size = params.float_or("size", 64.0);
    ColorBuffer::from_fn(width, height, |x, y| {
        grayscale(noise.turbulence(x as f32, y as f32, size))
    })
}

// Sharpest when width and height are powers of two
fn xor(width: u32, height: u32) -> Result<ColorBuffer> {
    let scale = width.max(height) as f32;
    ColorBuffer::from_fn(width, height, |x, y| grayscale((x ^ y) as f32 / scale))
}
