//! Coherent-noise evaluation and procedural pattern generators

/// Seeded gradient noise and multi-octave turbulence
pub mod noise;
/// The closed set of pattern generators
pub mod patterns;
/// Static parameter schemas and override resolution
pub mod registry;

pub use noise::NoiseField;
pub use patterns::GeneratorKind;
pub use registry::{ParamKind, ParamSpec, ResolvedParams};
