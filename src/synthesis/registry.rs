//! Static parameter schemas for the pattern generators
//!
//! Each generator declares an ordered list of named numeric parameters with
//! defaults. Callers supply overrides by name; omitted parameters take their
//! declared default and unrecognized names are ignored, matching
//! interactive-tool tolerance. This registry is resolved at compile time,
//! replacing runtime introspection over generator signatures.

use crate::io::error::{Result, invalid_parameter};
use num_traits::ToPrimitive;

/// Numeric type of a generator parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    /// Whole-number parameter; overrides are truncated toward zero
    Integer,
    /// Floating-point parameter
    Float,
}

/// Declaration of a single named generator parameter
#[derive(Debug, Clone, Copy)]
pub struct ParamSpec {
    /// Parameter name used for override lookup
    pub name: &'static str,
    /// Numeric type of the parameter
    pub kind: ParamKind,
    /// Value used when no override is supplied
    pub default: f64,
}

impl ParamSpec {
    /// Declare an integer parameter
    pub const fn integer(name: &'static str, default: f64) -> Self {
        Self {
            name,
            kind: ParamKind::Integer,
            default,
        }
    }

    /// Declare a float parameter
    pub const fn float(name: &'static str, default: f64) -> Self {
        Self {
            name,
            kind: ParamKind::Float,
            default,
        }
    }
}

/// Parameter values resolved against a schema
///
/// Holds one value per schema entry, in schema order.
#[derive(Debug, Clone)]
pub struct ResolvedParams {
    values: Vec<(&'static str, f64)>,
}

impl ResolvedParams {
    /// Resolve overrides against a schema
    ///
    /// Every schema entry receives either its override (matched by name) or
    /// its default. Integer parameters truncate fractional overrides.
    /// Override names absent from the schema are ignored.
    pub fn resolve(schema: &'static [ParamSpec], overrides: &[(String, f64)]) -> Self {
        let values = schema
            .iter()
            .map(|spec| {
                let supplied = overrides
                    .iter()
                    .find(|(name, _)| name.as_str() == spec.name)
                    .map(|(_, value)| *value);
                let value = supplied.unwrap_or(spec.default);
                let value = match spec.kind {
                    ParamKind::Integer => value.trunc(),
                    ParamKind::Float => value,
                };
                (spec.name, value)
            })
            .collect();
        Self { values }
    }

    /// Look up a resolved value by name
    pub fn get(&self, name: &str) -> Option<f64> {
        self.values
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, value)| *value)
    }

    /// Look up a resolved value as f32, falling back to a default
    pub fn float_or(&self, name: &str, default: f32) -> f32 {
        self.get(name).map_or(default, |v| v as f32)
    }

    /// Resolved output dimensions as (width, height)
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if either dimension is missing,
    /// non-positive, or too large for `u32`; the report carries the value
    /// as supplied, not a saturated cast of it
    pub fn dimensions(&self) -> Result<(u32, u32)> {
        let width = self.dimension("width")?;
        let height = self.dimension("height")?;
        Ok((width, height))
    }

    fn dimension(&self, name: &'static str) -> Result<u32> {
        let supplied = self.get(name).unwrap_or(0.0);
        match supplied.to_u32() {
            Some(value) if value > 0 => Ok(value),
            _ => Err(invalid_parameter(
                name,
                &supplied,
                &"must be a positive integer representable in 32 bits",
            )),
        }
    }
}
