//! Seeded 2D gradient noise and multi-octave turbulence
//!
//! The gradient noise is a fixed classic Perlin implementation (quintic
//! fade, hashed lattice gradients from a seeded permutation table) rather
//! than a third-party noise crate, so output is bit-reproducible for a
//! given seed regardless of dependency versions.

use crate::io::configuration::DEFAULT_SEED;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const TABLE_SIZE: usize = 256;
const LATTICE_MASK: i64 = 255;

/// Coherent-noise evaluator with a fixed, seeded gradient lattice
#[derive(Debug, Clone)]
pub struct NoiseField {
    // Doubled permutation table so `table[hash + 1]` never wraps
    permutation: Vec<u8>,
}

impl Default for NoiseField {
    fn default() -> Self {
        Self::from_seed(DEFAULT_SEED)
    }
}

impl NoiseField {
    /// Create a noise field from a seed
    ///
    /// Identical seeds produce bit-identical noise.
    pub fn from_seed(seed: u64) -> Self {
        let mut table: Vec<u8> = (0..TABLE_SIZE).map(|i| i as u8).collect();
        let mut rng = StdRng::seed_from_u64(seed);

        // Fisher-Yates shuffle of the lattice hash table
        for i in (1..TABLE_SIZE).rev() {
            let j = rng.random_range(0..=i);
            table.swap(i, j);
        }

        let mut permutation = table.clone();
        permutation.extend_from_slice(&table);
        Self { permutation }
    }

    fn hash(&self, index: usize) -> usize {
        self.permutation.get(index).copied().unwrap_or(0) as usize
    }

    /// Smooth 2D gradient noise at a point, remapped to [0, 1]
    ///
    /// Continuous and deterministic: identical inputs always produce
    /// bit-identical output for the same seed.
    pub fn sample(&self, x: f32, y: f32) -> f32 {
        let cell_x = (x.floor() as i64 & LATTICE_MASK) as usize;
        let cell_y = (y.floor() as i64 & LATTICE_MASK) as usize;
        let fx = x - x.floor();
        let fy = y - y.floor();

        let u = fade(fx);
        let v = fade(fy);

        let a = self.hash(cell_x) + cell_y;
        let b = self.hash(cell_x + 1) + cell_y;

        let n00 = gradient(self.hash(a), fx, fy);
        let n10 = gradient(self.hash(b), fx - 1.0, fy);
        let n01 = gradient(self.hash(a + 1), fx, fy - 1.0);
        let n11 = gradient(self.hash(b + 1), fx - 1.0, fy - 1.0);

        let nx0 = (n10 - n00).mul_add(u, n00);
        let nx1 = (n11 - n01).mul_add(u, n01);
        let value = (nx1 - nx0).mul_add(v, nx0);

        // Raw Perlin output lies in [-1, 1]; remap and clamp to [0, 1]
        value.mul_add(0.5, 0.5).clamp(0.0, 1.0)
    }

    /// Layered turbulence in [0, 1]
    ///
    /// Accumulates `sample(x/n, y/n) * n` while halving `n` from `size`
    /// down to 1, then normalizes by the accumulated octave weight so the
    /// result stays in [0, 1]. Sizes below 1 collapse to a single octave:
    /// `size <= 0` samples at unit scale, `0 < size < 1` at scale `size`.
    pub fn turbulence(&self, x: f32, y: f32, size: f32) -> f32 {
        if size <= 0.0 {
            return self.sample(x, y);
        }
        if size < 1.0 {
            return self.sample(x / size, y / size);
        }

        let mut value = 0.0_f32;
        let mut weight = 0.0_f32;
        let mut n = size;
        while n >= 1.0 {
            value = self.sample(x / n, y / n).mul_add(n, value);
            weight += n;
            n /= 2.0;
        }
        value / weight
    }
}

// Quintic interpolant, 6t^5 - 15t^4 + 10t^3
fn fade(t: f32) -> f32 {
    t * t * t * t.mul_add(t.mul_add(6.0, -15.0), 10.0)
}

// Dot product with one of eight lattice gradient directions
const fn gradient(hash: usize, x: f32, y: f32) -> f32 {
    match hash & 7 {
        0 => x + y,
        1 => x - y,
        2 => -x + y,
        3 => -x - y,
        4 => x,
        5 => -x,
        6 => y,
        _ => -y,
    }
}
