//! Piece source module - random piece generation
//!
//! Supplies a fresh [`PieceType`] on demand for the initial fill and for
//! refilling cleared cells. The source is the seam for determinism: the
//! default [`UniformSource`] draws uniformly from a catalog using a seeded
//! LCG, and [`ScriptedSource`] replays a fixed sequence so tests can lay out
//! exact boards.

use anyhow::{bail, Result};
use match_grid_types::{PieceType, DEFAULT_CATALOG};

/// Supplies a new piece type on demand.
///
/// Owned exclusively by the session; queried only during initial fill and
/// cascade refill.
pub trait PieceSource {
    fn next_type(&mut self) -> PieceType;
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Get the current state (for restarting with the same sequence)
    pub fn seed(&self) -> u32 {
        self.state
    }
}

/// Uniform-random source over a piece type catalog
#[derive(Debug, Clone)]
pub struct UniformSource {
    catalog: Vec<PieceType>,
    rng: SimpleRng,
}

impl UniformSource {
    /// Create a source drawing uniformly from `catalog`.
    ///
    /// An empty catalog is a configuration error: the board could never be
    /// filled.
    pub fn new(catalog: Vec<PieceType>, seed: u32) -> Result<Self> {
        if catalog.is_empty() {
            bail!("piece type catalog must not be empty");
        }
        Ok(Self {
            catalog,
            rng: SimpleRng::new(seed),
        })
    }

    /// Source over the default catalog with the given seed
    pub fn from_seed(seed: u32) -> Self {
        Self {
            catalog: DEFAULT_CATALOG.to_vec(),
            rng: SimpleRng::new(seed),
        }
    }

    pub fn catalog(&self) -> &[PieceType] {
        &self.catalog
    }

    /// Current RNG state
    pub fn seed(&self) -> u32 {
        self.rng.seed()
    }
}

impl PieceSource for UniformSource {
    fn next_type(&mut self) -> PieceType {
        let idx = self.rng.next_range(self.catalog.len() as u32) as usize;
        self.catalog[idx]
    }
}

/// Deterministic source replaying a fixed sequence, cycling when exhausted
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    sequence: Vec<PieceType>,
    pos: usize,
}

impl ScriptedSource {
    pub fn new(sequence: Vec<PieceType>) -> Result<Self> {
        if sequence.is_empty() {
            bail!("scripted sequence must not be empty");
        }
        Ok(Self { sequence, pos: 0 })
    }

    /// How many pieces have been drawn so far
    pub fn drawn(&self) -> usize {
        self.pos
    }
}

impl PieceSource for ScriptedSource {
    fn next_type(&mut self) -> PieceType {
        let t = self.sequence[self.pos % self.sequence.len()];
        self.pos += 1;
        t
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        // Same seed should produce same sequence
        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_zero_seed_is_remapped() {
        let mut rng = SimpleRng::new(0);
        assert_ne!(rng.next_u32(), 0u32.wrapping_mul(1664525));
    }

    #[test]
    fn test_uniform_source_deterministic() {
        let mut a = UniformSource::from_seed(42);
        let mut b = UniformSource::from_seed(42);

        for _ in 0..50 {
            assert_eq!(a.next_type(), b.next_type());
        }
    }

    #[test]
    fn test_uniform_source_stays_in_catalog() {
        let catalog = vec![DEFAULT_CATALOG[0], DEFAULT_CATALOG[3]];
        let mut source = UniformSource::new(catalog.clone(), 7).unwrap();

        for _ in 0..100 {
            assert!(catalog.contains(&source.next_type()));
        }
    }

    #[test]
    fn test_uniform_source_rejects_empty_catalog() {
        assert!(UniformSource::new(Vec::new(), 1).is_err());
    }

    #[test]
    fn test_scripted_source_cycles() {
        let seq = vec![DEFAULT_CATALOG[0], DEFAULT_CATALOG[1], DEFAULT_CATALOG[2]];
        let mut source = ScriptedSource::new(seq.clone()).unwrap();

        for i in 0..7 {
            assert_eq!(source.next_type(), seq[i % 3]);
        }
        assert_eq!(source.drawn(), 7);
    }

    #[test]
    fn test_scripted_source_rejects_empty() {
        assert!(ScriptedSource::new(Vec::new()).is_err());
    }
}
