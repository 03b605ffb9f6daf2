//! RNG module - deterministic piece sequencing
//!
//! A simple LCG keeps piece draws reproducible from a seed, which the tests
//! rely on. Draws are uniform over the seven shapes, with one twist: the
//! caller may exclude a kind, in which case the sampler redraws until the
//! result differs. The game uses this to keep the lookahead from repeating
//! the piece that is active at draw time.

use crate::types::{PieceKind, ALL_KINDS};

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
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }
}

/// Uniform piece sampler with an anti-repeat rule
#[derive(Debug, Clone)]
pub struct PieceSampler {
    rng: SimpleRng,
}

impl PieceSampler {
    /// Create a new sampler with the given seed
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }

    /// Draw a kind uniformly, redrawing while it matches `exclude`.
    ///
    /// The exclusion compares only against the single kind passed in; the
    /// sampler keeps no memory of earlier draws.
    pub fn draw(&mut self, exclude: Option<PieceKind>) -> PieceKind {
        loop {
            let kind = ALL_KINDS[self.rng.next_range(ALL_KINDS.len() as u32) as usize];
            if Some(kind) != exclude {
                return kind;
            }
        }
    }
}
