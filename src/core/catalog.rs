//! Piece selection - independent uniform draws from the catalog
//!
//! Each spawn picks one of the seven kinds uniformly at random, with
//! no bag or anti-streak mechanism: runs of the same piece are possible
//! by design of the source behavior. A seeded LCG keeps sessions
//! replayable and tests deterministic.

use crate::types::PieceKind;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // A zero seed would produce all zeros.
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

/// Uniform-random source of piece kinds
#[derive(Debug, Clone)]
pub struct ShapeCatalog {
    rng: SimpleRng,
}

impl ShapeCatalog {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }

    /// Draw the next piece kind
    pub fn next_piece(&mut self) -> PieceKind {
        let idx = self.rng.next_range(PieceKind::ALL.len() as u32) as usize;
        PieceKind::ALL[idx]
    }

    /// Current RNG state (for restarting with the same sequence)
    pub fn seed(&self) -> u32 {
        self.rng.state
    }
}

impl Default for ShapeCatalog {
    fn default() -> Self {
        Self::new(1)
    }
}
