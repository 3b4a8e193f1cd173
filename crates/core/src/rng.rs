//! RNG module - where new pieces come from
//!
//! The game loop asks a [`PieceSource`] for the next shape and color. The
//! default source draws both uniformly and independently from a seeded LCG;
//! tests swap in a [`ScriptedSource`] to get exact sequences.

use crate::types::{BlockColor, ShapeKind};

/// Supplier of the next piece's shape and color
pub trait PieceSource {
    fn next_piece(&mut self) -> (ShapeKind, BlockColor);
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
        // a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max).
    ///
    /// Uses the high bits; the low bits of a power-of-two LCG cycle quickly.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Uniform, independent shape and color draws
#[derive(Debug, Clone)]
pub struct RandomSource {
    rng: SimpleRng,
}

impl RandomSource {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }
}

impl Default for RandomSource {
    fn default() -> Self {
        Self::new(1)
    }
}

impl PieceSource for RandomSource {
    fn next_piece(&mut self) -> (ShapeKind, BlockColor) {
        let kind = ShapeKind::ALL[self.rng.next_range(ShapeKind::ALL.len() as u32) as usize];
        let color = BlockColor::ALL[self.rng.next_range(BlockColor::ALL.len() as u32) as usize];
        (kind, color)
    }
}

/// Replays a fixed list of pieces, wrapping around at the end
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    pieces: Vec<(ShapeKind, BlockColor)>,
    index: usize,
}

impl ScriptedSource {
    /// An empty script falls back to a red I piece.
    pub fn new(pieces: Vec<(ShapeKind, BlockColor)>) -> Self {
        Self { pieces, index: 0 }
    }

    /// Same shape every time, always in the same color
    pub fn repeat(kind: ShapeKind, color: BlockColor) -> Self {
        Self::new(vec![(kind, color)])
    }
}

impl PieceSource for ScriptedSource {
    fn next_piece(&mut self) -> (ShapeKind, BlockColor) {
        if self.pieces.is_empty() {
            return (ShapeKind::I, BlockColor::Red);
        }
        let piece = self.pieces[self.index % self.pieces.len()];
        self.index = self.index.wrapping_add(1);
        piece
    }
}
