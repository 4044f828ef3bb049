//! Piece generator - seeded uniform random sequence with lookahead
//!
//! Draws are uniform over the seven kinds, with no bag or history bias. The
//! queue keeps `depth + 1` kinds buffered so "next piece" previews can peek
//! without consuming or perturbing the sequence; drawing the head immediately
//! appends a fresh draw, so the buffer never empties.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::types::{PieceKind, DEFAULT_PREVIEW};

/// Infinite piece sequence with a peekable lookahead buffer.
#[derive(Debug, Clone)]
pub struct PieceQueue {
    rng: StdRng,
    buffer: VecDeque<PieceKind>,
    depth: usize,
    seed: u64,
}

impl PieceQueue {
    /// Create a queue with the default preview depth.
    pub fn new(seed: u64) -> Self {
        Self::with_depth(seed, DEFAULT_PREVIEW)
    }

    /// Create a queue buffering `depth + 1` upcoming kinds.
    pub fn with_depth(seed: u64, depth: usize) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let buffer = (0..depth + 1).map(|_| uniform_kind(&mut rng)).collect();
        Self {
            rng,
            buffer,
            depth,
            seed,
        }
    }

    /// Consume the head of the sequence and refill the buffer.
    pub fn draw(&mut self) -> PieceKind {
        let next = uniform_kind(&mut self.rng);
        self.buffer.push_back(next);
        // The buffer holds depth + 2 entries here, so the pop cannot fail.
        self.buffer.pop_front().unwrap_or(next)
    }

    /// Next kind to be drawn, without consuming it.
    pub fn peek(&self) -> PieceKind {
        self.buffer[0]
    }

    /// The first `depth` buffered kinds, nearest first.
    pub fn previews(&self) -> impl Iterator<Item = PieceKind> + '_ {
        self.buffer.iter().take(self.depth).copied()
    }

    /// Preview depth this queue was built with.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Construction seed (for restarting with the same sequence).
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Default for PieceQueue {
    fn default() -> Self {
        Self::new(1)
    }
}

fn uniform_kind<R: Rng>(rng: &mut R) -> PieceKind {
    PieceKind::ALL[rng.gen_range(0..PieceKind::ALL.len())]
}
