//! RNG module - uniform random piece selection
//!
//! Pieces are drawn independently and uniformly from the seven catalog entries.
//! There is no bag: streaks of the same piece are possible.
//!
//! Also provides a simple LCG so games are reproducible from a seed.

use crate::types::{PieceKind, PIECE_COUNT};

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
        // Low LCG bits cycle with short periods; use the high half.
        (self.next_u32() >> 16) % max.max(1)
    }
}

/// Supplies the kind of each newly spawned piece.
pub trait PieceSource {
    fn next_piece(&mut self) -> PieceKind;
}

/// Uniform, history-free piece selection.
#[derive(Debug, Clone)]
pub struct UniformPieces {
    rng: SimpleRng,
    seed: u32,
}

impl UniformPieces {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
            seed,
        }
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }
}

impl PieceSource for UniformPieces {
    fn next_piece(&mut self) -> PieceKind {
        let i = self.rng.next_range(PIECE_COUNT as u32) as usize;
        PieceKind::ALL[i]
    }
}

/// Replays a fixed sequence of pieces, cycling when it runs out.
///
/// Handy for scripted games and tests.
#[derive(Debug, Clone)]
pub struct FixedPieces {
    sequence: Vec<PieceKind>,
    pos: usize,
}

impl FixedPieces {
    pub fn new(sequence: impl Into<Vec<PieceKind>>) -> Self {
        let mut sequence = sequence.into();
        if sequence.is_empty() {
            sequence.push(PieceKind::O);
        }
        Self { sequence, pos: 0 }
    }
}

impl PieceSource for FixedPieces {
    fn next_piece(&mut self) -> PieceKind {
        let kind = self.sequence[self.pos % self.sequence.len()];
        self.pos = self.pos.wrapping_add(1);
        kind
    }
}

impl<S: PieceSource + ?Sized> PieceSource for Box<S> {
    fn next_piece(&mut self) -> PieceKind {
        (**self).next_piece()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut a = SimpleRng::new(42);
        let mut b = SimpleRng::new(42);
        for _ in 0..100 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn test_zero_seed_is_usable() {
        let mut rng = SimpleRng::new(0);
        assert_ne!(rng.next_u32(), 0);
    }

    #[test]
    fn test_uniform_pieces_cover_catalog() {
        let mut source = UniformPieces::new(7);
        let mut seen = [false; PIECE_COUNT];
        for _ in 0..500 {
            seen[source.next_piece().index()] = true;
        }
        assert!(seen.iter().all(|&s| s), "all kinds should appear: {seen:?}");
    }

    #[test]
    fn test_fixed_pieces_cycle() {
        let mut source = FixedPieces::new(vec![PieceKind::I, PieceKind::O]);
        assert_eq!(source.next_piece(), PieceKind::I);
        assert_eq!(source.next_piece(), PieceKind::O);
        assert_eq!(source.next_piece(), PieceKind::I);
    }
}
