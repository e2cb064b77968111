//! RNG module - seeded piece selection
//!
//! Piece kinds are drawn uniformly at random from a seeded generator that
//! is injected into the game at construction, never from ambient global
//! randomness. Tests pin exact sequences with [`PieceGenerator::sequence`].

use gridfall_types::PieceKind;

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

/// Source of upcoming piece kinds.
///
/// `Random` draws each kind uniformly from the seeded LCG; `Sequence`
/// cycles through a pinned list, for deterministic tests and replays.
#[derive(Debug, Clone)]
pub enum PieceGenerator {
    Random(SimpleRng),
    Sequence { kinds: Vec<PieceKind>, next: usize },
}

impl PieceGenerator {
    /// Uniform random generator with the given seed
    pub fn random(seed: u32) -> Self {
        PieceGenerator::Random(SimpleRng::new(seed))
    }

    /// Generator that cycles through `kinds` forever.
    ///
    /// # Panics
    ///
    /// Panics on an empty list; a game must always be able to draw.
    pub fn sequence(kinds: Vec<PieceKind>) -> Self {
        assert!(!kinds.is_empty(), "piece sequence must not be empty");
        PieceGenerator::Sequence { kinds, next: 0 }
    }

    /// Draw the next piece kind
    pub fn draw(&mut self) -> PieceKind {
        match self {
            PieceGenerator::Random(rng) => {
                let idx = rng.next_range(PieceKind::ALL.len() as u32) as usize;
                PieceKind::ALL[idx]
            }
            PieceGenerator::Sequence { kinds, next } => {
                let kind = kinds[*next % kinds.len()];
                *next += 1;
                kind
            }
        }
    }
}

impl Default for PieceGenerator {
    fn default() -> Self {
        Self::random(1)
    }
}
