//! Sequence generation with deterministic RNG.

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::moves::{MoveCatalog, MoveSpec};
use crate::player::Difficulty;

/// Shortest generated sequence.
pub const MIN_SEQUENCE_LEN: usize = 2;
/// Default cap on generated sequence length.
pub const DEFAULT_SEQUENCE_CAP: usize = 5;

/// An ordered list of moves shown to a player as a challenge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSequence {
    pub moves: Vec<MoveSpec>,
    pub difficulty: Difficulty,
    /// Sum of the move durations in seconds.
    pub total_duration: f32,
}

impl GameSequence {
    pub fn new(moves: Vec<MoveSpec>, difficulty: Difficulty) -> Self {
        let total_duration = moves.iter().map(|m| m.duration).sum();
        Self {
            moves,
            difficulty,
            total_duration,
        }
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
}

/// Difficulty class for a player holding the given letter count.
pub fn difficulty_for_letters(letters: usize) -> Difficulty {
    match letters {
        0 | 1 => Difficulty::Easy,
        2 | 3 => Difficulty::Medium,
        _ => Difficulty::Hard,
    }
}

/// Sequence length for a player holding the given letter count.
/// Grows with accumulated letters, capped.
pub fn length_for_letters(letters: usize, cap: usize) -> usize {
    (MIN_SEQUENCE_LEN + letters).min(cap.max(MIN_SEQUENCE_LEN))
}

/// Generates fresh sequences from the catalog with a seeded RNG.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SequenceGenerator {
    rng: ChaCha8Rng,
    seed: u64,
}

impl SequenceGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draws `length` moves uniformly at random (with replacement) from the
    /// catalog subset matching `difficulty`.
    ///
    /// Returns None if the catalog has no moves of that difficulty.
    pub fn generate(
        &mut self,
        catalog: &MoveCatalog,
        difficulty: Difficulty,
        length: usize,
    ) -> Option<GameSequence> {
        let pool = catalog.by_difficulty(difficulty);
        if pool.is_empty() {
            return None;
        }

        let moves = (0..length)
            .map(|_| pool[self.rng.random_range(0..pool.len())].clone())
            .collect();

        Some(GameSequence::new(moves, difficulty))
    }

    /// Generates the sequence for a player holding `letters` letters.
    pub fn generate_for_letters(
        &mut self,
        catalog: &MoveCatalog,
        letters: usize,
        cap: usize,
    ) -> Option<GameSequence> {
        let difficulty = difficulty_for_letters(letters);
        let length = length_for_letters(letters, cap);
        self.generate(catalog, difficulty, length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_scaling() {
        assert_eq!(difficulty_for_letters(0), Difficulty::Easy);
        assert_eq!(difficulty_for_letters(1), Difficulty::Easy);
        assert_eq!(difficulty_for_letters(2), Difficulty::Medium);
        assert_eq!(difficulty_for_letters(3), Difficulty::Medium);
        assert_eq!(difficulty_for_letters(4), Difficulty::Hard);
        assert_eq!(difficulty_for_letters(7), Difficulty::Hard);
    }

    #[test]
    fn test_length_scaling_capped() {
        assert_eq!(length_for_letters(0, 5), 2);
        assert_eq!(length_for_letters(2, 5), 4);
        assert_eq!(length_for_letters(4, 5), 5);
        assert_eq!(length_for_letters(10, 5), 5);
        // Cap below the minimum is clamped up.
        assert_eq!(length_for_letters(0, 1), 2);
    }

    #[test]
    fn test_generated_moves_match_difficulty() {
        let catalog = MoveCatalog::builtin();
        let mut generator = SequenceGenerator::new(42);

        for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            let sequence = generator.generate(&catalog, difficulty, 6).unwrap();
            assert_eq!(sequence.len(), 6);
            assert!(sequence.moves.iter().all(|m| m.difficulty == difficulty));
        }
    }

    #[test]
    fn test_total_duration() {
        let catalog = MoveCatalog::builtin();
        let mut generator = SequenceGenerator::new(7);

        let sequence = generator.generate(&catalog, Difficulty::Easy, 4).unwrap();
        let expected: f32 = sequence.moves.iter().map(|m| m.duration).sum();
        assert!((sequence.total_duration - expected).abs() < f32::EPSILON);
    }

    #[test]
    fn test_deterministic_generation() {
        let catalog = MoveCatalog::builtin();
        let mut gen1 = SequenceGenerator::new(99);
        let mut gen2 = SequenceGenerator::new(99);

        for _ in 0..10 {
            let s1 = gen1.generate(&catalog, Difficulty::Medium, 4).unwrap();
            let s2 = gen2.generate(&catalog, Difficulty::Medium, 4).unwrap();
            let ids1: Vec<_> = s1.moves.iter().map(|m| m.id.as_str()).collect();
            let ids2: Vec<_> = s2.moves.iter().map(|m| m.id.as_str()).collect();
            assert_eq!(ids1, ids2);
        }
    }

    #[test]
    fn test_generate_for_letters_respects_cap() {
        let catalog = MoveCatalog::builtin();
        let mut generator = SequenceGenerator::new(3);

        let sequence = generator
            .generate_for_letters(&catalog, 4, DEFAULT_SEQUENCE_CAP)
            .unwrap();
        assert_eq!(sequence.difficulty, Difficulty::Hard);
        assert_eq!(sequence.len(), DEFAULT_SEQUENCE_CAP);
    }
}
