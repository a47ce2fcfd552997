//! Simulated turn outcomes.
//!
//! Accuracy is not measured from real input yet; it is drawn from fixed
//! random bands. The strategy sits behind [`OutcomeSimulator`] so a real
//! gesture-scoring algorithm can replace it without touching the state
//! machine's contract.

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

use crate::player::{Difficulty, PlayerKind};

/// Replay accuracy at or above this counts as a success.
pub const ACCURACY_THRESHOLD: f32 = 0.8;

/// Accuracy band for human replays.
pub const HUMAN_ACCURACY_BAND: (f32, f32) = (0.6, 1.0);

/// Per-level constants for simulated AI opponents.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AiProfile {
    /// Probability that the AI clears the accuracy threshold.
    pub success_rate: f32,
    /// Accuracy band drawn from on a successful roll.
    pub success_band: (f32, f32),
    /// Accuracy band drawn from on a failed roll.
    pub failure_band: (f32, f32),
    /// Simulated "thinking" delay range in seconds before the AI starts.
    pub thinking_delay: (f32, f32),
}

impl AiProfile {
    pub fn for_level(level: Difficulty) -> Self {
        match level {
            Difficulty::Easy => Self {
                success_rate: 0.45,
                success_band: (ACCURACY_THRESHOLD, 0.92),
                failure_band: (0.45, ACCURACY_THRESHOLD),
                thinking_delay: (1.5, 3.0),
            },
            Difficulty::Medium => Self {
                success_rate: 0.65,
                success_band: (ACCURACY_THRESHOLD, 0.96),
                failure_band: (0.55, ACCURACY_THRESHOLD),
                thinking_delay: (1.0, 2.2),
            },
            Difficulty::Hard => Self {
                success_rate: 0.82,
                success_band: (ACCURACY_THRESHOLD, 1.0),
                failure_band: (0.65, ACCURACY_THRESHOLD),
                thinking_delay: (0.6, 1.5),
            },
        }
    }
}

/// Pluggable outcome strategy: player kind in, replay accuracy out.
pub trait OutcomeSimulator {
    /// Accuracy produced for one replay attempt.
    fn replay_accuracy(&mut self, kind: PlayerKind) -> f32;

    /// How long an AI at the given level pretends to think before starting.
    fn thinking_delay(&mut self, level: Difficulty) -> f32;
}

/// Random-band simulation with a seeded RNG.
#[derive(Debug, Clone)]
pub struct RandomOutcome {
    rng: ChaCha8Rng,
    seed: u64,
}

impl RandomOutcome {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl OutcomeSimulator for RandomOutcome {
    fn replay_accuracy(&mut self, kind: PlayerKind) -> f32 {
        match kind {
            PlayerKind::Human => {
                let (lo, hi) = HUMAN_ACCURACY_BAND;
                self.rng.random_range(lo..hi)
            }
            PlayerKind::Ai { level } => {
                let profile = AiProfile::for_level(level);
                let (lo, hi) = if self.rng.random_range(0.0..1.0) < profile.success_rate {
                    profile.success_band
                } else {
                    profile.failure_band
                };
                self.rng.random_range(lo..hi)
            }
        }
    }

    fn thinking_delay(&mut self, level: Difficulty) -> f32 {
        let (lo, hi) = AiProfile::for_level(level).thinking_delay;
        self.rng.random_range(lo..hi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_human_accuracy_stays_in_band() {
        let mut outcome = RandomOutcome::new(12345);
        for _ in 0..200 {
            let acc = outcome.replay_accuracy(PlayerKind::Human);
            assert!((0.6..1.0).contains(&acc));
        }
    }

    #[test]
    fn test_ai_accuracy_stays_in_bands() {
        let mut outcome = RandomOutcome::new(12345);
        for level in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            let profile = AiProfile::for_level(level);
            for _ in 0..200 {
                let acc = outcome.replay_accuracy(PlayerKind::Ai { level });
                assert!(
                    acc >= profile.failure_band.0 && acc < profile.success_band.1.max(1.0),
                    "accuracy {acc} out of range for {level:?}"
                );
            }
        }
    }

    #[test]
    fn test_harder_ai_succeeds_more() {
        let mut outcome = RandomOutcome::new(777);
        let trials = 2000;

        let mut successes = |level| {
            (0..trials)
                .filter(|_| {
                    outcome.replay_accuracy(PlayerKind::Ai { level }) >= ACCURACY_THRESHOLD
                })
                .count()
        };

        let easy = successes(Difficulty::Easy);
        let hard = successes(Difficulty::Hard);
        assert!(hard > easy, "hard ({hard}) should beat easy ({easy})");
    }

    #[test]
    fn test_thinking_delay_in_range() {
        let mut outcome = RandomOutcome::new(5);
        for level in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            let (lo, hi) = AiProfile::for_level(level).thinking_delay;
            for _ in 0..50 {
                let delay = outcome.thinking_delay(level);
                assert!((lo..hi).contains(&delay));
            }
        }
    }

    #[test]
    fn test_deterministic_draws() {
        let mut a = RandomOutcome::new(42);
        let mut b = RandomOutcome::new(42);
        for _ in 0..20 {
            assert_eq!(
                a.replay_accuracy(PlayerKind::Human),
                b.replay_accuracy(PlayerKind::Human)
            );
        }
    }
}
