//! ECS resources for the hoops game.

use bevy::prelude::*;

use crate::config::GameConfig;
use crate::court::CourtConfig;
use crate::game::HorseGame;
use crate::leaderboard::Leaderboard;
use crate::moves::MoveCatalog;
use crate::outcome::RandomOutcome;
use crate::playback::SequencePlayback;
use crate::sequence::SequenceGenerator;

/// The running game session, if any.
#[derive(Resource, Debug, Clone, Default)]
pub struct GameSession(pub Option<HorseGame>);

impl GameSession {
    pub fn game(&self) -> Option<&HorseGame> {
        self.0.as_ref()
    }

    pub fn game_mut(&mut self) -> Option<&mut HorseGame> {
        self.0.as_mut()
    }
}

/// The move catalog in use.
#[derive(Resource, Debug, Clone)]
pub struct MoveLibrary(pub MoveCatalog);

impl Default for MoveLibrary {
    fn default() -> Self {
        Self(MoveCatalog::builtin())
    }
}

/// The loaded court layout.
#[derive(Resource, Debug, Clone)]
pub struct Court(pub CourtConfig);

impl Default for Court {
    fn default() -> Self {
        Self(CourtConfig::default_halfcourt())
    }
}

/// Seeded generator for per-turn sequences.
#[derive(Resource, Debug, Clone)]
pub struct SequenceRng(pub SequenceGenerator);

impl SequenceRng {
    pub fn new(seed: u64) -> Self {
        Self(SequenceGenerator::new(seed))
    }
}

/// Seeded simulator for replay accuracy and AI thinking delays.
#[derive(Resource, Debug, Clone)]
pub struct OutcomeRng(pub RandomOutcome);

impl OutcomeRng {
    pub fn new(seed: u64) -> Self {
        Self(RandomOutcome::new(seed))
    }
}

/// The playback currently animating (demo or replay), if any.
#[derive(Resource, Debug, Clone, Default)]
pub struct ActivePlayback(pub Option<SequencePlayback>);

/// Fixed-step countdowns driving the turn flow.
///
/// Timeouts here are fallback delays, not a cancellation mechanism;
/// a turn in progress cannot be aborted.
#[derive(Resource, Debug, Clone, Default)]
pub struct TurnClock {
    /// Remaining pause before the next turn is prepared.
    pub next_turn_delay: Option<f32>,
    /// Remaining simulated AI thinking time before its demo auto-starts.
    pub thinking: Option<f32>,
}

impl TurnClock {
    pub fn clear(&mut self) {
        self.next_turn_delay = None;
        self.thinking = None;
    }
}

/// The configuration being edited on the setup screen.
#[derive(Resource, Debug, Clone, Default)]
pub struct SetupConfig(pub GameConfig);

/// Session-scoped leaderboard.
#[derive(Resource, Debug, Clone, Default)]
pub struct SessionBoard(pub Leaderboard);
