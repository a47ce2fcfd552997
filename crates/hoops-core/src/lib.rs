//! Hoops Core Library
//!
//! Rules engine, move catalog, and court model for the H.O.R.S.E.
//! basketball party game, with deterministic simulated outcomes.
//!
//! The pure-logic modules have no engine dependency; the `bevy` module
//! provides the ECS integration (headless-testable plugin plus render
//! systems).

#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod court;
pub mod game;
pub mod leaderboard;
pub mod moves;
pub mod outcome;
pub mod playback;
pub mod player;
pub mod sequence;
pub mod word;

// Bevy integration
pub mod bevy;

pub use config::{ConfigError, GameConfig, MAX_PLAYERS, MIN_PLAYERS, PlayerConfig};
pub use court::{CourtConfig, CourtElement, CourtMeta, CourtShape, ElementRole};
pub use game::{HorseGame, ShotRecord, TurnOutcome, TurnPhase};
pub use leaderboard::{Leaderboard, LeaderboardEntry, LeaderboardTab};
pub use moves::{CannedSequence, MoveCatalog, MoveKind, MovePath, MoveSpec, PathKeyframe};
pub use outcome::{
    ACCURACY_THRESHOLD, AiProfile, HUMAN_ACCURACY_BAND, OutcomeSimulator, RandomOutcome,
};
pub use playback::{
    EasingType, MOVE_TIMEOUT, PlaybackFrame, SequencePlayback, ShotArc, sample_path,
};
pub use player::{Avatar, Difficulty, Player, PlayerId, PlayerKind};
pub use sequence::{
    DEFAULT_SEQUENCE_CAP, GameSequence, SequenceGenerator, difficulty_for_letters,
    length_for_letters,
};
pub use word::{GameWord, WordError};
