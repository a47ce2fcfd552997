//! Session configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::player::{Avatar, Difficulty, PlayerKind};
use crate::sequence::{DEFAULT_SEQUENCE_CAP, MIN_SEQUENCE_LEN};
use crate::word::{GameWord, WordError};

/// Fewest seats a game can be set up with.
pub const MIN_PLAYERS: usize = 2;
/// Most seats a game can be set up with.
pub const MAX_PLAYERS: usize = 4;

/// Error raised when validating a game configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("player count must be {MIN_PLAYERS}-{MAX_PLAYERS}, got {0}")]
    PlayerCount(usize),
    #[error("player {0} has an empty name")]
    EmptyName(usize),
    #[error("sequence cap must be at least {MIN_SEQUENCE_LEN}, got {0}")]
    SequenceCap(usize),
    #[error(transparent)]
    Word(#[from] WordError),
}

/// One configured seat.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerConfig {
    pub name: String,
    pub kind: PlayerKind,
    pub avatar: Avatar,
}

impl PlayerConfig {
    pub fn human(name: impl Into<String>, avatar: Avatar) -> Self {
        Self {
            name: name.into(),
            kind: PlayerKind::Human,
            avatar,
        }
    }

    pub fn ai(name: impl Into<String>, level: Difficulty, avatar: Avatar) -> Self {
        Self {
            name: name.into(),
            kind: PlayerKind::Ai { level },
            avatar,
        }
    }
}

/// Everything the setup screen hands to a new game.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    pub players: Vec<PlayerConfig>,
    pub word: GameWord,
    /// Display bound only; games end by elimination.
    pub max_rounds: u32,
    /// Cap on generated sequence length.
    pub sequence_cap: usize,
    pub sound_enabled: bool,
    pub haptics_enabled: bool,
    pub show_hints: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        let avatars = Avatar::roster();
        Self {
            players: vec![
                PlayerConfig::human("Player 1", avatars[0]),
                PlayerConfig::ai("Coach Bot", Difficulty::Medium, avatars[1]),
            ],
            word: GameWord::default(),
            max_rounds: 5,
            sequence_cap: DEFAULT_SEQUENCE_CAP,
            sound_enabled: true,
            haptics_enabled: true,
            show_hints: true,
        }
    }
}

impl GameConfig {
    /// Checks the configuration against the setup bounds.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&self.players.len()) {
            return Err(ConfigError::PlayerCount(self.players.len()));
        }
        for (index, player) in self.players.iter().enumerate() {
            if player.name.trim().is_empty() {
                return Err(ConfigError::EmptyName(index));
            }
        }
        if self.sequence_cap < MIN_SEQUENCE_LEN {
            return Err(ConfigError::SequenceCap(self.sequence_cap));
        }
        Ok(())
    }
}
