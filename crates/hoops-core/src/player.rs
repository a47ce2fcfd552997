//! Player entities and difficulty levels.

use serde::{Deserialize, Serialize};

use crate::word::GameWord;

/// Unique identifier for a player.
pub type PlayerId = u32;

/// Difficulty class shared by moves, sequences, and AI opponents.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

/// Whether a seat is controlled by a person or simulated.
///
/// An explicit tag, not a naming convention: a human named "Air Jordan"
/// stays human.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PlayerKind {
    Human,
    Ai { level: Difficulty },
}

impl PlayerKind {
    pub fn is_ai(&self) -> bool {
        matches!(self, Self::Ai { .. })
    }
}

/// Index into the bundled avatar art.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Avatar(pub u8);

impl Avatar {
    /// Returns the default avatar rotation, one per seat.
    pub fn roster() -> Vec<Avatar> {
        vec![Avatar(0), Avatar(1), Avatar(2), Avatar(3)]
    }
}

/// A seat at the game.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub kind: PlayerKind,
    pub avatar: Avatar,
    /// Letters earned so far, in the order they were earned.
    /// Always a prefix of the game word.
    pub letters: Vec<char>,
    pub score: u32,
    pub eliminated: bool,
    /// Current court position in meters.
    pub position: [f32; 2],
}

impl Player {
    pub fn new(id: PlayerId, name: String, kind: PlayerKind, avatar: Avatar) -> Self {
        Self {
            id,
            name,
            kind,
            avatar,
            letters: Vec::new(),
            score: 0,
            eliminated: false,
            position: [0.0, 0.0],
        }
    }

    pub fn is_ai(&self) -> bool {
        self.kind.is_ai()
    }

    /// Appends the next unearned letter of the word.
    /// Returns the awarded letter, or None if the word is already spelled.
    pub fn award_letter(&mut self, word: &GameWord) -> Option<char> {
        let letter = word.letter(self.letters.len())?;
        self.letters.push(letter);
        Some(letter)
    }

    /// True once every letter of the word has been earned.
    pub fn has_spelled(&self, word: &GameWord) -> bool {
        self.letters.len() >= word.len()
    }
}
