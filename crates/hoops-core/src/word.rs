//! Game word handling.
//!
//! A player collects one letter of the game word per failed turn; spelling
//! the whole word eliminates them.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Shortest accepted custom word.
pub const MIN_WORD_LEN: usize = 2;
/// Longest accepted custom word.
pub const MAX_WORD_LEN: usize = 12;

/// Error raised when parsing a custom game word.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WordError {
    #[error("game word must be {MIN_WORD_LEN}-{MAX_WORD_LEN} letters, got {0}")]
    Length(usize),
    #[error("game word must be ASCII letters only: {0:?}")]
    NonAlphabetic(char),
}

/// The word whose letters are handed out on failed turns.
///
/// Stored uppercase. Letters are always awarded in order, so a player's
/// earned letters form a prefix of this word.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameWord(String);

impl GameWord {
    /// Classic five-letter game.
    pub fn horse() -> Self {
        Self("HORSE".to_string())
    }

    /// Shorter three-letter variant.
    pub fn pig() -> Self {
        Self("PIG".to_string())
    }

    /// Parses a custom word, uppercasing it.
    pub fn parse(word: &str) -> Result<Self, WordError> {
        let word = word.trim();
        if !(MIN_WORD_LEN..=MAX_WORD_LEN).contains(&word.len()) {
            return Err(WordError::Length(word.len()));
        }
        if let Some(bad) = word.chars().find(|c| !c.is_ascii_alphabetic()) {
            return Err(WordError::NonAlphabetic(bad));
        }
        Ok(Self(word.to_ascii_uppercase()))
    }

    /// Number of letters in the word.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The letter awarded at the given failure index.
    pub fn letter(&self, index: usize) -> Option<char> {
        self.0.chars().nth(index)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for GameWord {
    fn default() -> Self {
        Self::horse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_horse() {
        let word = GameWord::default();
        assert_eq!(word.as_str(), "HORSE");
        assert_eq!(word.len(), 5);
    }

    #[test]
    fn test_parse_uppercases() {
        let word = GameWord::parse("donkey").unwrap();
        assert_eq!(word.as_str(), "DONKEY");
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(GameWord::parse("x"), Err(WordError::Length(1)));
        assert_eq!(
            GameWord::parse("thirteenlette"),
            Err(WordError::Length(13))
        );
        assert_eq!(GameWord::parse("h0rse"), Err(WordError::NonAlphabetic('0')));
    }

    #[test]
    fn test_letters_in_order() {
        let word = GameWord::pig();
        assert_eq!(word.letter(0), Some('P'));
        assert_eq!(word.letter(1), Some('I'));
        assert_eq!(word.letter(2), Some('G'));
        assert_eq!(word.letter(3), None);
    }
}
