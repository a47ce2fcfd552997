//! Turn-based game state machine.
//!
//! One turn runs `Waiting -> Demo -> Replay -> resolution`; resolution
//! either hands the active player a letter or not, checks elimination,
//! and passes the turn to the next non-eliminated player. The session
//! ends when a single player remains.

use serde::{Deserialize, Serialize};

use crate::config::{ConfigError, GameConfig};
use crate::moves::MoveCatalog;
use crate::outcome::ACCURACY_THRESHOLD;
use crate::player::{Difficulty, Player, PlayerId};
use crate::sequence::{GameSequence, SequenceGenerator};
use crate::word::GameWord;

/// Phase of the current turn.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum TurnPhase {
    /// A sequence is (or is about to be) ready; waiting for a start trigger.
    Waiting,
    /// The sequence is being played back for the active player to observe.
    Demo,
    /// The active player is reproducing the sequence.
    Replay,
    /// The session is over.
    Finished { winner: Option<PlayerId> },
}

impl Default for TurnPhase {
    fn default() -> Self {
        Self::Waiting
    }
}

/// Result of resolving one turn.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub enum TurnOutcome {
    /// Accuracy cleared the threshold; no letter awarded.
    Made { accuracy: f32 },
    /// Accuracy fell short; the next letter was awarded.
    Letter { letter: char, accuracy: f32 },
    /// The awarded letter completed the word; the player is out.
    Eliminated { letter: char, accuracy: f32 },
}

/// One resolved attempt, kept for stats.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShotRecord {
    pub player_id: PlayerId,
    pub sequence_len: usize,
    pub difficulty: Difficulty,
    pub accuracy: f32,
    pub made: bool,
}

/// Complete game state. Mutated only through the transition methods.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HorseGame {
    pub players: Vec<Player>,
    pub current_player_index: usize,
    pub phase: TurnPhase,
    pub word: GameWord,
    /// 1-based; increments each time the turn order wraps.
    pub round: u32,
    /// Display bound carried from setup; games end by elimination.
    pub max_rounds: u32,
    pub sequence_cap: usize,
    pub sequence: Option<GameSequence>,
    pub history: Vec<ShotRecord>,
    pub eliminated_order: Vec<PlayerId>,
    pub rng_seed: u64,
}

impl HorseGame {
    /// Creates a new game from a validated configuration.
    pub fn new(config: &GameConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;

        #[allow(clippy::cast_possible_truncation)]
        let players = config
            .players
            .iter()
            .enumerate()
            .map(|(i, p)| Player::new(i as PlayerId, p.name.clone(), p.kind, p.avatar))
            .collect();

        Ok(Self {
            players,
            current_player_index: 0,
            phase: TurnPhase::Waiting,
            word: config.word.clone(),
            round: 1,
            max_rounds: config.max_rounds,
            sequence_cap: config.sequence_cap,
            sequence: None,
            history: Vec::new(),
            eliminated_order: Vec::new(),
            rng_seed: seed,
        })
    }

    /// The player whose turn it is.
    pub fn current_player(&self) -> &Player {
        &self.players[self.current_player_index]
    }

    /// Generates a fresh sequence for the active player.
    /// Returns false outside `Waiting` or if one is already pending.
    pub fn prepare_turn(&mut self, catalog: &MoveCatalog, generator: &mut SequenceGenerator) -> bool {
        if self.phase != TurnPhase::Waiting || self.sequence.is_some() {
            return false;
        }

        let letters = self.current_player().letters.len();
        let Some(sequence) = generator.generate_for_letters(catalog, letters, self.sequence_cap)
        else {
            return false;
        };

        tracing::debug!(
            player = %self.current_player().name,
            moves = sequence.len(),
            difficulty = ?sequence.difficulty,
            "turn prepared"
        );
        self.sequence = Some(sequence);
        true
    }

    /// Starts demo playback of the pending sequence.
    pub fn begin_demo(&mut self) -> bool {
        if self.phase != TurnPhase::Waiting || self.sequence.is_none() {
            return false;
        }
        self.phase = TurnPhase::Demo;
        true
    }

    /// Demo playback completed; a human now attempts the replay.
    ///
    /// AI turns never enter `Replay` — resolve them straight from `Demo`
    /// with [`Self::resolve_turn`].
    pub fn finish_demo(&mut self) -> bool {
        if self.phase != TurnPhase::Demo || self.current_player().is_ai() {
            return false;
        }
        self.phase = TurnPhase::Replay;
        true
    }

    /// Resolves the active player's attempt with the given accuracy.
    ///
    /// Accepted from `Replay` (humans) or from `Demo` when the active
    /// player is an AI. Returns None in any other phase.
    pub fn resolve_turn(&mut self, accuracy: f32) -> Option<TurnOutcome> {
        let valid = match self.phase {
            TurnPhase::Replay => true,
            TurnPhase::Demo => self.current_player().is_ai(),
            _ => false,
        };
        if !valid {
            return None;
        }

        let made = accuracy >= ACCURACY_THRESHOLD;
        let sequence_len = self.sequence.as_ref().map_or(0, GameSequence::len);
        let difficulty = self
            .sequence
            .as_ref()
            .map_or(Difficulty::Easy, |s| s.difficulty);

        let word = self.word.clone();
        let player = &mut self.players[self.current_player_index];
        let player_id = player.id;

        self.history.push(ShotRecord {
            player_id,
            sequence_len,
            difficulty,
            accuracy,
            made,
        });

        let outcome = if made {
            player.score += 1;
            TurnOutcome::Made { accuracy }
        } else {
            // The word always has an unearned letter here; a fully
            // spelled player is eliminated and never gets a turn.
            let letter = player
                .award_letter(&word)
                .expect("active player had all letters");
            if player.has_spelled(&word) {
                player.eliminated = true;
                self.eliminated_order.push(player_id);
                TurnOutcome::Eliminated { letter, accuracy }
            } else {
                TurnOutcome::Letter { letter, accuracy }
            }
        };

        tracing::info!(
            player = %self.players[self.current_player_index].name,
            accuracy,
            outcome = ?outcome,
            "turn resolved"
        );

        self.sequence = None;
        if self.active_count() <= 1 {
            let winner = self.players.iter().find(|p| !p.eliminated).map(|p| p.id);
            self.phase = TurnPhase::Finished { winner };
        } else {
            self.advance_turn();
            self.phase = TurnPhase::Waiting;
        }

        Some(outcome)
    }

    /// Moves the active index to the next non-eliminated player, wrapping
    /// and skipping eliminated seats. Increments the round on wrap.
    fn advance_turn(&mut self) {
        debug_assert!(self.active_count() >= 1);
        loop {
            self.current_player_index += 1;
            if self.current_player_index >= self.players.len() {
                self.current_player_index = 0;
                self.round += 1;
            }
            if !self.players[self.current_player_index].eliminated {
                break;
            }
        }
    }

    /// Number of players still in the game.
    pub fn active_count(&self) -> usize {
        self.players.iter().filter(|p| !p.eliminated).count()
    }

    /// Returns the winner if the game is finished.
    pub fn winner(&self) -> Option<PlayerId> {
        match self.phase {
            TurnPhase::Finished { winner } => winner,
            _ => None,
        }
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.phase, TurnPhase::Finished { .. })
    }

    /// Final standings: survivors first (fewest letters, then highest
    /// score), then eliminated players in reverse elimination order.
    pub fn standings(&self) -> Vec<PlayerId> {
        let mut survivors: Vec<&Player> =
            self.players.iter().filter(|p| !p.eliminated).collect();
        survivors.sort_by(|a, b| {
            a.letters
                .len()
                .cmp(&b.letters.len())
                .then(b.score.cmp(&a.score))
        });

        let mut standings: Vec<PlayerId> = survivors.iter().map(|p| p.id).collect();
        standings.extend(self.eliminated_order.iter().rev());
        standings
    }

    /// Best accuracy recorded for a player this session.
    pub fn best_accuracy(&self, player_id: PlayerId) -> Option<f32> {
        self.history
            .iter()
            .filter(|r| r.player_id == player_id)
            .map(|r| r.accuracy)
            .fold(None, |best, acc| {
                Some(best.map_or(acc, |b: f32| b.max(acc)))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PlayerConfig;
    use crate::player::{Avatar, PlayerKind};

    fn setup_game(names: &[&str]) -> (HorseGame, MoveCatalog, SequenceGenerator) {
        let avatars = Avatar::roster();
        let config = GameConfig {
            players: names
                .iter()
                .enumerate()
                .map(|(i, name)| PlayerConfig::human(*name, avatars[i % avatars.len()]))
                .collect(),
            ..GameConfig::default()
        };
        let game = HorseGame::new(&config, 12345).unwrap();
        (game, MoveCatalog::builtin(), SequenceGenerator::new(12345))
    }

    /// Runs one full turn for the current (human) player at the given accuracy.
    fn play_turn(
        game: &mut HorseGame,
        catalog: &MoveCatalog,
        generator: &mut SequenceGenerator,
        accuracy: f32,
    ) -> TurnOutcome {
        assert!(game.prepare_turn(catalog, generator));
        assert!(game.begin_demo());
        assert!(game.finish_demo());
        game.resolve_turn(accuracy).unwrap()
    }

    #[test]
    fn test_new_game_state() {
        let (game, _, _) = setup_game(&["A", "B"]);
        assert_eq!(game.phase, TurnPhase::Waiting);
        assert_eq!(game.current_player_index, 0);
        assert_eq!(game.round, 1);
        assert_eq!(game.active_count(), 2);
    }

    #[test]
    fn test_rejects_invalid_config() {
        let config = GameConfig {
            players: vec![PlayerConfig::human("Solo", Avatar(0))],
            ..GameConfig::default()
        };
        assert!(HorseGame::new(&config, 1).is_err());
    }

    #[test]
    fn test_phase_transitions_guarded() {
        let (mut game, catalog, mut generator) = setup_game(&["A", "B"]);

        // Can't demo without a sequence.
        assert!(!game.begin_demo());
        assert!(game.prepare_turn(&catalog, &mut generator));
        // Can't prepare twice.
        assert!(!game.prepare_turn(&catalog, &mut generator));
        // Can't resolve from Waiting.
        assert!(game.resolve_turn(0.9).is_none());

        assert!(game.begin_demo());
        // Can't resolve a human turn from Demo.
        assert!(game.resolve_turn(0.9).is_none());
        assert!(game.finish_demo());
        assert!(game.resolve_turn(0.9).is_some());
    }

    #[test]
    fn test_success_awards_no_letter() {
        let (mut game, catalog, mut generator) = setup_game(&["A", "B"]);

        let outcome = play_turn(&mut game, &catalog, &mut generator, 0.95);
        assert_eq!(outcome, TurnOutcome::Made { accuracy: 0.95 });
        assert!(game.players[0].letters.is_empty());
        assert_eq!(game.players[0].score, 1);
        // Turn passed to B.
        assert_eq!(game.current_player_index, 1);
        assert_eq!(game.phase, TurnPhase::Waiting);
    }

    #[test]
    fn test_failure_awards_letters_in_word_order() {
        let (mut game, catalog, mut generator) = setup_game(&["A", "B"]);

        play_turn(&mut game, &catalog, &mut generator, 0.5); // A fails
        play_turn(&mut game, &catalog, &mut generator, 0.5); // B fails
        play_turn(&mut game, &catalog, &mut generator, 0.5); // A fails

        assert_eq!(game.players[0].letters, vec!['H', 'O']);
        assert_eq!(game.players[1].letters, vec!['H']);
    }

    #[test]
    fn test_letters_monotonic_and_bounded() {
        let (mut game, catalog, mut generator) = setup_game(&["A", "B", "C"]);
        let mut prev: Vec<usize> = vec![0; 3];

        while !game.is_finished() {
            play_turn(&mut game, &catalog, &mut generator, 0.5);
            for (i, player) in game.players.iter().enumerate() {
                assert!(player.letters.len() >= prev[i]);
                assert!(player.letters.len() <= game.word.len());
                // At most one letter changes hands per turn.
                assert!(player.letters.len() - prev[i] <= 1);
                prev[i] = player.letters.len();
            }
        }
    }

    #[test]
    fn test_two_player_scenario_horse() {
        // Word HORSE, A fails 5 consecutive turns, B always succeeds:
        // A spells H-O-R-S-E in order and B wins without letters.
        let (mut game, catalog, mut generator) = setup_game(&["A", "B"]);

        for _ in 0..4 {
            play_turn(&mut game, &catalog, &mut generator, 0.3); // A fails
            play_turn(&mut game, &catalog, &mut generator, 0.9); // B makes
        }
        let outcome = play_turn(&mut game, &catalog, &mut generator, 0.3); // A's 5th fail

        assert!(matches!(outcome, TurnOutcome::Eliminated { letter: 'E', .. }));
        assert_eq!(game.players[0].letters, vec!['H', 'O', 'R', 'S', 'E']);
        assert!(game.players[0].eliminated);
        assert!(game.players[1].letters.is_empty());
        assert_eq!(game.phase, TurnPhase::Finished { winner: Some(1) });
        assert_eq!(game.winner(), Some(1));
    }

    #[test]
    fn test_three_player_skips_eliminated() {
        // B reaches 5 letters while A and C stay below: B is eliminated,
        // turn order skips B, game continues between A and C.
        let (mut game, catalog, mut generator) = setup_game(&["A", "B", "C"]);

        for _ in 0..5 {
            play_turn(&mut game, &catalog, &mut generator, 0.9); // A makes
            play_turn(&mut game, &catalog, &mut generator, 0.3); // B fails
            play_turn(&mut game, &catalog, &mut generator, 0.9); // C makes
        }

        assert!(game.players[1].eliminated);
        assert!(!game.is_finished());
        assert_eq!(game.active_count(), 2);

        // A plays, then the order must skip B and land on C.
        assert_eq!(game.current_player_index, 0);
        play_turn(&mut game, &catalog, &mut generator, 0.9);
        assert_eq!(game.current_player_index, 2);
        play_turn(&mut game, &catalog, &mut generator, 0.9);
        assert_eq!(game.current_player_index, 0);
    }

    #[test]
    fn test_round_increments_on_wrap() {
        let (mut game, catalog, mut generator) = setup_game(&["A", "B"]);
        assert_eq!(game.round, 1);

        play_turn(&mut game, &catalog, &mut generator, 0.9); // A
        assert_eq!(game.round, 1);
        play_turn(&mut game, &catalog, &mut generator, 0.9); // B, wraps
        assert_eq!(game.round, 2);
    }

    #[test]
    fn test_ai_resolves_from_demo() {
        let avatars = Avatar::roster();
        let config = GameConfig {
            players: vec![
                PlayerConfig::ai("Bot", Difficulty::Easy, avatars[0]),
                PlayerConfig::human("B", avatars[1]),
            ],
            ..GameConfig::default()
        };
        let mut game = HorseGame::new(&config, 1).unwrap();
        let catalog = MoveCatalog::builtin();
        let mut generator = SequenceGenerator::new(1);

        assert!(game.prepare_turn(&catalog, &mut generator));
        assert!(game.begin_demo());
        // AI never enters Replay.
        assert!(!game.finish_demo());
        let outcome = game.resolve_turn(0.5).unwrap();
        assert!(matches!(outcome, TurnOutcome::Letter { letter: 'H', .. }));
        assert_eq!(game.current_player_index, 1);
    }

    #[test]
    fn test_eliminated_iff_word_spelled() {
        let (mut game, catalog, mut generator) = setup_game(&["A", "B", "C"]);

        while !game.is_finished() {
            play_turn(&mut game, &catalog, &mut generator, 0.5);
            for player in &game.players {
                assert_eq!(
                    player.eliminated,
                    player.letters.len() == game.word.len(),
                    "eliminated flag must track word completion"
                );
            }
        }
        assert_eq!(game.active_count(), 1);
    }

    #[test]
    fn test_standings() {
        let (mut game, catalog, mut generator) = setup_game(&["A", "B", "C"]);

        // B fails out first; A makes everything; C fails twice.
        let mut c_fails = 0;
        while !game.players[1].eliminated {
            let idx = game.current_player_index;
            let accuracy = match idx {
                0 => 0.9,
                1 => 0.3,
                _ => {
                    if c_fails < 2 {
                        c_fails += 1;
                        0.3
                    } else {
                        0.9
                    }
                }
            };
            play_turn(&mut game, &catalog, &mut generator, accuracy);
        }

        let standings = game.standings();
        assert_eq!(standings, vec![0, 2, 1]);
    }

    #[test]
    fn test_best_accuracy() {
        let (mut game, catalog, mut generator) = setup_game(&["A", "B"]);

        play_turn(&mut game, &catalog, &mut generator, 0.7);
        play_turn(&mut game, &catalog, &mut generator, 0.9);
        play_turn(&mut game, &catalog, &mut generator, 0.85);

        assert_eq!(game.best_accuracy(0), Some(0.85));
        assert_eq!(game.best_accuracy(1), Some(0.9));
    }
}
