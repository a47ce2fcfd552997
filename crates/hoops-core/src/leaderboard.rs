//! In-memory session leaderboard.
//!
//! Aggregates results across the games of one app run. Nothing persists.

use serde::{Deserialize, Serialize};

use crate::game::HorseGame;

/// Aggregate stats for one player name.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LeaderboardEntry {
    pub name: String,
    pub games: u32,
    pub wins: u32,
    /// Best replay accuracy seen, 0.0 to 1.0.
    pub best_accuracy: f32,
    /// Consecutive wins, reset on any non-win.
    pub win_streak: u32,
}

/// Sort order for leaderboard views.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum LeaderboardTab {
    #[default]
    Wins,
    Accuracy,
    Streak,
}

/// Session-scoped leaderboard keyed by player name.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Leaderboard {
    entries: Vec<LeaderboardEntry>,
}

impl Leaderboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[LeaderboardEntry] {
        &self.entries
    }

    fn entry_mut(&mut self, name: &str) -> &mut LeaderboardEntry {
        if let Some(pos) = self.entries.iter().position(|e| e.name == name) {
            &mut self.entries[pos]
        } else {
            self.entries.push(LeaderboardEntry {
                name: name.to_string(),
                ..LeaderboardEntry::default()
            });
            self.entries.last_mut().expect("just pushed")
        }
    }

    /// Records a finished game. Does nothing if the game is still running.
    pub fn record_game(&mut self, game: &HorseGame) {
        if !game.is_finished() {
            return;
        }
        let winner = game.winner();

        for player in &game.players {
            let best = game.best_accuracy(player.id).unwrap_or(0.0);
            let won = winner == Some(player.id);
            let entry = self.entry_mut(&player.name);

            entry.games += 1;
            entry.best_accuracy = entry.best_accuracy.max(best);
            if won {
                entry.wins += 1;
                entry.win_streak += 1;
            } else {
                entry.win_streak = 0;
            }
        }
    }

    /// Entries sorted for the given tab, best first.
    pub fn ranked(&self, tab: LeaderboardTab) -> Vec<&LeaderboardEntry> {
        let mut ranked: Vec<&LeaderboardEntry> = self.entries.iter().collect();
        match tab {
            LeaderboardTab::Wins => ranked.sort_by(|a, b| b.wins.cmp(&a.wins)),
            LeaderboardTab::Accuracy => ranked.sort_by(|a, b| {
                b.best_accuracy
                    .partial_cmp(&a.best_accuracy)
                    .unwrap_or(std::cmp::Ordering::Equal)
            }),
            LeaderboardTab::Streak => ranked.sort_by(|a, b| b.win_streak.cmp(&a.win_streak)),
        }
        ranked
    }
}
