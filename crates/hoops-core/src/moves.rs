//! Basketball move catalog.
//!
//! A fixed, hand-authored table of named moves, each with a difficulty
//! class, nominal duration, and a simplified keyframe path driving the
//! animation. Loaded from `moves/catalog.json` at compile time.

use serde::{Deserialize, Serialize};

use crate::player::Difficulty;

/// Broad category of a basketball action.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MoveKind {
    Dribble,
    Shoot,
    Pass,
    Crossover,
    Spin,
    Jump,
}

/// A single point on a move's path.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PathKeyframe {
    /// Time as a fraction of the move duration (0.0 to 1.0).
    pub time: f32,
    /// Court position in meters.
    pub position: [f32; 2],
}

/// The animated path of a move.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MovePath {
    pub start: [f32; 2],
    pub end: [f32; 2],
    /// Keyframes ordered by time fraction; first is at 0.0, last at 1.0.
    pub keyframes: Vec<PathKeyframe>,
}

/// A catalog entry describing one named basketball action.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveSpec {
    pub id: String,
    pub name: String,
    pub kind: MoveKind,
    /// Nominal duration in seconds.
    pub duration: f32,
    pub difficulty: Difficulty,
    pub path: MovePath,
    pub description: String,
}

impl MoveSpec {
    /// Shot moves launch the ball toward the hoop during playback.
    pub fn is_shot(&self) -> bool {
        self.kind == MoveKind::Shoot
    }
}

/// A predefined multi-move sequence for canned scenarios.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CannedSequence {
    pub id: String,
    pub move_ids: Vec<String>,
    pub difficulty: Difficulty,
}

/// The full move library plus predefined sequences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveCatalog {
    pub moves: Vec<MoveSpec>,
    #[serde(default)]
    pub sequences: Vec<CannedSequence>,
}

impl MoveCatalog {
    /// Loads a catalog from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serializes the catalog to a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// The built-in move library.
    /// Loaded from moves/catalog.json at compile time.
    pub fn builtin() -> Self {
        const CATALOG_JSON: &str = include_str!("../moves/catalog.json");
        Self::from_json(CATALOG_JSON).expect("Failed to parse built-in move catalog")
    }

    /// Looks up a move by id.
    pub fn get(&self, id: &str) -> Option<&MoveSpec> {
        self.moves.iter().find(|m| m.id == id)
    }

    /// All moves matching the given difficulty class.
    pub fn by_difficulty(&self, difficulty: Difficulty) -> Vec<&MoveSpec> {
        self.moves
            .iter()
            .filter(|m| m.difficulty == difficulty)
            .collect()
    }

    /// Resolves a canned sequence's move ids against the catalog.
    /// Returns None if any id is missing.
    pub fn resolve_canned(&self, canned: &CannedSequence) -> Option<Vec<MoveSpec>> {
        canned
            .move_ids
            .iter()
            .map(|id| self.get(id).cloned())
            .collect()
    }
}
