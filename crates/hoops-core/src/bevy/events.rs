//! ECS Messages for the hoops game.
//!
//! These messages connect input, the turn flow, and the presentation
//! layer. Note: in Bevy 0.18+, buffered events use the Message trait.

use bevy::prelude::*;

use crate::config::GameConfig;
use crate::court::CourtConfig;
use crate::game::TurnOutcome;
use crate::player::PlayerId;

/// Message to start a fresh game session from the setup screen.
#[derive(Message, Debug, Clone)]
pub struct NewGameEvent {
    pub config: GameConfig,
    /// RNG seed for sequence generation and simulated outcomes.
    pub seed: u64,
}

/// Message to request loading a court layout.
#[derive(Message, Debug, Clone)]
pub struct LoadCourtEvent {
    pub config: CourtConfig,
}

/// Message fired when a court has been loaded.
#[derive(Message, Debug, Clone)]
pub struct CourtLoadedEvent {
    pub court_name: String,
}

/// Message to start the active player's turn (human tap; AI turns
/// auto-trigger after a thinking delay).
#[derive(Message, Debug, Clone, Default)]
pub struct StartTurnEvent;

/// Message fired when demo playback completes.
#[derive(Message, Debug, Clone, Default)]
pub struct DemoFinishedEvent;

/// Message fired when replay playback completes.
#[derive(Message, Debug, Clone, Default)]
pub struct ReplayFinishedEvent;

/// Message fired after a turn resolves.
#[derive(Message, Debug, Clone)]
pub struct TurnResolvedEvent {
    pub player_id: PlayerId,
    pub outcome: TurnOutcome,
}

/// Message fired when a player spells the full word.
#[derive(Message, Debug, Clone)]
pub struct PlayerEliminatedEvent {
    pub player_id: PlayerId,
}

/// Message fired when the session ends.
#[derive(Message, Debug, Clone)]
pub struct GameOverEvent {
    pub winner: Option<PlayerId>,
}

/// Device feedback pattern, mirroring the mobile vibration cues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HapticPattern {
    /// Short tap when a turn starts.
    Tap,
    /// Double pulse on a made sequence.
    Success,
    /// Long pulse on a miss.
    Failure,
}

/// Message asking the platform layer for haptic feedback.
/// Consumers may ignore it (desktop has no actuator).
#[derive(Message, Debug, Clone)]
pub struct HapticEvent {
    pub pattern: HapticPattern,
}
