//! ECS components for the hoops game.

use bevy::prelude::*;

use crate::court::ElementRole;
use crate::player::PlayerId;

/// Marker component for a player's token on the court.
#[derive(Component, Debug, Clone)]
pub struct PlayerToken {
    pub player_id: PlayerId,
}

impl PlayerToken {
    pub fn new(player_id: PlayerId) -> Self {
        Self { player_id }
    }
}

/// Marker component for the ball.
#[derive(Component, Debug, Clone, Default)]
pub struct BallToken {
    /// Visual lift above the floor during shot arcs, in meters.
    pub height: f32,
}

/// Marker component for court layout entities.
#[derive(Component, Debug, Clone)]
pub struct CourtElementMarker {
    pub element_id: Option<String>,
    pub role: ElementRole,
}

/// Marker component for scoreboard text entities.
#[derive(Component, Debug, Clone)]
pub struct LetterBoard {
    pub player_id: PlayerId,
}

/// Marker component for the turn banner text.
#[derive(Component, Debug, Clone, Default)]
pub struct TurnBanner;

/// Marker for the main court camera.
#[derive(Component, Debug, Clone, Default)]
pub struct MainCamera;
