//! Bevy-based front end for the hoops game.
//!
//! Provides the ECS components, messages, resources, and systems that
//! drive turn flow, animation playback, and the modest gizmo renderer.

pub mod components;
pub mod events;
pub mod plugin;
pub mod resources;
pub mod systems;

#[cfg(test)]
pub(crate) mod test_utils;

pub use components::*;
pub use events::*;
pub use plugin::{
    AppScreen, FIRST_TURN_DELAY, HoopsHeadlessPlugin, HoopsUnifiedPlugin, NEXT_TURN_DELAY, TICK_DT,
};
pub use resources::*;
pub use systems::CourtGizmoConfig;
