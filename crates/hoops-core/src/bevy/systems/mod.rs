//! Systems for the hoops game.
//!
//! Organized by functionality:
//! - court: court layout spawning
//! - flow: session setup and the turn state machine driver
//! - scoreboard: letter-progress and banner text sync
//! - render: court/token rendering and the court camera

pub mod court;
pub mod flow;
pub mod render;
pub mod scoreboard;

pub use court::*;
pub use flow::*;
pub use render::*;
pub use scoreboard::*;
