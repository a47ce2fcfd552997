//! Test utilities for headless Bevy integration tests.
//!
//! Provides `TestApp`, a wrapper around `bevy::app::App` that uses
//! `MinimalPlugins` + `HoopsHeadlessPlugin` for testing game logic
//! without a rendering or windowing backend.

use bevy::prelude::*;

use crate::bevy::plugin::{AppScreen, HoopsHeadlessPlugin, TICK_DT};
use crate::bevy::resources::GameSession;
use crate::bevy::{NewGameEvent, StartTurnEvent};
use crate::config::GameConfig;

/// A headless Bevy app wrapper for testing.
pub(crate) struct TestApp {
    pub app: App,
}

impl TestApp {
    /// Create a new test app with the default seed.
    pub fn new() -> Self {
        Self::with_seed(12345)
    }

    /// Create a new test app with a specific RNG seed.
    pub fn with_seed(seed: u64) -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(bevy::state::app::StatesPlugin);
        app.add_plugins(HoopsHeadlessPlugin { seed });
        // Pause virtual time so that only explicit step calls advance
        // the simulation — ensures deterministic behavior.
        app.world_mut().resource_mut::<Time<Virtual>>().pause();
        // Run one update to initialize all resources and state
        app.update();
        Self { app }
    }

    /// Run a single frame update without advancing fixed time.
    pub fn update(&mut self) {
        self.app.update();
    }

    /// Advance the simulation by exactly `n` fixed timesteps.
    ///
    /// Uses `Time<Fixed>::accumulate_overstep` to feed time directly into
    /// the fixed-timestep accumulator, bypassing virtual time. Combined
    /// with paused virtual time this gives fully deterministic flow.
    pub fn step(&mut self, n: usize) {
        let dt = std::time::Duration::from_secs_f32(TICK_DT);
        for _ in 0..n {
            self.app
                .world_mut()
                .resource_mut::<Time<Fixed>>()
                .accumulate_overstep(dt);
            self.app.update();
        }
    }

    /// Start a new game and apply the screen transition.
    pub fn new_game(&mut self, config: GameConfig, seed: u64) {
        self.app
            .world_mut()
            .resource_mut::<Messages<NewGameEvent>>()
            .write(NewGameEvent { config, seed });
        self.update();
        // Extra update to process OnEnter systems
        self.update();
    }

    /// Trigger the active player's turn (the human tap).
    pub fn start_turn(&mut self) {
        self.app
            .world_mut()
            .resource_mut::<Messages<StartTurnEvent>>()
            .write(StartTurnEvent);
        self.update();
    }

    /// Current application screen.
    pub fn screen(&self) -> AppScreen {
        *self.app.world().resource::<State<AppScreen>>().get()
    }

    /// Get a reference to the current game session.
    pub fn session(&self) -> &GameSession {
        self.app.world().resource::<GameSession>()
    }

    /// Get a reference to the World.
    pub fn world(&self) -> &World {
        self.app.world()
    }

    /// Get a mutable reference to the World.
    pub fn world_mut(&mut self) -> &mut World {
        self.app.world_mut()
    }
}
