//! Desktop front end for the hoops H.O.R.S.E. game.
//!
//! Wires the unified plugin into a windowed Bevy app and adds the
//! keyboard-driven screen navigation.

mod input;
mod ui;

use bevy::prelude::*;
use bevy::window::{Window, WindowPlugin};
use hoops_core::bevy::{AppScreen, HoopsUnifiedPlugin, MainCamera};

fn main() -> anyhow::Result<()> {
    let exit = App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "HOOPS".to_string(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(HoopsUnifiedPlugin::default())
        .insert_resource(ui::BoardTab::default())
        .add_systems(Startup, setup_camera)
        .add_systems(
            Update,
            (
                input::main_menu_input.run_if(in_state(AppScreen::MainMenu)),
                input::setup_input.run_if(in_state(AppScreen::Setup)),
                input::gameplay_input.run_if(in_state(AppScreen::Gameplay)),
                input::results_input.run_if(in_state(AppScreen::Results)),
                input::settings_input.run_if(in_state(AppScreen::Settings)),
                input::leaderboard_input.run_if(in_state(AppScreen::Leaderboard)),
                input::how_to_play_input.run_if(in_state(AppScreen::HowToPlay)),
                input::log_haptics,
            ),
        )
        .add_systems(
            Update,
            (
                ui::render_main_menu.run_if(in_state(AppScreen::MainMenu)),
                ui::render_setup.run_if(in_state(AppScreen::Setup)),
                ui::render_results.run_if(in_state(AppScreen::Results)),
                ui::render_settings.run_if(in_state(AppScreen::Settings)),
                ui::render_leaderboard.run_if(in_state(AppScreen::Leaderboard)),
                ui::render_how_to_play.run_if(in_state(AppScreen::HowToPlay)),
                ui::reset_menu_camera.run_if(not(in_state(AppScreen::Gameplay))),
            ),
        )
        .add_systems(OnExit(AppScreen::MainMenu), ui::clear_screen_text)
        .add_systems(OnExit(AppScreen::Setup), ui::clear_screen_text)
        .add_systems(OnExit(AppScreen::Results), ui::clear_screen_text)
        .add_systems(OnExit(AppScreen::Settings), ui::clear_screen_text)
        .add_systems(OnExit(AppScreen::Leaderboard), ui::clear_screen_text)
        .add_systems(OnExit(AppScreen::HowToPlay), ui::clear_screen_text)
        .run();

    match exit {
        AppExit::Success => Ok(()),
        AppExit::Error(code) => anyhow::bail!("app exited with error code {code}"),
    }
}

/// Spawns the camera up front so menu screens have one before gameplay.
fn setup_camera(mut commands: Commands, existing: Query<Entity, With<MainCamera>>) {
    if existing.is_empty() {
        commands.spawn((Camera2d, MainCamera));
    }
}
