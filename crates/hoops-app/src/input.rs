//! Keyboard input per screen.

use bevy::prelude::*;
use hoops_core::bevy::{
    AppScreen, GameSession, HapticEvent, NewGameEvent, SetupConfig, StartTurnEvent,
};
use hoops_core::{Avatar, Difficulty, GameWord, MAX_PLAYERS, MIN_PLAYERS, PlayerConfig, PlayerKind};

use crate::ui::BoardTab;

pub fn main_menu_input(
    keys: Res<ButtonInput<KeyCode>>,
    mut next_screen: ResMut<NextState<AppScreen>>,
    mut exit: MessageWriter<AppExit>,
) {
    if keys.just_pressed(KeyCode::Enter) {
        next_screen.set(AppScreen::Setup);
    } else if keys.just_pressed(KeyCode::KeyS) {
        next_screen.set(AppScreen::Settings);
    } else if keys.just_pressed(KeyCode::KeyL) {
        next_screen.set(AppScreen::Leaderboard);
    } else if keys.just_pressed(KeyCode::KeyH) {
        next_screen.set(AppScreen::HowToPlay);
    } else if keys.just_pressed(KeyCode::Escape) {
        exit.write(AppExit::Success);
    }
}

pub fn setup_input(
    keys: Res<ButtonInput<KeyCode>>,
    mut config: ResMut<SetupConfig>,
    mut new_game: MessageWriter<NewGameEvent>,
    mut next_screen: ResMut<NextState<AppScreen>>,
) {
    if keys.just_pressed(KeyCode::KeyA) && config.0.players.len() < MAX_PLAYERS {
        let avatars = Avatar::roster();
        let seat = config.0.players.len();
        config.0.players.push(PlayerConfig::human(
            format!("Player {}", seat + 1),
            avatars[seat % avatars.len()],
        ));
    }
    if keys.just_pressed(KeyCode::KeyR) && config.0.players.len() > MIN_PLAYERS {
        config.0.players.pop();
    }
    // Toggle the second seat between human and AI.
    if keys.just_pressed(KeyCode::KeyT) {
        let seat = &mut config.0.players[1];
        seat.kind = match seat.kind {
            PlayerKind::Human => PlayerKind::Ai {
                level: Difficulty::Medium,
            },
            PlayerKind::Ai { .. } => PlayerKind::Human,
        };
    }
    if keys.just_pressed(KeyCode::KeyD)
        && let PlayerKind::Ai { level } = &mut config.0.players[1].kind
    {
        *level = match level {
            Difficulty::Easy => Difficulty::Medium,
            Difficulty::Medium => Difficulty::Hard,
            Difficulty::Hard => Difficulty::Easy,
        };
    }
    if keys.just_pressed(KeyCode::KeyW) {
        config.0.word = if config.0.word == GameWord::horse() {
            GameWord::pig()
        } else {
            GameWord::horse()
        };
    }

    if keys.just_pressed(KeyCode::Enter) {
        new_game.write(NewGameEvent {
            config: config.0.clone(),
            seed: rand::random(),
        });
    } else if keys.just_pressed(KeyCode::Escape) {
        next_screen.set(AppScreen::MainMenu);
    }
}

pub fn gameplay_input(
    keys: Res<ButtonInput<KeyCode>>,
    mut start_turn: MessageWriter<StartTurnEvent>,
    mut next_screen: ResMut<NextState<AppScreen>>,
) {
    if keys.just_pressed(KeyCode::Space) {
        start_turn.write(StartTurnEvent);
    } else if keys.just_pressed(KeyCode::Escape) {
        next_screen.set(AppScreen::MainMenu);
    }
}

pub fn results_input(
    keys: Res<ButtonInput<KeyCode>>,
    config: Res<SetupConfig>,
    session: Res<GameSession>,
    mut new_game: MessageWriter<NewGameEvent>,
    mut next_screen: ResMut<NextState<AppScreen>>,
) {
    if keys.just_pressed(KeyCode::KeyR) && session.game().is_some() {
        new_game.write(NewGameEvent {
            config: config.0.clone(),
            seed: rand::random(),
        });
    } else if keys.just_pressed(KeyCode::Enter) || keys.just_pressed(KeyCode::Escape) {
        next_screen.set(AppScreen::MainMenu);
    }
}

pub fn settings_input(
    keys: Res<ButtonInput<KeyCode>>,
    mut config: ResMut<SetupConfig>,
    mut next_screen: ResMut<NextState<AppScreen>>,
) {
    if keys.just_pressed(KeyCode::Digit1) {
        config.0.sound_enabled = !config.0.sound_enabled;
    }
    if keys.just_pressed(KeyCode::Digit2) {
        config.0.haptics_enabled = !config.0.haptics_enabled;
    }
    if keys.just_pressed(KeyCode::Digit3) {
        config.0.show_hints = !config.0.show_hints;
    }
    if keys.just_pressed(KeyCode::Escape) {
        next_screen.set(AppScreen::MainMenu);
    }
}

pub fn leaderboard_input(
    keys: Res<ButtonInput<KeyCode>>,
    mut tab: ResMut<BoardTab>,
    mut next_screen: ResMut<NextState<AppScreen>>,
) {
    if keys.just_pressed(KeyCode::Tab) {
        tab.next();
    }
    if keys.just_pressed(KeyCode::Escape) {
        next_screen.set(AppScreen::MainMenu);
    }
}

pub fn how_to_play_input(
    keys: Res<ButtonInput<KeyCode>>,
    mut next_screen: ResMut<NextState<AppScreen>>,
) {
    if keys.just_pressed(KeyCode::Escape) {
        next_screen.set(AppScreen::MainMenu);
    }
}

/// Desktop stand-in for the mobile vibration hook.
pub fn log_haptics(mut events: MessageReader<HapticEvent>, config: Res<SetupConfig>) {
    for event in events.read() {
        if config.0.haptics_enabled {
            tracing::debug!(pattern = ?event.pattern, "haptic pulse");
        }
    }
}
