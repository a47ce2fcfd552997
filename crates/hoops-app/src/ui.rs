//! Text screens for everything outside gameplay.

use std::fmt::Write as _;

use bevy::prelude::*;
use hoops_core::bevy::{GameSession, MainCamera, SessionBoard, SetupConfig};
use hoops_core::{LeaderboardTab, PlayerKind};

/// Marker for text owned by the current screen.
#[derive(Component, Debug, Clone, Default)]
pub struct ScreenText;

/// Which leaderboard tab is shown.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct BoardTab(pub LeaderboardTab);

impl BoardTab {
    pub fn next(&mut self) {
        self.0 = match self.0 {
            LeaderboardTab::Wins => LeaderboardTab::Accuracy,
            LeaderboardTab::Accuracy => LeaderboardTab::Streak,
            LeaderboardTab::Streak => LeaderboardTab::Wins,
        };
    }

    fn label(self) -> &'static str {
        match self.0 {
            LeaderboardTab::Wins => "Wins",
            LeaderboardTab::Accuracy => "Best Accuracy",
            LeaderboardTab::Streak => "Win Streak",
        }
    }
}

/// Despawns the current screen's text. Registered on every OnExit.
pub fn clear_screen_text(mut commands: Commands, texts: Query<Entity, With<ScreenText>>) {
    for entity in texts.iter() {
        commands.entity(entity).despawn();
    }
}

/// Puts the camera back into pixel space for the menu screens.
pub fn reset_menu_camera(
    mut cameras: Query<(&mut Projection, &mut Transform), With<MainCamera>>,
) {
    for (mut projection, mut transform) in cameras.iter_mut() {
        if let Projection::Orthographic(ortho) = projection.as_mut() {
            ortho.scale = 1.0;
        }
        transform.translation.x = 0.0;
        transform.translation.y = 0.0;
    }
}

fn spawn_screen(commands: &mut Commands, title: &str, body: String) {
    commands.spawn((
        ScreenText,
        Text2d::new(title.to_string()),
        TextFont {
            font_size: 48.0,
            ..default()
        },
        TextColor(Color::srgb(1.0, 0.85, 0.4)),
        Transform::from_translation(Vec3::new(0.0, 220.0, 0.0)),
    ));
    commands.spawn((
        ScreenText,
        Text2d::new(body),
        TextFont {
            font_size: 22.0,
            ..default()
        },
        TextColor(Color::srgb(0.95, 0.95, 0.95)),
        Transform::from_translation(Vec3::new(0.0, 0.0, 0.0)),
    ));
}

pub fn render_main_menu(
    mut commands: Commands,
    existing: Query<Entity, With<ScreenText>>,
) {
    if !existing.is_empty() {
        return;
    }
    spawn_screen(
        &mut commands,
        "HOOPS",
        [
            "A game of H.O.R.S.E.",
            "",
            "[Enter] Play",
            "[S] Settings",
            "[L] Leaderboard",
            "[H] How to play",
            "[Esc] Quit",
        ]
        .join("\n"),
    );
}

pub fn render_setup(
    mut commands: Commands,
    config: Res<SetupConfig>,
    existing: Query<Entity, With<ScreenText>>,
) {
    if !existing.is_empty() && !config.is_changed() {
        return;
    }
    clear_now(&mut commands, &existing);

    let mut body = String::new();
    for (i, seat) in config.0.players.iter().enumerate() {
        let kind = match seat.kind {
            PlayerKind::Human => "Human".to_string(),
            PlayerKind::Ai { level } => format!("AI {level:?}"),
        };
        let _ = writeln!(body, "Seat {}: {}  ({})", i + 1, seat.name, kind);
    }
    let _ = writeln!(body, "\nGame word: {}", config.0.word.as_str());
    body.push_str(concat!(
        "\n[A] Add seat   [R] Remove seat\n",
        "[T] Toggle seat 2 human/AI   [D] Cycle AI difficulty\n",
        "[W] Cycle game word\n\n",
        "[Enter] Start game   [Esc] Back",
    ));

    spawn_screen(&mut commands, "Game Setup", body);
}

pub fn render_results(
    mut commands: Commands,
    session: Res<GameSession>,
    existing: Query<Entity, With<ScreenText>>,
) {
    if !existing.is_empty() && !session.is_changed() {
        return;
    }
    clear_now(&mut commands, &existing);

    let mut body = String::new();
    if let Some(game) = session.game() {
        if let Some(winner) = game.winner() {
            let _ = writeln!(body, "Winner: {}\n", game.players[winner as usize].name);
        }
        for (place, id) in game.standings().iter().enumerate() {
            let player = &game.players[*id as usize];
            let letters: String = player.letters.iter().collect();
            let _ = writeln!(
                body,
                "{}. {:<12} letters: {:<6} score: {}",
                place + 1,
                player.name,
                letters,
                player.score
            );
        }
    } else {
        body.push_str("No game played yet.\n");
    }
    body.push_str("\n[R] Rematch   [Enter] Main menu");

    spawn_screen(&mut commands, "Results", body);
}

pub fn render_settings(
    mut commands: Commands,
    config: Res<SetupConfig>,
    existing: Query<Entity, With<ScreenText>>,
) {
    if !existing.is_empty() && !config.is_changed() {
        return;
    }
    clear_now(&mut commands, &existing);

    let on_off = |enabled: bool| if enabled { "on" } else { "off" };
    let body = format!(
        "[1] Sound: {}\n[2] Haptics: {}\n[3] Hints: {}\n\n[Esc] Back",
        on_off(config.0.sound_enabled),
        on_off(config.0.haptics_enabled),
        on_off(config.0.show_hints),
    );

    spawn_screen(&mut commands, "Settings", body);
}

pub fn render_leaderboard(
    mut commands: Commands,
    board: Res<SessionBoard>,
    tab: Res<BoardTab>,
    existing: Query<Entity, With<ScreenText>>,
) {
    if !existing.is_empty() && !board.is_changed() && !tab.is_changed() {
        return;
    }
    clear_now(&mut commands, &existing);

    let mut body = format!("Sorted by: {}\n\n", tab.label());
    let ranked = board.0.ranked(tab.0);
    if ranked.is_empty() {
        body.push_str("No games recorded this session.\n");
    }
    for (place, entry) in ranked.iter().enumerate() {
        let _ = writeln!(
            body,
            "{}. {:<12} wins: {:<3} best: {:>3.0}%  streak: {}",
            place + 1,
            entry.name,
            entry.wins,
            entry.best_accuracy * 100.0,
            entry.win_streak
        );
    }
    body.push_str("\n[Tab] Switch tab   [Esc] Back");

    spawn_screen(&mut commands, "Leaderboard", body);
}

pub fn render_how_to_play(
    mut commands: Commands,
    existing: Query<Entity, With<ScreenText>>,
) {
    if !existing.is_empty() {
        return;
    }
    spawn_screen(
        &mut commands,
        "How to Play",
        [
            "1. Watch the demo sequence of basketball moves.",
            "2. When it's your turn, repeat the sequence you",
            "   just watched. Accuracy matters!",
            "3. Miss, and you earn the next letter of the word.",
            "4. Spell the whole word and you're out.",
            "5. Last player standing wins.",
            "",
            "[Esc] Back",
        ]
        .join("\n"),
    );
}

fn clear_now(commands: &mut Commands, existing: &Query<Entity, With<ScreenText>>) {
    for entity in existing.iter() {
        commands.entity(entity).despawn();
    }
}
