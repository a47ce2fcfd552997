//! Scoreboard text sync.
//!
//! Keeps the letter-progress display and turn banner in step with the
//! session state. Pure view logic; it owns no state beyond the spawned
//! text entities.

use std::fmt::Write as _;

use bevy::prelude::*;

use crate::bevy::{GameSession, LetterBoard, TurnBanner};
use crate::game::TurnPhase;

/// World-space anchor of the letter board (left of the court).
const BOARD_ANCHOR: Vec2 = Vec2::new(-3.2, 14.0);
/// Vertical spacing between player rows in meters.
const BOARD_ROW_STEP: f32 = 1.0;
/// Banner position above the court.
const BANNER_POS: Vec2 = Vec2::new(5.0, 16.2);
/// Scale from text pixels to world meters.
const TEXT_SCALE: f32 = 0.01;

fn phase_label(phase: &TurnPhase) -> &'static str {
    match phase {
        TurnPhase::Waiting => "Get ready",
        TurnPhase::Demo => "Watch the sequence",
        TurnPhase::Replay => "Your turn!",
        TurnPhase::Finished { .. } => "Game over",
    }
}

/// System to rebuild the scoreboard text when the session changes.
pub fn sync_scoreboard(
    mut commands: Commands,
    session: Res<GameSession>,
    existing: Query<Entity, Or<(With<LetterBoard>, With<TurnBanner>)>>,
    mut last_key: Local<Option<String>>,
) {
    let Some(game) = session.game() else {
        return;
    };

    // Cheap digest of everything the board displays; token motion alone
    // must not cause a rebuild.
    let mut key = String::new();
    let _ = write!(key, "{}:{}:", game.round, game.current_player_index);
    let _ = write!(key, "{}:", phase_label(&game.phase));
    for player in &game.players {
        let _ = write!(
            key,
            "{}={},{},{};",
            player.id,
            player.letters.len(),
            player.score,
            player.eliminated
        );
    }
    if last_key.as_deref() == Some(key.as_str()) {
        return;
    }
    *last_key = Some(key);

    for entity in existing.iter() {
        commands.entity(entity).despawn();
    }

    let word = game.word.as_str();
    for (row, player) in game.players.iter().enumerate() {
        let marker = if row == game.current_player_index && !game.is_finished() {
            ">"
        } else {
            " "
        };
        let mut line = format!("{marker} {:<12} ", player.name);
        for (i, letter) in word.chars().enumerate() {
            if i < player.letters.len() {
                line.push(letter);
            } else {
                line.push('-');
            }
            line.push(' ');
        }
        if player.eliminated {
            line.push_str(" OUT");
        }

        commands.spawn((
            LetterBoard {
                player_id: player.id,
            },
            Text2d::new(line),
            TextFont {
                font_size: 28.0,
                ..default()
            },
            TextColor(if player.eliminated {
                Color::srgba(0.6, 0.6, 0.6, 0.8)
            } else {
                Color::srgb(0.95, 0.95, 0.95)
            }),
            Transform::from_translation(Vec3::new(
                BOARD_ANCHOR.x,
                BOARD_ANCHOR.y - row as f32 * BOARD_ROW_STEP,
                5.0,
            ))
            .with_scale(Vec3::splat(TEXT_SCALE)),
        ));
    }

    let banner = format!(
        "Round {}  |  {}  |  {}",
        game.round,
        game.current_player().name,
        phase_label(&game.phase)
    );
    commands.spawn((
        TurnBanner,
        Text2d::new(banner),
        TextFont {
            font_size: 36.0,
            ..default()
        },
        TextColor(Color::srgb(1.0, 0.85, 0.4)),
        Transform::from_translation(Vec3::new(BANNER_POS.x, BANNER_POS.y, 5.0))
            .with_scale(Vec3::splat(TEXT_SCALE)),
    ));
}
