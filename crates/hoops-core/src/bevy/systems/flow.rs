//! Turn flow systems.
//!
//! Drives the Waiting -> Demo -> Replay -> resolution cycle: session
//! setup, turn preparation, AI auto-start, and attempt resolution.

use bevy::prelude::*;

use crate::bevy::plugin::{AppScreen, FIRST_TURN_DELAY, NEXT_TURN_DELAY, TICK_DT};
use crate::bevy::{
    ActivePlayback, BallToken, Court, DemoFinishedEvent, GameOverEvent, GameSession, HapticEvent,
    HapticPattern, MoveLibrary, NewGameEvent, OutcomeRng, PlayerEliminatedEvent, PlayerToken,
    ReplayFinishedEvent, SequenceRng, SessionBoard, StartTurnEvent, TurnClock, TurnResolvedEvent,
};
use crate::game::{HorseGame, TurnOutcome, TurnPhase};
use crate::outcome::OutcomeSimulator;
use crate::playback::SequencePlayback;
use crate::player::PlayerKind;

/// Separates the outcome RNG stream from the sequence RNG stream.
const OUTCOME_SEED_SALT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Lateral spacing between waiting player tokens in meters.
const TOKEN_SPACING: f32 = 0.9;

/// System to start a fresh session from a setup configuration.
#[allow(clippy::too_many_arguments)]
pub fn handle_new_game(
    mut commands: Commands,
    mut events: MessageReader<NewGameEvent>,
    mut session: ResMut<GameSession>,
    mut playback: ResMut<ActivePlayback>,
    mut clock: ResMut<TurnClock>,
    court: Res<Court>,
    tokens: Query<Entity, Or<(With<PlayerToken>, With<BallToken>)>>,
    mut next_screen: ResMut<NextState<AppScreen>>,
) {
    for event in events.read() {
        let mut game = match HorseGame::new(&event.config, event.seed) {
            Ok(game) => game,
            Err(err) => {
                tracing::warn!(%err, "rejected game configuration");
                continue;
            }
        };

        for entity in tokens.iter() {
            commands.entity(entity).despawn();
        }

        let start = court.0.start_spot().unwrap_or([0.0, 0.0]);
        let spread = (game.players.len() as f32 - 1.0) / 2.0;
        for player in &mut game.players {
            let offset = (player.id as f32 - spread) * TOKEN_SPACING;
            player.position = [start[0] + offset, start[1]];
            commands.spawn((
                PlayerToken::new(player.id),
                Transform::from_translation(Vec3::new(player.position[0], player.position[1], 1.0)),
                Visibility::default(),
            ));
        }
        commands.spawn((
            BallToken::default(),
            Transform::from_translation(Vec3::new(start[0], start[1], 2.0)),
            Visibility::default(),
        ));

        commands.insert_resource(SequenceRng::new(event.seed));
        commands.insert_resource(OutcomeRng::new(event.seed ^ OUTCOME_SEED_SALT));
        playback.0 = None;
        clock.clear();
        clock.next_turn_delay = Some(FIRST_TURN_DELAY);

        tracing::info!(
            players = game.players.len(),
            word = game.word.as_str(),
            seed = event.seed,
            "new game"
        );
        session.0 = Some(game);
        next_screen.set(AppScreen::Gameplay);
    }
}

/// System to tick the fixed-step turn countdowns.
///
/// An elapsed thinking delay auto-triggers the AI's turn through the same
/// start message a human tap uses.
pub fn tick_turn_clock(
    mut clock: ResMut<TurnClock>,
    mut start_events: MessageWriter<StartTurnEvent>,
) {
    if let Some(remaining) = &mut clock.next_turn_delay {
        *remaining -= TICK_DT;
        if *remaining <= 0.0 {
            clock.next_turn_delay = None;
        }
    }

    if let Some(remaining) = &mut clock.thinking {
        *remaining -= TICK_DT;
        if *remaining <= 0.0 {
            clock.thinking = None;
            start_events.write(StartTurnEvent);
        }
    }
}

/// System to generate the next sequence once the inter-turn delay elapses.
pub fn prepare_turns(
    mut session: ResMut<GameSession>,
    library: Res<MoveLibrary>,
    mut sequence_rng: ResMut<SequenceRng>,
    mut outcome_rng: ResMut<OutcomeRng>,
    mut clock: ResMut<TurnClock>,
) {
    // Read-only checks first so idle frames don't flag the session changed.
    let Some(game) = session.0.as_ref() else {
        return;
    };
    if game.phase != TurnPhase::Waiting
        || game.sequence.is_some()
        || clock.next_turn_delay.is_some()
    {
        return;
    }

    let Some(game) = session.game_mut() else {
        return;
    };
    if game.prepare_turn(&library.0, &mut sequence_rng.0)
        && let PlayerKind::Ai { level } = game.current_player().kind
    {
        clock.thinking = Some(outcome_rng.0.thinking_delay(level));
    }
}

/// System to begin demo playback on a start trigger.
pub fn handle_start_turn(
    mut events: MessageReader<StartTurnEvent>,
    mut session: ResMut<GameSession>,
    mut playback: ResMut<ActivePlayback>,
    court: Res<Court>,
    mut haptics: MessageWriter<HapticEvent>,
) {
    for _ in events.read() {
        let Some(game) = session.game_mut() else {
            continue;
        };
        if !game.begin_demo() {
            continue;
        }

        let hoop = court.0.hoop_center().unwrap_or([0.0, 0.0]);
        let moves = game
            .sequence
            .as_ref()
            .map(|s| s.moves.clone())
            .unwrap_or_default();
        playback.0 = Some(SequencePlayback::new(moves, hoop));
        haptics.write(HapticEvent {
            pattern: HapticPattern::Tap,
        });
    }
}

/// System to advance the active playback and animate the tokens.
pub fn update_playback(
    mut session: ResMut<GameSession>,
    mut playback: ResMut<ActivePlayback>,
    mut tokens: Query<(&PlayerToken, &mut Transform), Without<BallToken>>,
    mut balls: Query<(&mut BallToken, &mut Transform), Without<PlayerToken>>,
    mut demo_done: MessageWriter<DemoFinishedEvent>,
    mut replay_done: MessageWriter<ReplayFinishedEvent>,
) {
    if playback.0.is_none() {
        return;
    }
    let Some(game) = session.game_mut() else {
        return;
    };
    let Some(active) = playback.0.as_mut() else {
        return;
    };

    if let Some(frame) = active.update(TICK_DT) {
        let current_id = game.players[game.current_player_index].id;
        for (token, mut transform) in tokens.iter_mut() {
            if token.player_id == current_id {
                transform.translation.x = frame.player[0];
                transform.translation.y = frame.player[1];
            }
        }
        game.players[game.current_player_index].position = frame.player;

        for (mut ball, mut transform) in balls.iter_mut() {
            transform.translation.x = frame.ball[0];
            transform.translation.y = frame.ball[1];
            ball.height = frame.ball_height;
        }
    }

    if active.is_finished() {
        playback.0 = None;
        match game.phase {
            TurnPhase::Demo => {
                demo_done.write(DemoFinishedEvent);
            }
            TurnPhase::Replay => {
                replay_done.write(ReplayFinishedEvent);
            }
            _ => {}
        }
    }
}

/// System to react to finished demo/replay playback.
///
/// A finished demo hands humans the replay attempt and resolves AI turns
/// directly (the AI never enters the replay phase). A finished replay
/// resolves the human attempt.
#[allow(clippy::too_many_arguments)]
pub fn handle_playback_finished(
    mut demo_events: MessageReader<DemoFinishedEvent>,
    mut replay_events: MessageReader<ReplayFinishedEvent>,
    mut session: ResMut<GameSession>,
    mut playback: ResMut<ActivePlayback>,
    mut outcome_rng: ResMut<OutcomeRng>,
    mut clock: ResMut<TurnClock>,
    court: Res<Court>,
    mut board: ResMut<SessionBoard>,
    mut writers: ResolutionWriters,
    mut next_screen: ResMut<NextState<AppScreen>>,
) {
    if demo_events.is_empty() && replay_events.is_empty() {
        return;
    }
    let Some(game) = session.game_mut() else {
        demo_events.clear();
        replay_events.clear();
        return;
    };

    for _ in demo_events.read() {
        if game.phase != TurnPhase::Demo {
            continue;
        }
        let kind = game.current_player().kind;
        if kind.is_ai() {
            let accuracy = outcome_rng.0.replay_accuracy(kind);
            resolve_attempt(
                game,
                accuracy,
                &mut clock,
                &mut board,
                &mut writers,
                &mut next_screen,
            );
        } else if game.finish_demo() {
            // The human attempt replays the same sequence.
            let hoop = court.0.hoop_center().unwrap_or([0.0, 0.0]);
            let moves = game
                .sequence
                .as_ref()
                .map(|s| s.moves.clone())
                .unwrap_or_default();
            playback.0 = Some(SequencePlayback::new(moves, hoop));
        }
    }

    for _ in replay_events.read() {
        if game.phase != TurnPhase::Replay {
            continue;
        }
        let accuracy = outcome_rng.0.replay_accuracy(PlayerKind::Human);
        resolve_attempt(
            game,
            accuracy,
            &mut clock,
            &mut board,
            &mut writers,
            &mut next_screen,
        );
    }
}

/// Message writers used when a turn resolves.
#[derive(bevy::ecs::system::SystemParam)]
pub struct ResolutionWriters<'w> {
    pub resolved: MessageWriter<'w, TurnResolvedEvent>,
    pub eliminated: MessageWriter<'w, PlayerEliminatedEvent>,
    pub game_over: MessageWriter<'w, GameOverEvent>,
    pub haptics: MessageWriter<'w, HapticEvent>,
}

fn resolve_attempt(
    game: &mut HorseGame,
    accuracy: f32,
    clock: &mut TurnClock,
    board: &mut SessionBoard,
    writers: &mut ResolutionWriters,
    next_screen: &mut NextState<AppScreen>,
) {
    let player_id = game.current_player().id;
    let Some(outcome) = game.resolve_turn(accuracy) else {
        return;
    };

    writers.resolved.write(TurnResolvedEvent { player_id, outcome });
    let pattern = if matches!(outcome, TurnOutcome::Made { .. }) {
        HapticPattern::Success
    } else {
        HapticPattern::Failure
    };
    writers.haptics.write(HapticEvent { pattern });

    if matches!(outcome, TurnOutcome::Eliminated { .. }) {
        writers.eliminated.write(PlayerEliminatedEvent { player_id });
    }

    if game.is_finished() {
        board.0.record_game(game);
        writers.game_over.write(GameOverEvent {
            winner: game.winner(),
        });
        next_screen.set(AppScreen::Results);
    } else {
        clock.next_turn_delay = Some(NEXT_TURN_DELAY);
    }
}
