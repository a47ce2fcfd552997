//! Rendering systems for the hoops game.
//!
//! Uses Bevy's Gizmos API for immediate rendering of the court and
//! tokens. A more sophisticated renderer can replace this without
//! touching the game logic.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::bevy::{BallToken, Court, GameSession, MainCamera, PlayerToken};
use crate::court::{CourtShape, ElementRole};
use crate::playback::SHOT_APEX;

/// Gizmo configuration for court rendering.
#[derive(Resource)]
pub struct CourtGizmoConfig {
    pub boundary_color: Color,
    pub marking_color: Color,
    pub hoop_color: Color,
    pub backboard_color: Color,
    pub spot_color: Color,
    pub ball_color: Color,
    /// Token color per avatar index.
    pub token_colors: [Color; 4],
    /// Segments used to approximate arcs.
    pub arc_segments: usize,
}

impl Default for CourtGizmoConfig {
    fn default() -> Self {
        Self {
            boundary_color: Color::srgb(0.9, 0.9, 0.9),
            marking_color: Color::srgba(0.9, 0.9, 0.9, 0.6),
            hoop_color: Color::srgb(0.95, 0.45, 0.15),
            backboard_color: Color::srgb(0.85, 0.85, 0.9),
            spot_color: Color::srgba(0.3, 0.7, 1.0, 0.5),
            ball_color: Color::srgb(0.95, 0.5, 0.15),
            token_colors: [
                Color::srgb(0.25, 0.55, 0.95),
                Color::srgb(0.9, 0.3, 0.3),
                Color::srgb(0.3, 0.8, 0.4),
                Color::srgb(0.85, 0.75, 0.25),
            ],
            arc_segments: 32,
        }
    }
}

/// Radius of a player token in meters.
const TOKEN_RADIUS: f32 = 0.35;
/// Radius of the ball in meters.
const BALL_RADIUS: f32 = 0.15;

/// System to render the court layout using gizmos.
pub fn render_court(
    mut gizmos: Gizmos,
    config: Option<Res<CourtGizmoConfig>>,
    court: Res<Court>,
) {
    let default_config = CourtGizmoConfig::default();
    let gizmo_config = config.map_or(&default_config, Res::into_inner);

    for element in &court.0.elements {
        let color = match element.role {
            ElementRole::Boundary => gizmo_config.boundary_color,
            ElementRole::Marking => gizmo_config.marking_color,
            ElementRole::Hoop => gizmo_config.hoop_color,
            ElementRole::Backboard => gizmo_config.backboard_color,
            ElementRole::StartSpot => gizmo_config.spot_color,
        };
        draw_shape(&mut gizmos, &element.shape, color, gizmo_config.arc_segments);
    }
}

/// Helper to draw a court shape using gizmos.
fn draw_shape(gizmos: &mut Gizmos, shape: &CourtShape, color: Color, arc_segments: usize) {
    match shape {
        CourtShape::Line { start, end } => {
            gizmos.line_2d(
                Vec2::new(start[0], start[1]),
                Vec2::new(end[0], end[1]),
                color,
            );
        }
        CourtShape::Circle { center, radius } => {
            let pos = Vec2::new(center[0], center[1]);
            gizmos.circle_2d(Isometry2d::from_translation(pos), *radius, color);
        }
        CourtShape::Rect { center, size } => {
            let pos = Vec2::new(center[0], center[1]);
            gizmos.rect_2d(
                Isometry2d::from_translation(pos),
                Vec2::new(size[0], size[1]),
                color,
            );
        }
        CourtShape::Arc {
            center,
            radius,
            start_angle,
            end_angle,
        } => {
            // Approximate the arc with line segments.
            let points = arc_points(*center, *radius, *start_angle, *end_angle, arc_segments);
            for pair in points.windows(2) {
                gizmos.line_2d(pair[0], pair[1], color);
            }
        }
    }
}

/// Samples an arc (angles in degrees) into line-segment points.
fn arc_points(
    center: [f32; 2],
    radius: f32,
    start_angle: f32,
    end_angle: f32,
    segments: usize,
) -> Vec<Vec2> {
    let segments = segments.max(2);
    let start = start_angle.to_radians();
    let end = end_angle.to_radians();

    (0..=segments)
        .map(|i| {
            let t = i as f32 / segments as f32;
            let angle = start + (end - start) * t;
            Vec2::new(
                center[0] + radius * angle.cos(),
                center[1] + radius * angle.sin(),
            )
        })
        .collect()
}

/// System to render player tokens and the ball using gizmos.
pub fn render_tokens(
    mut gizmos: Gizmos,
    config: Option<Res<CourtGizmoConfig>>,
    session: Res<GameSession>,
    tokens: Query<(&PlayerToken, &Transform)>,
    balls: Query<(&BallToken, &Transform)>,
) {
    let default_config = CourtGizmoConfig::default();
    let gizmo_config = config.map_or(&default_config, Res::into_inner);

    let Some(game) = session.game() else {
        return;
    };

    for (token, transform) in tokens.iter() {
        let Some(player) = game.players.iter().find(|p| p.id == token.player_id) else {
            continue;
        };
        if player.eliminated {
            continue;
        }

        let pos = transform.translation.truncate();
        let palette = &gizmo_config.token_colors;
        let color = palette[player.avatar.0 as usize % palette.len()];

        gizmos.circle_2d(Isometry2d::from_translation(pos), TOKEN_RADIUS, color);

        // Highlight ring around the active player.
        if player.id == game.current_player().id && !game.is_finished() {
            gizmos.circle_2d(
                Isometry2d::from_translation(pos),
                TOKEN_RADIUS + 0.12,
                Color::srgb(1.0, 1.0, 1.0),
            );
        }
    }

    for (ball, transform) in balls.iter() {
        let pos = transform.translation.truncate();
        // Shot arcs lift the ball; fake the height with a larger radius.
        let lift = 1.0 + 0.6 * (ball.height / SHOT_APEX).clamp(0.0, 1.0);
        gizmos.circle_2d(
            Isometry2d::from_translation(pos),
            BALL_RADIUS * lift,
            gizmo_config.ball_color,
        );
    }
}

/// System to spawn or reuse the court camera.
///
/// Reuses an existing camera entity rather than despawning it so the
/// renderer never loses its target mid-frame.
pub fn setup_court_camera(
    mut commands: Commands,
    existing: Query<Entity, With<MainCamera>>,
    court: Res<Court>,
) {
    if !existing.is_empty() {
        return;
    }

    let [width, length] = court.0.size;
    commands.spawn((
        Camera2d,
        MainCamera,
        Transform::from_translation(Vec3::new(width / 2.0, length / 2.0 + 0.5, 0.0)),
    ));
    tracing::info!("court camera spawned");
}

/// System to fit the camera zoom to the court every frame.
///
/// Window-dependent; only registered by the unified plugin.
pub fn fit_court_camera(
    mut cameras: Query<(&mut Projection, &mut Transform), With<MainCamera>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    court: Res<Court>,
) {
    let Ok(window) = windows.single() else {
        return;
    };

    let [width, length] = court.0.size;
    // Padding leaves room for the banner and letter board.
    let padded_width = width + 8.0;
    let padded_length = length + 4.0;

    let zoom_x = window.width() / padded_width;
    let zoom_y = window.height() / padded_length;
    let zoom = zoom_x.min(zoom_y).clamp(10.0, 500.0);

    for (mut projection, mut transform) in cameras.iter_mut() {
        if let Projection::Orthographic(ortho) = projection.as_mut() {
            ortho.scale = 1.0 / zoom;
        }
        transform.translation.x = width / 2.0 - 1.0;
        transform.translation.y = length / 2.0 + 0.5;
    }
}
