//! Keyframe playback for move animations.
//!
//! Drives the demo and replay phases: moves play strictly in order, and a
//! move ends when its animation completes or a fixed timeout elapses,
//! whichever comes first. The timeout is a fallback against a malformed
//! duration wedging the turn, not a cancellation mechanism.

use serde::{Deserialize, Serialize};

use crate::moves::{MovePath, MoveSpec};

/// Hard cap on a single move's playback time in seconds.
pub const MOVE_TIMEOUT: f32 = 4.0;

/// Peak height of a shot's ball arc in meters.
pub const SHOT_APEX: f32 = 2.5;

/// Fraction of a shot move at which the ball leaves the player's hands.
pub const SHOT_RELEASE_FRACTION: f32 = 0.6;

/// Easing type for move animations.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum EasingType {
    Linear,
    #[default]
    EaseInOut,
    EaseIn,
    EaseOut,
}

impl EasingType {
    /// Applies the easing function to a normalized time value (0.0 to 1.0).
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseIn => t * t,
            Self::EaseOut => t * (2.0 - t),
            Self::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
        }
    }
}

fn lerp(a: [f32; 2], b: [f32; 2], t: f32) -> [f32; 2] {
    [a[0] + (b[0] - a[0]) * t, a[1] + (b[1] - a[1]) * t]
}

/// Samples a move path at a normalized time, interpolating between the
/// bracketing keyframes.
pub fn sample_path(path: &MovePath, t: f32) -> [f32; 2] {
    let t = t.clamp(0.0, 1.0);
    let keyframes = &path.keyframes;

    let Some(first) = keyframes.first() else {
        return path.start;
    };
    if t <= first.time {
        return first.position;
    }

    for pair in keyframes.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        if t <= b.time {
            let span = b.time - a.time;
            let local = if span > 0.0 { (t - a.time) / span } else { 1.0 };
            return lerp(a.position, b.position, local);
        }
    }

    keyframes.last().map_or(path.end, |k| k.position)
}

/// Parabolic ball flight toward the hoop.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ShotArc {
    pub from: [f32; 2],
    pub to: [f32; 2],
    pub apex: f32,
}

impl ShotArc {
    pub fn new(from: [f32; 2], to: [f32; 2]) -> Self {
        Self {
            from,
            to,
            apex: SHOT_APEX,
        }
    }

    /// Ground position and height at a normalized flight time.
    pub fn position(&self, t: f32) -> ([f32; 2], f32) {
        let t = t.clamp(0.0, 1.0);
        let ground = lerp(self.from, self.to, t);
        let height = 4.0 * self.apex * t * (1.0 - t);
        (ground, height)
    }
}

/// Playback state for a single move.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct MovePlayback {
    spec: MoveSpec,
    elapsed: f32,
    easing: EasingType,
}

impl MovePlayback {
    fn new(spec: MoveSpec) -> Self {
        Self {
            spec,
            elapsed: 0.0,
            easing: EasingType::default(),
        }
    }

    /// Time at which this move ends: its nominal duration, or the fixed
    /// timeout when the duration can never complete on its own.
    fn cutoff(&self) -> f32 {
        if self.spec.duration > 0.0 && self.spec.duration.is_finite() {
            self.spec.duration.min(MOVE_TIMEOUT)
        } else {
            MOVE_TIMEOUT
        }
    }

    fn progress(&self) -> f32 {
        let cutoff = self.cutoff();
        if cutoff > 0.0 {
            (self.elapsed / cutoff).clamp(0.0, 1.0)
        } else {
            1.0
        }
    }

    fn position(&self) -> [f32; 2] {
        sample_path(&self.spec.path, self.easing.apply(self.progress()))
    }

    fn is_finished(&self) -> bool {
        self.elapsed >= self.cutoff()
    }
}

/// One frame of sequence playback.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackFrame {
    /// Index of the move currently playing.
    pub move_index: usize,
    /// Player token position in meters.
    pub player: [f32; 2],
    /// Ball ground position in meters.
    pub ball: [f32; 2],
    /// Visual lift of the ball above the floor.
    pub ball_height: f32,
}

/// Executes a sequence of moves in order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SequencePlayback {
    moves: Vec<MoveSpec>,
    hoop: [f32; 2],
    current_index: usize,
    active: Option<MovePlayback>,
    finished: bool,
}

impl SequencePlayback {
    /// Creates playback for the given moves; shots fly the ball at `hoop`.
    pub fn new(moves: Vec<MoveSpec>, hoop: [f32; 2]) -> Self {
        let finished = moves.is_empty();
        Self {
            moves,
            hoop,
            current_index: 0,
            active: None,
            finished,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Index of the move currently playing.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_move(&self) -> Option<&MoveSpec> {
        self.moves.get(self.current_index)
    }

    /// Advances playback by `dt` seconds and returns the current frame.
    /// Returns None once the sequence has finished.
    pub fn update(&mut self, dt: f32) -> Option<PlaybackFrame> {
        if self.finished {
            return None;
        }

        if self.active.is_none() {
            let spec = self.moves.get(self.current_index)?.clone();
            self.active = Some(MovePlayback::new(spec));
        }

        let playback = self.active.as_mut()?;
        playback.elapsed += dt;

        let frame = Self::frame_for(playback, self.current_index, self.hoop);

        if playback.is_finished() {
            self.active = None;
            self.current_index += 1;
            if self.current_index >= self.moves.len() {
                self.finished = true;
            }
        }

        Some(frame)
    }

    fn frame_for(playback: &MovePlayback, move_index: usize, hoop: [f32; 2]) -> PlaybackFrame {
        let player = playback.position();
        let progress = playback.progress();

        // The ball rides with the player until a shot releases it.
        let (ball, ball_height) = if playback.spec.is_shot() && progress >= SHOT_RELEASE_FRACTION {
            let release = sample_path(
                &playback.spec.path,
                playback.easing.apply(SHOT_RELEASE_FRACTION),
            );
            let flight = (progress - SHOT_RELEASE_FRACTION) / (1.0 - SHOT_RELEASE_FRACTION);
            ShotArc::new(release, hoop).position(flight)
        } else {
            (player, 0.0)
        };

        PlaybackFrame {
            move_index,
            player,
            ball,
            ball_height,
        }
    }

    /// Resets playback to the first move.
    pub fn reset(&mut self) {
        self.current_index = 0;
        self.active = None;
        self.finished = self.moves.is_empty();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::MoveCatalog;

    const HOOP: [f32; 2] = [5.0, 1.2];

    fn move_by_id(id: &str) -> MoveSpec {
        MoveCatalog::builtin().get(id).unwrap().clone()
    }

    #[test]
    fn test_easing_functions() {
        assert!((EasingType::Linear.apply(0.5) - 0.5).abs() < 0.001);
        assert!((EasingType::EaseIn.apply(0.5) - 0.25).abs() < 0.001);
        assert!((EasingType::EaseOut.apply(0.5) - 0.75).abs() < 0.001);
        assert!((EasingType::EaseInOut.apply(0.5) - 0.5).abs() < 0.001);
        // Endpoints are fixed for every curve.
        for easing in [
            EasingType::Linear,
            EasingType::EaseIn,
            EasingType::EaseOut,
            EasingType::EaseInOut,
        ] {
            assert_eq!(easing.apply(0.0), 0.0);
            assert_eq!(easing.apply(1.0), 1.0);
        }
    }

    #[test]
    fn test_sample_path_endpoints_and_midpoints() {
        let spec = move_by_id("crossover");
        let first = spec.path.keyframes.first().unwrap().position;
        let last = spec.path.keyframes.last().unwrap().position;

        assert_eq!(sample_path(&spec.path, 0.0), first);
        assert_eq!(sample_path(&spec.path, 1.0), last);

        // Halfway between the 0.3 and 0.7 keyframes.
        let mid = sample_path(&spec.path, 0.5);
        assert!((mid[0] - 5.0).abs() < 0.001);
    }

    #[test]
    fn test_shot_arc_lands_on_hoop() {
        let arc = ShotArc::new([5.0, 12.5], HOOP);
        let (start, h0) = arc.position(0.0);
        let (end, h1) = arc.position(1.0);
        let (_, apex) = arc.position(0.5);

        assert_eq!(start, [5.0, 12.5]);
        assert_eq!(end, HOOP);
        assert_eq!(h0, 0.0);
        assert_eq!(h1, 0.0);
        assert!((apex - SHOT_APEX).abs() < 0.001);
    }

    #[test]
    fn test_sequence_plays_moves_in_order() {
        let moves = vec![move_by_id("basic_dribble"), move_by_id("jump_shot")];
        let total: f32 = moves.iter().map(|m| m.duration).sum();
        let mut playback = SequencePlayback::new(moves, HOOP);

        let mut seen = Vec::new();
        let dt = 0.05;
        let steps = (total / dt).ceil() as usize + 2;
        for _ in 0..steps {
            if let Some(frame) = playback.update(dt) {
                seen.push(frame.move_index);
            }
        }

        assert!(playback.is_finished());
        // Indices are non-decreasing and both moves played.
        assert!(seen.windows(2).all(|w| w[0] <= w[1]));
        assert!(seen.contains(&0) && seen.contains(&1));
    }

    #[test]
    fn test_ball_flies_to_hoop_on_shots() {
        let mut playback = SequencePlayback::new(vec![move_by_id("free_throw")], HOOP);

        let mut lifted = false;
        let mut last_frame = None;
        while let Some(frame) = playback.update(0.05) {
            if frame.ball_height > 0.0 {
                lifted = true;
            }
            last_frame = Some(frame);
        }

        assert!(lifted, "shot should lift the ball");
        let frame = last_frame.unwrap();
        assert!((frame.ball[0] - HOOP[0]).abs() < 0.2);
        assert!((frame.ball[1] - HOOP[1]).abs() < 0.2);
    }

    #[test]
    fn test_malformed_duration_hits_timeout() {
        let mut spec = move_by_id("basic_dribble");
        spec.duration = f32::NAN;
        let mut playback = SequencePlayback::new(vec![spec], HOOP);

        let dt = 0.1;
        let steps = (MOVE_TIMEOUT / dt).ceil() as usize + 2;
        for _ in 0..steps {
            playback.update(dt);
        }

        assert!(playback.is_finished(), "timeout must unwedge the sequence");
    }

    #[test]
    fn test_empty_sequence_is_finished() {
        let mut playback = SequencePlayback::new(Vec::new(), HOOP);
        assert!(playback.is_finished());
        assert!(playback.update(0.1).is_none());
    }

    #[test]
    fn test_reset() {
        let mut playback = SequencePlayback::new(vec![move_by_id("basic_dribble")], HOOP);
        while playback.update(0.25).is_some() {}
        assert!(playback.is_finished());

        playback.reset();
        assert!(!playback.is_finished());
        assert_eq!(playback.current_index(), 0);
        assert!(playback.update(0.1).is_some());
    }
}
