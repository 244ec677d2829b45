//! Per-frame simulation step
//!
//! Ambient animation always runs; movement and collisions only while the
//! session is running.

use super::animate::{animate_coins, animate_obstacles};
use super::collision::{CollisionOutcome, resolve_collisions};
use super::input::InputState;
use super::state::GameState;
use crate::consts::CAMERA_FOLLOW_BASE;
use crate::feedback::Feedback;

/// Timing for a single frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTime {
    /// Seconds since the previous frame
    pub dt: f32,
    /// Wall-clock time of this frame (ms)
    pub now_ms: f64,
}

impl FrameTime {
    /// Wall-clock time in seconds, which drives obstacle paths
    pub fn now_secs(&self) -> f64 {
        self.now_ms / 1000.0
    }
}

/// Advance the game by one rendered frame
pub fn tick(
    state: &mut GameState,
    input: &InputState,
    frame: FrameTime,
    feedback: &mut impl Feedback,
) -> CollisionOutcome {
    let dt = frame.dt.max(0.0);

    animate_coins(&mut state.coins, frame.now_ms, dt);
    animate_obstacles(&mut state.obstacles, frame.now_secs(), dt);

    let mut outcome = CollisionOutcome::default();
    if state.phase.is_running() {
        state.player.update(input, &state.tuning, dt);
        outcome = resolve_collisions(state, frame.now_ms, feedback);
        feedback.refresh_hud(&state.hud(frame.now_ms));
    }

    let follow = 1.0 - CAMERA_FOLLOW_BASE.powf(dt);
    state.camera_target = state.camera_target.lerp(state.player.pos, follow);

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::FIELD_HALF;
    use crate::feedback::{NullFeedback, RecordingFeedback};
    use crate::sim::state::GamePhase;
    use crate::sim::spawn::create_coin;
    use crate::tuning::Tuning;
    use glam::Vec3;

    const DT: f32 = 1.0 / 60.0;

    fn frame(n: u32) -> FrameTime {
        FrameTime {
            dt: DT,
            now_ms: n as f64 * 1000.0 / 60.0,
        }
    }

    #[test]
    fn test_paused_world_still_animates() {
        let mut state = GameState::new(5, Tuning::default(), 0.0);
        let before: Vec<Vec3> = state.obstacles.iter().map(|o| o.pos).collect();
        let mut fb = RecordingFeedback::new();
        let right = InputState {
            right: true,
            ..Default::default()
        };

        for n in 1..=30 {
            tick(&mut state, &right, frame(n), &mut fb);
        }

        assert_eq!(state.phase, GamePhase::Ready);
        assert!(state.coins.iter().all(|c| c.spin > 0.0));
        assert!(state.obstacles.iter().all(|o| o.spin > 0.0));
        let moved = state
            .obstacles
            .iter()
            .zip(&before)
            .any(|(o, b)| !o.is_stationary() && o.pos != *b);
        assert!(moved);
        // Player ignores input until started
        assert_eq!(state.player.pos.x, 0.0);
        assert!(fb.huds.is_empty());
    }

    #[test]
    fn test_running_moves_player_and_refreshes_hud() {
        let mut state = GameState::new(5, Tuning::default(), 0.0);
        let mut fb = RecordingFeedback::new();
        state.start(0.0, &mut fb);
        state.obstacles.clear();
        state.coins = vec![create_coin(999, Vec3::new(40.0, 0.0, 40.0))];

        let right = InputState {
            right: true,
            ..Default::default()
        };
        for n in 1..=60 {
            tick(&mut state, &right, frame(n), &mut fb);
        }

        assert!(state.player.pos.x > 5.0);
        let hud = fb.last_hud().copied().unwrap();
        assert!((hud.elapsed_secs - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_player_confined_when_driving_into_wall() {
        let mut state = GameState::new(5, Tuning::default(), 0.0);
        state.start(0.0, &mut NullFeedback);
        state.obstacles.clear();
        state.coins = vec![create_coin(999, Vec3::new(-40.0, 0.0, -40.0))];

        let push = InputState {
            right: true,
            back: true,
            ..Default::default()
        };
        for n in 1..=600 {
            tick(&mut state, &push, frame(n), &mut NullFeedback);
            assert!(state.player.pos.x.abs() <= FIELD_HALF);
            assert!(state.player.pos.z.abs() <= FIELD_HALF);
        }
        assert_eq!(state.player.pos.x, FIELD_HALF);
    }

    #[test]
    fn test_single_coin_wins_and_stops() {
        let mut state = GameState::new(5, Tuning::default(), 0.0);
        let mut fb = RecordingFeedback::new();
        state.start(0.0, &mut fb);
        state.obstacles.clear();
        state.coins = vec![create_coin(999, Vec3::new(1.0, 0.0, 0.0))];

        let outcome = tick(&mut state, &InputState::default(), frame(1), &mut fb);
        assert!(outcome.won);
        assert_eq!(state.phase, GamePhase::Won);
        assert_eq!(fb.messages.len(), 1);

        let huds = fb.huds.len();
        let outcome = tick(&mut state, &InputState::default(), frame(2), &mut fb);
        assert!(!outcome.won);
        assert_eq!(fb.messages.len(), 1);
        assert_eq!(fb.huds.len(), huds);
    }

    #[test]
    fn test_camera_follows_player() {
        let mut state = GameState::new(5, Tuning::default(), 0.0);
        state.player.pos = Vec3::new(10.0, state.player.pos.y, 0.0);
        let start = state.camera_target.distance(state.player.pos);
        tick(&mut state, &InputState::default(), frame(1), &mut NullFeedback);
        let after = state.camera_target.distance(state.player.pos);
        assert!(after < start);
        assert!(after > 0.0);
    }

    #[test]
    fn test_same_seed_same_frames() {
        let mut a = GameState::new(77, Tuning::default(), 0.0);
        let mut b = GameState::new(77, Tuning::default(), 0.0);
        a.start(0.0, &mut NullFeedback);
        b.start(0.0, &mut NullFeedback);
        let input = InputState {
            forward: true,
            left: true,
            ..Default::default()
        };
        for n in 1..=120 {
            tick(&mut a, &input, frame(n), &mut NullFeedback);
            tick(&mut b, &input, frame(n), &mut NullFeedback);
        }
        assert_eq!(a.player, b.player);
        assert_eq!(a.score, b.score);
        assert_eq!(a.coins, b.coins);
    }
}
