//! Idle/demo mode - steers the player toward the nearest coin
//!
//! Produces ordinary key input, so the simulation treats it exactly like a
//! human at the keyboard.

use super::input::InputState;
use super::state::GameState;

/// Per-axis distance under which the autopilot stops pressing that axis
const DEAD_ZONE: f32 = 0.5;

pub fn autopilot_input(state: &GameState) -> InputState {
    let player = state.player.pos;
    let nearest = state.coins.iter().min_by(|a, b| {
        a.pos
            .distance_squared(player)
            .partial_cmp(&b.pos.distance_squared(player))
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let Some(coin) = nearest else {
        return InputState::default();
    };

    let dx = coin.pos.x - player.x;
    let dz = coin.pos.z - player.z;
    InputState {
        forward: dz < -DEAD_ZONE,
        back: dz > DEAD_ZONE,
        left: dx < -DEAD_ZONE,
        right: dx > DEAD_ZONE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::spawn::create_coin;
    use crate::tuning::Tuning;
    use glam::Vec3;

    #[test]
    fn test_heads_for_nearest_coin() {
        let mut state = GameState::new(1, Tuning::default(), 0.0);
        state.coins = vec![
            create_coin(100, Vec3::new(30.0, 0.0, 30.0)),
            create_coin(101, Vec3::new(-5.0, 0.0, -5.0)),
        ];
        let input = autopilot_input(&state);
        assert!(input.left && input.forward);
        assert!(!input.right && !input.back);
    }

    #[test]
    fn test_idle_without_coins() {
        let mut state = GameState::new(1, Tuning::default(), 0.0);
        state.coins.clear();
        assert!(autopilot_input(&state).is_idle());
    }

    #[test]
    fn test_dead_zone_on_aligned_axis() {
        let mut state = GameState::new(1, Tuning::default(), 0.0);
        state.coins = vec![create_coin(100, Vec3::new(0.2, 0.0, 10.0))];
        let input = autopilot_input(&state);
        assert!(input.back);
        assert!(!input.left && !input.right);
    }
}
