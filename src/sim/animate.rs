//! Ambient animation for coins and obstacles
//!
//! Runs every frame whether or not the session is running.

use glam::Vec3;

use super::state::{Coin, Obstacle};
use crate::consts::*;

/// Position of obstacle `index` at time `t` (seconds). Pure: depends only
/// on the obstacle's own parameters.
pub fn obstacle_position(obstacle: &Obstacle, index: usize, t: f64) -> Vec3 {
    let i = index as f64;
    let omega = obstacle.omega as f64;
    let amp = obstacle.amplitude as f64;
    let dx = (t * omega + i).sin() * amp * obstacle.axis.x as f64;
    let dz = (t * omega + i * OBSTACLE_Z_PHASE).cos() * amp * obstacle.axis.z as f64;
    Vec3::new(
        obstacle.base.x + dx as f32,
        obstacle.base.y,
        obstacle.base.z + dz as f32,
    )
}

/// Advance every obstacle along its path and spin it
pub fn animate_obstacles(obstacles: &mut [Obstacle], t: f64, dt: f32) {
    for (i, obstacle) in obstacles.iter_mut().enumerate() {
        obstacle.pos = obstacle_position(obstacle, i, t);
        obstacle.spin += OBSTACLE_SPIN_SPEED * dt;
    }
}

/// Bob height of the coin currently at `index`, driven by wall-clock time
pub fn coin_height(index: usize, wall_ms: f64) -> f32 {
    let phase = (wall_ms + index as f64 * COIN_BOB_INDEX_OFFSET_MS) * COIN_BOB_FREQUENCY;
    COIN_BOB_BASE + phase.sin() as f32 * COIN_BOB_AMPLITUDE
}

/// Spin every coin and bob it up and down
pub fn animate_coins(coins: &mut [Coin], wall_ms: f64, dt: f32) {
    for (i, coin) in coins.iter_mut().enumerate() {
        coin.spin += COIN_SPIN_SPEED * dt;
        coin.pos.y = coin_height(i, wall_ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::spawn::create_coin;

    fn obstacle(axis: Vec3) -> Obstacle {
        Obstacle {
            id: 1,
            base: Vec3::new(5.0, 2.0, -5.0),
            pos: Vec3::new(5.0, 2.0, -5.0),
            size: 4.0,
            omega: 0.5,
            amplitude: 10.0,
            axis,
            spin: 0.0,
        }
    }

    #[test]
    fn test_obstacle_path_formula() {
        let o = obstacle(Vec3::new(1.0, 0.0, 1.0).normalize());
        let t = 3.0;
        let p = obstacle_position(&o, 2, t);
        let k = std::f64::consts::FRAC_1_SQRT_2;
        let ex = 5.0 + (t * 0.5 + 2.0).sin() * 10.0 * k;
        let ez = -5.0 + (t * 0.5 + 2.0 * 1.37).cos() * 10.0 * k;
        assert!((p.x as f64 - ex).abs() < 1e-4);
        assert!((p.z as f64 - ez).abs() < 1e-4);
        assert_eq!(p.y, 2.0);
    }

    #[test]
    fn test_obstacle_position_is_deterministic() {
        let o = obstacle(Vec3::X);
        assert_eq!(obstacle_position(&o, 4, 17.25), obstacle_position(&o, 4, 17.25));
    }

    #[test]
    fn test_single_axis_keeps_other_coordinate() {
        let o = obstacle(Vec3::X);
        let p = obstacle_position(&o, 0, 1.0);
        assert_eq!(p.z, -5.0);
        assert!((p.x - 5.0).abs() <= 10.0);
    }

    #[test]
    fn test_zero_axis_is_stationary() {
        let o = obstacle(Vec3::ZERO);
        for t in [0.0, 1.5, 100.0] {
            assert_eq!(obstacle_position(&o, 3, t), o.base);
        }
    }

    #[test]
    fn test_animate_obstacles_spins() {
        let mut obstacles = vec![obstacle(Vec3::Z)];
        animate_obstacles(&mut obstacles, 0.0, 0.5);
        assert!((obstacles[0].spin - 0.4).abs() < 1e-6);
    }

    #[test]
    fn test_coin_bob_range_and_offset() {
        for ms in [0.0, 123.0, 9999.0] {
            let y = coin_height(0, ms);
            assert!((1.05..=1.35).contains(&y));
        }
        // Index shifts the wave by 120ms
        assert_eq!(coin_height(1, 1000.0), coin_height(0, 1120.0));
    }

    #[test]
    fn test_animate_coins() {
        let mut coins = vec![create_coin(1, Vec3::ZERO), create_coin(2, Vec3::ONE)];
        animate_coins(&mut coins, 250.0, 0.25);
        assert!((coins[0].spin - 0.4).abs() < 1e-6);
        assert_eq!(coins[1].pos.y, coin_height(1, 250.0));
        assert_eq!(coins[1].pos.x, 1.0);
    }
}
