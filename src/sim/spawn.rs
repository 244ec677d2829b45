//! Entity factory
//!
//! Placement and motion parameters are drawn from the session RNG so a
//! seed fully determines the layout.

use glam::Vec3;
use rand::Rng;

use super::state::{Coin, Obstacle};
use crate::consts::*;

/// Uniform position on the ground plane, `margin` units in from every edge
pub fn random_position(rng: &mut impl Rng, margin: f32) -> Vec3 {
    let span = (FIELD - margin * 2.0).max(0.0);
    let x = spread(rng, span);
    let z = spread(rng, span);
    Vec3::new(x, 0.0, z)
}

/// Uniform value in [-span/2, span/2]
fn spread(rng: &mut impl Rng, span: f32) -> f32 {
    span * (0.5 - rng.random::<f32>())
}

/// Coin resting at spawn height over (x, z)
pub fn create_coin(id: u32, pos: Vec3) -> Coin {
    Coin {
        id,
        pos: Vec3::new(pos.x, COIN_SPAWN_HEIGHT, pos.z),
        spin: 0.0,
    }
}

/// Random obstacle base height
pub fn obstacle_height(rng: &mut impl Rng) -> f32 {
    OBSTACLE_HEIGHT_MIN + rng.random::<f32>() * OBSTACLE_HEIGHT_SPAN
}

/// Obstacle with random motion parameters. `size` defaults to [3, 5).
///
/// The axis picks x and z independently from {0, 1} and is then
/// normalized, so both-zero yields a stationary obstacle.
pub fn create_obstacle(rng: &mut impl Rng, id: u32, pos: Vec3, size: Option<f32>) -> Obstacle {
    let size = size.unwrap_or_else(|| OBSTACLE_SIZE_MIN + rng.random::<f32>() * OBSTACLE_SIZE_SPAN);
    let omega = OBSTACLE_OMEGA_MIN + rng.random::<f32>() * OBSTACLE_OMEGA_SPAN;
    let amplitude = OBSTACLE_AMP_MIN + rng.random::<f32>() * OBSTACLE_AMP_SPAN;
    let axis_x = if rng.random_bool(0.5) { 1.0 } else { 0.0 };
    let axis_z = if rng.random_bool(0.5) { 1.0 } else { 0.0 };

    Obstacle {
        id,
        base: pos,
        pos,
        size,
        omega,
        amplitude,
        axis: Vec3::new(axis_x, 0.0, axis_z).normalize_or_zero(),
        spin: 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_random_position_bounds() {
        let mut rng = Pcg32::seed_from_u64(1);
        for _ in 0..1000 {
            let p = random_position(&mut rng, 6.0);
            assert!(p.x.abs() <= 39.0);
            assert!(p.z.abs() <= 39.0);
            assert_eq!(p.y, 0.0);
        }
    }

    #[test]
    fn test_random_position_degenerate_margin() {
        let mut rng = Pcg32::seed_from_u64(1);
        let p = random_position(&mut rng, FIELD_HALF);
        assert_eq!(p, Vec3::ZERO);
    }

    #[test]
    fn test_coin_height() {
        let coin = create_coin(5, Vec3::new(3.0, 0.0, -2.0));
        assert_eq!(coin.pos, Vec3::new(3.0, COIN_SPAWN_HEIGHT, -2.0));
        assert_eq!(coin.id, 5);
    }

    #[test]
    fn test_obstacle_parameter_ranges() {
        let mut rng = Pcg32::seed_from_u64(2024);
        let mut stationary = 0;
        let mut diagonal = 0;
        for id in 0..500 {
            let o = create_obstacle(&mut rng, id, Vec3::ZERO, None);
            assert!((3.0..5.0).contains(&o.size));
            assert!((0.4..1.0).contains(&o.omega));
            assert!((10.0..26.0).contains(&o.amplitude));
            assert_eq!(o.axis.y, 0.0);
            if o.is_stationary() {
                stationary += 1;
            } else {
                assert!((o.axis.length() - 1.0).abs() < 1e-5);
                if o.axis.x > 0.0 && o.axis.z > 0.0 {
                    diagonal += 1;
                }
            }
        }
        // Each axis combination turns up about a quarter of the time
        assert!(stationary > 50);
        assert!(diagonal > 50);
    }

    #[test]
    fn test_obstacle_explicit_size() {
        let mut rng = Pcg32::seed_from_u64(0);
        let o = create_obstacle(&mut rng, 1, Vec3::new(1.0, 2.0, 3.0), Some(4.5));
        assert_eq!(o.size, 4.5);
        assert_eq!(o.base, o.pos);
    }
}
