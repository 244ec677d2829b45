//! Data-driven game balance
//!
//! Every gameplay knob that a designer might want to tweak without touching
//! simulation code. Loaded as part of [`crate::Settings`].

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Coins spawned per session
    pub coin_count: usize,
    /// Obstacles spawned per session
    pub obstacle_count: usize,
    /// Keep-out band along the field edge when placing entities
    pub spawn_margin: f32,

    // === Player movement ===
    /// Top speed while a direction is held (units/s)
    pub move_speed: f32,
    /// Damping rate toward top speed while input is held
    pub acceleration: f32,
    /// Damping rate toward rest when idle
    pub friction: f32,
    /// Damping rate of the facing angle
    pub turn_rate: f32,

    // === Collisions ===
    /// Added to the player radius for coin pickup distance
    pub pickup_radius: f32,
    /// Fraction of obstacle size used as its hit radius
    pub obstacle_hit_factor: f32,
    /// Distance the player is shoved away from an obstacle on contact
    pub knockback: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            coin_count: 18,
            obstacle_count: 7,
            spawn_margin: 6.0,

            move_speed: 16.0,
            acceleration: 12.0,
            friction: 10.0,
            turn_rate: 10.0,

            pickup_radius: 1.1,
            obstacle_hit_factor: 0.65,
            knockback: 4.0,
        }
    }
}

impl Tuning {
    /// Hit radius of an obstacle of the given size
    #[inline]
    pub fn obstacle_radius(&self, size: f32) -> f32 {
        size * self.obstacle_hit_factor
    }
}
