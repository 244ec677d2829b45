//! Coin Rush - A 3D coin-collecting arcade game
//!
//! Core modules:
//! - `sim`: Simulation (movement, animation, collisions, session state)
//! - `feedback`: Capability interface for tones, HUD and overlay messages
//! - `scene`: Serializable scene snapshot handed to the external renderer
//! - `platform`: Time sources and browser wiring
//! - `settings` / `tuning`: Configuration and data-driven game balance

#[cfg(target_arch = "wasm32")]
pub mod audio;
pub mod feedback;
pub mod game;
pub mod platform;
pub mod scene;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use feedback::{Feedback, HudState, NullFeedback, Tone};
pub use game::Game;
pub use scene::SceneSnapshot;
pub use settings::{Settings, SettingsError};
pub use tuning::Tuning;

use glam::Vec3;

/// Game configuration constants
pub mod consts {
    /// Side length of the square playing field
    pub const FIELD: f32 = 90.0;
    /// Half extent of the field; the player is clamped to ±this on x and z
    pub const FIELD_HALF: f32 = FIELD * 0.5;

    /// Player sphere radius
    pub const PLAYER_RADIUS: f32 = 1.1;
    /// Player resting height (sphere sits just above the ground)
    pub const PLAYER_HEIGHT: f32 = PLAYER_RADIUS + 0.01;
    /// Squared speed below which the facing angle is left alone
    pub const FACING_MIN_SPEED_SQ: f32 = 0.001;

    /// Coin height at creation (overwritten by the bob animation)
    pub const COIN_SPAWN_HEIGHT: f32 = 1.4;
    /// Coin spin speed (radians/s)
    pub const COIN_SPIN_SPEED: f32 = 1.6;
    /// Coin bob centre height
    pub const COIN_BOB_BASE: f32 = 1.2;
    /// Coin bob amplitude
    pub const COIN_BOB_AMPLITUDE: f32 = 0.15;
    /// Coin bob frequency (per wall-clock millisecond)
    pub const COIN_BOB_FREQUENCY: f64 = 0.004;
    /// Per-index wall-clock offset that desynchronises neighbouring coins (ms)
    pub const COIN_BOB_INDEX_OFFSET_MS: f64 = 120.0;

    /// Obstacle spin speed (radians/s)
    pub const OBSTACLE_SPIN_SPEED: f32 = 0.8;
    /// Phase multiplier applied to the obstacle index on the z axis
    pub const OBSTACLE_Z_PHASE: f64 = 1.37;
    /// Obstacle cube size range [min, min + span)
    pub const OBSTACLE_SIZE_MIN: f32 = 3.0;
    pub const OBSTACLE_SIZE_SPAN: f32 = 2.0;
    /// Obstacle angular speed range
    pub const OBSTACLE_OMEGA_MIN: f32 = 0.4;
    pub const OBSTACLE_OMEGA_SPAN: f32 = 0.6;
    /// Obstacle oscillation amplitude range
    pub const OBSTACLE_AMP_MIN: f32 = 10.0;
    pub const OBSTACLE_AMP_SPAN: f32 = 16.0;
    /// Obstacle base height range
    pub const OBSTACLE_HEIGHT_MIN: f32 = 1.5;
    pub const OBSTACLE_HEIGHT_SPAN: f32 = 2.0;

    /// Camera follow: fraction of the remaining distance left after one second
    pub const CAMERA_FOLLOW_BASE: f32 = 0.001;
}

/// Frame-rate independent exponential approach of `current` toward `target`.
///
/// `lambda` is the decay rate per second; after `dt` seconds the remaining
/// gap is scaled by `e^(-lambda * dt)`.
#[inline]
pub fn damp(current: f32, target: f32, lambda: f32, dt: f32) -> f32 {
    let t = 1.0 - (-lambda * dt).exp();
    current + (target - current) * t
}

/// Normalized angle to [-π, π)
#[inline]
pub fn normalize_angle(mut angle: f32) -> f32 {
    use std::f32::consts::PI;
    while angle >= PI {
        angle -= 2.0 * PI;
    }
    while angle < -PI {
        angle += 2.0 * PI;
    }
    angle
}

/// Clamp a position's x and z into the playing field, leaving y untouched
#[inline]
pub fn clamp_to_field(pos: Vec3) -> Vec3 {
    use consts::FIELD_HALF;
    Vec3::new(
        pos.x.clamp(-FIELD_HALF, FIELD_HALF),
        pos.y,
        pos.z.clamp(-FIELD_HALF, FIELD_HALF),
    )
}
