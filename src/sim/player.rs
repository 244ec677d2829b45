//! Player controller

use glam::Vec3;

use super::input::InputState;
use super::state::Player;
use crate::consts::FACING_MIN_SPEED_SQ;
use crate::tuning::Tuning;
use crate::{clamp_to_field, damp, normalize_angle};

impl Player {
    /// Integrate one frame of input into velocity, position and facing
    pub fn update(&mut self, input: &InputState, tuning: &Tuning, dt: f32) {
        let dir = input.axis().normalize_or_zero();
        let (target, rate) = if dir == Vec3::ZERO {
            (Vec3::ZERO, tuning.friction)
        } else {
            (dir * tuning.move_speed, tuning.acceleration)
        };

        self.vel.x = damp(self.vel.x, target.x, rate, dt);
        self.vel.z = damp(self.vel.z, target.z, rate, dt);

        self.pos += self.vel * dt;
        self.pos = clamp_to_field(self.pos);

        if self.vel.length_squared() > FACING_MIN_SPEED_SQ {
            self.turn_toward(self.vel.x.atan2(self.vel.z), tuning.turn_rate, dt);
        }
    }

    /// Shove the player `distance` units horizontally away from `from`
    pub fn knock_back(&mut self, from: Vec3, distance: f32) {
        let away = Vec3::new(self.pos.x - from.x, 0.0, self.pos.z - from.z).normalize_or_zero();
        self.pos = clamp_to_field(self.pos + away * distance);
    }

    /// Damp the facing angle toward `angle` the short way round
    fn turn_toward(&mut self, angle: f32, rate: f32, dt: f32) {
        let delta = normalize_angle(angle - self.facing);
        let facing = damp(self.facing, self.facing + delta, rate, dt);
        self.facing = normalize_angle(facing);
    }
}
