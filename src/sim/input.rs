//! Held movement keys

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Logical movement direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Back,
    Left,
    Right,
}

impl Direction {
    /// Map a `KeyboardEvent.code` (arrows and WASD) to a direction
    pub fn from_key_code(code: &str) -> Option<Self> {
        match code {
            "ArrowUp" | "KeyW" => Some(Direction::Forward),
            "ArrowDown" | "KeyS" => Some(Direction::Back),
            "ArrowLeft" | "KeyA" => Some(Direction::Left),
            "ArrowRight" | "KeyD" => Some(Direction::Right),
            _ => None,
        }
    }
}

/// Which movement keys are currently down
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputState {
    pub forward: bool,
    pub back: bool,
    pub left: bool,
    pub right: bool,
}

impl InputState {
    pub fn set(&mut self, dir: Direction, pressed: bool) {
        match dir {
            Direction::Forward => self.forward = pressed,
            Direction::Back => self.back = pressed,
            Direction::Left => self.left = pressed,
            Direction::Right => self.right = pressed,
        }
    }

    /// Apply a key event; returns false for keys that don't steer
    pub fn apply_key(&mut self, code: &str, pressed: bool) -> bool {
        match Direction::from_key_code(code) {
            Some(dir) => {
                self.set(dir, pressed);
                true
            }
            None => false,
        }
    }

    /// Unnormalized steering vector on the ground plane. Forward is -z.
    pub fn axis(&self) -> Vec3 {
        let x = self.right as i8 - self.left as i8;
        let z = self.back as i8 - self.forward as i8;
        Vec3::new(x as f32, 0.0, z as f32)
    }

    pub fn is_idle(&self) -> bool {
        self.axis() == Vec3::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_mapping() {
        assert_eq!(Direction::from_key_code("KeyW"), Some(Direction::Forward));
        assert_eq!(Direction::from_key_code("ArrowUp"), Some(Direction::Forward));
        assert_eq!(Direction::from_key_code("KeyS"), Some(Direction::Back));
        assert_eq!(Direction::from_key_code("ArrowLeft"), Some(Direction::Left));
        assert_eq!(Direction::from_key_code("KeyD"), Some(Direction::Right));
        assert_eq!(Direction::from_key_code("Space"), None);
    }

    #[test]
    fn test_press_release() {
        let mut input = InputState::default();
        assert!(input.apply_key("KeyA", true));
        assert!(input.left);
        assert_eq!(input.axis(), Vec3::new(-1.0, 0.0, 0.0));
        assert!(input.apply_key("ArrowLeft", false));
        assert!(input.is_idle());
        assert!(!input.apply_key("KeyQ", true));
    }

    #[test]
    fn test_opposing_keys_cancel() {
        let input = InputState {
            forward: true,
            back: true,
            left: false,
            right: true,
        };
        assert_eq!(input.axis(), Vec3::new(1.0, 0.0, 0.0));
    }
}
