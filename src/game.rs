//! Game driver
//!
//! Owns the session, the held keys and the frame clock. Platform code feeds
//! it events and calls [`Game::frame`] once per display refresh.

use crate::feedback::{Feedback, HudState};
use crate::platform::{FrameClock, TimeSource};
use crate::scene::SceneSnapshot;
use crate::settings::Settings;
use crate::sim::{CollisionOutcome, FrameTime, GameState, InputState, autopilot_input, tick};

/// Key that toggles the demo autopilot
pub const AUTOPILOT_KEY: &str = "KeyI";

pub struct Game<T: TimeSource> {
    pub state: GameState,
    pub input: InputState,
    /// Idle/demo mode - the autopilot drives instead of the keyboard
    pub autopilot: bool,
    clock: FrameClock,
    time: T,
}

impl<T: TimeSource> Game<T> {
    pub fn new(settings: &Settings, seed: u64, time: T) -> Self {
        let now = time.now_ms();
        Self {
            state: GameState::new(seed, settings.tuning.clone(), now),
            input: InputState::default(),
            autopilot: false,
            clock: FrameClock::new(settings.max_frame_dt),
            time,
        }
    }

    pub fn now_ms(&self) -> f64 {
        self.time.now_ms()
    }

    pub fn hud(&self) -> HudState {
        self.state.hud(self.now_ms())
    }

    /// Run one frame of simulation
    pub fn frame(&mut self, feedback: &mut impl Feedback) -> CollisionOutcome {
        let now_ms = self.time.now_ms();
        let dt = self.clock.delta(now_ms);
        let input = if self.autopilot {
            autopilot_input(&self.state)
        } else {
            self.input
        };
        tick(&mut self.state, &input, FrameTime { dt, now_ms }, feedback)
    }

    /// Start button
    pub fn start(&mut self, feedback: &mut impl Feedback) {
        let now = self.now_ms();
        self.state.start(now, feedback);
    }

    /// Window lost focus
    pub fn blur(&mut self, feedback: &mut impl Feedback) {
        // Key-up events go elsewhere while unfocused
        self.input = InputState::default();
        self.state.pause(feedback);
    }

    /// Key event by `KeyboardEvent.code`; returns true if the game used it
    pub fn key(&mut self, code: &str, pressed: bool) -> bool {
        if code == AUTOPILOT_KEY {
            if pressed {
                self.autopilot = !self.autopilot;
                log::info!("Idle mode: {}", self.autopilot);
            }
            return true;
        }
        self.input.apply_key(code, pressed)
    }

    pub fn snapshot(&self) -> SceneSnapshot {
        SceneSnapshot::capture(&self.state)
    }
}
