//! Game state and core simulation types

use glam::Vec3;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::spawn;
use crate::consts::*;
use crate::feedback::{Feedback, HudState};
use crate::tuning::Tuning;

/// Message shown when the window loses focus mid-run
pub const PAUSE_MESSAGE: &str = "Game paused. Press \"Start\" to play again.";

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Fresh field, waiting for the first start
    Ready,
    /// Active gameplay
    Running,
    /// Focus lost; only a restart leaves this phase
    Paused,
    /// Every coin collected
    Won,
}

impl GamePhase {
    #[inline]
    pub fn is_running(self) -> bool {
        self == GamePhase::Running
    }
}

/// A collectible coin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coin {
    pub id: u32,
    pub pos: Vec3,
    /// Accumulated spin about the coin's face normal (radians)
    pub spin: f32,
}

/// A moving cube hazard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    /// Centre of the oscillation
    pub base: Vec3,
    /// Current position
    pub pos: Vec3,
    /// Cube edge length
    pub size: f32,
    /// Angular speed of the oscillation (radians/s)
    pub omega: f32,
    /// Oscillation amplitude
    pub amplitude: f32,
    /// Normalized movement axis; zero for a stationary obstacle
    pub axis: Vec3,
    /// Accumulated yaw (radians)
    pub spin: f32,
}

impl Obstacle {
    /// True when the random axis came out (0, 0, 0)
    pub fn is_stationary(&self) -> bool {
        self.axis == Vec3::ZERO
    }
}

/// The player-controlled sphere
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec3,
    /// Horizontal velocity (y is always 0)
    pub vel: Vec3,
    /// Yaw, radians
    pub facing: f32,
    pub radius: f32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            pos: Vec3::new(0.0, PLAYER_HEIGHT, 0.0),
            vel: Vec3::ZERO,
            facing: 0.0,
            radius: PLAYER_RADIUS,
        }
    }
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub phase: GamePhase,
    pub score: u32,
    /// Wall-clock time (ms) the current session started
    pub start_ms: f64,
    pub player: Player,
    /// Active coins
    pub coins: Vec<Coin>,
    /// Obstacles; the index doubles as the animation phase offset
    pub obstacles: Vec<Obstacle>,
    /// Point the external camera orbits around
    pub camera_target: Vec3,
    pub tuning: Tuning,
    rng: Pcg32,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a populated but not yet running session
    pub fn new(seed: u64, tuning: Tuning, now_ms: f64) -> Self {
        let player = Player::default();
        let mut state = Self {
            seed,
            phase: GamePhase::Ready,
            score: 0,
            start_ms: now_ms,
            camera_target: player.pos,
            player,
            coins: Vec::new(),
            obstacles: Vec::new(),
            tuning,
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
        };
        state.populate();
        state
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Time shown on the HUD
    pub fn elapsed_secs(&self, now_ms: f64) -> f64 {
        (now_ms - self.start_ms) / 1000.0
    }

    pub fn hud(&self, now_ms: f64) -> HudState {
        HudState {
            score: self.score,
            elapsed_secs: self.elapsed_secs(now_ms),
        }
    }

    /// Replace every entity, put the player back at the origin and restart
    /// the clock. The phase is left alone.
    pub fn reset(&mut self, now_ms: f64, feedback: &mut impl Feedback) {
        self.populate();
        self.player = Player::default();
        self.score = 0;
        self.start_ms = now_ms;
        log::debug!(
            "Session reset: {} coins, {} obstacles",
            self.coins.len(),
            self.obstacles.len()
        );
        feedback.refresh_hud(&self.hud(now_ms));
    }

    /// Start (or restart) a run
    pub fn start(&mut self, now_ms: f64, feedback: &mut impl Feedback) {
        feedback.hide_message();
        self.phase = GamePhase::Running;
        self.reset(now_ms, feedback);
        log::info!("Run started (seed {})", self.seed);
    }

    /// Window lost focus
    ///
    /// Only a running session is paused. On the start or win screen the
    /// phase and the overlay message stay as they are.
    pub fn pause(&mut self, feedback: &mut impl Feedback) {
        if !self.phase.is_running() {
            return;
        }
        self.phase = GamePhase::Paused;
        feedback.show_message(PAUSE_MESSAGE);
        log::info!("Auto-paused (window blur), score {}", self.score);
    }

    fn populate(&mut self) {
        self.coins.clear();
        self.obstacles.clear();

        let margin = self.tuning.spawn_margin;
        for _ in 0..self.tuning.coin_count {
            let pos = spawn::random_position(&mut self.rng, margin);
            let id = self.next_entity_id();
            self.coins.push(spawn::create_coin(id, pos));
        }
        for _ in 0..self.tuning.obstacle_count {
            let mut pos = spawn::random_position(&mut self.rng, margin);
            pos.y = spawn::obstacle_height(&mut self.rng);
            let id = self.next_entity_id();
            let obstacle = spawn::create_obstacle(&mut self.rng, id, pos, None);
            if obstacle.is_stationary() {
                log::debug!("Obstacle {} spawned without a movement axis", id);
            }
            self.obstacles.push(obstacle);
        }
    }
}
