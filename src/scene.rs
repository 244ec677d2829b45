//! Scene snapshot for the external renderer
//!
//! The browser page owns the 3D scene (meshes, lights, orbit camera). Each
//! frame it receives one of these as JSON and copies the transforms onto
//! its meshes, keyed by entity id.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::sim::{GamePhase, GameState};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerView {
    pub pos: Vec3,
    pub facing: f32,
    pub radius: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinView {
    pub id: u32,
    pub pos: Vec3,
    pub spin: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObstacleView {
    pub id: u32,
    pub pos: Vec3,
    pub size: f32,
    pub spin: f32,
}

/// Everything the renderer needs to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneSnapshot {
    pub phase: GamePhase,
    pub score: u32,
    pub player: PlayerView,
    pub camera_target: Vec3,
    pub coins: Vec<CoinView>,
    pub obstacles: Vec<ObstacleView>,
}

impl SceneSnapshot {
    pub fn capture(state: &GameState) -> Self {
        Self {
            phase: state.phase,
            score: state.score,
            player: PlayerView {
                pos: state.player.pos,
                facing: state.player.facing,
                radius: state.player.radius,
            },
            camera_target: state.camera_target,
            coins: state
                .coins
                .iter()
                .map(|c| CoinView {
                    id: c.id,
                    pos: c.pos,
                    spin: c.spin,
                })
                .collect(),
            obstacles: state
                .obstacles
                .iter()
                .map(|o| ObstacleView {
                    id: o.id,
                    pos: o.pos,
                    size: o.size,
                    spin: o.spin,
                })
                .collect(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
