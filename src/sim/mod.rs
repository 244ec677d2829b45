//! Simulation module
//!
//! All gameplay logic lives here. This module stays free of rendering and
//! platform code:
//! - Time arrives as an explicit [`FrameTime`]
//! - Seeded RNG only
//! - Presentation goes through the [`crate::Feedback`] trait

pub mod animate;
pub mod autopilot;
pub mod collision;
pub mod input;
pub mod player;
pub mod spawn;
pub mod state;
pub mod tick;

pub use animate::{animate_coins, animate_obstacles, coin_height, obstacle_position};
pub use autopilot::autopilot_input;
pub use collision::{CollisionOutcome, resolve_collisions, touches_coin, touches_obstacle, win_message};
pub use input::{Direction, InputState};
pub use spawn::{create_coin, create_obstacle, random_position};
pub use state::{Coin, GamePhase, GameState, Obstacle, PAUSE_MESSAGE, Player};
pub use tick::{FrameTime, tick};
