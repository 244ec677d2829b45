//! Collision detection and scoring
//!
//! Everything is a sphere-vs-sphere distance test: coins are picked up and
//! obstacles push the player away and cost a point.

use super::state::{Coin, GamePhase, GameState, Obstacle, Player};
use crate::feedback::{Feedback, Tone};
use crate::tuning::Tuning;

/// What one collision pass did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollisionOutcome {
    pub coins_collected: u32,
    pub obstacle_hits: u32,
    /// The last coin was taken during this pass
    pub won: bool,
}

/// Win overlay text
pub fn win_message(time_text: &str) -> String {
    format!("Congratulations! You collected every coin in {time_text}s.")
}

/// Player is close enough to pick up the coin
#[inline]
pub fn touches_coin(player: &Player, coin: &Coin, tuning: &Tuning) -> bool {
    coin.pos.distance(player.pos) < player.radius + tuning.pickup_radius
}

/// Player overlaps the obstacle's approximate bounding sphere
#[inline]
pub fn touches_obstacle(player: &Player, obstacle: &Obstacle, tuning: &Tuning) -> bool {
    obstacle.pos.distance(player.pos) < player.radius + tuning.obstacle_radius(obstacle.size)
}

/// Run pickups and obstacle hits for one frame. Does nothing unless the
/// session is running.
pub fn resolve_collisions(
    state: &mut GameState,
    now_ms: f64,
    feedback: &mut impl Feedback,
) -> CollisionOutcome {
    let mut outcome = CollisionOutcome::default();
    if !state.phase.is_running() {
        return outcome;
    }

    // Reverse order so removal never skips a neighbour
    for i in (0..state.coins.len()).rev() {
        if !touches_coin(&state.player, &state.coins[i], &state.tuning) {
            continue;
        }
        let coin = state.coins.remove(i);
        state.score += 1;
        outcome.coins_collected += 1;
        log::debug!("Coin {} collected, score {}", coin.id, state.score);

        feedback.play_tone(Tone::Pickup);
        let hud = state.hud(now_ms);
        feedback.refresh_hud(&hud);

        if state.coins.is_empty() {
            state.phase = GamePhase::Won;
            outcome.won = true;
            feedback.show_message(&win_message(&hud.time_text()));
            log::info!("All coins collected in {}s", hud.time_text());
        }
    }

    for i in 0..state.obstacles.len() {
        let obstacle = &state.obstacles[i];
        if !touches_obstacle(&state.player, obstacle, &state.tuning) {
            continue;
        }
        let center = obstacle.pos;
        let id = obstacle.id;

        feedback.play_tone(Tone::Hit);
        state.player.knock_back(center, state.tuning.knockback);
        state.score = state.score.saturating_sub(1);
        outcome.obstacle_hits += 1;
        log::debug!("Hit obstacle {}, score {}", id, state.score);

        feedback.refresh_hud(&state.hud(now_ms));
    }

    outcome
}
