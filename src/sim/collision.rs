//! Player vs obstacle hit test
//!
//! Uses center-to-center distance against two radii: one from the
//! obstacle's width (approach from above/below) and one from its length
//! (approach from the side). A hit on either radius counts. This is not a
//! rectangle intersection; game balance is tuned around it.

use glam::Vec2;

use super::registry::ObstacleRegistry;
use super::state::Obstacle;

/// Hit test configured with the player's footprint
#[derive(Debug, Clone, Copy)]
pub struct CollisionDetector {
    /// Half of the player-size constant
    player_half: f32,
}

impl CollisionDetector {
    pub fn new(player_size: f32) -> Self {
        Self {
            player_half: player_size / 2.0,
        }
    }

    /// (vertical, horizontal) hit radii for an obstacle
    #[inline]
    pub fn radii(&self, obstacle: &Obstacle) -> (f32, f32) {
        (
            obstacle.width / 2.0 + self.player_half,
            obstacle.length / 2.0 + self.player_half,
        )
    }

    /// Whether the player at `player` touches this one obstacle
    pub fn hits(&self, player: Vec2, obstacle: &Obstacle) -> bool {
        let distance = obstacle.pos.distance(player);
        let (from_below, from_side) = self.radii(obstacle);
        distance < from_below || distance < from_side
    }

    /// True on the first live obstacle touching the player
    pub fn check(&self, player: Vec2, registry: &ObstacleRegistry) -> bool {
        registry.iter().any(|o| self.hits(player, o))
    }
}
