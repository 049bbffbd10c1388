//! Live obstacle set
//!
//! The registry is the only place obstacles are created or removed. Obstacles
//! are kept in id order, which is also spawn order, so iteration is stable
//! for a given random sequence.

use glam::Vec2;
use rand::Rng;

use super::state::{Direction, Obstacle, ObstacleColor, ObstacleId};
use crate::config::GameConfig;

#[derive(Debug, Clone)]
pub struct ObstacleRegistry {
    obstacles: Vec<Obstacle>,
    lane_count: usize,
    /// Center y of lane 0 (nearest the bottom)
    lane_base: f32,
    lane_pitch: f32,
    half_width: f32,
    obstacle_width: f32,
    obstacle_length: f32,
    next_id: u32,
}

impl ObstacleRegistry {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            obstacles: Vec::new(),
            lane_count: config.lane_count(),
            lane_base: config.lane_y(0),
            lane_pitch: config.lane_pitch(),
            half_width: config.half_width(),
            obstacle_width: config.obstacle_width,
            obstacle_length: config.obstacle_length,
            next_id: 1,
        }
    }

    fn next_obstacle_id(&mut self) -> ObstacleId {
        let id = ObstacleId(self.next_id);
        self.next_id += 1;
        id
    }

    pub fn lane_count(&self) -> usize {
        self.lane_count
    }

    /// Center y of lane `index`
    #[inline]
    pub fn lane_y(&self, index: usize) -> f32 {
        self.lane_base + index as f32 * self.lane_pitch
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Obstacle> {
        self.obstacles.iter()
    }

    pub fn get(&self, id: ObstacleId) -> Option<&Obstacle> {
        self.obstacles.iter().find(|o| o.id == id)
    }

    fn spawn<R: Rng + ?Sized>(&mut self, x: f32, direction: Direction, rng: &mut R) -> Obstacle {
        let color = ObstacleColor::ALL[rng.random_range(0..ObstacleColor::ALL.len())];
        // At least one lane for any validated config
        let lane = rng.random_range(0..self.lane_count.max(1));
        let id = self.next_obstacle_id();
        let obstacle = Obstacle::new(
            id,
            Vec2::new(x, self.lane_y(lane)),
            direction,
            self.obstacle_width,
            self.obstacle_length,
            color,
            lane,
        );
        self.obstacles.push(obstacle.clone());
        obstacle
    }

    /// Spawn one obstacle at each side edge, each in an independently drawn lane
    ///
    /// The right-edge (leftward) obstacle is created first. Returns copies of
    /// both as spawned.
    pub fn spawn_pair<R: Rng + ?Sized>(&mut self, rng: &mut R) -> [Obstacle; 2] {
        let from_right = self.spawn(self.half_width, Direction::Leftward, rng);
        let from_left = self.spawn(-self.half_width, Direction::Rightward, rng);
        log::debug!(
            "Spawned obstacles {:?} (lane {}) and {:?} (lane {})",
            from_right.id,
            from_right.lane,
            from_left.id,
            from_left.lane
        );
        [from_right, from_left]
    }

    /// Move every obstacle by a random whole step in `[0, speed_cap)` and
    /// remove those that left the field
    ///
    /// Returns the removed obstacles in iteration order. A zero cap moves nothing.
    pub fn advance_all<R: Rng + ?Sized>(&mut self, speed_cap: u32, rng: &mut R) -> Vec<Obstacle> {
        for obstacle in &mut self.obstacles {
            let distance = if speed_cap == 0 {
                0
            } else {
                rng.random_range(0..speed_cap)
            };
            obstacle.advance(distance as f32);
        }

        let half_width = self.half_width;
        let (gone, live): (Vec<_>, Vec<_>) = std::mem::take(&mut self.obstacles)
            .into_iter()
            .partition(|o| o.is_off_field(half_width));
        self.obstacles = live;
        gone
    }

    /// Remove one obstacle; `None` if it was already gone
    pub fn despawn(&mut self, id: ObstacleId) -> Option<Obstacle> {
        let index = self.obstacles.iter().position(|o| o.id == id)?;
        Some(self.obstacles.remove(index))
    }

    /// Remove the first `N / 2` obstacles (game-over effect)
    pub fn hide_half(&mut self) -> Vec<Obstacle> {
        let count = self.obstacles.len() / 2;
        self.obstacles.drain(..count).collect()
    }

    /// Remove everything
    pub fn clear_all(&mut self) -> Vec<Obstacle> {
        std::mem::take(&mut self.obstacles)
    }
}
