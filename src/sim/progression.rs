//! Level progression and difficulty curve
//!
//! `Level(n) -> Level(n + 1)` fires when the player crosses the goal line.
//! Each level-up shrinks the tick interval multiplicatively and lowers the
//! spawn threshold by a fixed step (never below `MIN_SPAWN_THRESHOLD`).

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::PlayerBody;
use crate::config::GameConfig;
use crate::consts::MIN_SPAWN_THRESHOLD;

/// Current difficulty parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProgressionState {
    /// 1-based level
    pub level: u32,
    /// Seconds between frames; not floored here, callers clamp if needed
    pub tick_interval: f64,
    /// Spawn chance per tick is 1 / spawn_threshold, always >= 1
    pub spawn_threshold: u32,
}

#[derive(Debug, Clone)]
pub struct ProgressionController {
    initial: ProgressionState,
    state: ProgressionState,
    decay: f64,
    threshold_step: u32,
    goal_line: f32,
    player_start: Vec2,
    /// Cleared on level-up, set again once the player is seen below the goal line
    goal_armed: bool,
}

impl ProgressionController {
    pub fn new(config: &GameConfig) -> Self {
        let initial = ProgressionState {
            level: 1,
            tick_interval: config.tick_interval,
            spawn_threshold: config.spawn_threshold.max(MIN_SPAWN_THRESHOLD),
        };
        Self {
            initial,
            state: initial,
            decay: config.difficulty_decay,
            threshold_step: config.spawn_threshold_step,
            goal_line: config.goal_line(),
            player_start: config.player_start,
            goal_armed: true,
        }
    }

    pub fn state(&self) -> &ProgressionState {
        &self.state
    }

    pub fn level(&self) -> u32 {
        self.state.level
    }

    pub fn tick_interval(&self) -> f64 {
        self.state.tick_interval
    }

    pub fn spawn_threshold(&self) -> u32 {
        self.state.spawn_threshold
    }

    /// Goal predicate: player's forward coordinate is past the goal line
    pub fn player_reached_goal(&self, player: Vec2) -> bool {
        player.y > self.goal_line
    }

    /// Fire a level-up if the player crossed the goal line
    ///
    /// On level-up the player is sent back to the start coordinate and the
    /// new level is returned.
    pub fn check_goal<P: PlayerBody + ?Sized>(&mut self, player: &mut P) -> Option<u32> {
        if !self.player_reached_goal(player.position()) {
            self.goal_armed = true;
            return None;
        }
        if !self.goal_armed {
            return None;
        }

        self.goal_armed = false;
        let level = self.advance_level();
        player.reposition(self.player_start);
        Some(level)
    }

    /// The `Level(n) -> Level(n + 1)` transition
    pub fn advance_level(&mut self) -> u32 {
        let previous = self.state.spawn_threshold;
        self.state.level += 1;
        self.state.tick_interval *= self.decay;
        self.state.spawn_threshold = previous
            .saturating_sub(self.threshold_step)
            .max(MIN_SPAWN_THRESHOLD);

        if self.state.spawn_threshold == MIN_SPAWN_THRESHOLD && previous > MIN_SPAWN_THRESHOLD {
            log::warn!(
                "Spawn threshold reached its floor of {} at level {}",
                MIN_SPAWN_THRESHOLD,
                self.state.level
            );
        }
        log::info!(
            "Level {}: tick interval {:.3e}s, spawn threshold {}",
            self.state.level,
            self.state.tick_interval,
            self.state.spawn_threshold
        );
        self.state.level
    }

    /// Back to level 1 with the initial difficulty
    pub fn reset(&mut self) {
        self.state = self.initial;
        self.goal_armed = true;
    }
}
