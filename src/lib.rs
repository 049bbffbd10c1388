//! Crossing - a lane-crossing arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (obstacles, collisions, level progression)
//! - `config`: Field geometry and difficulty tuning
//! - `scoreboard`: Level and game-over text for the presentation layer

pub mod config;
pub mod error;
pub mod scoreboard;
pub mod sim;

pub use config::GameConfig;
pub use error::ConfigError;
pub use scoreboard::Scoreboard;

/// Default game constants
pub mod consts {
    /// Play-field dimensions (origin at the center)
    pub const FIELD_WIDTH: f32 = 500.0;
    pub const FIELD_HEIGHT: f32 = 500.0;

    /// Player defaults - starts at bottom center
    pub const PLAYER_START: (f32, f32) = (0.0, -FIELD_HEIGHT / 2.0 + 20.0);
    pub const PLAYER_STEP: f32 = 20.0;
    pub const PLAYER_SIZE: f32 = 10.0;

    /// Obstacle geometry
    pub const OBSTACLE_WIDTH: f32 = 30.0;
    pub const OBSTACLE_LENGTH: f32 = 40.0;
    /// Vertical gap between lanes
    pub const LANE_GAP: f32 = 5.0;
    /// Distance from the bottom edge to the first lane
    pub const LANE_MARGIN: f32 = 45.0;
    /// Obstacles move by a random whole step in [0, cap) each tick
    pub const OBSTACLE_SPEED_CAP: u32 = 2;

    /// Seconds between frames at level 1
    pub const BASE_TICK_INTERVAL: f64 = 0.01;
    /// Tick interval multiplier applied per level-up
    pub const DIFFICULTY_DECAY: f64 = 0.85;
    /// Higher value -> obstacles spawn less often
    pub const BASE_SPAWN_THRESHOLD: u32 = 200;
    pub const SPAWN_THRESHOLD_STEP: u32 = 20;
    pub const MIN_SPAWN_THRESHOLD: u32 = 1;
}
