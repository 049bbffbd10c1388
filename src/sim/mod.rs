//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One step per frame, no internal timers
//! - Seeded RNG only
//! - Stable iteration order (by obstacle ID)
//! - No rendering or input dependencies

pub mod collision;
pub mod progression;
pub mod registry;
pub mod state;
pub mod tick;

pub use collision::CollisionDetector;
pub use progression::{ProgressionController, ProgressionState};
pub use registry::ObstacleRegistry;
pub use state::{
    Direction, Facing, GameEvent, GamePhase, Obstacle, ObstacleColor, ObstacleId, Player,
    PlayerBody, RemovalReason,
};
pub use tick::{Simulation, TickOutcome};
