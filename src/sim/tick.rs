//! One simulation step per rendered frame
//!
//! `Simulation::tick` sequences: maybe-spawn, advance all, collision check,
//! goal check. Presentation changes are queued as `GameEvent`s and drained
//! by the caller.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::collision::CollisionDetector;
use super::progression::{ProgressionController, ProgressionState};
use super::registry::ObstacleRegistry;
use super::state::{GameEvent, GamePhase, Obstacle, PlayerBody, RemovalReason};
use crate::config::GameConfig;
use crate::error::ConfigError;

/// Result of a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    LevelUp(u32),
    GameOver(u32),
}

/// The simulation core
#[derive(Debug, Clone)]
pub struct Simulation {
    config: GameConfig,
    rng: Pcg32,
    registry: ObstacleRegistry,
    detector: CollisionDetector,
    progression: ProgressionController,
    phase: GamePhase,
    time_ticks: u64,
    events: Vec<GameEvent>,
}

impl Simulation {
    /// Build a simulation with a seeded RNG
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(config, Pcg32::seed_from_u64(seed))
    }

    /// Build a simulation around an explicit RNG
    pub fn with_rng(config: GameConfig, rng: Pcg32) -> Result<Self, ConfigError> {
        config.validate()?;
        let registry = ObstacleRegistry::new(&config);
        let detector = CollisionDetector::new(config.player_size);
        let progression = ProgressionController::new(&config);
        log::info!(
            "Simulation ready: {}x{} field, {} lanes",
            config.field_width,
            config.field_height,
            registry.lane_count()
        );

        Ok(Self {
            config,
            rng,
            registry,
            detector,
            progression,
            phase: GamePhase::Playing,
            time_ticks: 0,
            events: vec![GameEvent::LevelDisplay { level: 1 }],
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn registry(&self) -> &ObstacleRegistry {
        &self.registry
    }

    pub fn progression(&self) -> &ProgressionState {
        self.progression.state()
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn time_ticks(&self) -> u64 {
        self.time_ticks
    }

    /// Take all queued presentation events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    fn push_removed(&mut self, removed: Vec<Obstacle>, reason: RemovalReason) {
        for obstacle in removed {
            log::debug!("Obstacle {:?} removed ({:?})", obstacle.id, reason);
            self.events.push(GameEvent::ObstacleRemoved {
                id: obstacle.id,
                reason,
            });
        }
    }

    /// Advance the simulation by one frame
    pub fn tick<P: PlayerBody + ?Sized>(&mut self, player: &mut P) -> TickOutcome {
        if self.phase == GamePhase::GameOver {
            return TickOutcome::GameOver(self.progression.level());
        }
        self.time_ticks += 1;

        // Spawn with probability 1 / threshold
        let threshold = self.progression.spawn_threshold();
        if self.rng.random_range(1..=threshold) == 1 {
            for o in self.registry.spawn_pair(&mut self.rng) {
                self.events.push(GameEvent::ObstacleSpawned {
                    id: o.id,
                    pos: o.pos,
                    direction: o.direction(),
                    color: o.color,
                });
            }
        }

        let gone = self
            .registry
            .advance_all(self.config.speed_cap, &mut self.rng);
        self.push_removed(gone, RemovalReason::OffField);

        if self.detector.check(player.position(), &self.registry) {
            let final_level = self.progression.level();
            log::info!(
                "Game over at level {} after {} ticks",
                final_level,
                self.time_ticks
            );
            let hidden = self.registry.hide_half();
            self.push_removed(hidden, RemovalReason::Hidden);
            self.events.push(GameEvent::GameOverDisplay { final_level });
            self.phase = GamePhase::GameOver;
            return TickOutcome::GameOver(final_level);
        }

        match self.progression.check_goal(player) {
            Some(level) => {
                self.events.push(GameEvent::PlayerRepositioned {
                    pos: self.config.player_start,
                });
                self.events.push(GameEvent::LevelDisplay { level });
                TickOutcome::LevelUp(level)
            }
            None => TickOutcome::Continue,
        }
    }

    /// Start a new run: level 1, no obstacles, player at the start
    ///
    /// The RNG keeps its position so consecutive runs differ.
    pub fn reset<P: PlayerBody + ?Sized>(&mut self, player: &mut P) {
        let cleared = self.registry.clear_all();
        self.push_removed(cleared, RemovalReason::Cleared);
        self.progression.reset();
        player.reposition(self.config.player_start);
        self.phase = GamePhase::Playing;
        self.time_ticks = 0;
        self.events.push(GameEvent::PlayerRepositioned {
            pos: self.config.player_start,
        });
        self.events.push(GameEvent::LevelDisplay { level: 1 });
        log::info!("Game reset");
    }
}
