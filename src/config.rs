//! Field geometry and difficulty tuning
//!
//! One immutable `GameConfig` is handed to the simulation at construction.
//! It can also be loaded from a JSON file; missing keys keep their defaults.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Field ===
    pub field_width: f32,
    pub field_height: f32,

    // === Player ===
    /// Start coordinate (bottom center)
    pub player_start: Vec2,
    /// Distance covered by one move command
    pub player_step: f32,
    /// Player footprint used by the collision radii
    pub player_size: f32,

    // === Obstacles ===
    /// Vertical extent of an obstacle
    pub obstacle_width: f32,
    /// Horizontal extent of an obstacle
    pub obstacle_length: f32,
    pub lane_gap: f32,
    pub lane_margin: f32,
    /// Exclusive upper bound of the per-tick movement draw
    pub speed_cap: u32,

    // === Difficulty ===
    /// Seconds between frames at level 1
    pub tick_interval: f64,
    /// Tick interval multiplier per level-up, in (0, 1)
    pub difficulty_decay: f64,
    /// Spawn chance per tick is 1 / spawn_threshold
    pub spawn_threshold: u32,
    pub spawn_threshold_step: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,

            player_start: Vec2::new(PLAYER_START.0, PLAYER_START.1),
            player_step: PLAYER_STEP,
            player_size: PLAYER_SIZE,

            obstacle_width: OBSTACLE_WIDTH,
            obstacle_length: OBSTACLE_LENGTH,
            lane_gap: LANE_GAP,
            lane_margin: LANE_MARGIN,
            speed_cap: OBSTACLE_SPEED_CAP,

            tick_interval: BASE_TICK_INTERVAL,
            difficulty_decay: DIFFICULTY_DECAY,
            spawn_threshold: BASE_SPAWN_THRESHOLD,
            spawn_threshold_step: SPAWN_THRESHOLD_STEP,
        }
    }
}

impl GameConfig {
    /// Parse a config from JSON and validate it
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Check that every dimension and base value is usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("field_width", self.field_width.into())?;
        positive("field_height", self.field_height.into())?;
        positive("player_size", self.player_size.into())?;
        positive("obstacle_width", self.obstacle_width.into())?;
        positive("obstacle_length", self.obstacle_length.into())?;
        positive("speed_cap", self.speed_cap.into())?;
        positive("tick_interval", self.tick_interval)?;
        positive("spawn_threshold", self.spawn_threshold.into())?;

        non_negative("player_step", self.player_step.into())?;
        non_negative("lane_gap", self.lane_gap.into())?;
        non_negative("lane_margin", self.lane_margin.into())?;
        finite("player_start.x", self.player_start.x.into())?;
        finite("player_start.y", self.player_start.y.into())?;

        let decay = self.difficulty_decay;
        if decay.is_nan() || decay <= 0.0 || decay >= 1.0 {
            return Err(out_of_range("difficulty_decay", decay, 0.0, 1.0));
        }
        if self.lane_count() == 0 {
            return Err(ConfigError::NoLanes {
                height: self.field_height,
                margin: self.lane_margin,
                pitch: self.lane_pitch(),
            });
        }
        Ok(())
    }

    /// Vertical distance between neighbouring lanes
    #[inline]
    pub fn lane_pitch(&self) -> f32 {
        self.obstacle_width + self.lane_gap
    }

    /// Number of non-overlapping lanes spanning the field height
    pub fn lane_count(&self) -> usize {
        let span = self.field_height - self.lane_margin;
        if span <= 0.0 {
            return 0;
        }
        (span / self.lane_pitch()).floor() as usize
    }

    /// Center y of lane `index` (lane 0 is nearest the bottom)
    #[inline]
    pub fn lane_y(&self, index: usize) -> f32 {
        -self.field_height / 2.0 + self.lane_margin + index as f32 * self.lane_pitch()
    }

    #[inline]
    pub fn half_width(&self) -> f32 {
        self.field_width / 2.0
    }

    /// The goal line sits at the top edge of the field
    #[inline]
    pub fn goal_line(&self) -> f32 {
        self.field_height / 2.0
    }
}

/// Rejects NaN and infinities
fn finite(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(out_of_range(field, value, f64::MIN, f64::MAX))
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    finite(field, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { field, value })
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    finite(field, value)?;
    if value >= 0.0 {
        Ok(())
    } else {
        Err(out_of_range(field, value, 0.0, f64::MAX))
    }
}

fn out_of_range(field: &'static str, value: f64, min: f64, max: f64) -> ConfigError {
    ConfigError::OutOfRange {
        field,
        value,
        min,
        max,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_lanes() {
        let config = GameConfig::default();
        // (500 - 45) / 35 = 13
        assert_eq!(config.lane_count(), 13);
        assert_eq!(config.lane_y(0), -205.0);
        assert_eq!(config.lane_y(12), 215.0);
        assert!(config.lane_y(config.lane_count() - 1) < config.field_height / 2.0);
    }

    #[test]
    fn test_rejects_non_positive_dimensions() {
        let config = GameConfig {
            field_width: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositive {
                field: "field_width",
                ..
            })
        ));

        let config = GameConfig {
            field_height: -10.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositive {
                field: "field_height",
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_zero_base_values() {
        let config = GameConfig {
            speed_cap: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = GameConfig {
            spawn_threshold: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = GameConfig {
            tick_interval: 0.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_bad_decay() {
        for decay in [0.0, 1.0, 1.5, f64::NAN] {
            let config = GameConfig {
                difficulty_decay: decay,
                ..Default::default()
            };
            assert!(matches!(
                config.validate(),
                Err(ConfigError::OutOfRange {
                    field: "difficulty_decay",
                    ..
                })
            ));
        }
    }

    #[test]
    fn test_rejects_non_finite_values() {
        let cases = [
            GameConfig {
                field_height: f32::INFINITY,
                ..Default::default()
            },
            GameConfig {
                field_width: f32::INFINITY,
                ..Default::default()
            },
            GameConfig {
                obstacle_length: f32::NAN,
                ..Default::default()
            },
            GameConfig {
                lane_gap: f32::INFINITY,
                ..Default::default()
            },
            GameConfig {
                player_start: Vec2::new(0.0, f32::NEG_INFINITY),
                ..Default::default()
            },
            GameConfig {
                tick_interval: f64::INFINITY,
                ..Default::default()
            },
        ];
        for config in cases {
            assert!(
                matches!(config.validate(), Err(ConfigError::OutOfRange { .. })),
                "accepted {config:?}"
            );
        }
    }

    #[test]
    fn test_rejects_field_without_lanes() {
        let config = GameConfig {
            field_height: 60.0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::NoLanes { .. })));
    }

    #[test]
    fn test_json_partial_override() {
        let config = GameConfig::from_json_str(r#"{ "spawn_threshold": 50, "speed_cap": 4 }"#)
            .expect("valid config");
        assert_eq!(config.spawn_threshold, 50);
        assert_eq!(config.speed_cap, 4);
        assert_eq!(config.field_width, FIELD_WIDTH);
    }

    #[test]
    fn test_json_invalid() {
        assert!(matches!(
            GameConfig::from_json_str("{ not json"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            GameConfig::from_json_str(r#"{ "field_width": -1.0 }"#),
            Err(ConfigError::NonPositive { .. })
        ));
    }

    #[test]
    fn test_load_missing_file() {
        assert!(matches!(
            GameConfig::load("/nonexistent/crossing.json"),
            Err(ConfigError::Io(_))
        ));
    }
}
