//! Error types for game configuration

use thiserror::Error;

/// Configuration errors, detected before a simulation is built
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A dimension or base value that must be strictly positive
    #[error("{field} must be > 0, got {value}")]
    NonPositive { field: &'static str, value: f64 },

    /// A value outside its allowed range
    #[error("{field} must be within {min}..{max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// Field too short to hold a single lane
    #[error("no lanes fit: height {height}, margin {margin}, lane pitch {pitch}")]
    NoLanes { height: f32, margin: f32, pitch: f32 },

    /// Config file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid JSON
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
