//! Configuration errors
//!
//! The simulation itself never fails; only invalid settings or an arena too
//! small for the configured bodies are reported to the caller.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or validating simulation settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A population needs at least one body.
    #[error("body count must be at least 1")]
    EmptyPopulation,
    /// Radius bounds must satisfy `0 < min <= max`.
    #[error("radius range must satisfy 0 < min <= max, got [{min}, {max}]")]
    InvalidRadiusRange { min: f64, max: f64 },
    /// Speed bounds must satisfy `0 <= min <= max`.
    #[error("speed range must satisfy 0 <= min <= max, got [{min}, {max}]")]
    InvalidSpeedRange { min: f64, max: f64 },
    /// Restitution outside `[0, 1]`.
    #[error("restitution coefficient must lie in [0, 1], got {0}")]
    InvalidRestitution(f64),
    /// Integration needs at least one sub-step.
    #[error("sub-steps per tick must be at least 1")]
    ZeroSubSteps,
    /// Pairwise resolution needs at least one pass.
    #[error("resolution iterations per tick must be at least 1")]
    ZeroIterations,
    /// Epoch length must be positive and finite.
    #[error("epoch duration must be positive and finite, got {0} ms")]
    InvalidEpochDuration(f64),
    /// Flash decay outside `[0, 1]`.
    #[error("flash decay per tick must lie in [0, 1], got {0}")]
    InvalidFlashDecay(f64),
    /// An injected body has a radius that cannot carry mass.
    #[error("body {id} has non-positive or non-finite radius {radius}")]
    InvalidBody { id: u64, radius: f64 },
    /// No id is left to hand out to a new body.
    #[error("body id space exhausted")]
    IdsExhausted,
    /// The arena cannot hold a body of the largest configured radius.
    #[error("arena {width}x{height} cannot contain a body of radius {radius}")]
    ArenaTooSmall { width: f64, height: f64, radius: f64 },
    /// Settings JSON failed to parse.
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
    /// Settings file could not be read.
    #[error("failed to read settings file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
