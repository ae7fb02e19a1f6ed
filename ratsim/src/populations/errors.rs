use super::Weight;

use thiserror::Error;

/// Invalid parameter combinations, caught before
/// any generation runs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("initial weight bounds are inverted: min {min} > max {max}")]
    InvertedInitialBounds { min: Weight, max: Weight },

    #[error("initial weight mode {mode} lies outside [{min}, {max}]")]
    ModeOutOfRange { mode: Weight, min: Weight, max: Weight },

    #[error("goal must be a positive finite number, got {0}")]
    NonPositiveGoal(f64),

    #[error("mutation probability must lie in [0, 1], got {0}")]
    InvalidProbability(f64),

    #[error("mutation multipliers must be finite and non-negative, got [{lo}, {hi}]")]
    InvalidMultiplier { lo: f64, hi: f64 },

    #[error("mutation multiplier bounds are inverted: {lo} >= {hi}")]
    InvertedMultipliers { lo: f64, hi: f64 },

    #[error("retaining {retained} males from a population of {population} leaves no females")]
    RetentionExceedsPopulation { retained: usize, population: usize },
}

/// Operations that are meaningless on the given population.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PopulationError {
    #[error("attempted to measure an empty population")]
    Empty,
}

/// Anything that can stop a simulation run.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Population(#[from] PopulationError),
}
