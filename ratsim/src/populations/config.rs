use super::errors::ConfigError;
use super::Weight;

use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;

/// Configuration data for a simulation run.
///
/// Fixed for the duration of a run. Weights are
/// in grams.
///
/// # Note
/// The population size is forced to an even number
/// before a run starts (see [`even_population_size`]),
/// and every organism not counted in [`retained_males`]
/// is retained as a female, so the retained counts
/// always add up to the population size.
///
/// [`even_population_size`]: SimulationConfig::even_population_size
/// [`retained_males`]: SimulationConfig::retained_males
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Number of organisms in the initial population.
    pub population_size: NonZeroUsize,
    /// Number of upper-tier members retained for
    /// breeding each generation.
    pub retained_males: NonZeroUsize,
    /// Target mean weight. Fitness is the ratio of the
    /// population mean to this value.
    pub goal: f64,
    /// Lower bound of the initial weight distribution.
    pub initial_min: Weight,
    /// Upper bound of the initial weight distribution.
    pub initial_max: Weight,
    /// Peak of the initial weight distribution.
    pub initial_mode: Weight,
    /// Offspring produced by each breeding pair.
    pub litter_size: NonZeroUsize,
    /// Generations per simulated year, only used
    /// for reporting.
    pub litters_per_year: NonZeroUsize,
    /// Maximum number of generations to run.
    pub generation_limit: NonZeroUsize,
    /// Chance that an offspring mutates.
    pub mutation_probability: f64,
    /// Smallest factor applied to a mutated weight.
    pub mutation_min_multiplier: f64,
    /// Largest factor applied to a mutated weight.
    pub mutation_max_multiplier: f64,
}

impl Default for SimulationConfig {
    /// The classic giant rat setup: twenty rats of
    /// 200-600g trying to average 50kg.
    fn default() -> SimulationConfig {
        SimulationConfig {
            population_size: nonzero(20),
            retained_males: nonzero(4),
            goal: 50_000.0,
            initial_min: 200,
            initial_max: 600,
            initial_mode: 300,
            litter_size: nonzero(8),
            litters_per_year: nonzero(10),
            generation_limit: nonzero(500),
            mutation_probability: 0.01,
            mutation_min_multiplier: 0.5,
            mutation_max_multiplier: 1.2,
        }
    }
}

impl SimulationConfig {
    /// Returns the population size rounded up
    /// to the next even number.
    ///
    /// # Examples
    /// ```
    /// use ratsim::SimulationConfig;
    /// use std::num::NonZeroUsize;
    ///
    /// let config = SimulationConfig {
    ///     population_size: NonZeroUsize::new(21).unwrap(),
    ///     ..SimulationConfig::default()
    /// };
    /// assert_eq!(config.even_population_size(), 22);
    /// ```
    pub fn even_population_size(&self) -> usize {
        let size = self.population_size.get();
        size + (size & 1)
    }

    /// Number of lower-tier members retained for breeding.
    ///
    /// Always at least one for a valid configuration;
    /// saturates at zero for configurations that
    /// [`validate`](SimulationConfig::validate) rejects.
    pub fn retained_females(&self) -> usize {
        self.even_population_size()
            .saturating_sub(self.retained_males.get())
    }

    /// Checks that the parameters describe a runnable simulation.
    ///
    /// # Errors
    /// Returns the first invalid parameter combination found.
    ///
    /// # Examples
    /// ```
    /// use ratsim::{ConfigError, SimulationConfig};
    ///
    /// assert!(SimulationConfig::default().validate().is_ok());
    ///
    /// let config = SimulationConfig {
    ///     initial_mode: 1000,
    ///     ..SimulationConfig::default()
    /// };
    /// assert!(matches!(
    ///     config.validate(),
    ///     Err(ConfigError::ModeOutOfRange { .. })
    /// ));
    /// ```
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.initial_min > self.initial_max {
            return Err(ConfigError::InvertedInitialBounds {
                min: self.initial_min,
                max: self.initial_max,
            });
        }
        if self.initial_mode < self.initial_min || self.initial_mode > self.initial_max {
            return Err(ConfigError::ModeOutOfRange {
                mode: self.initial_mode,
                min: self.initial_min,
                max: self.initial_max,
            });
        }
        if !(self.goal.is_finite() && self.goal > 0.0) {
            return Err(ConfigError::NonPositiveGoal(self.goal));
        }
        if !(0.0..=1.0).contains(&self.mutation_probability) {
            return Err(ConfigError::InvalidProbability(self.mutation_probability));
        }
        let (lo, hi) = (self.mutation_min_multiplier, self.mutation_max_multiplier);
        if !(lo.is_finite() && hi.is_finite()) || lo < 0.0 {
            return Err(ConfigError::InvalidMultiplier { lo, hi });
        }
        if lo >= hi {
            return Err(ConfigError::InvertedMultipliers { lo, hi });
        }
        if self.retained_males.get() >= self.even_population_size() {
            return Err(ConfigError::RetentionExceedsPopulation {
                retained: self.retained_males.get(),
                population: self.even_population_size(),
            });
        }
        Ok(())
    }
}

const fn nonzero(n: usize) -> NonZeroUsize {
    match NonZeroUsize::new(n) {
        Some(n) => n,
        None => panic!("zero passed as a non-zero default"),
    }
}
