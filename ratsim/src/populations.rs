//! A Population is a collection of organism weights.
//! It is evolved generation by generation by ranking
//! the organisms, breeding the best of each selection
//! tier, and mutating their offspring.
mod breeding;
mod config;
mod errors;
pub mod logging;
mod mutation;
mod selection;
mod simulation;

pub use breeding::breed;
pub use config::SimulationConfig;
pub use errors::{ConfigError, PopulationError, SimulationError};
pub use mutation::{mutate, MutationBounds};
pub use selection::{select, Selection};
pub use simulation::{GenerationObserver, RunState, RunSummary, Simulation};

use crate::SimulationRng;
use logging::Stats;

use rand::Rng;
use rand_distr::{Distribution, Triangular};
use serde::{Deserialize, Serialize};

/// The single trait carried by every organism.
pub type Weight = u64;

/// One generation's worth of organisms.
///
/// Organisms have no identity beyond their weight,
/// so a population is just the multiset of weights.
/// Order is irrelevant to every operation on it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Population {
    weights: Vec<Weight>,
}

impl Population {
    /// Creates `size` organisms with weights drawn from
    /// a triangular distribution over `[min, max]`
    /// peaking at `mode`, rounded down to whole grams.
    ///
    /// # Errors
    /// Returns an error if `min > max` or `mode` lies
    /// outside `[min, max]`.
    ///
    /// # Examples
    /// ```
    /// use ratsim::{Population, SimulationRng};
    ///
    /// let mut rng = SimulationRng::seeded(1);
    /// let population = Population::populate(20, 200, 600, 300, &mut rng).unwrap();
    ///
    /// assert_eq!(population.len(), 20);
    /// assert!(population.weights().iter().all(|w| (200..=600).contains(w)));
    /// ```
    pub fn populate<R>(
        size: usize,
        min: Weight,
        max: Weight,
        mode: Weight,
        rng: &mut SimulationRng<R>,
    ) -> Result<Population, ConfigError>
    where
        R: Rng,
    {
        if min > max {
            return Err(ConfigError::InvertedInitialBounds { min, max });
        }
        let mode_error = ConfigError::ModeOutOfRange { mode, min, max };
        if mode < min || mode > max {
            return Err(mode_error);
        }
        let (lo, hi) = (min as f64, max as f64);
        let distribution = Triangular::new(lo, hi, mode as f64).map_err(|_| mode_error)?;
        let weights = (0..size)
            .map(|_| distribution.sample(rng).clamp(lo, hi).floor() as Weight)
            .collect();
        Ok(Population { weights })
    }

    /// Returns the weights of all organisms.
    pub fn weights(&self) -> &[Weight] {
        &self.weights
    }

    /// Returns the number of organisms.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Returns whether the population has no organisms.
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Returns the arithmetic mean weight.
    ///
    /// # Errors
    /// Returns [`PopulationError::Empty`] for an empty population.
    pub fn mean_weight(&self) -> Result<f64, PopulationError> {
        let (sum, len) = self.sum_and_len()?;
        Ok(sum as f64 / len as f64)
    }

    /// Returns the mean weight with the fractional part dropped,
    /// as recorded in the generation log.
    ///
    /// # Errors
    /// Returns [`PopulationError::Empty`] for an empty population.
    pub fn truncated_mean_weight(&self) -> Result<Weight, PopulationError> {
        let (sum, len) = self.sum_and_len()?;
        Ok((sum / len as u128) as Weight)
    }

    /// Measures the population's fitness as the ratio of its
    /// mean weight to `goal`. A fitness of 1.0 or more means
    /// the goal has been reached.
    ///
    /// `goal` is expected to be positive, which
    /// [`SimulationConfig::validate`] guarantees.
    ///
    /// # Errors
    /// Returns [`PopulationError::Empty`] for an empty population.
    ///
    /// # Examples
    /// ```
    /// use ratsim::{Population, PopulationError};
    ///
    /// let population = Population::from(vec![100, 200, 300]);
    /// assert_eq!(population.fitness(400.0), Ok(0.5));
    ///
    /// let empty = Population::default();
    /// assert_eq!(empty.fitness(400.0), Err(PopulationError::Empty));
    /// ```
    pub fn fitness(&self, goal: f64) -> Result<f64, PopulationError> {
        Ok(self.mean_weight()? / goal)
    }

    /// Returns summary statistics over the weights,
    /// or `None` if the population is empty.
    pub fn stats(&self) -> Option<Stats> {
        if self.is_empty() {
            return None;
        }
        Some(Stats::from(self.weights.iter().map(|&w| w as f64)))
    }

    fn sum_and_len(&self) -> Result<(u128, usize), PopulationError> {
        if self.weights.is_empty() {
            return Err(PopulationError::Empty);
        }
        let sum = self.weights.iter().map(|&w| w as u128).sum();
        Ok((sum, self.weights.len()))
    }
}

impl From<Vec<Weight>> for Population {
    fn from(weights: Vec<Weight>) -> Population {
        Population { weights }
    }
}

impl FromIterator<Weight> for Population {
    fn from_iter<I: IntoIterator<Item = Weight>>(iter: I) -> Population {
        Population {
            weights: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn populate_respects_bounds() {
        let mut rng = SimulationRng::seeded(3);
        let population = Population::populate(1000, 200, 600, 300, &mut rng).unwrap();
        assert_eq!(population.len(), 1000);
        assert!(population.weights().iter().all(|w| (200..=600).contains(w)));
    }

    #[test]
    fn populate_degenerate_range() {
        let mut rng = SimulationRng::seeded(3);
        let population = Population::populate(10, 250, 250, 250, &mut rng).unwrap();
        assert!(population.weights().iter().all(|&w| w == 250));
    }

    #[test]
    fn populate_rejects_bad_parameters() {
        let mut rng = SimulationRng::seeded(3);
        assert_eq!(
            Population::populate(10, 600, 200, 300, &mut rng),
            Err(ConfigError::InvertedInitialBounds { min: 600, max: 200 })
        );
        assert_eq!(
            Population::populate(10, 200, 600, 100, &mut rng),
            Err(ConfigError::ModeOutOfRange {
                mode: 100,
                min: 200,
                max: 600
            })
        );
    }

    #[test]
    fn mean_and_fitness() {
        let population = Population::from(vec![1, 2, 3, 4]);
        assert_eq!(population.mean_weight(), Ok(2.5));
        assert_eq!(population.truncated_mean_weight(), Ok(2));
        assert_eq!(population.fitness(5.0), Ok(0.5));
        // No hidden state: measuring twice gives the same answer.
        assert_eq!(population.fitness(5.0), population.fitness(5.0));
    }

    #[test]
    fn empty_population_cannot_be_measured() {
        let population = Population::default();
        assert_eq!(population.mean_weight(), Err(PopulationError::Empty));
        assert_eq!(population.truncated_mean_weight(), Err(PopulationError::Empty));
        assert_eq!(population.fitness(1.0), Err(PopulationError::Empty));
        assert!(population.stats().is_none());
    }

    #[test]
    fn huge_weights_do_not_overflow_the_mean() {
        let population = Population::from(vec![Weight::MAX, Weight::MAX]);
        assert_eq!(population.truncated_mean_weight(), Ok(Weight::MAX));
    }
}
