use super::{SimulationConfig, Weight};
use crate::SimulationRng;

use rand::Rng;

/// How likely and how drastic a mutation is.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MutationBounds {
    /// Chance that a given offspring mutates.
    pub probability: f64,
    /// Smallest factor a mutated weight is scaled by.
    pub min_multiplier: f64,
    /// Largest factor a mutated weight is scaled by.
    pub max_multiplier: f64,
}

impl From<&SimulationConfig> for MutationBounds {
    fn from(config: &SimulationConfig) -> MutationBounds {
        MutationBounds {
            probability: config.mutation_probability,
            min_multiplier: config.mutation_min_multiplier,
            max_multiplier: config.mutation_max_multiplier,
        }
    }
}

/// Randomly rescales offspring weights.
///
/// Each weight independently has `bounds.probability`
/// chance of being multiplied by a factor drawn uniformly
/// from `[min_multiplier, max_multiplier]` and rounded to
/// the nearest gram, halves rounding away from zero.
///
/// # Panics
/// Panics if a mutation triggers while `min_multiplier` is
/// greater than `max_multiplier`.
/// [`SimulationConfig::validate`] rejects such bounds.
///
/// # Examples
/// ```
/// use ratsim::{mutate, MutationBounds, SimulationRng};
///
/// let mut rng = SimulationRng::seeded(9);
/// let never = MutationBounds {
///     probability: 0.0,
///     min_multiplier: 0.5,
///     max_multiplier: 1.2,
/// };
///
/// assert_eq!(mutate(vec![300, 400], &never, &mut rng), vec![300, 400]);
/// ```
pub fn mutate<R>(
    mut children: Vec<Weight>,
    bounds: &MutationBounds,
    rng: &mut SimulationRng<R>,
) -> Vec<Weight>
where
    R: Rng,
{
    for child in &mut children {
        if rng.chance(bounds.probability) {
            let factor = rng.gen_range(bounds.min_multiplier..=bounds.max_multiplier);
            *child = (*child as f64 * factor).round().max(0.0) as Weight;
        }
    }
    children
}
