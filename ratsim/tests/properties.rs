//! Property-based tests for the evolutionary operators.

use proptest::prelude::*;
use rand::seq::SliceRandom;
use ratsim::{breed, mutate, select, MutationBounds, Population, SimulationRng};

proptest! {
    #[test]
    fn populate_stays_in_bounds(
        seed in any::<u64>(),
        size in 0usize..200,
        min in 0u64..10_000,
        span in 0u64..10_000,
        mode_offset in 0.0f64..=1.0,
    ) {
        let max = min + span;
        let mode = min + (span as f64 * mode_offset) as u64;
        let mut rng = SimulationRng::seeded(seed);
        let population = Population::populate(size, min, max, mode, &mut rng).unwrap();

        prop_assert_eq!(population.len(), size);
        for w in population.weights() {
            prop_assert!(*w >= min && *w <= max);
        }
    }

    #[test]
    fn fitness_is_mean_over_goal(
        weights in prop::collection::vec(0u64..1_000_000, 1..100),
        goal in 1.0f64..1e6,
    ) {
        let population = Population::from(weights.clone());
        let mean = weights.iter().sum::<u64>() as f64 / weights.len() as f64;
        let fitness = population.fitness(goal).unwrap();

        prop_assert!((fitness - mean / goal).abs() <= 1e-9 * (mean / goal).max(1.0));
        prop_assert_eq!(population.fitness(goal), population.fitness(goal));
    }

    #[test]
    fn selection_only_returns_members(
        weights in prop::collection::vec(0u64..1000, 2..60),
        males in 0usize..40,
        females in 0usize..40,
    ) {
        let population = Population::from(weights.clone());
        let selection = select(&population, males, females);
        let half = weights.len() / 2;
        let upper = weights.len() - half;

        prop_assert_eq!(selection.males.len(), males.min(upper));
        prop_assert_eq!(selection.females.len(), females.min(half));
        prop_assert_eq!(selection.is_degenerate(), males > upper || females > half);

        let mut pool = weights;
        for w in selection.survivors() {
            let i = pool.iter().position(|&p| p == w);
            prop_assert!(i.is_some(), "{} was not in the population", w);
            pool.swap_remove(i.unwrap());
        }
    }

    #[test]
    fn offspring_lie_between_their_own_parents(
        seed in any::<u64>(),
        males in prop::collection::vec(0u64..10_000, 0..15),
        females in prop::collection::vec(0u64..10_000, 0..15),
        litter_size in 1usize..10,
    ) {
        let mut rng = SimulationRng::seeded(seed);
        let mut replay = rng.clone();
        let (mut m, mut f) = (males.clone(), females.clone());
        m.shuffle(&mut replay);
        f.shuffle(&mut replay);

        let children = breed(&males, &females, litter_size, &mut rng);
        for (i, litter) in children.chunks(litter_size).enumerate() {
            let (lo, hi) = (m[i].min(f[i]), m[i].max(f[i]));
            for child in litter {
                prop_assert!(*child >= lo && *child <= hi);
            }
        }
    }

    #[test]
    fn unequal_groups_pair_up_to_the_smaller(
        seed in any::<u64>(),
        males in prop::collection::vec(0u64..5000, 0..15),
        females in prop::collection::vec(0u64..5000, 0..15),
        litter_size in 1usize..10,
    ) {
        let mut rng = SimulationRng::seeded(seed);
        let children = breed(&males, &females, litter_size, &mut rng);
        prop_assert_eq!(children.len(), litter_size * males.len().min(females.len()));
    }

    #[test]
    fn certain_mutation_scales_within_bounds(
        seed in any::<u64>(),
        children in prop::collection::vec(0u64..100_000, 0..50),
        lo in 0.0f64..2.0,
        width in 0.01f64..2.0,
    ) {
        let bounds = MutationBounds {
            probability: 1.0,
            min_multiplier: lo,
            max_multiplier: lo + width,
        };
        let mut rng = SimulationRng::seeded(seed);
        let mutated = mutate(children.clone(), &bounds, &mut rng);

        prop_assert_eq!(mutated.len(), children.len());
        for (before, after) in children.iter().zip(&mutated) {
            let smallest = (*before as f64 * bounds.min_multiplier).round() as u64;
            let largest = (*before as f64 * bounds.max_multiplier).round() as u64;
            prop_assert!(*after >= smallest && *after <= largest);
        }
    }

    #[test]
    fn no_mutation_is_identity(
        seed in any::<u64>(),
        children in prop::collection::vec(any::<u64>(), 0..50),
    ) {
        let bounds = MutationBounds {
            probability: 0.0,
            min_multiplier: 0.5,
            max_multiplier: 1.2,
        };
        let mut rng = SimulationRng::seeded(seed);
        prop_assert_eq!(mutate(children.clone(), &bounds, &mut rng), children);
    }
}
