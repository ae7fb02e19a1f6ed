//! A toy generational genetic algorithm: breeding a population
//! of rats toward a target mean weight.
//!
//! Each generation the population is ranked and split into two
//! selection tiers, the heaviest members of each tier are kept
//! as breeders, random cross-tier pairs produce litters with
//! weights between their parents', and a few offspring mutate.
//! The run stops when the mean weight reaches the goal or the
//! generation limit is hit.
//!
//! This is an educational demonstration of selection, crossover
//! and mutation, not a population-genetics model.
//!
//! # Example usage
//! ```
//! use ratsim::{RunState, Simulation, SimulationConfig};
//! use std::num::NonZeroUsize;
//!
//! let config = SimulationConfig {
//!     retained_males: NonZeroUsize::new(4).unwrap(),
//!     mutation_probability: 0.05,
//!     ..SimulationConfig::default()
//! };
//!
//! // Seeding the generator makes the run replayable.
//! let simulation = Simulation::seeded(config, 2024).unwrap();
//! let summary = simulation.run().unwrap();
//!
//! match summary.state {
//!     RunState::Converged => println!("Goal reached in {} years", summary.years),
//!     _ => println!("Gave up after {} generations", summary.generations),
//! }
//! assert!(summary.mean_weights.iter().all(|&w| w > 0));
//! ```

mod populations;
mod rng;

pub use populations::*;
pub use rng::SimulationRng;
