use super::logging::{EvolutionLogger, GenerationRecord, ReportingLevel};
use super::{
    breed, mutate, select, MutationBounds, Population, PopulationError, SimulationConfig,
    SimulationError, Weight,
};
use crate::SimulationRng;

use rand::rngs::StdRng;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Where a run stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunState {
    /// Below the goal with generations left to breed.
    Running,
    /// Fitness reached 1.0.
    Converged,
    /// The generation limit was hit first.
    Exhausted,
}

/// Receives every generation as soon as it is bred.
pub trait GenerationObserver {
    fn observe(&mut self, record: &GenerationRecord);
}

impl<F> GenerationObserver for F
where
    F: FnMut(&GenerationRecord),
{
    fn observe(&mut self, record: &GenerationRecord) {
        self(record)
    }
}

/// The outcome of a finished run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub state: RunState,
    pub initial_weights: Vec<Weight>,
    pub initial_fitness: f64,
    pub final_fitness: f64,
    /// Truncated mean weight of each bred generation.
    pub mean_weights: Vec<Weight>,
    pub generations: usize,
    /// Generations divided by litters per year, rounded down.
    pub years: usize,
    /// Wall-clock time spent in the breeding loop.
    pub elapsed: Duration,
}

/// A single evolutionary run.
///
/// Owns the configuration, the random generator, the current
/// population and the generation log. Each generation keeps
/// the selected breeders and adds their (possibly mutated)
/// offspring, until the population's fitness reaches 1.0 or
/// the generation limit is hit.
///
/// # Examples
/// ```
/// use ratsim::{RunState, Simulation, SimulationConfig};
///
/// let simulation = Simulation::seeded(SimulationConfig::default(), 42).unwrap();
/// let mut fitnesses = vec![];
/// let summary = simulation
///     .run_with(&mut |record: &ratsim::logging::GenerationRecord| {
///         fitnesses.push(record.fitness)
///     })
///     .unwrap();
///
/// assert_eq!(fitnesses.len(), summary.generations);
/// assert_ne!(summary.state, RunState::Running);
/// ```
#[derive(Debug)]
pub struct Simulation<R: Rng = StdRng> {
    config: SimulationConfig,
    mutation: MutationBounds,
    rng: SimulationRng<R>,
    initial_population: Population,
    initial_fitness: f64,
    population: Population,
    fitness: f64,
    generation: usize,
    state: RunState,
    logger: EvolutionLogger,
}

impl Simulation<StdRng> {
    /// Creates a replayable simulation driven by a seeded generator.
    ///
    /// # Errors
    /// Returns an error if the configuration is invalid.
    pub fn seeded(config: SimulationConfig, seed: u64) -> Result<Self, SimulationError> {
        Simulation::new(config, SimulationRng::seeded(seed))
    }
}

impl<R> Simulation<R>
where
    R: Rng,
{
    /// Validates the configuration, populates the first
    /// generation and measures its fitness.
    ///
    /// # Errors
    /// Returns an error if the configuration is invalid.
    pub fn new(config: SimulationConfig, mut rng: SimulationRng<R>) -> Result<Self, SimulationError> {
        config.validate()?;
        let population = Population::populate(
            config.even_population_size(),
            config.initial_min,
            config.initial_max,
            config.initial_mode,
            &mut rng,
        )?;
        let fitness = population.fitness(config.goal)?;
        tracing::info!(
            population = population.len(),
            retained_males = config.retained_males.get(),
            retained_females = config.retained_females(),
            initial_fitness = fitness,
            "initialized population"
        );

        let mut simulation = Simulation {
            mutation: MutationBounds::from(&config),
            config,
            rng,
            initial_population: population.clone(),
            initial_fitness: fitness,
            population,
            fitness,
            generation: 0,
            state: RunState::Running,
            logger: EvolutionLogger::default(),
        };
        simulation.update_state();
        Ok(simulation)
    }

    /// Sets how much of each generation the log keeps.
    pub fn with_reporting_level(mut self, reporting_level: ReportingLevel) -> Self {
        self.logger = EvolutionLogger::new(reporting_level);
        self
    }

    /// Breeds one generation and returns its log record,
    /// or `None` once the run has converged or been exhausted.
    ///
    /// # Errors
    /// Returns an error if the bred population is empty.
    pub fn step(&mut self) -> Result<Option<&GenerationRecord>, SimulationError> {
        if self.state != RunState::Running {
            return Ok(None);
        }

        let selection = select(
            &self.population,
            self.config.retained_males.get(),
            self.config.retained_females(),
        );
        let children = breed(
            &selection.males,
            &selection.females,
            self.config.litter_size.get(),
            &mut self.rng,
        );
        let children = mutate(children, &self.mutation, &mut self.rng);
        let population: Population = selection.survivors().chain(children).collect();
        let fitness = population.fitness(self.config.goal)?;

        let generation = self.generation;
        tracing::debug!(generation, fitness, population = population.len(), "bred generation");
        self.population = population;
        self.fitness = fitness;
        self.generation += 1;
        self.update_state();

        let record = self
            .logger
            .log(generation, &self.population, fitness)
            .ok_or(PopulationError::Empty)?;
        Ok(Some(record))
    }

    /// Runs to completion without observing progress.
    ///
    /// # Errors
    /// Returns an error if a generation could not be bred.
    pub fn run(self) -> Result<RunSummary, SimulationError> {
        self.run_with(&mut |_: &GenerationRecord| {})
    }

    /// Runs to completion, handing each generation's
    /// record to `observer`.
    ///
    /// # Errors
    /// Returns an error if a generation could not be bred.
    pub fn run_with<O>(mut self, observer: &mut O) -> Result<RunSummary, SimulationError>
    where
        O: GenerationObserver + ?Sized,
    {
        let start = Instant::now();
        while let Some(record) = self.step()? {
            observer.observe(record);
        }
        Ok(self.summarize(start.elapsed()))
    }

    /// Consumes the simulation, returning its outcome so far.
    pub fn summarize(self, elapsed: Duration) -> RunSummary {
        RunSummary {
            state: self.state,
            initial_weights: self.initial_population.weights().to_vec(),
            initial_fitness: self.initial_fitness,
            final_fitness: self.fitness,
            mean_weights: self.logger.mean_weights(),
            generations: self.generation,
            years: self.generation / self.config.litters_per_year.get(),
            elapsed,
        }
    }

    /// Returns whether the run is still going, and if not, why it stopped.
    pub fn state(&self) -> RunState {
        self.state
    }

    /// Returns the number of generations bred so far.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Returns the current population's fitness.
    pub fn fitness(&self) -> f64 {
        self.fitness
    }

    /// Returns the most recently bred population.
    pub fn population(&self) -> &Population {
        &self.population
    }

    pub fn initial_population(&self) -> &Population {
        &self.initial_population
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Returns the log of all bred generations.
    pub fn logger(&self) -> &EvolutionLogger {
        &self.logger
    }

    fn update_state(&mut self) {
        self.state = if self.fitness >= 1.0 {
            RunState::Converged
        } else if self.generation >= self.config.generation_limit.get() {
            RunState::Exhausted
        } else {
            RunState::Running
        };
        if self.state != RunState::Running {
            tracing::info!(
                state = ?self.state,
                generations = self.generation,
                fitness = self.fitness,
                "simulation finished"
            );
        }
    }
}
