use super::{Population, Weight};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Defines different possible reporting levels for logging.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportingLevel {
    /// Clones every organism's weight into each record.
    AllWeights,
    /// Keeps only summary statistics.
    #[default]
    StatsOnly,
}

/// A snapshot of one completed generation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GenerationRecord {
    /// Zero-based index of the generation.
    pub generation: usize,
    /// Population fitness after the generation was bred.
    pub fitness: f64,
    /// Mean weight, fractional part dropped.
    pub mean_weight: Weight,
    /// Number of organisms in the generation.
    pub population_size: usize,
    pub weight_stats: Stats,
    /// Every organism's weight, if the logger's
    /// reporting level asks for it.
    pub weights: Option<Vec<Weight>>,
}

impl fmt::Display for GenerationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Generation {} fitness = {}", self.generation, self.fitness)
    }
}

/// A struct for reporting basic statistical data.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    pub maximum: f64,
    pub minimum: f64,
    pub mean: f64,
    pub median: f64,
}

impl Stats {
    /// Returns statistics about numbers in a sequence.
    ///
    /// # Panics
    /// Panics if the sequence is empty or contains NaN.
    ///
    /// # Examples
    /// ```
    /// use ratsim::logging::Stats;
    ///
    /// let stats = Stats::from([-2.0, -1.0, 0.5, 1.0, 1.5].iter().copied());
    /// assert_eq!(stats.maximum, 1.5);
    /// assert_eq!(stats.minimum, -2.0);
    /// assert_eq!(stats.mean, 0.0);
    /// assert_eq!(stats.median, 0.5);
    /// ```
    pub fn from(data: impl Iterator<Item = f64>) -> Stats {
        let mut data: Vec<f64> = data.collect();
        assert!(!data.is_empty(), "no statistics for an empty sequence");
        data.sort_unstable_by(|a, b| {
            a.partial_cmp(b)
                .unwrap_or_else(|| panic!("uncomparable value detected (NaN)"))
        });
        let mid = data.len() / 2;
        let median = if data.len() % 2 == 0 {
            (data[mid - 1] + data[mid]) / 2.0
        } else {
            data[mid]
        };
        Stats {
            maximum: data[data.len() - 1],
            minimum: data[0],
            mean: data.iter().sum::<f64>() / data.len() as f64,
            median,
        }
    }
}

/// An append-only log of a population's evolution.
#[derive(Clone, Debug, Default)]
pub struct EvolutionLogger {
    reporting_level: ReportingLevel,
    records: Vec<GenerationRecord>,
}

impl EvolutionLogger {
    /// Returns a logger with the appropiate reporting level.
    ///
    /// # Examples
    /// ```
    /// use ratsim::logging::{EvolutionLogger, ReportingLevel};
    ///
    /// let logger = EvolutionLogger::new(ReportingLevel::StatsOnly);
    /// assert!(logger.is_empty());
    /// ```
    pub fn new(reporting_level: ReportingLevel) -> EvolutionLogger {
        EvolutionLogger {
            reporting_level,
            records: vec![],
        }
    }

    /// Records a completed generation and returns the new record.
    ///
    /// Returns `None`, logging nothing, if the population
    /// is empty.
    ///
    /// # Examples
    /// ```
    /// use ratsim::Population;
    /// use ratsim::logging::{EvolutionLogger, ReportingLevel};
    ///
    /// let mut logger = EvolutionLogger::new(ReportingLevel::AllWeights);
    /// let population = Population::from(vec![300, 400, 500]);
    ///
    /// let record = logger.log(0, &population, 0.8).unwrap();
    /// assert_eq!(record.mean_weight, 400);
    /// assert_eq!(record.weights.as_deref(), Some(&[300, 400, 500][..]));
    /// ```
    pub fn log(
        &mut self,
        generation: usize,
        population: &Population,
        fitness: f64,
    ) -> Option<&GenerationRecord> {
        let mean_weight = population.truncated_mean_weight().ok()?;
        let weight_stats = population.stats()?;
        self.records.push(GenerationRecord {
            generation,
            fitness,
            mean_weight,
            population_size: population.len(),
            weight_stats,
            weights: match self.reporting_level {
                ReportingLevel::AllWeights => Some(population.weights().to_vec()),
                ReportingLevel::StatsOnly => None,
            },
        });
        self.records.last()
    }

    /// Iterate over all logged generations, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &GenerationRecord> {
        self.records.iter()
    }

    /// Returns the truncated mean weight of every logged generation.
    pub fn mean_weights(&self) -> Vec<Weight> {
        self.records.iter().map(|r| r.mean_weight).collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn reporting_level(&self) -> ReportingLevel {
        self.reporting_level
    }
}
