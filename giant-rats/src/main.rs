use ratsim::logging::GenerationRecord;
use ratsim::{Simulation, SimulationConfig, SimulationRng};

use anyhow::{Context, Result};
use clap::Parser;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use tracing::Level;

/// Breed giant rats until the colony averages the goal weight.
#[derive(Parser, Debug)]
#[command(name = "giant-rats")]
struct Cli {
    /// RON file with a (possibly partial) simulation configuration
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Seed for a replayable run; drawn from the OS if omitted
    #[arg(short, long)]
    seed: Option<u64>,
    /// Number of males retained for breeding each generation
    #[arg(long)]
    males: Option<NonZeroUsize>,
    /// Chance that an offspring mutates
    #[arg(long)]
    mutate_odds: Option<f64>,
    /// Smallest factor a mutated weight is scaled by
    #[arg(long)]
    mutate_min: Option<f64>,
    /// Largest factor a mutated weight is scaled by
    #[arg(long)]
    mutate_max: Option<f64>,
    /// Maximum number of generations to breed
    #[arg(long)]
    generation_limit: Option<NonZeroUsize>,
    /// Log each generation's diagnostics
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn simulation_config(&self) -> Result<SimulationConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("reading {}", path.display()))?;
                ron::from_str(&text).with_context(|| format!("parsing {}", path.display()))?
            }
            None => SimulationConfig::default(),
        };
        if let Some(males) = self.males {
            config.retained_males = males;
        }
        if let Some(odds) = self.mutate_odds {
            config.mutation_probability = odds;
        }
        if let Some(lo) = self.mutate_min {
            config.mutation_min_multiplier = lo;
        }
        if let Some(hi) = self.mutate_max {
            config.mutation_max_multiplier = hi;
        }
        if let Some(limit) = self.generation_limit {
            config.generation_limit = limit;
        }
        Ok(config)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::INFO })
        .init();

    let config = cli.simulation_config()?;
    let rng = match cli.seed {
        Some(seed) => SimulationRng::seeded(seed),
        None => SimulationRng::from_entropy(),
    };
    let simulation = Simulation::new(config, rng).context("starting simulation")?;

    println!("Initial pop weights: {:?}", simulation.initial_population().weights());
    println!("Initial pop fitness: {}", simulation.fitness());
    println!("Number to retain: {}", simulation.config().even_population_size());

    let summary = simulation.run_with(&mut |record: &GenerationRecord| println!("{}", record))?;

    println!("AVG WT per generation: {:?}", summary.mean_weights);
    println!("\nNum of generations: {}", summary.generations);
    println!("Number of years: {}", summary.years);
    println!("Runtime: {}s", summary.elapsed.as_secs_f64());

    Ok(())
}
