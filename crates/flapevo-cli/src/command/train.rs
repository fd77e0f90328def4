use std::path::PathBuf;

use anyhow::Context as _;
use chrono::Utc;
use flapevo_engine::{CourseSeed, World};
use flapevo_training::{
    config::{EpisodeLimits, EvolutionConfig},
    episode::run_episode,
    evolution::Evolution,
    stats::GenerationStats,
};
use rand::Rng as _;
use tracing::info;

use crate::{
    schema::report::TrainingReport,
    util::{self, Output},
};

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct TrainArg {
    /// JSON evolution configuration; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,
    /// Number of agents per generation
    #[arg(long)]
    population: Option<usize>,
    /// Maximum number of generations to run
    #[arg(long, default_value_t = 100)]
    generations: usize,
    #[arg(long)]
    speciation_threshold: Option<f64>,
    #[arg(long)]
    mutation_rate: Option<f64>,
    #[arg(long)]
    mutation_amount: Option<f64>,
    /// Maximum ticks per episode
    #[arg(long)]
    tick_limit: Option<usize>,
    /// Episode ends once this many pipes are passed
    #[arg(long)]
    score_limit: Option<usize>,
    /// Stop once an agent travels farther than this
    #[arg(long, default_value_t = 20_000.0)]
    distance_target: f64,
    /// Course seed as 32 hex digits (random if omitted)
    #[arg(long)]
    seed: Option<CourseSeed>,
    /// Output file path for the training report
    #[arg(long)]
    output: Option<PathBuf>,
}

impl TrainArg {
    fn evolution_config(&self) -> anyhow::Result<EvolutionConfig> {
        let mut config = match &self.config {
            Some(path) => util::read_config_file(path)?,
            None => EvolutionConfig::default(),
        };
        if let Some(population) = self.population {
            config.population_size = population;
        }
        if let Some(threshold) = self.speciation_threshold {
            config.speciation_threshold = threshold;
        }
        if let Some(rate) = self.mutation_rate {
            config.mutation_rate = rate;
        }
        if let Some(amount) = self.mutation_amount {
            config.mutation_amount = amount;
        }
        Ok(config)
    }

    fn episode_limits(&self) -> EpisodeLimits {
        let defaults = EpisodeLimits::default();
        EpisodeLimits {
            tick_limit: self.tick_limit.unwrap_or(defaults.tick_limit),
            score_limit: self.score_limit.unwrap_or(defaults.score_limit),
        }
    }
}

pub(crate) fn run(arg: &TrainArg) -> anyhow::Result<()> {
    let config = arg.evolution_config()?;
    let limits = arg.episode_limits();
    let mut evolution =
        Evolution::new(config.clone()).context("Invalid evolution configuration")?;

    let mut rng = rand::rng();
    let course_seed = arg.seed.unwrap_or_else(|| rng.random());
    let mut world = World::with_seed(course_seed);
    info!(
        population = config.population_size,
        generations = arg.generations,
        seed = ?course_seed,
        "training started"
    );

    let mut population = evolution.initial_population(config.population_size, &mut rng);
    let mut generations = Vec::with_capacity(arg.generations);
    let mut target_reached = false;
    for generation in 0..arg.generations {
        let outcome = run_episode(
            &mut world,
            &mut population,
            config.decision_threshold,
            limits,
        );
        let stats = GenerationStats::collect(generation, &population, &outcome);
        let (next, summary) = evolution.evolve(population, &mut rng);
        population = next;
        let stats = stats.with_summary(&summary);

        info!(
            generation,
            species = stats.species_count,
            best_score = stats.best_score,
            best_distance = stats.best_distance(),
            mean_distance = stats.distance.map_or(0.0, |d| d.mean),
            ticks = stats.ticks,
            "generation finished"
        );
        target_reached = stats.best_distance() > arg.distance_target;
        generations.push(stats);
        if target_reached {
            info!(generation, target = arg.distance_target, "distance target reached");
            break;
        }
    }

    let report = TrainingReport {
        trained_at: Utc::now(),
        config,
        limits,
        course_seed,
        distance_target: arg.distance_target,
        target_reached,
        generations,
    };
    Output::save_json(&report, arg.output.clone())?;

    if let Some(path) = &arg.output {
        info!(path = %path.display(), "training report saved");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(Debug, Parser)]
    struct Cli {
        #[command(flatten)]
        arg: TrainArg,
    }

    fn parse(args: &[&str]) -> TrainArg {
        Cli::try_parse_from(std::iter::once("train").chain(args.iter().copied()))
            .unwrap()
            .arg
    }

    #[test]
    fn test_defaults() {
        let arg = parse(&[]);
        assert_eq!(arg.generations, 100);
        assert_eq!(arg.distance_target, 20_000.0);
        assert_eq!(arg.evolution_config().unwrap(), EvolutionConfig::default());
        assert_eq!(arg.episode_limits(), EpisodeLimits::default());
        assert!(arg.seed.is_none());
    }

    #[test]
    fn test_flags_override_config() {
        let arg = parse(&[
            "--population",
            "12",
            "--mutation-rate",
            "1",
            "--speciation-threshold",
            "0",
            "--tick-limit",
            "50",
            "--seed",
            "000102030405060708090a0b0c0d0e0f",
        ]);
        let config = arg.evolution_config().unwrap();
        assert_eq!(config.population_size, 12);
        assert_eq!(config.mutation_rate, 1.0);
        assert_eq!(config.speciation_threshold, 0.0);
        assert_eq!(config.mutation_amount, 0.05);
        assert_eq!(arg.episode_limits().tick_limit, 50);
        assert_eq!(arg.episode_limits().score_limit, 30);
        assert_eq!(
            arg.seed,
            Some(CourseSeed::from_bytes(std::array::from_fn(|i| {
                u8::try_from(i).unwrap()
            })))
        );
    }

    #[test]
    fn test_rejects_malformed_seed() {
        assert!(Cli::try_parse_from(["train", "--seed", "xyz"]).is_err());
    }
}
