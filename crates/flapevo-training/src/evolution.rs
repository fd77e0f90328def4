//! Generation-to-generation reproduction.
//!
//! [`Evolution`] owns the run configuration and the generation counter and
//! turns a scored, speciated population into the next generation.
//!
//! # Reproduction Pipeline
//!
//! Given species sorted by [`calculate_fitness`] (best first) and a target
//! population size `P`:
//!
//! 1. **Total** - sum the average fitness of all non-empty species
//! 2. **Elitism** - each non-empty species contributes an unmutated copy of
//!    its champion
//! 3. **Allotment** - each species gets `floor(P * average / total)` slots, or
//!    `max(2, floor(P / species_count))` when the total is zero; at least 1
//! 4. **Offspring** - the remaining `allotment - 1` slots are filled with
//!    mutated copies of uniformly chosen members (with replacement)
//! 5. **Padding** - fresh random agents are appended up to `P`
//! 6. **Truncation** - anything beyond `P` is dropped; species come best
//!    first, so the weakest species lose their offspring first
//!
//! Every produced agent starts with soft-reset runtime state.
//!
//! # Example
//!
//! ```
//! use flapevo_training::{config::EvolutionConfig, evolution::Evolution};
//!
//! let mut rng = rand::rng();
//! let mut evolution = Evolution::new(EvolutionConfig {
//!     population_size: 20,
//!     ..EvolutionConfig::default()
//! })
//! .unwrap();
//!
//! let population = evolution.initial_population(20, &mut rng);
//! // ... let the agents play an episode ...
//! let mut species = evolution.speciate(population);
//! evolution.calculate_fitness(&mut species);
//! let next = evolution.create_next_generation(&species, &mut rng);
//!
//! assert_eq!(next.len(), 20);
//! assert_eq!(evolution.generation(), 1);
//! ```

use rand::{Rng, seq::IndexedRandom as _};
use serde::Serialize;
use tracing::{debug, instrument};

use crate::{
    agent::Agent,
    config::{ConfigError, EvolutionConfig},
    mutation::Mutation,
    species::{self, Species},
};

/// Evolutionary engine state for one run.
#[derive(Debug, Clone)]
pub struct Evolution {
    config: EvolutionConfig,
    mutation: Mutation,
    generation: usize,
}

/// What one call to [`Evolution::evolve`] saw before reproducing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationSummary {
    /// Number of species the scored population was split into
    pub species_count: usize,
    /// Average fitness of the best species
    pub best_species_fitness: f64,
    /// Distance traveled by the best agent
    pub champion_fitness: f64,
}

impl Evolution {
    /// Validates `config` and starts at generation 0.
    pub fn new(config: EvolutionConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mutation = Mutation::new(&config)?;
        Ok(Self {
            config,
            mutation,
            generation: 0,
        })
    }

    #[must_use]
    pub fn config(&self) -> &EvolutionConfig {
        &self.config
    }

    /// Number of generations produced so far.
    #[must_use]
    pub fn generation(&self) -> usize {
        self.generation
    }

    #[must_use]
    pub fn mutation(&self) -> &Mutation {
        &self.mutation
    }

    /// Creates `size` independent agents with fresh random genomes.
    pub fn initial_population<R>(&self, size: usize, rng: &mut R) -> Vec<Agent>
    where
        R: Rng + ?Sized,
    {
        (0..size).map(|_| Agent::random(rng)).collect()
    }

    /// Splits `population` into species using the configured threshold.
    #[must_use]
    pub fn speciate(&self, population: Vec<Agent>) -> Vec<Species> {
        species::speciate(population, self.config.speciation_threshold)
    }

    /// Scores and sorts `species` in place, best first.
    pub fn calculate_fitness(&self, species: &mut [Species]) {
        species::calculate_fitness(species);
    }

    /// Builds the next generation from species sorted best first.
    ///
    /// Always returns exactly `population_size` agents, whatever the input:
    /// empty species are skipped, an all-zero fitness falls back to equal
    /// shares, and missing slots are padded with random agents.
    #[instrument(level = "debug", skip_all, fields(generation = self.generation, species = sorted_species.len()))]
    pub fn create_next_generation<R>(&mut self, sorted_species: &[Species], rng: &mut R) -> Vec<Agent>
    where
        R: Rng + ?Sized,
    {
        let target = self.config.population_size;
        let species_count = sorted_species.len();
        let total_average: f64 = sorted_species
            .iter()
            .filter(|s| !s.is_empty())
            .map(Species::average_fitness)
            .sum();

        let mut next = Vec::with_capacity(target);
        for species in sorted_species {
            let Some(champion) = species.champion() else {
                continue;
            };
            next.push(Agent::from_genome(*champion.genome(), rng));

            let allotment = self.allotment(species, total_average, species_count);
            debug!(
                average_fitness = species.average_fitness(),
                members = species.len(),
                allotment,
                "species reproduced"
            );
            for _ in 1..allotment {
                let Some(parent) = species.members().choose(rng) else {
                    break;
                };
                let genome = self.mutation.mutate(parent.genome(), rng);
                next.push(Agent::from_genome(genome, rng));
            }
        }

        let produced = next.len();
        while next.len() < target {
            next.push(Agent::random(rng));
        }
        next.truncate(target);
        debug!(
            produced,
            padded = target.saturating_sub(produced),
            truncated = produced.saturating_sub(target),
            "next generation assembled"
        );

        self.generation += 1;
        next
    }

    /// Runs speciation, fitness and reproduction on a played-out population.
    pub fn evolve<R>(&mut self, population: Vec<Agent>, rng: &mut R) -> (Vec<Agent>, GenerationSummary)
    where
        R: Rng + ?Sized,
    {
        let mut species = self.speciate(population);
        self.calculate_fitness(&mut species);
        let summary = GenerationSummary {
            species_count: species.len(),
            best_species_fitness: species.first().map_or(0.0, Species::average_fitness),
            champion_fitness: species
                .iter()
                .filter_map(Species::champion)
                .map(Agent::distance_traveled)
                .fold(0.0, f64::max),
        };
        let next = self.create_next_generation(&species, rng);
        (next, summary)
    }

    #[expect(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    fn allotment(&self, species: &Species, total_average: f64, species_count: usize) -> usize {
        let target = self.config.population_size;
        let allotment = if total_average > 0.0 {
            (target as f64 * species.average_fitness() / total_average).floor() as usize
        } else {
            usize::max(2, target / species_count)
        };
        allotment.max(1)
    }
}
