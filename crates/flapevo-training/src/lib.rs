//! Neuroevolution of flappy-bird controllers.
//!
//! A population of [`Agent`](agent::Agent)s, each controlled by a
//! single-layer [`Perceptron`](perceptron::Perceptron), plays the world
//! simulated by `flapevo-engine`. After every episode the population is
//! clustered into species and a new generation is bred from them.
//!
//! # How Training Works
//!
//! 1. **Population** - Create agents with random genomes
//! 2. **Episode** - All agents play the same course until every bird is dead
//!    or a limit is hit ([`episode::run_episode`])
//! 3. **Speciation** - Group agents whose genomes are close to a species
//!    representative ([`species::speciate`])
//! 4. **Fitness** - Score each species by the mean distance its members
//!    traveled ([`species::calculate_fitness`])
//! 5. **Reproduction** - Keep every species' champion, share the population
//!    among species by fitness and fill the shares with mutated offspring
//!    ([`evolution::Evolution::create_next_generation`])
//! 6. **Repeat** - The new generation plays the next episode
//!
//! # Architecture
//!
//! ```text
//! Genome (4 weights)
//!     ↓ drives
//! Perceptron → Agent ──plays──▶ World (flapevo-engine)
//!                                  ↓ produces
//!                             distance traveled
//!                                  ↓ grouped by
//!                             Species (first-fit, L1 threshold)
//!                                  ↓ bred by
//!                             Evolution (elitism + mutation)
//! ```
//!
//! # Example
//!
//! ```
//! use flapevo_engine::World;
//! use flapevo_training::{
//!     config::{EpisodeLimits, EvolutionConfig},
//!     episode::run_episode,
//!     evolution::Evolution,
//! };
//!
//! let mut rng = rand::rng();
//! let config = EvolutionConfig {
//!     population_size: 10,
//!     ..EvolutionConfig::default()
//! };
//! let threshold = config.decision_threshold;
//! let mut evolution = Evolution::new(config).unwrap();
//! let mut world = World::new();
//! let limits = EpisodeLimits {
//!     tick_limit: 200,
//!     ..EpisodeLimits::default()
//! };
//!
//! let mut population = evolution.initial_population(10, &mut rng);
//! for _ in 0..3 {
//!     run_episode(&mut world, &mut population, threshold, limits);
//!     let (next, _summary) = evolution.evolve(population, &mut rng);
//!     population = next;
//! }
//! assert_eq!(population.len(), 10);
//! ```

pub mod agent;
pub mod config;
pub mod episode;
pub mod evolution;
pub mod mutation;
pub mod perceptron;
pub mod species;
pub mod stats;
