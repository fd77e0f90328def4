//! Per-weight mutation operator.
//!
//! Reproduction in this crate is mutation-only: an offspring is a copy of a
//! single parent genome with some weights nudged. There is no crossover
//! between two parents.
//!
//! For every weight independently:
//!
//! 1. With probability `mutation_rate`, draw a perturbation uniformly from
//!    `[-mutation_amount, mutation_amount]`
//! 2. Add it to the weight
//! 3. Clamp the result to `[-weight_bound, weight_bound]`
//!
//! Weights that are not selected pass through untouched (and unclamped).

use rand::Rng;
use rand_distr::{Bernoulli, Distribution as _, Uniform};

use crate::{
    config::{ConfigError, EvolutionConfig},
    perceptron::Genome,
};

/// Mutation operator built from a validated configuration.
#[derive(Debug, Clone)]
pub struct Mutation {
    select: Bernoulli,
    perturb: Uniform<f64>,
    bound: f64,
}

impl Mutation {
    pub fn new(config: &EvolutionConfig) -> Result<Self, ConfigError> {
        let select = Bernoulli::new(config.mutation_rate)
            .map_err(|_| ConfigError::MutationRate(config.mutation_rate))?;
        let perturb = Uniform::new_inclusive(-config.mutation_amount, config.mutation_amount)
            .map_err(|_| ConfigError::MutationAmount(config.mutation_amount))?;
        if !config.weight_bound.is_finite() || config.weight_bound <= 0.0 {
            return Err(ConfigError::WeightBound(config.weight_bound));
        }
        Ok(Self {
            select,
            perturb,
            bound: config.weight_bound,
        })
    }

    /// Returns a mutated copy of `genome`; the input is left untouched.
    pub fn mutate<R>(&self, genome: &Genome, rng: &mut R) -> Genome
    where
        R: Rng + ?Sized,
    {
        let mut weights = *genome.weights();
        for w in &mut weights {
            if self.select.sample(rng) {
                *w = (*w + self.perturb.sample(rng)).clamp(-self.bound, self.bound);
            }
        }
        Genome::new(weights)
    }
}
