use serde::{Deserialize, Serialize};

/// Hyperparameters of one evolution run.
///
/// Fixed for the whole run and passed to [`Evolution::new`](crate::evolution::Evolution::new),
/// which validates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvolutionConfig {
    /// Number of agents in every generation
    pub population_size: usize,
    /// An agent joins a species when its L1 distance to the representative is strictly below this
    pub speciation_threshold: f64,
    /// Probability of perturbing each weight of a non-elite offspring
    pub mutation_rate: f64,
    /// Perturbations are uniform in `[-mutation_amount, mutation_amount]`
    pub mutation_amount: f64,
    /// Mutated weights are clamped to `[-weight_bound, weight_bound]`
    pub weight_bound: f64,
    /// An agent flaps when its model output strictly exceeds this
    pub decision_threshold: f64,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            speciation_threshold: 0.8,
            mutation_rate: 0.15,
            mutation_amount: 0.05,
            weight_bound: 1.0,
            decision_threshold: 0.5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error)]
pub enum ConfigError {
    #[display("population size must be at least 1")]
    EmptyPopulation,
    #[display("speciation threshold must be a non-negative number, got {_0}")]
    SpeciationThreshold(#[error(not(source))] f64),
    #[display("mutation rate must be within [0, 1], got {_0}")]
    MutationRate(#[error(not(source))] f64),
    #[display("mutation amount must be a non-negative number, got {_0}")]
    MutationAmount(#[error(not(source))] f64),
    #[display("weight bound must be a positive number, got {_0}")]
    WeightBound(#[error(not(source))] f64),
    #[display("decision threshold must be a number, got {_0}")]
    DecisionThreshold(#[error(not(source))] f64),
}

impl EvolutionConfig {
    /// Checks every parameter. Edge values such as a zero speciation
    /// threshold or a mutation rate of 1 are accepted.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size == 0 {
            return Err(ConfigError::EmptyPopulation);
        }
        if self.speciation_threshold.is_nan() || self.speciation_threshold < 0.0 {
            return Err(ConfigError::SpeciationThreshold(self.speciation_threshold));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(ConfigError::MutationRate(self.mutation_rate));
        }
        if !self.mutation_amount.is_finite() || self.mutation_amount < 0.0 {
            return Err(ConfigError::MutationAmount(self.mutation_amount));
        }
        if !self.weight_bound.is_finite() || self.weight_bound <= 0.0 {
            return Err(ConfigError::WeightBound(self.weight_bound));
        }
        if self.decision_threshold.is_nan() {
            return Err(ConfigError::DecisionThreshold(self.decision_threshold));
        }
        Ok(())
    }
}

/// Limits ending an episode while agents are still alive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EpisodeLimits {
    /// Maximum number of ticks per episode
    pub tick_limit: usize,
    /// Episode ends once the world score reaches this
    pub score_limit: usize,
}

impl Default for EpisodeLimits {
    fn default() -> Self {
        Self {
            tick_limit: 5000,
            score_limit: 30,
        }
    }
}
