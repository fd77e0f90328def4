//! Single-layer decision model.
//!
//! A [`Perceptron`] maps the three sensor readings of a bird to a flap
//! probability. It is a pure function of its [`Genome`]: three input weights
//! and one bias weight, combined by a dot product and squashed by a
//! numerically stabilized logistic function.

use rand::Rng;

/// Number of sensor inputs.
pub const INPUT_COUNT: usize = 3;

/// Number of weights in a genome (inputs plus bias).
pub const GENOME_LEN: usize = INPUT_COUNT + 1;

/// Half-width of the uniform range fresh weights are drawn from.
///
/// Kept small so new models start far from saturation.
pub const INITIAL_WEIGHT_RANGE: f64 = 0.1;

/// Per-input divisors bringing raw screen distances to roughly unit scale.
const INPUT_SCALES: [f64; INPUT_COUNT] = [1000.0, 2000.0, 1000.0];

/// Bound applied to the pre-activation value before exponentiating.
const ACTIVATION_CLAMP: f64 = 500.0;

/// Weight vector of one decision model.
///
/// A genome is a plain value: it can be copied and compared but never
/// modified in place. Mutation produces a new genome.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Genome([f64; GENOME_LEN]);

impl Genome {
    #[must_use]
    pub const fn new(weights: [f64; GENOME_LEN]) -> Self {
        Self(weights)
    }

    /// Draws every weight uniformly from `[-INITIAL_WEIGHT_RANGE, INITIAL_WEIGHT_RANGE]`.
    pub fn random<R>(rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        Self(std::array::from_fn(|_| {
            rng.random_range(-INITIAL_WEIGHT_RANGE..=INITIAL_WEIGHT_RANGE)
        }))
    }

    /// Weights in input order, bias last.
    #[must_use]
    pub const fn weights(&self) -> &[f64; GENOME_LEN] {
        &self.0
    }

    /// L1 distance: sum of absolute per-weight differences.
    #[must_use]
    pub fn distance(&self, other: &Self) -> f64 {
        self.0
            .iter()
            .zip(&other.0)
            .map(|(a, b)| (a - b).abs())
            .sum()
    }
}

impl From<[f64; GENOME_LEN]> for Genome {
    fn from(weights: [f64; GENOME_LEN]) -> Self {
        Self(weights)
    }
}

/// Logistic activation with a clamped input.
///
/// The pre-activation value is clamped to `[-500, 500]`; the clamp bounds
/// map to exactly `1.0` and `0.0`, so the result never depends on an
/// overflowing exponential.
///
/// ```
/// use flapevo_training::perceptron::sigmoid;
///
/// assert_eq!(sigmoid(0.0), 0.5);
/// assert_eq!(sigmoid(1e9), 1.0);
/// assert_eq!(sigmoid(-1e9), 0.0);
/// ```
#[must_use]
pub fn sigmoid(z: f64) -> f64 {
    let z = z.clamp(-ACTIVATION_CLAMP, ACTIVATION_CLAMP);
    if z >= ACTIVATION_CLAMP {
        1.0
    } else if z <= -ACTIVATION_CLAMP {
        0.0
    } else {
        1.0 / (1.0 + (-z).exp())
    }
}

/// A single-layer perceptron wrapping exactly one genome.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Perceptron {
    genome: Genome,
}

impl Perceptron {
    #[must_use]
    pub const fn new(genome: Genome) -> Self {
        Self { genome }
    }

    /// Creates a model with a fresh random genome.
    pub fn random<R>(rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        Self::new(Genome::random(rng))
    }

    #[must_use]
    pub const fn genome(&self) -> &Genome {
        &self.genome
    }

    /// Computes the flap probability for raw sensor readings.
    ///
    /// Each input is divided by its scale constant, a constant bias input of
    /// `1.0` is appended, and the dot product with the weights is passed
    /// through [`sigmoid`]. The result lies in `[0, 1]`.
    #[must_use]
    pub fn feed_forward(&self, inputs: [f64; INPUT_COUNT]) -> f64 {
        let weights = self.genome.weights();
        let linear = inputs
            .iter()
            .zip(INPUT_SCALES)
            .zip(weights)
            .map(|((input, scale), w)| w * input / scale)
            .sum::<f64>()
            + weights[INPUT_COUNT];
        sigmoid(linear)
    }
}
