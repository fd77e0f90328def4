use flapevo_engine::{Bird, Sensors};
use rand::Rng;

use crate::perceptron::{Genome, Perceptron};

/// One member of the population: a decision model and the bird it controls.
///
/// The model (and therefore the genome) is fixed for the agent's lifetime.
/// The bird is runtime state owned by the environment: position, velocity,
/// alive flag and the two fitness counters.
#[derive(Debug, Clone)]
pub struct Agent {
    model: Perceptron,
    bird: Bird,
}

impl Agent {
    /// Creates an agent with a fresh random genome at a random spawn point.
    pub fn random<R>(rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        Self::from_genome(Genome::random(rng), rng)
    }

    /// Creates an agent carrying `genome`, with soft-reset runtime state.
    pub fn from_genome<R>(genome: Genome, rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        Self {
            model: Perceptron::new(genome),
            bird: Bird::spawn(rng),
        }
    }

    #[must_use]
    pub fn genome(&self) -> &Genome {
        self.model.genome()
    }

    #[must_use]
    pub fn perceptron(&self) -> &Perceptron {
        &self.model
    }

    #[must_use]
    pub fn bird(&self) -> &Bird {
        &self.bird
    }

    /// Mutable access to the runtime state for the environment.
    pub fn bird_mut(&mut self) -> &mut Bird {
        &mut self.bird
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.bird.is_alive()
    }

    /// Continuous fitness signal.
    #[must_use]
    pub fn distance_traveled(&self) -> f64 {
        self.bird.distance_traveled()
    }

    /// Pipes passed.
    #[must_use]
    pub fn score(&self) -> usize {
        self.bird.score()
    }

    /// Runs the model on `sensors` and flaps if its output strictly exceeds
    /// `threshold`.
    ///
    /// Does nothing for a dead agent. Returns whether the agent flapped.
    pub fn decide(&mut self, sensors: Sensors, threshold: f64) -> bool {
        if !self.bird.is_alive() {
            return false;
        }
        let flap = self.model.feed_forward(sensors.to_array()) > threshold;
        if flap {
            self.bird.flap();
        }
        flap
    }

    /// Respawns the bird and clears its counters; the genome is kept.
    pub fn reset_soft<R>(&mut self, rng: &mut R)
    where
        R: Rng + ?Sized,
    {
        self.bird = Bird::spawn(rng);
    }

    /// Replaces the genome with a fresh random one and respawns the bird.
    pub fn reset_hard<R>(&mut self, rng: &mut R)
    where
        R: Rng + ?Sized,
    {
        self.model = Perceptron::random(rng);
        self.reset_soft(rng);
    }
}
