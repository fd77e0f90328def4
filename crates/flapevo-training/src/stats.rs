//! Per-generation statistics for training reports.

use serde::Serialize;

use crate::{agent::Agent, episode::EpisodeOutcome, evolution::GenerationSummary};

/// Descriptive statistics of the distances traveled in one episode.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DistanceStats {
    /// The shortest distance.
    pub min: f64,
    /// The longest distance.
    pub max: f64,
    /// The arithmetic mean.
    pub mean: f64,
    /// The median (upper median for an even count).
    pub median: f64,
}

impl DistanceStats {
    /// Computes statistics from unsorted values.
    ///
    /// Returns `None` if there are no values.
    ///
    /// ```
    /// # use flapevo_training::stats::DistanceStats;
    /// let stats = DistanceStats::new([40.0, 8.0, 12.0]).unwrap();
    /// assert_eq!(stats.min, 8.0);
    /// assert_eq!(stats.max, 40.0);
    /// assert_eq!(stats.mean, 20.0);
    /// assert_eq!(stats.median, 12.0);
    /// ```
    #[must_use]
    pub fn new<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut values = values.into_iter().collect::<Vec<_>>();
        values.sort_by(f64::total_cmp);
        let (&min, &max) = (values.first()?, values.last()?);
        #[expect(clippy::cast_precision_loss)]
        let mean = values.iter().sum::<f64>() / values.len() as f64;
        Some(Self {
            min,
            max,
            mean,
            median: values[values.len() / 2],
        })
    }
}

/// One generation's line in the training report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationStats {
    pub generation: usize,
    pub population_size: usize,
    pub species_count: usize,
    /// Highest score (pipes passed) reached by any agent
    pub best_score: usize,
    /// `None` for an empty population
    pub distance: Option<DistanceStats>,
    pub ticks: usize,
    pub hit_limit: bool,
}

impl GenerationStats {
    /// Collects statistics of a played-out population.
    ///
    /// `agents` must be read before they are handed to
    /// [`Evolution::evolve`](crate::evolution::Evolution::evolve), which
    /// consumes them; the resulting summary is merged afterwards with
    /// [`with_summary`](Self::with_summary).
    #[must_use]
    pub fn collect(generation: usize, agents: &[Agent], outcome: &EpisodeOutcome) -> Self {
        Self {
            generation,
            population_size: agents.len(),
            species_count: 0,
            best_score: agents.iter().map(Agent::score).max().unwrap_or(0),
            distance: DistanceStats::new(agents.iter().map(Agent::distance_traveled)),
            ticks: outcome.ticks,
            hit_limit: outcome.hit_limit,
        }
    }

    #[must_use]
    pub fn with_summary(self, summary: &GenerationSummary) -> Self {
        Self {
            species_count: summary.species_count,
            ..self
        }
    }

    /// Longest distance traveled, or 0 for an empty population.
    #[must_use]
    pub fn best_distance(&self) -> f64 {
        self.distance.map_or(0.0, |d| d.max)
    }
}

#[cfg(test)]
mod tests {
    use flapevo_engine::Bird;
    use rand::SeedableRng as _;
    use rand_pcg::Pcg32;

    use super::*;

    #[test]
    fn test_distance_stats_empty() {
        assert_eq!(DistanceStats::new(Vec::new()), None);
    }

    #[test]
    fn test_distance_stats_single() {
        let stats = DistanceStats::new([7.0]).unwrap();
        assert_eq!(
            stats,
            DistanceStats {
                min: 7.0,
                max: 7.0,
                mean: 7.0,
                median: 7.0,
            }
        );
    }

    #[test]
    fn test_collect_and_merge_summary() {
        let mut rng = Pcg32::seed_from_u64(60);
        let agents: Vec<Agent> = [4.0, 12.0, 8.0]
            .into_iter()
            .map(|distance| {
                let mut agent = Agent::random(&mut rng);
                *agent.bird_mut() = Bird::at(100.0, 300.0);
                agent.bird_mut().advance(distance);
                agent
            })
            .collect();
        let outcome = EpisodeOutcome {
            ticks: 3,
            survivors: 1,
            score: 0,
            hit_limit: true,
        };
        let summary = GenerationSummary {
            species_count: 2,
            best_species_fitness: 12.0,
            champion_fitness: 12.0,
        };

        let stats = GenerationStats::collect(5, &agents, &outcome).with_summary(&summary);
        assert_eq!(stats.generation, 5);
        assert_eq!(stats.population_size, 3);
        assert_eq!(stats.species_count, 2);
        assert_eq!(stats.best_score, 0);
        assert_eq!(stats.best_distance(), 12.0);
        assert_eq!(stats.distance.unwrap().mean, 8.0);
        assert_eq!(stats.ticks, 3);
        assert!(stats.hit_limit);
    }

    #[test]
    fn test_serializes_to_json() {
        let stats = GenerationStats::collect(0, &[], &EpisodeOutcome {
            ticks: 0,
            survivors: 0,
            score: 0,
            hit_limit: false,
        });
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["generation"], 0);
        assert!(json["distance"].is_null());
        assert_eq!(json["hit_limit"], false);
    }
}
