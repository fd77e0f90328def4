use chrono::{DateTime, Utc};
use flapevo_engine::CourseSeed;
use flapevo_training::{
    config::{EpisodeLimits, EvolutionConfig},
    stats::GenerationStats,
};
use serde::Serialize;

/// Result of a `train` run.
#[derive(Debug, Clone, Serialize)]
pub struct TrainingReport {
    pub trained_at: DateTime<Utc>,
    pub config: EvolutionConfig,
    pub limits: EpisodeLimits,
    pub course_seed: CourseSeed,
    pub distance_target: f64,
    pub target_reached: bool,
    pub generations: Vec<GenerationStats>,
}
