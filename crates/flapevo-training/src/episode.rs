use flapevo_engine::World;
use tracing::{debug, instrument};

use crate::{agent::Agent, config::EpisodeLimits};

/// How an episode ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EpisodeOutcome {
    /// Ticks simulated
    pub ticks: usize,
    /// Agents still alive at the end
    pub survivors: usize,
    /// World score (pipes passed) at the end
    pub score: usize,
    /// `true` if a tick or score limit stopped the episode with agents alive
    pub hit_limit: bool,
}

/// Plays one episode with the whole population.
///
/// The world is reset first; the agents are used as they are, so they should
/// come freshly spawned (as [`Evolution`](crate::evolution::Evolution)
/// produces them). Each tick every living agent decides in population order,
/// then the world advances all birds at once.
///
/// The episode ends when no agent is alive, `tick_limit` ticks have passed,
/// or the world score reaches `score_limit`.
#[instrument(level = "debug", skip_all, fields(agents = agents.len()))]
pub fn run_episode(
    world: &mut World,
    agents: &mut [Agent],
    decision_threshold: f64,
    limits: EpisodeLimits,
) -> EpisodeOutcome {
    world.reset();

    let mut survivors = count_alive(agents);
    while survivors > 0 && world.ticks() < limits.tick_limit && world.score() < limits.score_limit {
        for agent in agents.iter_mut().filter(|a| a.is_alive()) {
            let sensors = world.sense(agent.bird());
            agent.decide(sensors, decision_threshold);
        }
        world.step(agents.iter_mut().map(Agent::bird_mut));
        survivors = count_alive(agents);
    }

    let outcome = EpisodeOutcome {
        ticks: world.ticks(),
        survivors,
        score: world.score(),
        hit_limit: survivors > 0,
    };
    debug!(?outcome, "episode finished");
    outcome
}

fn count_alive(agents: &[Agent]) -> usize {
    agents.iter().filter(|a| a.is_alive()).count()
}
