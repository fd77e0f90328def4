//! Greedy speciation and species fitness.
//!
//! A [`Species`] groups agents whose genomes are close to a fixed
//! representative. Species are rebuilt from scratch every generation.
//!
//! # Speciation
//!
//! [`speciate`] makes a single pass over the population in input order. Each
//! agent is compared with the representative of every existing species, in
//! creation order, and joins the *first* one whose L1 distance is strictly
//! below the threshold. An agent that matches no species founds a new one
//! and becomes its permanent representative.
//!
//! This is first-fit, not nearest-fit, and representatives never move
//! towards the members' centroid. The grouping therefore depends on the
//! input order, and so do the offspring allotments computed from it.
//!
//! # Fitness
//!
//! [`calculate_fitness`] scores each species by the mean distance traveled
//! by its members, sorts members best first (index 0 is the champion) and
//! then sorts the species best first. Both sorts are stable.

use crate::{agent::Agent, perceptron::Genome};

#[derive(Debug, Clone)]
pub struct Species {
    representative: Genome,
    members: Vec<Agent>,
    average_fitness: f64,
}

impl Species {
    /// Founds a species with `founder` as its only member and representative.
    #[must_use]
    pub fn new(founder: Agent) -> Self {
        Self {
            representative: *founder.genome(),
            members: vec![founder],
            average_fitness: 0.0,
        }
    }

    /// Genome snapshot taken from the founder; never updated.
    #[must_use]
    pub fn representative(&self) -> &Genome {
        &self.representative
    }

    /// Members in clustering order, or best first after [`calculate_fitness`].
    #[must_use]
    pub fn members(&self) -> &[Agent] {
        &self.members
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Mean distance traveled, as of the last [`calculate_fitness`].
    #[must_use]
    pub fn average_fitness(&self) -> f64 {
        self.average_fitness
    }

    /// First member; the best one once fitness has been calculated.
    #[must_use]
    pub fn champion(&self) -> Option<&Agent> {
        self.members.first()
    }

    /// Consumes the species, returning its members.
    #[must_use]
    pub fn into_members(self) -> Vec<Agent> {
        self.members
    }

    fn push(&mut self, agent: Agent) {
        self.members.push(agent);
    }

    fn update_fitness(&mut self) {
        self.average_fitness = if self.members.is_empty() {
            0.0
        } else {
            #[expect(clippy::cast_precision_loss)]
            let n = self.members.len() as f64;
            self.members.iter().map(Agent::distance_traveled).sum::<f64>() / n
        };
        self.members
            .sort_by(|a, b| b.distance_traveled().total_cmp(&a.distance_traveled()));
    }
}

/// Partitions `population` into species, first-fit in input order.
///
/// Every agent ends up in exactly one species. Calling this twice on the same
/// ordered population with the same threshold yields the same grouping.
#[must_use]
pub fn speciate(population: Vec<Agent>, threshold: f64) -> Vec<Species> {
    let mut species: Vec<Species> = Vec::new();
    for agent in population {
        match species
            .iter_mut()
            .find(|s| s.representative.distance(agent.genome()) < threshold)
        {
            Some(s) => s.push(agent),
            None => species.push(Species::new(agent)),
        }
    }
    species
}

/// Computes average fitness and sorts members and species, best first.
pub fn calculate_fitness(species: &mut [Species]) {
    for s in species.iter_mut() {
        s.update_fitness();
    }
    species.sort_by(|a, b| b.average_fitness.total_cmp(&a.average_fitness));
}
