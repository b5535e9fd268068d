//! Contains a builder which assembles a problem definition incrementally.

#[cfg(test)]
#[path = "../tests/unit/builder_test.rs"]
mod builder_test;

use std::sync::Arc;
use vrp_model::format::problem::*;

/// Assembles a problem step by step. The builder owns the problem exclusively: all mutating
/// operations take `&mut self`, so there is no shared state and no locking. Operations only append
/// or overwrite data, they never validate it: use `vrp_model::validation::validate_problem` for that.
pub struct ProblemBuilder {
    problem: Problem,
}

impl Default for ProblemBuilder {
    fn default() -> Self {
        Self {
            problem: Problem {
                plan: Plan { jobs: vec![], relations: None },
                fleet: Fleet {
                    vehicles: vec![],
                    profiles: vec![MatrixProfile { name: String::new() }],
                    resources: None,
                },
                objectives: None,
            },
        }
    }
}

impl ProblemBuilder {
    /// Creates a new builder with an empty plan, no vehicles and a single unnamed profile.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the name of the first routing profile, the profile is created if it is missing.
    pub fn set_profile(&mut self, name: &str) -> &mut Self {
        match self.problem.fleet.profiles.first_mut() {
            Some(profile) => profile.name = name.to_string(),
            None => self.problem.fleet.profiles.push(MatrixProfile { name: name.to_string() }),
        }

        self
    }

    /// Appends vehicle types to the fleet keeping their order.
    pub fn add_vehicles(&mut self, vehicles: impl IntoIterator<Item = VehicleType>) -> &mut Self {
        self.problem.fleet.vehicles.extend(vehicles);
        self
    }

    /// Appends jobs to the plan keeping their order.
    pub fn add_jobs(&mut self, jobs: impl IntoIterator<Item = Job>) -> &mut Self {
        self.problem.plan.jobs.extend(jobs);
        self
    }

    /// Appends job relations to the plan keeping their order.
    pub fn add_relations(&mut self, relations: impl IntoIterator<Item = Relation>) -> &mut Self {
        self.problem.plan.relations.get_or_insert_with(Vec::new).extend(relations);
        self
    }

    /// Appends shared vehicle resources to the fleet keeping their order.
    pub fn add_resources(&mut self, resources: impl IntoIterator<Item = VehicleResource>) -> &mut Self {
        self.problem.fleet.resources.get_or_insert_with(Vec::new).extend(resources);
        self
    }

    /// Replaces objectives, they are listed in lexicographical order of priority.
    pub fn set_objectives(&mut self, objectives: Vec<Objective>) -> &mut Self {
        self.problem.objectives = Some(objectives);
        self
    }

    /// Returns the problem assembled so far.
    pub fn problem(&self) -> &Problem {
        &self.problem
    }

    /// Returns an immutable snapshot of the problem which can be shared with the solver while the
    /// builder keeps being modified.
    pub fn snapshot(&self) -> Arc<Problem> {
        Arc::new(self.problem.clone())
    }

    /// Consumes the builder and returns the problem.
    pub fn build(self) -> Problem {
        self.problem
    }
}
