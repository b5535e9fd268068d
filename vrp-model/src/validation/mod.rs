//! This module provides functionality to validate problem definition for logical correctness.
//!
//! All checks are run against the problem: validation never stops on the first violation, so the
//! caller receives a complete list of errors, each of them references the offending entity.

#[cfg(test)]
#[path = "../../tests/unit/validation/validation_test.rs"]
mod validation_test;

use crate::format::problem::*;
use crate::format::{EntityRef, FormatError, MultiFormatError};
use crate::utils::combine_error_results;
use rustc_hash::FxHashMap;

mod common;
use self::common::*;

mod dimensions;
use self::dimensions::validate_dimensions;

mod jobs;
use self::jobs::validate_jobs;

mod objectives;
use self::objectives::validate_objectives;

mod relations;
use self::relations::validate_relations;

mod resources;
use self::resources::validate_resources;

mod routing;
use self::routing::validate_profiles;

mod vehicles;
use self::vehicles::validate_vehicles;

/// Validates problem on set of rules.
pub fn validate_problem(problem: &Problem) -> Result<(), MultiFormatError> {
    ValidationContext::new(problem).validate()
}

/// Keeps data needed by validation rules.
pub struct ValidationContext<'a> {
    /// Original problem.
    pub problem: &'a Problem,

    job_index: FxHashMap<&'a str, &'a Job>,
    vehicle_index: FxHashMap<&'a str, &'a VehicleType>,
    dimension: Option<usize>,
}

impl<'a> ValidationContext<'a> {
    /// Creates an instance of `ValidationContext`.
    pub fn new(problem: &'a Problem) -> Self {
        let job_index = problem.plan.jobs.iter().map(|job| (job.id.as_str(), job)).collect();
        let vehicle_index = problem
            .fleet
            .vehicles
            .iter()
            .flat_map(|vehicle| vehicle.vehicle_ids.iter().map(move |id| (id.as_str(), vehicle)))
            .collect();
        let dimension = get_dimension(problem);

        Self { problem, job_index, vehicle_index, dimension }
    }

    /// Validates problem on set of rules.
    pub fn validate(&self) -> Result<(), MultiFormatError> {
        let result = combine_error_results(&[
            validate_profiles(self),
            validate_dimensions(self),
            validate_jobs(self),
            validate_vehicles(self),
            validate_resources(self),
            validate_relations(self),
            validate_objectives(self),
        ]);

        match result {
            Ok(_) => {
                tracing::debug!(jobs = self.problem.plan.jobs.len(), "problem passed validation");
                Ok(())
            }
            Err(errors) => {
                tracing::warn!(violations = errors.len(), "problem has validation errors");
                Err(MultiFormatError::from(errors))
            }
        }
    }

    /// Returns the global demand dimension: the size of the first vehicle capacity or, when fleet
    /// is empty, the size of the first task demand of any kind.
    pub fn dimension(&self) -> Option<usize> {
        self.dimension
    }

    /// Get list of jobs from the problem.
    fn jobs(&self) -> impl Iterator<Item = &'a Job> {
        self.problem.plan.jobs.iter()
    }

    /// Get list of vehicle types from the problem.
    fn vehicles(&self) -> impl Iterator<Item = &'a VehicleType> {
        self.problem.fleet.vehicles.iter()
    }

    /// Get list of shared resources from the problem.
    fn resources(&self) -> impl Iterator<Item = &'a VehicleResource> {
        self.problem.fleet.resources.iter().flatten()
    }

    /// Returns job by its id.
    fn get_job(&self, job_id: &str) -> Option<&'a Job> {
        self.job_index.get(job_id).copied()
    }

    /// Returns vehicle type by id of concrete vehicle.
    fn get_vehicle_type(&self, vehicle_id: &str) -> Option<&'a VehicleType> {
        self.vehicle_index.get(vehicle_id).copied()
    }
}

fn get_dimension(problem: &Problem) -> Option<usize> {
    problem.fleet.vehicles.first().map(|vehicle| vehicle.capacity.len()).or_else(|| {
        problem
            .plan
            .jobs
            .iter()
            .flat_map(|job| job.all_tasks_iter())
            .find_map(|task| task.demand.as_ref())
            .map(|demand| demand.len())
    })
}
