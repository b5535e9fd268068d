//! An asynchronous gateway which marshals problem to the external solver engine and parses its
//! responses back.

#[cfg(test)]
#[path = "../tests/unit/gateway_test.rs"]
mod gateway_test;

use crate::config::Config;
use crate::engine::Engine;
use rustc_hash::FxHashSet;
use std::future::Future;
use std::io::BufReader;
use std::sync::Arc;
use thiserror::Error;
use vrp_model::format::{Location, MultiFormatError};
use vrp_model::format::problem::{Matrix, Problem, deserialize_locations, serialize_matrix, serialize_problem};
use vrp_model::format::solution::{Solution, deserialize_solution};
use vrp_model::utils::GenericError;
use vrp_model::validation::validate_problem;

/// An error returned by the gateway.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Problem has not passed local validation.
    #[error("problem has validation errors:\n{0}")]
    Validation(MultiFormatError),

    /// Engine has rejected the problem.
    #[error("engine has rejected problem: {0}")]
    Diagnostics(String),

    /// There is no routing matrix for some of the declared profiles.
    #[error("no routing matrix for profiles: '{}'", .0.join(", "))]
    MissingMatrix(Vec<String>),

    /// Request cannot be serialized.
    #[error("cannot serialize request: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Engine has returned a response which cannot be parsed.
    #[error("cannot parse engine response: {0}")]
    MalformedResponse(MultiFormatError),

    /// Engine has failed to process the request.
    #[error("engine failure: {0}")]
    Engine(GenericError),
}

/// Sends problem snapshots to the engine. Each operation takes an immutable snapshot of the
/// problem, so independent operations can run concurrently. Failures are returned as they are:
/// there is no retry and no timeout other than the one specified in solver configuration.
pub struct EngineGateway<E: Engine> {
    engine: E,
}

impl<E: Engine> EngineGateway<E> {
    /// Creates a new instance of `EngineGateway`.
    pub fn new(engine: E) -> Self {
        Self { engine }
    }

    /// Returns the underlying engine.
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Asks the engine to validate the problem.
    pub async fn validate_remote(&self, problem: Arc<Problem>) -> Result<(), GatewayError> {
        let problem = serialize_problem(&problem)?;

        self.engine.validate(problem).await.map_err(|err| {
            tracing::warn!("engine has rejected problem");
            GatewayError::Diagnostics(err.message().to_string())
        })
    }

    /// Asks the engine for unique routing locations in the order used by routing matrix.
    pub async fn get_routing_locations(&self, problem: Arc<Problem>) -> Result<Vec<Location>, GatewayError> {
        let problem = serialize_problem(&problem)?;

        let response = self.engine.get_locations(problem).await.map_err(|err| {
            tracing::warn!(%err, "engine has failed to return routing locations");
            GatewayError::Engine(err)
        })?;

        let locations =
            deserialize_locations(BufReader::new(response.as_bytes())).map_err(GatewayError::MalformedResponse)?;
        tracing::debug!(locations = locations.len(), "received routing locations");

        Ok(locations)
    }

    /// Solves the problem with given routing matrices. The problem is validated locally before it
    /// is sent to the engine. When config is omitted, the default one is used.
    pub async fn solve(
        &self,
        problem: Arc<Problem>,
        matrices: &[Matrix],
        config: Option<Config>,
    ) -> Result<Solution, GatewayError> {
        validate_problem(&problem).map_err(GatewayError::Validation)?;
        check_matrices(&problem, matrices)?;

        let config = config.unwrap_or_default();
        let request = serialize_problem(&problem)?;
        let matrices = matrices.iter().map(serialize_matrix).collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(
            jobs = problem.plan.jobs.len(),
            vehicles = problem.fleet.vehicles.len(),
            matrices = matrices.len(),
            max_time = config.termination.max_time,
            max_generation = config.termination.max_generation,
            "sending problem to engine"
        );

        let response = self.engine.solve(request, matrices, config.to_json()?).await.map_err(|err| {
            tracing::warn!(%err, "engine has failed to solve problem");
            GatewayError::Engine(err)
        })?;

        let solution =
            deserialize_solution(BufReader::new(response.as_bytes())).map_err(GatewayError::MalformedResponse)?;

        tracing::info!(
            tours = solution.tours.len(),
            unassigned = solution.unassigned.as_ref().map_or(0, |unassigned| unassigned.len()),
            cost = solution.statistic.cost,
            "problem is solved"
        );

        Ok(solution)
    }

    /// Solves the problem unless `cancel` future completes first. In that case, the in-flight
    /// engine request is dropped and `None` is returned: there is no partial solution.
    pub async fn solve_with_cancellation(
        &self,
        problem: Arc<Problem>,
        matrices: &[Matrix],
        config: Option<Config>,
        cancel: impl Future<Output = ()>,
    ) -> Result<Option<Solution>, GatewayError> {
        tokio::select! {
            biased;

            _ = cancel => {
                tracing::info!("solving is cancelled");
                Ok(None)
            }
            result = self.solve(problem, matrices, config) => result.map(Some),
        }
    }
}

/// Checks that there is a routing matrix for each declared profile.
fn check_matrices(problem: &Problem, matrices: &[Matrix]) -> Result<(), GatewayError> {
    let available = matrices.iter().map(|matrix| matrix.matrix.as_str()).collect::<FxHashSet<_>>();

    let missing = problem
        .fleet
        .profiles
        .iter()
        .map(|profile| profile.name.as_str())
        .filter(|name| !available.contains(name))
        .map(|name| name.to_string())
        .collect::<Vec<_>>();

    if missing.is_empty() { Ok(()) } else { Err(GatewayError::MissingMatrix(missing)) }
}
