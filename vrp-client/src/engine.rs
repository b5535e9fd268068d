//! Specifies the boundary to the external solver engine.

use std::future::Future;
use vrp_model::utils::GenericError;

/// An external solver engine which accepts and returns json text.
///
/// Implementations are free to run the engine in process, in a worker or behind a network call.
/// Dropping a returned future must stop waiting for the result: this is how cancellation is
/// propagated to the engine.
pub trait Engine: Send + Sync {
    /// Checks the problem and returns engine diagnostics as an error when it is not acceptable.
    fn validate(&self, problem: String) -> impl Future<Output = Result<(), GenericError>> + Send;

    /// Solves the problem using routing matrices (one json per profile) and solver configuration.
    /// Returns solution in json format.
    fn solve(
        &self,
        problem: String,
        matrices: Vec<String>,
        config: String,
    ) -> impl Future<Output = Result<String, GenericError>> + Send;

    /// Returns json list of unique routing locations in the order used by routing matrix.
    fn get_locations(&self, problem: String) -> impl Future<Output = Result<String, GenericError>> + Send;
}
