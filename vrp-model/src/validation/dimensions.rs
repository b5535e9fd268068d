#[cfg(test)]
#[path = "../../tests/unit/validation/dimensions_test.rs"]
mod dimensions_test;

use super::*;
use crate::utils::to_error_result;

/// Checks that vehicle capacities and job demands have the same dimension.
fn check_e1100_dimension_mismatch(ctx: &ValidationContext) -> Result<(), Vec<FormatError>> {
    let Some(dimension) = ctx.dimension() else { return Ok(()) };

    let vehicle_errors = ctx.vehicles().filter(|vehicle| vehicle.capacity.len() != dimension).map(|vehicle| {
        FormatError::new_for_entity(
            "E1100",
            EntityRef::Vehicle(vehicle.type_id.clone()),
            format!("vehicle capacity has dimension {}, expected {dimension}", vehicle.capacity.len()),
            "use the same capacity dimension for all vehicles and demands".to_string(),
        )
    });

    let job_errors = ctx
        .jobs()
        .filter(|job| {
            job.all_tasks_iter().filter_map(|task| task.demand.as_ref()).any(|demand| demand.len() != dimension)
        })
        .map(|job| {
            FormatError::new_for_entity(
                "E1100",
                EntityRef::Job(job.id.clone()),
                format!("job demand dimension differs from expected {dimension}"),
                "use the same demand dimension as vehicle capacity".to_string(),
            )
        });

    to_error_result(vehicle_errors.chain(job_errors).collect())
}

/// Validates consistency of capacity and demand dimensions.
pub fn validate_dimensions(ctx: &ValidationContext) -> Result<(), Vec<FormatError>> {
    check_e1100_dimension_mismatch(ctx)
}
