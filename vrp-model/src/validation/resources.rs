#[cfg(test)]
#[path = "../../tests/unit/validation/resources_test.rs"]
mod resources_test;

use super::*;
use crate::utils::{get_duplicates, to_error_result};
use rustc_hash::FxHashSet;

/// Checks that vehicle reloads reference only declared resources.
fn check_e1400_reload_resource_exists(ctx: &ValidationContext) -> Result<(), Vec<FormatError>> {
    let resource_ids = ctx.resources().map(|resource| resource.id()).collect::<FxHashSet<_>>();

    to_error_result(
        ctx.vehicles()
            .filter_map(|vehicle| {
                let unknown_ids = vehicle
                    .reloads
                    .iter()
                    .flatten()
                    .filter_map(|reload| reload.resource_id.as_deref())
                    .filter(|resource_id| !resource_ids.contains(resource_id))
                    .collect::<Vec<_>>();

                (!unknown_ids.is_empty()).then(|| {
                    FormatError::new_for_entity(
                        "E1400",
                        EntityRef::Vehicle(vehicle.type_id.clone()),
                        format!("reload references unknown resource ids: '{}'", join_ids(unknown_ids.into_iter())),
                        "declare resource in fleet resources or remove resource id from reload".to_string(),
                    )
                })
            })
            .collect(),
    )
}

/// Checks that resource capacity has the same dimension as vehicle capacity.
fn check_e1401_resource_dimension(ctx: &ValidationContext) -> Result<(), Vec<FormatError>> {
    let Some(dimension) = ctx.dimension() else { return Ok(()) };

    to_error_result(
        ctx.resources()
            .filter(|resource| resource.capacity().len() != dimension)
            .map(|resource| {
                FormatError::new_for_entity(
                    "E1401",
                    EntityRef::Resource(resource.id().to_string()),
                    format!("resource capacity has dimension {}, expected {dimension}", resource.capacity().len()),
                    "use the same dimension as vehicle capacity".to_string(),
                )
            })
            .collect(),
    )
}

/// Checks that resource ids are unique.
fn check_e1402_no_resources_with_duplicate_ids(ctx: &ValidationContext) -> Result<(), Vec<FormatError>> {
    to_error_result(
        get_duplicates(ctx.resources().map(|resource| resource.id()))
            .into_iter()
            .map(|resource_id| {
                FormatError::new_for_entity(
                    "E1402",
                    EntityRef::Resource(resource_id.to_string()),
                    "duplicated resource id".to_string(),
                    "remove duplicated resources or change their ids".to_string(),
                )
            })
            .collect(),
    )
}

/// Validates shared vehicle resources.
pub fn validate_resources(ctx: &ValidationContext) -> Result<(), Vec<FormatError>> {
    combine_error_results(&[
        check_e1400_reload_resource_exists(ctx),
        check_e1401_resource_dimension(ctx),
        check_e1402_no_resources_with_duplicate_ids(ctx),
    ])
}
