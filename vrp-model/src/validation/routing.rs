#[cfg(test)]
#[path = "../../tests/unit/validation/routing_test.rs"]
mod routing_test;

use super::*;
use crate::utils::{get_duplicates, to_error_result};
use rustc_hash::FxHashSet;

/// Checks that fleet has at least one routing profile.
fn check_e1500_empty_profiles(ctx: &ValidationContext) -> Result<(), Vec<FormatError>> {
    if ctx.problem.fleet.profiles.is_empty() {
        Err(vec![FormatError::new_for_entity(
            "E1500",
            EntityRef::Problem,
            "empty profile collection".to_string(),
            "specify at least one profile".to_string(),
        )])
    } else {
        Ok(())
    }
}

/// Checks that profile names are unique.
fn check_e1501_duplicated_profiles(ctx: &ValidationContext) -> Result<(), Vec<FormatError>> {
    to_error_result(
        get_duplicates(ctx.problem.fleet.profiles.iter().map(|profile| profile.name.as_str()))
            .into_iter()
            .map(|name| {
                FormatError::new_for_entity(
                    "E1501",
                    EntityRef::Profile(name.to_string()),
                    "duplicate profile names".to_string(),
                    "remove duplicates of profiles with the same name".to_string(),
                )
            })
            .collect(),
    )
}

/// Checks that each vehicle uses a declared profile.
fn check_e1502_profiles_exist(ctx: &ValidationContext) -> Result<(), Vec<FormatError>> {
    let known_profiles =
        ctx.problem.fleet.profiles.iter().map(|profile| profile.name.as_str()).collect::<FxHashSet<_>>();

    to_error_result(
        ctx.vehicles()
            .filter(|vehicle| !known_profiles.contains(vehicle.profile.matrix.as_str()))
            .map(|vehicle| {
                FormatError::new_for_entity(
                    "E1502",
                    EntityRef::Vehicle(vehicle.type_id.clone()),
                    format!("vehicle uses unknown profile: '{}'", vehicle.profile.matrix),
                    "declare profile in fleet profiles or change vehicle profile".to_string(),
                )
            })
            .collect(),
    )
}

/// Validates routing profiles.
pub fn validate_profiles(ctx: &ValidationContext) -> Result<(), Vec<FormatError>> {
    combine_error_results(&[
        check_e1500_empty_profiles(ctx),
        check_e1501_duplicated_profiles(ctx),
        check_e1502_profiles_exist(ctx),
    ])
}
