#[cfg(test)]
#[path = "../../tests/unit/validation/relations_test.rs"]
mod relations_test;

use super::*;
use crate::utils::to_error_result;

fn relations<'a>(ctx: &ValidationContext<'a>) -> impl Iterator<Item = (usize, &'a Relation)> {
    ctx.problem.plan.relations.iter().flatten().enumerate()
}

fn relation_error(code: &str, idx: usize, cause: String, action: &str) -> FormatError {
    FormatError::new_for_entity(code, EntityRef::Relation(idx), cause, action.to_string())
}

/// Checks that relation job ids are defined in plan.
fn check_e1200_job_existence(ctx: &ValidationContext) -> Result<(), Vec<FormatError>> {
    to_error_result(
        relations(ctx)
            .filter_map(|(idx, relation)| {
                let job_ids = relation
                    .jobs
                    .iter()
                    .filter(|job_id| !is_reserved_job_id(job_id))
                    .filter(|job_id| ctx.get_job(job_id).is_none())
                    .collect::<Vec<_>>();

                (!job_ids.is_empty()).then(|| {
                    relation_error(
                        "E1200",
                        idx,
                        format!(
                            "relation has job ids which are not present in the plan: '{}'",
                            join_ids(job_ids.into_iter())
                        ),
                        "remove ids from relation or add jobs to the plan",
                    )
                })
            })
            .collect(),
    )
}

/// Checks that relation vehicle ids are defined in fleet.
fn check_e1201_vehicle_existence(ctx: &ValidationContext) -> Result<(), Vec<FormatError>> {
    to_error_result(
        relations(ctx)
            .filter(|(_, relation)| ctx.get_vehicle_type(&relation.vehicle_id).is_none())
            .map(|(idx, relation)| {
                relation_error(
                    "E1201",
                    idx,
                    format!("relation has vehicle id which is not present in the fleet: '{}'", relation.vehicle_id),
                    "change vehicle id or add vehicle to the fleet",
                )
            })
            .collect(),
    )
}

/// Checks that relation shift index refers to existing vehicle shift.
fn check_e1202_shift_index(ctx: &ValidationContext) -> Result<(), Vec<FormatError>> {
    to_error_result(
        relations(ctx)
            .filter_map(|(idx, relation)| {
                let vehicle = ctx.get_vehicle_type(&relation.vehicle_id)?;
                let shift_index = relation.shift_index.unwrap_or_default();

                (shift_index >= vehicle.shifts.len()).then(|| {
                    relation_error(
                        "E1202",
                        idx,
                        format!(
                            "relation has shift index {shift_index}, but vehicle '{}' has {} shifts",
                            relation.vehicle_id,
                            vehicle.shifts.len()
                        ),
                        "use index of existing vehicle shift",
                    )
                })
            })
            .collect(),
    )
}

/// Checks that relation has at least one job id which is not reserved.
fn check_e1203_no_reserved_only_relations(ctx: &ValidationContext) -> Result<(), Vec<FormatError>> {
    to_error_result(
        relations(ctx)
            .filter(|(_, relation)| relation.jobs.iter().all(|job_id| is_reserved_job_id(job_id)))
            .map(|(idx, _)| {
                relation_error(
                    "E1203",
                    idx,
                    "relation has no job ids except reserved ones".to_string(),
                    "add job ids to relation or remove it",
                )
            })
            .collect(),
    )
}

/// Validates relations in the plan.
pub fn validate_relations(ctx: &ValidationContext) -> Result<(), Vec<FormatError>> {
    combine_error_results(&[
        check_e1200_job_existence(ctx),
        check_e1201_vehicle_existence(ctx),
        check_e1202_shift_index(ctx),
        check_e1203_no_reserved_only_relations(ctx),
    ])
}
