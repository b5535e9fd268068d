#[cfg(test)]
#[path = "../../tests/unit/validation/objectives_test.rs"]
mod objectives_test;

use super::*;
use crate::utils::to_error_result;

fn objectives<'a>(ctx: &ValidationContext<'a>) -> impl Iterator<Item = (usize, &'a Objective)> {
    ctx.problem.objectives.iter().flatten().enumerate()
}

fn nested_objectives(objective: &Objective) -> &[Objective] {
    match objective {
        Objective::MultiObjective { objectives, .. } => objectives.as_slice(),
        _ => &[],
    }
}

fn objective_error(code: &str, idx: usize, cause: String, action: &str) -> FormatError {
    FormatError::new_for_entity(code, EntityRef::Objective(idx), cause, action.to_string())
}

/// Checks that multi objective uses supported composition strategy.
fn check_e1600_multi_strategy(ctx: &ValidationContext) -> Result<(), Vec<FormatError>> {
    to_error_result(
        objectives(ctx)
            .filter_map(|(idx, objective)| match objective {
                Objective::MultiObjective { strategy, .. } if strategy.name != "sum" => Some(objective_error(
                    "E1600",
                    idx,
                    format!("unsupported multi objective strategy: '{}'", strategy.name),
                    "use 'sum' strategy",
                )),
                _ => None,
            })
            .collect(),
    )
}

/// Checks that multi objective does not contain another multi objective.
fn check_e1601_no_nested_multi_objective(ctx: &ValidationContext) -> Result<(), Vec<FormatError>> {
    to_error_result(
        objectives(ctx)
            .filter(|(_, objective)| nested_objectives(objective).iter().any(Objective::is_multi))
            .map(|(idx, _)| {
                objective_error(
                    "E1601",
                    idx,
                    "multi objective contains another multi objective".to_string(),
                    "flatten nested multi objectives",
                )
            })
            .collect(),
    )
}

/// Checks that objective list and multi objectives are not empty.
fn check_e1602_empty_objectives(ctx: &ValidationContext) -> Result<(), Vec<FormatError>> {
    let empty_list = ctx.problem.objectives.as_ref().filter(|objectives| objectives.is_empty()).map(|_| {
        FormatError::new_for_entity(
            "E1602",
            EntityRef::Problem,
            "an empty objective list specified".to_string(),
            "remove objectives property completely or specify at least one objective".to_string(),
        )
    });

    let empty_multi = objectives(ctx)
        .filter(|(_, objective)| objective.is_multi() && nested_objectives(objective).is_empty())
        .map(|(idx, _)| {
            objective_error("E1602", idx, "multi objective has no objectives".to_string(), "add nested objectives")
        });

    to_error_result(empty_list.into_iter().chain(empty_multi).collect())
}

/// Checks compact tour options.
fn check_e1603_compact_tour_options(ctx: &ValidationContext) -> Result<(), Vec<FormatError>> {
    to_error_result(
        objectives(ctx)
            .filter(|(_, objective)| {
                std::iter::once(*objective)
                    .chain(nested_objectives(objective))
                    .any(|objective| matches!(objective, Objective::CompactTour { options } if options.job_radius < 1))
            })
            .map(|(idx, _)| {
                objective_error(
                    "E1603",
                    idx,
                    "compact tour objective has job radius less than 1".to_string(),
                    "use job radius greater or equal to 1",
                )
            })
            .collect(),
    )
}

/// Validates objective functions.
pub fn validate_objectives(ctx: &ValidationContext) -> Result<(), Vec<FormatError>> {
    combine_error_results(&[
        check_e1600_multi_strategy(ctx),
        check_e1601_no_nested_multi_objective(ctx),
        check_e1602_empty_objectives(ctx),
        check_e1603_compact_tour_options(ctx),
    ])
}
