#[cfg(test)]
#[path = "../../tests/unit/validation/jobs_test.rs"]
mod jobs_test;

use super::*;
use crate::utils::{get_duplicates, to_error_result};

/// Checks that plan has no jobs with duplicate ids.
fn check_e1000_no_jobs_with_duplicate_ids(ctx: &ValidationContext) -> Result<(), Vec<FormatError>> {
    to_error_result(
        get_duplicates(ctx.jobs().map(|job| job.id.as_str()))
            .into_iter()
            .map(|job_id| {
                FormatError::new_for_entity(
                    "E1000",
                    EntityRef::Job(job_id.to_string()),
                    "duplicated job id".to_string(),
                    "remove duplicated jobs or change their ids".to_string(),
                )
            })
            .collect(),
    )
}

/// Checks that each job has at least one task and each task has at least one place.
fn check_e1001_job_has_tasks(ctx: &ValidationContext) -> Result<(), Vec<FormatError>> {
    to_error_result(
        ctx.jobs()
            .filter_map(|job| {
                let cause = if !job.has_tasks() {
                    "job has no pickups, deliveries, replacements or services"
                } else if job.all_tasks_iter().any(|task| task.places.is_empty()) {
                    "job has task without places"
                } else {
                    return None;
                };

                Some(FormatError::new_for_entity(
                    "E1001",
                    EntityRef::Job(job.id.clone()),
                    cause.to_string(),
                    "add at least one task with at least one place to the job".to_string(),
                ))
            })
            .collect(),
    )
}

/// Checks that job place time windows are well-formed.
fn check_e1002_job_time_windows(ctx: &ValidationContext) -> Result<(), Vec<FormatError>> {
    to_error_result(
        ctx.jobs()
            .filter(|job| !job.places_iter().all(|place| check_optional_time_windows(place.times.as_ref())))
            .map(|job| {
                FormatError::new_for_entity(
                    "E1002",
                    EntityRef::Job(job.id.clone()),
                    "job has a time window which is malformed or its start is after its end".to_string(),
                    "specify each time window as [start, end] pair in RFC3339 format with start <= end".to_string(),
                )
            })
            .collect(),
    )
}

/// Checks that each pickup, delivery or replacement task has a demand.
fn check_e1003_task_demand_defined(ctx: &ValidationContext) -> Result<(), Vec<FormatError>> {
    to_error_result(
        ctx.jobs()
            .filter(|job| job.tasks_iter().any(|(kind, task)| kind.has_demand() && task.demand.is_none()))
            .map(|job| {
                FormatError::new_for_entity(
                    "E1003",
                    EntityRef::Job(job.id.clone()),
                    "pickup, delivery or replacement task has no demand".to_string(),
                    "specify demand for each pickup, delivery and replacement task".to_string(),
                )
            })
            .collect(),
    )
}

/// Checks that job numeric properties are in allowed ranges.
fn check_e1004_job_values(ctx: &ValidationContext) -> Result<(), Vec<FormatError>> {
    to_error_result(
        ctx.jobs()
            .filter_map(|job| {
                let mut issues = vec![];

                if job.places_iter().any(|place| place.duration < 0.) {
                    issues.push("negative place duration");
                }
                if job.all_tasks_iter().any(|task| task.demand.iter().flatten().any(|&value| value < 0)) {
                    issues.push("negative demand");
                }
                if job.all_tasks_iter().any(|task| task.order.is_some_and(|order| order < 1)) {
                    issues.push("task order is less than 1");
                }
                if job.value.is_some_and(|value| value < 0.) {
                    issues.push("negative value");
                }

                (!issues.is_empty()).then(|| {
                    FormatError::new_for_entity(
                        "E1004",
                        EntityRef::Job(job.id.clone()),
                        format!("job has invalid values: {}", issues.join(", ")),
                        "use non-negative duration, demand and value, order starts from 1".to_string(),
                    )
                })
            })
            .collect(),
    )
}

/// Checks that job skills do not require and prohibit the same skill.
fn check_e1101_skills_contradiction(ctx: &ValidationContext) -> Result<(), Vec<FormatError>> {
    to_error_result(
        ctx.jobs()
            .filter_map(|job| {
                let contradictions = job.skills.as_ref().map(|skills| skills.get_contradictions()).unwrap_or_default();

                (!contradictions.is_empty()).then(|| {
                    FormatError::new_for_entity(
                        "E1101",
                        EntityRef::Job(job.id.clone()),
                        format!("skills are in both allOf and noneOf: '{}'", join_ids(contradictions.into_iter())),
                        "remove skill either from allOf or from noneOf".to_string(),
                    )
                })
            })
            .collect(),
    )
}

/// Validates jobs from the plan.
pub fn validate_jobs(ctx: &ValidationContext) -> Result<(), Vec<FormatError>> {
    combine_error_results(&[
        check_e1000_no_jobs_with_duplicate_ids(ctx),
        check_e1001_job_has_tasks(ctx),
        check_e1002_job_time_windows(ctx),
        check_e1003_task_demand_defined(ctx),
        check_e1004_job_values(ctx),
        check_e1101_skills_contradiction(ctx),
    ])
}
