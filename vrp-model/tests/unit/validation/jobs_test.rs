use super::*;
use crate::helpers::*;

fn assert_entities(code: &str, expected: Vec<&str>, result: Result<(), Vec<FormatError>>) {
    let errors = result.err().unwrap_or_default();

    assert!(errors.iter().all(|err| err.code == code));
    assert_eq!(
        errors.into_iter().filter_map(|err| err.entity).collect::<Vec<_>>(),
        expected.into_iter().map(|id| EntityRef::Job(id.to_string())).collect::<Vec<_>>()
    );
}

#[test]
fn can_detect_duplicate_job_ids() {
    let problem = create_problem_with_jobs(vec![
        create_delivery_job("job1", (1., 0.)),
        create_delivery_job("job2", (2., 0.)),
        create_delivery_job("job1", (3., 0.)),
    ]);

    let result = check_e1000_no_jobs_with_duplicate_ids(&ValidationContext::new(&problem));

    assert_entities("E1000", vec!["job1"], result);
}

parameterized_test! {can_detect_job_without_tasks, (job, expected), {
    can_detect_job_without_tasks_impl(job, expected);
}}

can_detect_job_without_tasks! {
    case01_no_tasks: (create_job("job1"), vec!["job1"]),
    case02_empty_tasks: (Job { deliveries: Some(vec![]), pickups: Some(vec![]), ..create_job("job1") }, vec!["job1"]),
    case03_no_places: (Job {
        deliveries: Some(vec![JobTask { places: vec![], demand: Some(vec![1]), order: None }]),
        ..create_job("job1")
    }, vec!["job1"]),
    case04_delivery: (create_delivery_job("job1", (1., 0.)), vec![]),
    case05_service: (create_service_job("job1", (1., 0.)), vec![]),
    case06_replacement: (create_replacement_job("job1", (1., 0.)), vec![]),
}

fn can_detect_job_without_tasks_impl(job: Job, expected: Vec<&str>) {
    let problem = create_problem_with_jobs(vec![job]);

    let result = check_e1001_job_has_tasks(&ValidationContext::new(&problem));

    assert_entities("E1001", expected, result);
}

parameterized_test! {can_detect_invalid_job_time_windows, (times, expected), {
    can_detect_invalid_job_time_windows_impl(times, expected);
}}

can_detect_invalid_job_time_windows! {
    case01_valid: (Some(vec![vec![format_time(0), format_time(10)]]), vec![]),
    case02_many_valid: (
        Some(vec![vec![format_time(0), format_time(10)], vec![format_time(20), format_time(30)]]),
        vec![]
    ),
    case03_inverted: (Some(vec![vec![format_time(10), format_time(0)]]), vec!["job1"]),
    case04_single_value: (Some(vec![vec![format_time(10)]]), vec!["job1"]),
    case05_malformed: (Some(vec![vec!["10".to_string(), format_time(20)]]), vec!["job1"]),
    case06_absent: (None, vec![]),
    case07_sub_second_inverted: (
        Some(vec![to_strings(vec!["2020-07-04T09:00:00.9Z", "2020-07-04T09:00:00.1Z"])]),
        vec!["job1"]
    ),
    case08_sub_second_valid: (
        Some(vec![to_strings(vec!["2020-07-04T09:00:00.1Z", "2020-07-04T09:00:00.9Z"])]),
        vec![]
    ),
}

fn can_detect_invalid_job_time_windows_impl(times: Option<Vec<Vec<String>>>, expected: Vec<&str>) {
    let mut job = create_delivery_job("job1", (1., 0.));
    job.deliveries.as_mut().unwrap()[0].places[0].times = times;
    let problem = create_problem_with_jobs(vec![job]);

    let result = check_e1002_job_time_windows(&ValidationContext::new(&problem));

    assert_entities("E1002", expected, result);
}

#[test]
fn can_detect_missing_demand() {
    let mut pickup = create_pickup_job("job1", (1., 0.));
    pickup.pickups.as_mut().unwrap()[0].demand = None;
    let problem = create_problem_with_jobs(vec![pickup, create_service_job("job2", (2., 0.))]);

    let result = check_e1003_task_demand_defined(&ValidationContext::new(&problem));

    assert_entities("E1003", vec!["job1"], result);
}

parameterized_test! {can_detect_invalid_job_values, (duration, demand, order, value, expected), {
    can_detect_invalid_job_values_impl(duration, demand, order, value, expected);
}}

can_detect_invalid_job_values! {
    case01_valid: (1., vec![1], Some(1), Some(0.), None),
    case02_negative_duration: (-1., vec![1], None, None, Some("duration")),
    case03_negative_demand: (1., vec![-1], None, None, Some("demand")),
    case04_zero_order: (1., vec![1], Some(0), None, Some("order")),
    case05_negative_value: (1., vec![1], None, Some(-5.), Some("value")),
}

fn can_detect_invalid_job_values_impl(
    duration: f64,
    demand: Vec<i32>,
    order: Option<i32>,
    value: Option<f64>,
    expected: Option<&str>,
) {
    let job = Job {
        deliveries: Some(vec![JobTask {
            places: vec![JobPlace { duration, ..create_job_place((1., 0.), None) }],
            demand: Some(demand),
            order,
        }]),
        value,
        ..create_job("job1")
    };
    let problem = create_problem_with_jobs(vec![job]);

    let result = check_e1004_job_values(&ValidationContext::new(&problem));

    match expected {
        Some(issue) => {
            let errors = result.unwrap_err();
            assert_eq!(errors.len(), 1);
            assert_eq!(errors[0].code, "E1004");
            assert!(errors[0].cause.contains(issue));
        }
        None => assert!(result.is_ok()),
    }
}

#[test]
fn can_detect_skills_contradiction() {
    let contradicting = create_job_skills(Some(vec!["a", "b"]), None, Some(vec!["b"]));
    let consistent = create_job_skills(Some(vec!["a"]), None, Some(vec!["b"]));
    let problem = create_problem_with_jobs(vec![
        create_delivery_job_with_skills("job1", (1., 0.), contradicting),
        create_delivery_job_with_skills("job2", (1., 0.), consistent),
    ]);

    let result = check_e1101_skills_contradiction(&ValidationContext::new(&problem));

    assert_entities("E1101", vec!["job1"], result.clone());
    assert!(result.unwrap_err()[0].cause.contains("'b'"));
}

#[test]
fn can_accept_valid_jobs() {
    let problem = create_problem_with_jobs(vec![
        create_delivery_job("job1", (1., 0.)),
        create_pickup_delivery_job("job2", (2., 0.), (3., 0.)),
        create_service_job("job3", (4., 0.)),
        create_delivery_job_with_times("job4", (5., 0.), vec![(0, 100), (200, 300)]),
    ]);

    assert!(validate_jobs(&ValidationContext::new(&problem)).is_ok());
}
