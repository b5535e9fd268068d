use super::*;
use crate::ProblemBuilder;
use crate::helpers::*;
use std::sync::atomic::Ordering;
use vrp_model::format::problem::MatrixProfile;

fn create_valid_problem() -> Arc<Problem> {
    let mut builder = ProblemBuilder::new();
    builder
        .set_profile("car")
        .add_vehicles(vec![create_vehicle_type("truck", "car", vec![10])])
        .add_jobs(vec![create_delivery_job("job1", (0., 0.), vec![3])]);

    builder.snapshot()
}

fn get_solve_requests(engine: &StubEngine) -> Vec<(String, Vec<String>, String)> {
    engine
        .requests()
        .into_iter()
        .filter_map(|request| match request {
            EngineRequest::Solve { problem, matrices, config } => Some((problem, matrices, config)),
            _ => None,
        })
        .collect()
}

#[tokio::test]
async fn can_solve_problem_with_default_config() {
    let problem = create_valid_problem();
    let matrix = create_zero_matrix("car", 1);
    let gateway = EngineGateway::new(StubEngine::default());

    let solution = gateway.solve(problem.clone(), &[matrix.clone()], None).await.unwrap();

    assert_eq!(solution, create_single_tour_solution());
    let requests = get_solve_requests(gateway.engine());
    assert_eq!(requests.len(), 1);
    let (sent_problem, sent_matrices, sent_config) = &requests[0];
    assert_eq!(serde_json::from_str::<Problem>(sent_problem).unwrap(), *problem);
    assert_eq!(sent_matrices, &vec![serialize_matrix(&matrix).unwrap()]);
    assert_eq!(sent_config, r#"{"termination":{"maxTime":10,"maxGeneration":1000}}"#);
}

#[tokio::test]
async fn can_pass_custom_config_to_engine() {
    let gateway = EngineGateway::new(StubEngine::default());

    gateway.solve(create_valid_problem(), &[create_zero_matrix("car", 1)], Some(Config::new(3, 50))).await.unwrap();

    let requests = get_solve_requests(gateway.engine());
    assert_eq!(requests[0].2, r#"{"termination":{"maxTime":3,"maxGeneration":50}}"#);
}

#[tokio::test]
async fn can_reject_invalid_problem_without_calling_engine() {
    let mut builder = ProblemBuilder::new();
    builder.set_profile("car").add_vehicles(vec![create_vehicle_type("truck", "bike", vec![10])]).add_jobs(vec![
        create_delivery_job("job1", (0., 0.), vec![3]),
        create_delivery_job("job1", (1., 0.), vec![3]),
    ]);
    let gateway = EngineGateway::new(StubEngine::default());

    let result = gateway.solve(builder.snapshot(), &[create_zero_matrix("car", 2)], None).await;

    match result {
        Err(GatewayError::Validation(errors)) => {
            assert!(errors.has_code("E1000"));
            assert!(errors.has_code("E1502"));
        }
        other => panic!("unexpected result: {other:?}"),
    }
    assert!(gateway.engine().requests().is_empty());
}

#[tokio::test]
async fn can_detect_missing_matrix() {
    let mut problem = (*create_valid_problem()).clone();
    problem.fleet.profiles.push(MatrixProfile { name: "bike".to_string() });
    let gateway = EngineGateway::new(StubEngine::default());

    let result = gateway.solve(Arc::new(problem), &[create_zero_matrix("car", 1)], None).await;

    match result {
        Err(GatewayError::MissingMatrix(profiles)) => assert_eq!(profiles, vec!["bike".to_string()]),
        other => panic!("unexpected result: {other:?}"),
    }
    assert!(gateway.engine().requests().is_empty());
}

#[tokio::test]
async fn can_propagate_engine_failure() {
    let gateway = EngineGateway::new(StubEngine::with_solve_response(Err("engine is down".into())));

    let result = gateway.solve(create_valid_problem(), &[create_zero_matrix("car", 1)], None).await;

    match result {
        Err(GatewayError::Engine(err)) => assert_eq!(err.to_string(), "engine is down"),
        other => panic!("unexpected result: {other:?}"),
    }
}

parameterized_test! {can_detect_malformed_solution, response, {
    can_detect_malformed_solution_impl(response);
}}

can_detect_malformed_solution! {
    case01_empty_object: "{}",
    case02_not_json: "solution",
    case03_wrong_type: r#"{"statistic":1,"tours":[]}"#,
}

fn can_detect_malformed_solution_impl(response: &str) {
    let gateway = EngineGateway::new(StubEngine::with_solve_response(Ok(response.to_string())));
    let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();

    let result = runtime.block_on(gateway.solve(create_valid_problem(), &[create_zero_matrix("car", 1)], None));

    match result {
        Err(GatewayError::MalformedResponse(errors)) => assert!(errors.has_code("E0002")),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[tokio::test]
async fn can_validate_problem_remotely() {
    let gateway = EngineGateway::new(StubEngine::default());

    gateway.validate_remote(create_valid_problem()).await.unwrap();

    assert!(matches!(gateway.engine().requests().as_slice(), [EngineRequest::Validate { .. }]));
}

#[tokio::test]
async fn can_return_engine_diagnostics() {
    let engine = StubEngine { validate_response: Err("E1105: unknown job".into()), ..StubEngine::default() };
    let gateway = EngineGateway::new(engine);

    let result = gateway.validate_remote(create_valid_problem()).await;

    match result {
        Err(GatewayError::Diagnostics(message)) => assert_eq!(message, "E1105: unknown job"),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[tokio::test]
async fn can_get_routing_locations() {
    let engine = StubEngine {
        locations_response: Ok(r#"[{"lat":1.0,"lng":2.0},{"lat":0.0,"lng":0.0}]"#.to_string()),
        ..StubEngine::default()
    };
    let gateway = EngineGateway::new(engine);

    let locations = gateway.get_routing_locations(create_valid_problem()).await.unwrap();

    assert_eq!(locations, vec![Location::new(1., 2.), Location::new(0., 0.)]);
    assert!(matches!(gateway.engine().requests().as_slice(), [EngineRequest::GetLocations { .. }]));
}

#[tokio::test]
async fn can_detect_malformed_locations() {
    let engine = StubEngine { locations_response: Ok(r#"{"lat":1.0}"#.to_string()), ..StubEngine::default() };
    let gateway = EngineGateway::new(engine);

    let result = gateway.get_routing_locations(create_valid_problem()).await;

    match result {
        Err(GatewayError::MalformedResponse(errors)) => assert!(errors.has_code("E0003")),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[tokio::test]
async fn can_cancel_solving_before_engine_is_called() {
    let gateway = EngineGateway::new(PendingEngine::default());

    let result =
        gateway.solve_with_cancellation(create_valid_problem(), &[create_zero_matrix("car", 1)], None, async {}).await;

    assert_eq!(result.unwrap(), None);
    assert!(!gateway.engine().solve_polled.load(Ordering::SeqCst));
}

#[tokio::test]
async fn can_drop_in_flight_engine_request_on_cancellation() {
    let gateway = EngineGateway::new(PendingEngine::default());
    let cancel = async { tokio::task::yield_now().await };

    let result =
        gateway.solve_with_cancellation(create_valid_problem(), &[create_zero_matrix("car", 1)], None, cancel).await;

    assert_eq!(result.unwrap(), None);
    assert!(gateway.engine().solve_polled.load(Ordering::SeqCst));
    assert!(gateway.engine().solve_dropped.load(Ordering::SeqCst));
}

#[tokio::test]
async fn can_solve_when_cancellation_is_not_requested() {
    let gateway = EngineGateway::new(StubEngine::default());

    let result = gateway
        .solve_with_cancellation(
            create_valid_problem(),
            &[create_zero_matrix("car", 1)],
            None,
            std::future::pending::<()>(),
        )
        .await;

    assert_eq!(result.unwrap(), Some(create_single_tour_solution()));
}
