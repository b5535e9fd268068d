use super::format_time;
use crate::format::Location;
use crate::format::problem::*;

pub fn create_job_place(location: (f64, f64), tag: Option<String>) -> JobPlace {
    JobPlace { times: None, location: Location::new(location.0, location.1), duration: 1., tag }
}

pub fn create_task(location: (f64, f64), tag: Option<String>) -> JobTask {
    JobTask { places: vec![create_job_place(location, tag)], demand: Some(vec![1]), order: None }
}

pub fn create_job(id: &str) -> Job {
    Job {
        id: id.to_string(),
        pickups: None,
        deliveries: None,
        replacements: None,
        services: None,
        skills: None,
        value: None,
        group: None,
        compatibility: None,
    }
}

pub fn create_delivery_job(id: &str, location: (f64, f64)) -> Job {
    Job { deliveries: Some(vec![create_task(location, None)]), ..create_job(id) }
}

pub fn create_delivery_job_with_demand(id: &str, location: (f64, f64), demand: Vec<i32>) -> Job {
    Job { deliveries: Some(vec![JobTask { demand: Some(demand), ..create_task(location, None) }]), ..create_job(id) }
}

pub fn create_delivery_job_with_times(id: &str, location: (f64, f64), times: Vec<(i64, i64)>) -> Job {
    Job {
        deliveries: Some(vec![JobTask {
            places: vec![JobPlace { times: convert_times(&times), ..create_job_place(location, None) }],
            ..create_task(location, None)
        }]),
        ..create_job(id)
    }
}

pub fn create_delivery_job_with_skills(id: &str, location: (f64, f64), skills: JobSkills) -> Job {
    Job { skills: Some(skills), ..create_delivery_job(id, location) }
}

pub fn create_pickup_job(id: &str, location: (f64, f64)) -> Job {
    Job { pickups: Some(vec![create_task(location, None)]), ..create_job(id) }
}

pub fn create_replacement_job(id: &str, location: (f64, f64)) -> Job {
    Job { replacements: Some(vec![create_task(location, None)]), ..create_job(id) }
}

pub fn create_service_job(id: &str, location: (f64, f64)) -> Job {
    Job { services: Some(vec![JobTask { demand: None, ..create_task(location, None) }]), ..create_job(id) }
}

pub fn create_pickup_delivery_job(id: &str, pickup_location: (f64, f64), delivery_location: (f64, f64)) -> Job {
    Job {
        pickups: Some(vec![create_task(pickup_location, Some("p1".to_string()))]),
        deliveries: Some(vec![create_task(delivery_location, Some("d1".to_string()))]),
        ..create_job(id)
    }
}

pub fn create_job_skills(
    all_of: Option<Vec<&str>>,
    one_of: Option<Vec<&str>>,
    none_of: Option<Vec<&str>>,
) -> JobSkills {
    JobSkills {
        all_of: all_of.map(super::to_strings),
        one_of: one_of.map(super::to_strings),
        none_of: none_of.map(super::to_strings),
    }
}

pub fn convert_times(times: &[(i64, i64)]) -> Option<Vec<Vec<String>>> {
    if times.is_empty() {
        None
    } else {
        Some(times.iter().map(|tw| vec![format_time(tw.0), format_time(tw.1)]).collect())
    }
}

pub fn create_default_vehicle_shift() -> VehicleShift {
    create_default_vehicle_shift_with_locations((0., 0.), (0., 0.))
}

pub fn create_default_open_vehicle_shift() -> VehicleShift {
    VehicleShift {
        start: ShiftStart { earliest: format_time(0), latest: None, location: Location::new(0., 0.) },
        end: None,
        breaks: None,
    }
}

pub fn create_default_vehicle_shift_with_locations(start: (f64, f64), end: (f64, f64)) -> VehicleShift {
    VehicleShift {
        start: ShiftStart { earliest: format_time(0), latest: None, location: Location::new(start.0, start.1) },
        end: Some(ShiftEnd { earliest: None, latest: format_time(1000), location: Location::new(end.0, end.1) }),
        breaks: None,
    }
}

pub fn create_default_vehicle_costs() -> VehicleCosts {
    VehicleCosts { fixed: 10., distance: 1., time: 1. }
}

pub fn create_default_vehicle_profile() -> VehicleProfile {
    VehicleProfile { matrix: "car".to_string(), scale: None }
}

pub fn create_default_vehicle_type() -> VehicleType {
    create_default_vehicle("my_vehicle")
}

pub fn create_default_vehicle(id: &str) -> VehicleType {
    create_vehicle_with_capacity(id, vec![10])
}

pub fn create_vehicle_with_capacity(id: &str, capacity: Vec<i32>) -> VehicleType {
    VehicleType {
        type_id: id.to_string(),
        vehicle_ids: vec![format!("{id}_1")],
        profile: create_default_vehicle_profile(),
        costs: create_default_vehicle_costs(),
        shifts: vec![create_default_vehicle_shift()],
        capacity,
        skills: None,
        limits: None,
        reloads: None,
        recharges: None,
    }
}

pub fn create_default_fleet() -> Fleet {
    Fleet {
        vehicles: vec![create_default_vehicle_type()],
        profiles: vec![MatrixProfile { name: "car".to_string() }],
        resources: None,
    }
}

pub fn create_empty_plan() -> Plan {
    Plan { jobs: vec![], relations: None }
}

pub fn create_empty_problem() -> Problem {
    Problem { plan: create_empty_plan(), fleet: create_default_fleet(), objectives: None }
}

pub fn create_problem_with_jobs(jobs: Vec<Job>) -> Problem {
    Problem { plan: Plan { jobs, relations: None }, ..create_empty_problem() }
}

pub fn create_problem_with_vehicles(vehicles: Vec<VehicleType>) -> Problem {
    Problem { fleet: Fleet { vehicles, ..create_default_fleet() }, ..create_empty_problem() }
}

pub fn create_relation(
    type_field: RelationType,
    jobs: Vec<&str>,
    vehicle_id: &str,
    shift_index: Option<usize>,
) -> Relation {
    Relation { type_field, jobs: super::to_strings(jobs), vehicle_id: vehicle_id.to_string(), shift_index }
}

pub fn create_matrix(profile: &str, size: usize) -> Matrix {
    Matrix {
        matrix: profile.to_string(),
        timestamp: None,
        travel_times: vec![1; size * size],
        distances: vec![1; size * size],
        error_codes: None,
    }
}
