use super::*;
use crate::format::problem::*;
use crate::helpers::*;
use proptest::prelude::*;

fn loc(lat: f64, lng: f64) -> Location {
    Location::new(lat, lng)
}

#[test]
fn can_collect_locations_in_first_seen_order() {
    let problem = Problem {
        plan: Plan {
            jobs: vec![
                create_delivery_job("job1", (5., 5.)),
                create_pickup_delivery_job("job2", (1., 1.), (6., 6.)),
                create_service_job("job3", (5., 5.)),
            ],
            relations: None,
        },
        fleet: Fleet {
            vehicles: vec![VehicleType {
                shifts: vec![create_default_vehicle_shift_with_locations((1., 1.), (2., 2.))],
                ..create_default_vehicle_type()
            }],
            ..create_default_fleet()
        },
        objectives: None,
    };

    let index = CoordIndex::new(&problem);

    assert_eq!(index.unique(), vec![loc(1., 1.), loc(2., 2.), loc(5., 5.), loc(6., 6.)]);
    assert_eq!(index.len(), 4);
    assert_eq!(index.get_by_loc(&loc(5., 5.)), Some(2));
    assert_eq!(index.get_by_idx(3), Some(loc(6., 6.)));
    assert_eq!(index.get_by_idx(4), None);
}

#[test]
fn can_visit_fleet_places_before_jobs() {
    let shift = VehicleShift {
        breaks: Some(vec![
            VehicleBreak::Optional {
                time: format!("{},{}", format_time(10), format_time(20)),
                places: vec![
                    VehicleOptionalBreakPlace { duration: 1., location: None, times: None, tag: None },
                    VehicleOptionalBreakPlace { duration: 1., location: Some(loc(3., 3.)), times: None, tag: None },
                ],
                policy: None,
            },
        ]),
        ..create_default_open_vehicle_shift()
    };
    let vehicle = VehicleType {
        shifts: vec![shift],
        reloads: Some(vec![VehicleReload {
            location: loc(4., 4.),
            duration: 1.,
            times: None,
            tag: None,
            resource_id: None,
        }]),
        recharges: Some(VehicleRecharges {
            max_distance: 100.,
            stations: vec![VehicleRechargeStation { location: loc(7., 7.), duration: 1., times: None, tag: None }],
        }),
        ..create_default_vehicle_type()
    };
    let problem = Problem {
        plan: Plan {
            jobs: vec![create_delivery_job("job1", (4., 4.)), create_delivery_job("job2", (8., 8.))],
            relations: None,
        },
        fleet: Fleet { vehicles: vec![vehicle], ..create_default_fleet() },
        objectives: None,
    };

    let locations = CoordIndex::new(&problem).unique();

    assert_eq!(locations, vec![loc(0., 0.), loc(3., 3.), loc(4., 4.), loc(7., 7.), loc(8., 8.)]);
}

#[test]
fn can_return_empty_index_for_empty_problem() {
    let problem = Problem { fleet: Fleet { vehicles: vec![], ..create_default_fleet() }, ..create_empty_problem() };

    let index = CoordIndex::new(&problem);

    assert!(index.is_empty());
    assert!(crate::get_locations(&problem).is_empty());
}

#[test]
fn can_serialize_locations_in_the_same_order() {
    let problem = create_problem_with_jobs(vec![create_delivery_job("job1", (1., 2.))]);

    let json = crate::get_locations_serialized(&problem).unwrap();
    let locations = deserialize_locations(std::io::BufReader::new(json.as_bytes())).unwrap();

    assert_eq!(locations, vec![loc(0., 0.), loc(1., 2.)]);
}

fn rebuild_locations(problem: &Problem, negate_zeros: bool) -> Problem {
    let rebuild = |location: &mut Location| {
        let (lat, lng) = location.to_lat_lng();
        let flip = |value: f64| if negate_zeros && value == 0. { -0. } else { value };
        *location = Location::new(flip(lat), flip(lng));
    };
    let mut problem = problem.clone();

    problem.fleet.vehicles.iter_mut().flat_map(|vehicle| vehicle.shifts.iter_mut()).for_each(|shift| {
        rebuild(&mut shift.start.location);
        shift.end.iter_mut().for_each(|end| rebuild(&mut end.location));
    });
    for job in problem.plan.jobs.iter_mut() {
        for tasks in [&mut job.pickups, &mut job.deliveries, &mut job.replacements, &mut job.services] {
            tasks.iter_mut().flatten().flat_map(|task| task.places.iter_mut()).for_each(|place| {
                rebuild(&mut place.location);
            });
        }
    }

    problem
}

#[test]
fn can_extract_same_locations_from_equal_problems_built_differently() {
    let problem = create_problem_with_jobs(vec![
        create_delivery_job("job1", (3., 0.)),
        create_delivery_job("job2", (-0., 2.)),
        create_pickup_delivery_job("job3", (0., 2.), (0., 0.)),
    ]);
    let rebuilt = rebuild_locations(&problem, true);

    let original = crate::get_locations(&problem);
    let other = crate::get_locations(&rebuilt);

    assert_eq!(original, vec![loc(0., 0.), loc(3., 0.), loc(0., 2.)]);
    assert_eq!(original, other);
    assert_eq!(original.len(), other.len());
    let index = CoordIndex::new(&rebuilt);
    original.iter().enumerate().for_each(|(idx, location)| assert_eq!(index.get_by_loc(location), Some(idx)));
}

proptest! {
    #[test]
    fn can_extract_locations_deterministically(coords in prop::collection::vec((-5..5_i32, -5..5_i32), 0..20)) {
        let jobs = coords
            .iter()
            .enumerate()
            .map(|(idx, (lat, lng))| create_delivery_job(&format!("job{idx}"), (*lat as f64, *lng as f64)))
            .collect::<Vec<_>>();
        let problem = create_problem_with_jobs(jobs);

        let first = crate::get_locations(&problem);
        let second = crate::get_locations(&problem);
        let rebuilt = crate::get_locations(&rebuild_locations(&problem, true));

        prop_assert_eq!(&first, &second);
        prop_assert_eq!(&first, &rebuilt);
        prop_assert_eq!(first.iter().collect::<rustc_hash::FxHashSet<_>>().len(), first.len());
        prop_assert_eq!(first[0], loc(0., 0.));
        for (lat, lng) in coords {
            prop_assert!(first.contains(&loc(lat as f64, lng as f64)));
        }
    }
}
