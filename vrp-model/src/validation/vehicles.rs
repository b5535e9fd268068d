#[cfg(test)]
#[path = "../../tests/unit/validation/vehicles_test.rs"]
mod vehicles_test;

use super::*;
use crate::parse_time;
use crate::utils::{get_duplicates, to_error_result};

/// Checks that fleet has no vehicle types or vehicles with duplicate ids.
fn check_e1300_no_vehicles_with_duplicate_ids(ctx: &ValidationContext) -> Result<(), Vec<FormatError>> {
    let type_ids = get_duplicates(ctx.vehicles().map(|vehicle| vehicle.type_id.as_str()));
    let vehicle_ids = get_duplicates(ctx.vehicles().flat_map(|vehicle| vehicle.vehicle_ids.iter()));

    let type_errors = type_ids.into_iter().map(|type_id| {
        FormatError::new_for_entity(
            "E1300",
            EntityRef::Vehicle(type_id.to_string()),
            "duplicated vehicle type id".to_string(),
            "remove duplicated vehicle types or change their ids".to_string(),
        )
    });

    let vehicle_errors = vehicle_ids.into_iter().filter_map(|vehicle_id| {
        let vehicle = ctx.vehicles().find(|vehicle| vehicle.vehicle_ids.contains(vehicle_id))?;

        Some(FormatError::new_for_entity(
            "E1300",
            EntityRef::Vehicle(vehicle.type_id.clone()),
            format!("duplicated vehicle id: '{vehicle_id}'"),
            "use unique vehicle ids across all vehicle types".to_string(),
        ))
    });

    to_error_result(type_errors.chain(vehicle_errors).collect())
}

/// Checks that each vehicle type has at least one shift.
fn check_e1301_vehicle_has_shifts(ctx: &ValidationContext) -> Result<(), Vec<FormatError>> {
    to_error_result(
        ctx.vehicles()
            .filter(|vehicle| vehicle.shifts.is_empty())
            .map(|vehicle| {
                FormatError::new_for_entity(
                    "E1301",
                    EntityRef::Vehicle(vehicle.type_id.clone()),
                    "vehicle type has no shifts".to_string(),
                    "specify at least one shift".to_string(),
                )
            })
            .collect(),
    )
}

/// Checks shift, reload and recharge station time windows.
fn check_e1302_shift_time_windows(ctx: &ValidationContext) -> Result<(), Vec<FormatError>> {
    to_error_result(
        ctx.vehicles()
            .filter_map(|vehicle| {
                let mut issues = vehicle
                    .shifts
                    .iter()
                    .enumerate()
                    .filter(|(_, shift)| !is_valid_shift_time(shift))
                    .map(|(idx, _)| format!("shift #{idx} time"))
                    .collect::<Vec<_>>();

                if !vehicle.reloads.iter().flatten().all(|reload| check_optional_time_windows(reload.times.as_ref())) {
                    issues.push("reload time windows".to_string());
                }

                let mut stations = vehicle.recharges.iter().flat_map(|recharges| recharges.stations.iter());
                if !stations.all(|station| check_optional_time_windows(station.times.as_ref())) {
                    issues.push("recharge station time windows".to_string());
                }

                (!issues.is_empty()).then(|| {
                    FormatError::new_for_entity(
                        "E1302",
                        EntityRef::Vehicle(vehicle.type_id.clone()),
                        format!("vehicle type has invalid {}", issues.join(", ")),
                        "use RFC3339 times, ensure earliest is not after latest and start is not after end"
                            .to_string(),
                    )
                })
            })
            .collect(),
    )
}

fn is_valid_shift_time(shift: &VehicleShift) -> bool {
    let start = &shift.start;
    let Ok(start_earliest) = parse_time(&start.earliest) else { return false };

    let start_valid = start.latest.as_ref().is_none_or(|latest| get_time_window(&start.earliest, latest).is_some());
    let end_valid = shift.end.as_ref().is_none_or(|end| {
        let end_earliest = end.earliest.as_deref().unwrap_or(start.earliest.as_str());

        get_time_window(end_earliest, &end.latest).is_some()
            && parse_time(&end.latest).is_ok_and(|end_latest| start_earliest <= end_latest)
    });

    start_valid && end_valid
}

/// Checks that shift breaks are either all required or all optional.
fn check_e1303_no_mixed_breaks(ctx: &ValidationContext) -> Result<(), Vec<FormatError>> {
    to_error_result(
        ctx.vehicles()
            .filter_map(|vehicle| {
                let shift_ids = vehicle
                    .shifts
                    .iter()
                    .enumerate()
                    .filter(|(_, shift)| {
                        let breaks = shift.breaks.as_deref().unwrap_or_default();
                        let required = breaks.iter().filter(|vehicle_break| vehicle_break.is_required()).count();

                        required > 0 && required < breaks.len()
                    })
                    .map(|(idx, _)| idx)
                    .collect::<Vec<_>>();

                (!shift_ids.is_empty()).then(|| {
                    FormatError::new_for_entity(
                        "E1303",
                        EntityRef::Vehicle(vehicle.type_id.clone()),
                        format!("required and optional breaks are mixed in shifts: {}", join_ids(shift_ids.iter())),
                        "use only one break kind within the same shift".to_string(),
                    )
                })
            })
            .collect(),
    )
}

/// Checks break time definitions and break place time windows.
fn check_e1304_break_times(ctx: &ValidationContext) -> Result<(), Vec<FormatError>> {
    to_error_result(
        ctx.vehicles()
            .filter_map(|vehicle| {
                let shift_ids = vehicle
                    .shifts
                    .iter()
                    .enumerate()
                    .filter(|(_, shift)| {
                        shift.breaks.iter().flatten().any(|vehicle_break| {
                            let time_valid = vehicle_break.break_time().is_ok_and(|time| time.is_valid());
                            let places_valid = match vehicle_break {
                                VehicleBreak::Optional { places, .. } => {
                                    places.iter().all(|place| check_optional_time_windows(place.times.as_ref()))
                                }
                                VehicleBreak::Required { .. } => true,
                            };

                            !(time_valid && places_valid)
                        })
                    })
                    .map(|(idx, _)| idx)
                    .collect::<Vec<_>>();

                (!shift_ids.is_empty()).then(|| {
                    FormatError::new_for_entity(
                        "E1304",
                        EntityRef::Vehicle(vehicle.type_id.clone()),
                        format!("invalid break time in shifts: {}", join_ids(shift_ids.iter())),
                        "use '<earliest>,<latest>' in RFC3339 or seconds, or a single RFC3339 time, earliest <= latest"
                            .to_string(),
                    )
                })
            })
            .collect(),
    )
}

/// Checks that vehicle numeric properties are not negative.
fn check_e1305_vehicle_values(ctx: &ValidationContext) -> Result<(), Vec<FormatError>> {
    to_error_result(
        ctx.vehicles()
            .filter_map(|vehicle| {
                let is_negative = |value: f64| value < 0.;
                let mut issues = vec![];

                let costs = &vehicle.costs;
                if [costs.fixed, costs.distance, costs.time].into_iter().any(is_negative) {
                    issues.push("costs");
                }
                if vehicle.profile.scale.is_some_and(is_negative) {
                    issues.push("profile scale");
                }
                if vehicle.capacity.iter().any(|&value| value < 0) {
                    issues.push("capacity");
                }
                if let Some(limits) = &vehicle.limits {
                    if limits.max_distance.is_some_and(is_negative) || limits.max_duration.is_some_and(is_negative) {
                        issues.push("limits");
                    }
                }
                if vehicle.reloads.iter().flatten().any(|reload| is_negative(reload.duration)) {
                    issues.push("reload duration");
                }
                if let Some(recharges) = &vehicle.recharges {
                    if is_negative(recharges.max_distance)
                        || recharges.stations.iter().any(|station| is_negative(station.duration))
                    {
                        issues.push("recharges");
                    }
                }
                if vehicle.shifts.iter().flat_map(|shift| shift.breaks.iter().flatten()).any(|vehicle_break| {
                    match vehicle_break {
                        VehicleBreak::Optional { places, .. } => places.iter().any(|place| is_negative(place.duration)),
                        VehicleBreak::Required { duration, .. } => is_negative(*duration),
                    }
                }) {
                    issues.push("break duration");
                }

                (!issues.is_empty()).then(|| {
                    FormatError::new_for_entity(
                        "E1305",
                        EntityRef::Vehicle(vehicle.type_id.clone()),
                        format!("vehicle type has negative values: {}", issues.join(", ")),
                        "use non-negative values".to_string(),
                    )
                })
            })
            .collect(),
    )
}

/// Validates vehicles from the fleet.
pub fn validate_vehicles(ctx: &ValidationContext) -> Result<(), Vec<FormatError>> {
    combine_error_results(&[
        check_e1300_no_vehicles_with_duplicate_ids(ctx),
        check_e1301_vehicle_has_shifts(ctx),
        check_e1302_shift_time_windows(ctx),
        check_e1303_no_mixed_breaks(ctx),
        check_e1304_break_times(ctx),
        check_e1305_vehicle_values(ctx),
    ])
}
