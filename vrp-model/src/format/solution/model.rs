#[cfg(test)]
#[path = "../../../tests/unit/format/solution/model_test.rs"]
mod model_test;

use crate::format::Location;
use serde::{Deserialize, Serialize};

/// Timing statistic.
#[derive(Clone, Default, Deserialize, Serialize, PartialEq, Debug)]
pub struct Timing {
    /// Driving time.
    pub driving: i64,
    /// Serving time.
    pub serving: i64,
    /// Waiting time.
    pub waiting: i64,
    /// Break time.
    #[serde(rename(serialize = "break", deserialize = "break"))]
    pub break_time: i64,
    /// Commuting time.
    #[serde(default)]
    pub commuting: i64,
    /// Parking time.
    #[serde(default)]
    pub parking: i64,
}

/// Represents statistic.
#[derive(Clone, Default, Deserialize, Serialize, PartialEq, Debug)]
pub struct Statistic {
    /// Total cost.
    pub cost: f64,
    /// Total distance.
    pub distance: i64,
    /// Total duration.
    pub duration: i64,
    /// Timing statistic.
    pub times: Timing,
}

/// Represents a schedule.
#[derive(Clone, Deserialize, Serialize, PartialEq, Debug)]
pub struct Schedule {
    /// Arrival, RFC3339.
    pub arrival: String,
    /// Departure, RFC3339.
    pub departure: String,
}

/// Represents time interval.
#[derive(Clone, Deserialize, Serialize, PartialEq, Debug)]
pub struct Interval {
    /// Activity start, RFC3339.
    pub start: String,
    /// Activity end, RFC3339.
    pub end: String,
}

/// Walking between the parking place and the activity place.
#[derive(Clone, Deserialize, Serialize, PartialEq, Debug)]
pub struct Commute {
    /// From parking to the activity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forward: Option<CommuteInfo>,
    /// From the activity back to parking.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backward: Option<CommuteInfo>,
}

/// One way commute.
#[derive(Clone, Deserialize, Serialize, PartialEq, Debug)]
pub struct CommuteInfo {
    /// Commute location.
    pub location: Location,
    /// Travelled distance.
    pub distance: f64,
    /// Travel duration.
    pub duration: f64,
}

/// Specifies activity type.
#[derive(Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Hash, Debug)]
#[serde(rename_all = "kebab-case")]
pub enum ActivityType {
    /// Vehicle departure from shift start.
    Departure,
    /// Vehicle arrival to shift end.
    Arrival,
    /// A job pickup task.
    Pickup,
    /// A job delivery task.
    Delivery,
    /// A job replacement task.
    Replacement,
    /// A job service task.
    Service,
    /// A vehicle break.
    Break,
    /// A vehicle reload.
    Reload,
    /// A vehicle recharge.
    Recharge,
}

/// A single piece of work done at a stop.
#[derive(Clone, Deserialize, Serialize, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    /// Job id or one of reserved ids.
    pub job_id: String,
    /// Activity type.
    #[serde(rename(serialize = "type", deserialize = "type"))]
    pub activity_type: ActivityType,
    /// Location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    /// Activity time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<Interval>,
    /// Job tag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_tag: Option<String>,
    /// Commute information: it is present for clustered activities.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commute: Option<Commute>,
}

/// A place where the vehicle stops to perform activities.
#[derive(Clone, Deserialize, Serialize, PartialEq, Debug)]
pub struct Stop {
    /// Stop location.
    pub location: Location,
    /// Stop schedule.
    pub time: Schedule,
    /// Distance driven since tour start.
    #[serde(default)]
    pub distance: i64,
    /// Load when leaving the stop.
    pub load: Vec<i32>,
    /// Parking time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parking: Option<Interval>,
    /// Activities in execution order.
    pub activities: Vec<Activity>,
}

/// Route of one vehicle during one shift.
#[derive(Clone, Deserialize, Serialize, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Tour {
    /// Vehicle id.
    pub vehicle_id: String,
    /// Vehicle type id.
    pub type_id: String,
    /// Shift index.
    #[serde(default)]
    pub shift_index: usize,
    /// List of stops.
    pub stops: Vec<Stop>,
    /// Tour statistic.
    pub statistic: Statistic,
}

/// Unassigned job.
#[derive(Clone, Deserialize, Serialize, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct UnassignedJob {
    /// Job id.
    pub job_id: String,
    /// Possible reasons in human readable form.
    #[serde(rename = "reason", alias = "reasons")]
    pub reasons: Vec<String>,
}

/// A VRP solution.
#[derive(Clone, Deserialize, Serialize, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Solution {
    /// Total statistic.
    pub statistic: Statistic,

    /// List of tours.
    pub tours: Vec<Tour>,

    /// List of unassigned jobs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unassigned: Option<Vec<UnassignedJob>>,
}
