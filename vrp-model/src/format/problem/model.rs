#[cfg(test)]
#[path = "../../../tests/unit/format/problem/model_test.rs"]
mod model_test;

use crate::format::{Location, MultiFormatError, deserialize_json};
use serde::{Deserialize, Serialize};
use std::io::{BufReader, Read};

// region Plan

/// Relation type.
#[derive(Clone, Deserialize, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RelationType {
    /// Jobs are assigned to the vehicle, their order is up to the solver.
    Any,
    /// Jobs keep the listed order, other jobs can be inserted between them.
    Sequence,
    /// Jobs keep the listed order without any other job in between.
    Strict,
}

/// Binds listed jobs to a vehicle shift.
#[derive(Clone, Deserialize, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Relation {
    /// Relation type.
    #[serde(rename(deserialize = "type", serialize = "type"))]
    pub type_field: RelationType,
    /// List of job ids including reserved: `departure`, `arrival`, `break` and `reload`.
    pub jobs: Vec<String>,
    /// Vehicle id.
    pub vehicle_id: String,
    /// Vehicle shift index. If not specified, a first, zero indexed, shift assumed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shift_index: Option<usize>,
}

/// Skills a vehicle needs to serve a job.
#[derive(Clone, Deserialize, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobSkills {
    /// Required skills: vehicle must have each of them.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub all_of: Option<Vec<String>>,
    /// Alternative skills: vehicle must have any of them.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub one_of: Option<Vec<String>>,
    /// Prohibited skills: vehicle must have none of them.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub none_of: Option<Vec<String>>,
}

/// A place where a job task can be performed.
#[derive(Clone, Deserialize, Debug, PartialEq, Serialize)]
pub struct JobPlace {
    /// A job place location.
    pub location: Location,
    /// Service time at the place in seconds.
    pub duration: f64,
    /// Time windows as `[start, end]` pairs of RFC3339 times.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub times: Option<Vec<Vec<String>>>,
    /// A tag which is copied to the matching solution activity.
    /// Helps to find out which place was used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

/// Specifies a job task.
#[derive(Clone, Deserialize, Debug, PartialEq, Serialize)]
pub struct JobTask {
    /// A list of possible places where given task can be performed: exactly one is visited.
    pub places: Vec<JobPlace>,
    /// Job place demand. It is required for all task types, except service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub demand: Option<Vec<i32>>,
    /// An order, bigger value - later assignment in the route. Minimum is 1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i32>,
}

/// A customer job. Its tasks are either all served or none of them, and pickups are served
/// before deliveries.
#[derive(Clone, Deserialize, Debug, PartialEq, Serialize)]
pub struct Job {
    /// A job id.
    pub id: String,

    /// A list of pickup tasks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pickups: Option<Vec<JobTask>>,

    /// A list of delivery tasks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deliveries: Option<Vec<JobTask>>,

    /// Replacement tasks: pickup and delivery at the same place.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replacements: Option<Vec<JobTask>>,

    /// A list of service tasks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub services: Option<Vec<JobTask>>,

    /// Skills required from a vehicle.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<JobSkills>,

    /// Job value used by `maximize-value` objective.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,

    /// Jobs sharing a group end up in one tour or stay unassigned together.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,

    /// Jobs with different compatibility never share a tour.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compatibility: Option<String>,
}

/// Work to be done: jobs and their relations.
#[derive(Clone, Deserialize, Debug, PartialEq, Serialize)]
pub struct Plan {
    /// List of jobs.
    pub jobs: Vec<Job>,

    /// Job to vehicle relations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relations: Option<Vec<Relation>>,
}

// endregion

// region Fleet

/// Specifies vehicle costs.
#[derive(Clone, Deserialize, Debug, PartialEq, Serialize)]
pub struct VehicleCosts {
    /// Cost paid once per used tour.
    pub fixed: f64,

    /// Cost per distance unit.
    pub distance: f64,

    /// Cost per time unit.
    pub time: f64,
}

/// Where and when a shift starts.
#[derive(Clone, Deserialize, Debug, PartialEq, Serialize)]
pub struct ShiftStart {
    /// Earliest departure, RFC3339.
    pub earliest: String,

    /// Latest departure, RFC3339. When omitted, departure can be postponed as long as the
    /// schedule allows.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest: Option<String>,

    /// Shift start location.
    pub location: Location,
}

/// Where and when a shift ends.
#[derive(Clone, Deserialize, Debug, PartialEq, Serialize)]
pub struct ShiftEnd {
    /// Earliest arrival, RFC3339.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub earliest: Option<String>,

    /// Latest arrival, RFC3339.
    pub latest: String,

    /// Shift end location.
    pub location: Location,
}

/// Specifies vehicle shift.
#[derive(Clone, Deserialize, Debug, PartialEq, Serialize)]
pub struct VehicleShift {
    /// Vehicle shift start.
    pub start: ShiftStart,

    /// Vehicle shift end. When omitted, then vehicle ends on last job location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<ShiftEnd>,

    /// Vehicle breaks: either all required or all optional.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breaks: Option<Vec<VehicleBreak>>,
}

/// A depot visited within a tour to load or unload goods.
#[derive(Clone, Deserialize, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleReload {
    /// A place location.
    pub location: Location,

    /// Time spent at the depot in seconds.
    pub duration: f64,

    /// Opening hours as `[start, end]` pairs of RFC3339 times.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub times: Option<Vec<Vec<String>>>,

    /// A tag which is copied to the matching solution activity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,

    /// Id of a shared resource consumed by this reload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<String>,
}

/// Recharging setup of an electric vehicle.
#[derive(Clone, Deserialize, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleRecharges {
    /// Distance a vehicle can drive between two charges.
    pub max_distance: f64,

    /// Stations where the vehicle can recharge.
    pub stations: Vec<VehicleRechargeStation>,
}

/// Specifies a recharge station.
#[derive(Clone, Deserialize, Debug, PartialEq, Serialize)]
pub struct VehicleRechargeStation {
    /// A station location.
    pub location: Location,

    /// Charging duration.
    pub duration: f64,

    /// A list of station time windows with time specified in RFC3339 format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub times: Option<Vec<Vec<String>>>,

    /// A tag which is copied to the matching solution activity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

/// Vehicle limits.
#[derive(Clone, Deserialize, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleLimits {
    /// Max distance of a single tour.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_distance: Option<f64>,

    /// Max duration per tour.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(alias = "shiftTime")]
    pub max_duration: Option<f64>,

    /// Max amount job activities (without departure/arrival).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tour_size: Option<usize>,
}

/// Vehicle optional break place. Its location is optional: see `resolve_location`.
#[derive(Clone, Deserialize, Debug, PartialEq, Serialize)]
pub struct VehicleOptionalBreakPlace {
    /// Break duration.
    pub duration: f64,
    /// Break location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    /// Opening hours as `[start, end]` pairs of RFC3339 times.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub times: Option<Vec<Vec<String>>>,
    /// A tag which is copied to the matching solution activity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

/// Vehicle break policy.
#[derive(Clone, Default, Deserialize, Debug, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum VehicleOptionalBreakPolicy {
    /// Skip the break when tour schedule does not overlap the break time.
    #[default]
    SkipIfNoIntersection,
    /// Skip the break when tour finishes before the break time ends.
    SkipIfArrivalBeforeEnd,
}

/// Specifies a vehicle break.
#[derive(Clone, Deserialize, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum VehicleBreak {
    /// A break which the solver may skip according to its policy.
    Optional {
        /// Break time: a time window (`"<earliest>,<latest>"` in RFC3339 format) or
        /// time offset interval (`"<seconds>,<seconds>"`) after which a break should happen.
        time: String,
        /// Vehicle break places.
        places: Vec<VehicleOptionalBreakPlace>,
        /// When the break can be skipped.
        #[serde(skip_serializing_if = "Option::is_none")]
        policy: Option<VehicleOptionalBreakPolicy>,
    },
    /// A break which has to be assigned. It is less flexible than optional break, but has strong
    /// assignment guarantee.
    Required {
        /// Break time: a fixed time or time offset interval when the break should happen.
        time: String,
        /// Break duration.
        duration: f64,
    },
}

/// Specifies a vehicle type.
#[derive(Clone, Deserialize, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleType {
    /// Vehicle type id.
    pub type_id: String,

    /// Concrete vehicle ids.
    pub vehicle_ids: Vec<String>,

    /// Vehicle profile.
    pub profile: VehicleProfile,

    /// Vehicle costs.
    pub costs: VehicleCosts,

    /// Vehicle shifts.
    pub shifts: Vec<VehicleShift>,

    /// Vehicle capacity.
    pub capacity: Vec<i32>,

    /// Vehicle skills.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,

    /// Vehicle limits.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limits: Option<VehicleLimits>,

    /// Depots where the vehicle can load or unload goods, enabling multiple trips
    /// within one tour.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reloads: Option<Vec<VehicleReload>>,

    /// Electric vehicle recharging.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recharges: Option<VehicleRecharges>,
}

/// Routing profile of a vehicle.
#[derive(Clone, Deserialize, Debug, PartialEq, Serialize)]
pub struct VehicleProfile {
    /// Name of the routing matrix to use.
    pub matrix: String,

    /// Multiplier applied to travel durations.
    /// Default value is 1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
}

/// A routing profile with its own matrix.
#[derive(Clone, Deserialize, Debug, PartialEq, Serialize)]
pub struct MatrixProfile {
    /// Profile name.
    pub name: String,
}

/// A resource shared between vehicles.
#[derive(Clone, Deserialize, Debug, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum VehicleResource {
    /// A shared reload resource.
    #[serde(rename(deserialize = "reload", serialize = "reload"))]
    Reload {
        /// Resource id.
        id: String,
        /// A total resource capacity.
        capacity: Vec<i32>,
    },
}

/// Specifies fleet.
#[derive(Clone, Deserialize, Debug, PartialEq, Serialize)]
pub struct Fleet {
    /// Vehicle types.
    pub vehicles: Vec<VehicleType>,

    /// Routing profiles.
    pub profiles: Vec<MatrixProfile>,

    /// Resources shared between vehicles.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources: Option<Vec<VehicleResource>>,
}

// endregion

// region Objective

/// An optimization objective.
#[derive(Clone, Deserialize, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Objective {
    /// Minimizes cost computed from time, distance and fixed costs.
    MinimizeCost,

    /// Minimizes traveled distance.
    MinimizeDistance,

    /// Minimizes total tour duration.
    MinimizeDuration,

    /// Minimizes the number of tours.
    MinimizeTours,

    /// Maximizes the number of tours.
    MaximizeTours,

    /// Maximizes total value of assigned jobs.
    #[serde(rename_all = "camelCase")]
    MaximizeValue {
        /// A factor to reduce value cost compared to max routing costs.
        #[serde(skip_serializing_if = "Option::is_none")]
        reduction_factor: Option<f64>,

        /// Specifies a weight of skipped breaks. Default value is 100.
        #[serde(skip_serializing_if = "Option::is_none")]
        breaks: Option<f64>,
    },

    /// Minimizes the number of unassigned jobs.
    MinimizeUnassigned {
        /// Weight of a skipped break relative to an unassigned job.
        /// Default is 1.
        #[serde(skip_serializing_if = "Option::is_none")]
        breaks: Option<f64>,
    },

    /// Minimizes the sum of tour arrival times.
    MinimizeArrivalTime,

    /// Serves jobs as early as possible.
    FastService {
        /// An objective tolerance specifies how different objective values have to be to consider
        /// them different. Relative distance metric is used.
        #[serde(skip_serializing_if = "Option::is_none")]
        tolerance: Option<f64>,
    },

    /// Follows job task `order` within a tour.
    #[serde(rename_all = "camelCase")]
    TourOrder {
        /// If true, then order is considered as a hard constraint (default is true).
        #[serde(skip_serializing_if = "Option::is_none")]
        is_constrained: Option<bool>,
    },

    /// Keeps tours geographically compact.
    CompactTour {
        /// Specifies tour shape options.
        options: CompactOptions,
    },

    /// Balances max load between tours.
    BalanceMaxLoad,

    /// Balances activity count between tours.
    BalanceActivities,

    /// Balances distance between tours.
    BalanceDistance,

    /// Balances duration between tours.
    BalanceDuration,

    /// A multi objective allows to define multiple competitive objectives at the same layer of hierarchy.
    MultiObjective {
        /// An objective composition strategy.
        strategy: MultiStrategy,
        /// Competitive objectives except `MultiObjective` type (nesting is not supported).
        objectives: Vec<Objective>,
    },
}

/// Specifies options of compact tour objective.
#[derive(Clone, Deserialize, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompactOptions {
    /// A radius of neighbourhood, minimum is 1.
    pub job_radius: usize,
    /// A minimum shared jobs to count.
    pub threshold: usize,
    /// A minimum relative distance between counts when comparing different solutions.
    pub distance: f64,
}

/// Specifies how competitive objectives of multi objective are combined.
#[derive(Clone, Deserialize, Debug, PartialEq, Serialize)]
pub struct MultiStrategy {
    /// A strategy name, only `sum` is supported.
    pub name: String,
}

// endregion

// region Common

/// A VRP problem definition.
#[derive(Clone, Deserialize, Debug, PartialEq, Serialize)]
pub struct Problem {
    /// Jobs to serve.
    pub plan: Plan,

    /// Vehicles and routing profiles.
    pub fleet: Fleet,

    /// Objectives ordered by priority, the first one is the most important.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub objectives: Option<Vec<Objective>>,
}

/// A routing matrix.
#[derive(Clone, Deserialize, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Matrix {
    /// A name of profile.
    #[serde(alias = "profile")]
    pub matrix: String,

    /// RFC3339 time the routing data was calculated for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,

    /// Travel durations (in seconds).
    #[serde(alias = "durations")]
    pub travel_times: Vec<i64>,

    /// Travel distances (in meters).
    pub distances: Vec<i64>,

    /// Non-zero values mark unreachable location pairs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_codes: Option<Vec<i64>>,
}

// endregion

/// Reads problem json, reports schema violations as `E0000`.
pub fn deserialize_problem<R: Read>(reader: BufReader<R>) -> Result<Problem, MultiFormatError> {
    deserialize_json(reader, "E0000", "problem")
}

/// Reads routing matrix json, reports schema violations as `E0001`.
pub fn deserialize_matrix<R: Read>(reader: BufReader<R>) -> Result<Matrix, MultiFormatError> {
    deserialize_json(reader, "E0001", "matrix")
}

/// Reads json list of locations, reports schema violations as `E0003`.
pub fn deserialize_locations<R: Read>(reader: BufReader<R>) -> Result<Vec<Location>, MultiFormatError> {
    deserialize_json(reader, "E0003", "locations")
}

/// Serializes `problem` into json string.
pub fn serialize_problem(problem: &Problem) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(problem)
}

/// Serializes routing `matrix` into json string.
pub fn serialize_matrix(matrix: &Matrix) -> Result<String, serde_json::Error> {
    serde_json::to_string(matrix)
}
