//! Specifies pragmatic solution model returned by the solver.

mod model;
pub use self::model::*;

use crate::format::{MultiFormatError, deserialize_json};
use crate::parse_time;
use std::io::{BufReader, Read};

/// Deserializes solution in json format from `BufReader`.
pub fn deserialize_solution<R: Read>(reader: BufReader<R>) -> Result<Solution, MultiFormatError> {
    deserialize_json(reader, "E0002", "solution")
}

/// Serializes `solution` into json string.
pub fn serialize_solution(solution: &Solution) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(solution)
}

impl Timing {
    /// Returns total time spent, widened so that the sum of any timing values cannot overflow.
    pub fn total(&self) -> i128 {
        [self.driving, self.serving, self.waiting, self.break_time, self.commuting, self.parking]
            .into_iter()
            .map(i128::from)
            .sum()
    }
}

impl Statistic {
    /// Returns true if duration is equal to the sum of all timing components.
    pub fn has_consistent_duration(&self) -> bool {
        i128::from(self.duration) == self.times.total()
    }
}

impl Stop {
    /// Returns true if both schedule times are valid and arrival is not after departure.
    pub fn has_consistent_schedule(&self) -> bool {
        match (parse_time(&self.time.arrival), parse_time(&self.time.departure)) {
            (Ok(arrival), Ok(departure)) => arrival <= departure,
            _ => false,
        }
    }
}

impl Solution {
    /// Returns true if there is no unassigned jobs.
    pub fn is_fully_assigned(&self) -> bool {
        self.unassigned.as_ref().is_none_or(|unassigned| unassigned.is_empty())
    }

    /// Returns tour served by vehicle with given id within given shift.
    pub fn get_tour(&self, vehicle_id: &str, shift_index: usize) -> Option<&Tour> {
        self.tours.iter().find(|tour| tour.vehicle_id == vehicle_id && tour.shift_index == shift_index)
    }

    /// Returns ids of all jobs served in the solution, each job id once.
    pub fn served_job_ids(&self) -> Vec<&str> {
        let mut ids = self
            .tours
            .iter()
            .flat_map(|tour| tour.stops.iter())
            .flat_map(|stop| stop.activities.iter())
            .filter(|activity| activity.activity_type.is_job_activity())
            .map(|activity| activity.job_id.as_str())
            .collect::<Vec<_>>();
        ids.sort_unstable();
        ids.dedup();

        ids
    }
}

impl ActivityType {
    /// Returns true if activity belongs to a job from the plan.
    pub fn is_job_activity(&self) -> bool {
        matches!(
            self,
            ActivityType::Pickup | ActivityType::Delivery | ActivityType::Replacement | ActivityType::Service
        )
    }
}
