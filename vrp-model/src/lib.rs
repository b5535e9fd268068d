//! Model crate defines a rich VRP problem and solution in **pragmatic** json format and provides
//! a logic which is needed before problem is sent to the solver: validation of cross-entity rules
//! and extraction of unique routing locations used to request routing matrices.
//!
//! # Examples
//!
//! ```
//! use vrp_model::format::problem::*;
//! use vrp_model::get_locations;
//! use vrp_model::validation::validate_problem;
//!
//! let problem = Problem {
//!     plan: Plan { jobs: vec![], relations: None },
//!     fleet: Fleet { vehicles: vec![], profiles: vec![MatrixProfile { name: "car".to_string() }], resources: None },
//!     objectives: None,
//! };
//!
//! assert!(validate_problem(&problem).is_ok());
//! assert!(get_locations(&problem).is_empty());
//! ```

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

pub mod format;
pub mod utils;
pub mod validation;

use crate::format::problem::Problem;
use crate::format::{CoordIndex, Location};
use crate::utils::GenericError;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

/// A timestamp type: amount of seconds since unix epoch.
pub type Timestamp = f64;

/// Returns a list of unique locations from `problem` in the order used by routing matrix.
pub fn get_locations(problem: &Problem) -> Vec<Location> {
    CoordIndex::new(problem).unique()
}

/// Returns json list of unique locations from `problem` in the order used by routing matrix.
pub fn get_locations_serialized(problem: &Problem) -> Result<String, GenericError> {
    let locations = get_locations(problem);

    Ok(serde_json::to_string_pretty(&locations)?)
}

/// Parses time specified in RFC3339 format.
pub fn parse_time(time: &str) -> Result<Timestamp, GenericError> {
    OffsetDateTime::parse(time, &Rfc3339)
        .map(|time| time.unix_timestamp() as Timestamp + time.nanosecond() as Timestamp / 1E9)
        .map_err(|err| format!("cannot parse '{time}' as RFC3339 time: {err}").into())
}
