//! Contains logic to interpret vehicle break properties at schedule interpretation time.

#[cfg(test)]
#[path = "../../../tests/unit/format/problem/breaks_test.rs"]
mod breaks_test;

use super::*;
use crate::format::Location;
use crate::utils::GenericError;
use crate::{Timestamp, parse_time};

/// Specifies interpreted break time.
#[derive(Clone, Debug, PartialEq)]
pub enum BreakTime {
    /// Break time is defined by a time window with absolute timestamps.
    TimeWindow {
        /// Start of the range.
        earliest: Timestamp,
        /// End of the range.
        latest: Timestamp,
    },
    /// Break time is defined by amount of seconds since shift start.
    TimeOffset {
        /// Start of the range.
        earliest: f64,
        /// End of the range.
        latest: f64,
    },
}

impl BreakTime {
    /// Parses break time from its string representation. Supported forms are:
    /// * `"<earliest>,<latest>"` with both values in RFC3339 format: a time window;
    /// * `"<earliest>,<latest>"` with both values in seconds: a time offset interval;
    /// * `"<time>"` in RFC3339 format: an exact time.
    pub fn parse(time: &str) -> Result<Self, GenericError> {
        let parts = time.split(',').map(str::trim).collect::<Vec<_>>();

        match parts.as_slice() {
            [exact] => parse_time(exact).map(|exact| BreakTime::TimeWindow { earliest: exact, latest: exact }),
            [earliest, latest] => match (earliest.parse::<f64>(), latest.parse::<f64>()) {
                (Ok(earliest), Ok(latest)) => Ok(BreakTime::TimeOffset { earliest, latest }),
                _ => Ok(BreakTime::TimeWindow { earliest: parse_time(earliest)?, latest: parse_time(latest)? }),
            },
            _ => Err(format!("unexpected break time format: '{time}'").into()),
        }
    }

    /// Returns true if the range is not empty and its bounds are finite.
    pub fn is_valid(&self) -> bool {
        let (earliest, latest) = match self {
            BreakTime::TimeWindow { earliest, latest } | BreakTime::TimeOffset { earliest, latest } => {
                (*earliest, *latest)
            }
        };

        earliest.is_finite() && latest.is_finite() && earliest <= latest
    }
}

impl VehicleBreak {
    /// Interprets break time.
    pub fn break_time(&self) -> Result<BreakTime, GenericError> {
        BreakTime::parse(self.time())
    }

    /// Returns break skip policy for optional break (default one if it is omitted) or `None` for
    /// required break which is never skipped.
    pub fn policy(&self) -> Option<VehicleOptionalBreakPolicy> {
        match self {
            VehicleBreak::Optional { policy, .. } => Some(policy.clone().unwrap_or_default()),
            VehicleBreak::Required { .. } => None,
        }
    }
}

impl VehicleOptionalBreakPlace {
    /// Resolves break location: when it is omitted, break sticks to the location of the job served
    /// immediately before the break. Returns `None` only when there is no such job.
    pub fn resolve_location(&self, previous: Option<Location>) -> Option<Location> {
        self.location.or(previous)
    }
}
