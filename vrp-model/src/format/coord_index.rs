//! A helper module for processing geo coordinates in problem and solution.

#[cfg(test)]
#[path = "../../tests/unit/format/coord_index_test.rs"]
mod coord_index_test;

use crate::format::Location;
use crate::format::problem::{Problem, VehicleBreak};
use rustc_hash::FxHashMap;

/// A helper struct which keeps track of coordinate mapping: each distinct location gets an index
/// in the order it is first seen. The index is used to address routing matrix rows and columns.
#[derive(Clone, Debug, Default)]
pub struct CoordIndex {
    direct_index: FxHashMap<Location, usize>,
    reverse_index: Vec<Location>,
}

impl CoordIndex {
    /// Creates a new instance of `CoordIndex` visiting locations in a fixed order: fleet first
    /// (vehicles, shifts, start, end, break places, reloads, recharge stations), then plan
    /// (jobs, pickups, deliveries, replacements, services, places).
    pub fn new(problem: &Problem) -> Self {
        let mut index = Self::default();

        // process fleet
        problem.fleet.vehicles.iter().for_each(|vehicle| {
            vehicle.shifts.iter().for_each(|shift| {
                index.add(&shift.start.location);

                if let Some(end) = &shift.end {
                    index.add(&end.location);
                }

                shift
                    .breaks
                    .iter()
                    .flatten()
                    .filter_map(|vehicle_break| match vehicle_break {
                        VehicleBreak::Optional { places, .. } => Some(places),
                        VehicleBreak::Required { .. } => None,
                    })
                    .flatten()
                    .filter_map(|place| place.location.as_ref())
                    .for_each(|location| index.add(location));
            });

            vehicle.reloads.iter().flatten().for_each(|reload| index.add(&reload.location));

            vehicle
                .recharges
                .iter()
                .flat_map(|recharges| recharges.stations.iter())
                .for_each(|station| index.add(&station.location));
        });

        // process plan
        problem.plan.jobs.iter().flat_map(|job| job.places_iter()).for_each(|place| index.add(&place.location));

        index
    }

    /// Adds location to the index if it is not yet there.
    pub fn add(&mut self, location: &Location) {
        if !self.direct_index.contains_key(location) {
            let value = self.reverse_index.len();

            self.direct_index.insert(*location, value);
            self.reverse_index.push(*location);
        }
    }

    /// Returns index of given location.
    pub fn get_by_loc(&self, location: &Location) -> Option<usize> {
        self.direct_index.get(location).cloned()
    }

    /// Returns location by its index.
    pub fn get_by_idx(&self, index: usize) -> Option<Location> {
        self.reverse_index.get(index).cloned()
    }

    /// Returns unique locations ordered by their index.
    pub fn unique(&self) -> Vec<Location> {
        self.reverse_index.clone()
    }

    /// Returns amount of unique locations which is the size of routing matrix dimension.
    pub fn len(&self) -> usize {
        self.reverse_index.len()
    }

    /// Returns true if there is no locations.
    pub fn is_empty(&self) -> bool {
        self.reverse_index.is_empty()
    }
}
