//! This module defines logic to serialize/deserialize problem, routing matrix and solution in
//! pragmatic format from json input.
//!

#[cfg(test)]
#[path = "../../tests/unit/format/location_test.rs"]
mod location_test;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::io::{BufReader, Read};

mod coord_index;
pub use self::coord_index::CoordIndex;

pub mod problem;
pub mod solution;

/// Represents a location type: a geo coordinate with latitude and longitude.
///
/// Two locations are equal only when both coordinates have exactly the same value: no tolerance
/// is applied as location is used as a key to align rows and columns of routing matrix.
#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
pub struct Location {
    /// Latitude.
    pub lat: f64,
    /// Longitude.
    pub lng: f64,
}

impl Location {
    /// Creates a new instance of `Location`.
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Returns location as (lat, lng) pair.
    pub fn to_lat_lng(&self) -> (f64, f64) {
        (self.lat, self.lng)
    }

    /// Returns a bit representation used for comparison, `-0.0` and `0.0` are the same coordinate.
    fn key(&self) -> (u64, u64) {
        let normalize = |value: f64| if value == 0. { 0_f64.to_bits() } else { value.to_bits() };

        (normalize(self.lat), normalize(self.lng))
    }
}

impl PartialEq for Location {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Location {}

impl Hash for Location {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let (lat, lng) = self.key();
        state.write_u64(lat);
        state.write_u64(lng);
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "lat={}, lng={}", self.lat, self.lng)
    }
}

/// A reference to the problem entity which has a format error.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "type", content = "id", rename_all = "kebab-case")]
pub enum EntityRef {
    /// The whole problem.
    Problem,
    /// A job with given id.
    Job(String),
    /// A vehicle type with given type id.
    Vehicle(String),
    /// A relation with given index in the plan.
    Relation(usize),
    /// A shared resource with given id.
    Resource(String),
    /// A routing profile with given name.
    Profile(String),
    /// An objective with given index in objectives list.
    Objective(usize),
}

impl fmt::Display for EntityRef {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EntityRef::Problem => write!(f, "problem"),
            EntityRef::Job(id) => write!(f, "job '{id}'"),
            EntityRef::Vehicle(id) => write!(f, "vehicle type '{id}'"),
            EntityRef::Relation(idx) => write!(f, "relation #{idx}"),
            EntityRef::Resource(id) => write!(f, "resource '{id}'"),
            EntityRef::Profile(name) => write!(f, "profile '{name}'"),
            EntityRef::Objective(idx) => write!(f, "objective #{idx}"),
        }
    }
}

/// A format error.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FormatError {
    /// An error code in registry.
    pub code: String,
    /// A possible error cause.
    pub cause: String,
    /// An action to take in order to recover from error.
    pub action: String,
    /// A details about exception.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    /// An entity which causes error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity: Option<EntityRef>,
}

impl FormatError {
    /// Creates a new instance of `FormatError` action without details.
    pub fn new(code: String, cause: String, action: String) -> Self {
        Self { code, cause, action, details: None, entity: None }
    }

    /// Creates a new instance of `FormatError` action.
    pub fn new_with_details(code: String, cause: String, action: String, details: String) -> Self {
        Self { code, cause, action, details: Some(details), entity: None }
    }

    /// Creates a new instance of `FormatError` which references problem entity.
    pub fn new_for_entity(code: &str, entity: EntityRef, cause: String, action: String) -> Self {
        Self { code: code.to_string(), cause, action, details: None, entity: Some(entity) }
    }

    /// Serializes error into json string.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| self.to_string())
    }
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if let Some(entity) = &self.entity {
            write!(f, "{}, {}, cause: '{}', action: '{}'.", self.code, entity, self.cause, self.action)
        } else {
            write!(f, "{}, cause: '{}', action: '{}'.", self.code, self.cause, self.action)
        }
    }
}

impl std::error::Error for FormatError {}

/// Keeps track of multiple `FormatError`.
#[derive(Clone, Debug, PartialEq)]
pub struct MultiFormatError {
    /// Inner errors.
    pub errors: Vec<FormatError>,
}

impl MultiFormatError {
    /// Formats multiple format errors into json string.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(&self.errors).unwrap_or_else(|_| self.to_string())
    }

    /// Returns true if there is an error with given code.
    pub fn has_code(&self, code: &str) -> bool {
        self.errors.iter().any(|err| err.code == code)
    }

    /// Returns errors with given code.
    pub fn with_code<'a>(&'a self, code: &'a str) -> impl Iterator<Item = &'a FormatError> + 'a {
        self.errors.iter().filter(move |err| err.code == code)
    }
}

impl fmt::Display for MultiFormatError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.errors.iter().map(|err| err.to_string()).collect::<Vec<_>>().join("\n"))
    }
}

impl std::error::Error for MultiFormatError {}

impl From<Vec<FormatError>> for MultiFormatError {
    fn from(errors: Vec<FormatError>) -> Self {
        MultiFormatError { errors }
    }
}

impl From<FormatError> for MultiFormatError {
    fn from(error: FormatError) -> Self {
        MultiFormatError { errors: vec![error] }
    }
}

impl IntoIterator for MultiFormatError {
    type Item = FormatError;
    type IntoIter = std::vec::IntoIter<FormatError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

/// Reads json from `reader`, a schema violation is reported with `code` and the path to the
/// offending field in error details, e.g. `fleet.vehicles[0].capacity[0]`.
pub(crate) fn deserialize_json<T, R>(reader: BufReader<R>, code: &str, what: &str) -> Result<T, MultiFormatError>
where
    T: DeserializeOwned,
    R: Read,
{
    let mut deserializer = serde_json::Deserializer::from_reader(reader);

    let value = serde_path_to_error::deserialize(&mut deserializer)
        .map_err(|err| create_deserialize_error(code, what, &err.path().to_string(), err.inner()))?;
    deserializer.end().map_err(|err| create_deserialize_error(code, what, ".", &err))?;

    Ok(value)
}

fn create_deserialize_error(code: &str, what: &str, path: &str, err: &serde_json::Error) -> FormatError {
    FormatError::new_with_details(
        code.to_string(),
        format!("cannot deserialize {what}"),
        format!("check input json: '{err}'"),
        format!("path: {path}, line: {}, column: {}", err.line(), err.column()),
    )
}
