use crate::{Timestamp, parse_time};

/// Returns time window as (start, end) pair if both times are valid and start is not after end.
pub fn get_time_window(start: &str, end: &str) -> Option<(Timestamp, Timestamp)> {
    match (parse_time(start), parse_time(end)) {
        (Ok(start), Ok(end)) if start <= end => Some((start, end)),
        _ => None,
    }
}

/// Returns time window from its raw `[start, end]` representation.
pub fn get_time_window_from_vec(tw: &[String]) -> Option<(Timestamp, Timestamp)> {
    match tw {
        [start, end] => get_time_window(start, end),
        _ => None,
    }
}

/// Checks that each of the time windows is well-formed.
pub fn check_raw_time_windows(tws: &[Vec<String>]) -> bool {
    tws.iter().all(|tw| get_time_window_from_vec(tw).is_some())
}

/// Checks optional time windows: absent time windows are always valid.
pub fn check_optional_time_windows(tws: Option<&Vec<Vec<String>>>) -> bool {
    tws.is_none_or(|tws| check_raw_time_windows(tws))
}

/// Joins ids or other descriptions into a single string to be used in error message.
pub fn join_ids<T: std::fmt::Display>(items: impl Iterator<Item = T>) -> String {
    items.map(|item| item.to_string()).collect::<Vec<_>>().join(", ")
}
