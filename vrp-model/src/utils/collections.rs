#[cfg(test)]
#[path = "../../tests/unit/utils/collections_test.rs"]
mod collections_test;

use rustc_hash::FxHashSet;
use std::hash::Hash;

/// Combines error results: collects all errors from all results, no short circuit on first error.
pub fn combine_error_results<T: Clone>(results: &[Result<(), Vec<T>>]) -> Result<(), Vec<T>> {
    let errors = results.iter().cloned().flat_map(|result| result.err().into_iter().flatten()).collect::<Vec<T>>();

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

/// Converts a list of errors into result: empty list means success.
pub fn to_error_result<T>(errors: Vec<T>) -> Result<(), Vec<T>> {
    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

/// Returns duplicated items keeping the order of their second occurrence, each duplicate once.
pub fn get_duplicates<'a, T>(items: impl Iterator<Item = &'a T>) -> Vec<&'a T>
where
    T: Eq + Hash + ?Sized + 'a,
{
    let mut seen = FxHashSet::default();
    let mut reported = FxHashSet::default();

    items.filter(|item| !seen.insert(*item) && reported.insert(*item)).collect()
}
