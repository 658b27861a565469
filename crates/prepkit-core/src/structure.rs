//! List restructuring: shuffling, flattening, and deduplication.

use crate::error::{PrepError, Result};
use crate::value::Value;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::collections::HashSet;
use std::hash::Hash;
use tracing::debug;

/// Return a shuffled copy of `data`.
///
/// A given `seed` always produces the same permutation; without one the
/// thread-local RNG is used. The seeded generator is private to this call.
pub fn lst_shuffle<T: Clone>(data: &[T], seed: Option<u64>) -> Vec<T> {
    let mut shuffled = data.to_vec();
    match seed {
        Some(seed) => shuffled.shuffle(&mut StdRng::seed_from_u64(seed)),
        None => shuffled.shuffle(&mut rand::rng()),
    }
    debug!(len = shuffled.len(), seeded = seed.is_some(), "Shuffled list");
    shuffled
}

/// Concatenate one level of nesting.
///
/// # Examples
///
/// ```
/// use prepkit_core::structure::lst_flatten;
///
/// assert_eq!(lst_flatten(vec![vec![1, 2], vec![3, 4], vec![5]]), vec![1, 2, 3, 4, 5]);
/// ```
pub fn lst_flatten<T>(nested: Vec<Vec<T>>) -> Vec<T> {
    nested.into_iter().flatten().collect()
}

/// Flatten a list of [`Value::List`] items by one level.
///
/// Fails with [`PrepError::NotAList`] on the first item that is not a list.
pub fn flatten_values(nested: &[Value]) -> Result<Vec<Value>> {
    let lists = nested
        .iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::List(items) => Ok(items.clone()),
            other => Err(PrepError::NotAList {
                index,
                found: format!("{} {}", other.kind(), other),
            }),
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(lst_flatten(lists))
}

/// Remove duplicates, keeping the first occurrence of each item in order.
///
/// # Examples
///
/// ```
/// use prepkit_core::structure::remove_duplicates;
///
/// assert_eq!(remove_duplicates(&[1, 2, 2, 3, 1, 4]), vec![1, 2, 3, 4]);
/// ```
pub fn remove_duplicates<T: Eq + Hash + Clone>(data: &[T]) -> Vec<T> {
    let mut seen = HashSet::with_capacity(data.len());
    let unique: Vec<T> = data
        .iter()
        .filter(|item| seen.insert(*item))
        .cloned()
        .collect();
    debug!(
        input = data.len(),
        removed = data.len() - unique.len(),
        "Removed duplicates"
    );
    unique
}
