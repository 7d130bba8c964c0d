//! Set-like helpers: deduplication, subtraction and set conversion.

use std::hash::Hash;

use crate::hashmap::{QuerySet, set_with_capacity};

/// One element per distinct value, in first-seen order.
pub fn distinct<T>(items: &[T]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let mut seen: QuerySet<&T> = set_with_capacity(items.len());
    items
        .iter()
        .filter(|item| seen.insert(*item))
        .cloned()
        .collect()
}

/// Elements of `items` whose value does not occur anywhere in `second`.
///
/// Order and duplicates of the surviving elements are kept.
pub fn except<T>(items: &[T], second: &[T]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let excluded: QuerySet<&T> = second.iter().collect();
    items
        .iter()
        .filter(|item| !excluded.contains(item))
        .cloned()
        .collect()
}

/// Collect every distinct value into a set.
pub fn to_hash_set<T>(items: &[T]) -> QuerySet<T>
where
    T: Eq + Hash + Clone,
{
    let mut set = set_with_capacity(items.len());
    set.extend(items.iter().cloned());
    set
}
