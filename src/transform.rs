//! Projection, folding and dictionary construction.

use std::collections::hash_map::Entry;
use std::hash::Hash;

use tracing::debug;

use crate::error::QueryError;
use crate::hashmap::{QueryMap, map_with_capacity};

/// What `to_dictionary_with` does when two elements produce the same key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicateKeyPolicy {
    /// Fail with [`QueryError::DuplicateKey`] on the first repeated key.
    #[default]
    Reject,
    /// Keep the element that produced the key first; ignore later ones.
    KeepFirst,
    /// Overwrite with the element that produced the key last.
    KeepLast,
}

/// Project every element, keeping length and order.
pub fn select<T, R, F>(items: &[T], mut projector: F) -> Vec<R>
where
    F: FnMut(&T) -> R,
{
    let mut results = Vec::with_capacity(items.len());
    for item in items {
        results.push(projector(item));
    }
    results
}

/// Left fold starting from `seed`.
///
/// Returns `seed` unchanged for an empty list.
pub fn aggregate<T, A, F>(items: &[T], seed: A, mut accumulator: F) -> A
where
    F: FnMut(A, &T) -> A,
{
    let mut value = seed;
    for item in items {
        value = accumulator(value, item);
    }
    value
}

/// Map each element under the key produced by `key_selector`.
///
/// Rejects repeated keys; see [`to_dictionary_with`] for other policies.
pub fn to_dictionary<T, K, F>(
    items: &[T],
    key_selector: F,
) -> Result<QueryMap<K, T>, QueryError<K>>
where
    T: Clone,
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    to_dictionary_with(items, key_selector, DuplicateKeyPolicy::Reject)
}

/// Map each element under its key, resolving repeated keys with `policy`.
pub fn to_dictionary_with<T, K, F>(
    items: &[T],
    key_selector: F,
    policy: DuplicateKeyPolicy,
) -> Result<QueryMap<K, T>, QueryError<K>>
where
    T: Clone,
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    dictionary_owned(items.iter().cloned(), key_selector, policy)
}

/// Dictionary construction over owned elements, shared with
/// `Query::to_dictionary_with`.
pub(crate) fn dictionary_owned<T, K, F, I>(
    items: I,
    mut key_selector: F,
    policy: DuplicateKeyPolicy,
) -> Result<QueryMap<K, T>, QueryError<K>>
where
    K: Eq + Hash,
    F: FnMut(&T) -> K,
    I: IntoIterator<Item = T>,
{
    let items = items.into_iter();
    // Slots remember where each key was first produced for error reporting.
    let mut slots: QueryMap<K, (usize, T)> = map_with_capacity(items.size_hint().0);

    for (index, item) in items.enumerate() {
        match slots.entry(key_selector(&item)) {
            Entry::Vacant(entry) => {
                entry.insert((index, item));
            }
            Entry::Occupied(mut entry) => {
                let first_index = entry.get().0;
                debug!(index, first_index, ?policy, "duplicate key in to_dictionary");
                match policy {
                    DuplicateKeyPolicy::Reject => {
                        let (key, _) = entry.remove_entry();
                        return Err(QueryError::DuplicateKey {
                            key,
                            index,
                            first_index,
                        });
                    }
                    DuplicateKeyPolicy::KeepFirst => {}
                    DuplicateKeyPolicy::KeepLast => {
                        entry.insert((first_index, item));
                    }
                }
            }
        }
    }

    Ok(slots
        .into_iter()
        .map(|(key, (_, item))| (key, item))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Employee {
        name: &'static str,
        dept: &'static str,
        salary: u32,
    }

    fn staff() -> Vec<Employee> {
        vec![
            Employee {
                name: "SMITH",
                dept: "SALES",
                salary: 50_000,
            },
            Employee {
                name: "JONES",
                dept: "ENGINEER",
                salary: 75_000,
            },
            Employee {
                name: "DOE",
                dept: "SALES",
                salary: 60_000,
            },
        ]
    }

    #[test]
    fn test_select_doubles() {
        assert_eq!(select(&[3, 1, 2, 1, 3], |x| x * 2), vec![6, 2, 4, 2, 6]);
    }

    #[test]
    fn test_select_visits_each_element_once() {
        let list = [3, 1, 2, 1, 3];
        let mut visited = Vec::new();
        let projected = select(&list, |x| {
            visited.push(*x);
            x * 2
        });
        assert_eq!(visited, list);
        assert_eq!(projected.len(), list.len());
    }

    #[test]
    fn test_select_changes_type() {
        let names = select(&staff(), |e| e.name.to_string());
        assert_eq!(names, vec!["SMITH", "JONES", "DOE"]);
    }

    #[test]
    fn test_aggregate_empty_returns_seed() {
        let empty: [u32; 0] = [];
        assert_eq!(aggregate(&empty, 42, |acc, x| acc + x), 42);
    }

    #[test]
    fn test_aggregate_is_left_fold() {
        let folded = aggregate(&["a", "b", "c"], String::from(">"), |mut acc, s| {
            acc.push_str(s);
            acc
        });
        assert_eq!(folded, ">abc");
    }

    #[test]
    fn test_aggregate_total_salary() {
        let total = aggregate(&staff(), 0u32, |acc, e| acc + e.salary);
        assert_eq!(total, 185_000);
    }

    #[test]
    fn test_to_dictionary_unique_keys() {
        let by_name = to_dictionary(&staff(), |e| e.name).unwrap();
        assert_eq!(by_name.len(), 3);
        assert_eq!(by_name["JONES"].salary, 75_000);
    }

    #[test]
    fn test_to_dictionary_rejects_duplicate() {
        let err = to_dictionary(&staff(), |e| e.dept).unwrap_err();
        assert_eq!(
            err,
            QueryError::DuplicateKey {
                key: "SALES",
                index: 2,
                first_index: 0,
            }
        );
    }

    #[test]
    fn test_to_dictionary_keep_first() {
        let by_dept =
            to_dictionary_with(&staff(), |e| e.dept, DuplicateKeyPolicy::KeepFirst).unwrap();
        assert_eq!(by_dept.len(), 2);
        assert_eq!(by_dept["SALES"].name, "SMITH");
    }

    #[test]
    fn test_to_dictionary_keep_last() {
        let by_dept =
            to_dictionary_with(&staff(), |e| e.dept, DuplicateKeyPolicy::KeepLast).unwrap();
        assert_eq!(by_dept.len(), 2);
        assert_eq!(by_dept["SALES"].name, "DOE");
        assert_eq!(by_dept["ENGINEER"].name, "JONES");
    }

    #[test]
    fn test_to_dictionary_visits_each_element_once() {
        let list = [3, 1, 2, 1, 3];
        let mut visited = Vec::new();
        let by_parity = to_dictionary_with(
            &list,
            |x| {
                visited.push(*x);
                x % 2
            },
            DuplicateKeyPolicy::KeepLast,
        )
        .unwrap();
        assert_eq!(visited, list);
        assert_eq!(by_parity.len(), 2);
        assert_eq!(by_parity[&1], 3);
        assert_eq!(by_parity[&0], 2);
    }

    #[test]
    fn test_to_dictionary_empty() {
        let empty: [i32; 0] = [];
        let map = to_dictionary(&empty, |x| *x).unwrap();
        assert!(map.is_empty());
    }

    #[test]
    fn test_default_policy_is_reject() {
        assert_eq!(DuplicateKeyPolicy::default(), DuplicateKeyPolicy::Reject);
    }
}
