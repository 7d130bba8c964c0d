//! Grouping of list elements by a derived key.

use std::hash::Hash;

use tracing::trace;

use crate::hashmap::GroupIndex;

/// A key together with the elements that produced it, in encounter order.
///
/// Only created by [`group_by`]. The contents cannot be changed after
/// construction; take ownership with [`Grouping::into_parts`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grouping<K, T> {
    key: K,
    elements: Vec<T>,
}

impl<K, T> Grouping<K, T> {
    pub(crate) fn new(key: K, elements: Vec<T>) -> Self {
        Self { key, elements }
    }

    /// The key shared by every element in the group.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// The grouped elements in encounter order.
    pub fn elements(&self) -> &[T] {
        &self.elements
    }

    /// Iterate over the grouped elements.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    /// Number of elements in the group. Never zero.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Always false for groups built by `group_by`.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Split the group into its key and elements.
    pub fn into_parts(self) -> (K, Vec<T>) {
        (self.key, self.elements)
    }
}

impl<K, T> IntoIterator for Grouping<K, T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, K, T> IntoIterator for &'a Grouping<K, T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

/// Group elements by the key `key_selector` produces for them.
///
/// Groups appear in the order their key was first seen. Within a group,
/// elements keep their original relative order.
pub fn group_by<T, K, F>(items: &[T], key_selector: F) -> Vec<Grouping<K, T>>
where
    T: Clone,
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    group_owned(items.iter().cloned(), key_selector)
}

/// Grouping over owned elements, shared with `Query::group_by`.
pub(crate) fn group_owned<T, K, F, I>(items: I, mut key_selector: F) -> Vec<Grouping<K, T>>
where
    K: Eq + Hash,
    F: FnMut(&T) -> K,
    I: IntoIterator<Item = T>,
{
    let mut groupings: GroupIndex<K, Vec<T>> = GroupIndex::default();
    let mut elements = 0usize;

    for item in items {
        let key = key_selector(&item);
        groupings.entry(key).or_default().push(item);
        elements += 1;
    }

    trace!(elements, groups = groupings.len(), "group_by complete");

    groupings
        .into_iter()
        .map(|(key, group)| Grouping::new(key, group))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_by_parity() {
        let groups = group_by(&[3, 1, 2, 1, 3], |x| x % 2);
        assert_eq!(groups.len(), 2);
        assert_eq!(*groups[0].key(), 1);
        assert_eq!(groups[0].elements(), &[3, 1, 1, 3]);
        assert_eq!(*groups[1].key(), 0);
        assert_eq!(groups[1].elements(), &[2]);
    }

    #[test]
    fn test_group_by_visits_each_element_once() {
        let list = [3, 1, 2, 1, 3];
        let mut visited = Vec::new();
        group_by(&list, |x| {
            visited.push(*x);
            x % 2
        });
        assert_eq!(visited, list);
    }

    #[test]
    fn test_group_by_empty() {
        let empty: [i32; 0] = [];
        assert!(group_by(&empty, |x| *x).is_empty());
    }

    #[test]
    fn test_group_by_string_key() {
        let words = ["apple", "avocado", "banana", "blueberry", "cherry"];
        let groups = group_by(&words, |w| w.chars().next());
        let keys: Vec<_> = groups.iter().map(|g| *g.key()).collect();
        assert_eq!(keys, vec![Some('a'), Some('b'), Some('c')]);
        assert_eq!(groups[1].len(), 2);
        assert!(!groups[1].is_empty());
    }

    #[test]
    fn test_grouping_iteration() {
        let groups = group_by(&[10, 11, 20], |x| x / 10);
        let borrowed: Vec<i32> = groups[0].iter().copied().collect();
        assert_eq!(borrowed, vec![10, 11]);

        let mut total = 0;
        for x in &groups[1] {
            total += x;
        }
        assert_eq!(total, 20);

        let owned: Vec<i32> = groups[0].clone().into_iter().collect();
        assert_eq!(owned, vec![10, 11]);
    }

    #[test]
    fn test_grouping_into_parts() {
        let mut groups = group_by(&["x", "y"], |s| s.len());
        let (key, elements) = groups.remove(0).into_parts();
        assert_eq!(key, 1);
        assert_eq!(elements, vec!["x", "y"]);
    }
}
