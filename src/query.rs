//! Chainable, owning wrapper over the query helpers.
//!
//! `Query` holds a `Vec<T>` and moves it from step to step, so chained
//! calls do not clone elements. Terminal methods return the same results as
//! the free functions of the same name.
//!
//! ```
//! use seq_query::Query;
//!
//! let doubled: Vec<i32> = Query::new(vec![3, 1, 2, 1, 3])
//!     .distinct()
//!     .filter(|x| *x > 1)
//!     .select(|x| x * 2)
//!     .into_vec();
//!
//! assert_eq!(doubled, vec![6, 4]);
//! ```

use std::hash::Hash;

use crate::error::QueryError;
use crate::grouping::{Grouping, group_owned};
use crate::hashmap::{QueryMap, QuerySet, set_with_capacity};
use crate::transform::{DuplicateKeyPolicy, dictionary_owned};
use crate::{transform, traverse};

/// An ordered list with chainable query operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query<T> {
    items: Vec<T>,
}

impl<T> Query<T> {
    /// Wrap a list for chaining.
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    /// Keep the elements matching `predicate`.
    pub fn filter<F>(self, mut predicate: F) -> Self
    where
        F: FnMut(&T) -> bool,
    {
        Self::new(self.items.into_iter().filter(|x| predicate(x)).collect())
    }

    /// Project every element.
    pub fn select<R, F>(self, projector: F) -> Query<R>
    where
        F: FnMut(&T) -> R,
    {
        Query::new(transform::select(&self.items, projector))
    }

    /// Run `action` on every element and pass the list on unchanged.
    pub fn inspect<F>(self, action: F) -> Self
    where
        F: FnMut(&T),
    {
        traverse::for_each(&self.items, action);
        self
    }

    /// Call `action` on every element in order.
    pub fn for_each<F>(&self, action: F)
    where
        F: FnMut(&T),
    {
        traverse::for_each(&self.items, action)
    }

    /// Left fold starting from `seed`.
    pub fn aggregate<A, F>(&self, seed: A, accumulator: F) -> A
    where
        F: FnMut(A, &T) -> A,
    {
        transform::aggregate(&self.items, seed, accumulator)
    }

    /// True when every element matches. Vacuously true when empty.
    pub fn all<F>(&self, predicate: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        traverse::all(&self.items, predicate)
    }

    /// True when at least one element matches.
    pub fn any<F>(&self, predicate: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        traverse::any(&self.items, predicate)
    }

    /// The first element matching `predicate`, if any.
    pub fn first<F>(&self, predicate: F) -> Option<&T>
    where
        F: FnMut(&T) -> bool,
    {
        traverse::first(&self.items, predicate)
    }

    /// Alias of [`Query::first`].
    pub fn find<F>(&self, predicate: F) -> Option<&T>
    where
        F: FnMut(&T) -> bool,
    {
        traverse::find(&self.items, predicate)
    }

    /// Index of the first matching element.
    pub fn find_index<F>(&self, predicate: F) -> Option<usize>
    where
        F: FnMut(&T) -> bool,
    {
        traverse::find_index(&self.items, predicate)
    }

    /// Group the elements by key, consuming the query.
    pub fn group_by<K, F>(self, key_selector: F) -> Vec<Grouping<K, T>>
    where
        K: Eq + Hash,
        F: FnMut(&T) -> K,
    {
        group_owned(self.items, key_selector)
    }

    /// Build a key-unique map, rejecting repeated keys.
    pub fn to_dictionary<K, F>(self, key_selector: F) -> Result<QueryMap<K, T>, QueryError<K>>
    where
        K: Eq + Hash,
        F: FnMut(&T) -> K,
    {
        self.to_dictionary_with(key_selector, DuplicateKeyPolicy::Reject)
    }

    /// Build a key-unique map, resolving repeated keys with `policy`.
    pub fn to_dictionary_with<K, F>(
        self,
        key_selector: F,
        policy: DuplicateKeyPolicy,
    ) -> Result<QueryMap<K, T>, QueryError<K>>
    where
        K: Eq + Hash,
        F: FnMut(&T) -> K,
    {
        dictionary_owned(self.items, key_selector, policy)
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when the query holds no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Borrow the elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Unwrap the elements.
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T: Clone> Query<T> {
    /// The first matching element, or `fallback`.
    pub fn first_or<F>(&self, predicate: F, fallback: T) -> T
    where
        F: FnMut(&T) -> bool,
    {
        traverse::first_or(&self.items, predicate, fallback)
    }
}

impl<T: Clone + Default> Query<T> {
    /// The first matching element, or `T::default()`.
    pub fn first_or_default<F>(&self, predicate: F) -> T
    where
        F: FnMut(&T) -> bool,
    {
        traverse::first_or_default(&self.items, predicate)
    }
}

impl<T: Eq + Hash> Query<T> {
    /// Drop repeated values, keeping first occurrences in order.
    pub fn distinct(self) -> Self {
        let keep: Vec<bool> = {
            let mut seen: QuerySet<&T> = set_with_capacity(self.items.len());
            self.items.iter().map(|item| seen.insert(item)).collect()
        };
        Self::new(
            self.items
                .into_iter()
                .zip(keep)
                .filter_map(|(item, keep)| keep.then_some(item))
                .collect(),
        )
    }

    /// Drop every element whose value occurs in `second`.
    pub fn except(self, second: &[T]) -> Self {
        let excluded: QuerySet<&T> = second.iter().collect();
        Self::new(
            self.items
                .into_iter()
                .filter(|item| !excluded.contains(item))
                .collect(),
        )
    }

    /// Collect every distinct value into a set.
    pub fn to_hash_set(self) -> QuerySet<T> {
        self.items.into_iter().collect()
    }
}

impl<T> From<Vec<T>> for Query<T> {
    fn from(items: Vec<T>) -> Self {
        Self::new(items)
    }
}

impl<T> FromIterator<T> for Query<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<T> IntoIterator for Query<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
