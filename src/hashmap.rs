//! Hash container aliases used by the query helpers.

use ahash::RandomState;
use indexmap::IndexMap;

/// Key-unique map returned by `to_dictionary`.
pub type QueryMap<K, V> = std::collections::HashMap<K, V, RandomState>;

/// Set returned by `to_hash_set`.
pub type QuerySet<T> = std::collections::HashSet<T, RandomState>;

// group_by needs first-seen key order, so groups are collected in an
// insertion-ordered map before being turned into `Grouping`s.
pub(crate) type GroupIndex<K, V> = IndexMap<K, V, RandomState>;

pub(crate) fn set_with_capacity<T>(capacity: usize) -> QuerySet<T> {
    QuerySet::with_capacity_and_hasher(capacity, RandomState::new())
}

pub(crate) fn map_with_capacity<K, V>(capacity: usize) -> QueryMap<K, V> {
    QueryMap::with_capacity_and_hasher(capacity, RandomState::new())
}
