//! # seq-query
//!
//! Query-style helpers for ordered in-memory lists.
//!
//! Each helper is a free function over a slice that makes a single pass over
//! it, calling the supplied closure once per visited element in list order.
//! Outputs keep the input order unless the operation is a set conversion.
//!
//! ## Overview
//!
//! - **Traversal**: `for_each`, `filter`, `all`, `any`, `first`, `find`,
//!   `first_or`, `first_or_default`, `find_index`
//! - **Set-like**: `distinct`, `except`, `to_hash_set`
//! - **Transformation**: `select`, `aggregate`, `to_dictionary`,
//!   `to_dictionary_with`
//! - **Grouping**: `group_by` producing [`Grouping`] values
//!
//! [`Query`] wraps a `Vec<T>` for call sites that prefer method chaining.
//!
//! ## Example
//!
//! ```
//! use seq_query::{distinct, filter, find_index, group_by, select};
//!
//! let list = vec![3, 1, 2, 1, 3];
//!
//! assert_eq!(distinct(&list), vec![3, 1, 2]);
//! assert_eq!(filter(&list, |x| *x > 1), vec![3, 2, 3]);
//! assert_eq!(select(&list, |x| x * 2), vec![6, 2, 4, 2, 6]);
//! assert_eq!(find_index(&list, |x| *x == 2), Some(2));
//!
//! let groups = group_by(&list, |x| x % 2);
//! assert_eq!(*groups[0].key(), 1);
//! assert_eq!(groups[0].elements(), &[3, 1, 1, 3]);
//! assert_eq!(*groups[1].key(), 0);
//! assert_eq!(groups[1].elements(), &[2]);
//! ```

pub mod error;
pub mod grouping;
pub mod hashmap;
pub mod query;
pub mod set_ops;
pub mod transform;
pub mod traverse;

pub use error::QueryError;
pub use grouping::{Grouping, group_by};
pub use hashmap::{QueryMap, QuerySet};
pub use query::Query;
pub use set_ops::{distinct, except, to_hash_set};
pub use transform::{DuplicateKeyPolicy, aggregate, select, to_dictionary, to_dictionary_with};
pub use traverse::{all, any, filter, find, find_index, first, first_or, first_or_default, for_each};
