//! Error types for fallible query operations.

use thiserror::Error;

/// Errors produced by query helpers that build key-unique containers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError<K> {
    /// Two elements produced the same key under a strict duplicate policy.
    #[error("duplicate key {key:?} at index {index} (first produced at index {first_index})")]
    DuplicateKey {
        /// The key produced twice.
        key: K,
        /// Position of the element that was rejected.
        index: usize,
        /// Position of the element that first produced the key.
        first_index: usize,
    },
}

impl<K> QueryError<K> {
    /// The key that caused the error.
    pub fn key(&self) -> &K {
        match self {
            QueryError::DuplicateKey { key, .. } => key,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_key_display() {
        let err = QueryError::DuplicateKey {
            key: "a",
            index: 3,
            first_index: 1,
        };
        assert_eq!(
            err.to_string(),
            "duplicate key \"a\" at index 3 (first produced at index 1)"
        );
        assert_eq!(*err.key(), "a");
    }
}
