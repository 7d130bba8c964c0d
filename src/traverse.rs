//! Traversal and filtering helpers.
//!
//! Every helper walks the list from index 0 upward and calls its callback
//! once per visited element. `all`, `any`, `first`, `find` and `find_index`
//! stop at the first decisive element.

/// Call `action` on every element in order.
pub fn for_each<T, F>(items: &[T], mut action: F)
where
    F: FnMut(&T),
{
    for item in items {
        action(item);
    }
}

/// Keep the elements matching `predicate`, preserving their order.
pub fn filter<T, F>(items: &[T], mut predicate: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T) -> bool,
{
    let mut results = Vec::new();
    for item in items {
        if predicate(item) {
            results.push(item.clone());
        }
    }
    results
}

/// True when every element matches. An empty list is vacuously true.
pub fn all<T, F>(items: &[T], mut predicate: F) -> bool
where
    F: FnMut(&T) -> bool,
{
    for item in items {
        if !predicate(item) {
            return false;
        }
    }
    true
}

/// True when at least one element matches.
pub fn any<T, F>(items: &[T], mut predicate: F) -> bool
where
    F: FnMut(&T) -> bool,
{
    for item in items {
        if predicate(item) {
            return true;
        }
    }
    false
}

/// The first element matching `predicate`, if any.
pub fn first<T, F>(items: &[T], predicate: F) -> Option<&T>
where
    F: FnMut(&T) -> bool,
{
    find_index(items, predicate).map(|i| &items[i])
}

/// Alias of [`first`], kept so call sites can use either name.
pub fn find<T, F>(items: &[T], predicate: F) -> Option<&T>
where
    F: FnMut(&T) -> bool,
{
    first(items, predicate)
}

/// The first matching element, or `fallback` when nothing matches.
pub fn first_or<T, F>(items: &[T], predicate: F, fallback: T) -> T
where
    T: Clone,
    F: FnMut(&T) -> bool,
{
    first(items, predicate).cloned().unwrap_or(fallback)
}

/// The first matching element, or `T::default()` when nothing matches.
///
/// A default-valued match cannot be told apart from "not found"; use
/// [`first`] when that matters.
pub fn first_or_default<T, F>(items: &[T], predicate: F) -> T
where
    T: Clone + Default,
    F: FnMut(&T) -> bool,
{
    first(items, predicate).cloned().unwrap_or_default()
}

/// Index of the first matching element.
pub fn find_index<T, F>(items: &[T], mut predicate: F) -> Option<usize>
where
    F: FnMut(&T) -> bool,
{
    for (i, item) in items.iter().enumerate() {
        if predicate(item) {
            return Some(i);
        }
    }
    None
}
