//! Positional access and container conversions.

use std::collections::HashMap;

/// The first element, or `None` when the collection is empty.
pub fn first<T>(items: &[T]) -> Option<&T> {
    items.first()
}

/// The last element, or `None` when the collection is empty.
pub fn last<T>(items: &[T]) -> Option<&T> {
    items.last()
}

/// The first `n` elements, in order, as a new collection.
///
/// `n` is clamped to the input length.
pub fn first_n<T: Clone>(items: &[T], n: usize) -> Vec<T> {
    items[..n.min(items.len())].to_vec()
}

/// The last `n` elements, in order, as a new collection.
///
/// `n` is clamped to the input length.
pub fn last_n<T: Clone>(items: &[T], n: usize) -> Vec<T> {
    items[items.len() - n.min(items.len())..].to_vec()
}

/// The keys of an associative collection, as a sequence.
///
/// Order is unspecified (map semantics).
pub fn keys<K: Clone, V>(map: &HashMap<K, V>) -> Vec<K> {
    map.keys().cloned().collect()
}

/// The values of an associative collection, as a sequence.
///
/// Order is unspecified (map semantics).
pub fn values<K, V: Clone>(map: &HashMap<K, V>) -> Vec<V> {
    map.values().cloned().collect()
}
