//! Keyed shape transforms: group and index.

use std::collections::HashMap;
use std::hash::Hash;

use crate::error::Result;
use crate::selector::IntoAccessor;

/// Partition elements by a derived key: key -> all elements bearing it.
///
/// Each element's key is computed by the selector; the element is appended to
/// the sequence stored under that key. Within a group, element order equals
/// input order; iteration order across groups is unspecified (map semantics).
/// The concatenation of all groups is always a permutation of the input.
///
/// ```
/// use corral::{by, ops};
///
/// let words = vec!["ant", "bee", "asp"];
/// let by_initial = ops::group(&words, by(|w: &&str| w.as_bytes()[0]))?;
/// assert_eq!(by_initial[&b'a'], vec!["ant", "asp"]);
/// assert_eq!(by_initial[&b'b'], vec!["bee"]);
/// # Ok::<(), corral::Error>(())
/// ```
pub fn group<T, K, S>(items: &[T], selector: S) -> Result<HashMap<K, Vec<T>>>
where
    T: Clone,
    K: Eq + Hash,
    S: IntoAccessor<T, K>,
{
    let accessor = selector.into_accessor()?;
    let mut groups: HashMap<K, Vec<T>> = HashMap::new();
    for element in items {
        groups
            .entry(accessor.get(element))
            .or_default()
            .push(element.clone());
    }
    Ok(groups)
}

/// Index elements by a derived key: key -> a single element, last write wins.
///
/// Like [`group`], but each key stores exactly one element. When several
/// elements share a key, the later one (in input order) overwrites the
/// earlier — a deliberate override policy, not a collision error. The result
/// has at most `items.len()` entries, exactly that many when all keys are
/// unique.
pub fn index<T, K, S>(items: &[T], selector: S) -> Result<HashMap<K, T>>
where
    T: Clone,
    K: Eq + Hash,
    S: IntoAccessor<T, K>,
{
    let accessor = selector.into_accessor()?;
    let mut indexed: HashMap<K, T> = HashMap::new();
    for element in items {
        indexed.insert(accessor.get(element), element.clone());
    }
    Ok(indexed)
}
