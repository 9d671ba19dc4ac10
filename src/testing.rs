//! Assertion helpers for testing collection transforms.
//!
//! Used by this crate's own integration tests and available to downstream
//! test suites: order-sensitive equality for shape-preserving operations,
//! and multiset equality for results whose order is unspecified (groups,
//! indexes, values of a map).

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// Assert element-for-element equality, order included.
///
/// The order-sensitive check for shape-preserving results (select, reject,
/// map); use [`assert_same_elements`] when the operation leaves order
/// unspecified.
///
/// # Panics
///
/// Panics if the two collections differ in length or at any position, naming
/// the first differing index.
///
/// # Example
///
/// ```
/// use corral::testing::assert_collections_equal;
///
/// assert_collections_equal(&[1, 2, 3], &[1, 2, 3]);
/// ```
pub fn assert_collections_equal<T: Debug + PartialEq>(actual: &[T], expected: &[T]) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "collections differ in length: expected {} elements, got {}\n  expected: {expected:?}\n  actual:   {actual:?}",
        expected.len(),
        actual.len()
    );

    for (i, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        assert_eq!(
            a, e,
            "collections differ at index {i}: expected {e:?}, got {a:?}\n  expected: {expected:?}\n  actual:   {actual:?}"
        );
    }
}

/// Assert that two collections hold the same elements with the same
/// multiplicities, ignoring order.
///
/// # Panics
///
/// Panics with a detailed message if any element appears a different number
/// of times in the two collections.
///
/// # Example
///
/// ```
/// use corral::testing::assert_same_elements;
///
/// assert_same_elements(&[3, 1, 2, 1], &[1, 1, 2, 3]);
/// ```
pub fn assert_same_elements<T: Debug + Eq + Hash>(actual: &[T], expected: &[T]) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "collections differ in length: expected {} elements, got {}\n  expected: {expected:?}\n  actual:   {actual:?}",
        expected.len(),
        actual.len()
    );

    fn counts<T: Eq + Hash>(items: &[T]) -> HashMap<&T, usize> {
        let mut m: HashMap<&T, usize> = HashMap::new();
        for item in items {
            *m.entry(item).or_default() += 1;
        }
        m
    }
    let actual_counts = counts(actual);
    let expected_counts = counts(expected);

    if actual_counts != expected_counts {
        let missing: Vec<_> = expected_counts
            .keys()
            .filter(|k| actual_counts.get(*k) != expected_counts.get(*k))
            .collect();
        panic!(
            "collections differ in content: elements with mismatched counts: {missing:?}\n  expected: {expected:?}\n  actual:   {actual:?}"
        );
    }
}
