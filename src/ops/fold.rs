//! Left fold over a collection.

/// Fold every element, in input order, into an accumulator.
///
/// The initial accumulator is the accumulator type's `Default`: an empty map
/// for associative accumulators, an empty vector for sequences, a
/// zero-initialized instance for records, zero for scalars. The folder
/// receives the accumulator by value and returns the next one; the final
/// return value is the result. The whole collection is always consumed —
/// there is no short-circuit.
///
/// The folder's accumulator parameter and return type are the same type by
/// construction, so a mismatched folder is a compile error rather than a
/// runtime condition.
///
/// ```
/// use corral::ops;
///
/// let nums = vec![1i64, 2, 3];
/// let total: i64 = ops::fold_left(&nums, |acc, n| acc + n);
/// assert_eq!(total, 6);
///
/// let none: Vec<i64> = Vec::new();
/// assert_eq!(ops::fold_left(&none, |acc: i64, n| acc + n), 0);
/// ```
pub fn fold_left<T, A, F>(items: &[T], mut folder: F) -> A
where
    A: Default,
    F: FnMut(A, &T) -> A,
{
    let mut acc = A::default();
    for element in items {
        acc = folder(acc, element);
    }
    acc
}
