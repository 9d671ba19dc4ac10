//! Shape-preserving operations: select, reject, filter.

use crate::error::Result;
use crate::selector::{Accessor, IntoAccessor};

/// Keep the elements whose predicate selector is true.
///
/// The result has the same element type as the input and preserves the
/// input's relative order. An empty input yields an empty result, never an
/// absent one. Elements are cloned into the result; their contents are not
/// transformed.
///
/// The predicate must produce `bool`: an attribute selector naming a
/// non-boolean field fails with
/// [`Error::PredicateType`](crate::Error::PredicateType) before any element
/// is visited.
///
/// ```
/// use corral::{ops, record};
///
/// #[derive(Debug, Clone, Default, PartialEq)]
/// struct Payment { id: i64, settled: bool }
/// record!(Payment { i64: { id }, bool: { settled } });
///
/// let payments = vec![
///     Payment { id: 1, settled: true },
///     Payment { id: 2, settled: false },
/// ];
/// let settled = ops::select(&payments, "settled")?;
/// assert_eq!(settled, vec![Payment { id: 1, settled: true }]);
/// # Ok::<(), corral::Error>(())
/// ```
pub fn select<T, S>(items: &[T], predicate: S) -> Result<Vec<T>>
where
    T: Clone,
    S: IntoAccessor<T, bool>,
{
    let accessor = predicate.into_accessor().map_err(|e| e.into_predicate())?;
    Ok(keep_where(items, &accessor))
}

/// Keep the elements whose predicate selector is false.
///
/// Defined as [`select`] over the logically negated accessor; the two
/// operations share one predicate-calling loop. `select(c, p)` and
/// `reject(c, p)` together reorder to `c`: every element lands in exactly one
/// of the two outputs.
pub fn reject<T, S>(items: &[T], predicate: S) -> Result<Vec<T>>
where
    T: Clone + 'static,
    S: IntoAccessor<T, bool>,
{
    let accessor = predicate.into_accessor().map_err(|e| e.into_predicate())?;
    Ok(keep_where(items, &accessor.negated()))
}

/// Alias for [`select`].
pub fn filter<T, S>(items: &[T], predicate: S) -> Result<Vec<T>>
where
    T: Clone,
    S: IntoAccessor<T, bool>,
{
    select(items, predicate)
}

/// The single predicate-calling loop behind select and reject.
fn keep_where<T: Clone>(items: &[T], accessor: &Accessor<T, bool>) -> Vec<T> {
    items
        .iter()
        .filter(|element| accessor.get(element))
        .cloned()
        .collect()
}
