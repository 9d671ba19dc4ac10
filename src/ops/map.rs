//! Shape-transforming projection: map and attributes.

use crate::error::Result;
use crate::record::HasField;
use crate::selector::IntoAccessor;

/// Project every element through the selector, in input order.
///
/// The result is a new sequence whose element type is the selector's output
/// type; its length always equals the input's length.
///
/// ```
/// use corral::{by, ops};
///
/// let nums = vec![1u32, 2, 3];
/// let squares: Vec<u32> = ops::map(&nums, by(|n: &u32| n * n))?;
/// assert_eq!(squares, vec![1, 4, 9]);
/// # Ok::<(), corral::Error>(())
/// ```
pub fn map<T, V, S>(items: &[T], selector: S) -> Result<Vec<V>>
where
    S: IntoAccessor<T, V>,
{
    let accessor = selector.into_accessor()?;
    Ok(items.iter().map(|element| accessor.get(element)).collect())
}

/// Collect the named attribute from every element.
///
/// [`map`] restricted to attribute-name selectors — semantically identical,
/// kept as a named convenience.
///
/// ```
/// use corral::{ops, record};
///
/// #[derive(Debug, Clone, Default)]
/// struct Account { id: i64, name: String }
/// record!(Account { i64: { id }, String: { name } });
///
/// let accounts = vec![
///     Account { id: 1, name: "ops".into() },
///     Account { id: 2, name: "billing".into() },
/// ];
/// let names: Vec<String> = ops::attributes(&accounts, "name")?;
/// assert_eq!(names, vec!["ops".to_string(), "billing".to_string()]);
/// # Ok::<(), corral::Error>(())
/// ```
pub fn attributes<T, V>(items: &[T], field: &str) -> Result<Vec<V>>
where
    T: HasField<V> + 'static,
    V: 'static,
{
    map(items, field)
}
