//! In-place ordering by a selector-derived key.
//!
//! Sorting is closed-world: a key must be a string, a primitive integer, a
//! float, or a timestamp. The [`SortKey`] trait is sealed, so any other key
//! type is a compile error — there is no generic fallback comparator to
//! silently produce a wrong order for types without a meaningful one.
//!
//! Floats order by total order (`ordered-float`), so NaN keys sort
//! deterministically instead of poisoning the comparison.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use ordered_float::OrderedFloat;

use crate::error::Result;
use crate::record::HasField;
use crate::selector::{Accessor, IntoAccessor};

mod sealed {
    pub trait Sealed {}
}

/// A sortable key kind: string, integer, float, or timestamp.
///
/// Sealed; the set of key kinds is fixed by design.
pub trait SortKey: sealed::Sealed {
    /// Total order over this key kind.
    fn cmp_key(&self, other: &Self) -> Ordering;
}

macro_rules! ord_sort_key {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}
            impl SortKey for $ty {
                fn cmp_key(&self, other: &Self) -> Ordering {
                    self.cmp(other)
                }
            }
        )+
    };
}

ord_sort_key!(
    String, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize,
);

impl sealed::Sealed for f32 {}
impl SortKey for f32 {
    fn cmp_key(&self, other: &Self) -> Ordering {
        OrderedFloat(*self).cmp(&OrderedFloat(*other))
    }
}

impl sealed::Sealed for f64 {}
impl SortKey for f64 {
    fn cmp_key(&self, other: &Self) -> Ordering {
        OrderedFloat(*self).cmp(&OrderedFloat(*other))
    }
}

impl sealed::Sealed for DateTime<Utc> {}
impl SortKey for DateTime<Utc> {
    fn cmp_key(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }
}

/// An attribute sort key over a `String` field.
///
/// The four key wrappers name both the field and its key kind, so the key
/// type never has to be spelled as a type parameter at the call site:
/// `sort(&mut accounts, StrKey("name"))`.
pub struct StrKey<'a>(pub &'a str);

/// An attribute sort key over an `i64` field.
pub struct IntKey<'a>(pub &'a str);

/// An attribute sort key over an `f64` field.
pub struct FloatKey<'a>(pub &'a str);

/// An attribute sort key over a `DateTime<Utc>` field.
pub struct TimeKey<'a>(pub &'a str);

impl<T> IntoAccessor<T, String> for StrKey<'_>
where
    T: HasField<String> + 'static,
{
    fn into_accessor(self) -> Result<Accessor<T, String>> {
        self.0.into_accessor()
    }
}

impl<T> IntoAccessor<T, i64> for IntKey<'_>
where
    T: HasField<i64> + 'static,
{
    fn into_accessor(self) -> Result<Accessor<T, i64>> {
        self.0.into_accessor()
    }
}

impl<T> IntoAccessor<T, f64> for FloatKey<'_>
where
    T: HasField<f64> + 'static,
{
    fn into_accessor(self) -> Result<Accessor<T, f64>> {
        self.0.into_accessor()
    }
}

impl<T> IntoAccessor<T, DateTime<Utc>> for TimeKey<'_>
where
    T: HasField<DateTime<Utc>> + 'static,
{
    fn into_accessor(self) -> Result<Accessor<T, DateTime<Utc>>> {
        self.0.into_accessor()
    }
}

/// Sort the elements in place, ascending by the selector's key.
///
/// The selector is resolved before anything moves: a resolution error leaves
/// the input order untouched. The underlying sort is unstable — ties keep no
/// guaranteed relative order; use a selector that fully disambiguates when
/// tie placement matters.
///
/// ```
/// use corral::{ops, record};
///
/// #[derive(Debug, Clone, Default)]
/// struct Account { id: i64, name: String }
/// record!(Account { i64: { id }, String: { name } });
///
/// let mut accounts = vec![
///     Account { id: 2, name: "b".into() },
///     Account { id: 1, name: "a".into() },
/// ];
/// ops::sort(&mut accounts, ops::IntKey("id"))?;
/// assert_eq!(accounts[0].id, 1);
/// # Ok::<(), corral::Error>(())
/// ```
pub fn sort<T, K, S>(items: &mut [T], selector: S) -> Result<()>
where
    K: SortKey,
    S: IntoAccessor<T, K>,
{
    let accessor = selector.into_accessor()?;
    items.sort_unstable_by(|a, b| accessor.get(a).cmp_key(&accessor.get(b)));
    Ok(())
}

/// Sort the elements in place, descending by the selector's key.
///
/// Defined by logically inverting the comparator, not by sorting ascending
/// and then reversing the sequence, so the contract stays uniform for ties.
pub fn sort_reverse<T, K, S>(items: &mut [T], selector: S) -> Result<()>
where
    K: SortKey,
    S: IntoAccessor<T, K>,
{
    let accessor = selector.into_accessor()?;
    items.sort_unstable_by(|a, b| accessor.get(a).cmp_key(&accessor.get(b)).reverse());
    Ok(())
}
