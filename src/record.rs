//! Shape capabilities for record types.
//!
//! Attribute selectors (`"account_id"`, `"name"`, ...) resolve against a
//! record's *shape*: the set of named fields it exposes and the type each one
//! carries. Three small traits describe that shape:
//!
//! - [`Record`] — the type's name and the full list of its field names.
//! - [`HasField<V>`] — read access to the fields of type `V` by name.
//! - [`SetField<V>`] — write access to the fields of type `V` by name
//!   (used by joins to assign the related record into the owning element).
//!
//! Implement them with the [`record!`](crate::record) macro rather than by
//! hand:
//!
//! ```
//! use corral::record;
//!
//! #[derive(Debug, Clone, Default)]
//! struct Account {
//!     id: i64,
//!     name: String,
//! }
//!
//! record!(Account {
//!     i64: { id },
//!     String: { name },
//! });
//! ```
//!
//! Blanket impls forward the read capabilities through one level of ownership
//! indirection (`&T`, `Box<T>`, `Rc<T>`, `Arc<T>`), so a `Vec<Box<Account>>`
//! answers the same selectors as a `Vec<Account>`. `Box<T>` also forwards the
//! write capability; shared pointers do not.

use std::rc::Rc;
use std::sync::Arc;

/// Shape-level description of a record type.
///
/// `fields()` must return the union of every [`HasField::typed_fields`] list
/// for the type, in declaration order, and must be the same list on every
/// call: the shape is a pure, deterministic property of the type.
pub trait Record {
    /// The record type's name, as written in source (`"Account"`).
    ///
    /// Joins use it to infer default relation and foreign-key field names;
    /// errors use it to identify the offending type.
    const NAME: &'static str;

    /// All field names of the record, in declaration order.
    fn fields() -> &'static [&'static str];
}

/// Read capability: fields of type `V`, addressed by name.
///
/// Contract: `field(name)` returns `Some` for every name in `typed_fields()`
/// on every instance, and `None` for any other name. Values are returned by
/// clone; the record itself is never mutated by a read.
pub trait HasField<V>: Record {
    /// Names of this record's fields whose type is `V`.
    fn typed_fields() -> &'static [&'static str];

    /// Current value of the named field, or `None` if the record has no
    /// field of that name with type `V`.
    fn field(&self, name: &str) -> Option<V>;
}

/// The key value type a record is joined on.
///
/// Primary- and foreign-key fields of a record share this one type; joins
/// use it to infer which field type to read without an explicit type
/// annotation at the call site.
///
/// ```
/// # #[derive(Clone, Default)]
/// # struct Account { id: i64 }
/// # corral::record!(Account { i64: { id } });
/// impl corral::Keyed for Account {
///     type Key = i64;
/// }
/// ```
pub trait Keyed: Record {
    /// The type of this record's key fields.
    type Key;
}

/// Write capability: fields of type `V`, assigned by name.
///
/// Contract: `set_field(name, value)` stores the value and returns `true`
/// for every name in `settable_fields()`, and returns `false` without
/// mutating anything for any other name.
pub trait SetField<V>: Record {
    /// Names of this record's fields whose type is `V`.
    fn settable_fields() -> &'static [&'static str];

    /// Assign `value` into the named field. Returns whether the field exists.
    fn set_field(&mut self, name: &str, value: V) -> bool;
}

/* ===================== ownership indirection ===================== */

impl<T: Record> Record for &T {
    const NAME: &'static str = T::NAME;
    fn fields() -> &'static [&'static str] {
        T::fields()
    }
}

impl<V, T: HasField<V>> HasField<V> for &T {
    fn typed_fields() -> &'static [&'static str] {
        T::typed_fields()
    }
    fn field(&self, name: &str) -> Option<V> {
        (**self).field(name)
    }
}

impl<T: Record> Record for Box<T> {
    const NAME: &'static str = T::NAME;
    fn fields() -> &'static [&'static str] {
        T::fields()
    }
}

impl<V, T: HasField<V>> HasField<V> for Box<T> {
    fn typed_fields() -> &'static [&'static str] {
        T::typed_fields()
    }
    fn field(&self, name: &str) -> Option<V> {
        (**self).field(name)
    }
}

impl<V, T: SetField<V>> SetField<V> for Box<T> {
    fn settable_fields() -> &'static [&'static str] {
        T::settable_fields()
    }
    fn set_field(&mut self, name: &str, value: V) -> bool {
        (**self).set_field(name, value)
    }
}

impl<T: Record> Record for Rc<T> {
    const NAME: &'static str = T::NAME;
    fn fields() -> &'static [&'static str] {
        T::fields()
    }
}

impl<V, T: HasField<V>> HasField<V> for Rc<T> {
    fn typed_fields() -> &'static [&'static str] {
        T::typed_fields()
    }
    fn field(&self, name: &str) -> Option<V> {
        (**self).field(name)
    }
}

impl<T: Record> Record for Arc<T> {
    const NAME: &'static str = T::NAME;
    fn fields() -> &'static [&'static str] {
        T::fields()
    }
}

impl<V, T: HasField<V>> HasField<V> for Arc<T> {
    fn typed_fields() -> &'static [&'static str] {
        T::typed_fields()
    }
    fn field(&self, name: &str) -> Option<V> {
        (**self).field(name)
    }
}

/* ===================== record! macro ===================== */

/// Implement [`Record`], [`HasField`], and [`SetField`] for a plain struct.
///
/// Fields are grouped by their type; each group produces one `HasField` and
/// one `SetField` impl for that value type. Field types must be `Clone`
/// (reads return clones).
///
/// # Example
/// ```
/// use corral::{record, HasField};
///
/// #[derive(Debug, Clone, Default)]
/// struct Payment {
///     id: i64,
///     account_id: i64,
///     settled: bool,
/// }
///
/// record!(Payment {
///     i64: { id, account_id },
///     bool: { settled },
/// });
///
/// let p = Payment { id: 7, account_id: 3, settled: true };
/// assert_eq!(p.field("account_id"), Some(3i64));
/// assert_eq!(p.field("settled"), Some(true));
/// ```
#[macro_export]
macro_rules! record {
    ($ty:ident { $( $vty:ty : { $( $field:ident ),+ $(,)? } ),+ $(,)? }) => {
        impl $crate::Record for $ty {
            const NAME: &'static str = stringify!($ty);
            fn fields() -> &'static [&'static str] {
                &[ $( $( stringify!($field) ),+ ),+ ]
            }
        }

        $(
            impl $crate::HasField<$vty> for $ty {
                fn typed_fields() -> &'static [&'static str] {
                    &[ $( stringify!($field) ),+ ]
                }
                fn field(&self, name: &str) -> Option<$vty> {
                    match name {
                        $( stringify!($field) => Some(self.$field.clone()), )+
                        _ => None,
                    }
                }
            }

            impl $crate::SetField<$vty> for $ty {
                fn settable_fields() -> &'static [&'static str] {
                    &[ $( stringify!($field) ),+ ]
                }
                fn set_field(&mut self, name: &str, value: $vty) -> bool {
                    match name {
                        $( stringify!($field) => {
                            self.$field = value;
                            true
                        } )+
                        _ => false,
                    }
                }
            }
        )+
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Default, PartialEq)]
    struct Account {
        id: i64,
        name: String,
    }

    record!(Account {
        i64: { id },
        String: { name },
    });

    #[test]
    fn shape_lists_all_fields_in_order() {
        assert_eq!(Account::NAME, "Account");
        assert_eq!(Account::fields(), &["id", "name"]);
        assert_eq!(<Account as HasField<i64>>::typed_fields(), &["id"]);
        assert_eq!(<Account as HasField<String>>::typed_fields(), &["name"]);
    }

    #[test]
    fn reads_and_writes_by_name() {
        let mut a = Account {
            id: 1,
            name: "ops".into(),
        };
        assert_eq!(a.field("id"), Some(1i64));
        assert_eq!(a.field("name"), Some("ops".to_string()));
        assert_eq!(HasField::<i64>::field(&a, "name"), None);

        assert!(a.set_field("name", "billing".to_string()));
        assert_eq!(a.name, "billing");
        assert!(!a.set_field("missing", 9i64));
        assert_eq!(a, Account { id: 1, name: "billing".into() });
    }

    #[test]
    fn indirection_forwards_the_shape() {
        let boxed = Box::new(Account {
            id: 4,
            name: "x".into(),
        });
        assert_eq!(boxed.field("id"), Some(4i64));
        assert_eq!(<Box<Account> as Record>::NAME, "Account");

        let shared = Rc::new(Account {
            id: 5,
            name: "y".into(),
        });
        assert_eq!(shared.field("id"), Some(5i64));

        let by_ref = &Account {
            id: 6,
            name: "z".into(),
        };
        assert_eq!(HasField::<i64>::field(&by_ref, "id"), Some(6));
    }
}
