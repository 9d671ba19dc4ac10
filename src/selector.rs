//! Selectors and their resolution into typed accessors.
//!
//! A *selector* tells an operation how to project a value out of each
//! element. It comes in exactly two kinds:
//!
//! - an **attribute name** (`"account_id"`), resolved against the element's
//!   [`HasField`] shape, or
//! - a **transform function** (`by(|p: &Payment| p.amount * 2)`), applied
//!   directly.
//!
//! Resolution turns either kind into an [`Accessor`] — a projection closure
//! plus the guarantee that it succeeds for every element. It happens exactly
//! once per operation invocation, before any element is visited, and it is a
//! pure function of the element shape and the selector: a bad attribute name
//! is reported as an [`Error`](crate::Error) and nothing is mutated.
//!
//! Anything accepted as a selector implements [`IntoAccessor`]: `&str` and
//! `String` (attribute names), [`By`] (transform functions, infallible), and
//! the explicit [`Selector`] union.
//!
//! ```
//! use corral::{by, ops, record};
//!
//! #[derive(Debug, Clone, Default)]
//! struct Payment { id: i64, amount: i64 }
//! record!(Payment { i64: { id, amount } });
//!
//! let payments = vec![
//!     Payment { id: 1, amount: 250 },
//!     Payment { id: 2, amount: 75 },
//! ];
//!
//! // Attribute selector and transform selector, same operation.
//! let amounts: Vec<i64> = ops::map(&payments, "amount")?;
//! let doubled: Vec<i64> = ops::map(&payments, by(|p: &Payment| p.amount * 2))?;
//! assert_eq!(amounts, vec![250, 75]);
//! assert_eq!(doubled, vec![500, 150]);
//! # Ok::<(), corral::Error>(())
//! ```

use std::rc::Rc;

use crate::error::{Error, Result};
use crate::record::{HasField, SetField};

/// The selector union: an attribute name or a transform function.
///
/// Most call sites pass a `&str` or a [`by`]-wrapped closure straight to the
/// operation; `Selector` exists for code that stores or forwards selectors
/// as values.
pub enum Selector<T, V> {
    /// Project the named field, resolved against the element's shape.
    Attribute(Attribute<T, V>),
    /// Project through an arbitrary unary function.
    Transform(Rc<dyn Fn(&T) -> V>),
}

/// A stored attribute-name selector.
///
/// The shape lookup for `T` is captured when the selector is built, so
/// holding or resolving a [`Selector`] later restates no shape bound — and
/// transform selectors stay free of shape requirements entirely.
pub struct Attribute<T, V> {
    name: String,
    resolve: fn(&str) -> Result<Accessor<T, V>>,
}

impl<T, V> Attribute<T, V> {
    /// The field name this selector projects.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl<T, V> Selector<T, V> {
    /// An attribute-name selector.
    pub fn attr(name: impl Into<String>) -> Self
    where
        T: HasField<V> + 'static,
        V: 'static,
    {
        Selector::Attribute(Attribute {
            name: name.into(),
            resolve: Accessor::<T, V>::attribute,
        })
    }

    /// A transform-function selector.
    pub fn with<F>(f: F) -> Self
    where
        F: Fn(&T) -> V + 'static,
    {
        Selector::Transform(Rc::new(f))
    }
}

impl<T, V> Clone for Selector<T, V> {
    fn clone(&self) -> Self {
        match self {
            Selector::Attribute(attr) => Selector::Attribute(Attribute {
                name: attr.name.clone(),
                resolve: attr.resolve,
            }),
            Selector::Transform(f) => Selector::Transform(Rc::clone(f)),
        }
    }
}

/// A resolved projection: `element -> value`.
///
/// Built once per operation invocation and reused for every element of that
/// invocation. Once an accessor exists, reading a value can no longer fail.
pub struct Accessor<T, V> {
    read: Box<dyn Fn(&T) -> V>,
}

impl<T, V> Accessor<T, V> {
    /// Project the value out of one element.
    pub fn get(&self, element: &T) -> V {
        (self.read)(element)
    }

    fn from_fn<F>(f: F) -> Self
    where
        F: Fn(&T) -> V + 'static,
    {
        Accessor { read: Box::new(f) }
    }

    fn attribute(name: &str) -> Result<Self>
    where
        T: HasField<V>,
        T: 'static,
        V: 'static,
    {
        require_readable::<T, V>(name)?;
        let name = name.to_string();
        Ok(Accessor::from_fn(move |element: &T| {
            element
                .field(&name)
                .expect("HasField contract: every name in typed_fields() is readable")
        }))
    }
}

impl<T: 'static> Accessor<T, bool> {
    /// The logically negated predicate.
    ///
    /// Reject is defined as select over this wrapper, so both operations
    /// share one predicate-calling loop.
    pub(crate) fn negated(self) -> Self {
        Accessor::from_fn(move |element: &T| !self.get(element))
    }
}

/// Resolution protocol: anything an operation accepts as a selector.
pub trait IntoAccessor<T, V> {
    /// Resolve into a typed accessor, or report why the selector does not
    /// apply to the element shape.
    fn into_accessor(self) -> Result<Accessor<T, V>>;
}

impl<T, V> IntoAccessor<T, V> for &str
where
    T: HasField<V> + 'static,
    V: 'static,
{
    fn into_accessor(self) -> Result<Accessor<T, V>> {
        Accessor::attribute(self)
    }
}

impl<T, V> IntoAccessor<T, V> for String
where
    T: HasField<V> + 'static,
    V: 'static,
{
    fn into_accessor(self) -> Result<Accessor<T, V>> {
        Accessor::attribute(&self)
    }
}

impl<T: 'static, V: 'static> IntoAccessor<T, V> for Selector<T, V> {
    fn into_accessor(self) -> Result<Accessor<T, V>> {
        match self {
            Selector::Attribute(attr) => (attr.resolve)(&attr.name),
            Selector::Transform(f) => Ok(Accessor::from_fn(move |element: &T| f(element))),
        }
    }
}

/// A transform function wrapped as a selector.
///
/// Produced by [`by`]; resolution is infallible and places no shape
/// requirements on the element type.
pub struct By<F>(F);

/// Wrap a transform function as a selector.
///
/// ```
/// use corral::{by, ops};
///
/// let words = vec!["fold".to_string(), "of".to_string(), "gold".to_string()];
/// let lengths: Vec<usize> = ops::map(&words, by(|w: &String| w.len()))?;
/// assert_eq!(lengths, vec![4, 2, 4]);
/// # Ok::<(), corral::Error>(())
/// ```
pub fn by<F>(f: F) -> By<F> {
    By(f)
}

impl<T, V, F> IntoAccessor<T, V> for By<F>
where
    F: Fn(&T) -> V + 'static,
{
    fn into_accessor(self) -> Result<Accessor<T, V>> {
        Ok(Accessor::from_fn(self.0))
    }
}

/// Check that `name` is a readable field of type `V` on `T`.
pub(crate) fn require_readable<T: HasField<V>, V>(name: &str) -> Result<()> {
    if T::typed_fields().contains(&name) {
        Ok(())
    } else if T::fields().contains(&name) {
        Err(Error::FieldType {
            record: T::NAME.to_string(),
            field: name.to_string(),
        })
    } else {
        Err(Error::UnknownAttribute {
            record: T::NAME.to_string(),
            field: name.to_string(),
        })
    }
}

/// Check that `name` is a settable field of type `V` on `T`.
pub(crate) fn require_settable<T: SetField<V>, V>(name: &str) -> Result<()> {
    if T::settable_fields().contains(&name) {
        Ok(())
    } else if T::fields().contains(&name) {
        Err(Error::FieldType {
            record: T::NAME.to_string(),
            field: name.to_string(),
        })
    } else {
        Err(Error::UnknownAttribute {
            record: T::NAME.to_string(),
            field: name.to_string(),
        })
    }
}
