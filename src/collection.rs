//! The chainable facade over the operation surface.
//!
//! [`Collection<T>`] owns a `Vec<T>` and exposes every operation as a
//! method, so transformations compose left to right:
//!
//! ```
//! use corral::{Collection, record};
//!
//! #[derive(Debug, Clone, Default, PartialEq)]
//! struct Payment { id: i64, amount: i64, settled: bool }
//! record!(Payment {
//!     i64: { id, amount },
//!     bool: { settled },
//! });
//!
//! let payments = Collection::new(vec![
//!     Payment { id: 1, amount: 250, settled: true },
//!     Payment { id: 2, amount: 75, settled: false },
//!     Payment { id: 3, amount: 900, settled: true },
//! ]);
//!
//! let settled_amounts: i64 = payments
//!     .select("settled")?
//!     .map("amount")?
//!     .fold_left(|acc, amount| acc + amount);
//! assert_eq!(settled_amounts, 1150);
//! # Ok::<(), corral::Error>(())
//! ```
//!
//! Methods that resolve a selector return `Result`, so chains propagate a
//! shape mismatch with `?` at the step that caused it. Sorting and joining
//! mutate in place, matching the free-function forms.

use std::collections::HashMap;
use std::hash::Hash;

use crate::error::Result;
use crate::join::{self, Related};
use crate::ops;
use crate::ops::SortKey;
use crate::record::{HasField, Keyed, SetField};
use crate::selector::IntoAccessor;

/// An owned sequence with the whole operation set as chainable methods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collection<T> {
    items: Vec<T>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Collection::new(Vec::new())
    }
}

impl<T> Collection<T> {
    /// Wrap an owned vector.
    pub fn new(items: Vec<T>) -> Self {
        Collection { items }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the collection holds no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Borrow the elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Unwrap into the underlying vector.
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    /// The first element, or `None` when empty.
    pub fn first(&self) -> Option<&T> {
        ops::first(&self.items)
    }

    /// The last element, or `None` when empty.
    pub fn last(&self) -> Option<&T> {
        ops::last(&self.items)
    }
}

impl<T: Clone> Collection<T> {
    /// The first `n` elements (clamped) as a new collection.
    pub fn first_n(&self, n: usize) -> Collection<T> {
        Collection::new(ops::first_n(&self.items, n))
    }

    /// The last `n` elements (clamped) as a new collection.
    pub fn last_n(&self, n: usize) -> Collection<T> {
        Collection::new(ops::last_n(&self.items, n))
    }

    /// Keep the elements whose predicate selector is true. See
    /// [`ops::select`].
    pub fn select<S>(&self, predicate: S) -> Result<Collection<T>>
    where
        S: IntoAccessor<T, bool>,
    {
        Ok(Collection::new(ops::select(&self.items, predicate)?))
    }

    /// Keep the elements whose predicate selector is false. See
    /// [`ops::reject`].
    pub fn reject<S>(&self, predicate: S) -> Result<Collection<T>>
    where
        T: 'static,
        S: IntoAccessor<T, bool>,
    {
        Ok(Collection::new(ops::reject(&self.items, predicate)?))
    }

    /// Alias for [`Collection::select`].
    pub fn filter<S>(&self, predicate: S) -> Result<Collection<T>>
    where
        S: IntoAccessor<T, bool>,
    {
        self.select(predicate)
    }

    /// Project every element through the selector. See [`ops::map`].
    pub fn map<V, S>(&self, selector: S) -> Result<Collection<V>>
    where
        S: IntoAccessor<T, V>,
    {
        Ok(Collection::new(ops::map(&self.items, selector)?))
    }

    /// Collect the named attribute from every element. See
    /// [`ops::attributes`].
    pub fn attributes<V>(&self, field: &str) -> Result<Collection<V>>
    where
        T: HasField<V> + 'static,
        V: 'static,
    {
        Ok(Collection::new(ops::attributes(&self.items, field)?))
    }

    /// Partition the elements by a derived key. See [`ops::group`].
    pub fn group<K, S>(&self, selector: S) -> Result<HashMap<K, Vec<T>>>
    where
        K: Eq + Hash,
        S: IntoAccessor<T, K>,
    {
        ops::group(&self.items, selector)
    }

    /// Index the elements by a derived key, last write wins. See
    /// [`ops::index`].
    pub fn index<K, S>(&self, selector: S) -> Result<HashMap<K, T>>
    where
        K: Eq + Hash,
        S: IntoAccessor<T, K>,
    {
        ops::index(&self.items, selector)
    }
}

impl<T> Collection<T> {
    /// Fold every element into an accumulator. See [`ops::fold_left`].
    pub fn fold_left<A, F>(&self, folder: F) -> A
    where
        A: Default,
        F: FnMut(A, &T) -> A,
    {
        ops::fold_left(&self.items, folder)
    }

    /// Sort in place, ascending by the selector's key. See [`ops::sort`].
    pub fn sort<K, S>(&mut self, selector: S) -> Result<&mut Self>
    where
        K: SortKey,
        S: IntoAccessor<T, K>,
    {
        ops::sort(&mut self.items, selector)?;
        Ok(self)
    }

    /// Sort in place, descending by the selector's key. See
    /// [`ops::sort_reverse`].
    pub fn sort_reverse<K, S>(&mut self, selector: S) -> Result<&mut Self>
    where
        K: SortKey,
        S: IntoAccessor<T, K>,
    {
        ops::sort_reverse(&mut self.items, selector)?;
        Ok(self)
    }

    /// Join with inferred field names. See [`crate::join()`].
    pub fn join<R>(&mut self, related: impl Into<Related<R::Key, R>>) -> Result<&mut Self>
    where
        T: HasField<R::Key> + SetField<Option<R>>,
        R: Keyed + HasField<R::Key> + Clone,
        R::Key: Eq + Hash,
    {
        join::join(&mut self.items, related)?;
        Ok(self)
    }

    /// Join with explicit field names. See [`crate::join_as`].
    pub fn join_as<R>(
        &mut self,
        related: impl Into<Related<R::Key, R>>,
        relation: &str,
        foreign_key: &str,
        primary_key: &str,
    ) -> Result<&mut Self>
    where
        T: HasField<R::Key> + SetField<Option<R>>,
        R: Keyed + HasField<R::Key> + Clone,
        R::Key: Eq + Hash,
    {
        join::join_as(&mut self.items, related, relation, foreign_key, primary_key)?;
        Ok(self)
    }
}

impl<T> From<Vec<T>> for Collection<T> {
    fn from(items: Vec<T>) -> Self {
        Collection::new(items)
    }
}

impl<T> FromIterator<T> for Collection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Collection::new(iter.into_iter().collect())
    }
}

impl<T> IntoIterator for Collection<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Collection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
