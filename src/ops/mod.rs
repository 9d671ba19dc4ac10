//! The operation surface: free functions over slices and maps.
//!
//! Every operation takes the collection plus a selector, resolves the
//! selector once ([`IntoAccessor`](crate::IntoAccessor)), then runs a single
//! in-order pass. Operations group by what they do to the collection's shape:
//!
//! - **Shape-preserving** — [`select`], [`reject`], [`filter`]: same element
//!   type out, subset of the elements.
//! - **Shape-transforming** — [`map`], [`attributes`], [`group`], [`index`]:
//!   the element or key type of the result is the selector's output type.
//! - **Reducing** — [`fold_left`]: accumulate into a caller-declared type.
//! - **Ordering** — [`sort`], [`sort_reverse`]: permute the input in place.
//! - **Positional** — [`first`], [`last`], [`first_n`], [`last_n`],
//!   [`keys`], [`values`].
//!
//! Joins live in [`crate::join`]; the chainable wrapper over this surface is
//! [`crate::Collection`].

mod fold;
mod group;
mod map;
mod select;
mod sort;
mod take;

pub use fold::fold_left;
pub use group::{group, index};
pub use map::{attributes, map};
pub use select::{filter, reject, select};
pub use sort::{FloatKey, IntKey, SortKey, StrKey, TimeKey, sort, sort_reverse};
pub use take::{first, first_n, keys, last, last_n, values};
