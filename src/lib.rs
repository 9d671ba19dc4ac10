//! # Corral
//!
//! **Selector-driven collection transforms** for plain Rust records. Corral
//! provides one uniform operation set — select/reject, map, group-by,
//! index-by, fold, sort, first/last-N, and foreign-key joins — over any
//! homogeneous sequence, without a bespoke loop per element type.
//!
//! ## Key ideas
//!
//! - **Selectors** - every operation is driven by a selector: either a named
//!   attribute (`"account_id"`) resolved against the element's shape, or a
//!   transform function (`by(|p: &Payment| p.amount)`).
//! - **Typed results** - the result container's element/key type is the
//!   selector's output type, checked at compile time.
//! - **Shape capabilities instead of reflection** - records opt in with the
//!   [`record!`] macro, which implements the [`Record`], [`HasField`], and
//!   [`SetField`] traits; pointer-wrapped elements (`Box`, `Rc`, `Arc`, `&T`)
//!   answer the same selectors as direct values.
//! - **Errors as values** - a selector that does not apply to the element
//!   shape is reported as an [`Error`] before any element is processed;
//!   nothing is partially mutated.
//! - **Synchronous and in-memory** - every operation is a single bounded
//!   pass; no I/O, no threads, no hidden state.
//!
//! ## Quick start
//!
//! ```
//! use corral::{Collection, IntKey, Keyed, by, record};
//!
//! #[derive(Debug, Clone, Default, PartialEq)]
//! struct Account { id: i64, name: String }
//! record!(Account { i64: { id }, String: { name } });
//! impl Keyed for Account { type Key = i64; }
//!
//! #[derive(Debug, Clone, Default, PartialEq)]
//! struct Payment { id: i64, account_id: i64, amount: i64, account: Option<Account> }
//! record!(Payment {
//!     i64: { id, account_id, amount },
//!     Option<Account>: { account },
//! });
//!
//! let accounts = vec![
//!     Account { id: 1, name: "ops".into() },
//!     Account { id: 2, name: "billing".into() },
//! ];
//! let mut payments = Collection::new(vec![
//!     Payment { id: 10, account_id: 2, amount: 250, account: None },
//!     Payment { id: 11, account_id: 1, amount: 75, account: None },
//!     Payment { id: 12, account_id: 2, amount: 900, account: None },
//! ]);
//!
//! // Link each payment to its account (field names inferred from `Account`).
//! payments.join(accounts)?;
//!
//! // Large payments, most recent id first.
//! let mut large = payments.select(by(|p: &Payment| p.amount >= 250))?;
//! large.sort_reverse(IntKey("id"))?;
//! let ids: Vec<i64> = large.attributes("id")?.into_vec();
//! assert_eq!(ids, vec![12, 10]);
//!
//! // Group by account id; per-group order follows input order.
//! let by_account: std::collections::HashMap<i64, Vec<Payment>> =
//!     payments.group("account_id")?;
//! assert_eq!(by_account[&2].len(), 2);
//! # Ok::<(), corral::Error>(())
//! ```
//!
//! ## Operation semantics
//!
//! - [`ops::select`] / [`ops::reject`] / [`ops::filter`] keep the element
//!   type, preserve input order, and split every element into exactly one of
//!   the two outputs.
//! - [`ops::map`] / [`ops::attributes`] produce a sequence of the selector's
//!   output type, same length as the input.
//! - [`ops::group`] partitions; [`ops::index`] keeps one element per key,
//!   **last write wins** on collisions.
//! - [`ops::fold_left`] starts from the accumulator's `Default` and consumes
//!   the whole input in order.
//! - [`ops::sort`] / [`ops::sort_reverse`] mutate in place; keys are a
//!   closed set ([`SortKey`]: strings, integers, floats, timestamps), named
//!   at the call site by the [`StrKey`], [`IntKey`], [`FloatKey`], and
//!   [`TimeKey`] attribute wrappers or implied by a transform's output.
//! - [`join()`] / [`join_as`] resolve a one-to-one foreign-key relation and
//!   assign the match (or `None`) into each owning element.
//!
//! ## Module overview
//!
//! - [`collection`] - the chainable [`Collection`] facade
//! - [`ops`] - the free-function operation surface
//! - [`record`] - shape capability traits and the [`record!`] macro
//! - [`selector`] - selector kinds and resolution into typed accessors
//! - [`join`] - foreign-key joins
//! - [`error`] - the error taxonomy
//! - [`testing`] - assertion helpers for downstream test suites

pub mod collection;
pub mod error;
pub mod join;
pub mod ops;
pub mod record;
pub mod selector;
pub mod testing;

pub use collection::Collection;
pub use error::{Error, Result};
pub use join::{Related, join, join_as};
pub use ops::{FloatKey, IntKey, SortKey, StrKey, TimeKey};
pub use record::{HasField, Keyed, Record, SetField};
pub use selector::{Accessor, Attribute, By, IntoAccessor, Selector, by};
