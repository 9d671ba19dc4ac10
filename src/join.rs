//! Foreign-key joins: link each owning record to its related record.
//!
//! A join walks the owning collection and, for every element, looks its
//! foreign-key value up in an index of the related collection, then assigns
//! the match (or the absent value) into the element's relation field. The
//! related side may arrive as a raw sequence — indexed on the fly by primary
//! key with last-write-wins — or as an already-built index.
//!
//! Joins are one-to-one: each owning element receives at most one related
//! record. A foreign key with no match is not an error; the relation field is
//! set to `None`.
//!
//! ```
//! use corral::{join, record};
//!
//! #[derive(Debug, Clone, Default, PartialEq)]
//! struct Account { id: i64, name: String }
//! record!(Account { i64: { id }, String: { name } });
//!
//! #[derive(Debug, Clone, Default, PartialEq)]
//! struct Payment { id: i64, account_id: i64, account: Option<Account> }
//! record!(Payment {
//!     i64: { id, account_id },
//!     Option<Account>: { account },
//! });
//! impl corral::Keyed for Account { type Key = i64; }
//!
//! let accounts = vec![
//!     Account { id: 1, name: "ops".into() },
//!     Account { id: 2, name: "billing".into() },
//! ];
//! let mut payments = vec![
//!     Payment { id: 10, account_id: 2, account: None },
//!     Payment { id: 11, account_id: 9, account: None }, // no such account
//! ];
//!
//! // Field names inferred from the related type: account / account_id / id.
//! join(&mut payments, accounts)?;
//! assert_eq!(payments[0].account.as_ref().map(|a| a.name.as_str()), Some("billing"));
//! assert_eq!(payments[1].account, None);
//! # Ok::<(), corral::Error>(())
//! ```

use std::collections::HashMap;
use std::hash::Hash;

use crate::error::Result;
use crate::record::{HasField, Keyed, SetField};
use crate::selector::{require_readable, require_settable};

/// The related side of a join: a raw sequence or a prebuilt index.
///
/// Both container shapes convert via `From`, so call sites pass a `Vec<R>`
/// or a `HashMap<K, R>` directly.
pub enum Related<K, R> {
    /// Related records to be indexed by primary key, last write wins.
    Records(Vec<R>),
    /// An already-built index from primary-key value to record.
    Index(HashMap<K, R>),
}

impl<K, R> From<Vec<R>> for Related<K, R> {
    fn from(records: Vec<R>) -> Self {
        Related::Records(records)
    }
}

impl<K, R> From<HashMap<K, R>> for Related<K, R> {
    fn from(index: HashMap<K, R>) -> Self {
        Related::Index(index)
    }
}

impl<K, R> Related<K, R>
where
    K: Eq + Hash,
    R: HasField<K>,
{
    fn into_index(self, primary_key: &str) -> Result<HashMap<K, R>> {
        match self {
            Related::Records(records) => {
                require_readable::<R, K>(primary_key)?;
                let mut index = HashMap::with_capacity(records.len());
                for record in records {
                    let key = record
                        .field(primary_key)
                        .expect("HasField contract: every name in typed_fields() is readable");
                    index.insert(key, record);
                }
                Ok(index)
            }
            Related::Index(index) => Ok(index),
        }
    }
}

/// Join with inferred field names.
///
/// The relation field is the related type's name in snake case, the foreign
/// key appends `_id`, and the primary key is `id` — for a related type
/// `Account`: `account`, `account_id`, `id`. Use [`join_as`] when a schema
/// deviates from that convention.
pub fn join<T, R>(owning: &mut [T], related: impl Into<Related<R::Key, R>>) -> Result<()>
where
    T: HasField<R::Key> + SetField<Option<R>>,
    R: Keyed + HasField<R::Key> + Clone,
    R::Key: Eq + Hash,
{
    let relation = snake_case(R::NAME);
    let foreign_key = format!("{relation}_id");
    join_as(owning, related, &relation, &foreign_key, "id")
}

/// Join with explicit relation, foreign-key, and primary-key field names.
///
/// All three names are validated against the record shapes before anything
/// is indexed or assigned: a resolution error mutates nothing. For each
/// owning element the foreign-key value is read, looked up in the index, and
/// the result — `Some(record)` on a match, `None` otherwise — is assigned
/// into the relation field, overwriting whatever it held.
pub fn join_as<T, R>(
    owning: &mut [T],
    related: impl Into<Related<R::Key, R>>,
    relation: &str,
    foreign_key: &str,
    primary_key: &str,
) -> Result<()>
where
    T: HasField<R::Key> + SetField<Option<R>>,
    R: Keyed + HasField<R::Key> + Clone,
    R::Key: Eq + Hash,
{
    require_readable::<T, R::Key>(foreign_key)?;
    require_settable::<T, Option<R>>(relation)?;
    let index = related.into().into_index(primary_key)?;

    for element in owning.iter_mut() {
        let key = element
            .field(foreign_key)
            .expect("HasField contract: every name in typed_fields() is readable");
        let matched = index.get(&key).cloned();
        element.set_field(relation, matched);
    }
    Ok(())
}

/// Render a type name as a snake-case field name (`LineItem` -> `line_item`).
fn snake_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 2);
    let mut prev_lower = false;
    for ch in name.chars() {
        if ch.is_uppercase() {
            if prev_lower {
                out.push('_');
            }
            out.extend(ch.to_lowercase());
            prev_lower = false;
        } else {
            out.push(ch);
            prev_lower = ch.is_lowercase() || ch.is_ascii_digit();
        }
    }
    out
}
