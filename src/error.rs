//! Error types for selector resolution.
//!
//! Every failure in this crate is a call-site mistake: the caller paired a
//! collection with a selector its element shape cannot satisfy. Operations
//! resolve the selector *before* touching any element, report the mismatch as
//! a value, and leave the input untouched — there is no partial-success path.
//!
//! Selector arity, sort-key comparability, folder signatures, and join
//! argument shape are all enforced by the type system, so the only conditions
//! left to report at runtime are about attribute names: the name does not
//! exist, or it exists with a different type than the operation asked for.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// A selector/collection mismatch discovered at resolution time.
///
/// Carries the record type name and the offending field name so the call
/// site can be fixed immediately.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum Error {
    /// The attribute selector names a field the record shape does not have.
    #[error("record `{record}` has no field named `{field}`")]
    UnknownAttribute { record: String, field: String },

    /// The field exists on the record, but not with the requested type.
    #[error("field `{field}` on record `{record}` does not have the requested type")]
    FieldType { record: String, field: String },

    /// A select/reject predicate selector named a field that is not boolean.
    #[error("predicate field `{field}` on record `{record}` must be boolean")]
    PredicateType { record: String, field: String },
}

impl Error {
    /// Re-tag a type mismatch as a predicate mismatch.
    ///
    /// Select and reject require boolean output; when resolving their
    /// selector trips over a non-boolean field, the type error is reported
    /// in predicate terms. All other errors pass through unchanged.
    pub(crate) fn into_predicate(self) -> Self {
        match self {
            Error::FieldType { record, field } => Error::PredicateType { record, field },
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_record_and_field() {
        let err = Error::UnknownAttribute {
            record: "Payment".into(),
            field: "amont".into(),
        };
        assert_eq!(
            err.to_string(),
            "record `Payment` has no field named `amont`"
        );
    }

    #[test]
    fn predicate_retag_only_touches_type_errors() {
        let type_err = Error::FieldType {
            record: "Payment".into(),
            field: "amount".into(),
        };
        assert_eq!(
            type_err.into_predicate(),
            Error::PredicateType {
                record: "Payment".into(),
                field: "amount".into(),
            }
        );

        let unknown = Error::UnknownAttribute {
            record: "Payment".into(),
            field: "amont".into(),
        };
        assert_eq!(unknown.clone().into_predicate(), unknown);
    }

    #[test]
    fn serializes_for_batch_reporting() {
        let err = Error::PredicateType {
            record: "Payment".into(),
            field: "amount".into(),
        };
        let json = serde_json::to_string(&err).expect("serialize");
        assert!(json.contains("PredicateType"));
        let back: Error = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, err);
    }
}
