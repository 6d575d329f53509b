//! Error types for the fieldwise crate.
//!
//! Every variant is a usage fault: the caller asked for something the
//! element type cannot provide. The name-based operations panic with these
//! messages; their `try_` twins hand them back instead.

use thiserror::Error;

use crate::value::Kind;

/// Errors raised by the name-based collection operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldwiseError {
    /// The value does not reflect as a struct.
    #[error("T must be struct, got {kind}")]
    NotStruct { kind: Kind },

    /// The struct has no field with the requested name.
    #[error("no such field {field} on {type_name}")]
    NoSuchField {
        field: String,
        type_name: &'static str,
    },

    /// The field exists but is not `pub`, so its value cannot be handed out.
    #[error("cannot take the value of unexported field {field} on {type_name}")]
    UnexportedField {
        field: String,
        type_name: &'static str,
    },

    /// The field value cannot be used as a mapping key.
    #[error("field {field} holds a {kind} value, which cannot be used as a key")]
    UnhashableField { field: String, kind: Kind },

    /// The field kind has no ordering.
    #[error("unsupported field type {kind} for field {field}")]
    UnsupportedFieldType { field: String, kind: Kind },

    /// Two elements carry different kinds under the same field name.
    #[error("mismatched field types for field {field}: {left} vs {right}")]
    MismatchedFieldTypes {
        field: String,
        left: Kind,
        right: Kind,
    },

    /// Sort direction other than `asc` or `desc`.
    #[error("direction must be \"asc\" or \"desc\", got {0:?}")]
    InvalidDirection(String),
}

/// Result type for fieldwise operations.
pub type Result<T> = std::result::Result<T, FieldwiseError>;

/// Aborts the current operation with a usage fault.
#[track_caller]
pub(crate) fn fault(err: FieldwiseError) -> ! {
    #[cfg(feature = "tracing")]
    tracing::error!(error = %err, "fieldwise usage fault");
    panic!("{err}")
}
