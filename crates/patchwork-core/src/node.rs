//! Read-only helpers over the parsed JSON document.
//!
//! The engine consumes `serde_json::Value` directly; these helpers give it the
//! kind discriminator and raw-text access the converters rely on.

use derive_more::Display;
pub use serde_json::{Map, Value};

///
/// NodeKind
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub enum NodeKind {
    #[display("object")]
    Object,
    #[display("array")]
    Array,
    #[display("string")]
    String,
    #[display("number")]
    Number,
    #[display("boolean")]
    Bool,
    #[display("null")]
    Null,
}

impl NodeKind {
    #[must_use]
    pub const fn of(node: &Value) -> Self {
        match node {
            Value::Object(_) => Self::Object,
            Value::Array(_) => Self::Array,
            Value::String(_) => Self::String,
            Value::Number(_) => Self::Number,
            Value::Bool(_) => Self::Bool,
            Value::Null => Self::Null,
        }
    }

    /// Returns true for kinds handled as leaf values (scalars and null).
    #[must_use]
    pub const fn is_leaf(self) -> bool {
        !matches!(self, Self::Object | Self::Array)
    }
}

/// Text form of a node: string content unquoted, every other kind as its
/// compact JSON literal.
#[must_use]
pub fn raw_text(node: &Value) -> String {
    match node {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Returns true if `document` has a field named `name` (compared
/// case-insensitively) whose value is an object or an array.
#[must_use]
pub fn has_relational_data(document: &Value, name: &str) -> bool {
    let Value::Object(fields) = document else {
        return false;
    };

    fields
        .iter()
        .find(|(field, _)| field.to_lowercase() == name.to_lowercase())
        .is_some_and(|(_, value)| matches!(value, Value::Object(_) | Value::Array(_)))
}

///
/// TESTS
///
