//! Policy filter.
//!
//! Nested-object values are filtered by the target's type; scalar and null
//! values are filtered by property name. Array values are never filtered.

use crate::{
    config::PatchConfig,
    traits::{FieldKind, TypeKey},
};

///
/// ObjectPolicy
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ObjectPolicy {
    Patch,
    Skip,
    Deny(TypeKey),
}

/// Decide how a JSON object written to a field of `kind` is handled.
/// A type that is both ignored and denied is skipped.
#[must_use]
pub fn object_policy(config: &PatchConfig, kind: FieldKind) -> ObjectPolicy {
    let Some(key) = kind.object_type() else {
        return ObjectPolicy::Patch;
    };

    if config.ignores_type(key) {
        ObjectPolicy::Skip
    } else if config.denies_type(key) {
        ObjectPolicy::Deny(key)
    } else {
        ObjectPolicy::Patch
    }
}

#[must_use]
pub fn is_ignored_property(config: &PatchConfig, property: &str) -> bool {
    config.ignores_property(property)
}

///
/// TESTS
///
