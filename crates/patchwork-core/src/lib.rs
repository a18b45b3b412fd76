//! Core runtime for Patchwork: typed merge-patch application of JSON
//! documents onto statically-typed object graphs.
#![warn(unreachable_pub)]

#[macro_use]
pub(crate) mod scalar_registry;

mod macros;

// public exports are one module level down
pub mod collection;
pub mod config;
pub mod descriptor;
pub mod enums;
pub mod error;
pub mod node;
pub mod patcher;
pub mod policy;
pub mod scalar;
pub mod settings;
pub mod traits;
pub mod walker;

// test
#[cfg(test)]
pub(crate) mod test_support;

///
/// CONSTANTS
///

/// Default limit on nested object levels in one document (the root counts
/// as one). Deeper documents fail instead of growing the call stack.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Property names every configuration skips for scalar and null values.
pub const IMPLICIT_IGNORED_PROPERTIES: [&str; 2] = ["Id", "Number"];

///
/// Prelude
///
/// Traits and entry points needed to declare and patch targets.
///

pub mod prelude {
    pub use crate::{
        config::{PatchConfig, PatchMode},
        enums::PatchEnum,
        error::PatchError,
        patcher::{Patcher, apply},
        traits::{PatchField, Patchable},
    };
}
