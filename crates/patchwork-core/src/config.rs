use crate::{DEFAULT_MAX_DEPTH, IMPLICIT_IGNORED_PROPERTIES, traits::TypeKey};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};

///
/// PatchMode
///
/// How a patch reacts to a failure partway through the document.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Display, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PatchMode {
    /// Fields are written as they are visited; a failure leaves earlier
    /// fields applied.
    #[default]
    #[display("in_place")]
    InPlace,

    /// The patch runs against a staged copy that replaces the target only
    /// when every field succeeded.
    #[display("atomic")]
    Atomic,
}

///
/// PatchConfig
///
/// Policy sets and limits for one patch call. Property names are matched
/// case-insensitively and always include the implicit `Id` and `Number`.
///

#[derive(Clone, Debug)]
pub struct PatchConfig {
    ignored_properties: BTreeSet<String>,
    ignored_types: HashSet<TypeKey>,
    denied_types: HashSet<TypeKey>,
    max_depth: usize,
    mode: PatchMode,
}

impl PatchConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Skip scalar and null values written to this property.
    #[must_use]
    pub fn ignore_property(mut self, name: impl AsRef<str>) -> Self {
        self.ignored_properties.insert(name.as_ref().to_lowercase());
        self
    }

    #[must_use]
    pub fn ignore_properties<I, S>(self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names
            .into_iter()
            .fold(self, |config, name| config.ignore_property(name))
    }

    /// Silently skip nested objects of type `T`.
    #[must_use]
    pub fn ignore_type<T: ?Sized + 'static>(mut self) -> Self {
        self.ignored_types.insert(TypeKey::of::<T>());
        self
    }

    /// Fail when a nested object of type `T` is present in the document.
    #[must_use]
    pub fn deny_type<T: ?Sized + 'static>(mut self) -> Self {
        self.denied_types.insert(TypeKey::of::<T>());
        self
    }

    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    #[must_use]
    pub const fn with_mode(mut self, mode: PatchMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub fn ignores_property(&self, name: &str) -> bool {
        self.ignored_properties.contains(&name.to_lowercase())
    }

    #[must_use]
    pub fn ignores_type(&self, key: TypeKey) -> bool {
        self.ignored_types.contains(&key)
    }

    #[must_use]
    pub fn denies_type(&self, key: TypeKey) -> bool {
        self.denied_types.contains(&key)
    }

    /// Ignored property names, lowercased.
    pub fn ignored_properties(&self) -> impl Iterator<Item = &str> {
        self.ignored_properties.iter().map(String::as_str)
    }

    #[must_use]
    pub const fn max_depth(&self) -> usize {
        self.max_depth
    }

    #[must_use]
    pub const fn mode(&self) -> PatchMode {
        self.mode
    }
}

impl Default for PatchConfig {
    fn default() -> Self {
        Self {
            ignored_properties: IMPLICIT_IGNORED_PROPERTIES
                .iter()
                .map(|name| name.to_lowercase())
                .collect(),
            ignored_types: HashSet::new(),
            denied_types: HashSet::new(),
            max_depth: DEFAULT_MAX_DEPTH,
            mode: PatchMode::default(),
        }
    }
}

///
/// TESTS
///
