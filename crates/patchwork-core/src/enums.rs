//! Enum resolver: maps JSON scalars onto unit enum members.

use crate::{
    error::PatchError,
    node::{Value, raw_text},
};

///
/// PatchEnum
///
/// Member table of a unit enum. `VARIANTS` lists `(name, discriminant)` in
/// declaration order; `from_variant` rebuilds a member from its position.
///

pub trait PatchEnum: Sized + 'static {
    const NAME: &'static str;
    const VARIANTS: &'static [(&'static str, i64)];

    fn from_variant(index: usize) -> Option<Self>;
}

/// Resolve a JSON scalar against the members of `E`.
///
/// Empty text is a missing value and fails as `NullNotAllowed`; nullable
/// targets intercept it before this point.
pub fn resolve<E: PatchEnum>(node: &Value) -> Result<E, PatchError> {
    let text = raw_text(node);
    if text.is_empty() {
        return Err(PatchError::NullNotAllowed { type_name: E::NAME });
    }

    parse::<E>(&text).ok_or(PatchError::InvalidEnumValue {
        enum_name: E::NAME,
        value: text,
    })
}

/// Match trimmed text against member names (case-insensitive), then against
/// declared discriminants written as integers.
#[must_use]
pub fn parse<E: PatchEnum>(text: &str) -> Option<E> {
    let text = text.trim();

    let index = E::VARIANTS
        .iter()
        .position(|(name, _)| eq_ignore_case(name, text))
        .or_else(|| {
            let value = text.parse::<i64>().ok()?;
            E::VARIANTS.iter().position(|(_, disc)| *disc == value)
        })?;

    E::from_variant(index)
}

fn eq_ignore_case(left: &str, right: &str) -> bool {
    left.chars()
        .flat_map(char::to_lowercase)
        .eq(right.chars().flat_map(char::to_lowercase))
}

///
/// TESTS
///
