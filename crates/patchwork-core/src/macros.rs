//! Exported registration macros.
//!
//! Field support is stamped out per type rather than through blanket impls,
//! so user crates can register their own leaf, enum and object types without
//! colliding with the built-in ones.

/// Register `FromStr` types as "other" scalars converted from raw text.
#[macro_export]
macro_rules! patch_from_str {
    ( $( $ty:ty ),* $(,)? ) => {
        $(
            impl $crate::traits::PatchField for $ty {
                fn kind() -> $crate::traits::FieldKind {
                    $crate::traits::FieldKind::required(
                        $crate::traits::FieldShape::Scalar($crate::scalar::ScalarKind::Other),
                    )
                }

                fn from_scalar(
                    node: &$crate::node::Value,
                ) -> ::std::result::Result<Self, $crate::error::PatchError> {
                    $crate::scalar::parse_other(node)
                }
            }
        )*
    };
}

/// Register `PatchEnum` types as enum-shaped fields.
#[macro_export]
macro_rules! patch_enum {
    ( $( $ty:ty ),* $(,)? ) => {
        $(
            impl $crate::traits::PatchField for $ty {
                fn kind() -> $crate::traits::FieldKind {
                    $crate::traits::FieldKind::required($crate::traits::FieldShape::Enum)
                }

                fn from_scalar(
                    node: &$crate::node::Value,
                ) -> ::std::result::Result<Self, $crate::error::PatchError> {
                    $crate::enums::resolve::<Self>(node)
                }
            }
        )*
    };
}

/// Register `Patchable` types as nested-object fields.
#[macro_export]
macro_rules! patch_object {
    ( $( $ty:ty ),* $(,)? ) => {
        $(
            impl $crate::traits::PatchField for $ty {
                fn kind() -> $crate::traits::FieldKind {
                    $crate::traits::FieldKind::required($crate::traits::FieldShape::Object(
                        $crate::traits::TypeKey::of::<Self>(),
                    ))
                }

                fn instantiate() -> ::std::option::Option<Self> {
                    ::std::option::Option::Some(<Self as ::std::default::Default>::default())
                }

                fn merge_object(
                    &mut self,
                    fields: &$crate::node::Map<::std::string::String, $crate::node::Value>,
                    walker: &mut $crate::walker::Walker<'_>,
                ) -> ::std::result::Result<(), $crate::error::PatchError> {
                    walker.walk(fields, self)
                }
            }
        )*
    };
}
