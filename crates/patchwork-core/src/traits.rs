use crate::{
    descriptor::TypeDescriptor,
    error::PatchError,
    node::{Map, NodeKind, Value},
    scalar::ScalarKind,
    walker::Walker,
};
use derive_more::Display;
use std::{
    any::{TypeId, type_name},
    hash::{Hash, Hasher},
};

// ============================================================================
// TYPE IDENTITY
// ============================================================================

///
/// TypeKey
///
/// Identifies a Rust type for type-keyed policy (ignore / deny).
/// Equality and hashing use the `TypeId` only; the name is for messages.
///

#[derive(Clone, Copy, Debug, Display)]
#[display("{name}")]
pub struct TypeKey {
    id: TypeId,
    name: &'static str,
}

impl TypeKey {
    #[must_use]
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: type_label::<T>(),
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for TypeKey {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeKey {}

impl Hash for TypeKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Short, human-readable type name: module paths are dropped from the
/// outermost type (`alloc::string::String` -> `String`).
#[must_use]
pub fn type_label<T: ?Sized>() -> &'static str {
    let full = type_name::<T>();
    let head_end = full.find('<').unwrap_or(full.len());
    let start = full[..head_end].rfind("::").map_or(0, |pos| pos + 2);

    &full[start..]
}

// ============================================================================
// FIELD CLASSIFICATION
// ============================================================================

///
/// FieldShape
///
/// What a target property holds, independent of nullability.
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum FieldShape {
    #[display("scalar ({_0})")]
    Scalar(ScalarKind),
    #[display("enum")]
    Enum,
    #[display("object ({_0})")]
    Object(TypeKey),
    #[display("array")]
    Array,
    #[display("collection")]
    Collection,
}

///
/// FieldKind
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FieldKind {
    pub shape: FieldShape,
    pub nullable: bool,
}

impl FieldKind {
    #[must_use]
    pub const fn required(shape: FieldShape) -> Self {
        Self {
            shape,
            nullable: false,
        }
    }

    #[must_use]
    pub const fn into_nullable(self) -> Self {
        Self {
            shape: self.shape,
            nullable: true,
        }
    }

    /// Type key of a nested-object target, if this is one.
    #[must_use]
    pub const fn object_type(&self) -> Option<TypeKey> {
        match self.shape {
            FieldShape::Object(key) => Some(key),
            _ => None,
        }
    }

    /// Nullable text and enum targets read an empty string as null.
    #[must_use]
    pub const fn empty_is_null(&self) -> bool {
        self.nullable
            && matches!(
                self.shape,
                FieldShape::Scalar(ScalarKind::String) | FieldShape::Enum
            )
    }
}

// ============================================================================
// PATCH CONTRACTS
// ============================================================================

///
/// PatchField
///
/// Implemented by every type that can sit behind a patchable property.
/// Each method covers one JSON value kind; the defaults reject it.
///

pub trait PatchField: Sized + 'static {
    fn kind() -> FieldKind;

    /// Fresh instance used when a nested object or container must be created.
    fn instantiate() -> Option<Self> {
        None
    }

    fn from_null() -> Result<Self, PatchError> {
        Err(PatchError::NullNotAllowed {
            type_name: type_label::<Self>(),
        })
    }

    fn from_scalar(node: &Value) -> Result<Self, PatchError> {
        Err(PatchError::conversion(type_label::<Self>(), node))
    }

    fn merge_object(
        &mut self,
        fields: &Map<String, Value>,
        _walker: &mut Walker<'_>,
    ) -> Result<(), PatchError> {
        Err(object_mismatch::<Self>(fields))
    }

    fn merge_array(&mut self, _items: &[Value], _walker: &mut Walker<'_>) -> Result<(), PatchError> {
        Err(PatchError::UnsupportedArrayType {
            type_name: type_label::<Self>(),
        })
    }
}

///
/// Patchable
///
/// A composite type the walker can descend into by property name.
/// The descriptor is built once per type and cached by the implementor.
///

pub trait Patchable: PatchField + Default {
    fn descriptor() -> &'static TypeDescriptor<Self>;
}

pub(crate) fn object_mismatch<T>(fields: &Map<String, Value>) -> PatchError {
    PatchError::ConversionFailure {
        expected: type_label::<T>().to_string(),
        found: NodeKind::Object,
        value: Value::Object(fields.clone()).to_string(),
    }
}

// ============================================================================
// NULLABLE WRAPPER
// ============================================================================

impl<F: PatchField> PatchField for Option<F> {
    fn kind() -> FieldKind {
        F::kind().into_nullable()
    }

    fn instantiate() -> Option<Self> {
        F::instantiate().map(Some)
    }

    fn from_null() -> Result<Self, PatchError> {
        Ok(None)
    }

    fn from_scalar(node: &Value) -> Result<Self, PatchError> {
        if Self::kind().empty_is_null() && node.as_str() == Some("") {
            return Ok(None);
        }

        F::from_scalar(node).map(Some)
    }

    fn merge_object(
        &mut self,
        fields: &Map<String, Value>,
        walker: &mut Walker<'_>,
    ) -> Result<(), PatchError> {
        if let Some(value) = self.as_mut() {
            return value.merge_object(fields, walker);
        }

        // a rejected shape must leave `None` in place
        let created = match F::kind().shape {
            FieldShape::Object(_) => F::instantiate(),
            _ => None,
        }
        .ok_or_else(|| object_mismatch::<F>(fields))?;

        // assigned before descending so partial writes land on the live value
        self.insert(created).merge_object(fields, walker)
    }

    fn merge_array(&mut self, items: &[Value], walker: &mut Walker<'_>) -> Result<(), PatchError> {
        if let Some(value) = self.as_mut() {
            return value.merge_array(items, walker);
        }

        let created = match F::kind().shape {
            FieldShape::Array | FieldShape::Collection => F::instantiate(),
            _ => None,
        }
        .ok_or(PatchError::UnsupportedArrayType {
            type_name: type_label::<F>(),
        })?;
        self.insert(created).merge_array(items, walker)
    }
}

///
/// TESTS
///
