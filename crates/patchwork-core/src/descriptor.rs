//! Property resolver: per-type field descriptor tables.
//!
//! A descriptor maps property names to typed accessors once per type, so a
//! patch walks by name without any runtime introspection.

use crate::{
    error::PatchError,
    node::{Map, Value},
    traits::{FieldKind, PatchField},
    walker::Walker,
};
use std::{collections::HashMap, marker::PhantomData};

///
/// TypeDescriptor
///

pub struct TypeDescriptor<T> {
    name: &'static str,
    fields: Vec<FieldDescriptor<T>>,
    index: HashMap<&'static str, usize>,
}

impl<T: 'static> TypeDescriptor<T> {
    #[must_use]
    pub const fn builder(name: &'static str) -> TypeDescriptorBuilder<T> {
        TypeDescriptorBuilder {
            name,
            fields: Vec::new(),
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Fields in registration order.
    #[must_use]
    pub fn fields(&self) -> &[FieldDescriptor<T>] {
        &self.fields
    }

    /// Exact lookup by property name.
    #[must_use]
    pub fn field(&self, property: &str) -> Option<&FieldDescriptor<T>> {
        self.index.get(property).map(|&pos| &self.fields[pos])
    }

    /// Resolve a JSON field name to its target property.
    pub fn resolve(&self, json_name: &str) -> Result<&FieldDescriptor<T>, PatchError> {
        property_name(json_name)
            .and_then(|property| self.field(&property))
            .ok_or_else(|| PatchError::PropertyNotFound {
                property: json_name.to_string(),
                type_name: self.name,
            })
    }
}

impl<T> std::fmt::Debug for TypeDescriptor<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypeDescriptor")
            .field("name", &self.name)
            .field("fields", &self.fields)
            .finish()
    }
}

/// Derive the property name for a JSON field: only the first character is
/// upper-cased. Empty names have no property.
#[must_use]
pub fn property_name(json_name: &str) -> Option<String> {
    let mut chars = json_name.chars();
    let first = chars.next()?;

    Some(first.to_uppercase().chain(chars).collect())
}

///
/// TypeDescriptorBuilder
///

pub struct TypeDescriptorBuilder<T> {
    name: &'static str,
    fields: Vec<FieldDescriptor<T>>,
}

impl<T: 'static> TypeDescriptorBuilder<T> {
    /// Register a property backed by the field `get` projects to.
    #[must_use]
    pub fn field<F: PatchField>(
        mut self,
        property: &'static str,
        get: impl Fn(&mut T) -> &mut F + Send + Sync + 'static,
    ) -> Self {
        self.fields.push(FieldDescriptor {
            property,
            kind: F::kind(),
            slot: Box::new(Accessor {
                get,
                _field: PhantomData,
            }),
        });

        self
    }

    /// Finish the table. A property registered twice keeps its first slot.
    #[must_use]
    pub fn build(self) -> TypeDescriptor<T> {
        let mut index = HashMap::with_capacity(self.fields.len());
        for (pos, field) in self.fields.iter().enumerate() {
            index.entry(field.property).or_insert(pos);
        }

        TypeDescriptor {
            name: self.name,
            fields: self.fields,
            index,
        }
    }
}

///
/// FieldDescriptor
///

pub struct FieldDescriptor<T> {
    property: &'static str,
    kind: FieldKind,
    slot: Box<dyn FieldSlot<T>>,
}

impl<T> FieldDescriptor<T> {
    #[must_use]
    pub const fn property(&self) -> &'static str {
        self.property
    }

    #[must_use]
    pub const fn kind(&self) -> FieldKind {
        self.kind
    }

    pub(crate) fn assign_null(&self, target: &mut T) -> Result<(), PatchError> {
        self.slot.assign_null(target)
    }

    pub(crate) fn assign_scalar(&self, target: &mut T, node: &Value) -> Result<(), PatchError> {
        self.slot.assign_scalar(target, node)
    }

    pub(crate) fn merge_object(
        &self,
        target: &mut T,
        fields: &Map<String, Value>,
        walker: &mut Walker<'_>,
    ) -> Result<(), PatchError> {
        self.slot.merge_object(target, fields, walker)
    }

    pub(crate) fn merge_array(
        &self,
        target: &mut T,
        items: &[Value],
        walker: &mut Walker<'_>,
    ) -> Result<(), PatchError> {
        self.slot.merge_array(target, items, walker)
    }
}

impl<T> std::fmt::Debug for FieldDescriptor<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldDescriptor")
            .field("property", &self.property)
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

// ---------------------------------------------------------------------------
// Type-erased slots
// ---------------------------------------------------------------------------

trait FieldSlot<T>: Send + Sync {
    fn assign_null(&self, target: &mut T) -> Result<(), PatchError>;

    fn assign_scalar(&self, target: &mut T, node: &Value) -> Result<(), PatchError>;

    fn merge_object(
        &self,
        target: &mut T,
        fields: &Map<String, Value>,
        walker: &mut Walker<'_>,
    ) -> Result<(), PatchError>;

    fn merge_array(
        &self,
        target: &mut T,
        items: &[Value],
        walker: &mut Walker<'_>,
    ) -> Result<(), PatchError>;
}

struct Accessor<F, G> {
    get: G,
    _field: PhantomData<fn() -> F>,
}

impl<T, F, G> FieldSlot<T> for Accessor<F, G>
where
    F: PatchField,
    G: Fn(&mut T) -> &mut F + Send + Sync,
{
    fn assign_null(&self, target: &mut T) -> Result<(), PatchError> {
        *(self.get)(target) = F::from_null()?;
        Ok(())
    }

    fn assign_scalar(&self, target: &mut T, node: &Value) -> Result<(), PatchError> {
        *(self.get)(target) = F::from_scalar(node)?;
        Ok(())
    }

    fn merge_object(
        &self,
        target: &mut T,
        fields: &Map<String, Value>,
        walker: &mut Walker<'_>,
    ) -> Result<(), PatchError> {
        (self.get)(target).merge_object(fields, walker)
    }

    fn merge_array(
        &self,
        target: &mut T,
        items: &[Value],
        walker: &mut Walker<'_>,
    ) -> Result<(), PatchError> {
        (self.get)(target).merge_array(items, walker)
    }
}

///
/// TESTS
///
