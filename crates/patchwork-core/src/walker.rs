//! Object walker: drives resolution, policy and conversion per document field.

use crate::{
    config::PatchConfig,
    descriptor::TypeDescriptor,
    error::PatchError,
    node::{Map, NodeKind, Value},
    policy::{ObjectPolicy, is_ignored_property, object_policy},
    traits::Patchable,
};
use tracing::{debug, trace};

///
/// Walker
///
/// Carries the configuration and the current object depth through one
/// patch call.
///

#[derive(Debug)]
pub struct Walker<'a> {
    config: &'a PatchConfig,
    depth: usize,
}

impl<'a> Walker<'a> {
    pub(crate) const fn new(config: &'a PatchConfig) -> Self {
        Self { config, depth: 0 }
    }

    #[must_use]
    pub const fn config(&self) -> &'a PatchConfig {
        self.config
    }

    /// Number of objects currently being walked (the root counts as one).
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// Merge an object's fields into `target`, in document order.
    pub fn walk<T: Patchable>(
        &mut self,
        fields: &Map<String, Value>,
        target: &mut T,
    ) -> Result<(), PatchError> {
        let max_depth = self.config.max_depth();
        if self.depth >= max_depth {
            return Err(PatchError::DepthExceeded { max_depth });
        }

        self.depth += 1;
        let result = self.walk_fields(fields, target);
        self.depth -= 1;

        result
    }

    fn walk_fields<T: Patchable>(
        &mut self,
        fields: &Map<String, Value>,
        target: &mut T,
    ) -> Result<(), PatchError> {
        let descriptor = T::descriptor();

        for (name, node) in fields {
            self.walk_field(descriptor, name, node, target)
                .map_err(|err| err.with_field(name))?;
        }

        Ok(())
    }

    fn walk_field<T: Patchable>(
        &mut self,
        descriptor: &TypeDescriptor<T>,
        name: &str,
        node: &Value,
        target: &mut T,
    ) -> Result<(), PatchError> {
        let field = descriptor.resolve(name)?;
        let property = field.property();
        trace!(
            target_type = descriptor.name(),
            property,
            found = %NodeKind::of(node),
            "resolved patch field"
        );

        match node {
            Value::Object(nested) => match object_policy(self.config, field.kind()) {
                ObjectPolicy::Patch => field.merge_object(target, nested, self),
                ObjectPolicy::Skip => {
                    debug!(property, "skipping ignored object type");
                    Ok(())
                }
                ObjectPolicy::Deny(key) => Err(PatchError::DeniedType {
                    type_name: key.name(),
                }),
            },
            Value::Array(items) => field.merge_array(target, items, self),
            leaf => {
                if is_ignored_property(self.config, property) {
                    debug!(property, "skipping ignored property");
                    return Ok(());
                }

                if leaf.is_null() {
                    field.assign_null(target)
                } else {
                    field.assign_scalar(target, leaf)
                }
            }
        }
    }
}

///
/// TESTS
///
