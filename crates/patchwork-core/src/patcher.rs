use crate::{
    config::{PatchConfig, PatchMode},
    error::PatchError,
    node::{NodeKind, Value},
    traits::{Patchable, type_label},
    walker::Walker,
};
use tracing::debug;

///
/// Patcher
///
/// Entry point for applying merge-patch documents to typed targets.
///

#[derive(Clone, Debug, Default)]
pub struct Patcher {
    config: PatchConfig,
}

impl Patcher {
    #[must_use]
    pub const fn new(config: PatchConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &PatchConfig {
        &self.config
    }

    /// Apply `document` to `target` in place.
    ///
    /// Fields are written as they are visited; on failure the fields before
    /// the failing one remain applied.
    pub fn apply<T: Patchable>(&self, document: &Value, target: &mut T) -> Result<(), PatchError> {
        let Value::Object(fields) = document else {
            return Err(PatchError::NotAnObject {
                found: NodeKind::of(document),
            });
        };

        let target_type = type_label::<T>();
        debug!(target_type, fields = fields.len(), "applying patch");

        let mut walker = Walker::new(&self.config);
        walker.walk(fields, target).inspect_err(|err| {
            debug!(target_type, error = %err, "patch failed");
        })?;

        debug!(target_type, "patch applied");

        Ok(())
    }

    /// Apply `document` to a staged copy of `target`, replacing `target`
    /// only when every field succeeds.
    pub fn apply_atomic<T: Patchable + Clone>(
        &self,
        document: &Value,
        target: &mut T,
    ) -> Result<(), PatchError> {
        let mut staged = target.clone();

        match self.apply(document, &mut staged) {
            Ok(()) => {
                *target = staged;
                Ok(())
            }
            Err(err) => {
                debug!(target_type = type_label::<T>(), "discarding staged patch");
                Err(err)
            }
        }
    }

    /// Apply `document` using the configured `PatchMode`.
    pub fn patch<T: Patchable + Clone>(
        &self,
        document: &Value,
        target: &mut T,
    ) -> Result<(), PatchError> {
        match self.config.mode() {
            PatchMode::InPlace => self.apply(document, target),
            PatchMode::Atomic => self.apply_atomic(document, target),
        }
    }

    /// Parse `raw` as JSON, then `patch` with it.
    pub fn apply_str<T: Patchable + Clone>(&self, raw: &str, target: &mut T) -> Result<(), PatchError> {
        let document: Value =
            serde_json::from_str(raw).map_err(|err| PatchError::InvalidDocument {
                message: err.to_string(),
            })?;

        self.patch(&document, target)
    }
}

/// Apply `document` in place with the default configuration.
pub fn apply<T: Patchable>(document: &Value, target: &mut T) -> Result<(), PatchError> {
    Patcher::default().apply(document, target)
}

///
/// TESTS
///
