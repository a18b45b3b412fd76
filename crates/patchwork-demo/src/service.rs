use crate::{model::Person, repository::PersonRepository};
use patchwork::{PatchConfig, PatchError, Patcher, node::Value};
use thiserror::Error as ThisError;
use tracing::debug;

///
/// ServiceError
///

#[derive(Debug, ThisError)]
pub enum ServiceError {
    #[error("identifier must be 0 for a new person, got {id}")]
    IdentifierAssigned { id: i32 },

    #[error("no identifier left for a new person")]
    IdentifiersExhausted,

    #[error(transparent)]
    Patch(#[from] PatchError),
}

///
/// PersonService
///
/// Person operations over a caller-owned repository. Patches never touch
/// the identifier.
///

#[derive(Debug)]
pub struct PersonService<R> {
    repository: R,
    patcher: Patcher,
}

impl<R: PersonRepository> PersonService<R> {
    #[must_use]
    pub fn new(repository: R) -> Self {
        Self::with_config(repository, PatchConfig::default())
    }

    /// Service patching with `config`; `id` is always added to its ignores.
    #[must_use]
    pub fn with_config(repository: R, config: PatchConfig) -> Self {
        Self {
            repository,
            patcher: Patcher::new(config.ignore_property("id")),
        }
    }

    pub fn list(&self) -> &[Person] {
        self.repository.all()
    }

    pub fn get_by_id(&self, id: i32) -> Option<&Person> {
        self.repository.get(id)
    }

    /// Patch the person with `id`; `Ok(None)` when the id is unknown.
    pub fn patch(&mut self, id: i32, document: &Value) -> Result<Option<&Person>, ServiceError> {
        let Some(person) = self.repository.get_mut(id) else {
            debug!(id, "patch target not found");
            return Ok(None);
        };

        self.patcher.patch(document, person)?;
        debug!(id, "person patched");

        Ok(self.repository.get(id))
    }

    /// Add a new person. The identifier must be unset and is assigned here.
    pub fn post(&mut self, mut person: Person) -> Result<&Person, ServiceError> {
        if person.id != 0 {
            return Err(ServiceError::IdentifierAssigned { id: person.id });
        }

        person.id = i32::try_from(self.repository.all().len() + 1)
            .map_err(|_| ServiceError::IdentifiersExhausted)?;
        debug!(id = person.id, "person added");

        Ok(self.repository.insert(person))
    }

    pub fn into_repository(self) -> R {
        self.repository
    }
}
