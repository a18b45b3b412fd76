//! Person store glue around the patch engine: a model, a repository seam,
//! and a service that applies partial updates by identifier.

pub mod model;
pub mod repository;
pub mod service;

pub use model::{Gender, Person};
pub use repository::{InMemoryPersons, PersonRepository};
pub use service::{PersonService, ServiceError};
