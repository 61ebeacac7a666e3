//! Application services - orchestrate use cases.
//!
//! [`CrudGenerator`] is the single use case: validate a resource and its
//! fields, then write every artifact inside a [`FileRollback`] transaction.

pub mod artifacts;
pub mod crud_service;
pub mod rollback;

pub use artifacts::{ARTIFACTS, ArtifactSpec, GenerationContext};
pub use crud_service::CrudGenerator;
pub use rollback::{FileRollback, RollbackState};
