//! Application layer for crudsmith.
//!
//! This layer contains:
//! - **Services**: the `CrudGenerator` use case and its rollback transaction
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Config**: the explicit `GeneratorConfig` the generator is built with
//! - **Errors**: Application-specific error types
//!
//! Business rules (grammar, naming, validation rules) live in
//! `crate::domain`; this layer sequences them and performs I/O through ports.

pub mod config;
pub mod error;
pub mod ports;
pub mod services;

pub use services::{CrudGenerator, FileRollback, RollbackState};

// Re-export port traits (for adapter implementation)
pub use ports::{Clock, Filesystem, TemplateRenderer};

pub use config::{GeneratorConfig, Namespaces, OutputPaths, TypeOverride};
pub use error::ApplicationError;
