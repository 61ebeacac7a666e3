//! Domain and application layers of the crudsmith CRUD generator.
//!
//! The core turns a resource name and a list of `name:type[:modifier]`
//! definitions into ten source files, written as one unit: either every file
//! lands or none does. It performs no I/O of its own; the filesystem, the
//! template renderer and the clock arrive as trait objects.
//!
//! ```text
//!  crudsmith-cli ──► CrudGenerator ──► ports ◄── crudsmith-adapters
//!                        │           (Filesystem, TemplateRenderer, Clock)
//!                        ▼
//!                     domain
//!     (field grammar, validation rules, naming, options, results)
//! ```
//!
//! ```rust,ignore
//! use crudsmith_core::prelude::*;
//!
//! let generator = CrudGenerator::new(filesystem, renderer, clock, GeneratorConfig::default());
//! let result = generator.generate(
//!     "Product",
//!     &["name:string", "price:decimal", "sku:string:unique"],
//!     OptionOverrides::default(),
//! )?;
//!
//! for (key, path) in result.flat_files() {
//!     println!("{key}: {}", path.display());
//! }
//! ```

pub mod application;
pub mod domain;
pub mod error;

/// Everything a driving adapter needs.
pub mod prelude {
    pub use crate::application::{
        ApplicationError, CrudGenerator, GeneratorConfig,
        ports::{Clock, Filesystem, TemplateRenderer},
    };
    pub use crate::domain::{
        ArtifactKind, DomainError, FieldDescriptor, FieldType, GenerationOptions,
        GenerationResult, OptionOverrides, TemplateId, TokenMap,
    };
    pub use crate::error::{CrudError, CrudResult, ErrorCategory};
}
