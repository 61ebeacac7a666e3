// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for crudsmith.
//!
//! This module contains pure generation logic with no I/O. Writing files and
//! looking up template sources are handled via ports (traits) defined in the
//! application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or clock access
//! - **Immutable values**: Descriptors and options are built once and read-only
//! - **Typed vocabularies**: field types and modifiers are closed enums
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod naming;
pub mod validation;
pub mod value_objects;

// Re-exports for convenience
pub use entities::{
    ArtifactKind, FieldDefinitionParser, FieldDescriptor, GenerationOptions, GenerationResult,
    OptionDefaults, OptionOverrides, ResourceName, TemplateId, TokenMap,
};

pub use error::{DomainError, MAX_RESOURCE_NAME_LEN};

pub use validation::{TableRef, ValidationRule, ValidationRuleBuilder};

pub use value_objects::{FieldModifier, FieldType, FormComponent};
