// ============================================================================
// domain/error.rs - RESOURCE AND FIELD ERRORS
// ============================================================================

use thiserror::Error;

use crate::error::ErrorCategory;

/// Maximum length of a resource name, in bytes.
pub const MAX_RESOURCE_NAME_LEN: usize = 50;

/// Errors raised while validating a resource name or its field definitions.
///
/// Every variant carries the offending input so the presentation layer can
/// format it once. All of them are raised before anything touches the
/// filesystem.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Resource name
    // ========================================================================
    #[error("Resource name cannot be empty")]
    EmptyName,

    #[error("Resource name '{name}' is {length} characters long; the limit is {max}")]
    NameTooLong {
        name: String,
        length: usize,
        max: usize,
    },

    #[error(
        "Resource name '{name}' must start with a letter and contain only letters, digits, and underscores"
    )]
    InvalidNameFormat { name: String },

    #[error("'{name}' is a reserved word and cannot be used as a resource name")]
    ReservedWord { name: String },

    // ========================================================================
    // Field definitions
    // ========================================================================
    #[error("At least one field definition is required")]
    NoFields,

    #[error(
        "Invalid field definition format: {definition}. Expected format: name:type or name:type:modifier"
    )]
    InvalidFieldFormat { definition: String },

    #[error("Invalid field type: {field_type}. Supported types: {}", supported.join(", "))]
    InvalidFieldType {
        field_type: String,
        supported: Vec<&'static str>,
    },

    #[error("Invalid modifier: {modifier}. Supported modifiers: {}", supported.join(", "))]
    InvalidFieldModifier {
        modifier: String,
        supported: Vec<&'static str>,
    },

    /// A parse failure annotated with the definition string that caused it.
    #[error("Invalid field definition '{definition}': {reason}")]
    InvalidField {
        definition: String,
        reason: Box<DomainError>,
    },

    // ========================================================================
    // Rule derivation
    // ========================================================================
    #[error("No validation rules are defined for type '{field_type}'")]
    UnsupportedType { field_type: String },
}

impl DomainError {
    /// Wrap a field-level error with the definition that produced it.
    pub fn in_definition(self, definition: impl Into<String>) -> Self {
        Self::InvalidField {
            definition: definition.into(),
            reason: Box::new(self),
        }
    }

    /// The innermost error, looking through [`DomainError::InvalidField`].
    pub fn root(&self) -> &DomainError {
        match self {
            Self::InvalidField { reason, .. } => reason.root(),
            other => other,
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EmptyName => vec!["Pass a resource name, e.g. Product".into()],
            Self::NameTooLong { max, .. } => {
                vec![format!("Shorten the resource name to {max} characters or fewer")]
            }
            Self::InvalidNameFormat { .. } => vec![
                "Start the name with a letter".into(),
                "Use only letters, digits, and underscores".into(),
                "Examples: Product, OrderItem, user_profile".into(),
            ],
            Self::ReservedWord { name } => vec![
                format!("'{name}' collides with a language keyword"),
                format!("Try a more specific name, e.g. {name}Item"),
            ],
            Self::NoFields => vec![
                "Add at least one field definition".into(),
                "Example: name:string price:decimal".into(),
            ],
            Self::InvalidFieldFormat { .. } => vec![
                "Use name:type or name:type:modifier".into(),
                "Names and types are lowercase letters and underscores".into(),
                "Example: email:string:unique".into(),
            ],
            Self::InvalidFieldType { supported, .. } => {
                vec![format!("Supported types: {}", supported.join(", "))]
            }
            Self::InvalidFieldModifier { supported, .. } => {
                vec![format!("Supported modifiers: {}", supported.join(", "))]
            }
            Self::InvalidField { reason, .. } => reason.suggestions(),
            Self::UnsupportedType { .. } => {
                vec!["Check the field_types table in your configuration".into()]
            }
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::Validation
    }
}
