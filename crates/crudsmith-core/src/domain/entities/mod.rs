pub mod field;
pub mod options;
pub mod resource_name;
pub mod result;
pub mod template;

pub use crate::domain::DomainError;
pub use field::{FieldDefinitionParser, FieldDescriptor};
pub use options::{GenerationOptions, OptionDefaults, OptionOverrides};
pub use resource_name::ResourceName;
pub use result::{ArtifactKind, GenerationResult};
pub use template::{TemplateId, TokenMap};
