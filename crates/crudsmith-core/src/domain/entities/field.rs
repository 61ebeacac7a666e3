//! Field descriptors and the `name:type(:modifier)*` grammar.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::domain::{
    error::DomainError,
    value_objects::{FieldModifier, FieldType},
};

static DEFINITION_GRAMMAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z_]+:[a-z_]+(?::[a-z_]+)*$").expect("Invalid regex")
});

/// One field of the generated resource.
///
/// Built once by [`FieldDefinitionParser::parse`] and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    name: String,
    field_type: FieldType,
    modifiers: BTreeSet<FieldModifier>,
}

impl FieldDescriptor {
    pub fn new(
        name: impl Into<String>,
        field_type: FieldType,
        modifiers: impl IntoIterator<Item = FieldModifier>,
    ) -> Self {
        Self {
            name: name.into(),
            field_type,
            modifiers: modifiers.into_iter().collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn field_type(&self) -> FieldType {
        self.field_type
    }

    pub fn modifiers(&self) -> &BTreeSet<FieldModifier> {
        &self.modifiers
    }

    pub fn has(&self, modifier: FieldModifier) -> bool {
        self.modifiers.contains(&modifier)
    }

    pub fn is_nullable(&self) -> bool {
        self.has(FieldModifier::Nullable)
    }

    pub fn is_unique(&self) -> bool {
        self.has(FieldModifier::Unique)
    }
}

impl fmt::Display for FieldDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.name, self.field_type)?;
        for modifier in &self.modifiers {
            write!(f, ":{modifier}")?;
        }
        Ok(())
    }
}

impl FromStr for FieldDescriptor {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldDefinitionParser.parse(s)
    }
}

/// Parses compact field definitions such as `email:string:unique`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldDefinitionParser;

impl FieldDefinitionParser {
    /// Parse a single definition.
    ///
    /// The grammar is checked first, then the type, then each modifier in
    /// the order written; the first failure wins.
    pub fn parse(&self, definition: &str) -> Result<FieldDescriptor, DomainError> {
        if !DEFINITION_GRAMMAR.is_match(definition) {
            return Err(DomainError::InvalidFieldFormat {
                definition: definition.to_string(),
            });
        }

        let mut parts = definition.split(':');
        let (Some(name), Some(type_token)) = (parts.next(), parts.next()) else {
            return Err(DomainError::InvalidFieldFormat {
                definition: definition.to_string(),
            });
        };

        let field_type = type_token.parse::<FieldType>()?;
        let modifiers = parts
            .map(str::parse::<FieldModifier>)
            .collect::<Result<BTreeSet<_>, _>>()?;

        Ok(FieldDescriptor {
            name: name.to_string(),
            field_type,
            modifiers,
        })
    }

    /// Parse a batch, annotating the first failure with its definition.
    pub fn parse_all<S: AsRef<str>>(
        &self,
        definitions: &[S],
    ) -> Result<Vec<FieldDescriptor>, DomainError> {
        if definitions.is_empty() {
            return Err(DomainError::NoFields);
        }

        definitions
            .iter()
            .map(|d| {
                let d = d.as_ref();
                self.parse(d).map_err(|e| e.in_definition(d))
            })
            .collect()
    }
}
