//! Validation-rule derivation.
//!
//! A field's rules are always emitted in the same order:
//!
//! 1. exactly one presence rule (`nullable` or `required`)
//! 2. the type's base rules, in table order
//! 3. the uniqueness rule, if the field is `unique`
//!
//! Downstream rendering joins the list verbatim, so the order is part of the
//! contract.

use std::collections::{BTreeSet, HashMap};
use std::fmt;

use crate::domain::{
    entities::field::FieldDescriptor,
    error::DomainError,
    value_objects::{FieldModifier, FieldType},
};

/// Literal table name left in create-context uniqueness rules until the
/// caller knows the real table.
pub const DEFERRED_TABLE_PLACEHOLDER: &str = "table_name";

/// Table reference inside a uniqueness rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableRef {
    Deferred,
    Named(String),
}

impl fmt::Display for TableRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Deferred => f.write_str(DEFERRED_TABLE_PLACEHOLDER),
            Self::Named(table) => f.write_str(table),
        }
    }
}

/// One validation rule. `Display` yields the rule token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationRule {
    Required,
    Nullable,
    Base(String),
    Unique {
        table: TableRef,
        column: String,
    },
    /// Unique, except for the record being updated.
    UniqueIgnoring {
        table: String,
        column: String,
        ignore: String,
    },
}

impl ValidationRule {
    pub fn is_presence(&self) -> bool {
        matches!(self, Self::Required | Self::Nullable)
    }

    pub fn is_unique(&self) -> bool {
        matches!(self, Self::Unique { .. } | Self::UniqueIgnoring { .. })
    }

    /// Substitute the deferred placeholder with a concrete table.
    pub fn resolve_table(self, table: &str) -> Self {
        match self {
            Self::Unique {
                table: TableRef::Deferred,
                column,
            } => Self::Unique {
                table: TableRef::Named(table.to_string()),
                column,
            },
            other => other,
        }
    }
}

impl fmt::Display for ValidationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required => f.write_str("required"),
            Self::Nullable => f.write_str("nullable"),
            Self::Base(rule) => f.write_str(rule),
            Self::Unique { table, column } => write!(f, "unique:{table},{column}"),
            Self::UniqueIgnoring {
                table,
                column,
                ignore,
            } => write!(f, "unique:{table},{column},{ignore}"),
        }
    }
}

/// Derives rule lists from field types and modifiers.
///
/// Base rules come from [`FieldType::base_rules`] unless the configuration
/// supplied an override for that type.
#[derive(Debug, Clone, Default)]
pub struct ValidationRuleBuilder {
    overrides: HashMap<FieldType, Vec<String>>,
}

impl ValidationRuleBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_overrides(overrides: HashMap<FieldType, Vec<String>>) -> Self {
        Self { overrides }
    }

    /// Base rules for a type, override first.
    pub fn base_rules(&self, field_type: FieldType) -> Vec<String> {
        match self.overrides.get(&field_type) {
            Some(rules) => rules.clone(),
            None => field_type
                .base_rules()
                .iter()
                .map(|r| r.to_string())
                .collect(),
        }
    }

    /// Create-context rules. Uniqueness uses the deferred table placeholder.
    pub fn build(
        &self,
        name: &str,
        field_type: FieldType,
        modifiers: &BTreeSet<FieldModifier>,
    ) -> Vec<ValidationRule> {
        let presence = if modifiers.contains(&FieldModifier::Nullable) {
            ValidationRule::Nullable
        } else {
            ValidationRule::Required
        };

        let mut rules = vec![presence];
        rules.extend(
            self.base_rules(field_type)
                .into_iter()
                .map(ValidationRule::Base),
        );

        if modifiers.contains(&FieldModifier::Unique) {
            rules.push(ValidationRule::Unique {
                table: TableRef::Deferred,
                column: name.to_string(),
            });
        }

        rules
    }

    /// Same as [`Self::build`] for an unparsed type token.
    pub fn build_from_token(
        &self,
        name: &str,
        type_token: &str,
        modifiers: &BTreeSet<FieldModifier>,
    ) -> Result<Vec<ValidationRule>, DomainError> {
        let field_type =
            type_token
                .parse::<FieldType>()
                .map_err(|_| DomainError::UnsupportedType {
                    field_type: type_token.to_string(),
                })?;
        Ok(self.build(name, field_type, modifiers))
    }

    /// Update-context rules: uniqueness ignores the record being updated.
    pub fn build_for_update(
        &self,
        name: &str,
        field_type: FieldType,
        modifiers: &BTreeSet<FieldModifier>,
        table: &str,
        ignore_id: &str,
    ) -> Vec<ValidationRule> {
        self.build(name, field_type, modifiers)
            .into_iter()
            .map(|rule| match rule {
                ValidationRule::Unique { column, .. } => ValidationRule::UniqueIgnoring {
                    table: table.to_string(),
                    column,
                    ignore: ignore_id.to_string(),
                },
                other => other,
            })
            .collect()
    }

    pub fn for_field(&self, field: &FieldDescriptor) -> Vec<ValidationRule> {
        self.build(field.name(), field.field_type(), field.modifiers())
    }
}

/// Render a rule list as plain tokens.
pub fn to_tokens(rules: &[ValidationRule]) -> Vec<String> {
    rules.iter().map(ToString::to_string).collect()
}
