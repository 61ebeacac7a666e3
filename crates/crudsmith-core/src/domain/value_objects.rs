//! Domain value objects: FieldType and FieldModifier.
//!
//! # Design
//!
//! Pure value types: `Copy`, compared by value, no identity.
//! Each [`FieldType`] carries everything a generator needs to know about it
//! (storage column, model cast, base validation rules, front-end type) as
//! associated data resolved by exhaustive `match`. There is no string-keyed
//! lookup table, so a type without rules cannot exist.
//!
//! # Adding New Variants
//!
//! 1. Add the enum variant and its `as_str` arm
//! 2. The compiler then points at every table arm that needs a value
//! 3. Nothing else changes

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::error::DomainError;

// ── FieldType ─────────────────────────────────────────────────────────────────

/// The fixed vocabulary of field kinds the generator understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    String,
    Text,
    Integer,
    Decimal,
    Boolean,
    Date,
    DateTime,
    Timestamp,
    Json,
}

impl FieldType {
    /// Every variant, in declaration order.
    pub const ALL: [FieldType; 9] = [
        Self::String,
        Self::Text,
        Self::Integer,
        Self::Decimal,
        Self::Boolean,
        Self::Date,
        Self::DateTime,
        Self::Timestamp,
        Self::Json,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Text => "text",
            Self::Integer => "integer",
            Self::Decimal => "decimal",
            Self::Boolean => "boolean",
            Self::Date => "date",
            Self::DateTime => "datetime",
            Self::Timestamp => "timestamp",
            Self::Json => "json",
        }
    }

    /// Tokens accepted by the field-definition grammar.
    pub fn supported() -> Vec<&'static str> {
        Self::ALL.iter().map(FieldType::as_str).collect()
    }

    /// Migration column method.
    pub const fn column(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Text => "text",
            Self::Integer => "integer",
            Self::Decimal => "decimal",
            Self::Boolean => "boolean",
            Self::Date => "date",
            Self::DateTime => "dateTime",
            Self::Timestamp => "timestamp",
            Self::Json => "json",
        }
    }

    /// Model attribute cast.
    pub const fn cast(&self) -> &'static str {
        match self {
            Self::String | Self::Text => "string",
            Self::Integer => "integer",
            Self::Decimal => "decimal:2",
            Self::Boolean => "boolean",
            Self::Date => "date",
            Self::DateTime | Self::Timestamp => "datetime",
            Self::Json => "array",
        }
    }

    /// Base validation rules, in the order they must be emitted.
    pub const fn base_rules(&self) -> &'static [&'static str] {
        match self {
            Self::String => &["string", "max:255"],
            Self::Text => &["string"],
            Self::Integer => &["integer"],
            Self::Decimal => &["numeric"],
            Self::Boolean => &["boolean"],
            Self::Date | Self::DateTime | Self::Timestamp => &["date"],
            Self::Json => &["json"],
        }
    }

    /// TypeScript type used in generated view props.
    pub const fn ts_type(&self) -> &'static str {
        match self {
            Self::String | Self::Text => "string",
            Self::Integer | Self::Decimal => "number",
            Self::Boolean => "boolean",
            Self::Date | Self::DateTime | Self::Timestamp => "string",
            Self::Json => "Record<string, any>",
        }
    }

    /// Initial value of the field in a create form.
    pub const fn form_default(&self) -> &'static str {
        match self {
            Self::Integer | Self::Decimal => "0",
            Self::Boolean => "false",
            Self::Json => "{}",
            Self::String | Self::Text | Self::Date | Self::DateTime | Self::Timestamp => "''",
        }
    }

    /// UI component used to edit the field.
    pub const fn form_component(&self) -> FormComponent {
        match self {
            Self::Text => FormComponent::Textarea,
            Self::Boolean => FormComponent::Checkbox,
            _ => FormComponent::Input,
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| DomainError::InvalidFieldType {
                field_type: s.to_string(),
                supported: Self::supported(),
            })
    }
}

// ── FieldModifier ─────────────────────────────────────────────────────────────

/// Per-field behavioural flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldModifier {
    Nullable,
    Unique,
}

impl FieldModifier {
    pub const ALL: [FieldModifier; 2] = [Self::Nullable, Self::Unique];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Nullable => "nullable",
            Self::Unique => "unique",
        }
    }

    pub fn supported() -> Vec<&'static str> {
        Self::ALL.iter().map(FieldModifier::as_str).collect()
    }
}

impl fmt::Display for FieldModifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldModifier {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| DomainError::InvalidFieldModifier {
                modifier: s.to_string(),
                supported: Self::supported(),
            })
    }
}

// ── FormComponent ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormComponent {
    Input,
    Textarea,
    Checkbox,
}

impl FormComponent {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Input => "Input",
            Self::Textarea => "Textarea",
            Self::Checkbox => "Checkbox",
        }
    }
}

impl fmt::Display for FormComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
