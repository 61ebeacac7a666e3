//! Generator configuration.
//!
//! [`GeneratorConfig`] is built once by the caller (the CLI loads it from
//! file and environment) and handed to [`crate::application::CrudGenerator`]
//! by value. Nothing in core reads configuration from ambient state.

use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::{ArtifactKind, FieldType, OptionDefaults};

/// Namespaces echoed into generated class files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Namespaces {
    pub model: String,
    pub controller: String,
    pub request: String,
    pub resource: String,
}

impl Default for Namespaces {
    fn default() -> Self {
        Self {
            model: r"App\Models".into(),
            controller: r"App\Http\Controllers".into(),
            request: r"App\Http\Requests".into(),
            resource: r"App\Http\Resources".into(),
        }
    }
}

/// Output directories, relative to the generation root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputPaths {
    pub models: PathBuf,
    pub controllers: PathBuf,
    pub requests: PathBuf,
    pub resources: PathBuf,
    pub views: PathBuf,
    pub migrations: PathBuf,
}

impl Default for OutputPaths {
    fn default() -> Self {
        Self {
            models: "app/Models".into(),
            controllers: "app/Http/Controllers".into(),
            requests: "app/Http/Requests".into(),
            resources: "app/Http/Resources".into(),
            views: "resources/js/Pages".into(),
            migrations: "database/migrations".into(),
        }
    }
}

impl OutputPaths {
    /// Base directory an artifact kind is written under.
    pub fn dir_for(&self, kind: ArtifactKind) -> &PathBuf {
        match kind {
            ArtifactKind::Model => &self.models,
            ArtifactKind::Controller => &self.controllers,
            ArtifactKind::StoreRequest | ArtifactKind::UpdateRequest => &self.requests,
            ArtifactKind::Resource => &self.resources,
            ArtifactKind::Migration => &self.migrations,
            ArtifactKind::IndexView
            | ArtifactKind::CreateView
            | ArtifactKind::EditView
            | ArtifactKind::FormView => &self.views,
        }
    }
}

/// Per-type overrides layered over the built-in [`FieldType`] table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypeOverride {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cast: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules: Option<Vec<String>>,
}

/// Everything the generator reads besides its inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub namespaces: Namespaces,
    pub paths: OutputPaths,
    pub defaults: OptionDefaults,
    pub field_types: BTreeMap<FieldType, TypeOverride>,
    pub reserved_words: Vec<String>,
    /// Directory of `<template-id>.stub` files that replace built-in stubs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stubs_dir: Option<PathBuf>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            namespaces: Namespaces::default(),
            paths: OutputPaths::default(),
            defaults: OptionDefaults::default(),
            field_types: BTreeMap::new(),
            reserved_words: default_reserved_words(),
            stubs_dir: None,
        }
    }
}

impl GeneratorConfig {
    pub fn column_for(&self, field_type: FieldType) -> &str {
        self.field_types
            .get(&field_type)
            .and_then(|o| o.column.as_deref())
            .unwrap_or(field_type.column())
    }

    pub fn cast_for(&self, field_type: FieldType) -> &str {
        self.field_types
            .get(&field_type)
            .and_then(|o| o.cast.as_deref())
            .unwrap_or(field_type.cast())
    }

    /// Validation-rule overrides in the shape the rule builder takes.
    pub fn rule_overrides(&self) -> HashMap<FieldType, Vec<String>> {
        self.field_types
            .iter()
            .filter_map(|(t, o)| o.rules.clone().map(|r| (*t, r)))
            .collect()
    }
}

/// Keywords of the host language the built-in stubs target.
pub fn default_reserved_words() -> Vec<String> {
    [
        "abstract",
        "and",
        "array",
        "as",
        "break",
        "callable",
        "case",
        "catch",
        "class",
        "clone",
        "const",
        "continue",
        "declare",
        "default",
        "die",
        "do",
        "echo",
        "else",
        "elseif",
        "empty",
        "enddeclare",
        "endfor",
        "endforeach",
        "endif",
        "endswitch",
        "endwhile",
        "enum",
        "eval",
        "exit",
        "extends",
        "final",
        "finally",
        "fn",
        "for",
        "foreach",
        "function",
        "global",
        "goto",
        "if",
        "implements",
        "include",
        "include_once",
        "instanceof",
        "insteadof",
        "interface",
        "isset",
        "list",
        "match",
        "namespace",
        "new",
        "or",
        "print",
        "private",
        "protected",
        "public",
        "readonly",
        "require",
        "require_once",
        "return",
        "static",
        "switch",
        "throw",
        "trait",
        "try",
        "unset",
        "use",
        "var",
        "while",
        "xor",
        "yield",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_laravel_layout() {
        let cfg = GeneratorConfig::default();
        assert_eq!(cfg.namespaces.model, r"App\Models");
        assert_eq!(cfg.paths.views, PathBuf::from("resources/js/Pages"));
        assert_eq!(
            cfg.paths.dir_for(ArtifactKind::UpdateRequest),
            &PathBuf::from("app/Http/Requests")
        );
        assert!(cfg.reserved_words.iter().any(|w| w == "class"));
    }

    #[test]
    fn type_overrides_fall_back_to_builtin_table() {
        let mut cfg = GeneratorConfig::default();
        cfg.field_types.insert(
            FieldType::Decimal,
            TypeOverride {
                column: Some("float".into()),
                rules: Some(vec!["numeric".into(), "min:0".into()]),
                ..TypeOverride::default()
            },
        );

        assert_eq!(cfg.column_for(FieldType::Decimal), "float");
        assert_eq!(cfg.cast_for(FieldType::Decimal), "decimal:2");
        assert_eq!(cfg.column_for(FieldType::String), "string");
        assert_eq!(
            cfg.rule_overrides().get(&FieldType::Decimal),
            Some(&vec!["numeric".to_string(), "min:0".to_string()])
        );
        assert!(!cfg.rule_overrides().contains_key(&FieldType::String));
    }
}
