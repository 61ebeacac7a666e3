//! Template identity and the token map used for substitution.
//!
//! ## Rendering model
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  TemplateId  ── "model", "request.store", "view.index" ...  │
//! │       │                                                     │
//! │       ▼  (TemplateRenderer port looks up the stub source)   │
//! │  stub text ──► TokenMap::render ──► artifact contents       │
//! │                 {{ CLASS }} -> "Product"                    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Substitution is literal and single-pass: a substituted value is never
//! scanned again, so a value that itself contains `{{ X }}` is emitted
//! verbatim. There are no loops, conditionals, or filters.
//!
//! Unknown placeholders are left in place. The view stubs rely on this:
//! `{{ item.name }}` is Vue's own interpolation, not a token.

use std::collections::BTreeMap;
use std::fmt;

/// Identifier of one of the built-in stubs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TemplateId {
    Model,
    Controller,
    StoreRequest,
    UpdateRequest,
    Resource,
    Migration,
    IndexView,
    CreateView,
    EditView,
    FormView,
}

impl TemplateId {
    pub const ALL: [TemplateId; 10] = [
        Self::Model,
        Self::Controller,
        Self::StoreRequest,
        Self::UpdateRequest,
        Self::Resource,
        Self::Migration,
        Self::IndexView,
        Self::CreateView,
        Self::EditView,
        Self::FormView,
    ];

    /// Stable name; override files are looked up as `<name>.stub`.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Model => "model",
            Self::Controller => "controller",
            Self::StoreRequest => "request.store",
            Self::UpdateRequest => "request.update",
            Self::Resource => "resource",
            Self::Migration => "migration",
            Self::IndexView => "view.index",
            Self::CreateView => "view.create",
            Self::EditView => "view.edit",
            Self::FormView => "view.form",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.as_str() == name)
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Flat key→value table fed to the renderer.
///
/// Keys are `SCREAMING_SNAKE_CASE`. A `BTreeMap` keeps `Debug` output and
/// test assertions stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenMap {
    tokens: BTreeMap<String, String>,
}

impl TokenMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.tokens.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.tokens.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.tokens.keys().map(String::as_str)
    }

    /// Replace every `{{ KEY }}` (inner whitespace optional) whose key is in
    /// the map.
    ///
    /// - `{{ UNKNOWN }}` → left as-is
    /// - `{{ A }}{{ A }}` → both replaced
    /// - an unterminated `{{` → copied through unchanged
    pub fn render(&self, template: &str) -> String {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(open) = rest.find("{{") {
            out.push_str(&rest[..open]);
            let after_open = &rest[open + 2..];

            let Some(close) = after_open.find("}}") else {
                out.push_str(&rest[open..]);
                return out;
            };

            let key = after_open[..close].trim();
            match self.tokens.get(key) {
                Some(value) => out.push_str(value),
                None => out.push_str(&rest[open..open + 2 + close + 2]),
            }
            rest = &after_open[close + 2..];
        }

        out.push_str(rest);
        out
    }
}

impl<K, V> FromIterator<(K, V)> for TokenMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            tokens: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
