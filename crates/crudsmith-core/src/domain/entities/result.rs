//! Artifact kinds and the record of a successful generation run.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::entities::options::GenerationOptions;

/// One generated output unit.
///
/// Multi-file artifacts (the request pair, the view set) are modelled as one
/// variant per file, grouped under a shared [`ArtifactKind::group`] name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactKind {
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

impl ArtifactKind {
    /// Generation order.
    pub const ALL: [ArtifactKind; 10] = [
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

    /// Kinds whose target path must not exist unless forced, in check order.
    pub const CONFLICT_CHECKED: [ArtifactKind; 5] = [
        Self::Model,
        Self::Controller,
        Self::StoreRequest,
        Self::UpdateRequest,
        Self::Resource,
    ];

    pub const fn group(&self) -> &'static str {
        match self {
            Self::Model => "model",
            Self::Controller => "controller",
            Self::StoreRequest | Self::UpdateRequest => "requests",
            Self::Resource => "resource",
            Self::Migration => "migration",
            Self::IndexView | Self::CreateView | Self::EditView | Self::FormView => "views",
        }
    }

    /// Sub-key within a multi-file group.
    pub const fn slot(&self) -> Option<&'static str> {
        match self {
            Self::StoreRequest => Some("store"),
            Self::UpdateRequest => Some("update"),
            Self::IndexView => Some("index"),
            Self::CreateView => Some("create"),
            Self::EditView => Some("edit"),
            Self::FormView => Some("form"),
            _ => None,
        }
    }

    pub const fn is_view(&self) -> bool {
        matches!(
            self,
            Self::IndexView | Self::CreateView | Self::EditView | Self::FormView
        )
    }

    /// Dotted key used by the flattened manifest, e.g. `requests.store`.
    pub fn key(&self) -> String {
        match self.slot() {
            Some(slot) => format!("{}.{slot}", self.group()),
            None => self.group().to_string(),
        }
    }

    /// Human-readable label used in conflict messages.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Model => "Model",
            Self::Controller => "Controller",
            Self::StoreRequest => "StoreRequest",
            Self::UpdateRequest => "UpdateRequest",
            Self::Resource => "Resource",
            Self::Migration => "Migration",
            Self::IndexView => "IndexView",
            Self::CreateView => "CreateView",
            Self::EditView => "EditView",
            Self::FormView => "FormView",
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Paths written by one successful run, tagged by artifact kind.
///
/// Only the orchestrator constructs this, and only after commit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationResult {
    resource: String,
    table_name: String,
    route_name: String,
    options: GenerationOptions,
    entries: Vec<(ArtifactKind, PathBuf)>,
}

impl GenerationResult {
    pub(crate) fn new(
        resource: impl Into<String>,
        table_name: impl Into<String>,
        route_name: impl Into<String>,
        options: GenerationOptions,
        entries: Vec<(ArtifactKind, PathBuf)>,
    ) -> Self {
        Self {
            resource: resource.into(),
            table_name: table_name.into(),
            route_name: route_name.into(),
            options,
            entries,
        }
    }

    pub fn resource(&self) -> &str {
        &self.resource
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    pub fn route_name(&self) -> &str {
        &self.route_name
    }

    pub fn options(&self) -> &GenerationOptions {
        &self.options
    }

    /// Every artifact in generation order.
    pub fn entries(&self) -> &[(ArtifactKind, PathBuf)] {
        &self.entries
    }

    pub fn path(&self, kind: ArtifactKind) -> Option<&Path> {
        self.entries
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, p)| p.as_path())
    }

    /// Sub-paths of a group such as `requests` or `views`, keyed by slot.
    ///
    /// Single-file groups yield one entry keyed by the group name itself.
    pub fn group(&self, name: &str) -> Vec<(&'static str, &Path)> {
        self.entries
            .iter()
            .filter(|(k, _)| k.group() == name)
            .map(|(k, p)| (k.slot().unwrap_or(k.group()), p.as_path()))
            .collect()
    }

    /// Distinct group names in generation order.
    pub fn groups(&self) -> Vec<&'static str> {
        let mut groups: Vec<&'static str> = Vec::new();
        for (kind, _) in &self.entries {
            if !groups.contains(&kind.group()) {
                groups.push(kind.group());
            }
        }
        groups
    }

    /// Flattened view with dotted keys (`model`, `requests.store`, ...).
    pub fn flat_files(&self) -> Vec<(String, &Path)> {
        self.entries
            .iter()
            .map(|(k, p)| (k.key(), p.as_path()))
            .collect()
    }

    pub fn file_count(&self) -> usize {
        self.entries.len()
    }

    pub fn generated_views(&self) -> bool {
        self.entries.iter().any(|(k, _)| k.is_view())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(with_views: bool) -> GenerationResult {
        let entries = ArtifactKind::ALL
            .into_iter()
            .filter(|k| with_views || !k.is_view())
            .map(|k| (k, PathBuf::from(format!("out/{}", k.key()))))
            .collect();
        GenerationResult::new(
            "Product",
            "products",
            "products",
            GenerationOptions::default(),
            entries,
        )
    }

    #[test]
    fn keys_are_dotted_for_multi_file_groups() {
        assert_eq!(ArtifactKind::Model.key(), "model");
        assert_eq!(ArtifactKind::StoreRequest.key(), "requests.store");
        assert_eq!(ArtifactKind::FormView.key(), "views.form");
    }

    #[test]
    fn counts_and_flattens() {
        let result = sample(true);
        assert_eq!(result.file_count(), 10);
        assert!(result.generated_views());

        let keys: Vec<String> = result.flat_files().into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys[0], "model");
        assert_eq!(keys[2], "requests.store");
        assert_eq!(keys[3], "requests.update");
        assert_eq!(keys[9], "views.form");
    }

    #[test]
    fn groups_expose_named_sub_paths() {
        let result = sample(true);
        let requests = result.group("requests");
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].0, "store");
        assert_eq!(requests[1].0, "update");

        assert_eq!(result.group("model")[0].0, "model");
        assert_eq!(
            result.groups(),
            vec!["model", "controller", "requests", "resource", "migration", "views"]
        );
    }

    #[test]
    fn without_views() {
        let result = sample(false);
        assert_eq!(result.file_count(), 6);
        assert!(!result.generated_views());
        assert!(result.path(ArtifactKind::IndexView).is_none());
        assert_eq!(
            result.path(ArtifactKind::Migration),
            Some(Path::new("out/migration"))
        );
    }
}
