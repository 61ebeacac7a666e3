//! Application layer errors.
//!
//! These errors represent failures in orchestration, not validation.
//! Validation errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ArtifactKind;
use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// A conflict-checked artifact already exists at its target path.
    #[error("{kind} already exists at: {}. Use force option to overwrite.", path.display())]
    FileExists { kind: ArtifactKind, path: PathBuf },

    /// Rollback was asked to track a path that is not on disk.
    #[error("Cannot track non-existent file: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// Filesystem operation failed.
    #[error("Filesystem error at {}: {reason}", path.display())]
    FilesystemError { path: PathBuf, reason: String },

    /// No stub is registered under this id.
    #[error("Stub not found: {id}")]
    TemplateNotFound { id: String },

    /// Filesystem state lock poisoned.
    #[error("Filesystem state lock poisoned")]
    StoreLockError,

    /// Rollback failed (best-effort cleanup failed).
    #[error("Rollback failed for {}: {reason}", path.display())]
    RollbackFailed { path: PathBuf, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FileExists { path, .. } => vec![
                format!("Existing file: {}", path.display()),
                "Use --force to overwrite (destructive)".into(),
                "Choose a different resource name".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check available disk space".into(),
            ],
            Self::TemplateNotFound { id } => vec![
                format!("Expected a stub named '{id}.stub'"),
                "Check the stubs_dir setting in your configuration".into(),
            ],
            Self::RollbackFailed { path, .. } => vec![
                format!("Remove the leftover file manually: {}", path.display()),
            ],
            _ => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FileExists { .. } => ErrorCategory::Conflict,
            Self::FileNotFound { .. } | Self::TemplateNotFound { .. } => ErrorCategory::NotFound,
            Self::FilesystemError { .. } | Self::RollbackFailed { .. } => ErrorCategory::Internal,
            Self::StoreLockError => ErrorCategory::Internal,
        }
    }
}
