//! [`CrudError`], the one error type the core returns.

use std::path::PathBuf;

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

#[derive(Debug, Error, Clone)]
pub enum CrudError {
    /// Resource name or field definitions were rejected.
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Filesystem, template, or conflict failures.
    #[error("{0}")]
    Application(#[from] ApplicationError),

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// A failure during the write phase, after every tracked file was removed.
    #[error("{source} (all changes rolled back)")]
    RolledBack { source: Box<CrudError> },

    /// A failure during the write phase where some written files could not
    /// be removed afterwards.
    #[error("{source} (rollback incomplete, {} file(s) left on disk)", leftovers.len())]
    RollbackIncomplete {
        source: Box<CrudError>,
        leftovers: Vec<PathBuf>,
    },
}

impl CrudError {
    /// Annotate a write-phase failure as rolled back.
    pub fn rolled_back(source: CrudError) -> Self {
        Self::RolledBack {
            source: Box::new(source),
        }
    }

    /// Annotate a write-phase failure whose cleanup left `leftovers` behind.
    pub fn rollback_incomplete(source: CrudError, leftovers: Vec<PathBuf>) -> Self {
        Self::RollbackIncomplete {
            source: Box::new(source),
            leftovers,
        }
    }

    /// `true` if the failure happened after files were written and reverted.
    pub fn is_rolled_back(&self) -> bool {
        matches!(self, Self::RolledBack { .. })
    }

    /// Files a failed run could not remove. Empty unless the rollback was
    /// incomplete.
    pub fn leftovers(&self) -> &[PathBuf] {
        match self {
            Self::RollbackIncomplete { leftovers, .. } => leftovers,
            _ => &[],
        }
    }

    /// The error beneath any rollback annotation.
    pub fn cause(&self) -> &CrudError {
        match self {
            Self::RolledBack { source } | Self::RollbackIncomplete { source, .. } => {
                source.cause()
            }
            other => other,
        }
    }

    /// Hints shown under the message.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Configuration { message } => vec![
                format!("Configuration issue: {}", message),
                "Check your config file and environment overrides".into(),
            ],
            Self::RolledBack { source } => source.suggestions(),
            Self::RollbackIncomplete { source, leftovers } => leftovers
                .iter()
                .map(|p| format!("Remove the leftover file manually: {}", p.display()))
                .chain(source.suggestions())
                .collect(),
        }
    }

    /// Drives the CLI exit code.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => e.category(),
            Self::Application(e) => e.category(),
            Self::Configuration { .. } => ErrorCategory::Configuration,
            Self::RolledBack { source } | Self::RollbackIncomplete { source, .. } => {
                source.category()
            }
        }
    }
}

/// Coarse classification of a [`CrudError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Conflict,
    NotFound,
    Configuration,
    Internal,
}

pub type CrudResult<T> = Result<T, CrudError>;
