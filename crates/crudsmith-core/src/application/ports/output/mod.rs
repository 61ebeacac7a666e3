//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `crudsmith-adapters` crate provides implementations.

use std::path::{Path, PathBuf};

use crate::domain::{TemplateId, TokenMap};
use crate::error::CrudResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `crudsmith_adapters::filesystem::LocalFilesystem` (production)
/// - `crudsmith_adapters::filesystem::MemoryFilesystem` (testing)
///
/// Paths are used as given; the orchestrator joins them onto its output root.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Check if a file or directory exists.
    fn exists(&self, path: &Path) -> bool;

    /// Write content to a file, replacing it if present. The parent
    /// directory must already exist.
    fn write_file(&self, path: &Path, content: &str) -> CrudResult<()>;

    /// Delete a single file.
    fn remove_file(&self, path: &Path) -> CrudResult<()>;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> CrudResult<()>;

    /// Files directly inside `dir` whose file name matches the glob
    /// `pattern`, sorted. A missing `dir` yields an empty list.
    fn list_matching(&self, dir: &Path, pattern: &str) -> CrudResult<Vec<PathBuf>>;
}

/// Port for stub rendering.
///
/// Implemented by:
/// - `crudsmith_adapters::renderer::StubRenderer` (built-in stubs + override dir)
#[cfg_attr(test, mockall::automock)]
pub trait TemplateRenderer: Send + Sync {
    /// Look up the stub for `id` and substitute `tokens` into it.
    fn render(&self, id: TemplateId, tokens: &TokenMap) -> CrudResult<String>;
}

/// Port for the migration timestamp.
///
/// Implemented by:
/// - `crudsmith_adapters::clock::SystemClock` (local time)
/// - `crudsmith_adapters::clock::FixedClock` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Clock: Send + Sync {
    /// Timestamp in `YYYY_MM_DD_HHMMSS` form.
    fn migration_timestamp(&self) -> String;
}
