//! Local filesystem adapter using std::fs.
//!
//! Files are written to a temporary sibling and renamed into place, so a
//! failed write never leaves a truncated file at the target path.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use globset::Glob;
use tempfile::NamedTempFile;
use walkdir::WalkDir;

use crudsmith_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{CrudError, CrudResult},
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn write_file(&self, path: &Path, content: &str) -> CrudResult<()> {
        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(Path::new("."));
        let fail = |e| map_io_error(path, e, "write file");

        let mut tmp = NamedTempFile::new_in(dir).map_err(fail)?;
        tmp.write_all(content.as_bytes()).map_err(fail)?;
        set_generated_permissions(tmp.as_file()).map_err(fail)?;
        tmp.persist(path).map_err(|e| fail(e.error))?;
        Ok(())
    }

    fn remove_file(&self, path: &Path) -> CrudResult<()> {
        std::fs::remove_file(path).map_err(|e| map_io_error(path, e, "remove file"))
    }

    fn create_dir_all(&self, path: &Path) -> CrudResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn list_matching(&self, dir: &Path, pattern: &str) -> CrudResult<Vec<PathBuf>> {
        if !dir.is_dir() {
            return Ok(Vec::new());
        }

        let matcher = compile_glob(dir, pattern)?;
        let mut found = Vec::new();

        for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|e| ApplicationError::FilesystemError {
                path: dir.to_path_buf(),
                reason: format!("Failed to list directory: {e}"),
            })?;

            if entry.file_type().is_file() && matcher.is_match(entry.file_name()) {
                found.push(entry.into_path());
            }
        }

        found.sort();
        Ok(found)
    }
}

pub(crate) fn compile_glob(dir: &Path, pattern: &str) -> CrudResult<globset::GlobMatcher> {
    Glob::new(pattern)
        .map(|g| g.compile_matcher())
        .map_err(|e| {
            ApplicationError::FilesystemError {
                path: dir.join(pattern),
                reason: format!("Invalid glob pattern: {e}"),
            }
            .into()
        })
}

/// Temporary files are created owner-only; generated sources are not.
#[cfg(unix)]
fn set_generated_permissions(file: &std::fs::File) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    file.set_permissions(std::fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn set_generated_permissions(_file: &std::fs::File) -> io::Result<()> {
    Ok(())
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> CrudError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}
