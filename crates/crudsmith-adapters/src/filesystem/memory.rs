//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use crudsmith_core::{
    application::{ApplicationError, ports::Filesystem},
    error::CrudResult,
};

use super::local::compile_glob;

/// In-memory filesystem for testing.
///
/// Clones share state, so a test can hand one clone to the generator and
/// inspect the other. Writes to paths registered with
/// [`MemoryFilesystem::fail_writes_to`] fail with a filesystem error.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
    failing_writes: HashSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file and its parent directories.
    pub fn with_file(self, path: impl AsRef<Path>, content: &str) -> Self {
        let path = path.as_ref();
        if let Ok(mut inner) = self.inner.write() {
            if let Some(parent) = path.parent() {
                insert_ancestors(&mut inner.directories, parent);
            }
            inner.files.insert(path.to_path_buf(), content.to_string());
        }
        self
    }

    /// Make every later write to `path` fail.
    pub fn fail_writes_to(&self, path: impl AsRef<Path>) {
        if let Ok(mut inner) = self.inner.write() {
            inner.failing_writes.insert(path.as_ref().to_path_buf());
        }
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: impl AsRef<Path>) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path.as_ref()).cloned()
    }

    /// All files, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default()
    }

    pub fn file_count(&self) -> usize {
        self.inner.read().map(|i| i.files.len()).unwrap_or_default()
    }
}

impl Filesystem for MemoryFilesystem {
    fn exists(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.files.contains_key(path) || inner.directories.contains(path))
            .unwrap_or(false)
    }

    fn write_file(&self, path: &Path, content: &str) -> CrudResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        if inner.failing_writes.contains(path) {
            return Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "Injected write failure".into(),
            }
            .into());
        }

        // Ensure parent exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "Parent directory does not exist".into(),
                }
                .into());
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn remove_file(&self, path: &Path) -> CrudResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        match inner.files.remove(path) {
            Some(_) => Ok(()),
            None => Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "No such file".into(),
            }
            .into()),
        }
    }

    fn create_dir_all(&self, path: &Path) -> CrudResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        insert_ancestors(&mut inner.directories, path);
        Ok(())
    }

    fn list_matching(&self, dir: &Path, pattern: &str) -> CrudResult<Vec<PathBuf>> {
        let matcher = compile_glob(dir, pattern)?;
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        Ok(inner
            .files
            .keys()
            .filter(|p| p.parent() == Some(dir))
            .filter(|p| p.file_name().is_some_and(|name| matcher.is_match(name)))
            .cloned()
            .collect())
    }
}

fn insert_ancestors(directories: &mut HashSet<PathBuf>, path: &Path) {
    let mut current = PathBuf::new();
    for component in path.components() {
        current.push(component);
        directories.insert(current.clone());
    }
}
