//! Stub renderer: built-in stubs, optionally overridden from a directory.

use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use tracing::{debug, instrument, warn};
use walkdir::WalkDir;

use crudsmith_core::{
    application::{ApplicationError, ports::TemplateRenderer},
    domain::{TemplateId, TokenMap},
    error::{CrudError, CrudResult},
};

use crate::builtin_templates::builtin_stub;

const STUB_EXTENSION: &str = "stub";

/// Renders stubs by literal `{{ KEY }}` substitution.
///
/// Overrides are looked up by file stem: `<dir>/model.stub` replaces the
/// built-in `model` stub, `<dir>/view.index.stub` the index view. Files whose
/// stem is not a known template id are ignored with a warning.
#[derive(Debug, Clone, Default)]
pub struct StubRenderer {
    overrides: HashMap<TemplateId, String>,
    builtins: bool,
}

impl StubRenderer {
    /// Renderer over the built-in stubs only.
    pub fn new() -> Self {
        Self {
            overrides: HashMap::new(),
            builtins: true,
        }
    }

    /// Renderer with no built-ins. Only explicitly added stubs resolve.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Register one stub source, replacing any previous one for `id`.
    pub fn with_stub(mut self, id: TemplateId, source: impl Into<String>) -> Self {
        self.overrides.insert(id, source.into());
        self
    }

    /// Load `*.stub` overrides found directly in `dir`. Subdirectories are
    /// not searched.
    ///
    /// # Errors
    ///
    /// A missing `dir` is a configuration error; an unreadable stub is a
    /// `FilesystemError`.
    #[instrument(skip(self, dir), fields(dir = %dir.as_ref().display()))]
    pub fn with_overrides_dir(mut self, dir: impl AsRef<Path>) -> CrudResult<Self> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            return Err(CrudError::Configuration {
                message: format!("stubs directory {} does not exist", dir.display()),
            });
        }

        for entry in WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = entry
                .map_err(|e| filesystem_error(dir, &format!("directory walk error: {e}")))?;
            let path = entry.path();

            if !entry.file_type().is_file()
                || path.extension().and_then(|e| e.to_str()) != Some(STUB_EXTENSION)
            {
                continue;
            }

            let Some(id) = path
                .file_stem()
                .and_then(|s| s.to_str())
                .and_then(TemplateId::from_name)
            else {
                warn!(path = %path.display(), "Ignoring stub with unknown template id");
                continue;
            };

            let source = fs::read_to_string(path)
                .map_err(|e| filesystem_error(path, &format!("failed to read stub: {e}")))?;
            debug!(%id, path = %path.display(), "Loaded stub override");
            self.overrides.insert(id, source);
        }

        Ok(self)
    }

    /// Ids with a non-built-in source.
    pub fn overridden(&self) -> Vec<TemplateId> {
        let mut ids: Vec<_> = self.overrides.keys().copied().collect();
        ids.sort_by_key(|id| id.as_str());
        ids
    }

    fn source(&self, id: TemplateId) -> Option<&str> {
        self.overrides
            .get(&id)
            .map(String::as_str)
            .or_else(|| self.builtins.then(|| builtin_stub(id)))
    }
}

impl TemplateRenderer for StubRenderer {
    #[instrument(skip(self, tokens), fields(tokens = tokens.len()))]
    fn render(&self, id: TemplateId, tokens: &TokenMap) -> CrudResult<String> {
        let source = self
            .source(id)
            .ok_or_else(|| ApplicationError::TemplateNotFound { id: id.to_string() })?;
        Ok(tokens.render(source))
    }
}

fn filesystem_error(path: &Path, reason: &str) -> CrudError {
    ApplicationError::FilesystemError {
        path: PathBuf::from(path),
        reason: reason.to_string(),
    }
    .into()
}
