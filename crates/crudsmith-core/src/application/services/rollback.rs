//! Write transaction over the files of one generation run.
//!
//! ```text
//!            track(path)            commit()
//!   ┌──────┐ ─────────► ┌──────┐ ──────────► ┌───────────┐
//!   │ Open │            │ Open │             │ Committed │
//!   └──────┘ ◄───────── └──────┘ ──────────► └───────────┘
//!                                rollback()   ┌────────────┐
//!                                          ─► │ RolledBack │
//!                                             └────────────┘
//! ```
//!
//! Paths are tracked *after* they are written, never reserved ahead of time.
//! Tracking a new path once the list has been cleared by a terminal
//! transition re-opens the transaction.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::application::{ApplicationError, ports::Filesystem};
use crate::error::CrudResult;

/// Lifecycle of a [`FileRollback`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RollbackState {
    Open,
    Committed,
    RolledBack,
}

/// Tracks written files and deletes them in reverse order on failure.
pub struct FileRollback<'fs> {
    filesystem: &'fs dyn Filesystem,
    tracked: Vec<PathBuf>,
    leftovers: Vec<PathBuf>,
    state: RollbackState,
}

impl<'fs> FileRollback<'fs> {
    pub fn new(filesystem: &'fs dyn Filesystem) -> Self {
        Self {
            filesystem,
            tracked: Vec::new(),
            leftovers: Vec::new(),
            state: RollbackState::Open,
        }
    }

    /// Record a file that has just been written.
    ///
    /// Fails with `FileNotFound`, leaving the tracked list unchanged, if the
    /// path is not on disk.
    pub fn track(&mut self, path: impl AsRef<Path>) -> CrudResult<()> {
        let path = path.as_ref();
        if !self.filesystem.exists(path) {
            return Err(ApplicationError::FileNotFound {
                path: path.to_path_buf(),
            }
            .into());
        }

        if self.state != RollbackState::Open && self.tracked.is_empty() {
            self.state = RollbackState::Open;
        }

        debug!(path = %path.display(), "Tracked");
        self.tracked.push(path.to_path_buf());
        Ok(())
    }

    /// Make every tracked write permanent.
    pub fn commit(&mut self) {
        self.tracked.clear();
        self.state = RollbackState::Committed;
    }

    /// Delete tracked files, last written first.
    ///
    /// A no-op after [`Self::commit`]. Paths that have already vanished are
    /// skipped. Deletion continues past individual failures; the first one
    /// is returned once every path has been attempted, and every path that
    /// could not be removed is listed by [`Self::leftovers`].
    pub fn rollback(&mut self) -> CrudResult<()> {
        if self.state == RollbackState::Committed {
            return Ok(());
        }

        self.leftovers.clear();
        let mut first_failure = None;

        for path in self.tracked.drain(..).rev() {
            if !self.filesystem.exists(&path) {
                debug!(path = %path.display(), "Already gone");
                continue;
            }

            match self.filesystem.remove_file(&path) {
                Ok(()) => debug!(path = %path.display(), "Removed"),
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Could not remove file");
                    self.leftovers.push(path.clone());
                    first_failure.get_or_insert(ApplicationError::RollbackFailed {
                        path,
                        reason: e.to_string(),
                    });
                }
            }
        }

        self.state = RollbackState::RolledBack;

        match first_failure {
            Some(e) => Err(e.into()),
            None => Ok(()),
        }
    }

    /// Forget tracked paths without deleting them and re-open.
    pub fn reset(&mut self) {
        self.tracked.clear();
        self.leftovers.clear();
        self.state = RollbackState::Open;
    }

    pub fn tracked(&self) -> &[PathBuf] {
        &self.tracked
    }

    /// Files the last [`Self::rollback`] failed to remove, last written first.
    pub fn leftovers(&self) -> &[PathBuf] {
        &self.leftovers
    }

    pub fn state(&self) -> RollbackState {
        self.state
    }

    pub fn is_committed(&self) -> bool {
        self.state == RollbackState::Committed
    }
}
