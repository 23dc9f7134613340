//! Record store for todo
//!
//! Owns whole-collection reads and writes of the task database, a single
//! JSON file holding an array of task records:
//!
//! ```text
//! [
//!   { "Description": "Clean the house.", "Priority": 1, "Done": false }
//! ]
//! ```
//!
//! Every write replaces the full file. Writes go to a temp file in the same
//! directory and are renamed over the target, so readers see either the old
//! or the new collection. A symlinked database is written through the link
//! and the existing file's permissions are kept.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::{Error, Result, Unsaved};
use crate::task::Task;

/// Result of a store write: the written collection, or the attempted one
pub type WriteResult = std::result::Result<Vec<Task>, Unsaved<Vec<Task>>>;

/// Flat-file store for the task collection
#[derive(Debug, Clone)]
pub struct TaskStore {
    path: PathBuf,
}

impl TaskStore {
    /// Create a store for an already resolved database path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path to the database file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check if the database file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Create the database with an empty collection
    pub fn init(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| self.write_error(e))?;
            }
        }
        self.write(Vec::new()).map(|_| ()).map_err(Unsaved::into_error)
    }

    /// Read the full task collection
    pub fn read(&self) -> Result<Vec<Task>> {
        let content = fs::read_to_string(&self.path).map_err(|source| Error::DbRead {
            path: self.path.clone(),
            source,
        })?;

        let tasks: Vec<Task> = serde_json::from_str(&content).map_err(|source| Error::Decode {
            path: self.path.clone(),
            source,
        })?;

        debug!(path = %self.path.display(), count = tasks.len(), "read tasks");
        Ok(tasks)
    }

    /// Replace the persisted collection with `tasks`
    ///
    /// On failure the attempted collection is returned unchanged alongside
    /// the error.
    pub fn write(&self, tasks: Vec<Task>) -> WriteResult {
        match self.write_atomic(&tasks) {
            Ok(()) => {
                debug!(path = %self.path.display(), count = tasks.len(), "wrote tasks");
                Ok(tasks)
            }
            Err(error) => Err(Unsaved::new(tasks, error)),
        }
    }

    fn write_atomic(&self, tasks: &[Task]) -> Result<()> {
        let json = serde_json::to_string_pretty(tasks).map_err(|e| Error::DbWrite {
            path: self.path.clone(),
            reason: e.to_string(),
        })?;

        // Write through symlinks: the rename replaces the link's target
        let target = self.resolve_target();

        // Temp file must live next to the target for the rename to be atomic
        let dir = match target.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut temp = NamedTempFile::new_in(dir).map_err(|e| self.write_error(e))?;
        if let Ok(meta) = fs::metadata(&target) {
            temp.as_file()
                .set_permissions(meta.permissions())
                .map_err(|e| self.write_error(e))?;
        }
        temp.write_all(json.as_bytes())
            .map_err(|e| self.write_error(e))?;
        temp.as_file()
            .sync_all()
            .map_err(|e| self.write_error(e))?;
        temp.persist(&target)
            .map_err(|e| self.write_error(e.error))?;

        Ok(())
    }

    /// The file a write should replace: the configured path with symlinks
    /// followed, including a link whose target does not exist yet
    fn resolve_target(&self) -> PathBuf {
        if let Ok(resolved) = fs::canonicalize(&self.path) {
            return resolved;
        }
        match fs::read_link(&self.path) {
            Ok(link) if link.is_absolute() => link,
            Ok(link) => self
                .path
                .parent()
                .map(|parent| parent.join(&link))
                .unwrap_or(link),
            Err(_) => self.path.clone(),
        }
    }

    fn write_error(&self, err: io::Error) -> Error {
        Error::DbWrite {
            path: self.path.clone(),
            reason: err.to_string(),
        }
    }
}
