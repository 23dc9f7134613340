//! Task manager
//!
//! Task-level operations layered on [`TaskStore`]. `Todoer` holds no task
//! state: every call reads the collection fresh, transforms it in memory and
//! writes the full collection back.
//!
//! Task IDs are 1-based positions in the collection. They are not persisted
//! and shift down when an earlier task is removed.

use std::path::PathBuf;

use tracing::{debug, warn};

use crate::error::{Error, Result, Unsaved};
use crate::store::TaskStore;
use crate::task::Task;

/// Exchange point between the CLI and the task database
#[derive(Debug, Clone)]
pub struct Todoer {
    store: TaskStore,
}

impl Todoer {
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            store: TaskStore::new(db_path),
        }
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    /// Append a new task built from `words`.
    ///
    /// If the database cannot be read at all nothing is written and the
    /// built task comes back inside the error. An undecodable database is
    /// treated as empty and gets overwritten.
    pub fn add<S: AsRef<str>>(
        &self,
        words: &[S],
        priority: i64,
    ) -> std::result::Result<Task, Unsaved<Task>> {
        self.add_with_id(words, priority).map(|(_, task)| task)
    }

    /// Same as [`Todoer::add`], also returning the new task's positional ID
    pub fn add_with_id<S: AsRef<str>>(
        &self,
        words: &[S],
        priority: i64,
    ) -> std::result::Result<(usize, Task), Unsaved<Task>> {
        let task = Task::new(words, priority);

        let mut tasks = match self.store.read() {
            Ok(tasks) => tasks,
            Err(err @ Error::DbRead { .. }) => return Err(Unsaved::new(task, err)),
            Err(err) => {
                warn!(error = %err, "database unreadable, starting from an empty list");
                Vec::new()
            }
        };

        tasks.push(task.clone());
        let id = tasks.len();
        match self.store.write(tasks) {
            Ok(_) => Ok((id, task)),
            Err(unsaved) => Err(unsaved.map(|_| task)),
        }
    }

    /// All tasks in positional order; read errors yield an empty list
    pub fn list(&self) -> Vec<Task> {
        self.store.read().unwrap_or_else(|err| {
            debug!(error = %err, "listing as empty");
            Vec::new()
        })
    }

    /// Mark task `id` as done and return it
    pub fn complete(&self, id: usize) -> Result<Task> {
        let mut tasks = self.store.read()?;
        let idx = position(id, tasks.len())?;

        tasks[idx].done = true;
        let task = tasks[idx].clone();

        self.store.write(tasks)?;
        Ok(task)
    }

    /// Delete task `id` and return it; later tasks are renumbered
    pub fn remove(&self, id: usize) -> Result<Task> {
        let mut tasks = self.store.read()?;
        let idx = position(id, tasks.len())?;

        let task = tasks.remove(idx);

        self.store.write(tasks)?;
        Ok(task)
    }

    /// Replace the collection with an empty one
    pub fn remove_all(&self) -> Result<()> {
        self.store.write(Vec::new())?;
        Ok(())
    }
}

/// Map a 1-based ID onto a vector index
fn position(id: usize, len: usize) -> Result<usize> {
    if id == 0 || id > len {
        return Err(Error::InvalidId(id));
    }
    Ok(id - 1)
}
