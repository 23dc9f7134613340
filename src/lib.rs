//! todo - command-line task tracker library
//!
//! Tasks are short text items with an integer priority and a done flag,
//! stored as a JSON array in a single flat file.
//!
//! # Module Organization
//!
//! - `task`: the `Task` record and description normalization
//! - `store`: whole-file reads and atomic writes of the task collection
//! - `todo`: task operations (add, list, complete, remove, remove all)
//! - `config`: the config record that locates the database
//! - `error`: error types, error kinds and exit codes
//! - `output`: human and JSON output for CLI commands
//! - `cli`: command-line interface using clap

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod store;
pub mod task;
pub mod todo;

pub use error::{Error, ErrorKind, Result, Unsaved};
pub use store::TaskStore;
pub use task::Task;
pub use todo::Todoer;
