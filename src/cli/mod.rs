//! Command-line interface for todo
//!
//! This module defines the CLI structure using clap derive macros.
//! Each subcommand is implemented in its own submodule.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::ConfigPaths;
use crate::error::{Error, Result};
use crate::task::DEFAULT_PRIORITY;
use crate::todo::Todoer;

mod add;
mod complete;
mod init;
mod list;
mod remove;

/// To-Do - a command-line task tracker
///
/// Tasks live in a single JSON file whose location is recorded by
/// `todo init`.
#[derive(Parser, Debug)]
#[command(name = "todo")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Directory holding config.toml (defaults to the platform config dir)
    #[arg(long, global = true, env = "TODO_CONFIG_DIR")]
    pub config_dir: Option<PathBuf>,

    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Record the database location and create an empty database
    Init {
        /// Database location (defaults to ~/.todo.json)
        #[arg(long = "db-path", visible_alias = "db")]
        db_path: Option<PathBuf>,
    },

    /// Add a new task
    Add {
        /// Task description words
        #[arg(required = true)]
        description: Vec<String>,

        /// Priority from 1 (highest) to 4
        #[arg(
            short,
            long,
            default_value_t = DEFAULT_PRIORITY,
            value_parser = clap::value_parser!(i64).range(1..=4)
        )]
        priority: i64,
    },

    /// List all tasks
    List,

    /// Mark a task as done
    Complete {
        /// Task ID as shown by `todo list`
        id: usize,
    },

    /// Remove a task
    Remove {
        /// Task ID as shown by `todo list`
        id: usize,

        /// Remove without asking for confirmation
        #[arg(short, long)]
        force: bool,
    },

    /// Remove all tasks
    Clear {
        /// Remove without asking for confirmation
        #[arg(short, long)]
        force: bool,
    },
}

impl Cli {
    /// Execute the CLI command
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Init { db_path } => init::run(init::InitOptions {
                db_path,
                config_dir: self.config_dir,
                json: self.json,
                quiet: self.quiet,
            }),
            Commands::Add {
                description,
                priority,
            } => add::run(add::AddOptions {
                description,
                priority,
                config_dir: self.config_dir,
                json: self.json,
                quiet: self.quiet,
            }),
            Commands::List => list::run(list::ListOptions {
                config_dir: self.config_dir,
                json: self.json,
                quiet: self.quiet,
            }),
            Commands::Complete { id } => complete::run(complete::CompleteOptions {
                id,
                config_dir: self.config_dir,
                json: self.json,
                quiet: self.quiet,
            }),
            Commands::Remove { id, force } => remove::run_remove(remove::RemoveOptions {
                id,
                force,
                config_dir: self.config_dir,
                json: self.json,
                quiet: self.quiet,
            }),
            Commands::Clear { force } => remove::run_clear(remove::ClearOptions {
                force,
                config_dir: self.config_dir,
                json: self.json,
                quiet: self.quiet,
            }),
        }
    }
}

/// Build a `Todoer` from the config record, failing if `todo init` has not
/// been run or the recorded database is gone.
pub(crate) fn open_todoer(config_dir: Option<PathBuf>) -> Result<Todoer> {
    let paths = ConfigPaths::resolve(config_dir)?;
    let config_file = paths.file();
    if !config_file.exists() {
        return Err(Error::NotInitialized(config_file));
    }

    let db_path = paths.database_path()?;
    if !db_path.exists() {
        return Err(Error::DatabaseMissing(db_path));
    }

    Ok(Todoer::new(db_path))
}

/// Ask a yes/no question on stderr and read the answer from stdin.
///
/// Anything other than `y`/`yes` (including EOF) is a no.
pub(crate) fn confirm(prompt: &str) -> Result<bool> {
    let mut stderr = io::stderr();
    write!(stderr, "{prompt} [y/N]: ")?;
    stderr.flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    let answer = line.trim().to_ascii_lowercase();
    Ok(answer == "y" || answer == "yes")
}
