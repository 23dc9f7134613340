//! todo init command implementation
//!
//! Writes the config record and creates an empty database if none exists.

use std::path::PathBuf;

use crate::config::{default_db_path, ConfigPaths};
use crate::error::Result;
use crate::output::{emit_success, HumanOutput, OutputOptions};
use crate::store::TaskStore;

/// Options for `todo init`
pub struct InitOptions {
    pub db_path: Option<PathBuf>,
    pub config_dir: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

#[derive(serde::Serialize)]
struct InitReport {
    config: PathBuf,
    database: PathBuf,
    created: InitCreated,
}

#[derive(serde::Serialize)]
struct InitCreated {
    database: bool,
}

pub fn run(options: InitOptions) -> Result<()> {
    let paths = ConfigPaths::resolve(options.config_dir)?;
    let db_path = options.db_path.unwrap_or_else(default_db_path);

    paths.init_app(&db_path)?;

    let store = TaskStore::new(&db_path);
    let created_database = !store.exists();
    if created_database {
        store.init()?;
    }

    let report = InitReport {
        config: paths.file(),
        database: db_path.clone(),
        created: InitCreated {
            database: created_database,
        },
    };

    let mut human = HumanOutput::new(format!("The To-Do database is {}", db_path.display()));
    human.push_summary("config", paths.file().display().to_string());
    human.push_summary(
        "database",
        if created_database {
            "created"
        } else {
            "existing, kept"
        },
    );
    human.push_next_step("todo add <description> --priority <1-4>");

    emit_success(
        OutputOptions {
            json: options.json,
            quiet: options.quiet,
        },
        "init",
        &report,
        Some(&human),
    )?;

    Ok(())
}
