//! todo add command implementation

use std::path::PathBuf;

use tracing::debug;

use crate::cli::open_todoer;
use crate::error::Result;
use crate::output::{emit_success, HumanOutput, OutputOptions};
use crate::task::Task;

/// Options for `todo add`
pub struct AddOptions {
    pub description: Vec<String>,
    pub priority: i64,
    pub config_dir: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

#[derive(serde::Serialize)]
struct AddReport {
    id: usize,
    task: Task,
}

pub fn run(options: AddOptions) -> Result<()> {
    let todoer = open_todoer(options.config_dir)?;

    let (id, task) = todoer
        .add_with_id(options.description.as_slice(), options.priority)
        .map_err(|unsaved| {
            debug!(description = %unsaved.attempted.description, "task not saved");
            unsaved.into_error()
        })?;

    let mut human = HumanOutput::new(format!(
        "To-Do: \"{}\" was added with priority: {}",
        task.description, task.priority
    ));
    human.push_summary("id", id.to_string());

    emit_success(
        OutputOptions {
            json: options.json,
            quiet: options.quiet,
        },
        "add",
        &AddReport { id, task },
        Some(&human),
    )?;

    Ok(())
}
