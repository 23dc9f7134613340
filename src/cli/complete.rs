//! todo complete command implementation

use std::path::PathBuf;

use crate::cli::open_todoer;
use crate::error::Result;
use crate::output::{emit_success, HumanOutput, OutputOptions};
use crate::task::Task;

/// Options for `todo complete`
pub struct CompleteOptions {
    pub id: usize,
    pub config_dir: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

#[derive(serde::Serialize)]
struct CompleteReport {
    id: usize,
    task: Task,
}

pub fn run(options: CompleteOptions) -> Result<()> {
    let todoer = open_todoer(options.config_dir)?;
    let task = todoer.complete(options.id)?;

    let human = HumanOutput::new(format!(
        "To-Do #{} - \"{}\" was completed",
        options.id, task.description
    ));

    emit_success(
        OutputOptions {
            json: options.json,
            quiet: options.quiet,
        },
        "complete",
        &CompleteReport {
            id: options.id,
            task,
        },
        Some(&human),
    )?;

    Ok(())
}
