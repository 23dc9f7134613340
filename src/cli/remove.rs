//! todo remove / clear command implementations
//!
//! Both ask for confirmation unless `--force` is given.

use std::path::PathBuf;

use crate::cli::{confirm, open_todoer};
use crate::error::{Error, Result};
use crate::output::{emit_success, HumanOutput, OutputOptions};
use crate::task::Task;

/// Options for `todo remove`
pub struct RemoveOptions {
    pub id: usize,
    pub force: bool,
    pub config_dir: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

/// Options for `todo clear`
pub struct ClearOptions {
    pub force: bool,
    pub config_dir: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

#[derive(serde::Serialize)]
struct RemoveReport {
    id: usize,
    removed: Option<Task>,
}

#[derive(serde::Serialize)]
struct ClearReport {
    cleared: bool,
}

pub fn run_remove(options: RemoveOptions) -> Result<()> {
    let todoer = open_todoer(options.config_dir)?;
    let output = OutputOptions {
        json: options.json,
        quiet: options.quiet,
    };

    if !options.force {
        let tasks = todoer.store().read()?;
        let task = options
            .id
            .checked_sub(1)
            .and_then(|idx| tasks.get(idx))
            .ok_or(Error::InvalidId(options.id))?;

        let prompt = format!(
            "Remove To-Do #{} - \"{}\"?",
            options.id, task.description
        );
        if !confirm(&prompt)? {
            let human = HumanOutput::new("To-Do not removed. Operation cancelled");
            return emit_success(
                output,
                "remove",
                &RemoveReport {
                    id: options.id,
                    removed: None,
                },
                Some(&human),
            );
        }
    }

    let task = todoer.remove(options.id)?;
    let human = HumanOutput::new(format!(
        "To-Do #{} - \"{}\" was removed",
        options.id, task.description
    ));

    emit_success(
        output,
        "remove",
        &RemoveReport {
            id: options.id,
            removed: Some(task),
        },
        Some(&human),
    )
}

pub fn run_clear(options: ClearOptions) -> Result<()> {
    let todoer = open_todoer(options.config_dir)?;
    let output = OutputOptions {
        json: options.json,
        quiet: options.quiet,
    };

    if !options.force && !confirm("Remove all tasks?")? {
        let human = HumanOutput::new("Operation cancelled");
        return emit_success(output, "clear", &ClearReport { cleared: false }, Some(&human));
    }

    todoer.remove_all()?;

    let human = HumanOutput::new("All To-Do were removed");
    emit_success(output, "clear", &ClearReport { cleared: true }, Some(&human))
}
