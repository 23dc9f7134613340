//! todo list command implementation

use std::path::PathBuf;

use colored::Colorize;

use crate::cli::open_todoer;
use crate::error::Result;
use crate::output::{emit_success, HumanOutput, OutputOptions};
use crate::task::{numbered, Task};

/// Options for `todo list`
pub struct ListOptions {
    pub config_dir: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

#[derive(serde::Serialize)]
struct ListEntry<'a> {
    id: usize,
    #[serde(flatten)]
    task: &'a Task,
}

pub fn run(options: ListOptions) -> Result<()> {
    let todoer = open_todoer(options.config_dir)?;
    let tasks = todoer.list();

    let output = OutputOptions {
        json: options.json,
        quiet: options.quiet,
    };

    if options.json {
        let entries: Vec<ListEntry<'_>> = numbered(&tasks)
            .map(|(id, task)| ListEntry { id, task })
            .collect();
        return emit_success(output, "list", &entries, None);
    }

    if tasks.is_empty() {
        let mut human = HumanOutput::new("There are no tasks in the list.");
        human.push_next_step("todo add <description>");
        return emit_success(output, "list", &(), Some(&human));
    }

    if !options.quiet {
        println!("{}", render_table(&tasks));
    }

    Ok(())
}

const HEADER: &str = "ID  | Priority | Done  | Description";

fn render_table(tasks: &[Task]) -> String {
    let rule = "-".repeat(HEADER.len());
    let mut lines = vec![
        "To-Do List:".bold().to_string(),
        String::new(),
        HEADER.bold().to_string(),
        rule.clone(),
    ];

    for (id, task) in numbered(tasks) {
        let row = format!(
            "{:<4}| {:<9}| {:<6}| {}",
            id,
            format!("({})", task.priority),
            task.done,
            task.description
        );
        let row = if task.done {
            row.green()
        } else if task.priority == 1 {
            row.red()
        } else {
            row.yellow()
        };
        lines.push(row.to_string());
    }

    lines.push(rule);
    lines.join("\n")
}
