//! trak task command implementations.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::Config;
use crate::error::Result;
use crate::output::{emit_success, HumanOutput, OutputOptions};
use crate::storage::Storage;
use crate::task::{parse_filter, Status, Task, TaskStore};

pub struct AddOptions {
    pub description: String,
    pub file: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

pub struct UpdateOptions {
    pub id: u64,
    pub description: String,
    pub file: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

pub struct DeleteOptions {
    pub id: u64,
    pub file: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

pub struct MarkOptions {
    pub id: u64,
    pub status: Status,
    pub file: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

pub struct ListOptions {
    pub status: Option<String>,
    pub file: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

#[derive(Debug, Serialize, Clone)]
pub struct TaskListOutput {
    pub total: usize,
    pub tasks: Vec<Task>,
}

pub fn run_add(options: AddOptions) -> Result<()> {
    let mut store = open_store(options.file)?;
    let task = store.add(&options.description)?;

    let mut human = HumanOutput::new(format!("Task added (ID: {})", task.id));
    human.push_summary("ID", task.id.to_string());
    human.push_summary("Status", task.status.to_string());
    human.push_summary("Description", task.description.clone());
    human.push_next_step(format!("trak mark-in-progress {}", task.id));

    emit_success(
        OutputOptions {
            json: options.json,
            quiet: options.quiet,
        },
        "add",
        &task,
        Some(&human),
    )
}

pub fn run_update(options: UpdateOptions) -> Result<()> {
    let mut store = open_store(options.file)?;
    let task = store.update(options.id, &options.description)?;

    let mut human = HumanOutput::new(format!("Task {} updated", task.id));
    human.push_summary("Description", task.description.clone());

    emit_success(
        OutputOptions {
            json: options.json,
            quiet: options.quiet,
        },
        "update",
        &task,
        Some(&human),
    )
}

pub fn run_delete(options: DeleteOptions) -> Result<()> {
    let mut store = open_store(options.file)?;
    let task = store.delete(options.id)?;

    let mut human = HumanOutput::new(format!("Task {} deleted", task.id));
    human.push_summary("Description", task.description.clone());

    emit_success(
        OutputOptions {
            json: options.json,
            quiet: options.quiet,
        },
        "delete",
        &task,
        Some(&human),
    )
}

pub fn run_mark(options: MarkOptions) -> Result<()> {
    let mut store = open_store(options.file)?;
    let task = store.mark(options.id, options.status)?;

    let mut human = HumanOutput::new(format!("Task {} marked {}", task.id, task.status));
    human.push_summary("Status", task.status.to_string());
    human.push_summary("Description", task.description.clone());

    emit_success(
        OutputOptions {
            json: options.json,
            quiet: options.quiet,
        },
        &format!("mark-{}", task.status),
        &task,
        Some(&human),
    )
}

pub fn run_list(options: ListOptions) -> Result<()> {
    let filter = parse_filter(options.status.as_deref())?;
    let store = open_store(options.file)?;
    let tasks = store.list(filter);

    let output = TaskListOutput {
        total: tasks.len(),
        tasks: tasks.clone(),
    };

    let mut human = HumanOutput::new("Tasks");
    human.push_summary("Total", tasks.len().to_string());
    if let Some(status) = filter {
        human.push_summary("Filter", status.to_string());
    }
    if tasks.is_empty() {
        human.push_detail("No tasks found.".to_string());
    }
    for task in &tasks {
        human.push_detail(format!(
            "[{}] {} {} (updated {})",
            task.status,
            task.id,
            task.description,
            task.updated_at.format("%Y-%m-%d %H:%M:%S"),
        ));
    }

    emit_success(
        OutputOptions {
            json: options.json,
            quiet: options.quiet,
        },
        "list",
        &output,
        Some(&human),
    )
}

/// Resolve the store file and load the task set.
///
/// Resolution order: `--file` / `TRAK_FILE`, then `.trak.toml` in the
/// working directory, then the default `tasks.json`.
fn open_store(file: Option<PathBuf>) -> Result<TaskStore> {
    let store_file = match file {
        Some(path) => path,
        None => Config::load_from_dir(Path::new("."))?.store.file,
    };
    TaskStore::open(Storage::new(store_file))
}
