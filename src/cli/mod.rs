//! Command-line interface for trak
//!
//! This module defines the CLI structure using clap derive macros.
//! Command implementations live in the `task` submodule.

use clap::{Parser, Subcommand};

use crate::error::Result;
use crate::task::Status;

mod task;

/// trak - flat-file task tracker
///
/// Keeps short text tasks with statuses and timestamps in a JSON file.
/// Each command loads the file, applies one change or query, and writes
/// it back.
#[derive(Parser, Debug)]
#[command(name = "trak")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the store file (defaults to tasks.json or the path in .trak.toml)
    #[arg(long, global = true, env = "TRAK_FILE")]
    pub file: Option<std::path::PathBuf>,

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
    /// Add a new task
    Add {
        /// Task description
        description: String,
    },

    /// Replace the description of a task
    Update {
        /// Task id
        id: u64,

        /// New description
        description: String,
    },

    /// Delete a task
    Delete {
        /// Task id
        id: u64,
    },

    /// Mark a task as in progress
    MarkInProgress {
        /// Task id
        id: u64,
    },

    /// Mark a task as done
    MarkDone {
        /// Task id
        id: u64,
    },

    /// List tasks, optionally filtered by status
    List {
        /// Status filter: todo, in-progress, done, or all
        status: Option<String>,
    },
}

impl Cli {
    /// Execute the CLI command
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Add { description } => task::run_add(task::AddOptions {
                description,
                file: self.file,
                json: self.json,
                quiet: self.quiet,
            }),
            Commands::Update { id, description } => task::run_update(task::UpdateOptions {
                id,
                description,
                file: self.file,
                json: self.json,
                quiet: self.quiet,
            }),
            Commands::Delete { id } => task::run_delete(task::DeleteOptions {
                id,
                file: self.file,
                json: self.json,
                quiet: self.quiet,
            }),
            Commands::MarkInProgress { id } => task::run_mark(task::MarkOptions {
                id,
                status: Status::InProgress,
                file: self.file,
                json: self.json,
                quiet: self.quiet,
            }),
            Commands::MarkDone { id } => task::run_mark(task::MarkOptions {
                id,
                status: Status::Done,
                file: self.file,
                json: self.json,
                quiet: self.quiet,
            }),
            Commands::List { status } => task::run_list(task::ListOptions {
                status,
                file: self.file,
                json: self.json,
                quiet: self.quiet,
            }),
        }
    }
}
