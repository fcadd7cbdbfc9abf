//! trak - Task Tracker Library
//!
//! This library provides the core functionality for the trak CLI tool:
//! short text tasks with statuses and timestamps, kept in a single JSON
//! file. Each invocation loads the whole task set, applies one command,
//! and writes the file back.
//!
//! # Core Concepts
//!
//! - **Tasks**: text items with a status (`todo`, `in-progress`, `done`)
//!   and creation/update timestamps
//! - **Store**: the full task collection, held in insertion order and
//!   persisted as a whole
//! - **Store file**: a flat JSON file, rewritten atomically on every
//!   mutation
//!
//! # Module Organization
//!
//! - `cli`: command-line interface using clap
//! - `config`: configuration loading from `.trak.toml`
//! - `error`: error types and result aliases
//! - `output`: human and JSON output formatting
//! - `storage`: store file resolution and atomic JSON I/O
//! - `task`: task records, statuses, and the task store

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod storage;
pub mod task;

pub use error::{Error, Result};
