//! Task records and the task store.
//!
//! Tasks are short text items with a status and timestamps, held as an
//! ordered list and persisted as a whole through [`Storage`]. Every
//! mutating operation rewrites the store file before returning, so the
//! in-memory list and the file never drift within a command.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::storage::Storage;

/// Status of a task
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    Todo,
    InProgress,
    Done,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Todo => "todo",
            Status::InProgress => "in-progress",
            Status::Done => "done",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim() {
            "todo" => Ok(Status::Todo),
            "in-progress" => Ok(Status::InProgress),
            "done" => Ok(Status::Done),
            other => Err(Error::InvalidStatus(other.to_string())),
        }
    }
}

/// Parse an optional listing filter.
///
/// `all` (or no token) means no filter; any other token must be a valid
/// status.
pub fn parse_filter(value: Option<&str>) -> Result<Option<Status>> {
    match value {
        None => Ok(None),
        Some(token) if token.trim() == "all" => Ok(None),
        Some(token) => token.parse().map(Some),
    }
}

/// A single tracked task
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    pub id: u64,
    pub description: String,
    pub status: Status,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The full task collection bound to its store file
#[derive(Debug)]
pub struct TaskStore {
    storage: Storage,
    tasks: Vec<Task>,
}

impl TaskStore {
    /// Load the task set from the given storage
    pub fn open(storage: Storage) -> Result<Self> {
        let tasks = storage.load_tasks()?;
        Ok(Self { storage, tasks })
    }

    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    /// Add a task with a fresh id, `todo` status, and matching
    /// creation/update timestamps
    pub fn add(&mut self, description: &str) -> Result<Task> {
        let description = description.trim();
        if description.is_empty() {
            return Err(Error::EmptyDescription);
        }

        let now = Utc::now();
        let task = Task {
            id: self.next_id(),
            description: description.to_string(),
            status: Status::Todo,
            created_at: now,
            updated_at: now,
        };
        self.tasks.push(task.clone());
        self.persist()?;
        Ok(task)
    }

    /// Replace the description of an existing task
    pub fn update(&mut self, id: u64, description: &str) -> Result<Task> {
        let description = description.trim();
        if description.is_empty() {
            return Err(Error::EmptyDescription);
        }

        let task = self.find_mut(id)?;
        task.description = description.to_string();
        task.updated_at = Utc::now();
        let updated = task.clone();
        self.persist()?;
        Ok(updated)
    }

    /// Remove a task, returning the removed record
    pub fn delete(&mut self, id: u64) -> Result<Task> {
        let index = self
            .tasks
            .iter()
            .position(|task| task.id == id)
            .ok_or(Error::TaskNotFound(id))?;
        let removed = self.tasks.remove(index);
        self.persist()?;
        Ok(removed)
    }

    /// Set the status of an existing task
    pub fn mark(&mut self, id: u64, status: Status) -> Result<Task> {
        let task = self.find_mut(id)?;
        task.status = status;
        task.updated_at = Utc::now();
        let updated = task.clone();
        self.persist()?;
        Ok(updated)
    }

    /// All tasks, or only those with the given status, in insertion order
    pub fn list(&self, filter: Option<Status>) -> Vec<Task> {
        self.tasks
            .iter()
            .filter(|task| filter.map_or(true, |status| task.status == status))
            .cloned()
            .collect()
    }

    pub fn get(&self, id: u64) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    // Next id is one past the highest id present. Ids below the maximum
    // are never handed out again, so deletion cannot cause reuse.
    fn next_id(&self) -> u64 {
        self.tasks.iter().map(|task| task.id).max().unwrap_or(0) + 1
    }

    fn find_mut(&mut self, id: u64) -> Result<&mut Task> {
        self.tasks
            .iter_mut()
            .find(|task| task.id == id)
            .ok_or(Error::TaskNotFound(id))
    }

    fn persist(&self) -> Result<()> {
        self.storage.save_tasks(&self.tasks)
    }
}
