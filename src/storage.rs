//! Storage layer for trak
//!
//! The whole task set lives in a single JSON file. Loads read the file
//! entirely into memory; saves rewrite it through a temp file + rename
//! so a partial write never replaces a good store.

use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::Result;
use crate::task::Task;

/// Default store file name when neither flag, env, nor config names one
pub const DEFAULT_STORE_FILE: &str = "tasks.json";

/// Storage manager for the task store file
#[derive(Debug, Clone)]
pub struct Storage {
    store_file: PathBuf,
}

impl Storage {
    pub fn new(store_file: PathBuf) -> Self {
        Self { store_file }
    }

    /// Path to the store file
    pub fn store_file(&self) -> &Path {
        &self.store_file
    }

    /// Load the full task set.
    ///
    /// A missing store file is an empty store; any other read or decode
    /// failure is surfaced to the caller.
    pub fn load_tasks(&self) -> Result<Vec<Task>> {
        match fs::read_to_string(&self.store_file) {
            Ok(content) => {
                let tasks: Vec<Task> = serde_json::from_str(&content)?;
                debug!(
                    path = %self.store_file.display(),
                    count = tasks.len(),
                    "loaded store"
                );
                Ok(tasks)
            }
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(err) => Err(err.into()),
        }
    }

    /// Write the full task set back to the store file
    pub fn save_tasks(&self, tasks: &[Task]) -> Result<()> {
        let json = serde_json::to_string_pretty(tasks)?;
        self.write_atomic(json.as_bytes())?;
        debug!(
            path = %self.store_file.display(),
            count = tasks.len(),
            "saved store"
        );
        Ok(())
    }

    /// Write the store file atomically using temp file + rename.
    ///
    /// The file is either fully written or untouched.
    fn write_atomic(&self, data: &[u8]) -> Result<()> {
        if let Some(parent) = self.store_file.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let temp_path = self.store_file.with_extension("tmp");
        let mut file = File::create(&temp_path)?;
        file.write_all(data)?;
        file.sync_all()?;
        fs::rename(&temp_path, &self.store_file)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::Status;
    use chrono::Utc;
    use tempfile::TempDir;

    fn sample_task(id: u64) -> Task {
        let now = Utc::now();
        Task {
            id,
            description: format!("task {id}"),
            status: Status::Todo,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn missing_store_file_is_empty() {
        let dir = TempDir::new().expect("tempdir");
        let storage = Storage::new(dir.path().join("tasks.json"));
        assert!(storage.load_tasks().expect("load").is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = TempDir::new().expect("tempdir");
        let storage = Storage::new(dir.path().join("tasks.json"));

        let tasks = vec![sample_task(1), sample_task(2)];
        storage.save_tasks(&tasks).expect("save");

        let loaded = storage.load_tasks().expect("load");
        assert_eq!(loaded, tasks);
    }

    #[test]
    fn save_creates_missing_parent_directories() {
        let dir = TempDir::new().expect("tempdir");
        let storage = Storage::new(dir.path().join("nested").join("tasks.json"));

        storage.save_tasks(&[sample_task(1)]).expect("save");
        assert!(storage.store_file().exists());
    }

    #[test]
    fn corrupt_store_file_is_an_error() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("tasks.json");
        fs::write(&path, "{not json").expect("write corrupt file");

        let storage = Storage::new(path);
        assert!(storage.load_tasks().is_err());
    }
}
