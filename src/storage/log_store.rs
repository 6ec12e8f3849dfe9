//! Append-only record log kept as one pretty-printed JSON array.
//!
//! Every mutation is read-all → append → write-all. Reads are lenient: a
//! missing or malformed file is an empty log. Writes propagate their errors.

use super::StorageBackend;
use crate::errors::{AppError, AppResult};
use crate::models::Record;
use log::{debug, warn};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

pub struct LogStore {
    backend: Arc<dyn StorageBackend>,
    path: PathBuf,
    // held across the read-modify-write of `append`
    writer: Mutex<()>,
}

impl LogStore {
    pub fn new(backend: Arc<dyn StorageBackend>, path: impl Into<PathBuf>) -> Self {
        Self {
            backend,
            path: path.into(),
            writer: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Every stored record in append order.
    pub fn load_all(&self) -> Vec<Record> {
        let content = match self.backend.read_to_string(&self.path) {
            Ok(Some(c)) => c,
            Ok(None) => {
                debug!("log file {} not found, starting empty", self.path.display());
                return Vec::new();
            }
            Err(e) => {
                warn!("cannot read log file {}: {e}", self.path.display());
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<Record>>(&content) {
            Ok(records) => records,
            Err(e) => {
                warn!(
                    "log file {} is not a valid record array, treating as empty: {e}",
                    self.path.display()
                );
                Vec::new()
            }
        }
    }

    /// Replace the whole log with `records`.
    pub fn save_all(&self, records: &[Record]) -> AppResult<()> {
        let json = serde_json::to_string_pretty(records)?;
        self.backend.write(&self.path, &json).map_err(|e| {
            AppError::from(io::Error::new(
                e.kind(),
                format!("cannot write log file {}: {e}", self.path.display()),
            ))
        })?;
        debug!("saved {} records to {}", records.len(), self.path.display());
        Ok(())
    }

    pub fn append(&self, record: Record) -> AppResult<()> {
        let _guard = self
            .writer
            .lock()
            .map_err(|_| AppError::from(io::Error::other("log writer lock poisoned")))?;

        let mut records = self.load_all();
        records.push(record);
        self.save_all(&records)
    }

    /// Write an empty log if none exists yet. Returns `true` when created.
    pub fn ensure_initialized(&self) -> AppResult<bool> {
        if self.backend.exists(&self.path) {
            return Ok(false);
        }
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            self.backend.create_dir_all(parent)?;
        }
        self.save_all(&[])?;
        Ok(true)
    }
}
