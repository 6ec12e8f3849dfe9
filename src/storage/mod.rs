//! Persistence capability.
//!
//! Every component that touches persisted state goes through a
//! `StorageBackend`, picked once at startup from `Config::storage`.

mod fs;
pub mod log_store;
mod memory;

pub use fs::FsBackend;
pub use log_store::LogStore;
pub use memory::MemoryBackend;

use serde::{Deserialize, Serialize};
use std::io;
use std::path::Path;
use std::sync::Arc;

pub trait StorageBackend: Send + Sync {
    /// Full contents of `path`, or `None` when it does not exist.
    fn read_to_string(&self, path: &Path) -> io::Result<Option<String>>;

    /// Create or truncate `path` with `contents`.
    fn write(&self, path: &Path, contents: &str) -> io::Result<()>;

    fn exists(&self, path: &Path) -> bool;

    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Move `from` to `to`. The target is overwritten if present.
    fn move_file(&self, from: &Path, to: &Path) -> io::Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageKind {
    #[default]
    Filesystem,
    Memory,
}

/// Backend selected by the configuration.
pub fn backend_for(kind: StorageKind) -> Arc<dyn StorageBackend> {
    match kind {
        StorageKind::Filesystem => Arc::new(FsBackend),
        StorageKind::Memory => Arc::new(MemoryBackend::default()),
    }
}
