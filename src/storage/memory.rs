use super::StorageBackend;
use std::collections::HashMap;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

/// In-memory backend for hosts without a writable filesystem (and for tests).
/// Directories are implicit; nothing outlives the process.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    files: Mutex<HashMap<PathBuf, String>>,
}

impl MemoryBackend {
    fn files(&self) -> io::Result<MutexGuard<'_, HashMap<PathBuf, String>>> {
        self.files
            .lock()
            .map_err(|_| io::Error::other("memory storage lock poisoned"))
    }

    /// Paths currently stored, sorted.
    pub fn paths(&self) -> Vec<PathBuf> {
        let mut out: Vec<PathBuf> = self
            .files()
            .map(|f| f.keys().cloned().collect())
            .unwrap_or_default();
        out.sort();
        out
    }
}

impl StorageBackend for MemoryBackend {
    fn read_to_string(&self, path: &Path) -> io::Result<Option<String>> {
        Ok(self.files()?.get(path).cloned())
    }

    fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        self.files()?.insert(path.to_path_buf(), contents.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.files()
            .map(|f| f.keys().any(|p| p == path || p.starts_with(path)))
            .unwrap_or(false)
    }

    fn create_dir_all(&self, _path: &Path) -> io::Result<()> {
        Ok(())
    }

    fn move_file(&self, from: &Path, to: &Path) -> io::Result<()> {
        let mut files = self.files()?;
        let contents = files.remove(from).ok_or_else(|| {
            io::Error::new(
                ErrorKind::NotFound,
                format!("source file not found: {}", from.display()),
            )
        })?;
        files.insert(to.to_path_buf(), contents);
        Ok(())
    }
}
