use crate::errors::{AppError, AppResult};
use crate::storage::StorageBackend;
use log::info;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Directory of captured clips, named `vlog_<epoch-ms>.mp4`.
pub struct VlogLibrary {
    backend: Arc<dyn StorageBackend>,
    dir: PathBuf,
}

impl VlogLibrary {
    pub fn new(backend: Arc<dyn StorageBackend>, dir: impl Into<PathBuf>) -> Self {
        Self {
            backend,
            dir: dir.into(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Create the clip directory if missing. Returns `true` when created.
    pub fn ensure_dir(&self) -> AppResult<bool> {
        if self.backend.exists(&self.dir) {
            return Ok(false);
        }
        self.backend.create_dir_all(&self.dir)?;
        info!("vlog directory created: {}", self.dir.display());
        Ok(true)
    }

    pub fn clip_path(&self, captured_at_ms: i64) -> PathBuf {
        self.dir.join(format!("vlog_{captured_at_ms}.mp4"))
    }

    /// Move a freshly captured clip into the library.
    pub fn import_clip(&self, source: &Path, captured_at_ms: i64) -> AppResult<PathBuf> {
        self.ensure_dir()?;
        let target = self.clip_path(captured_at_ms);

        self.backend
            .move_file(source, &target)
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => AppError::ClipNotFound(source.to_path_buf()),
                _ => AppError::from(e),
            })?;

        info!("clip {} stored as {}", source.display(), target.display());
        Ok(target)
    }
}
