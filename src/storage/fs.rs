use super::StorageBackend;
use log::warn;
use std::fs;
use std::io::{self, ErrorKind};
use std::path::Path;

/// Plain filesystem backend.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsBackend;

impl StorageBackend for FsBackend {
    fn read_to_string(&self, path: &Path) -> io::Result<Option<String>> {
        match fs::read_to_string(path) {
            Ok(s) => Ok(Some(s)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        fs::write(path, contents)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        fs::create_dir_all(path)
    }

    /// Try `rename`, fall back to copy + remove (source and target may live
    /// on different mounts).
    fn move_file(&self, from: &Path, to: &Path) -> io::Result<()> {
        if !from.exists() {
            return Err(io::Error::new(
                ErrorKind::NotFound,
                format!("source file not found: {}", from.display()),
            ));
        }

        if fs::rename(from, to).is_err() {
            fs::copy(from, to)?;
            if let Err(e) = fs::remove_file(from) {
                warn!("copied {} but could not remove it: {e}", from.display());
            }
        }

        Ok(())
    }
}
